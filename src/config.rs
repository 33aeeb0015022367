/// Runtime configuration of the bot.
#[derive(Clone, Debug)]
pub struct MarvinConfig {
    /// Issues have to carry this label to opt into status management.
    pub marker_label: String,
}

impl Default for MarvinConfig {
    fn default() -> Self {
        Self {
            marker_label: "marvin".to_string(),
        }
    }
}
