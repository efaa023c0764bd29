use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogsConfig {
    /// Starting width of the `pod/container` column. Grows with longer keys.
    #[serde(alias = "min-key-width")]
    pub min_key_width: usize,
    pub color: bool,
    /// Lines of history to request per container. `0` means the whole log.
    #[serde(alias = "tail-lines")]
    pub tail_lines: i64,
    pub timestamps: bool,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self { min_key_width: 35, color: true, tail_lines: 0, timestamps: false }
    }
}

impl LogsConfig {
    pub fn tail(&self) -> Option<i64> {
        (self.tail_lines > 0).then_some(self.tail_lines)
    }
}
