use kubewide_core::LogLine;

use crate::palette::{paint, ColorAssigner};

/// Default starting width of the origin column.
pub const DEFAULT_KEY_WIDTH: usize = 35;

/// Turns multiplexed log lines into `<origin> | <message>` rows.
///
/// Owned by the single consumer that prints lines, so the color map and the
/// column width need no locking. The width starts at a minimum and only
/// grows, which means rows printed before a longer key appeared keep their
/// narrower padding.
#[derive(Debug)]
pub struct LogFormatter {
    colors: Option<ColorAssigner>,
    width: usize,
}

impl LogFormatter {
    pub fn new(min_width: usize, color: bool) -> Self {
        Self { colors: color.then(ColorAssigner::new), width: min_width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn format(&mut self, line: &LogLine) -> String {
        let key = line.origin_key();
        self.width = self.width.max(key.chars().count());

        let padded = format!("{key:<width$}", width = self.width);
        let label = match self.colors.as_mut() {
            Some(colors) => paint(&padded, colors.assign(&key)),
            None => padded,
        };

        format!("{label} | {}", line.message)
    }
}

impl Default for LogFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_WIDTH, true)
    }
}
