use std::collections::HashMap;

use crossterm::style::{Color, Stylize};

/// Colors handed out to log origins, in order.
pub const PALETTE: [Color; 6] = [Color::Green, Color::Yellow, Color::Blue, Color::Magenta, Color::Cyan, Color::Red];

pub fn paint(text: &str, index: usize) -> String {
    text.with(PALETTE[index % PALETTE.len()]).bold().to_string()
}

/// Gives each key a palette slot the first time it is seen and the same
/// slot afterwards. The n-th distinct key gets slot `n mod PALETTE.len()`.
#[derive(Debug, Default)]
pub struct ColorAssigner {
    assigned: HashMap<String, usize>,
}

impl ColorAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, key: &str) -> usize {
        if let Some(&index) = self.assigned.get(key) {
            return index;
        }
        let index = self.assigned.len() % PALETTE.len();
        self.assigned.insert(key.to_string(), index);
        index
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}
