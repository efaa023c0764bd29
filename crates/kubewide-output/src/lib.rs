pub mod age;
pub mod log_format;
pub mod palette;
pub mod selector;
pub mod table;

pub use log_format::LogFormatter;
pub use palette::{ColorAssigner, PALETTE};
pub use selector::{FuzzySelector, Selector};
