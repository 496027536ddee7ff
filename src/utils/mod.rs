pub mod colors;
pub mod formatting;
pub mod input;
pub mod table;

pub use formatting::{Style, format_number, format_percent};
