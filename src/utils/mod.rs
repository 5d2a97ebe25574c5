pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod prompt;
pub mod table;

pub use formatting::format_money;
