pub mod collate;
pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::format_money;
pub use formatting::format_quantity;
