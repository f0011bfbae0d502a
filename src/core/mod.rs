pub mod errors;
pub mod models;

pub use errors::PindeckError;
pub use models::{ CardRow, PinyinText, TableRecord };
