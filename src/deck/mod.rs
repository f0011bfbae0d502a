pub mod assembler;
pub mod builder;
pub mod schema;

pub use assembler::generate;
pub use builder::{ DeckBuilder, GenankiBuilder };
pub use schema::{ DeckSchema, FieldOrder };
