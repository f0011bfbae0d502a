pub mod config;
pub mod core;
pub mod deck;
pub mod pinyin;
pub mod table;
pub mod validate;

use std::path::PathBuf;

pub use crate::core::PindeckError;
use crate::{ config::Config, deck::GenankiBuilder };

/// Run the full generation: read the table, assemble both decks, write the
/// archives. Returns the written archive paths.
pub fn run(config: &Config) -> Result<Vec<PathBuf>, PindeckError> {
    let records = table::read_table(&config.table_path)?;
    let mut builder = GenankiBuilder;
    deck::generate(&mut builder, &records, &config.audio_dir, &config.output_dir)
}
