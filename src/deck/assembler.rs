use std::{
    collections::HashSet,
    fs,
    path::{ Path, PathBuf },
};

use super::{
    builder::DeckBuilder,
    schema::{ self, DeckSchema },
};
use crate::{
    core::{ PindeckError, TableRecord },
    validate::validate_record,
};

/// Build one deck from the full record list: cards in accepted-row order,
/// each referenced audio file read from disk and attached at most once.
pub fn assemble_deck<B: DeckBuilder>(
    builder: &mut B,
    schema: &DeckSchema,
    records: &[TableRecord],
    audio_dir: &Path,
) -> Result<(B::Deck, usize), PindeckError> {
    let mut deck = builder.construct_deck(schema);
    let mut attached: HashSet<String> = HashSet::new();
    let mut cards = 0usize;

    for record in records {
        let row = match validate_record(record) {
            Some(row) => row,
            None => continue,
        };

        builder.add_card(&mut deck, schema.field_order.arrange(&row))?;
        cards += 1;

        if !attached.contains(&row.audio_file) {
            let bytes = read_audio(audio_dir, &row.audio_file)?;
            builder.add_media(&mut deck, &row.audio_file, bytes)?;
            attached.insert(row.audio_file);
        }
    }

    Ok((deck, cards))
}

fn read_audio(audio_dir: &Path, filename: &str) -> Result<Vec<u8>, PindeckError> {
    // A deck with silent cards is not usable, so a missing clip aborts the run.
    fs::read(audio_dir.join(filename))
        .map_err(|_| PindeckError::MissingAudio(filename.to_string()))
}

/// Assemble and save both decks, printing one confirmation line per deck.
/// The decks share record order and media but keep independent dedup sets,
/// so a clip reused across rows is read once per deck.
pub fn generate<B: DeckBuilder>(
    builder: &mut B,
    records: &[TableRecord],
    audio_dir: &Path,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, PindeckError> {
    let mut written = Vec::new();

    for deck_schema in [schema::pinyin_to_audio(), schema::audio_to_pinyin()] {
        let (deck, cards) = assemble_deck(builder, &deck_schema, records, audio_dir)?;
        let path = builder.save(deck, out_dir)?;
        println!("Created '{}' with {} cards: {}", deck_schema.deck_name, cards, path.display());
        written.push(path);
    }

    Ok(written)
}
