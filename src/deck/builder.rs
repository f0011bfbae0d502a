use std::{
    fs,
    path::{ Path, PathBuf },
};

use genanki_rs::{ Deck, Field, Model, Note, Package, Template };

use super::schema::{ DeckSchema, SHARED_CSS };
use crate::core::PindeckError;

/// Seam to the external deck packager. The pipeline only needs these four
/// operations; everything about the on-disk archive format lives behind them.
pub trait DeckBuilder {
    type Deck;

    fn construct_deck(&mut self, schema: &DeckSchema) -> Self::Deck;

    fn add_card(&mut self, deck: &mut Self::Deck, fields: [String; 4])
        -> Result<(), PindeckError>;

    fn add_media(
        &mut self,
        deck: &mut Self::Deck,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<(), PindeckError>;

    /// Serialize the deck into `out_dir`, returning the written path.
    fn save(&mut self, deck: Self::Deck, out_dir: &Path) -> Result<PathBuf, PindeckError>;
}

/// Production builder backed by genanki-rs, producing .apkg archives.
pub struct GenankiBuilder;

pub struct GenankiDeck {
    model: Model,
    deck: Deck,
    deck_name: &'static str,
    media: Vec<(String, Vec<u8>)>,
}

impl DeckBuilder for GenankiBuilder {
    type Deck = GenankiDeck;

    fn construct_deck(&mut self, schema: &DeckSchema) -> GenankiDeck {
        let fields = schema.field_names.iter().map(|name| Field::new(name)).collect();
        let templates = vec![
            Template::new(schema.model_name)
                .qfmt(schema.question_format)
                .afmt(schema.answer_format),
        ];

        let model =
            Model::new(schema.model_id, schema.model_name, fields, templates).css(SHARED_CSS);
        let deck = Deck::new(schema.deck_id, schema.deck_name, "");

        GenankiDeck { model, deck, deck_name: schema.deck_name, media: Vec::new() }
    }

    fn add_card(
        &mut self,
        deck: &mut GenankiDeck,
        fields: [String; 4],
    ) -> Result<(), PindeckError> {
        let values: Vec<&str> = fields.iter().map(String::as_str).collect();
        let note = Note::new(deck.model.clone(), values)
            .map_err(|e| PindeckError::DeckBuilder(e.to_string()))?;
        deck.deck.add_note(note);
        Ok(())
    }

    fn add_media(
        &mut self,
        deck: &mut GenankiDeck,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<(), PindeckError> {
        deck.media.push((filename.to_string(), bytes));
        Ok(())
    }

    fn save(&mut self, deck: GenankiDeck, out_dir: &Path) -> Result<PathBuf, PindeckError> {
        // genanki takes media as paths on disk, so stage the attached bytes
        // in a temp directory for the duration of the write.
        let staging = tempfile::tempdir()?;
        let mut media_paths = Vec::new();
        for (filename, bytes) in &deck.media {
            let path = staging.path().join(filename);
            fs::write(&path, bytes)?;
            media_paths.push(path);
        }
        let media_refs: Vec<&str> =
            media_paths.iter().filter_map(|path| path.to_str()).collect();

        let out_path = out_dir.join(format!("{}.apkg", deck.deck_name.replace(' ', "-")));
        let out_str = out_path
            .to_str()
            .ok_or_else(|| PindeckError::Custom("non-UTF-8 output path".to_string()))?;

        let mut package = Package::new(vec![deck.deck], media_refs)
            .map_err(|e| PindeckError::DeckBuilder(e.to_string()))?;
        package.write_to_file(out_str).map_err(|e| PindeckError::DeckBuilder(e.to_string()))?;

        Ok(out_path)
    }
}
