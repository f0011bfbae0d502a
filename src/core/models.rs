/// One record from the lookup table, keyed by the documented column names.
/// A field is `None` when the column was absent or the row was short.
#[derive(Debug, Clone, Default)]
pub struct TableRecord {
    pub syllable: Option<String>,     // Base syllable without the tone digit
    pub tone: Option<String>,         // Tone digit as written in the table
    pub full_pinyin: Option<String>,  // Tone-numbered romanization, e.g. "hao3"
    pub exists: Option<String>,       // "Yes" when the syllable+tone is attested
    pub characters: Option<String>,
    pub meaning: Option<String>,      // Slash-delimited alternatives
    pub audio: Option<String>,        // Clip filename inside the audio directory
}

/// An accented syllable in both of its display forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinyinText {
    pub plain: String,
    /// Same text, with only the marked vowel wrapped in its tone color.
    pub colored: String,
}

impl PinyinText {
    /// Both forms identical to the given text, untouched. Used for neutral
    /// tones and for every degrade-to-plain-text path.
    pub fn verbatim(text: &str) -> Self {
        PinyinText { plain: text.to_string(), colored: text.to_string() }
    }
}

/// Display content for one accepted row, shared by both decks.
#[derive(Debug, Clone)]
pub struct CardRow {
    pub pinyin: PinyinText,
    pub audio_file: String,
    pub audio_ref: String,
    pub characters: String,
    pub meaning: String,
}
