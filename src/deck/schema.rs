use crate::core::CardRow;

// Stable genanki identifiers carried over from the first release of the
// deck set. Changing them would break re-imports for existing users.
pub const PINYIN_TO_AUDIO_MODEL_ID: i64 = 1589547384;
pub const AUDIO_TO_PINYIN_MODEL_ID: i64 = 1589547385;
pub const PINYIN_TO_AUDIO_DECK_ID: i64 = 1589547386;
pub const AUDIO_TO_PINYIN_DECK_ID: i64 = 1589547387;

pub const SHARED_CSS: &str = "
.card {
    font-family: Arial, sans-serif;
    font-size: 20px;
    text-align: center;
    color: black;
    background-color: white;
    padding: 20px;
}
.pinyin {
    font-size: 40px;
    margin: 20px 0;
}
.characters {
    font-size: 48px;
    font-weight: bold;
    margin: 20px 0;
}
.meaning {
    font-size: 24px;
    color: #666;
    margin: 20px 0;
    white-space: pre-line;
}
";

/// Which of the four shared display fields leads the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    PinyinFirst,
    AudioFirst,
}

impl FieldOrder {
    /// Lay out a row's values in this deck's field order.
    pub fn arrange(&self, row: &CardRow) -> [String; 4] {
        let CardRow { pinyin, audio_ref, characters, meaning, .. } = row;
        match self {
            FieldOrder::PinyinFirst => [
                pinyin.colored.clone(),
                audio_ref.clone(),
                characters.clone(),
                meaning.clone(),
            ],
            FieldOrder::AudioFirst => [
                audio_ref.clone(),
                pinyin.colored.clone(),
                characters.clone(),
                meaning.clone(),
            ],
        }
    }
}

/// Everything the deck builder needs to construct one deck.
#[derive(Debug, Clone)]
pub struct DeckSchema {
    pub deck_id: i64,
    pub model_id: i64,
    pub deck_name: &'static str,
    pub model_name: &'static str,
    pub field_order: FieldOrder,
    pub field_names: [&'static str; 4],
    pub question_format: &'static str,
    pub answer_format: &'static str,
}

pub fn pinyin_to_audio() -> DeckSchema {
    DeckSchema {
        deck_id: PINYIN_TO_AUDIO_DECK_ID,
        model_id: PINYIN_TO_AUDIO_MODEL_ID,
        deck_name: "Mandarin Pinyin to Audio",
        model_name: "Pinyin to Audio",
        field_order: FieldOrder::PinyinFirst,
        field_names: ["Pinyin", "Audio", "Characters", "Meaning"],
        question_format: "<div class=\"pinyin\">{{Pinyin}}</div>",
        answer_format: "<div class=\"pinyin\">{{Pinyin}}</div>\n\
                        {{Audio}}<br>\n\
                        <div class=\"characters\">{{Characters}}</div>\n\
                        <hr>\n\
                        <div class=\"meaning\">{{Meaning}}</div>",
    }
}

pub fn audio_to_pinyin() -> DeckSchema {
    DeckSchema {
        deck_id: AUDIO_TO_PINYIN_DECK_ID,
        model_id: AUDIO_TO_PINYIN_MODEL_ID,
        deck_name: "Mandarin Audio to Pinyin",
        model_name: "Audio to Pinyin",
        field_order: FieldOrder::AudioFirst,
        field_names: ["Audio", "Pinyin", "Characters", "Meaning"],
        question_format: "{{Audio}}",
        answer_format: "{{Audio}}<br>\n\
                        <div class=\"pinyin\">{{Pinyin}}</div>\n\
                        <div class=\"characters\">{{Characters}}</div>\n\
                        <hr>\n\
                        <div class=\"meaning\">{{Meaning}}</div>",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PinyinText;

    fn row() -> CardRow {
        CardRow {
            pinyin: PinyinText { plain: "mā".to_string(), colored: "m<b>ā</b>".to_string() },
            audio_file: "ma1.mp3".to_string(),
            audio_ref: "[sound:ma1.mp3]".to_string(),
            characters: "妈".to_string(),
            meaning: "mother".to_string(),
        }
    }

    #[test]
    fn field_orders_are_swapped_between_decks() {
        let row = row();

        assert_eq!(
            FieldOrder::PinyinFirst.arrange(&row),
            ["m<b>ā</b>", "[sound:ma1.mp3]", "妈", "mother"].map(String::from)
        );
        assert_eq!(
            FieldOrder::AudioFirst.arrange(&row),
            ["[sound:ma1.mp3]", "m<b>ā</b>", "妈", "mother"].map(String::from)
        );
    }
}
