use crate::{
    core::{ CardRow, TableRecord },
    pinyin::{ format_meaning, format_syllable },
};

/// Decide whether a record becomes a card and shape its display fields.
/// Rejected rows are skipped silently: the table carries legacy and
/// unattested rows by design, and those are not errors.
pub fn validate_record(record: &TableRecord) -> Option<CardRow> {
    // Only an explicit non-"yes" excludes; an absent or empty Exists does not.
    if let Some(exists) = record.exists.as_deref() {
        let exists = exists.trim();
        if !exists.is_empty() && !exists.eq_ignore_ascii_case("yes") {
            return None;
        }
    }

    let audio = record.audio.as_deref().unwrap_or("").trim();
    if audio.is_empty() {
        return None;
    }

    let full_pinyin = record.full_pinyin.as_deref().unwrap_or("").trim();

    Some(CardRow {
        pinyin: format_syllable(full_pinyin),
        audio_file: audio.to_string(),
        audio_ref: format!("[sound:{audio}]"),
        characters: record.characters.clone().unwrap_or_default(),
        meaning: format_meaning(record.meaning.as_deref().unwrap_or("")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(exists: Option<&str>, audio: Option<&str>) -> TableRecord {
        TableRecord {
            full_pinyin: Some("ma1".to_string()),
            exists: exists.map(str::to_string),
            characters: Some("妈".to_string()),
            meaning: Some("mother".to_string()),
            audio: audio.map(str::to_string),
            ..TableRecord::default()
        }
    }

    #[test]
    fn explicit_non_yes_excludes_in_any_case() {
        assert!(validate_record(&record(Some("No"), Some("ma1.mp3"))).is_none());
        assert!(validate_record(&record(Some("NO"), Some("ma1.mp3"))).is_none());
        assert!(validate_record(&record(Some("maybe"), Some("ma1.mp3"))).is_none());
    }

    #[test]
    fn absent_or_empty_exists_includes() {
        assert!(validate_record(&record(None, Some("ma1.mp3"))).is_some());
        assert!(validate_record(&record(Some(""), Some("ma1.mp3"))).is_some());
        assert!(validate_record(&record(Some("YES"), Some("ma1.mp3"))).is_some());
    }

    #[test]
    fn blank_audio_excludes_regardless_of_exists() {
        assert!(validate_record(&record(Some("Yes"), Some(""))).is_none());
        assert!(validate_record(&record(Some("Yes"), Some("   "))).is_none());
        assert!(validate_record(&record(None, None)).is_none());
    }

    #[test]
    fn accepted_row_is_fully_formatted() {
        let row = validate_record(&record(Some("Yes"), Some(" ma1.mp3 "))).unwrap();

        assert_eq!(row.pinyin.plain, "mā");
        assert_eq!(row.pinyin.colored, "m<span style=\"color: #e33737\">ā</span>");
        assert_eq!(row.audio_file, "ma1.mp3");
        assert_eq!(row.audio_ref, "[sound:ma1.mp3]");
        assert_eq!(row.characters, "妈");
        assert_eq!(row.meaning, "mother");
    }
}
