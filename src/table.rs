use std::{ fs, path::Path };

use crate::core::{ PindeckError, TableRecord };

const DELIMITER: char = ';';

/// Read the semicolon-delimited lookup table. The first line names the
/// columns; unknown columns (e.g. the reserved Reference column) are
/// ignored, and short rows leave their missing fields unset.
pub fn read_table(path: &Path) -> Result<Vec<TableRecord>, PindeckError> {
    if !path.exists() {
        return Err(PindeckError::MissingTable(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let mut lines = content.lines();

    let header: Vec<&str> = match lines.next() {
        Some(line) => line.split(DELIMITER).map(str::trim).collect(),
        None => return Ok(Vec::new()),
    };

    let records = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_record(&header, line))
        .collect();

    Ok(records)
}

fn parse_record(header: &[&str], line: &str) -> TableRecord {
    let mut record = TableRecord::default();

    for (name, value) in header.iter().zip(line.split(DELIMITER)) {
        let value = value.to_string();
        match *name {
            "Syllable" => record.syllable = Some(value),
            "Tone" => record.tone = Some(value),
            "FullPinyin" => record.full_pinyin = Some(value),
            "Exists" => record.exists = Some(value),
            "Character(s)" => record.characters = Some(value),
            "Meaning" => record.meaning = Some(value),
            "Audio" => record.audio = Some(value),
            _ => {}
        }
    }

    record
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_table(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_known_columns_and_ignores_reference() {
        let file = write_table(
            "Syllable;Tone;FullPinyin;Exists;Character(s);Meaning;Audio;Reference\n\
             ma;1;ma1;Yes;妈;mother;ma1.mp3;row 12\n",
        );

        let records = read_table(file.path()).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.full_pinyin.as_deref(), Some("ma1"));
        assert_eq!(record.exists.as_deref(), Some("Yes"));
        assert_eq!(record.characters.as_deref(), Some("妈"));
        assert_eq!(record.audio.as_deref(), Some("ma1.mp3"));
    }

    #[test]
    fn short_rows_leave_fields_unset() {
        let file = write_table("FullPinyin;Exists;Audio\nma1\n");

        let records = read_table(file.path()).unwrap();
        assert_eq!(records[0].full_pinyin.as_deref(), Some("ma1"));
        assert!(records[0].exists.is_none());
        assert!(records[0].audio.is_none());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let file = write_table("FullPinyin;Audio\n\nma1;ma1.mp3\n\n");

        let records = read_table(file.path()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn missing_table_is_a_configuration_error() {
        let result = read_table(Path::new("definitely/not/here.csv"));
        assert!(matches!(result, Err(PindeckError::MissingTable(_))));
    }
}
