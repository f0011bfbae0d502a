/// Join slash-delimited alternative meanings with line breaks for card
/// display. Segment order is kept and repeats are not collapsed.
pub fn format_meaning(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    raw.split('/').map(str::trim).collect::<Vec<_>>().join("<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_alternatives_in_order() {
        assert_eq!(format_meaning("big/large/great"), "big<br>large<br>great");
        assert_eq!(format_meaning("mother / mom"), "mother<br>mom");
    }

    #[test]
    fn single_meaning_is_unchanged() {
        assert_eq!(format_meaning("happy"), "happy");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(format_meaning(""), "");
    }
}
