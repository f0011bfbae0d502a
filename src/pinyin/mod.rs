pub mod accents;
pub mod meaning;

pub use accents::format_syllable;
pub use meaning::format_meaning;

/// Display color for each marked tone. Neutral tones (0 and 5) carry no color.
pub fn tone_color(tone: u8) -> Option<&'static str> {
    match tone {
        1 => Some("#e33737"), // Red
        2 => Some("#e39c37"), // Orange
        3 => Some("#5cb85c"), // Green
        4 => Some("#428bca"), // Blue
        _ => None,
    }
}

/// Accented forms for tones 1-4, keyed by the unaccented vowel in its
/// original case.
pub fn accented_forms(vowel: char) -> Option<[&'static str; 4]> {
    match vowel {
        'a' => Some(["ā", "á", "ǎ", "à"]),
        'e' => Some(["ē", "é", "ě", "è"]),
        'i' => Some(["ī", "í", "ǐ", "ì"]),
        'o' => Some(["ō", "ó", "ǒ", "ò"]),
        'u' => Some(["ū", "ú", "ǔ", "ù"]),
        'ü' => Some(["ǖ", "ǘ", "ǚ", "ǜ"]),
        'A' => Some(["Ā", "Á", "Ǎ", "À"]),
        'E' => Some(["Ē", "É", "Ě", "È"]),
        'I' => Some(["Ī", "Í", "Ǐ", "Ì"]),
        'O' => Some(["Ō", "Ó", "Ǒ", "Ò"]),
        'U' => Some(["Ū", "Ú", "Ǔ", "Ù"]),
        'Ü' => Some(["Ǖ", "Ǘ", "Ǚ", "Ǜ"]),
        _ => None,
    }
}
