use std::sync::OnceLock;

use regex::Regex;

use super::{ accented_forms, tone_color };
use crate::core::PinyinText;

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'ü'];

fn tone_split_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*)([0-9])$").unwrap())
}

fn lower(ch: char) -> char {
    if ch == 'Ü' {
        'ü'
    } else {
        ch.to_ascii_lowercase()
    }
}

fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&lower(ch))
}

/// Split a romanization into base syllable and tone digit. A missing or
/// non-numeric trailing character means neutral (tone 0).
pub fn split_tone(input: &str) -> (&str, u8) {
    match tone_split_regex().captures(input) {
        Some(caps) => {
            let base = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let tone = caps[2].parse().unwrap_or(0);
            (base, tone)
        }
        None => (input, 0),
    }
}

/// Byte index of the vowel that takes the tone mark. Rule order matters:
/// a > e > o > the u after "iu" > the i after "ui" > last vowel anywhere.
fn target_vowel(base: &str) -> Option<usize> {
    let chars: Vec<(usize, char)> = base.char_indices().collect();

    for wanted in ['a', 'e', 'o'] {
        if let Some((idx, _)) = chars.iter().find(|(_, ch)| lower(*ch) == wanted) {
            return Some(*idx);
        }
    }

    for (first, second) in [('i', 'u'), ('u', 'i')] {
        let pair = chars
            .windows(2)
            .find(|pair| lower(pair[0].1) == first && lower(pair[1].1) == second);
        if let Some(pair) = pair {
            return Some(pair[1].0);
        }
    }

    chars.iter().rev().find(|(_, ch)| is_vowel(*ch)).map(|(idx, _)| *idx)
}

fn apply_accent(base: &str, tone: u8) -> Option<PinyinText> {
    let idx = target_vowel(base)?;
    let ch = base[idx..].chars().next()?;
    let accented = accented_forms(ch)?[(tone - 1) as usize];
    let color = tone_color(tone)?;

    let head = &base[..idx];
    let tail = &base[idx + ch.len_utf8()..];

    Some(PinyinText {
        plain: format!("{head}{accented}{tail}"),
        colored: format!("{head}<span style=\"color: {color}\">{accented}</span>{tail}"),
    })
}

/// Render a tone-numbered syllable ("hao3") as accented text. Neutral tones
/// and anything the accent table cannot place degrade to the input verbatim;
/// the source data is only partially curated, so this never errors.
pub fn format_syllable(input: &str) -> PinyinText {
    let (base, tone) = split_tone(input);
    if !(1..=4).contains(&tone) {
        return PinyinText::verbatim(input);
    }

    // "uu" is the file-naming convention for ü
    let base = base.replace("uu", "ü");

    apply_accent(&base, tone).unwrap_or_else(|| PinyinText::verbatim(input))
}
