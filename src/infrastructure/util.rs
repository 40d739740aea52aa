use crate::application::ports::util::Transliterator;
use deunicode::deunicode_char;

/// Spreads German umlauts (`ä` → `ae`) and transliterates every other
/// non-ASCII character with `deunicode`.
///
/// Separators produced by the transliteration (the `-` of an en dash, the
/// space after a CJK syllable) are kept; the normalizer collapses them.
#[derive(Default, Clone)]
pub struct DefaultTransliterator;

impl Transliterator for DefaultTransliterator {
    fn downgrade(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            if c.is_ascii() {
                out.push(c);
            } else if let Some(spread) = spread_umlaut(c) {
                out.push_str(spread);
            } else if c.is_whitespace() {
                out.push(' ');
            } else if let Some(ascii) = deunicode_char(c) {
                out.push_str(ascii);
            }
        }
        out
    }
}

fn spread_umlaut(c: char) -> Option<&'static str> {
    Some(match c {
        'ä' => "ae",
        'ö' => "oe",
        'ü' => "ue",
        'Ä' => "Ae",
        'Ö' => "Oe",
        'Ü' => "Ue",
        'ß' => "ss",
        'ẞ' => "SS",
        _ => return None,
    })
}
