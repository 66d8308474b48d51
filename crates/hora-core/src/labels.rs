//! Label vocabularies for the clock rings.
//!
//! Labels are a presentation lookup keyed by ring, 1-based ordinal and
//! day/night flag. The partition computer only decides *which* ordinal a
//! segment has; a [`LabelSet`] turns that into text.

use hora_types::{LabelStyle, Ring};

/// Roman numerals for positions 1..=12.
const ROMAN_NUMERALS: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// Latin ordinals in inscriptional capitals (V for U).
const LATIN_CAPITALS: [&str; 12] = [
    "PRIMA", "SECVNDA", "TERTIA", "QVARTA", "QVINTA", "SEXTA", "SEPTIMA", "OCTAVA", "NONA",
    "DECIMA", "VNDECIMA", "DVODECIMA",
];

/// Latin ordinals with vowel length marks, used in tooltips.
const LATIN_ORDINALS: [&str; 12] = [
    "prīma", "secunda", "tertia", "quārta", "quīnta", "sexta", "septima", "octāva", "nōna",
    "decima", "ūndecima", "duodecima",
];

/// Fixed quarter names, in index order.
const QUARTER_NAMES: [&str; 4] = ["MANE", "DIES", "VESPER", "NOX"];

/// Prefix shared by all vigil labels.
const VIGIL_PREFIX: &str = "VIGILIA";

/// Text lookup for every segment the partition computer produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelSet {
    style: LabelStyle,
}

impl LabelSet {
    /// A label set using the given vocabulary.
    pub const fn new(style: LabelStyle) -> Self {
        Self { style }
    }

    /// The vocabulary in use.
    pub const fn style(&self) -> LabelStyle {
        self.style
    }

    /// Label for the hour at 1-based `ordinal` (1..=12) of the day or night.
    pub fn hour(&self, ordinal: u8) -> String {
        self.ordinal_word(ordinal)
    }

    /// Label for the vigil at 1-based `ordinal` (1..=4).
    pub fn vigil(&self, ordinal: u8) -> String {
        format!("{VIGIL_PREFIX} {}", self.ordinal_word(ordinal))
    }

    /// Label for the quarter at 1-based `ordinal` (1..=4).
    pub fn quarter(&self, ordinal: u8) -> String {
        lookup(&QUARTER_NAMES, ordinal).map_or_else(|| ordinal.to_string(), str::to_owned)
    }

    /// Label for any ring.
    pub fn label(&self, ring: Ring, ordinal: u8) -> String {
        match ring {
            Ring::Hours => self.hour(ordinal),
            Ring::Vigils => self.vigil(ordinal),
            Ring::Quarters => self.quarter(ordinal),
        }
    }

    /// Tooltip text for an hour, e.g. `diēī hōra prīma`.
    pub fn hour_title(&self, ordinal: u8, is_daytime: bool) -> String {
        let half = if is_daytime { "diēī" } else { "noctis" };
        format!("{half} hōra {}", latin_ordinal(ordinal))
    }

    /// Tooltip text for a vigil, e.g. `vigilia secunda`.
    pub fn vigil_title(&self, ordinal: u8) -> String {
        format!("vigilia {}", latin_ordinal(ordinal))
    }

    /// Tooltip text for a quarter: its name in lowercase.
    pub fn quarter_title(&self, ordinal: u8) -> String {
        self.quarter(ordinal).to_lowercase()
    }

    /// Tooltip text for any ring.
    ///
    /// `is_daytime` only matters for hours; a missing flag reads as night.
    pub fn title(&self, ring: Ring, ordinal: u8, is_daytime: Option<bool>) -> String {
        match ring {
            Ring::Hours => self.hour_title(ordinal, is_daytime.unwrap_or(false)),
            Ring::Vigils => self.vigil_title(ordinal),
            Ring::Quarters => self.quarter_title(ordinal),
        }
    }

    fn ordinal_word(&self, ordinal: u8) -> String {
        let word = match self.style {
            LabelStyle::Roman => lookup(&ROMAN_NUMERALS, ordinal),
            LabelStyle::Latin => lookup(&LATIN_CAPITALS, ordinal),
            LabelStyle::Arabic => None,
        };
        word.map_or_else(|| ordinal.to_string(), str::to_owned)
    }
}

/// Lowercase Latin ordinal for a 1-based position, falling back to digits.
fn latin_ordinal(ordinal: u8) -> String {
    lookup(&LATIN_ORDINALS, ordinal).map_or_else(|| ordinal.to_string(), str::to_owned)
}

/// Look up a 1-based ordinal in a table.
fn lookup<'a>(table: &[&'a str], ordinal: u8) -> Option<&'a str> {
    usize::from(ordinal)
        .checked_sub(1)
        .and_then(|idx| table.get(idx))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roman_hours_and_vigils() {
        let labels = LabelSet::default();
        assert_eq!(labels.style(), LabelStyle::Roman);
        assert_eq!(labels.hour(1), "I");
        assert_eq!(labels.hour(12), "XII");
        assert_eq!(labels.vigil(4), "VIGILIA IV");
    }

    #[test]
    fn latin_and_arabic_styles() {
        let latin = LabelSet::new(LabelStyle::Latin);
        assert_eq!(latin.hour(2), "SECVNDA");
        assert_eq!(latin.vigil(1), "VIGILIA PRIMA");
        assert_eq!(latin.vigil(4), "VIGILIA QVARTA");

        let arabic = LabelSet::new(LabelStyle::Arabic);
        assert_eq!(arabic.hour(7), "7");
        assert_eq!(arabic.vigil(3), "VIGILIA 3");
    }

    #[test]
    fn quarters_ignore_style() {
        for style in [LabelStyle::Roman, LabelStyle::Latin, LabelStyle::Arabic] {
            let labels = LabelSet::new(style);
            let names: Vec<String> = (1..=4).map(|q| labels.quarter(q)).collect();
            assert_eq!(names, ["MANE", "DIES", "VESPER", "NOX"]);
        }
    }

    #[test]
    fn titles() {
        let labels = LabelSet::default();
        assert_eq!(labels.hour_title(1, true), "diēī hōra prīma");
        assert_eq!(labels.hour_title(12, false), "noctis hōra duodecima");
        assert_eq!(labels.vigil_title(2), "vigilia secunda");
        assert_eq!(labels.quarter_title(3), "vesper");
        assert_eq!(labels.title(Ring::Hours, 4, None), "noctis hōra quārta");
    }

    #[test]
    fn out_of_range_ordinals_fall_back_to_digits() {
        let labels = LabelSet::default();
        assert_eq!(labels.hour(0), "0");
        assert_eq!(labels.hour(13), "13");
        assert_eq!(labels.quarter(5), "5");
        assert_eq!(labels.label(Ring::Vigils, 9), "VIGILIA 9");
    }
}
