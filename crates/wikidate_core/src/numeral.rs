use crate::error::{DateError, Result};

const DECIMAL_DIGITS: &str = "0123456789";
const KANNADA_DIGITS: &str = "೦೧೨೩೪೫೬೭೮೯";
const PERSIAN_DIGITS: &str = "۰۱۲۳۴۵۶۷۸۹";
const DEVANAGARI_DIGITS: &str = "०१२३४५६७८९";
const BENGALI_DIGITS: &str = "০১২৩৪৫৬৭৮৯";
const GUJARATI_DIGITS: &str = "૦૧૨૩૪૫૬૭૮૯";

/// Offset between the Gregorian year and the Thai solar (Buddhist era) year.
pub const THAI_ERA_OFFSET: i64 = 543;

/// Roman numerals only go as far as calendar titles need.
const ROMAN_NUMERALS: [&str; 31] = [
    "-", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
    "XV", "XVI", "XVII", "XVIII", "XIX", "XX", "XXI", "XXII", "XXIII", "XXIV", "XXV", "XXVI",
    "XXVII", "XXVIII", "XXIX", "XXX",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralSystem {
    Decimal,
    Roman,
    Kannada,
    Persian,
    Devanagari,
    Bengali,
    Gujarati,
    /// Decimal digits, shifted by [`THAI_ERA_OFFSET`].
    ThaiEra,
}

impl NumeralSystem {
    pub const ALL: [NumeralSystem; 8] = [
        Self::Decimal,
        Self::Roman,
        Self::Kannada,
        Self::Persian,
        Self::Devanagari,
        Self::Bengali,
        Self::Gujarati,
        Self::ThaiEra,
    ];

    /// Placeholder letter used in format patterns (`%d`, `%R`, ...).
    pub fn code(self) -> char {
        match self {
            Self::Decimal => 'd',
            Self::Roman => 'R',
            Self::Kannada => 'K',
            Self::Persian => 'F',
            Self::Devanagari => 'H',
            Self::Bengali => 'B',
            Self::Gujarati => 'G',
            Self::ThaiEra => 'T',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|system| system.code() == code)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Roman => "roman",
            Self::Kannada => "kannada",
            Self::Persian => "persian",
            Self::Devanagari => "devanagari",
            Self::Bengali => "bengali",
            Self::Gujarati => "gujarati",
            Self::ThaiEra => "thai-era",
        }
    }

    /// Ordered digit glyphs; the first one doubles as the padding glyph.
    pub fn alphabet(self) -> &'static str {
        match self {
            Self::Decimal | Self::ThaiEra => DECIMAL_DIGITS,
            Self::Roman => "IVX",
            Self::Kannada => KANNADA_DIGITS,
            Self::Persian => PERSIAN_DIGITS,
            Self::Devanagari => DEVANAGARI_DIGITS,
            Self::Bengali => BENGALI_DIGITS,
            Self::Gujarati => GUJARATI_DIGITS,
        }
    }

    pub fn pad_glyph(self) -> char {
        self.alphabet().chars().next().unwrap_or('0')
    }

    fn native_digits(self) -> Option<&'static str> {
        match self {
            Self::Kannada | Self::Persian | Self::Devanagari | Self::Bengali | Self::Gujarati => {
                Some(self.alphabet())
            }
            Self::Decimal | Self::Roman | Self::ThaiEra => None,
        }
    }

    pub fn encode(self, value: i64) -> Result<String> {
        match self {
            Self::Decimal => encode_decimal(self, value),
            Self::ThaiEra => {
                let shifted = value
                    .checked_add(THAI_ERA_OFFSET)
                    .ok_or_else(|| self.unrepresentable(value))?;
                encode_decimal(self, shifted).map_err(|_| self.unrepresentable(value))
            }
            Self::Roman => usize::try_from(value)
                .ok()
                .and_then(|index| ROMAN_NUMERALS.get(index))
                .map(|numeral| (*numeral).to_string())
                .ok_or_else(|| self.unrepresentable(value)),
            Self::Kannada | Self::Persian | Self::Devanagari | Self::Bengali | Self::Gujarati => {
                let digits = self.native_digits().unwrap_or(DECIMAL_DIGITS);
                let decimal = encode_decimal(self, value)?;
                Ok(decimal
                    .chars()
                    .map(|ch| translate_digit(ch, DECIMAL_DIGITS, digits))
                    .collect())
            }
        }
    }

    pub fn decode(self, text: &str) -> Result<i64> {
        match self {
            Self::Decimal => decode_decimal(self, text),
            Self::ThaiEra => {
                let shifted = decode_decimal(self, text)?;
                Ok(shifted - THAI_ERA_OFFSET)
            }
            Self::Roman => ROMAN_NUMERALS
                .iter()
                .position(|numeral| *numeral == text)
                .map(|index| index as i64)
                .ok_or_else(|| self.invalid(text)),
            Self::Kannada | Self::Persian | Self::Devanagari | Self::Bengali | Self::Gujarati => {
                let digits = self.native_digits().unwrap_or(DECIMAL_DIGITS);
                let decimal = text
                    .chars()
                    .map(|ch| translate_digit(ch, digits, DECIMAL_DIGITS))
                    .collect::<String>();
                // Nothing translated: plain ASCII posing as this script.
                if decimal == text {
                    return Err(self.invalid(text));
                }
                // Mixed scripts still carry glyphs outside the alphabet.
                if !text.chars().all(|ch| digits.contains(ch)) {
                    return Err(self.invalid(text));
                }
                decode_decimal(self, &decimal).map_err(|_| self.invalid(text))
            }
        }
    }

    fn invalid(self, text: &str) -> DateError {
        DateError::InvalidNumeral {
            system: self.as_str(),
            text: text.to_string(),
        }
    }

    fn unrepresentable(self, value: i64) -> DateError {
        DateError::UnrepresentableValue {
            system: self.as_str(),
            value,
        }
    }
}

fn encode_decimal(system: NumeralSystem, value: i64) -> Result<String> {
    if value < 0 {
        return Err(system.unrepresentable(value));
    }
    Ok(value.to_string())
}

fn decode_decimal(system: NumeralSystem, text: &str) -> Result<i64> {
    if text.is_empty() || !text.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(system.invalid(text));
    }
    text.parse::<i64>().map_err(|_| system.invalid(text))
}

/// Maps a glyph at position `n` in `from` to the glyph at position `n` in `to`.
/// Glyphs outside `from` are returned unchanged.
fn translate_digit(ch: char, from: &str, to: &str) -> char {
    from.chars()
        .position(|candidate| candidate == ch)
        .and_then(|index| to.chars().nth(index))
        .unwrap_or(ch)
}

#[cfg(test)]
mod tests {
    use super::{NumeralSystem, THAI_ERA_OFFSET};

    #[test]
    fn codes_round_trip() {
        for system in NumeralSystem::ALL {
            assert_eq!(NumeralSystem::from_code(system.code()), Some(system));
        }
        assert_eq!(NumeralSystem::from_code('x'), None);
    }

    #[test]
    fn decimal_round_trip() {
        for value in [0, 7, 10, 1999, 2501, 999_999] {
            let text = NumeralSystem::Decimal.encode(value).expect("encode");
            assert_eq!(NumeralSystem::Decimal.decode(&text).expect("decode"), value);
        }
        assert!(NumeralSystem::Decimal.decode("").is_err());
        assert!(NumeralSystem::Decimal.decode("12a").is_err());
        assert!(NumeralSystem::Decimal.encode(-1).is_err());
    }

    #[test]
    fn roman_numerals_cover_zero_to_thirty() {
        assert_eq!(NumeralSystem::Roman.encode(4).expect("encode"), "IV");
        assert_eq!(NumeralSystem::Roman.encode(19).expect("encode"), "XIX");
        assert_eq!(NumeralSystem::Roman.encode(30).expect("encode"), "XXX");
        for value in 0..=30 {
            let text = NumeralSystem::Roman.encode(value).expect("encode");
            assert_eq!(NumeralSystem::Roman.decode(&text).expect("decode"), value);
        }
    }

    #[test]
    fn roman_numerals_reject_values_outside_table() {
        assert!(NumeralSystem::Roman.encode(31).is_err());
        assert!(NumeralSystem::Roman.encode(-1).is_err());
        assert!(NumeralSystem::Roman.decode("XXXI").is_err());
        assert!(NumeralSystem::Roman.decode("IIII").is_err());
        assert!(NumeralSystem::Roman.decode("").is_err());
    }

    #[test]
    fn native_digits_round_trip() {
        assert_eq!(NumeralSystem::Persian.encode(1384).expect("encode"), "۱۳۸۴");
        assert_eq!(NumeralSystem::Devanagari.encode(2005).expect("encode"), "२००५");
        assert_eq!(NumeralSystem::Bengali.decode("১৯৭১").expect("decode"), 1971);
        for system in [
            NumeralSystem::Kannada,
            NumeralSystem::Persian,
            NumeralSystem::Devanagari,
            NumeralSystem::Bengali,
            NumeralSystem::Gujarati,
        ] {
            for value in [0, 9, 10, 1947, 2501] {
                let text = system.encode(value).expect("encode");
                assert_eq!(system.decode(&text).expect("decode"), value);
            }
        }
    }

    #[test]
    fn native_digits_reject_ascii_digits() {
        for system in [
            NumeralSystem::Kannada,
            NumeralSystem::Persian,
            NumeralSystem::Devanagari,
            NumeralSystem::Bengali,
            NumeralSystem::Gujarati,
        ] {
            assert!(system.decode("1984").is_err(), "{}", system.as_str());
            assert!(system.decode("").is_err(), "{}", system.as_str());
        }
        assert!(NumeralSystem::Persian.decode("۱x").is_err());
    }

    #[test]
    fn native_digits_reject_untranslatable_and_mixed_text() {
        // Only text that changes under translation is in the script at all.
        assert!(NumeralSystem::Persian.decode("١٩").is_err());
        assert!(NumeralSystem::Persian.decode("१९").is_err());
        assert!(NumeralSystem::Devanagari.decode("۱۹").is_err());
        // Some glyphs translated, but the rest are foreign.
        assert!(NumeralSystem::Persian.decode("۱9").is_err());
        assert!(NumeralSystem::Devanagari.decode("2००5").is_err());
        assert_eq!(NumeralSystem::Devanagari.decode("२००५").expect("decode"), 2005);
    }

    #[test]
    fn thai_era_shifts_years() {
        assert_eq!(NumeralSystem::ThaiEra.encode(2005).expect("encode"), "2548");
        assert_eq!(NumeralSystem::ThaiEra.decode("2548").expect("decode"), 2005);
        assert_eq!(
            NumeralSystem::ThaiEra.encode(0).expect("encode"),
            THAI_ERA_OFFSET.to_string()
        );
    }
}
