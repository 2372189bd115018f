use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, warn};

use crate::codec::Codec;
use crate::error::{DateError, Result};
use crate::formats::{FormatTable, build_table};
use crate::kind::FormatKind;
use crate::month::Month;
use crate::pattern::PatternCache;
use crate::text::flip_first_letter_case;

/// A value that did not survive encode-then-decode for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundTripFailure {
    pub kind: FormatKind,
    pub lang: String,
    pub value: i64,
    pub problem: String,
}

/// The format table together with the compiled-pattern cache it decodes with.
#[derive(Debug)]
pub struct DateFormats {
    table: FormatTable,
    patterns: PatternCache,
    ignore_first_letter_case: bool,
}

impl Default for DateFormats {
    fn default() -> Self {
        Self::new()
    }
}

impl DateFormats {
    pub fn new() -> Self {
        Self::with_table(build_table())
    }

    pub fn with_table(table: FormatTable) -> Self {
        Self {
            table,
            patterns: PatternCache::new(),
            ignore_first_letter_case: true,
        }
    }

    /// Whether auto-detection retries with the first letter's case flipped.
    pub fn ignore_first_letter_case(mut self, enabled: bool) -> Self {
        self.ignore_first_letter_case = enabled;
        self
    }

    pub fn table(&self) -> &FormatTable {
        &self.table
    }

    pub fn patterns(&self) -> &PatternCache {
        &self.patterns
    }

    pub fn kinds(&self) -> Vec<FormatKind> {
        self.table.keys().copied().collect()
    }

    pub fn languages(&self, kind: FormatKind) -> Vec<&'static str> {
        self.table
            .get(&kind)
            .map(|languages| languages.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Every language that has at least one format.
    pub fn all_languages(&self) -> Vec<&'static str> {
        self.table
            .values()
            .flat_map(|languages| languages.keys().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn codec(&self, kind: FormatKind, lang: &str) -> Result<&Codec> {
        self.table
            .get(&kind)
            .and_then(|languages| languages.get(lang))
            .ok_or_else(|| DateError::UnknownLanguage {
                kind: kind.name(),
                lang: lang.to_string(),
            })
    }

    pub fn format_value(&self, kind: FormatKind, lang: &str, value: i64) -> Result<String> {
        let codec = self.codec(kind, lang)?;
        kind.limit().check(value)?;
        codec.encode(&self.patterns, value)
    }

    pub fn parse_value(&self, kind: FormatKind, lang: &str, text: &str) -> Result<i64> {
        let codec = self.codec(kind, lang)?;
        let value = codec.decode(&self.patterns, text)?;
        kind.limit().check(value)
    }

    /// Finds the first format kind (in declaration order) whose codec for
    /// `lang` decodes `title`.
    pub fn get_auto_format(&self, lang: &str, title: &str) -> Option<(FormatKind, i64)> {
        if let Some(found) = self.detect(lang, title) {
            return Some(found);
        }
        if !self.ignore_first_letter_case {
            return None;
        }
        let flipped = flip_first_letter_case(title)?;
        debug!(lang, title, flipped = %flipped, "retrying with first letter case flipped");
        self.detect(lang, &flipped)
    }

    fn detect(&self, lang: &str, title: &str) -> Option<(FormatKind, i64)> {
        for (kind, languages) in &self.table {
            let Some(codec) = languages.get(lang) else {
                continue;
            };
            match codec.decode(&self.patterns, title) {
                Ok(value) => {
                    debug!(kind = %kind, lang, value, "recognised calendar title");
                    return Some((*kind, value));
                }
                Err(error) if error.is_no_match() => {}
                Err(error) => {
                    warn!(kind = %kind, lang, error = %error, "skipping broken format entry");
                }
            }
        }
        None
    }

    /// Negative years are written as BC years.
    pub fn format_year(&self, lang: &str, year: i64) -> Result<String> {
        if year < 0 {
            self.format_value(FormatKind::YearBC, lang, -year)
        } else {
            self.format_value(FormatKind::YearAD, lang, year)
        }
    }

    pub fn month_name(&self, lang: &str, month: Month) -> Result<String> {
        self.format_value(FormatKind::MonthName, lang, i64::from(month.number()))
    }

    /// Day-of-month title, e.g. "March 3" in English.
    pub fn format_date(&self, lang: &str, month: u32, day: u32) -> Result<String> {
        let month = Month::from_number(month)?;
        self.format_value(FormatKind::DayOfMonth(month), lang, i64::from(day))
    }

    /// Encodes every test value of `kind` in every language and decodes it
    /// again, collecting whatever does not come back unchanged.
    pub fn check_round_trip(&self, kind: FormatKind) -> Vec<RoundTripFailure> {
        let Some(languages) = self.table.get(&kind) else {
            return Vec::new();
        };
        let limit = kind.limit();
        let mut failures = Vec::new();
        for (lang, codec) in languages {
            for value in limit.test_values() {
                let problem = match codec.encode(&self.patterns, value) {
                    Err(error) => format!("encode failed: {error}"),
                    Ok(text) => match codec.decode(&self.patterns, &text) {
                        Ok(decoded) if decoded == value => continue,
                        Ok(decoded) => format!("'{text}' decodes to {decoded}"),
                        Err(error) => format!("'{text}' does not decode: {error}"),
                    },
                };
                failures.push(RoundTripFailure {
                    kind,
                    lang: (*lang).to_string(),
                    value,
                    problem,
                });
            }
        }
        failures
    }
}
