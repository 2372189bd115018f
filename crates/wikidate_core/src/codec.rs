//! Bidirectional codecs between integers and calendar titles.
//!
//! Every table entry is a [`Codec`] descriptor. Encoding turns an integer into
//! a title; decoding goes the other way and only succeeds if the decoded
//! value renders back to exactly the input text.

use crate::error::{DateError, Result};
use crate::limits::ValidityRange;
use crate::pattern::PatternCache;

/// Maps a value to the parameters substituted into a pattern, one per placeholder.
pub type Encoder = fn(i64) -> Vec<i64>;
/// Maps decoded pattern parameters back to a value.
pub type Decoder = fn(&[i64]) -> std::result::Result<i64, DecodeFailure>;
pub type Predicate = fn(i64) -> bool;

/// Why a [`Decoder`] could not produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeFailure {
    /// The pattern has fewer placeholders than the decoder reads.
    MissingParameter(usize),
    /// Arithmetic on the captured numbers left the `i64` range.
    Overflow,
}

#[derive(Debug, Clone, Copy)]
pub enum Guard {
    /// Catch-all; by convention the last branch of a multi list.
    Always,
    When(Predicate),
}

impl Guard {
    pub fn accepts(&self, value: i64) -> bool {
        match self {
            Self::Always => true,
            Self::When(predicate) => predicate(value),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Branch {
    pub codec: Codec,
    pub guard: Guard,
}

#[derive(Debug, Clone)]
pub struct PatternCodec {
    pub pattern: String,
    pub encode: Encoder,
    pub decode: Decoder,
    pub limit: Option<ValidityRange>,
}

#[derive(Debug, Clone)]
pub enum Codec {
    /// Numeric pattern such as `%d BC`.
    Pattern(PatternCodec),
    /// Ordered branches; the first one whose guard fits wins.
    Multi(Vec<Branch>),
    /// 1-based lookup into a list of names (month names).
    List(Vec<String>),
    /// A single value paired with a fixed text.
    Constant { value: i64, text: String },
}

pub fn identity(value: i64) -> Vec<i64> {
    vec![value]
}

/// Rounds down to the decade, which starts on a year ending in 0.
pub fn decade_start(value: i64) -> Vec<i64> {
    vec![value / 10 * 10]
}

/// First and last year of the decade, e.g. `1970, 1979`.
pub fn decade_span(value: i64) -> Vec<i64> {
    let start = value / 10 * 10;
    vec![start, start.saturating_add(9)]
}

/// Last and first year of the decade, e.g. `1979, 1970`, for BC ranges.
pub fn decade_span_descending(value: i64) -> Vec<i64> {
    let start = value / 10 * 10;
    vec![start.saturating_add(9), start]
}

pub fn previous(value: i64) -> Vec<i64> {
    vec![value.saturating_sub(1)]
}

/// Reads the parameter at `index`.
pub fn param(params: &[i64], index: usize) -> std::result::Result<i64, DecodeFailure> {
    params
        .get(index)
        .copied()
        .ok_or(DecodeFailure::MissingParameter(index))
}

pub fn first(params: &[i64]) -> std::result::Result<i64, DecodeFailure> {
    param(params, 0)
}

pub fn second(params: &[i64]) -> std::result::Result<i64, DecodeFailure> {
    param(params, 1)
}

pub fn next(params: &[i64]) -> std::result::Result<i64, DecodeFailure> {
    param(params, 0)?
        .checked_add(1)
        .ok_or(DecodeFailure::Overflow)
}

impl Codec {
    pub fn pattern(
        pattern: impl Into<String>,
        encode: Encoder,
        decode: Decoder,
        limit: Option<ValidityRange>,
    ) -> Self {
        Self::Pattern(PatternCodec {
            pattern: pattern.into(),
            encode,
            decode,
            limit,
        })
    }

    /// Pattern whose single placeholder is the value itself.
    pub fn no_conv(pattern: impl Into<String>, limit: ValidityRange) -> Self {
        Self::pattern(pattern, identity, first, Some(limit))
    }

    pub fn multi(branches: Vec<Branch>) -> Self {
        Self::Multi(branches)
    }

    pub fn list<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(names.into_iter().map(Into::into).collect())
    }

    pub fn constant(value: i64, text: impl Into<String>) -> Self {
        Self::Constant {
            value,
            text: text.into(),
        }
    }

    /// Constant bound to the sentinel value 0.
    pub fn single(text: impl Into<String>) -> Self {
        Self::constant(0, text)
    }

    pub fn when(self, predicate: Predicate) -> Branch {
        Branch {
            codec: self,
            guard: Guard::When(predicate),
        }
    }

    pub fn always(self) -> Branch {
        Branch {
            codec: self,
            guard: Guard::Always,
        }
    }

    pub fn encode(&self, cache: &PatternCache, value: i64) -> Result<String> {
        match self {
            Self::Pattern(codec) => codec.encode(cache, value),
            Self::Multi(branches) => branches
                .iter()
                .find(|branch| branch.guard.accepts(value))
                .ok_or(DateError::NoBranchForValue { value })
                .and_then(|branch| branch.codec.encode(cache, value)),
            Self::List(names) => usize::try_from(value)
                .ok()
                .and_then(|index| index.checked_sub(1))
                .and_then(|index| names.get(index))
                .cloned()
                .ok_or(DateError::OutOfRange {
                    value,
                    min: 1,
                    max: names.len() as i64 + 1,
                }),
            Self::Constant {
                value: expected,
                text,
            } => {
                if value == *expected {
                    Ok(text.clone())
                } else {
                    Err(DateError::OutOfRange {
                        value,
                        min: *expected,
                        max: *expected + 1,
                    })
                }
            }
        }
    }

    pub fn decode(&self, cache: &PatternCache, text: &str) -> Result<i64> {
        match self {
            Self::Pattern(codec) => codec.decode(cache, text),
            Self::Multi(branches) => {
                for branch in branches {
                    match branch.codec.decode(cache, text) {
                        Ok(value) if branch.guard.accepts(value) => return Ok(value),
                        Ok(_) => {}
                        Err(error) if error.is_no_match() => {}
                        Err(error) => return Err(error),
                    }
                }
                Err(DateError::NoMatchingBranch {
                    text: text.to_string(),
                })
            }
            Self::List(names) => names
                .iter()
                .position(|name| name == text)
                .map(|index| index as i64 + 1)
                .ok_or_else(|| DateError::UnknownName {
                    text: text.to_string(),
                }),
            Self::Constant {
                value,
                text: expected,
            } => {
                if text == expected {
                    Ok(*value)
                } else {
                    Err(DateError::PatternMismatch {
                        pattern: expected.clone(),
                        text: text.to_string(),
                    })
                }
            }
        }
    }
}

impl PatternCodec {
    pub fn encode(&self, cache: &PatternCache, value: i64) -> Result<String> {
        if let Some(limit) = &self.limit {
            limit.check(value)?;
        }
        let compiled = cache.compile(&self.pattern)?;
        compiled.render(&(self.encode)(value))
    }

    pub fn decode(&self, cache: &PatternCache, text: &str) -> Result<i64> {
        let compiled = cache.compile(&self.pattern)?;
        let params = compiled.match_values(text)?;
        let value = (self.decode)(&params).map_err(|failure| match failure {
            DecodeFailure::MissingParameter(_) => DateError::ArityMismatch {
                pattern: self.pattern.clone(),
                expected: compiled.placeholders().len(),
                actual: params.len(),
            },
            DecodeFailure::Overflow => DateError::Overflow {
                text: text.to_string(),
            },
        })?;

        // The match alone is not enough: only accept values whose canonical
        // rendering is the exact input.
        let rendered = self.encode(cache, value)?;
        if rendered == text {
            Ok(value)
        } else {
            Err(DateError::RoundTripMismatch {
                text: text.to_string(),
                value,
                rendered,
            })
        }
    }
}
