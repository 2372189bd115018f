//! Format pattern compilation.
//!
//! A pattern mixes literal text with placeholders: `%` followed by an optional
//! width digit (`1`-`9`) and a numeral-system code, e.g. `%d BC`, `%2d`,
//! `%Re siècle`. `%%` stands for a literal percent sign. Compiling a pattern
//! produces an anchored regex with one capture group per placeholder, a
//! template that can be filled back in, and the numeral systems to use for
//! each slot, so the same artifact drives both decoding and encoding.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use regex::Regex;
use tracing::trace;

use crate::error::{DateError, Result};
use crate::numeral::NumeralSystem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePiece {
    Literal(String),
    Slot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub system: NumeralSystem,
    /// Mandatory field width, padded with the system's first glyph.
    pub width: Option<usize>,
}

impl Placeholder {
    pub fn render(&self, value: i64) -> Result<String> {
        let encoded = self.system.encode(value)?;
        match self.width {
            Some(width) => {
                let length = encoded.chars().count();
                if length >= width {
                    return Ok(encoded);
                }
                let mut padded = String::with_capacity(encoded.len() + width - length);
                padded.extend(std::iter::repeat_n(self.system.pad_glyph(), width - length));
                padded.push_str(&encoded);
                Ok(padded)
            }
            None => Ok(encoded),
        }
    }
}

#[derive(Debug)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    template: Vec<TemplatePiece>,
    placeholders: Vec<Placeholder>,
}

impl CompiledPattern {
    pub fn compile(pattern: &str) -> Result<Self> {
        let invalid = |reason: &str| DateError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        let mut expression = String::from("^");
        let mut template = Vec::new();
        let mut placeholders = Vec::new();
        let mut literal = String::new();

        let mut chars = pattern.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch != '%' {
                literal.push(ch);
                continue;
            }

            let width = match chars.peek() {
                Some(digit @ '1'..='9') => {
                    let width = digit.to_digit(10).map(|value| value as usize);
                    chars.next();
                    width
                }
                _ => None,
            };
            let Some(code) = chars.next() else {
                return Err(invalid("pattern ends with an unfinished placeholder"));
            };

            if code == '%' {
                if width.is_some() {
                    return Err(invalid("a literal '%%' cannot carry a field width"));
                }
                literal.push('%');
                continue;
            }
            let Some(system) = NumeralSystem::from_code(code) else {
                return Err(invalid(&format!("unknown numeral system '%{code}'")));
            };

            flush_literal(&mut literal, &mut expression, &mut template);
            expression.push_str(&capture_group(system, width));
            template.push(TemplatePiece::Slot);
            placeholders.push(Placeholder { system, width });
        }
        flush_literal(&mut literal, &mut expression, &mut template);
        expression.push('$');

        let regex = Regex::new(&expression).map_err(|error| invalid(&error.to_string()))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
            template,
            placeholders,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn template(&self) -> &[TemplatePiece] {
        &self.template
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Splits `text` into the raw captures, one per placeholder.
    pub fn captures<'t>(&self, text: &'t str) -> Option<Vec<&'t str>> {
        let captures = self.regex.captures(text)?;
        captures
            .iter()
            .skip(1)
            .map(|group| group.map(|found| found.as_str()))
            .collect()
    }

    /// Decodes every capture with its numeral system.
    pub fn match_values(&self, text: &str) -> Result<Vec<i64>> {
        let captures = self
            .captures(text)
            .ok_or_else(|| DateError::PatternMismatch {
                pattern: self.source.clone(),
                text: text.to_string(),
            })?;
        captures
            .iter()
            .zip(&self.placeholders)
            .map(|(capture, placeholder)| placeholder.system.decode(capture))
            .collect()
    }

    /// Renders `params` into the template, one per placeholder.
    pub fn render(&self, params: &[i64]) -> Result<String> {
        if params.len() != self.placeholders.len() {
            return Err(DateError::ArityMismatch {
                pattern: self.source.clone(),
                expected: self.placeholders.len(),
                actual: params.len(),
            });
        }

        let mut rendered = Vec::with_capacity(params.len());
        for (placeholder, value) in self.placeholders.iter().zip(params) {
            rendered.push(placeholder.render(*value)?);
        }

        let mut output = String::new();
        let mut slots = rendered.into_iter();
        for piece in &self.template {
            match piece {
                TemplatePiece::Literal(text) => output.push_str(text),
                TemplatePiece::Slot => {
                    if let Some(value) = slots.next() {
                        output.push_str(&value);
                    }
                }
            }
        }
        Ok(output)
    }
}

fn flush_literal(literal: &mut String, expression: &mut String, template: &mut Vec<TemplatePiece>) {
    if literal.is_empty() {
        return;
    }
    expression.push_str(&regex::escape(literal));
    template.push(TemplatePiece::Literal(std::mem::take(literal)));
}

fn capture_group(system: NumeralSystem, width: Option<usize>) -> String {
    let class = system
        .alphabet()
        .chars()
        .map(|glyph| regex::escape(&glyph.to_string()))
        .collect::<String>();
    match width {
        Some(width) => format!("([{class}]{{{width}}})"),
        None => format!("([{class}]+)"),
    }
}

/// Memoised pattern compiler, keyed by the exact pattern string.
///
/// Owned by [`crate::engine::DateFormats`]; entries are only ever added.
#[derive(Debug, Default)]
pub struct PatternCache {
    entries: Mutex<HashMap<String, Arc<CompiledPattern>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compile(&self, pattern: &str) -> Result<Arc<CompiledPattern>> {
        let mut guard = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(compiled) = guard.get(pattern) {
            trace!(pattern, "format pattern cache hit");
            return Ok(Arc::clone(compiled));
        }
        trace!(pattern, "compiling format pattern");
        let compiled = Arc::new(CompiledPattern::compile(pattern)?);
        guard.insert(pattern.to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{CompiledPattern, PatternCache, TemplatePiece};
    use crate::error::DateError;
    use crate::numeral::NumeralSystem;

    #[test]
    fn compiles_literal_text_and_placeholders() {
        let compiled = CompiledPattern::compile("%d BC").expect("compile");
        assert_eq!(compiled.regex().as_str(), "^([0123456789]+) BC$");
        assert_eq!(
            compiled.template(),
            &[TemplatePiece::Slot, TemplatePiece::Literal(" BC".to_string())]
        );
        assert_eq!(compiled.placeholders().len(), 1);
        assert_eq!(compiled.placeholders()[0].system, NumeralSystem::Decimal);
        assert_eq!(compiled.placeholders()[0].width, None);
    }

    #[test]
    fn escapes_regex_metacharacters() {
        let compiled = CompiledPattern::compile("%F (میلادی)").expect("compile");
        assert!(compiled.regex().is_match("۱۹۸۰ (میلادی)"));
        assert!(!compiled.regex().is_match("1980 (میلادی)"));

        let dotted = CompiledPattern::compile("%d v. Chr.").expect("compile");
        assert!(dotted.regex().is_match("44 v. Chr."));
        assert!(!dotted.regex().is_match("44 vX ChrX"));
    }

    #[test]
    fn width_enforces_exact_repetition_and_pads() {
        let compiled = CompiledPattern::compile("%4d").expect("compile");
        assert!(compiled.regex().is_match("0205"));
        assert!(!compiled.regex().is_match("205"));
        assert_eq!(compiled.render(&[205]).expect("render"), "0205");
        assert_eq!(compiled.render(&[12345]).expect("render"), "12345");
    }

    #[test]
    fn double_percent_is_a_literal() {
        let compiled = CompiledPattern::compile("%d%%").expect("compile");
        assert_eq!(compiled.placeholders().len(), 1);
        assert_eq!(compiled.render(&[50]).expect("render"), "50%");
        assert_eq!(compiled.match_values("50%").expect("match"), vec![50]);
    }

    #[test]
    fn rejects_malformed_patterns() {
        for pattern in ["%", "%3%", "%q years", "year %2"] {
            let error = CompiledPattern::compile(pattern).expect_err("must fail");
            assert!(
                matches!(error, DateError::InvalidPattern { .. }),
                "{pattern}: {error}"
            );
        }
    }

    #[test]
    fn render_checks_arity() {
        let compiled = CompiledPattern::compile("%d-%d").expect("compile");
        let error = compiled.render(&[1970]).expect_err("must fail");
        assert_eq!(
            error,
            DateError::ArityMismatch {
                pattern: "%d-%d".to_string(),
                expected: 2,
                actual: 1,
            }
        );
        assert_eq!(compiled.render(&[1970, 1979]).expect("render"), "1970-1979");
        assert_eq!(compiled.match_values("1970-1979").expect("match"), vec![1970, 1979]);
    }

    #[test]
    fn roman_and_native_classes() {
        let roman = CompiledPattern::compile("%R век").expect("compile");
        assert_eq!(roman.match_values("XX век").expect("match"), vec![20]);
        assert!(roman.match_values("20 век").is_err());

        let thai = CompiledPattern::compile("พ.ศ. %T").expect("compile");
        assert_eq!(thai.render(&[2005]).expect("render"), "พ.ศ. 2548");
        assert_eq!(thai.match_values("พ.ศ. 2548").expect("match"), vec![2005]);
    }

    #[test]
    fn cache_returns_the_same_compiled_pattern() {
        let cache = PatternCache::new();
        assert!(cache.is_empty());
        let first = cache.compile("%d年代").expect("compile");
        let second = cache.compile("%d年代").expect("compile");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.placeholders(), second.placeholders());
        assert_eq!(cache.len(), 1);

        cache.compile("%d年").expect("compile");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn cache_does_not_store_invalid_patterns() {
        let cache = PatternCache::new();
        assert!(cache.compile("%z").is_err());
        assert!(cache.is_empty());
    }
}
