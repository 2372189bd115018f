//! Consistency checks for multi-branch format entries.
//!
//! A `Multi` codec picks the first branch whose guard accepts the value, so
//! its guards have to split the kind's domain cleanly: no value claimed by two
//! predicate guards, no value claimed by none, and the catch-all (if any)
//! placed last where it cannot shadow anything.

use std::fmt;

use serde::Serialize;

use crate::codec::{Branch, Codec, Guard};
use crate::engine::DateFormats;
use crate::kind::FormatKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum DataIssue {
    /// Several predicate guards accept the same value.
    Overlap {
        kind: FormatKind,
        lang: String,
        value: i64,
        branches: Vec<usize>,
    },
    /// No guard accepts a value and there is no catch-all.
    Gap {
        kind: FormatKind,
        lang: String,
        value: i64,
    },
    CatchAllNotLast {
        kind: FormatKind,
        lang: String,
        branch: usize,
    },
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overlap {
                kind,
                lang,
                value,
                branches,
            } => write!(
                f,
                "{kind}/{lang}: value {value} is accepted by branches {branches:?}"
            ),
            Self::Gap { kind, lang, value } => {
                write!(f, "{kind}/{lang}: no branch accepts value {value}")
            }
            Self::CatchAllNotLast { kind, lang, branch } => write!(
                f,
                "{kind}/{lang}: catch-all branch {branch} is not the last branch"
            ),
        }
    }
}

/// Audits every multi-branch entry of the table over its kind's test values.
pub fn audit(formats: &DateFormats) -> Vec<DataIssue> {
    let mut issues = Vec::new();
    for (kind, languages) in formats.table() {
        for (lang, codec) in languages {
            issues.extend(audit_codec(*kind, lang, codec));
        }
    }
    issues
}

/// Reports at most one overlap and one gap per multi list, the first found.
pub fn audit_codec(kind: FormatKind, lang: &str, codec: &Codec) -> Vec<DataIssue> {
    let mut issues = Vec::new();
    collect_issues(kind, lang, codec, &mut issues);
    issues
}

fn collect_issues(kind: FormatKind, lang: &str, codec: &Codec, issues: &mut Vec<DataIssue>) {
    let Codec::Multi(branches) = codec else {
        return;
    };

    let last = branches.len().saturating_sub(1);
    for (index, branch) in branches.iter().enumerate() {
        if matches!(branch.guard, Guard::Always) && index != last {
            issues.push(DataIssue::CatchAllNotLast {
                kind,
                lang: lang.to_string(),
                branch: index,
            });
        }
    }

    let has_catch_all = branches
        .iter()
        .any(|branch| matches!(branch.guard, Guard::Always));
    let mut overlap_found = false;
    let mut gap_found = false;
    for value in kind.limit().test_values() {
        let accepting = accepting_predicates(branches, value);
        if !overlap_found && accepting.len() > 1 {
            overlap_found = true;
            issues.push(DataIssue::Overlap {
                kind,
                lang: lang.to_string(),
                value,
                branches: accepting,
            });
        } else if !gap_found && accepting.is_empty() && !has_catch_all {
            gap_found = true;
            issues.push(DataIssue::Gap {
                kind,
                lang: lang.to_string(),
                value,
            });
        }
        if overlap_found && (gap_found || has_catch_all) {
            break;
        }
    }

    for branch in branches {
        collect_issues(kind, lang, &branch.codec, issues);
    }
}

fn accepting_predicates(branches: &[Branch], value: i64) -> Vec<usize> {
    branches
        .iter()
        .enumerate()
        .filter(|(_, branch)| matches!(branch.guard, Guard::When(_)) && branch.guard.accepts(value))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::FormatTable;

    fn is_even(value: i64) -> bool {
        value % 2 == 0
    }

    fn is_small(value: i64) -> bool {
        value < 10
    }

    fn is_odd(value: i64) -> bool {
        value % 2 == 1
    }

    #[test]
    fn shipped_table_is_consistent() {
        let issues = audit(&DateFormats::new());
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn split_hebrew_persian_and_hindi_entries_are_checked() {
        let formats = DateFormats::new();
        for kind in [FormatKind::DecadeAD, FormatKind::CenturyAD] {
            for lang in ["he", "fa", "hi"] {
                let codec = formats.codec(kind, lang).expect("entry");
                assert!(audit_codec(kind, lang, codec).is_empty(), "{kind} {lang}");

                let Codec::Multi(branches) = codec else {
                    panic!("{kind} {lang} is not multi-branch");
                };
                // Dropping the later branches must leave values uncovered.
                let truncated = Codec::multi(branches[..1].to_vec());
                assert!(
                    audit_codec(kind, lang, &truncated)
                        .iter()
                        .any(|issue| matches!(issue, DataIssue::Gap { .. })),
                    "{kind} {lang}"
                );
            }
        }
    }

    #[test]
    fn overlapping_guards_are_reported() {
        let limit = FormatKind::CenturyAD.limit();
        let codec = Codec::multi(vec![
            Codec::no_conv("%d a", limit).when(is_even),
            Codec::no_conv("%d b", limit).when(is_small),
            Codec::no_conv("%d c", limit).always(),
        ]);
        let issues = audit_codec(FormatKind::CenturyAD, "xx", &codec);
        assert_eq!(
            issues,
            vec![DataIssue::Overlap {
                kind: FormatKind::CenturyAD,
                lang: "xx".to_string(),
                value: 2,
                branches: vec![0, 1],
            }]
        );
    }

    #[test]
    fn gaps_without_catch_all_are_reported() {
        let limit = FormatKind::CenturyAD.limit();
        let codec = Codec::multi(vec![
            Codec::no_conv("%d a", limit).when(is_even),
            Codec::no_conv("%d b", limit).when(is_small),
        ]);
        let issues = audit_codec(FormatKind::CenturyAD, "xx", &codec);
        assert!(issues.contains(&DataIssue::Gap {
            kind: FormatKind::CenturyAD,
            lang: "xx".to_string(),
            value: 11,
        }));

        let complete = Codec::multi(vec![
            Codec::no_conv("%d a", limit).when(is_even),
            Codec::no_conv("%d b", limit).when(is_odd),
        ]);
        assert!(audit_codec(FormatKind::CenturyAD, "xx", &complete).is_empty());
    }

    #[test]
    fn shadowing_catch_all_is_reported() {
        let limit = FormatKind::CenturyAD.limit();
        let codec = Codec::multi(vec![
            Codec::no_conv("%d c", limit).always(),
            Codec::no_conv("%d a", limit).when(is_even),
        ]);
        let issues = audit_codec(FormatKind::CenturyAD, "xx", &codec);
        assert_eq!(
            issues,
            vec![DataIssue::CatchAllNotLast {
                kind: FormatKind::CenturyAD,
                lang: "xx".to_string(),
                branch: 0,
            }]
        );
        assert_eq!(
            issues[0].to_string(),
            "CenturyAD/xx: catch-all branch 0 is not the last branch"
        );
    }

    #[test]
    fn audit_walks_the_whole_table() {
        let limit = FormatKind::MillenniumAD.limit();
        let mut table = FormatTable::new();
        table.entry(FormatKind::MillenniumAD).or_default().insert(
            "xx",
            Codec::multi(vec![Codec::no_conv("%d", limit).when(is_even)]),
        );
        let issues = audit(&DateFormats::with_table(table));
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], DataIssue::Gap { value: 1, .. }));
    }
}
