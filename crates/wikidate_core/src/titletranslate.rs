use serde::Serialize;
use tracing::{debug, info};

use crate::engine::DateFormats;
use crate::kind::FormatKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Restricts the target languages. Empty means every language.
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleTranslation {
    pub lang: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslatedTitle {
    pub kind: FormatKind,
    pub value: i64,
    pub translations: Vec<TitleTranslation>,
}

/// Recognises `title` as a calendar title in `lang` and renders the same
/// value in every other language that has the format.
///
/// Returns `None` when the title is not a calendar title.
pub fn translate_title(
    formats: &DateFormats,
    lang: &str,
    title: &str,
    options: &TranslateOptions,
) -> Option<TranslatedTitle> {
    let (kind, value) = formats.get_auto_format(lang, title)?;
    info!(kind = %kind, lang, value, title, "recognised calendar title");

    let mut translations = Vec::new();
    for target in formats.languages(kind) {
        if target == lang {
            continue;
        }
        if !options.languages.is_empty() && !options.languages.iter().any(|allowed| allowed == target) {
            continue;
        }
        match formats.format_value(kind, target, value) {
            Ok(rendered) => translations.push(TitleTranslation {
                lang: target.to_string(),
                title: rendered,
            }),
            Err(error) => debug!(kind = %kind, lang = target, value, error = %error, "no translation"),
        }
    }

    Some(TranslatedTitle {
        kind,
        value,
        translations,
    })
}
