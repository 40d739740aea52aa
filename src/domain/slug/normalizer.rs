use std::sync::Arc;

use crate::application::ports::util::Transliterator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::settings::SlugSettings;

/// Turns human text into a URL-safe slug candidate.
///
/// The result is lowercase, hyphen-separated and free of edge hyphens. In the
/// downgrading (ASCII) mode non-ASCII input is transliterated first; in the
/// unicode mode non-ASCII letters survive.
#[derive(Clone)]
pub struct SlugNormalizer {
    transliterator: Arc<dyn Transliterator>,
    allow_unicode: bool,
    default_token: Option<String>,
}

impl SlugNormalizer {
    pub fn new(settings: &SlugSettings, transliterator: Arc<dyn Transliterator>) -> Self {
        let default_token = settings
            .default_slug()
            .map(|token| clean(&transliterator.downgrade(token), false))
            .filter(|token| !token.is_empty());

        Self {
            transliterator,
            allow_unicode: settings.allow_unicode(),
            default_token,
        }
    }

    pub fn normalize(&self, text: &str) -> DomainResult<String> {
        self.normalize_with(text, self.allow_unicode)
    }

    /// Normalizes `text`, overriding the configured unicode mode.
    ///
    /// Returns an empty string only when nothing in `text` is convertible and
    /// no default token is configured; the allocator rejects that candidate.
    pub fn normalize_with(&self, text: &str, allow_unicode: bool) -> DomainResult<String> {
        let text = text.trim();
        if text.is_empty() {
            return self.default_token.clone().ok_or_else(|| {
                DomainError::EmptyValue("no source text to derive a slug from".into())
            });
        }

        let normalized = if allow_unicode {
            clean(text, true)
        } else {
            clean(&self.transliterator.downgrade(text), false)
        };

        if normalized.is_empty() {
            if let Some(token) = &self.default_token {
                tracing::debug!(source = text, token = %token, "nothing convertible, using default slug");
                return Ok(token.clone());
            }
        }
        Ok(normalized)
    }

    pub fn default_token(&self) -> Option<&str> {
        self.default_token.as_deref()
    }
}

fn clean(source: &str, allow_unicode: bool) -> String {
    let mut out = String::with_capacity(source.len());
    let mut separator_pending = false;

    for c in source.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() || c == '_' || c == '-' {
            separator_pending = true;
            continue;
        }
        // letters without a lowercase mapping (e.g. mathematical capitals)
        // cannot appear in a slug
        let keep = if allow_unicode {
            c.is_alphanumeric() && !c.is_uppercase()
        } else {
            c.is_ascii_alphanumeric()
        };
        if !keep {
            continue;
        }
        if separator_pending && !out.is_empty() {
            out.push('-');
        }
        separator_pending = false;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::util::DefaultTransliterator;

    fn normalizer(settings: &SlugSettings) -> SlugNormalizer {
        SlugNormalizer::new(settings, Arc::new(DefaultTransliterator))
    }

    fn is_downgraded(value: &str) -> bool {
        !value.is_empty()
            && !value.starts_with('-')
            && !value.ends_with('-')
            && value
                .bytes()
                .all(|b| b == b'-' || b.is_ascii_lowercase() || b.is_ascii_digit())
    }

    #[test]
    fn downgrades_accents_and_umlauts() {
        let n = normalizer(&SlugSettings::default());
        assert_eq!(n.normalize("café").unwrap(), "cafe");
        assert_eq!(n.normalize("Müller Straße").unwrap(), "mueller-strasse");
    }

    #[test]
    fn collapses_separators_and_drops_punctuation() {
        let n = normalizer(&SlugSettings::default());
        assert_eq!(n.normalize("  Hello,   World! ").unwrap(), "hello-world");
        assert_eq!(n.normalize("snake__case - name").unwrap(), "snake-case-name");
        assert_eq!(n.normalize("don't stop").unwrap(), "dont-stop");
        assert_eq!(n.normalize("--edge--").unwrap(), "edge");
    }

    #[test]
    fn unicode_mode_keeps_letters() {
        let n = normalizer(&SlugSettings::default().with_unicode(true));
        assert_eq!(n.normalize("Größe Über").unwrap(), "größe-über");
        assert_eq!(n.normalize_with("Größe", false).unwrap(), "groesse");
    }

    #[test]
    fn falls_back_to_default_token() {
        let n = normalizer(&SlugSettings::default());
        assert_eq!(n.normalize("   ").unwrap(), "item");
        assert_eq!(n.normalize("!!! ???").unwrap(), "item");
    }

    #[test]
    fn empty_source_without_default_fails() {
        let n = normalizer(&SlugSettings::default().with_default_slug(None));
        assert!(matches!(n.normalize(" \t"), Err(DomainError::EmptyValue(_))));
        assert_eq!(n.normalize("???").unwrap(), "");
    }

    #[test]
    fn transliteration_keeps_word_boundaries() {
        let n = normalizer(&SlugSettings::default());
        assert_eq!(n.normalize("a\u{2013}b").unwrap(), "a-b");
        assert_eq!(n.normalize("Rock\u{2013}Pop").unwrap(), "rock-pop");
        assert_eq!(n.normalize("中文").unwrap(), "zhong-wen");
    }

    #[test]
    fn unicode_mode_drops_letters_without_lowercase() {
        let n = normalizer(&SlugSettings::default().with_unicode(true));
        let out = n.normalize("\u{1D400}bc").unwrap();
        assert_eq!(out, "bc");
        assert!(crate::domain::slug::Slug::new(out).is_ok());
        assert_eq!(n.normalize("\u{1D400}").unwrap(), "item");
    }

    #[test]
    fn ascii_output_shape_holds_for_mixed_inputs() {
        let n = normalizer(&SlugSettings::default());
        for input in [
            "Ünïcödé ünd ßpäß",
            "Crème brûlée -- 2024",
            "__init__",
            "Ελληνικά κείμενα",
            "  x  ",
            "Ça va? Très bien!",
        ] {
            let out = n.normalize(input).unwrap();
            assert!(is_downgraded(&out), "{input:?} -> {out:?}");
        }
    }
}
