use std::fmt;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::text::{firstof, normalize_newlines, slimdown, strip_tags};

pub const SHORT_TITLE_MAX_LENGTH: usize = 50;
pub const TITLE_MAX_LENGTH: usize = 300;

/// Name, long title and window title of a page-like node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitles {
    short_title: String,
    title: Option<String>,
    window_title: Option<String>,
}

impl PageTitles {
    pub fn new(short_title: impl Into<String>) -> DomainResult<Self> {
        let short_title = short_title.into();
        if short_title.trim().is_empty() {
            return Err(DomainError::Validation("short title cannot be empty".into()));
        }
        check_length("short title", &short_title, SHORT_TITLE_MAX_LENGTH)?;
        Ok(Self {
            short_title,
            title: None,
            window_title: None,
        })
    }

    pub fn with_title(mut self, title: Option<String>) -> DomainResult<Self> {
        if let Some(title) = &title {
            check_length("title", title, TITLE_MAX_LENGTH)?;
        }
        self.title = title.filter(|t| !t.is_empty());
        Ok(self)
    }

    pub fn with_window_title(mut self, window_title: Option<String>) -> DomainResult<Self> {
        if let Some(window_title) = &window_title {
            check_length("window title", window_title, TITLE_MAX_LENGTH)?;
        }
        self.window_title = window_title.filter(|t| !t.is_empty());
        Ok(self)
    }

    pub fn short_title(&self) -> &str {
        &self.short_title
    }

    pub fn raw_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn raw_window_title(&self) -> Option<&str> {
        self.window_title.as_deref()
    }

    /// Long title, falling back to the short title.
    pub fn title(&self) -> String {
        slimdown(self.title_source())
    }

    pub fn first_title_line(&self) -> String {
        let source = normalize_newlines(self.title_source());
        slimdown(source.split('\n').next().unwrap_or_default())
    }

    /// Everything after the first line of the long title.
    pub fn subtitle_lines(&self) -> String {
        let source = normalize_newlines(self.title.as_deref().unwrap_or_default());
        slimdown(source.split_once('\n').map(|(_, rest)| rest).unwrap_or_default())
    }

    pub fn window_title(&self) -> String {
        let first_line = self.first_title_line();
        let chosen = firstof([
            self.window_title.as_deref(),
            Some(self.short_title.as_str()),
            Some(first_line.as_str()),
        ])
        .unwrap_or_default();
        strip_tags(&slimdown(chosen))
    }

    fn title_source(&self) -> &str {
        firstof([self.title.as_deref(), Some(self.short_title.as_str())]).unwrap_or_default()
    }
}

impl fmt::Display for PageTitles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&strip_tags(&slimdown(&self.short_title)))
    }
}

fn check_length(field: &str, value: &str, max: usize) -> DomainResult<()> {
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}
