use std::fmt::Write as _;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::domain::errors::{DomainError, DomainResult};

/// Placeholder year for partial dates without a year; a leap year so that
/// 29 February stays representable.
const PLACEHOLDER_YEAR: i32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateVariant {
    #[default]
    Short,
    Long,
}

impl FromStr for DateVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            other => Err(DomainError::Validation(format!("unknown date variant: {other}"))),
        }
    }
}

/// strftime patterns used for partial dates and ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormats {
    pub year: String,
    pub month: String,
    pub day: String,
    pub day_month: String,
    pub year_month: String,
    pub date: String,
    pub range_separator: String,
}

impl DateFormats {
    /// UK style formats.
    pub fn english(variant: DateVariant) -> Self {
        match variant {
            DateVariant::Short => Self {
                year: "%Y".into(),
                month: "%b".into(),
                day: "%d".into(),
                day_month: "%d/%-m".into(),
                year_month: "%-m/%Y".into(),
                date: "%d/%-m/%Y".into(),
                range_separator: "\u{2013}".into(),
            },
            DateVariant::Long => Self {
                year: "%Y".into(),
                month: "%B".into(),
                day: "%-d".into(),
                day_month: "%-d %B".into(),
                year_month: "%B %Y".into(),
                date: "%-d %B %Y".into(),
                range_separator: "\u{2013}".into(),
            },
        }
    }

    pub fn format_date(&self, date: NaiveDate) -> DomainResult<String> {
        render(date, &self.date)
    }

    /// Formats whatever parts of a date are known, e.g. `"3/2024"` or `"14/7"`.
    pub fn format_partial_date(
        &self,
        year: Option<i32>,
        month: Option<u32>,
        day: Option<u32>,
    ) -> DomainResult<String> {
        let pattern = match (year, month, day) {
            (Some(_), Some(_), Some(_)) => &self.date,
            (Some(_), Some(_), None) => &self.year_month,
            (_, Some(_), Some(_)) => &self.day_month,
            (Some(_), None, _) => &self.year,
            (None, Some(_), None) => &self.month,
            (None, None, Some(_)) => &self.day,
            (None, None, None) => return Ok(String::new()),
        };
        let date = partial_to_date(year, month, day)?;
        render(date, pattern)
    }

    /// Formats a date range, leaving out the parts both ends share:
    /// `"15–20/1/2009"`, `"15/1–20/2/2009"`, `"15/1/2009–20/2/2010"`.
    pub fn format_date_range(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> DomainResult<String> {
        let (from, to) = match (from, to) {
            (None, None) => return Ok(String::new()),
            (Some(date), None) | (None, Some(date)) => return self.format_date(date),
            (Some(from), Some(to)) if from == to => return self.format_date(from),
            (Some(from), Some(to)) => (from, to),
        };

        let from_pattern = if from.year() != to.year() {
            &self.date
        } else if from.month() != to.month() {
            &self.day_month
        } else {
            &self.day
        };
        Ok(format!(
            "{}{}{}",
            render(from, from_pattern)?,
            self.range_separator,
            self.format_date(to)?
        ))
    }

    /// Single year or `"2015–2017"`.
    pub fn format_year_range(&self, start: NaiveDate, end: NaiveDate) -> DomainResult<String> {
        let start_year = self.format_partial_date(Some(start.year()), None, None)?;
        if start.year() == end.year() {
            return Ok(start_year);
        }
        let end_year = self.format_partial_date(Some(end.year()), None, None)?;
        Ok(format!("{start_year}{}{end_year}", self.range_separator))
    }

    pub fn format_time_range(&self, from: Option<NaiveTime>, to: Option<NaiveTime>) -> String {
        match (from, to) {
            (None, None) => String::new(),
            (Some(time), None) | (None, Some(time)) => format_time(time),
            (Some(from), Some(to)) if from == to => format_time(from),
            (Some(from), Some(to)) => format!(
                "{}{}{}",
                format_time(from),
                self.range_separator,
                format_time(to)
            ),
        }
    }
}

impl Default for DateFormats {
    fn default() -> Self {
        Self::english(DateVariant::default())
    }
}

/// 24-hour time with the minutes left off when zero: `"9"`, `"13:05"`.
pub fn format_time(time: NaiveTime) -> String {
    if time.minute() == 0 {
        time.hour().to_string()
    } else {
        format!("{}:{:02}", time.hour(), time.minute())
    }
}

pub(crate) fn partial_to_date(
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
) -> DomainResult<NaiveDate> {
    let year = year.unwrap_or(PLACEHOLDER_YEAR);
    let month = month.unwrap_or(1);
    let day = day.unwrap_or(1);
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DomainError::Validation(format!("invalid date: {year:04}-{month:02}-{day:02}"))
    })
}

fn render(date: NaiveDate, pattern: &str) -> DomainResult<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern))
        .map_err(|_| DomainError::Validation(format!("invalid date format: {pattern:?}")))?;
    Ok(out)
}
