// File: src/model/date.rs
// Lightweight date recognition for deadline and event clauses.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use strum::{EnumIter, IntoEnumIterator};

/// Whether a recognized date carried a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStructure {
    DateOnly,
    DateTime,
}

/// The recognized input formats.
///
/// Variant order is the matching priority: `parse_date` walks
/// `DateFormat::iter()` and keeps the first format that accepts the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum DateFormat {
    /// `2019-12-02 1800`
    IsoDateTime,
    /// `2019-12-02`
    IsoDate,
    /// `2/12/2019 1800`
    SlashDateTime,
    /// `2/12/2019`
    SlashDate,
    /// `Dec 2 2019`
    MonthNameDate,
}

impl DateFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::IsoDateTime => "%Y-%m-%d %H%M",
            DateFormat::IsoDate => "%Y-%m-%d",
            DateFormat::SlashDateTime => "%d/%m/%Y %H%M",
            DateFormat::SlashDate => "%d/%m/%Y",
            DateFormat::MonthNameDate => "%b %d %Y",
        }
    }

    /// Human readable shape, used by `--help`.
    pub fn example(&self) -> &'static str {
        match self {
            DateFormat::IsoDateTime => "yyyy-MM-dd HHmm   (2019-12-02 1800)",
            DateFormat::IsoDate => "yyyy-MM-dd        (2019-12-02)",
            DateFormat::SlashDateTime => "d/M/yyyy HHmm     (2/12/2019 1800)",
            DateFormat::SlashDate => "d/M/yyyy          (2/12/2019)",
            DateFormat::MonthNameDate => "MMM d yyyy        (Dec 2 2019)",
        }
    }

    pub fn structure(&self) -> DateStructure {
        match self {
            DateFormat::IsoDateTime | DateFormat::SlashDateTime => DateStructure::DateTime,
            DateFormat::IsoDate | DateFormat::SlashDate | DateFormat::MonthNameDate => {
                DateStructure::DateOnly
            }
        }
    }

    /// Checks token count, separators and digit widths. chrono alone lets a
    /// pattern space match nothing and reads digits greedily, so
    /// `2019-12-021800` would otherwise pass as a date and time.
    fn shape_matches(&self, text: &str) -> bool {
        let tokens: Vec<&str> = text.split(' ').collect();
        match (self, tokens.as_slice()) {
            (DateFormat::IsoDate, [date]) => is_iso_date(date),
            (DateFormat::IsoDateTime, [date, time]) => is_iso_date(date) && is_digits(time, 4, 4),
            (DateFormat::SlashDate, [date]) => is_slash_date(date),
            (DateFormat::SlashDateTime, [date, time]) => {
                is_slash_date(date) && is_digits(time, 4, 4)
            }
            (DateFormat::MonthNameDate, [month, day, year]) => {
                month.len() == 3
                    && month.chars().all(|c| c.is_ascii_alphabetic())
                    && is_digits(day, 1, 2)
                    && is_digits(year, 4, 4)
            }
            _ => false,
        }
    }

    fn try_parse(&self, text: &str) -> Option<NaiveDateTime> {
        if !self.shape_matches(text) {
            return None;
        }
        match self.structure() {
            DateStructure::DateTime => NaiveDateTime::parse_from_str(text, self.pattern()).ok(),
            // Date-only values are pinned to midnight.
            DateStructure::DateOnly => NaiveDate::parse_from_str(text, self.pattern())
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN)),
        }
    }
}

fn is_digits(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.chars().all(|c| c.is_ascii_digit())
}

/// `yyyy-MM-dd`, zero padded.
fn is_iso_date(s: &str) -> bool {
    matches!(
        s.split('-').collect::<Vec<_>>().as_slice(),
        [y, m, d] if is_digits(y, 4, 4) && is_digits(m, 2, 2) && is_digits(d, 2, 2)
    )
}

/// `d/M/yyyy`, padding optional for day and month.
fn is_slash_date(s: &str) -> bool {
    matches!(
        s.split('/').collect::<Vec<_>>().as_slice(),
        [d, m, y] if is_digits(d, 1, 2) && is_digits(m, 1, 2) && is_digits(y, 4, 4)
    )
}

/// A date clause that matched one of the known formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub format: DateFormat,
    pub value: NaiveDateTime,
}

impl ParsedDate {
    pub fn structure(&self) -> DateStructure {
        self.format.structure()
    }

    /// Informational rendering, e.g. `Dec 2 2019` or `Dec 2 2019, 6:00PM`.
    /// Never used for the task's display line.
    pub fn format_pretty(&self) -> String {
        match self.structure() {
            DateStructure::DateOnly => self.value.format("%b %-d %Y").to_string(),
            DateStructure::DateTime => self.value.format("%b %-d %Y, %-I:%M%p").to_string(),
        }
    }
}

/// Tries every known format in priority order. `None` means the text is kept
/// as-is by the caller; unrecognized text is not an error.
pub fn parse_date(text: &str) -> Option<ParsedDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    DateFormat::iter().find_map(|format| {
        format
            .try_parse(text)
            .map(|value| ParsedDate { format, value })
    })
}
