use chrono::{Locale, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::ParseError;
use crate::consts::{JANUARY, MIN_DAY, PLACEHOLDER_ID};
use crate::types::{Month, Year, days_in_month};

/// Any year works for month names; only the month component is formatted.
const MONTH_NAME_YEAR: i32 = 2000;

/// A single selectable choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionEntry {
    pub id: String,
    pub label: String,
}

impl OptionEntry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// The empty entry meaning "no selection"
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_ID, PLACEHOLDER_ID)
    }

    /// Entry whose id and label are both the number's text
    fn numeric(value: impl ToString) -> Self {
        let text = value.to_string();
        Self {
            id: text.clone(),
            label: text,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_ID
    }
}

/// Ordered choices for one control, always led by the placeholder entry.
///
/// Serialized as a plain array; deserializing rejects arrays that do not
/// start with the placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<OptionEntry>", into = "Vec<OptionEntry>")]
pub struct OptionList {
    entries: Vec<OptionEntry>,
}

impl OptionList {
    /// Prepends the placeholder to `entries`
    pub fn with_placeholder(entries: impl IntoIterator<Item = OptionEntry>) -> Self {
        let entries = std::iter::once(OptionEntry::placeholder())
            .chain(entries)
            .collect();
        Self { entries }
    }

    /// All entries, placeholder first
    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    /// Entries without the leading placeholder
    pub fn choices(&self) -> &[OptionEntry] {
        self.entries.get(1..).unwrap_or_default()
    }

    /// Number of real choices (placeholder excluded)
    pub fn choice_count(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }
}

impl TryFrom<Vec<OptionEntry>> for OptionList {
    type Error = ParseError;

    fn try_from(entries: Vec<OptionEntry>) -> Result<Self, Self::Error> {
        match entries.first() {
            Some(first) if first.is_placeholder() => Ok(Self { entries }),
            _ => Err(ParseError::MissingPlaceholder),
        }
    }
}

impl From<OptionList> for Vec<OptionEntry> {
    fn from(list: OptionList) -> Self {
        list.entries
    }
}

/// Builds the day choices for a month.
///
/// An unset month counts as January and an unset year as `current_year`.
pub fn compute_day_options(
    month: Option<Month>,
    year: Option<Year>,
    current_year: Year,
) -> OptionList {
    let count = day_count(month, year, current_year);
    OptionList::with_placeholder((MIN_DAY..=count).map(OptionEntry::numeric))
}

/// Length of the month the day list is built for, with the same fallbacks
/// as [`compute_day_options`].
pub fn day_count(month: Option<Month>, year: Option<Year>, current_year: Year) -> u8 {
    let month = month.map_or(JANUARY, Month::get);
    let year = year.unwrap_or(current_year);
    days_in_month(year.get(), month)
}

/// Builds the twelve month choices labelled in `locale`.
pub fn month_options(locale: &str) -> OptionList {
    let locale = resolve_locale(locale);
    OptionList::with_placeholder(
        Month::all().map(|month| OptionEntry::new(month.to_string(), month_name(month, locale))),
    )
}

/// Builds the year choices from `current_year` down to `min_year`.
///
/// Empty (placeholder only) when `min_year` is after `current_year`.
pub fn year_options(current_year: Year, min_year: u16) -> OptionList {
    OptionList::with_placeholder(
        (min_year.max(1)..=current_year.get())
            .rev()
            .map(OptionEntry::numeric),
    )
}

/// Long, locale-formatted name of a month.
pub fn month_name(month: Month, locale: Locale) -> String {
    NaiveDate::from_ymd_opt(MONTH_NAME_YEAR, u32::from(month.get()), 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map_or_else(
            || month.to_string(),
            |dt| {
                Utc.from_utc_datetime(&dt)
                    .format_localized("%B", locale)
                    .to_string()
            },
        )
}

/// Maps a tag like `cs-CZ` or `cs_CZ` to a chrono locale, POSIX if unknown.
pub fn resolve_locale(tag: &str) -> Locale {
    let normalized = tag.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).unwrap_or_else(|_| {
        log::warn!("unknown locale {tag:?}, month names fall back to POSIX");
        Locale::POSIX
    })
}
