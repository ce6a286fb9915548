//! Links three selectable lists (day, month, year) into one date picker.
//!
//! A host UI implements [`SelectableList`] for its dropdown widget and
//! [`FieldScope`] for the element grouping three of them, then forwards
//! every select or clear to [`LinkedDateSelector::handle`]. The controller
//! keeps the day list matching the chosen month and year.

mod config;
mod consts;
mod control;
mod options;
mod prelude;
mod selector;
mod types;

#[cfg(test)]
mod testing;

pub use config::{Config, FieldSelectors};
pub use consts::*;
pub use control::{FieldScope, ListSettings, SelectableList};
pub use options::{
    OptionEntry, OptionList, compute_day_options, day_count, month_name, month_options,
    resolve_locale, year_options,
};
pub use selector::{
    CreateError, EventKind, LinkedDateSelector, SelectionEvent, SelectionState, current_year,
};
pub use types::{Day, Field, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid value: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day: {} (must be 1-{})", "_0", MAX_DAY)]
    DayOutOfRange(u8),
    #[display(fmt = "Empty value")]
    EmptyInput,
    #[display(fmt = "Option list must start with the empty placeholder entry")]
    MissingPlaceholder,
}

impl std::error::Error for ParseError {}

/// Creates one selector per scope, like binding the widget to every
/// matching element on a page. Scopes lacking a control are skipped.
pub fn attach_all<S, I>(scopes: I, config: &Config) -> Vec<LinkedDateSelector<S::Control>>
where
    S: FieldScope,
    I: IntoIterator<Item = S>,
{
    let year = current_year();
    scopes
        .into_iter()
        .filter_map(|scope| LinkedDateSelector::create_at(&scope, config.clone(), year))
        .collect()
}
