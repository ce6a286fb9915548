use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ParseError;
use crate::config::Config;
use crate::control::{FieldScope, ListSettings, SelectableList};
use crate::options::{OptionList, compute_day_options, day_count, month_options, year_options};
use crate::types::{Day, Field, Month, Year};

/// The controller's view of what is currently selected.
///
/// `day`, when set, never exceeds the length of the month the day list was
/// last built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub day: Option<Day>,
    pub month: Option<Month>,
    pub year: Option<Year>,
}

impl SelectionState {
    /// The selected calendar date, once all three fields are set
    pub fn date(&self) -> Option<NaiveDate> {
        let (day, month, year) = (self.day?, self.month?, self.year?);
        NaiveDate::from_ymd_opt(
            i32::from(year.get()),
            u32::from(month.get()),
            u32::from(day.get()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The user picked an entry
    Select,
    /// The user cleared the control
    Unselect,
}

/// A notification forwarded from one of the three controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionEvent {
    pub field: Field,
    pub kind: EventKind,
}

impl SelectionEvent {
    pub const fn select(field: Field) -> Self {
        Self {
            field,
            kind: EventKind::Select,
        }
    }

    pub const fn unselect(field: Field) -> Self {
        Self {
            field,
            kind: EventKind::Unselect,
        }
    }
}

/// Error type for locating a field group.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateError {
    /// The scope has no control matching the configured selector.
    #[error("No {field} control matches selector {selector:?}")]
    MissingField { field: Field, selector: String },
}

#[derive(Debug)]
struct FieldGroup<C> {
    day: C,
    month: C,
    year: C,
}

impl<C> FieldGroup<C> {
    const fn get(&self, field: Field) -> &C {
        match field {
            Field::Day => &self.day,
            Field::Month => &self.month,
            Field::Year => &self.year,
        }
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut C> {
        [&mut self.day, &mut self.month, &mut self.year].into_iter()
    }
}

/// Preset values read from the controls before population.
#[derive(Debug, Default)]
struct Presets {
    day: Option<Day>,
    month: Option<Month>,
    year: Option<Year>,
}

/// Keeps one day, month and year control mutually consistent.
///
/// Changing the month, or picking a year, rebuilds the day list for that
/// month. The selected day survives the rebuild unless the new month is too
/// short for it, in which case day 1 is selected.
#[derive(Debug)]
pub struct LinkedDateSelector<C: SelectableList> {
    config: Config,
    fields: FieldGroup<C>,
    day_settings: ListSettings,
    selection: SelectionState,
    current_year: Year,
    disposed: bool,
}

impl<C: SelectableList> LinkedDateSelector<C> {
    /// Locates, populates and binds the controls of one field group.
    ///
    /// Returns `None` without touching any control when the scope lacks one
    /// of the three controls.
    pub fn create<S>(scope: &S, config: Config) -> Option<Self>
    where
        S: FieldScope<Control = C>,
    {
        Self::create_at(scope, config, current_year())
    }

    /// Like [`LinkedDateSelector::create`] with an explicit current year,
    /// which bounds the year list and stands in for an unselected year.
    pub fn create_at<S>(scope: &S, config: Config, current_year: Year) -> Option<Self>
    where
        S: FieldScope<Control = C>,
    {
        Self::try_create_at(scope, config, current_year).ok()
    }

    /// # Errors
    /// Returns `CreateError::MissingField` naming the first control not found.
    pub fn try_create<S>(scope: &S, config: Config) -> Result<Self, CreateError>
    where
        S: FieldScope<Control = C>,
    {
        Self::try_create_at(scope, config, current_year())
    }

    /// # Errors
    /// Returns `CreateError::MissingField` naming the first control not found.
    pub fn try_create_at<S>(
        scope: &S,
        config: Config,
        current_year: Year,
    ) -> Result<Self, CreateError>
    where
        S: FieldScope<Control = C>,
    {
        let selectors = &config.field_selectors;
        let locate = |field: Field| {
            let selector = selectors.selector(field);
            scope.find(selector).ok_or_else(|| CreateError::MissingField {
                field,
                selector: selector.to_owned(),
            })
        };
        let fields = FieldGroup {
            day: locate(Field::Day)?,
            month: locate(Field::Month)?,
            year: locate(Field::Year)?,
        };

        let attribute = selectors.value_attribute.as_str();
        let presets = Presets {
            day: read_preset(&fields.day, attribute, Field::Day),
            month: read_preset(&fields.month, attribute, Field::Month),
            year: read_preset(&fields.year, attribute, Field::Year),
        };
        let day_settings = clearable(&fields.day);

        let mut selector = Self {
            config,
            fields,
            day_settings,
            selection: SelectionState::default(),
            current_year,
            disposed: false,
        };
        selector.initialize(presets);
        Ok(selector)
    }

    /// Current selection
    pub const fn selection(&self) -> SelectionState {
        self.selection
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Reacts to a select or unselect on one of the controls.
    ///
    /// A month change always rebuilds the day list. A year change rebuilds
    /// it only when a year was picked; clearing the year leaves the day list
    /// as it is. Ignored after [`LinkedDateSelector::dispose`].
    pub fn handle(&mut self, event: SelectionEvent) {
        if self.disposed {
            log::debug!("ignoring {} event on disposed selector", event.field);
            return;
        }

        match event.field {
            Field::Day => {
                self.selection.day = self.read(event);
            },
            Field::Month => {
                self.selection.month = self.read(event);
                self.rebuild_days();
            },
            Field::Year => {
                self.selection.year = self.read(event);
                if self.selection.year.is_some() {
                    self.rebuild_days();
                }
            },
        }
    }

    /// Detaches the listeners of all three controls. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        for control in self.fields.iter_mut() {
            control.detach();
        }
        self.disposed = true;
    }

    fn initialize(&mut self, presets: Presets) {
        let months = month_options(&self.config.locale);
        let years = year_options(self.current_year, self.config.min_year);
        let month_settings = clearable(&self.fields.month);
        let year_settings = clearable(&self.fields.year);

        self.fields.month.populate(&months, &month_settings);
        self.fields.year.populate(&years, &year_settings);

        self.selection.month =
            hydrate(&mut self.fields.month, &months, presets.month, Field::Month);
        self.selection.year = hydrate(&mut self.fields.year, &years, presets.year, Field::Year);

        let days = self.day_options();
        self.fields.day.populate(&days, &self.day_settings);
        match presets.day {
            Some(day) => {
                let day = self.clamp_day(day);
                self.apply_day(Some(day));
            },
            None => {
                self.selection.day = parse_value(&self.fields.day.value(), Field::Day);
            },
        }

        for control in self.fields.iter_mut() {
            control.attach();
        }
        log::debug!(
            "populated date selector: {} months, {} years, {} days",
            months.choice_count(),
            years.choice_count(),
            days.choice_count()
        );
    }

    /// Replaces the day list with the current month's days and reselects
    /// the stored day, falling back to day 1 when it no longer exists.
    fn rebuild_days(&mut self) {
        let days = self.day_options();
        self.fields.day.populate(&days, &self.day_settings);

        let day = self.selection.day.map(|day| self.clamp_day(day));
        self.apply_day(day);
        log::debug!("rebuilt day list with {} days", days.choice_count());
    }

    fn day_options(&self) -> OptionList {
        compute_day_options(self.selection.month, self.selection.year, self.current_year)
    }

    fn clamp_day(&self, day: Day) -> Day {
        let count = day_count(self.selection.month, self.selection.year, self.current_year);
        if day.get() > count {
            log::debug!("day {day} exceeds {count} days, selecting day 1");
            Day::FIRST
        } else {
            day
        }
    }

    fn apply_day(&mut self, day: Option<Day>) {
        let id = day.map_or_else(String::new, |day| day.to_string());
        self.fields.day.set_value(&id);
        self.selection.day = day;
    }

    fn read<T>(&self, event: SelectionEvent) -> Option<T>
    where
        T: FromStr<Err = ParseError>,
    {
        match event.kind {
            EventKind::Unselect => None,
            EventKind::Select => parse_value(&self.fields.get(event.field).value(), event.field),
        }
    }
}

/// Local calendar year, the upper end of the year list
pub fn current_year() -> Year {
    Year::saturating_from_calendar(Local::now().year())
}

fn clearable<C: SelectableList>(control: &C) -> ListSettings {
    ListSettings {
        allow_clear: true,
        placeholder: control.placeholder(),
    }
}

fn read_preset<C, T>(control: &C, attribute: &str, field: Field) -> Option<T>
where
    C: SelectableList,
    T: FromStr<Err = ParseError>,
{
    control
        .attribute(attribute)
        .and_then(|raw| parse_value(&raw, field))
}

/// Applies a preset to a populated control, or adopts the control's own
/// value when there is none.
fn hydrate<C, T>(
    control: &mut C,
    options: &OptionList,
    preset: Option<T>,
    field: Field,
) -> Option<T>
where
    C: SelectableList,
    T: FromStr<Err = ParseError> + ToString,
{
    if let Some(value) = preset {
        let id = value.to_string();
        if options.contains_id(&id) {
            control.set_value(&id);
            return Some(value);
        }
        log::warn!("preset {field} {id} is not among the choices, ignoring it");
    }
    parse_value(&control.value(), field)
}

/// Parses a control value; the empty id means nothing is selected.
fn parse_value<T>(raw: &str, field: Field) -> Option<T>
where
    T: FromStr<Err = ParseError>,
{
    if raw.trim().is_empty() {
        return None;
    }
    raw.parse()
        .map_err(|err| log::warn!("ignoring {field} value {raw:?}: {err}"))
        .ok()
}
