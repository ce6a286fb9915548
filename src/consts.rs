/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, also the fallback when a stored day overflows
pub const MIN_DAY: u8 = 1;

/// Longest possible month
pub const MAX_DAY: u8 = 31;

/// Month number for January, used when no month is selected
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Id and label of the leading "no selection" entry
pub const PLACEHOLDER_ID: &str = "";

/// Locale used for month names when none is configured
pub const DEFAULT_LOCALE: &str = "cs-CZ";
/// Oldest selectable year when none is configured
pub const DEFAULT_MIN_YEAR: u16 = 1900;

/// Default selector of the day control
pub const DEFAULT_DAY_SELECTOR: &str = ".select2Date__item--day";
/// Default selector of the month control
pub const DEFAULT_MONTH_SELECTOR: &str = ".select2Date__item--month";
/// Default selector of the year control
pub const DEFAULT_YEAR_SELECTOR: &str = ".select2Date__item--year";
/// Default data attribute carrying a preset value
pub const DEFAULT_VALUE_ATTRIBUTE: &str = "select2date-value";
