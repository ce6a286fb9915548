//! Options a host page passes when attaching the date selector.
//!
//! Deserializing merges the given keys over [`Config::default`] at every
//! level, so `{"fieldSelectors": {"day": "#d"}}` keeps the default month,
//! year and value-attribute selectors.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_DAY_SELECTOR, DEFAULT_LOCALE, DEFAULT_MIN_YEAR, DEFAULT_MONTH_SELECTOR,
    DEFAULT_VALUE_ATTRIBUTE, DEFAULT_YEAR_SELECTOR,
};
use crate::types::Field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Locale tag used to render month names, `cs-CZ` or `cs_CZ`
    pub locale: String,
    /// Oldest selectable year (inclusive)
    pub min_year: u16,
    pub field_selectors: FieldSelectors,
}

/// How each control is located within a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldSelectors {
    pub day: String,
    pub month: String,
    pub year: String,
    /// Attribute holding a preset initial value
    pub value_attribute: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_owned(),
            min_year: DEFAULT_MIN_YEAR,
            field_selectors: FieldSelectors::default(),
        }
    }
}

impl Default for FieldSelectors {
    fn default() -> Self {
        Self {
            day: DEFAULT_DAY_SELECTOR.to_owned(),
            month: DEFAULT_MONTH_SELECTOR.to_owned(),
            year: DEFAULT_YEAR_SELECTOR.to_owned(),
            value_attribute: DEFAULT_VALUE_ATTRIBUTE.to_owned(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub const fn with_min_year(mut self, min_year: u16) -> Self {
        self.min_year = min_year;
        self
    }
}

impl FieldSelectors {
    /// Selector locating the control for `field`
    pub fn selector(&self, field: Field) -> &str {
        match field {
            Field::Day => &self.day,
            Field::Month => &self.month,
            Field::Year => &self.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.locale, "cs-CZ");
        assert_eq!(config.min_year, 1900);
        assert_eq!(config.field_selectors.day, ".select2Date__item--day");
        assert_eq!(config.field_selectors.month, ".select2Date__item--month");
        assert_eq!(config.field_selectors.year, ".select2Date__item--year");
        assert_eq!(config.field_selectors.value_attribute, "select2date-value");
    }

    #[test]
    fn test_deserialize_merges_nested_defaults() {
        let config: Config =
            serde_json::from_str(r##"{"minYear": 1950, "fieldSelectors": {"day": "#dd"}}"##)
                .unwrap();
        assert_eq!(config.min_year, 1950);
        assert_eq!(config.locale, "cs-CZ");
        assert_eq!(config.field_selectors.day, "#dd");
        assert_eq!(config.field_selectors.month, ".select2Date__item--month");
        assert_eq!(config.field_selectors.value_attribute, "select2date-value");
    }

    #[test]
    fn test_deserialize_empty_object() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["minYear"], 1900);
        assert_eq!(json["fieldSelectors"]["valueAttribute"], "select2date-value");
    }

    #[test]
    fn test_builder() {
        let config = Config::default().with_locale("en-US").with_min_year(2000);
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.min_year, 2000);
    }

    #[test]
    fn test_selector_by_field() {
        let selectors = FieldSelectors::default();
        assert_eq!(selectors.selector(Field::Day), ".select2Date__item--day");
        assert_eq!(selectors.selector(Field::Year), ".select2Date__item--year");
    }
}
