//! Locale-aware string comparators used by the collated ordering checks.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;

use crate::config::QaConfig;
use crate::error::AssertError;

/// Locale used by the Cyrillic checks when no other collation is given.
pub const DEFAULT_COLLATION_LOCALE: &str = "uk";

/// A string comparator that defines a linguistic sort order.
pub trait Collation {
    fn compare(&self, left: &str, right: &str) -> Ordering;

    /// Short human-readable name used in failure messages.
    fn name(&self) -> String;
}

/// Unicode Collation Algorithm comparator tailored to a CLDR locale.
pub struct LocaleCollator {
    locale: Locale,
    collator: Collator,
}

impl LocaleCollator {
    /// Builds a collator for a BCP-47 language tag such as `uk` or `ru-Cyrl`.
    pub fn new(tag: &str) -> Result<Self, AssertError> {
        let locale: Locale = tag.parse().map_err(|e| AssertError::Collator {
            locale: tag.to_string(),
            reason: format!("{}", e),
        })?;

        let collator = Collator::try_new(&(&locale).into(), CollatorOptions::new()).map_err(
            |e| AssertError::Collator {
                locale: tag.to_string(),
                reason: format!("{}", e),
            },
        )?;

        Ok(Self { locale, collator })
    }

    pub fn ukrainian() -> Result<Self, AssertError> {
        Self::new(DEFAULT_COLLATION_LOCALE)
    }

    /// Collator for the locale configured in `collation_locale`.
    pub fn from_config(config: &QaConfig) -> Result<Self, AssertError> {
        Self::new(&config.collation_locale)
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl Collation for LocaleCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }

    fn name(&self) -> String {
        format!("collation {}", self.locale)
    }
}

impl fmt::Debug for LocaleCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleCollator")
            .field("locale", &self.locale.to_string())
            .finish()
    }
}

/// Raw code point order. Mostly useful to contrast with a real collator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodePointCollation;

impl Collation for CodePointCollation {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        left.cmp(right)
    }

    fn name(&self) -> String {
        "code point order".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ukrainian_collator_orders_ghe_with_upturn_after_ghe() {
        let collator = LocaleCollator::ukrainian().unwrap();

        // U+0491 sorts after every basic Cyrillic letter in code point order
        assert_eq!(collator.compare("ґанок", "дім"), Ordering::Less);
        assert_eq!(collator.compare("гора", "ґанок"), Ordering::Less);
        assert_eq!(CodePointCollation.compare("ґанок", "дім"), Ordering::Greater);
    }

    #[test]
    fn test_collator_basic_order() {
        let collator = LocaleCollator::ukrainian().unwrap();

        assert_eq!(collator.compare("банан", "груша"), Ordering::Less);
        assert_eq!(collator.compare("яблуко", "банан"), Ordering::Greater);
        assert_eq!(collator.compare("груша", "груша"), Ordering::Equal);
    }

    #[test]
    fn test_collator_name_mentions_locale() {
        let collator = LocaleCollator::new("ru-Cyrl").unwrap();
        assert_eq!(collator.name(), "collation ru-Cyrl");
    }

    #[test]
    fn test_from_config_uses_configured_locale() {
        let config = QaConfig {
            collation_locale: "be".to_string(),
            ..QaConfig::default()
        };

        let collator = LocaleCollator::from_config(&config).unwrap();
        assert_eq!(collator.locale().to_string(), "be");
    }

    #[test]
    fn test_invalid_locale_tag() {
        let result = LocaleCollator::new("not a locale!");

        match result {
            Err(AssertError::Collator { locale, .. }) => assert_eq!(locale, "not a locale!"),
            other => panic!("Expected Collator error, got {:?}", other),
        }
    }
}
