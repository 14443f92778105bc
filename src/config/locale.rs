use crate::utils::error::{Result, UtilError};
use crate::utils::validation::{
    validate_distinct, validate_name_table, validate_non_empty_string, validate_range, Validate,
};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const BUILTIN_LOCALES: &str = include_str!("locales.toml");

pub const DEFAULT_LOCALE_ID: &str = "en-US";

/// Number and date conventions for one locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub id: String,
    pub decimal_separator: String,
    pub group_separator: String,
    #[serde(default = "default_grouping_size")]
    pub grouping_size: usize,
    #[serde(default = "default_minus_sign")]
    pub minus_sign: String,
    #[serde(default = "default_percent_suffix")]
    pub percent_suffix: String,
    pub date: DatePatterns,
    pub month_names: Vec<String>,
    pub month_abbreviations: Vec<String>,
    /// Sunday first.
    pub weekday_names: Vec<String>,
    pub weekday_abbreviations: Vec<String>,
}

/// strftime patterns understood by chrono. `%B`, `%b`, `%A` and `%a`
/// are replaced with the locale's own names before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePatterns {
    pub short: String,
    pub medium: String,
    pub long: String,
    pub full: String,
    pub time_short: String,
    pub time_medium: String,
    #[serde(default = "default_date_time_separator")]
    pub date_time_separator: String,
}

fn default_grouping_size() -> usize {
    3
}

fn default_minus_sign() -> String {
    "-".to_string()
}

fn default_percent_suffix() -> String {
    "%".to_string()
}

fn default_date_time_separator() -> String {
    ", ".to_string()
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_LOCALE_ID.to_string(),
            decimal_separator: ".".to_string(),
            group_separator: ",".to_string(),
            grouping_size: default_grouping_size(),
            minus_sign: default_minus_sign(),
            percent_suffix: default_percent_suffix(),
            date: DatePatterns {
                short: "%-m/%-d/%Y".to_string(),
                medium: "%b %-d, %Y".to_string(),
                long: "%B %-d, %Y".to_string(),
                full: "%A, %B %-d, %Y".to_string(),
                time_short: "%-I:%M %p".to_string(),
                time_medium: "%-I:%M:%S %p".to_string(),
                date_time_separator: default_date_time_separator(),
            },
            month_names: names(&[
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ]),
            month_abbreviations: names(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            weekday_names: names(&[
                "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
            ]),
            weekday_abbreviations: names(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
        }
    }
}

impl LocaleConfig {
    /// Language subtag, e.g. `de` for `de-DE`.
    pub fn language(&self) -> &str {
        language_of(&self.id)
    }
}

fn language_of(id: &str) -> &str {
    id.split(['-', '_']).next().unwrap_or(id)
}

fn normalize_id(id: &str) -> String {
    id.trim().replace('_', "-").to_ascii_lowercase()
}

fn validate_pattern(field_name: &str, pattern: &str) -> Result<()> {
    validate_non_empty_string(field_name, pattern)?;
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: pattern.to_string(),
            reason: "Not a valid strftime pattern".to_string(),
        });
    }
    Ok(())
}

impl Validate for LocaleConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("id", self.id.trim())?;
        validate_non_empty_string("decimal_separator", &self.decimal_separator)?;
        validate_non_empty_string("group_separator", &self.group_separator)?;
        validate_distinct(
            &["decimal_separator", "group_separator"],
            &[&self.decimal_separator, &self.group_separator],
        )?;
        validate_range("grouping_size", self.grouping_size, 1, 9)?;
        validate_non_empty_string("minus_sign", &self.minus_sign)?;

        validate_pattern("date.short", &self.date.short)?;
        validate_pattern("date.medium", &self.date.medium)?;
        validate_pattern("date.long", &self.date.long)?;
        validate_pattern("date.full", &self.date.full)?;
        validate_pattern("date.time_short", &self.date.time_short)?;
        validate_pattern("date.time_medium", &self.date.time_medium)?;

        validate_name_table("month_names", &self.month_names, 12)?;
        validate_name_table("month_abbreviations", &self.month_abbreviations, 12)?;
        validate_name_table("weekday_names", &self.weekday_names, 7)?;
        validate_name_table("weekday_abbreviations", &self.weekday_abbreviations, 7)?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct LocaleFile {
    default: Option<String>,
    #[serde(default)]
    locales: Vec<LocaleConfig>,
}

/// Locale definitions keyed by normalized id (`en-us`, `de-de`, ...).
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: BTreeMap<String, LocaleConfig>,
    default_id: String,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        let fallback = LocaleConfig::default();
        let default_id = normalize_id(&fallback.id);
        let mut locales = BTreeMap::new();
        locales.insert(default_id.clone(), fallback);
        Self {
            locales,
            default_id,
        }
    }
}

impl LocaleRegistry {
    /// The default locale plus the definitions shipped with the crate.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::default();
        registry.merge_toml(BUILTIN_LOCALES)?;
        Ok(registry)
    }

    /// Loads a locale file on top of the default locale.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UtilError::IoError)?;
        tracing::debug!("Loading locales from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut registry = Self::default();
        registry.merge_toml(content)?;
        Ok(registry)
    }

    /// Parses `content` and adds its locales, replacing ones with the same id.
    pub fn merge_toml(&mut self, content: &str) -> Result<()> {
        let processed_content = Self::substitute_env_vars(content)?;

        let file: LocaleFile =
            toml::from_str(&processed_content).map_err(|e| UtilError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;

        for locale in file.locales {
            self.insert(locale)?;
        }

        if let Some(default) = file.default {
            self.set_default(&default)?;
        }

        Ok(())
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UtilError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn insert(&mut self, locale: LocaleConfig) -> Result<()> {
        locale.validate()?;
        tracing::trace!("Registering locale {}", locale.id);
        self.locales.insert(normalize_id(&locale.id), locale);
        Ok(())
    }

    pub fn set_default(&mut self, id: &str) -> Result<()> {
        let key = normalize_id(id);
        if !self.locales.contains_key(&key) {
            return Err(UtilError::InvalidConfigValueError {
                field: "default".to_string(),
                value: id.to_string(),
                reason: "No locale with this id is registered".to_string(),
            });
        }
        self.default_id = key;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&LocaleConfig> {
        self.locales.get(&normalize_id(id))
    }

    pub fn default_locale(&self) -> &LocaleConfig {
        // default_id is only ever set to a registered key
        &self.locales[&self.default_id]
    }

    /// Exact id, then the first locale sharing the language, then the default.
    pub fn resolve(&self, id: &str) -> &LocaleConfig {
        if let Some(locale) = self.get(id) {
            return locale;
        }

        let language = normalize_id(language_of(id.trim()));
        if let Some(locale) = self
            .locales
            .values()
            .find(|locale| locale.language().eq_ignore_ascii_case(&language))
        {
            tracing::debug!("Locale {} not registered, using {}", id, locale.id);
            return locale;
        }

        let fallback = self.default_locale();
        tracing::debug!("Locale {} not registered, using default {}", id, fallback.id);
        fallback
    }

    pub fn ids(&self) -> Vec<&str> {
        self.locales.values().map(|locale| locale.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
