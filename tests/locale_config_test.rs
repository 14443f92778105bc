use chrono::{TimeZone, Utc};
use small_utils::core::date::format_date;
use small_utils::core::number::format_number;
use small_utils::utils::error::ErrorCategory;
use small_utils::{DateFormatOptions, DateStyle, LocaleRegistry, NumberFormatOptions, UtilError};
use std::io::Write;
use tempfile::NamedTempFile;

const DUTCH_LOCALE: &str = r#"
default = "nl-NL"

[[locales]]
id = "nl-NL"
decimal_separator = ","
group_separator = "."
month_names = ["januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus", "september", "oktober", "november", "december"]
month_abbreviations = ["jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec"]
weekday_names = ["zondag", "maandag", "dinsdag", "woensdag", "donderdag", "vrijdag", "zaterdag"]
weekday_abbreviations = ["zo", "ma", "di", "wo", "do", "vr", "za"]

[locales.date]
short = "%d-%m-%Y"
medium = "%-d %b %Y"
long = "%-d %B %Y"
full = "%A %-d %B %Y"
time_short = "%H:%M"
time_medium = "%H:%M:%S"
date_time_separator = " "
"#;

fn write_locale_file(content: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_load_locale_file() -> anyhow::Result<()> {
    let file = write_locale_file(DUTCH_LOCALE)?;
    let registry = LocaleRegistry::from_file(file.path())?;

    assert_eq!(registry.ids(), vec!["en-US", "nl-NL"]);
    assert_eq!(registry.default_locale().id, "nl-NL");
    assert_eq!(registry.resolve("nl-BE").id, "nl-NL");
    assert_eq!(registry.resolve("sv-SE").id, "nl-NL");
    assert_eq!(registry.resolve("en-US").id, "en-US");

    let dutch = registry.resolve("nl");
    let date = Utc.with_ymd_and_hms(2024, 3, 5, 8, 30, 0).unwrap();
    assert_eq!(
        format_date(&date, Some(dutch), &DateFormatOptions::new(DateStyle::Full)),
        "dinsdag 5 maart 2024"
    );
    assert_eq!(
        format_number(1234567.25, Some(dutch), &NumberFormatOptions::default()),
        "1.234.567,25"
    );
    Ok(())
}

#[test]
fn test_locale_file_overrides_builtin() -> anyhow::Result<()> {
    let mut registry = LocaleRegistry::builtin()?;
    let before = registry.len();

    registry.merge_toml(&DUTCH_LOCALE.replace("nl-NL", "de-DE"))?;

    assert_eq!(registry.len(), before);
    assert_eq!(registry.resolve("de-DE").month_names[0], "januari");
    Ok(())
}

#[test]
fn test_env_substitution_in_locale_file() -> anyhow::Result<()> {
    std::env::set_var("SMALL_UTILS_TEST_LOCALE_ID", "nl-BE");
    let content = DUTCH_LOCALE.replace("nl-NL", "${SMALL_UTILS_TEST_LOCALE_ID}");

    let registry = LocaleRegistry::from_toml_str(&content)?;
    assert!(registry.get("nl-be").is_some());
    assert_eq!(registry.default_locale().id, "nl-BE");
    Ok(())
}

#[test]
fn test_short_name_table_is_rejected() -> anyhow::Result<()> {
    let broken = DUTCH_LOCALE.replace("\"november\", \"december\"", "\"november\"");
    let file = write_locale_file(&broken)?;

    let err = LocaleRegistry::from_file(file.path()).unwrap_err();
    assert!(matches!(err, UtilError::InvalidConfigValueError { ref field, .. } if field == "month_names"));
    assert_eq!(err.category(), ErrorCategory::Configuration);
    Ok(())
}

#[test]
fn test_malformed_and_missing_files() -> anyhow::Result<()> {
    let file = write_locale_file("[[locales]\nid = ")?;
    let err = LocaleRegistry::from_file(file.path()).unwrap_err();
    assert!(matches!(err, UtilError::ConfigError { .. }));

    let dir = tempfile::tempdir()?;
    let err = LocaleRegistry::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, UtilError::IoError(_)));
    Ok(())
}

#[test]
fn test_unknown_default_is_rejected() {
    let content = DUTCH_LOCALE.replace("default = \"nl-NL\"", "default = \"pt-BR\"");
    let err = LocaleRegistry::from_toml_str(&content).unwrap_err();
    assert!(matches!(err, UtilError::InvalidConfigValueError { ref field, .. } if field == "default"));
}
