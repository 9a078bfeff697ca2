//! Field configuration as stored in `config.toml`.
//!
//! Every key is optional; missing keys keep the defaults of [`Props`].

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::keys::Delimiter;
use crate::props::{Autocomplete, Props, DEFAULT_MIN_QUERY_LENGTH, DEFAULT_PLACEHOLDER, DEFAULT_REMOVE_GLYPH};
use crate::theme::{Palette, PaletteOverrides};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub placeholder: String,
    pub delimiters: Vec<Delimiter>,
    pub autocomplete: Autocomplete,
    pub min_query_length: usize,
    pub read_only: bool,
    pub inline: bool,
    pub autofocus: bool,
    pub allow_delete_from_empty_input: bool,
    pub allow_duplicates: bool,
    pub remove_glyph: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_field: Option<String>,
    pub palette: PaletteOverrides,
    pub logging: LoggingConfig,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            delimiters: Delimiter::defaults(),
            autocomplete: Autocomplete::Off,
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            read_only: false,
            inline: true,
            autofocus: true,
            allow_delete_from_empty_input: true,
            allow_duplicates: false,
            remove_glyph: DEFAULT_REMOVE_GLYPH.to_string(),
            label_field: None,
            palette: PaletteOverrides::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl FieldConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Props with this configuration applied; tags and suggestions empty
    pub fn props(&self) -> Props {
        Props {
            placeholder: self.placeholder.clone(),
            delimiters: self.delimiters.clone(),
            autocomplete: self.autocomplete,
            min_query_length: self.min_query_length,
            read_only: self.read_only,
            inline: self.inline,
            autofocus: self.autofocus,
            allow_delete_from_empty_input: self.allow_delete_from_empty_input,
            remove_glyph: self.remove_glyph.clone(),
            label_field: self.label_field.clone(),
            palette: Palette::merged(&self.palette),
            ..Props::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Rgb, SlotStyle};

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(FieldConfig::from_toml("").unwrap(), FieldConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = FieldConfig::from_toml(
            r##"
placeholder = "Add a country"
delimiters = ["enter", ",", "space"]
autocomplete = "single-match"
min_query_length = 1
inline = false
label_field = "name"

[palette.tag]
fg = "#000000"
bg = "#ffcc00"
bold = true

[logging]
level = "debug"
"##,
        )
        .unwrap();

        assert_eq!(
            config.delimiters,
            vec![Delimiter::Enter, Delimiter::Char(','), Delimiter::Char(' ')]
        );
        assert_eq!(config.autocomplete, Autocomplete::SingleMatch);
        assert_eq!(config.logging.level, "debug");

        let props = config.props();
        assert_eq!(props.placeholder, "Add a country");
        assert_eq!(props.min_query_length, 1);
        assert!(!props.inline);
        assert_eq!(props.label_field.as_deref(), Some("name"));
        assert_eq!(
            props.palette.tag,
            SlotStyle::fg(Rgb(0, 0, 0)).on(Rgb(255, 204, 0)).bold()
        );
        assert_eq!(props.palette.remove, Palette::default().remove);
    }

    #[test]
    fn test_bad_values_are_errors() {
        assert!(FieldConfig::from_toml(r#"delimiters = ["comma"]"#).is_err());
        assert!(FieldConfig::from_toml(r#"autocomplete = "sometimes""#).is_err());
        assert!(FieldConfig::from_toml("[palette.tag]\nfg = \"red\"").is_err());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = FieldConfig {
            delimiters: vec![Delimiter::Tab, Delimiter::Char(';')],
            autocomplete: Autocomplete::AnyMatch,
            label_field: Some("name".to_string()),
            ..FieldConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(FieldConfig::from_toml(&text).unwrap(), config);
    }
}
