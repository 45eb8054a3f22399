//! Configuration for the Quire document codec.
//!
//! The codec reads no files itself. Hosts either build a [`CodecConfig`] in
//! code, embed it as a section of their own serde configuration, or parse a
//! TOML snippet with [`CodecConfig::from_toml_str`]:
//!
//! ```toml
//! [spoiler]
//! element = "spoiler"
//! color = "white"
//! background = "black"
//!
//! [html]
//! max_depth = 256
//!
//! [images]
//! url_template = "https://cdn.example.com/assets/{id}"
//! ```

use serde::Deserialize;

/// Placeholder replaced by the asset id in [`ImageConfig::url_template`].
const ASSET_ID_PLACEHOLDER: &str = "{id}";

/// Codec configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Spoiler detection and rendering.
    pub spoiler: SpoilerConfig,
    /// HTML parsing limits.
    pub html: HtmlConfig,
    /// Image rendering.
    pub images: ImageConfig,
}

impl CodecConfig {
    /// Parse configuration from a TOML string and validate it.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the spoiler element name is empty or
    /// the nesting limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.spoiler.element, "spoiler.element")?;
        if self.html.max_depth == 0 {
            return Err(ConfigError::Validation(
                "html.max_depth must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Spoiler configuration.
///
/// Spoilers are recognized either by the dedicated element or by an inline
/// style carrying the sentinel foreground/background color pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpoilerConfig {
    /// Element name emitted and recognized for spoiler spans.
    pub element: String,
    /// Sentinel foreground color.
    pub color: String,
    /// Sentinel background color.
    pub background: String,
}

impl Default for SpoilerConfig {
    fn default() -> Self {
        Self {
            element: "spoiler".to_owned(),
            color: "white".to_owned(),
            background: "black".to_owned(),
        }
    }
}

impl SpoilerConfig {
    /// Check whether a color pair is the spoiler sentinel.
    ///
    /// Comparison ignores ASCII case and surrounding whitespace.
    #[must_use]
    pub fn matches_colors(&self, color: Option<&str>, background: Option<&str>) -> bool {
        let matches = |value: Option<&str>, expected: &str| {
            value.is_some_and(|value| value.trim().eq_ignore_ascii_case(expected))
        };
        matches(color, &self.color) && matches(background, &self.background)
    }
}

/// HTML parsing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// Maximum element nesting depth accepted by the parser.
    pub max_depth: usize,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// Image rendering configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// URL template for generated `img` sources; `{id}` is replaced by the
    /// asset id. When unset, images are emitted without `src`.
    pub url_template: Option<String>,
}

impl ImageConfig {
    /// Resolve the display URL for an asset.
    #[must_use]
    pub fn asset_url(&self, asset_id: &str) -> Option<String> {
        self.url_template
            .as_deref()
            .map(|template| template.replace(ASSET_ID_PLACEHOLDER, asset_id))
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.spoiler.element, "spoiler");
        assert_eq!(config.spoiler.color, "white");
        assert_eq!(config.spoiler.background, "black");
        assert_eq!(config.html.max_depth, 256);
        assert_eq!(config.images.url_template, None);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = CodecConfig::from_toml_str("").unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_partial_section() {
        let config = CodecConfig::from_toml_str(
            r#"
[spoiler]
color = "black"

[html]
max_depth = 32
"#,
        )
        .unwrap();
        assert_eq!(config.spoiler.color, "black");
        assert_eq!(config.spoiler.background, "black");
        assert_eq!(config.spoiler.element, "spoiler");
        assert_eq!(config.html.max_depth, 32);
    }

    #[test]
    fn test_invalid_toml() {
        let result = CodecConfig::from_toml_str("[html]\nmax_depth = \"deep\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_depth_rejected() {
        let result = CodecConfig::from_toml_str("[html]\nmax_depth = 0");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_empty_spoiler_element_rejected() {
        let result = CodecConfig::from_toml_str("[spoiler]\nelement = \"\"");
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: spoiler.element cannot be empty"
        );
    }

    #[test]
    fn test_matches_colors() {
        let spoiler = SpoilerConfig::default();
        assert!(spoiler.matches_colors(Some("white"), Some("black")));
        assert!(spoiler.matches_colors(Some(" White "), Some("BLACK")));
        assert!(!spoiler.matches_colors(Some("white"), None));
        assert!(!spoiler.matches_colors(Some("red"), Some("black")));
    }

    #[test]
    fn test_asset_url() {
        let images = ImageConfig {
            url_template: Some("https://cdn.example.com/{id}.jpg".to_owned()),
        };
        assert_eq!(
            images.asset_url("abc"),
            Some("https://cdn.example.com/abc.jpg".to_owned())
        );
        assert_eq!(ImageConfig::default().asset_url("abc"), None);
    }
}
