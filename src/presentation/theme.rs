// Theme options - Color tokens handed in by the theming UI
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderConfigError {
    #[error("theme token {0} is not set")]
    MissingToken(&'static str),

    #[error("theme token {token} has unusable value {value:?}")]
    InvalidToken { token: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeToken {
    MainColor,
    MovingAverageColor,
    TextColor,
    BorderColor,
}

impl ThemeToken {
    pub fn name(self) -> &'static str {
        match self {
            ThemeToken::MainColor => "graph_main_color",
            ThemeToken::MovingAverageColor => "graph_mavg_color",
            ThemeToken::TextColor => "graph_text_color",
            ThemeToken::BorderColor => "graph_border_color",
        }
    }

    /// Used whenever the theme leaves the token unset or unusable
    pub fn fallback(self) -> &'static str {
        match self {
            ThemeToken::MainColor => "rgba(75, 192, 192, 1)",
            ThemeToken::MovingAverageColor => "rgba(255, 99, 132, 1)",
            ThemeToken::TextColor => "#666666",
            ThemeToken::BorderColor => "rgba(0, 0, 0, 0.1)",
        }
    }
}

/// Built-in palettes a theme can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    Light,
    Dark,
}

impl ThemePreset {
    pub fn color(self, token: ThemeToken) -> &'static str {
        match (self, token) {
            (ThemePreset::Light, ThemeToken::MainColor) => "rgba(32, 120, 200, 0.6)",
            (ThemePreset::Light, ThemeToken::MovingAverageColor) => "rgb(220, 60, 60)",
            (ThemePreset::Light, ThemeToken::TextColor) => "#141420",
            (ThemePreset::Light, ThemeToken::BorderColor) => "#e6e6eb",
            (ThemePreset::Dark, ThemeToken::MainColor) => "rgba(64, 160, 255, 0.6)",
            (ThemePreset::Dark, ThemeToken::MovingAverageColor) => "rgb(255, 230, 70)",
            (ThemePreset::Dark, ThemeToken::TextColor) => "#ebebf5",
            (ThemePreset::Dark, ThemeToken::BorderColor) => "#28282d",
        }
    }
}

/// Theme colors for the frame-time chart. Any token may be missing; unset
/// tokens come from `preset` when one is named.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    pub preset: Option<ThemePreset>,
    pub graph_main_color: Option<String>,
    pub graph_mavg_color: Option<String>,
    pub graph_text_color: Option<String>,
    pub graph_border_color: Option<String>,
}

/// Theme with every token filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub main_color: String,
    pub moving_average_color: String,
    pub text_color: String,
    pub border_color: String,
}

impl ThemeOptions {
    pub fn from_preset(preset: ThemePreset) -> Self {
        Self {
            preset: Some(preset),
            ..Default::default()
        }
    }

    fn raw(&self, token: ThemeToken) -> Option<&String> {
        match token {
            ThemeToken::MainColor => self.graph_main_color.as_ref(),
            ThemeToken::MovingAverageColor => self.graph_mavg_color.as_ref(),
            ThemeToken::TextColor => self.graph_text_color.as_ref(),
            ThemeToken::BorderColor => self.graph_border_color.as_ref(),
        }
    }

    pub fn token(&self, token: ThemeToken) -> Result<&str, RenderConfigError> {
        let own = self.raw(token).map(|v| v.trim()).filter(|v| !v.is_empty());
        let value = match (own, self.preset) {
            (Some(value), _) => value,
            (None, Some(preset)) => preset.color(token),
            (None, None) => return Err(RenderConfigError::MissingToken(token.name())),
        };

        if value.chars().any(|c| c.is_control() || matches!(c, ';' | '{' | '}' | '<' | '>')) {
            return Err(RenderConfigError::InvalidToken {
                token: token.name(),
                value: value.to_string(),
            });
        }
        Ok(value)
    }

    /// Token value, or the preset's (else the built-in) color when it cannot be used
    pub fn color(&self, token: ThemeToken) -> String {
        match self.token(token) {
            Ok(value) => value.to_string(),
            Err(e) => {
                let fallback = self
                    .preset
                    .map_or(token.fallback(), |preset| preset.color(token));
                tracing::warn!("{}, using {}", e, fallback);
                fallback.to_string()
            }
        }
    }

    pub fn resolve(&self) -> ResolvedTheme {
        ResolvedTheme {
            main_color: self.color(ThemeToken::MainColor),
            moving_average_color: self.color(ThemeToken::MovingAverageColor),
            text_color: self.color(ThemeToken::TextColor),
            border_color: self.color(ThemeToken::BorderColor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_tokens_override_preset() {
        let theme = ThemeOptions {
            graph_main_color: Some(" #123456 ".to_string()),
            ..ThemeOptions::from_preset(ThemePreset::Dark)
        };
        assert_eq!(theme.token(ThemeToken::MainColor), Ok("#123456"));

        let resolved = theme.resolve();
        assert_eq!(resolved.main_color, "#123456");
        assert_eq!(resolved.moving_average_color, "rgb(255, 230, 70)");
        assert_eq!(resolved.border_color, "#28282d");
    }

    #[test]
    fn test_missing_and_blank_tokens_fall_back() {
        let theme = ThemeOptions {
            graph_mavg_color: Some("   ".to_string()),
            ..Default::default()
        };

        assert_eq!(
            theme.token(ThemeToken::MovingAverageColor),
            Err(RenderConfigError::MissingToken("graph_mavg_color"))
        );

        let resolved = theme.resolve();
        assert_eq!(resolved.main_color, ThemeToken::MainColor.fallback());
        assert_eq!(
            resolved.moving_average_color,
            ThemeToken::MovingAverageColor.fallback()
        );
        assert_eq!(resolved.text_color, ThemeToken::TextColor.fallback());
        assert_eq!(resolved.border_color, ThemeToken::BorderColor.fallback());
    }

    #[test]
    fn test_unusable_token_falls_back() {
        let theme = ThemeOptions {
            graph_text_color: Some("red; background: url(x)".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            theme.token(ThemeToken::TextColor),
            Err(RenderConfigError::InvalidToken { token: "graph_text_color", .. })
        ));
        assert_eq!(theme.color(ThemeToken::TextColor), "#666666");

        let with_preset = ThemeOptions {
            preset: Some(ThemePreset::Light),
            ..theme
        };
        assert_eq!(with_preset.color(ThemeToken::TextColor), "#141420");
    }

    #[test]
    fn test_preset_deserializes_by_name() {
        let theme: ThemeOptions = serde_json::from_str(r#"{ "preset": "dark" }"#).unwrap();
        assert_eq!(theme, ThemeOptions::from_preset(ThemePreset::Dark));
        assert_eq!(theme.color(ThemeToken::TextColor), "#ebebf5");
    }
}
