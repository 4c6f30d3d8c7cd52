use crate::{store, CoreError};
use serde::{Deserialize, Serialize};

pub const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
    tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
    exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in \
    reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint \
    occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

fn default_text() -> String {
    format!("Hello {LOREM}!")
}

fn default_blur_line_width() -> f32 {
    0.2
}

fn default_max_lines() -> usize {
    3
}

fn default_min_lines() -> usize {
    1
}

fn default_font_size() -> f32 {
    16.0
}

fn default_container_width() -> f32 {
    320.0
}

/// What the sample app remembers between runs.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Setting {
    /// Text shown in the previews.
    #[serde(default = "default_text")]
    pub text: String,
    /// Stored as a plain number, validated when the label is built.
    #[serde(default = "default_blur_line_width")]
    pub blur_line_width: f32,
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
    #[serde(default = "default_min_lines")]
    pub min_lines: usize,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Width of the preview box.
    #[serde(default = "default_container_width")]
    pub container_width: f32,
}

impl Default for Setting {
    fn default() -> Self {
        Self {
            text: default_text(),
            blur_line_width: default_blur_line_width(),
            max_lines: default_max_lines(),
            min_lines: default_min_lines(),
            font_size: default_font_size(),
            container_width: default_container_width(),
        }
    }
}

impl Setting {
    pub fn load() -> Self {
        store::get_local_config::<Self>("config").unwrap_or_default()
    }

    pub fn store(&self) -> Result<(), CoreError> {
        store::set_local_config("config", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let setting: Setting = serde_json::from_str(r#"{ "max_lines": 5 }"#).unwrap();
        assert_eq!(setting.max_lines, 5);
        assert_eq!(setting.min_lines, 1);
        assert_eq!(setting.blur_line_width, 0.2);
        assert!(setting.text.starts_with("Hello Lorem ipsum"));
    }
}
