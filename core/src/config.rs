use serde::Deserialize;

use crate::feedback::{COPIED_LABEL, LABEL_RESTORE_MS};
use crate::ogi_url::OGI_PNG_PATH;

pub const DEFAULT_FORM_SELECTOR: &str = "form[hx-target='#ogpi']";
pub const DEFAULT_CONTROL_SELECTOR: &str = "input, select";
pub const DEFAULT_COPY_BUTTON_ID: &str = "copy_url";
pub const DEFAULT_OPEN_BUTTON_ID: &str = "open_url";
pub const DEFAULT_META_BUTTON_ID: &str = "copy_meta";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config json invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config field `{0}` must not be empty")]
    Empty(&'static str),
    #[error("image path must start with '/', got {0:?}")]
    ImagePath(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub form_selector: String,
    pub control_selector: String,
    pub image_path: String,
    pub copy_button_id: String,
    pub open_button_id: String,
    pub meta_button_id: String,
    pub copied_label: String,
    pub label_restore_ms: u32,
    pub highlight: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            form_selector: DEFAULT_FORM_SELECTOR.to_string(),
            control_selector: DEFAULT_CONTROL_SELECTOR.to_string(),
            image_path: OGI_PNG_PATH.to_string(),
            copy_button_id: DEFAULT_COPY_BUTTON_ID.to_string(),
            open_button_id: DEFAULT_OPEN_BUTTON_ID.to_string(),
            meta_button_id: DEFAULT_META_BUTTON_ID.to_string(),
            copied_label: COPIED_LABEL.to_string(),
            label_restore_ms: LABEL_RESTORE_MS,
            highlight: true,
        }
    }
}

impl PageConfig {
    /// Missing fields keep their defaults; unknown fields are an error.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the image path when a non-blank override is given.
    pub fn with_image_path_override(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = path.map(str::trim).filter(|path| !path.is_empty()) {
            self.image_path = path.to_string();
            self.validate()?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("form_selector", &self.form_selector),
            ("control_selector", &self.control_selector),
            ("copy_button_id", &self.copy_button_id),
            ("open_button_id", &self.open_button_id),
            ("meta_button_id", &self.meta_button_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(field));
            }
        }
        if !self.image_path.starts_with('/') {
            return Err(ConfigError::ImagePath(self.image_path.clone()));
        }
        Ok(())
    }
}
