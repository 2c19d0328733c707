//! Page configuration: the selectors and class names the helpers rely on.
//!
//! Defaults match the server-rendered templates (Bootstrap 5 conventions).
//! A page may override any subset by embedding JSON in
//! `<script type="application/json" id="roomfinder-config">`; fields that
//! are absent keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "roomfinder-config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    pub tooltip_selector: String,
    pub popover_selector: String,
    pub lazy_image_selector: String,
    /// Attribute holding the deferred image source.
    pub lazy_src_attribute: String,
    pub spoiler_class: String,
    pub validated_form_selector: String,
    pub required_field_selector: String,
    pub invalid_class: String,
    pub star_container_selector: String,
    pub star_label_selector: String,
    pub star_input_selector: String,
    pub star_active_class: String,
    pub toast_class: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tooltip_selector: r#"[data-bs-toggle="tooltip"]"#.to_owned(),
            popover_selector: r#"[data-bs-toggle="popover"]"#.to_owned(),
            lazy_image_selector: "img[data-src]".to_owned(),
            lazy_src_attribute: "data-src".to_owned(),
            spoiler_class: "revealed".to_owned(),
            validated_form_selector: "form.needs-validation".to_owned(),
            required_field_selector: "input[required], textarea[required], select[required]".to_owned(),
            invalid_class: "is-invalid".to_owned(),
            star_container_selector: ".star-rating".to_owned(),
            star_label_selector: ".star-rating label".to_owned(),
            star_input_selector: ".star-rating input".to_owned(),
            star_active_class: "active".to_owned(),
            toast_class: "copy-toast".to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON override block on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a JSON object with
    /// string fields.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load the page configuration, falling back to defaults when the
    /// override block is missing or malformed.
    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(raw) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content())
            else {
                return Self::default();
            };
            match Self::from_json(&raw) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {err}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
