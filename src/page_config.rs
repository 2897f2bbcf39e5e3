use ogi_web_core::PageConfig;
use web_sys::Document;

pub(crate) const CONFIG_ELEMENT_ID: &str = "ogi-config";

/// Reads `<script type="application/json" id="ogi-config">` if the page has one.
/// Anything unreadable falls back to the defaults with a console warning.
pub(crate) fn load_page_config(document: &Document) -> PageConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .unwrap_or_default();
    let config = if raw.trim().is_empty() {
        PageConfig::default()
    } else {
        match PageConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                gloo::console::warn!("ogi config ignored", err.to_string());
                PageConfig::default()
            }
        }
    };
    match config.clone().with_image_path_override(option_env!("OGI_IMAGE_PATH")) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::warn!("OGI_IMAGE_PATH ignored", err.to_string());
            config
        }
    }
}
