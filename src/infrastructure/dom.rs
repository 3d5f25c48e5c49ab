use crate::application::DemoConfig;
use crate::domain::{chart::ChartDimensions, errors::AppResult, logging::LogComponent};
use crate::log_debug;

/// Id of the optional `<script type="application/json">` carrying a [`DemoConfig`].
pub const CONFIG_ELEMENT_ID: &str = "chart-config";

/// Read the page's config block, falling back to defaults when it is absent.
pub fn load_config() -> AppResult<DemoConfig> {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match text {
        Some(json) if !json.trim().is_empty() => DemoConfig::from_json(&json),
        _ => {
            log_debug!(
                LogComponent::Infrastructure("Dom"),
                "no #{} element, using defaults",
                CONFIG_ELEMENT_ID
            );
            Ok(DemoConfig::default())
        }
    }
}

/// Client size of `element`, or `fallback` while it is not laid out.
pub fn client_dimensions(element: &web_sys::Element, fallback: ChartDimensions) -> ChartDimensions {
    let measured = ChartDimensions::new(
        element.client_width().max(0) as u32,
        element.client_height().max(0) as u32,
    );
    if measured.is_empty() { fallback } else { measured }
}
