pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod event_utils;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Install logging, read the page config and mount the UI
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn initialize() {
    use crate::app::App;
    use crate::application::DemoConfig;
    use crate::domain::logging::{LogComponent, get_logger, init_logger};
    use crate::infrastructure::{ConsoleLogger, dom};

    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        ConsoleLogger::new_development()
    } else {
        ConsoleLogger::new_production()
    };
    init_logger(Box::new(console_logger));

    let config = dom::load_config().unwrap_or_else(|err| {
        log_error!(LogComponent::Presentation("Initialize"), "{}, using defaults", err);
        DemoConfig::default()
    });

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 indicator chart starting");

    leptos::mount_to_body(move || leptos::view! { <App config=config/> });
}
