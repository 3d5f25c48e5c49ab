use leptos::html::Div;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    application::{ChartApplicationService, ChartController, DemoConfig, UiAction},
    domain::{chart::ChartTheme, errors::AppResult, logging::LogComponent},
    event_utils::{ListenOptions, listen_on_window},
    infrastructure::{LightweightChartsDisplay, dom},
    log_error, log_warn,
};

type Controller = ChartController<LightweightChartsDisplay>;
type SharedController = Rc<RefCell<Option<Controller>>>;

fn dispatch(controller: &SharedController, action: UiAction) {
    let mut slot = controller.borrow_mut();
    let Some(controller) = slot.as_mut() else {
        log_warn!(LogComponent::Presentation("App"), "chart not ready, ignoring {:?}", action);
        return;
    };
    if let Err(err) = controller.dispatch(action) {
        log_error!(LogComponent::Presentation("App"), "{:?} failed: {}", action, err);
    }
}

fn mount_chart(container: &web_sys::HtmlElement, config: DemoConfig) -> AppResult<Controller> {
    let dimensions = dom::client_dimensions(container, config.dimensions);
    let display = LightweightChartsDisplay::new(container, dimensions, &ChartTheme::default())?;
    ChartApplicationService::new(config).start(display)
}

/// 🦀 Toolbar with the six chart buttons above the chart container
#[component]
pub fn App(config: DemoConfig) -> impl IntoView {
    let container = create_node_ref::<Div>();
    let controller: SharedController = Rc::new(RefCell::new(None));
    let fallback = config.dimensions;

    {
        let controller = controller.clone();
        container.on_load(move |el| {
            // one frame later the container has its laid-out size
            request_animation_frame(move || match mount_chart(&el, config) {
                Ok(chart) => *controller.borrow_mut() = Some(chart),
                Err(err) => {
                    log_error!(LogComponent::Presentation("App"), "chart setup failed: {}", err);
                }
            });
        });
    }

    let listener = {
        let controller = controller.clone();
        listen_on_window(ev::resize, ListenOptions::default(), move |_| {
            let Some(element) = container.get_untracked() else {
                return;
            };
            let dimensions = dom::client_dimensions(&element, fallback);
            dispatch(&controller, UiAction::Resize(dimensions));
        })
    };
    on_cleanup(move || drop(listener));

    let buttons = UiAction::BUTTONS
        .iter()
        .map(|&action| {
            let controller = controller.clone();
            view! {
                <button id=action.button_id().unwrap_or_default() on:click=move |_| dispatch(&controller, action)>
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="chart-demo">
            <div class="toolbar">{buttons}</div>
            <div id="chart" class="chart" node_ref=container></div>
        </div>
    }
}
