use crate::domain::logging::LogComponent;
use crate::log_warn;
use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// Flags passed to `addEventListener`. Passive by default.
#[derive(Clone, Copy, Debug)]
pub struct ListenOptions {
    pub passive: bool,
    pub capture: bool,
}

impl Default for ListenOptions {
    fn default() -> Self {
        Self { passive: true, capture: false }
    }
}

/// Attached DOM listener; detached when dropped.
pub struct ListenerGuard {
    target: EventTarget,
    event_name: String,
    callback: Closure<dyn FnMut(Event)>,
    capture: bool,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            &self.event_name,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// Attach `cb` to `target` for a typed leptos event such as `ev::resize`.
pub fn listen<E>(
    target: &EventTarget,
    event: E,
    options: ListenOptions,
    mut cb: impl FnMut(E::EventType) + 'static,
) -> ListenerGuard
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let event_name = event.name().into_owned();
    let callback = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        cb(ev.unchecked_into::<E::EventType>());
    });

    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);

    if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
        &event_name,
        callback.as_ref().unchecked_ref(),
        &opts,
    ) {
        log_warn!(
            LogComponent::Presentation("Events"),
            "'{}' listener not attached: {:?}",
            event_name,
            err
        );
    }

    ListenerGuard { target: target.clone(), event_name, callback, capture: options.capture }
}

/// [`listen`] on `window`. `None` outside a browsing context.
pub fn listen_on_window<E>(
    event: E,
    options: ListenOptions,
    cb: impl FnMut(E::EventType) + 'static,
) -> Option<ListenerGuard>
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let window = web_sys::window()?;
    Some(listen(window.as_ref(), event, options, cb))
}
