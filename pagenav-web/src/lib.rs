//! Browser binding for the page navigation controller.
//!
//! Loading the module starts the controller against the current document.
//! Configuration comes from an optional inline script:
//!
//! ```html
//! <script type="application/json" data-page-nav-config>
//!   { "sections": ["intro", "work", "contact"] }
//! </script>
//! ```
//!
//! Setting the attribute to `manual` skips the automatic start so the page
//! can call `startWithConfig` itself.

mod dom;
mod error;
mod host;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use pagenav::{Config, Controller, Event, Key, Markup};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent, Window};

pub use dom::DomNode;
pub use error::WebError;
pub use host::{DomHost, FrameQueue};

/// Attribute marking the inline JSON configuration script.
pub const CONFIG_ATTR: &str = "data-page-nav-config";

type SharedController = Rc<RefCell<Controller<DomHost>>>;

/// A running controller and the listeners feeding it.
struct PageNav {
    controller: SharedController,
    _listeners: Vec<EventListener>,
}

thread_local! {
    static INSTANCE: RefCell<Option<PageNav>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    if let Err(err) = auto_start() {
        log::error!("page navigation disabled: {err}");
    }
}

/// Start with a JSON configuration, for pages that opted out of the automatic start.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    let config = Config::from_json(json).map_err(WebError::from)?;
    start_when_ready(config)?;
    Ok(())
}

/// Scroll to a registered section. Returns false if nothing was scrolled.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(id: &str) -> bool {
    with_controller(|controller| controller.scroll_to_section(id).is_some()).unwrap_or(false)
}

/// Id of the section currently highlighted in the navigation.
#[wasm_bindgen(js_name = activeSection)]
pub fn active_section() -> Option<String> {
    with_controller(|controller| controller.active_section().map(str::to_string)).flatten()
}

fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

fn document() -> Result<Document, WebError> {
    window()?.document().ok_or(WebError::NoDocument)
}

fn auto_start() -> Result<(), WebError> {
    let document = document()?;
    let script = document
        .query_selector(&Markup::attr_selector(CONFIG_ATTR))
        .ok()
        .flatten();

    let config = match script {
        Some(script) if script.get_attribute(CONFIG_ATTR).as_deref() == Some("manual") => {
            log::info!("automatic start disabled, waiting for startWithConfig");
            return Ok(());
        }
        Some(script) => {
            let json = script.text_content().unwrap_or_default();
            if json.trim().is_empty() {
                Config::default()
            } else {
                Config::from_json(&json)?
            }
        }
        None => Config::default(),
    };

    start_when_ready(config)
}

fn start_when_ready(config: Config) -> Result<(), WebError> {
    let document = document()?;
    if document.ready_state() != "loading" {
        return install(config);
    }

    log::debug!("document still loading, deferring start");
    EventListener::once(&document, "DOMContentLoaded", move |_| {
        if let Err(err) = install(config) {
            log::error!("page navigation disabled: {err}");
        }
    })
    .forget();
    Ok(())
}

fn install(config: Config) -> Result<(), WebError> {
    INSTANCE.with(|slot| {
        if slot.borrow().is_some() {
            return Err(WebError::AlreadyStarted);
        }

        let window = window()?;
        let document = document()?;
        let host = DomHost::new(window.clone(), document.clone(), config.markup.clone());
        let frames = host.frames();
        let controller = Rc::new(RefCell::new(Controller::new(host, config)?));

        let weak = Rc::downgrade(&controller);
        frames.set_callback(move || {
            let Some(shared) = weak.upgrade() else {
                return true;
            };
            // The throttle stays pending until a frame lands.
            let Ok(mut controller) = shared.try_borrow_mut() else {
                return false;
            };
            controller.handle(Event::AnimationFrame);
            true
        });

        let listeners = listen(&window, &document, &controller);
        *slot.borrow_mut() = Some(PageNav {
            controller,
            _listeners: listeners,
        });
        log::info!("page navigation started");
        Ok(())
    })
}

fn listen(
    window: &Window,
    document: &Document,
    controller: &SharedController,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(4);

    let weak = Rc::downgrade(controller);
    listeners.push(EventListener::new_with_options(
        window,
        "scroll",
        EventListenerOptions::default(),
        move |_| {
            dispatch(&weak, Event::Scroll);
        },
    ));

    let weak = Rc::downgrade(controller);
    listeners.push(EventListener::new_with_options(
        window,
        "resize",
        EventListenerOptions::default(),
        move |_| {
            dispatch(&weak, Event::Resize);
        },
    ));

    let weak = Rc::downgrade(controller);
    listeners.push(EventListener::new_with_options(
        document,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let target = DomNode::from_target(event.target());
            if dispatch(&weak, Event::Click { target }) {
                event.prevent_default();
            }
        },
    ));

    let weak = Rc::downgrade(controller);
    listeners.push(EventListener::new(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        dispatch(
            &weak,
            Event::Key {
                key: Key::from_name(&event.key()),
            },
        );
    }));

    listeners
}

/// Feed `event` to the controller if it is still alive and not busy.
///
/// Busy only happens if a handler re-enters the controller. Animation frames
/// never come through here: the frame queue retries them instead.
fn dispatch(controller: &Weak<RefCell<Controller<DomHost>>>, event: Event<DomNode>) -> bool {
    let Some(shared) = controller.upgrade() else {
        return false;
    };
    let Ok(mut controller) = shared.try_borrow_mut() else {
        log::warn!("controller busy, dropping {event:?}");
        return false;
    };
    controller.handle(event)
}

fn with_controller<T>(f: impl FnOnce(&mut Controller<DomHost>) -> T) -> Option<T> {
    INSTANCE.with(|slot| {
        let slot = slot.borrow();
        let instance = slot.as_ref()?;
        let mut controller = instance.controller.try_borrow_mut().ok()?;
        Some(f(&mut controller))
    })
}
