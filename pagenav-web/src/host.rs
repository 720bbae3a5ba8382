use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use pagenav::{Host, Icon, Markup, ScrollBehavior};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollToOptions, Window};

use crate::dom::DomNode;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Pending animation frame plus the callback it runs.
///
/// The callback is installed after the controller exists, since it has to
/// reach back into it. It returns false when the frame could not be
/// delivered, and the queue then requests another one.
#[derive(Default)]
pub struct FrameQueue {
    pending: RefCell<Option<AnimationFrame>>,
    on_frame: RefCell<Option<Rc<dyn Fn() -> bool>>>,
}

impl FrameQueue {
    pub fn set_callback(&self, callback: impl Fn() -> bool + 'static) {
        *self.on_frame.borrow_mut() = Some(Rc::new(callback));
    }

    fn schedule(self: &Rc<Self>) {
        let Some(callback) = self.on_frame.borrow().clone() else {
            log::warn!("animation frame requested before a callback was installed");
            return;
        };
        let queue = Rc::downgrade(self);
        // The handle cancels the frame when dropped, so it stays here until replaced.
        let frame = request_animation_frame(move |_timestamp| {
            if callback() {
                return;
            }
            log::debug!("animation frame not delivered, retrying");
            if let Some(queue) = queue.upgrade() {
                queue.schedule();
            }
        });
        *self.pending.borrow_mut() = Some(frame);
    }
}

/// [`Host`] backed by the live window and document.
pub struct DomHost {
    window: Window,
    document: Document,
    markup: Markup,
    frames: Rc<FrameQueue>,
}

impl DomHost {
    pub fn new(window: Window, document: Document, markup: Markup) -> Self {
        Self {
            window,
            document,
            markup,
            frames: Rc::new(FrameQueue::default()),
        }
    }

    pub fn frames(&self) -> Rc<FrameQueue> {
        Rc::clone(&self.frames)
    }

    fn query(&self, selector: &str) -> Option<DomNode> {
        match self.document.query_selector(selector) {
            Ok(found) => found.map(DomNode::new),
            Err(err) => {
                log::warn!("invalid selector {selector:?}: {err:?}");
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<DomNode> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("invalid selector {selector:?}: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(DomNode::new)
            .collect()
    }
}

impl Host for DomHost {
    type Node = DomNode;

    fn primary_nav(&self) -> Option<DomNode> {
        self.query(&self.markup.nav_selector)
    }

    fn drawer_panel(&self) -> Option<DomNode> {
        self.query(&Markup::attr_selector(&self.markup.drawer_attr))
    }

    fn drawer_toggle(&self) -> Option<DomNode> {
        self.query(&Markup::attr_selector(&self.markup.toggle_attr))
    }

    fn drawer_icon(&self, toggle: &DomNode, icon: Icon) -> Option<DomNode> {
        let selector = Markup::attr_value_selector(&self.markup.icon_attr, icon.marker());
        toggle
            .element()
            .query_selector(&selector)
            .ok()
            .flatten()
            .map(DomNode::new)
    }

    fn nav_controls(&self) -> Vec<DomNode> {
        self.query_all(&Markup::attr_selector(&self.markup.target_attr))
    }

    fn section(&self, id: &str) -> Option<DomNode> {
        self.document.get_element_by_id(id).map(DomNode::new)
    }

    fn scroll_y(&self) -> f64 {
        self.window
            .scroll_y()
            .or_else(|_| self.window.page_y_offset())
            .unwrap_or(0.0)
    }

    fn prefers_reduced_motion(&self) -> bool {
        matches!(
            self.window.match_media(REDUCED_MOTION_QUERY),
            Ok(Some(query)) if query.matches()
        )
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn request_animation_frame(&self) {
        self.frames.schedule();
    }
}
