use pagenav::{Extent, Node, StyleGroup, StyleTarget};
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement};

/// A live document element.
#[derive(Debug, Clone, PartialEq)]
pub struct DomNode(Element);

impl DomNode {
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &Element {
        &self.0
    }

    /// Element an event was dispatched to. Text nodes resolve to their parent.
    pub fn from_target(target: Option<EventTarget>) -> Option<Self> {
        match target?.dyn_into::<Element>() {
            Ok(element) => Some(Self(element)),
            Err(target) => target
                .dyn_into::<web_sys::Node>()
                .ok()?
                .parent_element()
                .map(Self),
        }
    }
}

impl StyleTarget for DomNode {
    fn add_group(&self, group: &StyleGroup) {
        let classes = self.0.class_list();
        for class in group.classes() {
            if let Err(err) = classes.add_1(class) {
                log::warn!("failed to add class {class:?}: {err:?}");
            }
        }
    }

    fn remove_group(&self, group: &StyleGroup) {
        let classes = self.0.class_list();
        for class in group.classes() {
            if let Err(err) = classes.remove_1(class) {
                log::warn!("failed to remove class {class:?}: {err:?}");
            }
        }
    }

    fn has_group(&self, group: &StyleGroup) -> bool {
        let classes = self.0.class_list();
        group.classes().iter().all(|class| classes.contains(class))
    }
}

impl Node for DomNode {
    fn bounds(&self) -> Extent {
        let rect = self.0.get_bounding_client_rect();
        Extent::new(rect.top(), rect.bottom())
    }

    fn contains(&self, other: &Self) -> bool {
        let other: &web_sys::Node = other.0.as_ref();
        self.0.contains(Some(other))
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(name, value) {
            log::warn!("failed to set {name}={value:?}: {err:?}");
        }
    }

    fn is_fixed(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.get_computed_style(&self.0) {
            Ok(Some(style)) => style
                .get_property_value("position")
                .is_ok_and(|position| position == "fixed"),
            _ => false,
        }
    }

    fn rendered_height(&self) -> f64 {
        self.0
            .dyn_ref::<HtmlElement>()
            .map_or(0.0, |element| f64::from(element.offset_height()))
    }
}
