//! Capabilities the controller consumes from the hosting page.
//!
//! The controller never queries a live document. Everything it touches is
//! resolved once through [`Host`] and then driven through [`Node`] handles.

use crate::geometry::Extent;
use crate::style::StyleTarget;

/// How a scroll command should move the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// The two glyphs inside the drawer toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Open,
    Close,
}

impl Icon {
    /// Marker value used in markup to tag the glyph.
    pub fn marker(self) -> &'static str {
        match self {
            Icon::Open => "open",
            Icon::Close => "close",
        }
    }
}

/// Handle to an externally-owned element.
pub trait Node: StyleTarget + Clone {
    /// Current vertical extent relative to the viewport top.
    fn bounds(&self) -> Extent;

    /// True if `other` is this node or one of its descendants.
    fn contains(&self, other: &Self) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    /// True if the element's computed positioning is `fixed`.
    fn is_fixed(&self) -> bool;

    /// Rendered height including padding and border.
    fn rendered_height(&self) -> f64;
}

/// Lookups, environment reads and commands provided by the page.
pub trait Host {
    type Node: Node;

    fn primary_nav(&self) -> Option<Self::Node>;

    fn drawer_panel(&self) -> Option<Self::Node>;

    fn drawer_toggle(&self) -> Option<Self::Node>;

    fn drawer_icon(&self, toggle: &Self::Node, icon: Icon) -> Option<Self::Node>;

    /// Every control carrying a scroll target attribute, in document order.
    fn nav_controls(&self) -> Vec<Self::Node>;

    fn section(&self, id: &str) -> Option<Self::Node>;

    /// Current vertical scroll offset of the document.
    fn scroll_y(&self) -> f64;

    fn prefers_reduced_motion(&self) -> bool;

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);

    /// Ask for an [`Event::AnimationFrame`](crate::Event::AnimationFrame)
    /// to be delivered before the next repaint.
    fn request_animation_frame(&self);
}
