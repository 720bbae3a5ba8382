//! Offset-aware scrolling to sections.

use crate::host::{Host, Node, ScrollBehavior};

/// A resolved scroll command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// Height to keep clear above a scroll target: the nav's rendered height
/// when it overlays the page as a fixed element, zero otherwise.
pub fn nav_offset<N: Node>(nav: Option<&N>) -> f64 {
    match nav {
        Some(nav) if nav.is_fixed() => nav.rendered_height(),
        _ => 0.0,
    }
}

/// Document offset to scroll to so a section starting at `document_top`
/// lands just below a `nav_offset` tall overlay.
pub fn scroll_target(document_top: f64, nav_offset: f64) -> f64 {
    document_top - nav_offset
}

pub fn behavior_for(reduced_motion: bool) -> ScrollBehavior {
    if reduced_motion {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    }
}

/// Work out the scroll command bringing `section` into view.
pub fn plan_scroll<H: Host>(host: &H, section: &H::Node, nav: Option<&H::Node>) -> ScrollRequest {
    let document_top = section.bounds().document_top(host.scroll_y());
    ScrollRequest {
        top: scroll_target(document_top, nav_offset(nav)),
        behavior: behavior_for(host.prefers_reduced_motion()),
    }
}

/// Issue the scroll command for `section`. One-shot: an in-flight animated
/// scroll is left to the host to interrupt.
pub fn dispatch_scroll<H: Host>(
    host: &H,
    section: &H::Node,
    nav: Option<&H::Node>,
) -> ScrollRequest {
    let request = plan_scroll(host, section, nav);
    log::debug!("scrolling to {} ({:?})", request.top, request.behavior);
    host.scroll_to(request.top, request.behavior);
    request
}
