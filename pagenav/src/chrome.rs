use crate::style::{StyleGroup, StyleTarget};

/// True when `scroll_y` is strictly past `threshold`.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Apply or remove the scrolled style on the primary nav.
///
/// Idempotent: repeating a call with the same offset changes nothing.
pub fn update_nav_chrome<T: StyleTarget>(
    nav: Option<&T>,
    scroll_y: f64,
    threshold: f64,
    scrolled: &StyleGroup,
) {
    let Some(nav) = nav else {
        return;
    };

    nav.set_group(scrolled, is_scrolled(scroll_y, threshold));
}
