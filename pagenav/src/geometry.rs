/// Vertical extent of an element relative to the top of the viewport.
///
/// Negative values mean the edge has scrolled above the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub top: f64,
    pub bottom: f64,
}

impl Extent {
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Build a viewport-relative extent from document coordinates.
    pub fn from_document(document_top: f64, height: f64, scroll_y: f64) -> Self {
        let top = document_top - scroll_y;
        Self {
            top,
            bottom: top + height,
        }
    }

    /// True if the horizontal line at `line` lies within this extent, edges included.
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }

    /// Distance from `line` to the nearest edge, zero when straddling.
    pub fn distance_to(&self, line: f64) -> f64 {
        if self.straddles(line) {
            0.0
        } else if line < self.top {
            self.top - line
        } else {
            line - self.bottom
        }
    }

    /// Top edge in document coordinates given the current scroll offset.
    pub fn document_top(&self, scroll_y: f64) -> f64 {
        self.top + scroll_y
    }
}
