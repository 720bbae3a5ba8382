/// Coalesces bursts of notifications into one unit of work per frame.
///
/// The first notification after a completed frame asks for a frame to be
/// scheduled; later ones are absorbed until [`FrameThrottle::complete`] runs.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notification.
    /// Returns true if the caller must schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            log::trace!("frame already pending, coalescing");
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the scheduled frame as executed.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
