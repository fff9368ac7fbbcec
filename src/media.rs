//! Interaction state for the project detail overlay's media section.
//!
//! The overlay component translates DOM events into calls on [`MediaState`];
//! keeping the transitions here means the carousel and zoom behavior can be
//! tested without a browser. One `MediaState` lives in a signal for the
//! lifetime of an open overlay and is rebuilt whenever the bound project
//! changes.

/// Net horizontal travel beyond this commits a swipe.
const SWIPE_THRESHOLD: f64 = 50.0;
/// Travel under this on both axes reclassifies a release as a tap.
const TAP_TOLERANCE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomKind {
    Image,
    Video,
}

/// A single media item magnified in the lightbox layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomTarget {
    pub kind: ZoomKind,
    pub url: &'static str,
}

impl ZoomTarget {
    pub fn image(url: &'static str) -> Self {
        Self {
            kind: ZoomKind::Image,
            url,
        }
    }

    pub fn video(url: &'static str) -> Self {
        Self {
            kind: ZoomKind::Video,
            url,
        }
    }
}

/// Carousel cursor plus lightbox state.
///
/// The gallery itself stays in the content store; transitions borrow it so
/// the index can never escape `[0, gallery.len())`. All methods are no-ops
/// on an empty gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MediaState {
    index: usize,
    zoom: Option<ZoomTarget>,
}

impl MediaState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn zoom(&self) -> Option<ZoomTarget> {
        self.zoom
    }

    /// The gallery image currently displayed.
    pub fn current(&self, gallery: &'static [&'static str]) -> Option<&'static str> {
        gallery.get(self.index).copied()
    }

    /// Advance one frame, wrapping at the end.
    pub fn next(&mut self, gallery: &[&'static str]) {
        if gallery.is_empty() {
            return;
        }
        self.set_index((self.index + 1) % gallery.len());
    }

    /// Step back one frame, wrapping at the start.
    pub fn prev(&mut self, gallery: &[&'static str]) {
        if gallery.is_empty() {
            return;
        }
        self.set_index((self.index + gallery.len() - 1) % gallery.len());
    }

    /// Jump straight to `idx` (indicator dots). Out-of-range indexes are
    /// ignored rather than clamped.
    pub fn select(&mut self, idx: usize, gallery: &[&'static str]) {
        if idx < gallery.len() {
            self.set_index(idx);
        }
    }

    /// Interpret a pointer release after a drag with net displacement
    /// `(dx, dy)`. A swipe past the threshold moves the cursor; a release
    /// that barely moved on both axes is a tap and zooms the displayed
    /// image. The swipe check runs first; the two cannot both fire with the
    /// current constants, but the ordering is load-bearing if they ever
    /// overlap.
    pub fn release(&mut self, dx: f64, dy: f64, gallery: &'static [&'static str]) {
        if gallery.is_empty() {
            return;
        }
        if dx < -SWIPE_THRESHOLD {
            self.next(gallery);
        } else if dx > SWIPE_THRESHOLD {
            self.prev(gallery);
        }
        if dx.abs() < TAP_TOLERANCE && dy.abs() < TAP_TOLERANCE {
            if let Some(url) = self.current(gallery) {
                self.open_zoom(ZoomTarget::image(url));
            }
        }
    }

    pub fn open_zoom(&mut self, target: ZoomTarget) {
        self.zoom = Some(target);
    }

    pub fn close_zoom(&mut self) {
        self.zoom = None;
    }

    // Moving the cursor invalidates any zoom tied to the previous frame.
    fn set_index(&mut self, idx: usize) {
        if idx != self.index {
            self.zoom = None;
        }
        self.index = idx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static GALLERY: &[&str] = &["g1.png", "g2.png", "g3.png"];
    static SINGLE: &[&str] = &["only.png"];
    static EMPTY: &[&str] = &[];

    #[test]
    fn test_next_cycles_back_to_start() {
        let mut state = MediaState::new();
        for _ in 0..GALLERY.len() {
            state.next(GALLERY);
        }
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_prev_cycles_back_to_start() {
        let mut state = MediaState::new();
        for _ in 0..GALLERY.len() {
            state.prev(GALLERY);
        }
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_prev_wraps_from_first_frame() {
        let mut state = MediaState::new();
        state.prev(GALLERY);
        assert_eq!(state.index(), GALLERY.len() - 1);
    }

    #[test]
    fn test_single_frame_transitions_are_identity() {
        let mut state = MediaState::new();
        state.next(SINGLE);
        assert_eq!(state.index(), 0);
        state.prev(SINGLE);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_empty_gallery_is_inert() {
        let mut state = MediaState::new();
        state.next(EMPTY);
        state.prev(EMPTY);
        state.select(0, EMPTY);
        state.release(-80.0, 0.0, EMPTY);
        assert_eq!(state, MediaState::new());
    }

    #[test]
    fn test_indicator_jump_then_next_wraps() {
        let mut state = MediaState::new();
        assert_eq!(state.current(GALLERY), Some("g1.png"));
        state.select(2, GALLERY);
        assert_eq!(state.current(GALLERY), Some("g3.png"));
        state.next(GALLERY);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_indicator_out_of_range_is_ignored() {
        let mut state = MediaState::new();
        state.select(1, GALLERY);
        state.select(7, GALLERY);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn test_swipe_left_advances_regardless_of_vertical_travel() {
        let mut state = MediaState::new();
        state.release(-60.0, 0.0, GALLERY);
        assert_eq!(state.index(), 1);
        state.release(-51.0, 200.0, GALLERY);
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_swipe_right_steps_back() {
        let mut state = MediaState::new();
        state.select(2, GALLERY);
        state.release(60.0, -10.0, GALLERY);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn test_tap_opens_zoom_without_moving_cursor() {
        let mut state = MediaState::new();
        state.select(1, GALLERY);
        state.release(-3.0, 2.0, GALLERY);
        assert_eq!(state.index(), 1);
        assert_eq!(state.zoom(), Some(ZoomTarget::image("g2.png")));
    }

    #[test]
    fn test_release_between_tap_and_swipe_does_nothing() {
        let mut state = MediaState::new();
        state.release(-20.0, 0.0, GALLERY);
        assert_eq!(state.index(), 0);
        assert_eq!(state.zoom(), None);
        // Exactly at the swipe threshold is still not a swipe.
        state.release(-50.0, 0.0, GALLERY);
        state.release(50.0, 0.0, GALLERY);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_index_change_clears_pending_zoom() {
        let mut state = MediaState::new();
        state.open_zoom(ZoomTarget::image("g1.png"));
        state.next(GALLERY);
        assert_eq!(state.zoom(), None);
        state.open_zoom(ZoomTarget::image("g2.png"));
        state.select(2, GALLERY);
        assert_eq!(state.zoom(), None);
    }

    #[test]
    fn test_zoom_toggle_is_idempotent() {
        let mut state = MediaState::new();
        state.select(1, GALLERY);
        let before = state;
        for _ in 0..2 {
            state.open_zoom(ZoomTarget::video("/videos/demo.mp4"));
            state.close_zoom();
        }
        assert_eq!(state, before);
    }
}
