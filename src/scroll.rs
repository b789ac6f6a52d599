//! Scroll-derived UI state for the navbar, section links and back-to-top button.
//!
//! The state is recomputed at most once per animation frame (see
//! `effects::frame::FrameGate`); this module is only the pure derivation.

/// Navbar switches to its condensed "scrolled" style past this offset.
pub const NAV_SCROLLED_AT: f64 = 50.0;
/// Back-to-top button appears past this offset.
pub const BACK_TO_TOP_AT: f64 = 500.0;
/// The active-section probe sits this far below the top of the viewport,
/// so a section lights up while its heading is under the fixed navbar.
pub const SECTION_PROBE_OFFSET: f64 = 150.0;

/// Layout snapshot of one `section[id]`, taken fresh each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub is_scrolled: bool,
    pub back_to_top_visible: bool,
    pub active_section: Option<String>,
}

impl ScrollState {
    /// Derive the frame's UI state from the scroll offset and section geometry.
    ///
    /// Sections are scanned in document order and the last one containing the
    /// probe line wins. When no section contains it the previous active id is
    /// kept, so the highlight stays on the last section while scrolling
    /// through gaps.
    pub fn derive(
        scroll_y: f64,
        sections: &[SectionBounds],
        prev_active: Option<String>,
    ) -> Self {
        let probe = scroll_y + SECTION_PROBE_OFFSET;
        let mut active = prev_active;
        for section in sections {
            if probe >= section.top && probe < section.top + section.height {
                active = Some(section.id.clone());
            }
        }
        Self {
            scroll_y,
            is_scrolled: scroll_y > NAV_SCROLLED_AT,
            back_to_top_visible: scroll_y > BACK_TO_TOP_AT,
            active_section: active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn scrolled_flag_is_strictly_above_threshold() {
        assert!(!ScrollState::derive(0.0, &[], None).is_scrolled);
        assert!(!ScrollState::derive(50.0, &[], None).is_scrolled);
        assert!(ScrollState::derive(50.1, &[], None).is_scrolled);
    }

    #[test]
    fn back_to_top_flag_is_strictly_above_threshold() {
        assert!(!ScrollState::derive(500.0, &[], None).back_to_top_visible);
        assert!(ScrollState::derive(500.1, &[], None).back_to_top_visible);
    }

    #[test]
    fn probe_selects_the_containing_section() {
        let sections = [section("home", 0.0, 600.0), section("features", 600.0, 600.0)];
        let state = ScrollState::derive(300.0, &sections, None);
        assert_eq!(state.active_section.as_deref(), Some("home"));
        let state = ScrollState::derive(460.0, &sections, None);
        assert_eq!(state.active_section.as_deref(), Some("features"));
    }

    #[test]
    fn section_bounds_are_half_open() {
        // probe == 600 lands exactly on the second section's top edge
        let sections = [section("a", 0.0, 600.0), section("b", 600.0, 600.0)];
        let state = ScrollState::derive(450.0, &sections, None);
        assert_eq!(state.active_section.as_deref(), Some("b"));
    }

    #[test]
    fn no_match_keeps_previous_active() {
        let sections = [section("features", 1000.0, 500.0)];
        let state = ScrollState::derive(0.0, &sections, Some("home".to_string()));
        assert_eq!(state.active_section.as_deref(), Some("home"));
    }

    #[test]
    fn no_sections_keeps_previous_active() {
        let state = ScrollState::derive(250.0, &[], Some("contact".to_string()));
        assert_eq!(state.active_section.as_deref(), Some("contact"));
    }

    #[test]
    fn overlapping_sections_last_match_wins() {
        let sections = [section("a", 0.0, 1000.0), section("b", 0.0, 1000.0)];
        let state = ScrollState::derive(100.0, &sections, None);
        assert_eq!(state.active_section.as_deref(), Some("b"));
    }
}
