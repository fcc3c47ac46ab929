//! Navigation state that does not need the DOM to decide.

use crate::config::{ACTIVE_SECTION_OFFSET_PX, SCROLLED_THRESHOLD_PX};

/// Mobile menu presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub const fn from_active(active: bool) -> Self {
        if active {
            Self::Open
        } else {
            Self::Closed
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Nav link clicks and clicks outside the menu always close it.
    #[must_use]
    pub const fn close(self) -> Self {
        Self::Closed
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Whether the header should carry the `scrolled` class.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Vertical extent of a `section[id]` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Id of the section under the scroll probe, first match in document order.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_OFFSET_PX;
    sections
        .iter()
        .find(|section| section.contains(probe))
        .map(|section| section.id.as_str())
}

/// Whether a nav link with this `href` points at the active section.
pub fn is_active_link(href: &str, active: Option<&str>) -> bool {
    active.is_some_and(|id| href.strip_prefix('#') == Some(id))
}

/// Whether a click on this link stays on the page. Bare `#` counts, so it
/// never jumps to the top.
pub fn is_in_page(href: &str) -> bool {
    href.starts_with('#')
}

/// Target id of an in-page anchor; `None` for external links and bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll offset that puts a target just below the header. Without a
/// header the target goes to the top of the viewport.
pub fn scroll_destination(target_top: f64, header_height: Option<f64>) -> f64 {
    target_top - header_height.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 600.0),
            SectionBounds::new("team", 600.0, 900.0),
            SectionBounds::new("news", 1500.0, 500.0),
        ]
    }

    #[test]
    fn menu_toggle_round_trip() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert!(menu.toggle().is_open());
        assert_eq!(menu.toggle().toggle(), menu);
        assert_eq!(MenuState::from_active(true), MenuState::Open);
        assert_eq!(MenuState::Open.close(), MenuState::Closed);
        assert_eq!(MenuState::Closed.close(), MenuState::Closed);
    }

    #[test]
    fn header_scrolled_strictly_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn active_section_uses_probe_offset() {
        let sections = page();
        assert_eq!(active_section(0.0, &sections), Some("home"));
        // 449 + 150 = 599 is still home, 450 + 150 = 600 enters team.
        assert_eq!(active_section(449.0, &sections), Some("home"));
        assert_eq!(active_section(450.0, &sections), Some("team"));
        assert_eq!(active_section(1400.0, &sections), Some("news"));
        assert_eq!(active_section(2000.0, &sections), None);
    }

    #[test]
    fn only_matching_link_is_active() {
        let sections = page();
        let active = active_section(700.0, &sections);
        let links = ["#home", "#team", "#news", "#"];
        let lit = links
            .iter()
            .filter(|href| is_active_link(href, active))
            .collect::<Vec<_>>();
        assert_eq!(lit, [&"#team"]);

        assert!(links.iter().all(|href| !is_active_link(href, None)));
    }

    #[test]
    fn first_section_wins_on_overlap() {
        let sections = vec![
            SectionBounds::new("a", 0.0, 1000.0),
            SectionBounds::new("b", 100.0, 1000.0),
        ];
        assert_eq!(active_section(100.0, &sections), Some("a"));
    }

    #[test]
    fn anchor_targets() {
        assert!(is_in_page("#"));
        assert!(is_in_page("#team"));
        assert!(!is_in_page("https://lab.org/#team"));
        assert_eq!(anchor_target("#team"), Some("team"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://lab.org/#team"), None);
    }

    #[test]
    fn destination_sits_below_header() {
        assert!((scroll_destination(1200.0, Some(80.0)) - 1120.0).abs() < f64::EPSILON);
        assert!((scroll_destination(1200.0, None) - 1200.0).abs() < f64::EPSILON);
    }
}
