use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// Inline styles applied to every `.fade-in` element before it is observed.
pub const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease-out, transform 0.6s ease-out"),
];

/// Inline styles applied once the element has been seen.
pub const REVEALED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// Data attribute carrying an element's reveal state.
pub const STATE_ATTRIBUTE: &str = "data-reveal";

/// Observer settings for the reveal watcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
        }
    }
}

/// One-shot reveal state of a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Pending,
    Revealed,
}

impl Reveal {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("revealed") => Self::Revealed,
            _ => Self::Pending,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Revealed => "revealed",
        }
    }

    /// Advances on an intersection report. Returns the next state and
    /// whether the reveal styles must be applied now.
    pub const fn on_intersection(self, is_intersecting: bool) -> (Self, bool) {
        match (self, is_intersecting) {
            (Self::Pending, true) => (Self::Revealed, true),
            (state, _) => (state, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_reveals_once_on_intersection() {
        let (state, fire) = Reveal::Pending.on_intersection(false);
        assert_eq!(state, Reveal::Pending);
        assert!(!fire);

        let (state, fire) = state.on_intersection(true);
        assert_eq!(state, Reveal::Revealed);
        assert!(fire);

        let (state, fire) = state.on_intersection(true);
        assert_eq!(state, Reveal::Revealed);
        assert!(!fire);
    }

    #[test]
    fn leaving_viewport_never_reverses() {
        let (state, _) = Reveal::Pending.on_intersection(true);
        let (state, fire) = state.on_intersection(false);
        assert_eq!(state, Reveal::Revealed);
        assert!(!fire);
    }

    #[test]
    fn state_attribute_round_trip() {
        assert_eq!(Reveal::parse(Some(Reveal::Revealed.as_str())), Reveal::Revealed);
        assert_eq!(Reveal::parse(Some("pending")), Reveal::Pending);
        assert_eq!(Reveal::parse(None), Reveal::Pending);
    }

    #[test]
    fn default_observer_options() {
        let options = ObserverOptions::default();
        assert!((options.threshold - 0.1).abs() < f64::EPSILON);
        assert_eq!(options.root_margin, "0px 0px -50px 0px");
    }
}
