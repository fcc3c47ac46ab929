//! Fixed page configuration: DOM contract, thresholds and asset paths.
//!
//! The site is fully static, so everything here is a compile-time constant.
//! The headless checker layers its own environment-driven settings on top.

/// Element ids the page markup must supply.
pub mod ids {
    pub const MENU_TOGGLE: &str = "menuToggle";
    pub const NAV_MENU: &str = "navMenu";
    pub const HEADER: &str = "header";
    pub const MEMBERS_CONTAINER: &str = "membersContainer";
    pub const PUBLICATIONS_CONTAINER: &str = "publicationsContainer";
    pub const YEAR_FILTER: &str = "yearFilter";
    pub const NEWS_CONTAINER: &str = "newsContainer";
    pub const ALUMNI_CONTAINER: &str = "alumniContainer";
    pub const ALUMNI_SECTION: &str = "alumni";
}

/// Classes toggled or queried by the front-end.
pub mod classes {
    pub const ACTIVE: &str = "active";
    pub const SCROLLED: &str = "scrolled";
    pub const FADE_IN: &str = "fade-in";
    pub const TRUNCATED: &str = "truncated";
    pub const NAV_LINK: &str = "nav-link";
    pub const BIO_TOGGLE: &str = "bio-toggle";
    pub const MEMBER_IMAGE: &str = "member-image";
}

/// Header gains the `scrolled` class once `scrollY` exceeds this.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Probe offset added to `scrollY` when picking the active section.
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 150.0;

/// Delay between the pipelines settling and the reveal observer attaching.
pub const REVEAL_ATTACH_DELAY_MS: i32 = 100;

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const PLACEHOLDER_PHOTO: &str = "images/team/placeholder.jpg";

/// Default on-disk location of the data documents for the checker.
pub const DEFAULT_DATA_DIR: &str = "./data";
