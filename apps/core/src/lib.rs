// Content model, section pipelines and view logic shared by the browser
// front-end and the headless checker.
pub mod alumni;
pub mod config;
pub mod error;
pub mod html;
pub mod members;
pub mod model;
pub mod nav;
pub mod news;
pub mod publications;
pub mod reveal;
pub mod section;

pub use error::SiteError;
pub use model::{AlumniRecord, Member, MemberCategory, NewsItem, Publication, VenueType};
pub use section::{settle, Outcome, Resource, Section, Settled};
