//! The shared load → view → render contract every content section follows.
//!
//! A [`Section`] names its JSON resource, the document shape it expects, how
//! that document becomes a view model, and how the view model renders. The
//! caller supplies only the loader (browser `fetch` or a file read) and hands
//! the result to [`settle`], which decides between rendered markup, a
//! fallback notice, or hiding the section altogether.

use std::fmt;

use log::{error, info};
use serde::de::DeserializeOwned;

use crate::config::ids;
use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Members,
    Publications,
    News,
    Alumni,
}

impl Resource {
    pub const ALL: [Self; 4] = [Self::Members, Self::Publications, Self::News, Self::Alumni];

    /// Same-origin path the document is served from.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Members => "data/members.json",
            Self::Publications => "data/publications.json",
            Self::News => "data/news.json",
            Self::Alumni => "data/alumni.json",
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Members => "members.json",
            Self::Publications => "publications.json",
            Self::News => "news.json",
            Self::Alumni => "alumni.json",
        }
    }

    /// Id of the element the section renders into.
    pub const fn container_id(self) -> &'static str {
        match self {
            Self::Members => ids::MEMBERS_CONTAINER,
            Self::Publications => ids::PUBLICATIONS_CONTAINER,
            Self::News => ids::NEWS_CONTAINER,
            Self::Alumni => ids::ALUMNI_CONTAINER,
        }
    }

    /// Id of the page `<section>` (and the `#` nav target) for the resource.
    pub const fn section_id(self) -> &'static str {
        match self {
            Self::Alumni => ids::ALUMNI_SECTION,
            _ => self.as_str(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Members => "members",
            Self::Publications => "publications",
            Self::News => "news",
            Self::Alumni => "alumni",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "members" => Some(Self::Members),
            "publications" => Some(Self::Publications),
            "news" => Some(Self::News),
            "alumni" => Some(Self::Alumni),
            _ => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What should end up in a section's container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rendered markup for the container.
    Html(String),
    /// Fixed notice markup shown instead of content.
    Fallback(String),
    /// The whole section (and its navigation entry) should disappear.
    Hide,
}

impl Outcome {
    pub fn markup(&self) -> Option<&str> {
        match self {
            Self::Html(markup) | Self::Fallback(markup) => Some(markup),
            Self::Hide => None,
        }
    }
}

pub trait Section {
    const RESOURCE: Resource;

    /// Shape of the JSON document at [`Resource::path`].
    type Document: DeserializeOwned;

    /// Owned view model built once per load.
    type View;

    fn view(document: Self::Document) -> Self::View;

    fn render(view: &Self::View) -> Outcome;

    /// Outcome when the document could not be loaded.
    fn failure() -> Outcome;

    /// Parses a document from JSON text.
    fn parse(text: &str) -> Result<Self::Document, SiteError> {
        serde_json::from_str(text).map_err(|e| SiteError::decode(Self::RESOURCE.path(), e))
    }
}

/// Result of running a section once.
#[derive(Debug)]
pub struct Settled<V> {
    /// Present only when the document loaded.
    pub view: Option<V>,
    pub outcome: Outcome,
}

/// Turns a load result into the section's view and render outcome.
///
/// Load failures are logged here and never propagate further.
pub fn settle<S: Section>(loaded: Result<S::Document, SiteError>) -> Settled<S::View> {
    match loaded {
        Ok(document) => {
            let view = S::view(document);
            let outcome = S::render(&view);
            info!(
                "event=section_render section={} status=ok outcome={}",
                S::RESOURCE,
                outcome_label(&outcome)
            );
            Settled {
                view: Some(view),
                outcome,
            }
        }
        Err(e) => {
            error!("event=section_load section={} status=failed error={e}", S::RESOURCE);
            Settled {
                view: None,
                outcome: S::failure(),
            }
        }
    }
}

const fn outcome_label(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Html(_) => "html",
        Outcome::Fallback(_) => "fallback",
        Outcome::Hide => "hide",
    }
}
