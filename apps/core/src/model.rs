use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A team member as listed in `members.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub role: String,
    #[serde(default)]
    pub category: MemberCategory,
    #[serde(default, deserialize_with = "null_default")]
    pub bio: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub links: Option<Links>,
}

impl Member {
    pub fn photo(&self) -> Option<&str> {
        non_empty(self.photo.as_deref())
    }

    pub fn links(&self) -> &[(String, String)] {
        self.links.as_ref().map_or(&[], Links::entries)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum MemberCategory {
    Pi,
    #[default]
    Unspecified,
    Other(String),
}

impl From<Option<String>> for MemberCategory {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(category) if category == "pi" => Self::Pi,
            Some(category) if !category.is_empty() => Self::Other(category),
            _ => Self::Unspecified,
        }
    }
}

impl MemberCategory {
    pub const fn is_pi(&self) -> bool {
        matches!(self, Self::Pi)
    }
}

/// A publication as listed in `publications.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub authors: Vec<String>,
    #[serde(deserialize_with = "year")]
    pub year: i32,
    #[serde(default, deserialize_with = "null_default")]
    pub venue: String,
    #[serde(default)]
    pub venue_type: VenueType,
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default, deserialize_with = "null_default")]
    pub highlight_authors: Vec<String>,
}

impl Publication {
    pub fn links(&self) -> &[(String, String)] {
        self.links.as_ref().map_or(&[], Links::entries)
    }

    pub fn is_highlighted(&self, author: &str) -> bool {
        self.highlight_authors.iter().any(|name| name == author)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum VenueType {
    #[default]
    Conference,
    Journal,
    Preprint,
    Workshop,
}

impl From<Option<String>> for VenueType {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map_or(Self::Conference, Self::parse)
    }
}

impl VenueType {
    pub fn parse(value: &str) -> Self {
        match value {
            "journal" => Self::Journal,
            "preprint" => Self::Preprint,
            "workshop" => Self::Workshop,
            _ => Self::Conference,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conference => "conference",
            Self::Journal => "journal",
            Self::Preprint => "preprint",
            Self::Workshop => "workshop",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Conference => "📄",
            Self::Journal => "📚",
            Self::Preprint => "📝",
            Self::Workshop => "🔬",
        }
    }
}

/// A dated news entry as listed in `news.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub headline: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl NewsItem {
    pub fn link(&self) -> Option<&str> {
        non_empty(self.link.as_deref())
    }
}

/// A former lab member as listed in `alumni.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumniRecord {
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub role: String,
    #[serde(default, deserialize_with = "optional_year")]
    pub start_year: Option<i32>,
    #[serde(deserialize_with = "year")]
    pub end_year: i32,
    #[serde(default)]
    pub current_position: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl AlumniRecord {
    pub fn link(&self) -> Option<&str> {
        non_empty(self.link.as_deref())
    }

    pub fn current_position(&self) -> Option<&str> {
        non_empty(self.current_position.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MembersDocument {
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PublicationsDocument {
    #[serde(default)]
    pub publications: Vec<Publication>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsDocument {
    #[serde(default)]
    pub news: Vec<NewsItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlumniDocument {
    #[serde(default)]
    pub alumni: Vec<AlumniRecord>,
}

/// Link type to URL pairs, in document order, with unpopulated entries
/// (`null` or empty string) already dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Links(Vec<(String, String)>);

impl Links {
    pub fn entries(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Links {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter(|(_, url)| !url.is_empty())
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for Links {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LinksVisitor;

        impl<'de> Visitor<'de> for LinksVisitor {
            type Value = Links;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of link type to URL")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((kind, url)) = map.next_entry::<String, Option<String>>()? {
                    if let Some(url) = url {
                        entries.push((kind, url));
                    }
                }
                Ok(entries.into_iter().collect())
            }
        }

        deserializer.deserialize_map(LinksVisitor)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Number(i64),
    Text(String),
}

impl RawYear {
    fn into_year<E: de::Error>(self) -> Result<i32, E> {
        match self {
            Self::Number(value) => {
                i32::try_from(value).map_err(|_| E::custom(format!("year {value} out of range")))
            }
            Self::Text(text) => text
                .trim()
                .parse::<i32>()
                .map_err(|_| E::custom(format!("invalid year {text:?}"))),
        }
    }
}

// Years arrive as integers, but hand-edited data sometimes quotes them.
fn year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    RawYear::deserialize(deserializer)?.into_year()
}

fn optional_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawYear>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawYear::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(raw) => raw.into_year().map(Some),
    }
}

// Optional fields written out as `null` read the same as missing ones.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
