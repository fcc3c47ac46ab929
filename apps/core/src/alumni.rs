use std::collections::BTreeMap;

use crate::config::classes;
use crate::html::{escape, external_link};
use crate::model::{AlumniDocument, AlumniRecord};
use crate::section::{Outcome, Resource, Section};

/// Alumni who left in the same year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup {
    pub year: i32,
    pub alumni: Vec<AlumniRecord>,
}

/// Alumni bucketed by end year, newest year first. Within a year, document
/// order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlumniGroups {
    groups: Vec<YearGroup>,
}

impl AlumniGroups {
    pub fn new(alumni: Vec<AlumniRecord>) -> Self {
        let mut by_year = BTreeMap::<i32, Vec<AlumniRecord>>::new();
        for record in alumni {
            by_year.entry(record.end_year).or_default().push(record);
        }

        let groups = by_year
            .into_iter()
            .rev()
            .map(|(year, alumni)| YearGroup { year, alumni })
            .collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[YearGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.alumni.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub struct Alumni;

impl Section for Alumni {
    const RESOURCE: Resource = Resource::Alumni;
    type Document = AlumniDocument;
    type View = AlumniGroups;

    fn view(document: Self::Document) -> Self::View {
        AlumniGroups::new(document.alumni)
    }

    fn render(view: &Self::View) -> Outcome {
        if view.is_empty() {
            return Outcome::Hide;
        }
        Outcome::Html(view.groups().iter().map(render_group).collect())
    }

    fn failure() -> Outcome {
        Outcome::Hide
    }
}

pub fn render_group(group: &YearGroup) -> String {
    let items = group.alumni.iter().map(render_item).collect::<String>();
    format!(
        concat!(
            r#"<div class="alumni-year-group">"#,
            r#"<h3 class="alumni-year-heading">{year}</h3>"#,
            r#"<div class="alumni-list">{items}</div>"#,
            "</div>"
        ),
        year = group.year,
        items = items,
    )
}

pub fn render_item(record: &AlumniRecord) -> String {
    let name = escape(&record.name);
    let name = record
        .link()
        .map_or_else(|| name.clone(), |href| external_link(href, None, None, &name));
    let current = record.current_position().map_or_else(String::new, |position| {
        format!(r#"<div class="alumni-current">Now: {}</div>"#, escape(position))
    });

    format!(
        concat!(
            r#"<div class="alumni-item {fade}">"#,
            r#"<div class="alumni-name">{name}</div>"#,
            r#"<div class="alumni-details">{years} • {role}</div>"#,
            "{current}",
            "</div>"
        ),
        fade = classes::FADE_IN,
        name = name,
        years = year_range(record),
        role = escape(&record.role),
        current = current,
    )
}

/// `start–end` when the start year is known, otherwise just `end`.
pub fn year_range(record: &AlumniRecord) -> String {
    record.start_year.map_or_else(
        || record.end_year.to_string(),
        |start| format!("{start}–{}", record.end_year),
    )
}
