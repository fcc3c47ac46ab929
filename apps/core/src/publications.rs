use std::collections::BTreeSet;

use crate::config::classes;
use crate::html::{escape, external_link, notice};
use crate::model::{Publication, PublicationsDocument};
use crate::section::{Outcome, Resource, Section};

pub const UNAVAILABLE_MESSAGE: &str =
    "No publications to display yet. Add publication data to data/publications.json.";
pub const NO_MATCH_MESSAGE: &str = "No publications found for the selected year.";

/// Value of the year filter's "show everything" option.
pub const ALL_YEARS: &str = "all";

/// Selection made through the year filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearFilter {
    All,
    Year(i32),
}

impl YearFilter {
    /// Parses a filter control value. The value is compared as an integer
    /// year, never as text, so `"2024"` and `" 2024 "` select the same thing.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case(ALL_YEARS) {
            return Some(Self::All);
        }
        value.parse::<i32>().ok().map(Self::Year)
    }

    pub const fn matches(self, publication: &Publication) -> bool {
        match self {
            Self::All => true,
            Self::Year(year) => publication.year == year,
        }
    }
}

/// Every loaded publication, kept for the lifetime of the page so the year
/// filter can re-render without fetching again.
///
/// Publications are held sorted by year, newest first; equal years keep
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationCatalog {
    publications: Vec<Publication>,
}

impl PublicationCatalog {
    pub fn new(mut publications: Vec<Publication>) -> Self {
        publications.sort_by(|a, b| b.year.cmp(&a.year));
        Self { publications }
    }

    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    pub fn len(&self) -> usize {
        self.publications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }

    /// Distinct years present, newest first.
    pub fn years(&self) -> Vec<i32> {
        self.publications
            .iter()
            .map(|publication| publication.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .rev()
            .collect()
    }

    pub fn select(&self, filter: YearFilter) -> Vec<&Publication> {
        self.publications
            .iter()
            .filter(|publication| filter.matches(publication))
            .collect()
    }

    pub fn render(&self, filter: YearFilter) -> Outcome {
        render_list(&self.select(filter))
    }

    /// Renders for a raw filter control value. Values that are neither
    /// `all` nor a year select nothing.
    pub fn render_value(&self, value: &str) -> Outcome {
        YearFilter::parse(value).map_or_else(|| render_list(&[]), |filter| self.render(filter))
    }
}

pub struct Publications;

impl Section for Publications {
    const RESOURCE: Resource = Resource::Publications;
    type Document = PublicationsDocument;
    type View = PublicationCatalog;

    fn view(document: Self::Document) -> Self::View {
        PublicationCatalog::new(document.publications)
    }

    fn render(view: &Self::View) -> Outcome {
        view.render(YearFilter::All)
    }

    fn failure() -> Outcome {
        Outcome::Fallback(notice(UNAVAILABLE_MESSAGE))
    }
}

pub fn render_list(publications: &[&Publication]) -> Outcome {
    if publications.is_empty() {
        return Outcome::Fallback(notice(NO_MATCH_MESSAGE));
    }

    let items = publications
        .iter()
        .map(|publication| render_item(publication))
        .collect::<String>();
    Outcome::Html(format!(r#"<div class="publications-list">{items}</div>"#))
}

pub fn render_item(publication: &Publication) -> String {
    let authors = publication
        .authors
        .iter()
        .map(|author| {
            if publication.is_highlighted(author) {
                format!(r#"<span class="author-highlight">{}</span>"#, escape(author))
            } else {
                escape(author)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let links = publication
        .links()
        .iter()
        .map(|(kind, url)| {
            external_link(url, Some("btn-link"), None, &escape(&kind.to_uppercase()))
        })
        .collect::<String>();
    let links = if links.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="publication-links">{links}</div>"#)
    };

    format!(
        concat!(
            r#"<div class="publication-item {fade}">"#,
            r#"<div class="publication-header">"#,
            r#"<div class="year-badge">{year}</div>"#,
            r#"<div class="publication-content">"#,
            r#"<h3 class="publication-title">{title}</h3>"#,
            r#"<p class="publication-authors">{authors}</p>"#,
            r#"<p class="publication-venue"><span class="venue-icon">{glyph}</span> {venue}</p>"#,
            "{links}",
            "</div></div></div>"
        ),
        fade = classes::FADE_IN,
        year = publication.year,
        title = escape(&publication.title),
        authors = authors,
        glyph = publication.venue_type.glyph(),
        venue = escape(&publication.venue),
        links = links,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PublicationCatalog {
        let document: PublicationsDocument = serde_json::from_str(
            r#"{"publications": [
                {"title": "Old", "authors": ["A"], "year": 2019, "venue": "ICML"},
                {"title": "New A", "authors": ["A", "B", "C"], "year": 2024, "venue": "JMLR", "venueType": "journal",
                 "highlightAuthors": ["B"], "links": {"pdf": "https://x/pdf", "code": "", "arxiv": "https://arxiv.org/abs/1"}},
                {"title": "Mid", "authors": [], "year": 2021, "venue": "Workshop", "venueType": "workshop"},
                {"title": "New B", "authors": ["D"], "year": 2024, "venue": "arXiv", "venueType": "preprint"}
            ]}"#,
        )
        .unwrap();
        Publications::view(document)
    }

    fn titles(selection: &[&Publication]) -> Vec<String> {
        selection.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn all_is_sorted_newest_first_and_stable() {
        let catalog = catalog();
        assert_eq!(
            titles(&catalog.select(YearFilter::All)),
            ["New A", "New B", "Mid", "Old"]
        );
    }

    #[test]
    fn filtering_by_year_is_exact_subset() {
        let catalog = catalog();
        for year in [2019, 2021, 2024, 2030] {
            let selection = catalog.select(YearFilter::Year(year));
            let expected = catalog
                .publications()
                .iter()
                .filter(|p| p.year == year)
                .count();
            assert_eq!(selection.len(), expected);
            assert!(selection.iter().all(|p| p.year == year));
        }
        assert_eq!(catalog.select(YearFilter::All).len(), catalog.len());
    }

    #[test]
    fn years_are_distinct_and_descending() {
        assert_eq!(catalog().years(), [2024, 2021, 2019]);
    }

    #[test]
    fn filter_values_parse_as_integers() {
        assert_eq!(YearFilter::parse("all"), Some(YearFilter::All));
        assert_eq!(YearFilter::parse(" 2024 "), Some(YearFilter::Year(2024)));
        assert_eq!(YearFilter::parse("2024.0"), None);
        assert_eq!(YearFilter::parse(""), None);
    }

    #[test]
    fn unmatched_or_invalid_selection_renders_notice() {
        let catalog = catalog();
        let expected = Outcome::Fallback(notice(NO_MATCH_MESSAGE));
        assert_eq!(catalog.render(YearFilter::Year(1999)), expected);
        assert_eq!(catalog.render_value("nineteen"), expected);
    }

    #[test]
    fn item_highlights_authors_in_order() {
        let catalog = catalog();
        let html = render_item(&catalog.publications()[0]);
        assert!(html.contains(
            r#"<p class="publication-authors">A, <span class="author-highlight">B</span>, C</p>"#
        ));
        assert!(html.contains(r#"<div class="year-badge">2024</div>"#));
        assert!(html.contains(r#"<span class="venue-icon">📚</span> JMLR"#));
    }

    #[test]
    fn item_links_are_uppercased_and_populated_only() {
        let catalog = catalog();
        let html = render_item(&catalog.publications()[0]);
        assert!(html.contains(r#"rel="noopener">PDF</a>"#));
        assert!(html.contains(r#"rel="noopener">ARXIV</a>"#));
        assert!(!html.contains("CODE"));

        let html = render_item(&catalog.publications()[2]);
        assert!(!html.contains("publication-links"));
    }

    #[test]
    fn rendering_is_repeatable() {
        let catalog = catalog();
        assert_eq!(catalog.render(YearFilter::All), catalog.render(YearFilter::All));
        assert_eq!(
            catalog.render(YearFilter::All),
            Publications::render(&catalog)
        );
    }

    #[test]
    fn empty_collection_renders_no_match_notice() {
        let catalog = PublicationCatalog::default();
        assert!(catalog.years().is_empty());
        assert_eq!(
            Publications::render(&catalog),
            Outcome::Fallback(notice(NO_MATCH_MESSAGE))
        );
    }
}
