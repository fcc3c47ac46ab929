use std::fs;
use std::path::Path;

use lab_site_cli::report::{build_report, render_section, write_text, HIDDEN_MARKER};
use lab_site_core::Resource;
use tempfile::TempDir;

const MEMBERS: &str = r#"{"members": [
    {"name": "Pat Lead", "role": "Professor", "category": "pi", "bio": "Runs the lab."},
    {"name": "Sam Student", "role": "PhD Student", "category": "phd", "bio": "Studies things.",
     "links": {"github": "https://github.com/sam", "website": ""}}
]}"#;

const PUBLICATIONS: &str = r#"{"publications": [
    {"title": "First", "authors": ["Pat Lead"], "year": 2022, "venue": "ICLR"},
    {"title": "Second", "authors": ["Sam Student", "Pat Lead"], "year": 2024, "venue": "JMLR",
     "venueType": "journal", "highlightAuthors": ["Sam Student"]},
    {"title": "Third", "authors": ["Sam Student"], "year": 2024, "venue": "arXiv", "venueType": "preprint"}
]}"#;

const NEWS: &str = r#"{"news": [
    {"headline": "Lab opens", "description": "Hello.", "date": "2023-09-01"},
    {"headline": "Paper accepted", "description": "Yay.", "date": "2024-05-20", "link": "https://lab.org/p"}
]}"#;

const ALUMNI: &str = r#"{"alumni": [
    {"name": "Old Friend", "role": "Postdoc", "startYear": 2018, "endYear": 2021},
    {"name": "New Friend", "role": "MSc", "endYear": 2023, "currentPosition": "Engineer"}
]}"#;

fn data_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

fn full_site() -> TempDir {
    data_dir(&[
        ("members.json", MEMBERS),
        ("publications.json", PUBLICATIONS),
        ("news.json", NEWS),
        ("alumni.json", ALUMNI),
    ])
}

fn text_report(path: &Path) -> String {
    let mut out = Vec::new();
    write_text(&build_report(path), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn report_summarises_every_section() {
    let dir = full_site();
    let report = build_report(dir.path());

    assert!(report.failures.is_empty());

    let members = report.members.unwrap();
    assert_eq!((members.principal, members.others), (1, 1));

    let publications = report.publications.unwrap();
    assert_eq!(publications.total, 3);
    assert_eq!(publications.years, [2024, 2022]);

    let news = report.news.unwrap();
    assert_eq!(news.total, 2);
    assert_eq!(news.latest.unwrap().headline, "Paper accepted");

    let alumni = report.alumni.unwrap();
    assert!(!alumni.hidden);
    let years = alumni.by_year.iter().map(|g| g.year).collect::<Vec<_>>();
    assert_eq!(years, [2023, 2021]);
}

#[test]
fn missing_and_broken_files_are_soft_failures() {
    let dir = data_dir(&[("members.json", MEMBERS), ("news.json", "{\"news\": [")]);
    let report = build_report(dir.path());

    assert!(report.members.is_some());
    assert!(report.publications.is_none());
    assert!(report.news.is_none());
    assert!(report.alumni.is_none());

    let failed = report
        .failures
        .iter()
        .map(|f| f.section.as_str())
        .collect::<Vec<_>>();
    assert_eq!(failed, ["publications", "news", "alumni"]);

    let text = text_report(dir.path());
    assert!(text.contains("Load failures:"));
    assert!(text.contains("- section hidden"));
}

#[test]
fn render_publications_with_year_filter() {
    let dir = full_site();

    let all = render_section(dir.path(), Resource::Publications, None);
    assert!(all.find("Second").unwrap() < all.find("First").unwrap());

    let filtered = render_section(dir.path(), Resource::Publications, Some("2022"));
    assert!(filtered.contains("First"));
    assert!(!filtered.contains("Second"));

    let none = render_section(dir.path(), Resource::Publications, Some("1990"));
    assert!(none.contains("No publications found for the selected year."));
}

#[test]
fn render_alumni_hidden_when_missing_or_empty() {
    let dir = data_dir(&[]);
    assert_eq!(render_section(dir.path(), Resource::Alumni, None), HIDDEN_MARKER);

    let dir = data_dir(&[("alumni.json", r#"{"alumni": []}"#)]);
    assert_eq!(render_section(dir.path(), Resource::Alumni, None), HIDDEN_MARKER);
}

#[test]
fn render_members_fallback_when_missing() {
    let dir = data_dir(&[]);
    let html = render_section(dir.path(), Resource::Members, None);
    assert!(html.contains("No team members to display yet."));
}

#[test]
fn member_without_links_has_no_link_row() {
    let dir = full_site();
    let html = render_section(dir.path(), Resource::Members, None);
    let lead_card = &html[..html.find("members-grid").unwrap()];
    assert!(lead_card.contains("Pat Lead"));
    assert!(!lead_card.contains("member-links"));
    assert!(html.contains("member-links"));
}
