use std::io::{self, Write};
use std::path::Path;

use lab_site_core::alumni::Alumni;
use lab_site_core::members::Members;
use lab_site_core::news::News;
use lab_site_core::publications::Publications;
use lab_site_core::{settle, Outcome, Resource, Section};
use serde::Serialize;

use crate::load::{load, read_document};

/// Shown in place of markup when a section would be hidden on the page.
pub const HIDDEN_MARKER: &str = "(hidden)";

#[derive(Debug, Serialize)]
pub struct SiteReport {
    pub data_dir: String,
    pub members: Option<MembersSummary>,
    pub publications: Option<PublicationsSummary>,
    pub news: Option<NewsSummary>,
    pub alumni: Option<AlumniSummary>,
    pub failures: Vec<SectionFailure>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MembersSummary {
    pub principal: usize,
    pub others: usize,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PublicationsSummary {
    pub total: usize,
    pub years: Vec<i32>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NewsSummary {
    pub total: usize,
    pub undated: usize,
    pub latest: Option<LatestNews>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LatestNews {
    pub headline: String,
    pub date: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AlumniSummary {
    pub total: usize,
    pub hidden: bool,
    pub by_year: Vec<YearCount>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SectionFailure {
    pub section: String,
    pub error: String,
}

fn view_or_record<S: Section>(
    data_dir: &Path,
    failures: &mut Vec<SectionFailure>,
) -> Option<S::View> {
    let loaded = read_document::<S>(data_dir);
    if let Err(e) = &loaded {
        failures.push(SectionFailure {
            section: S::RESOURCE.to_string(),
            error: e.to_string(),
        });
    }
    settle::<S>(loaded).view
}

pub fn build_report(data_dir: &Path) -> SiteReport {
    let mut failures = Vec::new();

    let members = view_or_record::<Members>(data_dir, &mut failures).map(|roster| MembersSummary {
        principal: roster.principal.len(),
        others: roster.others.len(),
    });

    let publications =
        view_or_record::<Publications>(data_dir, &mut failures).map(|catalog| PublicationsSummary {
            total: catalog.len(),
            years: catalog.years(),
        });

    let news = view_or_record::<News>(data_dir, &mut failures).map(|timeline| NewsSummary {
        total: timeline.len(),
        undated: timeline.items().iter().filter(|item| item.date.is_none()).count(),
        latest: timeline
            .latest()
            .filter(|item| item.date.is_some())
            .map(|item| LatestNews {
                headline: item.item.headline.clone(),
                date: item.item.date.clone(),
            }),
    });

    let alumni = view_or_record::<Alumni>(data_dir, &mut failures).map(|groups| AlumniSummary {
        total: groups.len(),
        hidden: groups.is_empty(),
        by_year: groups
            .groups()
            .iter()
            .map(|group| YearCount {
                year: group.year,
                count: group.alumni.len(),
            })
            .collect(),
    });

    SiteReport {
        data_dir: data_dir.display().to_string(),
        members,
        publications,
        news,
        alumni,
        failures,
    }
}

pub fn write_text(report: &SiteReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nLab Site Data")?;
    writeln!(out, "=============")?;
    writeln!(out, "Data directory: {}", report.data_dir)?;

    writeln!(out, "\nMembers:")?;
    match &report.members {
        Some(members) => writeln!(
            out,
            "- {} principal investigator(s), {} other member(s)",
            members.principal, members.others
        )?,
        None => writeln!(out, "- (not loaded)")?,
    }

    writeln!(out, "\nPublications:")?;
    match &report.publications {
        Some(publications) => {
            let years = publications
                .years
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "- {} total", publications.total)?;
            writeln!(out, "- years: {years}")?;
        }
        None => writeln!(out, "- (not loaded)")?,
    }

    writeln!(out, "\nNews:")?;
    match &report.news {
        Some(news) => {
            writeln!(out, "- {} total, {} undated", news.total, news.undated)?;
            if let Some(latest) = &news.latest {
                writeln!(out, "- latest: {} | {}", latest.date, latest.headline)?;
            }
        }
        None => writeln!(out, "- (not loaded)")?,
    }

    writeln!(out, "\nAlumni:")?;
    match &report.alumni {
        Some(alumni) if !alumni.hidden => {
            writeln!(out, "- {} total", alumni.total)?;
            for group in &alumni.by_year {
                writeln!(out, "- {}: {}", group.year, group.count)?;
            }
        }
        _ => writeln!(out, "- section hidden")?,
    }

    if !report.failures.is_empty() {
        writeln!(out, "\nLoad failures:")?;
        for failure in &report.failures {
            writeln!(out, "- {}: {}", failure.section, failure.error)?;
        }
    }

    Ok(())
}

/// Markup a section would put on the page, its fallback notice, or
/// [`HIDDEN_MARKER`].
pub fn render_section(data_dir: &Path, resource: Resource, year: Option<&str>) -> String {
    let outcome = match resource {
        Resource::Members => load::<Members>(data_dir).outcome,
        Resource::Publications => {
            let settled = load::<Publications>(data_dir);
            match (settled.view, year) {
                (Some(catalog), Some(year)) => catalog.render_value(year),
                _ => settled.outcome,
            }
        }
        Resource::News => load::<News>(data_dir).outcome,
        Resource::Alumni => load::<Alumni>(data_dir).outcome,
    };

    match outcome {
        Outcome::Html(markup) | Outcome::Fallback(markup) => markup,
        Outcome::Hide => HIDDEN_MARKER.to_string(),
    }
}
