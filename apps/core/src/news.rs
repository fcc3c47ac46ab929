use std::cmp::Ordering;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};

use crate::config::classes;
use crate::html::{escape, external_link, notice};
use crate::model::{NewsDocument, NewsItem};
use crate::section::{Outcome, Resource, Section};

pub const EMPTY_MESSAGE: &str = "No news to display yet. Add news items to data/news.json.";

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a news date. Accepts RFC 3339 timestamps, offset-less date-times
/// and plain `YYYY-MM-DD` dates; the latter two are taken as UTC.
pub fn parse_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    let utc = FixedOffset::east_opt(0)?;

    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time);
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .and_then(|naive| naive.and_local_timezone(utc).single())
}

/// A news item paired with its parsed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedItem {
    pub item: NewsItem,
    pub date: Option<DateTime<FixedOffset>>,
}

impl DatedItem {
    pub fn new(item: NewsItem) -> Self {
        let date = parse_date(&item.date);
        Self { item, date }
    }

    /// Day-of-month numeral and uppercased short month, e.g. `("5", "MAR")`.
    pub fn date_block(&self) -> Option<(String, String)> {
        self.date.map(|date| {
            (
                date.day().to_string(),
                date.format("%b").to_string().to_uppercase(),
            )
        })
    }
}

/// News items, newest first. Items without a usable date go last in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    items: Vec<DatedItem>,
}

impl Timeline {
    pub fn new(items: Vec<NewsItem>) -> Self {
        let mut items = items.into_iter().map(DatedItem::new).collect::<Vec<_>>();
        items.sort_by(|a, b| newest_first(a.date.as_ref(), b.date.as_ref()));
        Self { items }
    }

    pub fn items(&self) -> &[DatedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn latest(&self) -> Option<&DatedItem> {
        self.items.first()
    }
}

fn newest_first(
    a: Option<&DateTime<FixedOffset>>,
    b: Option<&DateTime<FixedOffset>>,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub struct News;

impl Section for News {
    const RESOURCE: Resource = Resource::News;
    type Document = NewsDocument;
    type View = Timeline;

    fn view(document: Self::Document) -> Self::View {
        Timeline::new(document.news)
    }

    fn render(view: &Self::View) -> Outcome {
        if view.is_empty() {
            return Self::failure();
        }
        Outcome::Html(view.items().iter().map(render_item).collect())
    }

    fn failure() -> Outcome {
        Outcome::Fallback(notice(EMPTY_MESSAGE))
    }
}

pub fn render_item(dated: &DatedItem) -> String {
    let item = &dated.item;
    let (day, month) = dated.date_block().unwrap_or_default();
    let link = item.link().map_or_else(String::new, |href| {
        external_link(href, Some("news-link"), None, "Read more →")
    });

    format!(
        concat!(
            r#"<div class="news-item {fade}">"#,
            r#"<div class="news-date">"#,
            r#"<div class="news-day">{day}</div>"#,
            r#"<div class="news-month">{month}</div>"#,
            "</div>",
            r#"<div class="news-content">"#,
            "<h3>{headline}</h3>",
            r#"<p class="news-description">{description}</p>"#,
            "{link}",
            "</div></div>"
        ),
        fade = classes::FADE_IN,
        day = day,
        month = month,
        headline = escape(&item.headline),
        description = escape(&item.description),
        link = link,
    )
}
