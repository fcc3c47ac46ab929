use crate::config::{classes, PLACEHOLDER_PHOTO};
use crate::html::{escape, external_link, notice};
use crate::model::{Member, MembersDocument};
use crate::section::{Outcome, Resource, Section};

pub const EMPTY_MESSAGE: &str =
    "No team members to display yet. Add member data to data/members.json.";

const READ_MORE: &str = "Read more";
const SHOW_LESS: &str = "Show less";

/// Members split into the principal investigator block and everyone else,
/// each keeping document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub principal: Vec<Member>,
    pub others: Vec<Member>,
}

impl Roster {
    pub fn new(members: Vec<Member>) -> Self {
        let (principal, others): (Vec<_>, Vec<_>) = members
            .into_iter()
            .partition(|member| member.category.is_pi());
        Self { principal, others }
    }

    pub fn len(&self) -> usize {
        self.principal.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct Members;

impl Section for Members {
    const RESOURCE: Resource = Resource::Members;
    type Document = MembersDocument;
    type View = Roster;

    fn view(document: Self::Document) -> Self::View {
        Roster::new(document.members)
    }

    fn render(view: &Self::View) -> Outcome {
        if view.is_empty() {
            return Self::failure();
        }
        Outcome::Html(render_roster(view))
    }

    fn failure() -> Outcome {
        Outcome::Fallback(notice(EMPTY_MESSAGE))
    }
}

pub fn render_roster(roster: &Roster) -> String {
    let mut html = String::new();

    if !roster.principal.is_empty() {
        html.push_str(r#"<div class="pi-section">"#);
        for member in &roster.principal {
            html.push_str(&render_card(member));
        }
        html.push_str("</div>");
    }

    if !roster.others.is_empty() {
        html.push_str(r#"<div class="members-grid">"#);
        for member in &roster.others {
            html.push_str(&render_card(member));
        }
        html.push_str("</div>");
    }

    html
}

pub fn render_card(member: &Member) -> String {
    let bio_id = bio_id(&member.name);
    let name = escape(&member.name);
    let photo = escape(member.photo().unwrap_or(PLACEHOLDER_PHOTO));

    let links = member
        .links()
        .iter()
        .map(|(kind, url)| {
            external_link(url, Some("btn-link"), Some(&capitalize(kind)), link_glyph(kind))
        })
        .collect::<String>();
    let links = if links.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="member-links">{links}</div>"#)
    };

    format!(
        concat!(
            r#"<div class="member-card {fade}">"#,
            r#"<img src="{photo}" alt="{name}" class="{image}">"#,
            r#"<div class="member-info">"#,
            r#"<h4 class="member-name">{name}</h4>"#,
            r#"<p class="member-role">{role}</p>"#,
            r#"<p class="member-bio {truncated}" id="{bio_id}">{bio}</p>"#,
            r#"<button type="button" class="{toggle}" data-bio="{bio_id}">{label}</button>"#,
            "{links}",
            "</div></div>"
        ),
        fade = classes::FADE_IN,
        image = classes::MEMBER_IMAGE,
        truncated = classes::TRUNCATED,
        toggle = classes::BIO_TOGGLE,
        photo = photo,
        name = name,
        role = escape(&member.role),
        bio_id = escape(&bio_id),
        bio = escape(&member.bio),
        label = BioState::Truncated.label(),
        links = links,
    )
}

/// Stable element id for a member's biography: `bio-` followed by the name
/// with whitespace runs collapsed to `-`, lowercased.
pub fn bio_id(name: &str) -> String {
    let slug = name.split_whitespace().collect::<Vec<_>>().join("-");
    let slug = if name.starts_with(char::is_whitespace) && !slug.is_empty() {
        format!("-{slug}")
    } else {
        slug
    };
    let slug = if name.ends_with(char::is_whitespace) {
        format!("{slug}-")
    } else {
        slug
    };
    format!("bio-{}", slug.to_lowercase())
}

/// Replacement `src` for a member photo that failed to load. An image that
/// is already the placeholder is left alone so a missing placeholder cannot
/// loop.
pub fn photo_fallback(current_src: Option<&str>) -> Option<&'static str> {
    match current_src {
        Some(src) if src.ends_with(PLACEHOLDER_PHOTO) => None,
        _ => Some(PLACEHOLDER_PHOTO),
    }
}

pub fn link_glyph(kind: &str) -> &'static str {
    match kind.to_lowercase().as_str() {
        "website" => "🌐",
        "scholar" => "🎓",
        "github" => "💻",
        "twitter" => "🐦",
        "linkedin" => "💼",
        "email" => "📧",
        _ => "🔗",
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Presentation state of a biography paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BioState {
    Truncated,
    Expanded,
}

impl BioState {
    pub const fn from_truncated(truncated: bool) -> Self {
        if truncated {
            Self::Truncated
        } else {
            Self::Expanded
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Truncated => Self::Expanded,
            Self::Expanded => Self::Truncated,
        }
    }

    pub const fn is_truncated(self) -> bool {
        matches!(self, Self::Truncated)
    }

    /// Label for the toggle button while in this state.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Truncated => READ_MORE,
            Self::Expanded => SHOW_LESS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(json: &str) -> Member {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn roster_partitions_principal_investigators() {
        let roster = Roster::new(vec![
            member(r#"{"name": "Student One", "category": "phd"}"#),
            member(r#"{"name": "The PI", "category": "pi"}"#),
            member(r#"{"name": "Student Two"}"#),
        ]);

        assert_eq!(roster.principal.len(), 1);
        assert_eq!(roster.principal[0].name, "The PI");
        let others = roster.others.iter().map(|m| m.name.as_str()).collect::<Vec<_>>();
        assert_eq!(others, ["Student One", "Student Two"]);
    }

    #[test]
    fn pi_block_renders_above_grid() {
        let roster = Roster::new(vec![
            member(r#"{"name": "Student", "category": "phd"}"#),
            member(r#"{"name": "Lead", "category": "pi"}"#),
        ]);
        let html = render_roster(&roster);

        let pi = html.find("pi-section").unwrap();
        let grid = html.find("members-grid").unwrap();
        assert!(pi < grid);
        assert!(html.find("Lead").unwrap() < grid);
    }

    #[test]
    fn grid_wrapper_omitted_without_other_members() {
        let roster = Roster::new(vec![member(r#"{"name": "Lead", "category": "pi"}"#)]);
        let html = render_roster(&roster);
        assert!(html.contains("pi-section"));
        assert!(!html.contains("members-grid"));
    }

    #[test]
    fn card_without_links_has_no_link_row() {
        let html = render_card(&member(
            r#"{"name": "Quiet Person", "role": "MSc", "bio": "Hi", "links": {"github": ""}}"#,
        ));
        assert!(!html.contains("member-links"));
        assert!(!html.contains("btn-link"));
    }

    #[test]
    fn card_renders_links_with_glyphs_and_titles() {
        let html = render_card(&member(
            r#"{"name": "Ada", "links": {"GitHub": "https://github.com/ada", "mastodon": "https://m.social/@ada"}}"#,
        ));
        assert!(html.contains(r#"<div class="member-links">"#));
        assert!(html.contains(r#"title="GitHub" target="_blank" rel="noopener">💻</a>"#));
        assert!(html.contains(r#"title="Mastodon" target="_blank" rel="noopener">🔗</a>"#));
    }

    #[test]
    fn card_uses_placeholder_without_photo() {
        let html = render_card(&member(r#"{"name": "Ada", "photo": ""}"#));
        assert!(html.contains(r#"src="images/team/placeholder.jpg""#));

        let html = render_card(&member(r#"{"name": "Ada", "photo": "images/team/ada.jpg"}"#));
        assert!(html.contains(r#"src="images/team/ada.jpg""#));
    }

    #[test]
    fn card_starts_truncated_with_toggle() {
        let html = render_card(&member(r#"{"name": "Mary  Jane Doe", "bio": "Long bio"}"#));
        assert!(html.contains(
            r#"<p class="member-bio truncated" id="bio-mary-jane-doe">Long bio</p>"#
        ));
        assert!(html.contains(r#"data-bio="bio-mary-jane-doe">Read more</button>"#));
        assert!(html.contains("fade-in"));
    }

    #[test]
    fn bio_id_collapses_whitespace_and_lowercases() {
        assert_eq!(bio_id("Jane Doe"), "bio-jane-doe");
        assert_eq!(bio_id("Jane \t  Q. Doe"), "bio-jane-q.-doe");
        assert_eq!(bio_id(" Lead "), "bio--lead-");
    }

    #[test]
    fn photo_fallback_swaps_once() {
        assert_eq!(photo_fallback(Some("images/team/ada.jpg")), Some(PLACEHOLDER_PHOTO));
        assert_eq!(photo_fallback(None), Some(PLACEHOLDER_PHOTO));
        assert_eq!(photo_fallback(Some(PLACEHOLDER_PHOTO)), None);
        assert_eq!(
            photo_fallback(Some("https://lab.org/images/team/placeholder.jpg")),
            None
        );
    }

    #[test]
    fn link_glyph_lookup_is_case_insensitive_with_default() {
        assert_eq!(link_glyph("Email"), "📧");
        assert_eq!(link_glyph("linkedin"), "💼");
        assert_eq!(link_glyph("orcid"), "🔗");
    }

    #[test]
    fn toggling_bio_twice_restores_state_and_label() {
        let start = BioState::from_truncated(true);
        let once = start.toggle();
        assert!(!once.is_truncated());
        assert_eq!(once.label(), "Show less");

        let twice = once.toggle();
        assert_eq!(twice, start);
        assert!(twice.is_truncated());
        assert_eq!(twice.label(), "Read more");
    }

    #[test]
    fn empty_roster_renders_fallback() {
        let outcome = Members::render(&Roster::default());
        assert_eq!(outcome, Outcome::Fallback(notice(EMPTY_MESSAGE)));
    }
}
