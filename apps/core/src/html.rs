//! Small helpers for building section markup as strings.

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Anchor opening in a new tab.
pub fn external_link(href: &str, class: Option<&str>, title: Option<&str>, body: &str) -> String {
    let class = class.map_or_else(String::new, |class| format!(r#" class="{class}""#));
    let title = title.map_or_else(String::new, |title| {
        format!(r#" title="{}""#, escape(title))
    });
    format!(
        r#"<a href="{href}"{class}{title} target="_blank" rel="noopener">{body}</a>"#,
        href = escape(href),
    )
}

/// Centered placeholder paragraph shown when a section has nothing to show.
pub fn notice(message: &str) -> String {
    format!(r#"<p class="section-notice">{}</p>"#, escape(message))
}
