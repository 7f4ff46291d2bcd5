//! Detail view markup

use super::{escape_html, external_link};
use crate::markdown::MarkdownConverter;
use crate::view::{DetailView, Section};

pub(super) fn render(detail: &DetailView, markdown: &MarkdownConverter) -> String {
    let meta: String = detail
        .meta
        .iter()
        .map(|item| {
            format!(
                r#"<span class="meta-item"><strong>{}:</strong> {}</span>"#,
                escape_html(&item.label),
                escape_html(&item.value)
            )
        })
        .collect();

    let core = detail
        .core_label
        .as_ref()
        .map(|label| format!(r#"<span class="meta-badge core-badge">{}</span>"#, escape_html(label)))
        .unwrap_or_default();

    let mut sections = String::new();
    if let Some(section) = &detail.description {
        let body = format!("<p>{}</p>", escape_html(&section.content));
        sections.push_str(&section_html(section, "", "detail-content", &body));
    }
    if let Some(section) = &detail.key_learning {
        let body = markdown.to_html(&section.content);
        sections.push_str(&section_html(
            section,
            " key-learning-section",
            "detail-content markdown-content",
            &body,
        ));
    }
    if let Some(section) = &detail.key_points {
        let body = markdown.to_html(&section.content);
        sections.push_str(&section_html(
            section,
            " key-points-section",
            "detail-content markdown-content",
            &body,
        ));
    }
    if let Some(links) = &detail.links {
        let anchors: String = links
            .links
            .iter()
            .map(|link| external_link(link, "detail-link"))
            .collect();
        sections.push_str(&format!(
            r#"        <section class="detail-section detail-links-section">
            <h2>{}</h2>
            <div class="detail-links">{}</div>
        </section>
"#,
            escape_html(&links.heading),
            anchors
        ));
    }

    format!(
        r#"        <article class="talk-detail">
        <header class="detail-header">
            <div class="detail-title-container">
                <h1 class="detail-title">{title}</h1>
                <span class="language-badge {badge_class}">{badge}</span>
            </div>
            <div class="detail-meta">{meta}{core}</div>
        </header>
{sections}        </article>"#,
        title = escape_html(&detail.title),
        badge_class = escape_html(&detail.badge.class),
        badge = escape_html(&detail.badge.text),
        meta = meta,
        core = core,
        sections = sections,
    )
}

fn section_html(section: &Section, extra_class: &str, content_class: &str, body: &str) -> String {
    format!(
        r#"        <section class="detail-section{extra_class}">
            <h2>{heading}</h2>
            <div class="{content_class}">
{body}
            </div>
        </section>
"#,
        extra_class = extra_class,
        heading = escape_html(&section.heading),
        content_class = content_class,
        body = body,
    )
}
