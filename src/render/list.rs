//! List view markup

use super::{escape_html, external_link};
use crate::view::{CardView, FilterControls, ListView, SelectControl};

pub(super) fn render(list: &ListView) -> String {
    let mut out = String::new();
    out.push_str(&controls(&list.controls));
    out.push_str(&format!(
        "\n        <p id=\"results-count\" class=\"results-count\">{}</p>\n",
        escape_html(&list.summary)
    ));

    out.push_str("        <section id=\"talks-container\" class=\"talks-grid\">\n");
    match &list.empty_message {
        Some(message) => {
            out.push_str(&format!(
                "            <div class=\"empty-state\">{}</div>\n",
                escape_html(message)
            ));
        }
        None => {
            for card in &list.cards {
                out.push_str(&card_html(card));
            }
        }
    }
    out.push_str("        </section>");
    out
}

fn controls(controls: &FilterControls) -> String {
    format!(
        r#"        <form class="filters" method="get">
            <input type="search" id="search-input" name="q" value="{search_value}" placeholder="{placeholder}" aria-label="{search_label}">
            {year}
            {language}
            {talk_type}
            <label class="checkbox-label"><input type="checkbox" id="core-filter" name="core" value="1"{checked}> <span>{core_label}</span></label>
        </form>"#,
        search_value = escape_html(&controls.search_value),
        placeholder = escape_html(&controls.search_placeholder),
        search_label = escape_html(&controls.search_label),
        year = select(&controls.year),
        language = select(&controls.talk_language),
        talk_type = select(&controls.talk_type),
        checked = if controls.core_only { " checked" } else { "" },
        core_label = escape_html(&controls.core_only_label),
    )
}

fn select(control: &SelectControl) -> String {
    let options: String = control
        .options
        .iter()
        .map(|option| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                escape_html(&option.value),
                if option.selected { " selected" } else { "" },
                escape_html(&option.label)
            )
        })
        .collect();

    format!(
        r#"<select id="{name}-filter" name="{name}" aria-label="{label}">{options}</select>"#,
        name = control.name,
        label = escape_html(&control.label),
        options = options,
    )
}

fn card_html(card: &CardView) -> String {
    let mut meta = String::new();
    if let Some(year) = &card.year {
        meta.push_str(&format!(
            r#"<span class="meta-item"><span class="meta-badge">{}</span></span>"#,
            escape_html(year)
        ));
    }
    if let Some(place) = &card.place {
        meta.push_str(&format!(
            r#"<span class="meta-item">📍 {}</span>"#,
            escape_html(place)
        ));
    }
    if let Some(type_label) = &card.type_label {
        meta.push_str(&format!(
            r#"<span class="meta-item"><span class="meta-badge type-badge">{}</span></span>"#,
            escape_html(type_label)
        ));
    }
    if card.core {
        meta.push_str(r#"<span class="meta-item"><span class="meta-badge core-badge">Core</span></span>"#);
    }

    let description = card
        .description
        .as_ref()
        .map(|d| format!(r#"<p class="talk-description">{}</p>"#, escape_html(d)))
        .unwrap_or_default();

    let actions = card
        .detail_link
        .as_ref()
        .map(|link| {
            format!(
                r#"<div class="talk-actions"><a href="{}" class="detail-button">{} {}</a></div>"#,
                escape_html(&link.href),
                link.icon,
                escape_html(&link.label)
            )
        })
        .unwrap_or_default();

    let links: String = card
        .links
        .iter()
        .map(|link| external_link(link, "talk-link"))
        .collect();

    format!(
        r#"            <article class="talk-card{core}" id="{id}">
                <div class="talk-header">
                    <h2 class="talk-title">{title}</h2>
                    <span class="language-badge {badge_class}" aria-label="Language: {language}">{badge}</span>
                </div>
                <div class="talk-meta">{meta}</div>
                {description}
                {actions}
                <div class="talk-links">{links}</div>
            </article>
"#,
        core = if card.core { " core" } else { "" },
        id = escape_html(&card.id),
        title = escape_html(&card.title),
        badge_class = escape_html(&card.badge.class),
        language = escape_html(&card.badge.language),
        badge = escape_html(&card.badge.text),
        meta = meta,
        description = description,
        actions = actions,
        links = links,
    )
}
