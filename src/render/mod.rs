//! HTML rendering
//!
//! Turns a [`Screen`] into a complete HTML document. Every string that came
//! from talk data or translations passes through [`escape_html`] before it
//! reaches the output; the only unescaped fragments are the ones produced by
//! the markdown converter, which escapes on its own.

mod detail;
mod list;
mod styles;

use crate::markdown::MarkdownConverter;
use crate::view::{Body, Chrome, LinkView, Screen};

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Options for rendered pages
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include the stylesheet inline
    pub include_styles: bool,
    /// Extra CSS appended after the built-in styles
    pub custom_css: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_styles: true,
            custom_css: None,
        }
    }
}

/// Renders screens into HTML documents
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    markdown: MarkdownConverter,
    options: RenderOptions,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            markdown: MarkdownConverter::new(),
            options,
        }
    }

    /// Render a complete HTML5 document
    pub fn page(&self, screen: &Screen) -> String {
        let styles = if self.options.include_styles {
            styles::stylesheet(self.options.custom_css.as_deref())
        } else {
            String::new()
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="generator" content="talks-catalog">
    <title>{title}</title>
    {styles}
</head>
<body>
{header}
    <main>
{content}
    </main>
    <footer class="site-footer">&copy; {year}</footer>
</body>
</html>
"#,
            lang = screen.lang.code(),
            title = escape_html(&screen.chrome.title),
            styles = styles,
            header = header(&screen.chrome),
            content = self.body(&screen.body),
            year = screen.chrome.footer_year,
        )
    }

    /// Render only the main content region
    pub fn body(&self, body: &Body) -> String {
        match body {
            Body::Loading(text) => format!(
                r#"<div class="loading">{}</div>"#,
                escape_html(text)
            ),
            Body::List(list) => list::render(list),
            Body::Detail(detail) => detail::render(detail, &self.markdown),
            Body::Message(text) => format!(
                r#"<div class="error-message">{}</div>"#,
                escape_html(text)
            ),
        }
    }
}

fn header(chrome: &Chrome) -> String {
    let switcher: String = chrome
        .languages
        .iter()
        .map(|toggle| {
            format!(
                r#"<span class="lang-btn{active}" data-lang="{code}" role="radio" aria-checked="{checked}">{label}</span>"#,
                active = if toggle.active { " active" } else { "" },
                code = toggle.code,
                checked = toggle.active,
                label = toggle.code.to_uppercase(),
            )
        })
        .collect::<Vec<_>>()
        .join("");

    let back = chrome
        .back_link
        .as_ref()
        .map(|link| {
            format!(
                r#"<a id="back-link" class="back-link" href="{}">{}</a>"#,
                escape_html(&link.href),
                escape_html(&link.label)
            )
        })
        .unwrap_or_default();

    format!(
        r#"    <header class="site-header">
        {back}
        <h1>{title}</h1>
        <p id="page-subtitle" class="subtitle">{subtitle}</p>
        <div class="lang-switcher" role="radiogroup">{switcher}</div>
    </header>"#,
        back = back,
        title = escape_html(&chrome.title),
        subtitle = escape_html(&chrome.subtitle),
        switcher = switcher,
    )
}

/// `<a>` to an external page, opened in a new tab
pub(crate) fn external_link(link: &LinkView, class: &str) -> String {
    format!(
        r#"<a href="{href}" target="_blank" rel="noopener noreferrer" class="{class}">{icon} {label}</a>"#,
        href = escape_html(&link.href),
        class = class,
        icon = link.icon,
        label = escape_html(&link.label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::i18n::Lang;
    use crate::state::{AppState, Message};
    use crate::view::project;

    #[test]
    fn test_escape_script_tag() {
        let escaped = escape_html("<script>alert(\"XSS\")</script>");
        assert_eq!(escaped, "&lt;script&gt;alert(&quot;XSS&quot;)&lt;/script&gt;");
        assert!(!escaped.contains("<script>"));
    }

    #[test]
    fn test_escape_special_characters() {
        let escaped = escape_html("< > & \" '");
        assert_eq!(escaped, "&lt; &gt; &amp; &quot; &#39;");
        assert_eq!(escape_html(""), "");
        assert!(!escape_html("<img src=x onerror=\"alert(1)\">").contains("<img"));
    }

    #[test]
    fn test_error_page_has_single_message() {
        let state = AppState::new(Lang::Es).update(Message::LoadFailed("offline".to_string()));
        let html = HtmlRenderer::new().page(&project(&state, &SiteConfig::default(), 2025));
        assert_eq!(html.matches(r#"class="error-message""#).count(), 1);
        assert!(html.contains("Error al cargar las charlas. Por favor, recarga la página."));
        assert!(html.contains(r#"<html lang="es">"#));
    }

    #[test]
    fn test_page_without_styles() {
        let renderer = HtmlRenderer::with_options(RenderOptions {
            include_styles: false,
            custom_css: None,
        });
        let html = renderer.page(&project(&AppState::new(Lang::En), &SiteConfig::default(), 2025));
        assert!(!html.contains("<style>"));
        assert!(html.contains("Loading talks..."));
        assert!(html.contains("&copy; 2025"));
    }
}
