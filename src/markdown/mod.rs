//! Markdown conversion for long-form talk fields
//!
//! Key learnings and key points are authored in GitHub-flavoured markdown
//! with line-break-sensitive paragraphs: a single newline inside a
//! paragraph becomes `<br />`. Raw HTML embedded in the markdown is emitted
//! as escaped text, never as markup.

use pulldown_cmark::{html, Event, Options, Parser};

/// Markdown to HTML converter
#[derive(Debug, Clone)]
pub struct MarkdownConverter {
    options: Options,
}

impl MarkdownConverter {
    /// Create a converter with GFM extensions and hard line breaks
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        Self { options }
    }

    /// Convert markdown to an HTML fragment. Empty input yields an empty string.
    pub fn to_html(&self, markdown: &str) -> String {
        if markdown.is_empty() {
            return String::new();
        }

        let parser = Parser::new_ext(markdown, self.options).map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            Event::Html(raw) => Event::Text(raw),
            other => other,
        });

        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}
