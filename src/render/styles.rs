//! Built-in stylesheet for rendered pages

pub(super) fn stylesheet(custom_css: Option<&str>) -> String {
    format!(
        r#"<style>
        :root {{
            --color-bg: #ffffff;
            --color-text: #24292e;
            --color-muted: #6a737d;
            --color-link: #0366d6;
            --color-card: #f6f8fa;
            --color-border: #e1e4e8;
            --color-core: #d73a49;
        }}

        * {{
            box-sizing: border-box;
        }}

        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
            font-size: 16px;
            line-height: 1.6;
            color: var(--color-text);
            background-color: var(--color-bg);
            max-width: 1100px;
            margin: 0 auto;
            padding: 2rem;
        }}

        a {{
            color: var(--color-link);
            text-decoration: none;
        }}

        a:hover {{
            text-decoration: underline;
        }}

        .subtitle, .results-count {{
            color: var(--color-muted);
        }}

        .lang-btn {{
            padding: .2em .6em;
            border: 1px solid var(--color-border);
            border-radius: 6px;
            margin-right: 4px;
        }}

        .lang-btn.active {{
            background-color: var(--color-link);
            color: var(--color-bg);
        }}

        .filters {{
            display: flex;
            flex-wrap: wrap;
            gap: 8px;
            margin: 16px 0;
        }}

        .talks-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
            gap: 16px;
        }}

        .talk-card, .detail-section {{
            background-color: var(--color-card);
            border: 1px solid var(--color-border);
            border-radius: 6px;
            padding: 16px;
        }}

        .talk-card.core {{
            border-left: .25em solid var(--color-core);
        }}

        .talk-header, .detail-title-container {{
            display: flex;
            justify-content: space-between;
            align-items: flex-start;
            gap: 8px;
        }}

        .talk-title {{
            font-size: 1.15em;
            margin: 0;
        }}

        .meta-item {{
            margin-right: 8px;
            font-size: .9em;
        }}

        .meta-badge, .language-badge {{
            padding: .1em .5em;
            border-radius: 6px;
            border: 1px solid var(--color-border);
            font-size: .8em;
        }}

        .core-badge {{
            color: var(--color-core);
            border-color: var(--color-core);
        }}

        .talk-links a, .detail-links a {{
            margin-right: 12px;
        }}

        .detail-section {{
            margin: 16px 0;
        }}

        .empty-state, .error-message, .loading {{
            padding: 32px;
            text-align: center;
            color: var(--color-muted);
        }}

        .site-footer {{
            margin-top: 32px;
            color: var(--color-muted);
            font-size: .85em;
        }}

        {custom}
    </style>"#,
        custom = custom_css.unwrap_or("")
    )
}
