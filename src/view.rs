//! View models
//!
//! `project` turns the application state into a complete description of
//! the page: every label already translated, every bilingual field already
//! resolved. Nothing here escapes or emits markup; that is `render`'s job.

use crate::config::SiteConfig;
use crate::filter::FilterOptions;
use crate::i18n::{t, Lang};
use crate::state::{AppState, LoadState, Route};
use crate::summary::ResultSummary;
use crate::talk::{Talk, TalkField};

/// Everything needed to draw one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub lang: Lang,
    pub chrome: Chrome,
    pub body: Body,
}

/// Static translated strings around the main content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub title: String,
    pub subtitle: String,
    /// Language switcher entries, in display order
    pub languages: Vec<LanguageToggle>,
    /// Link back to the list, shown on detail pages
    pub back_link: Option<LinkView>,
    pub footer_year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageToggle {
    pub code: &'static str,
    pub active: bool,
}

/// Main content region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Data has not arrived yet
    Loading(String),
    List(ListView),
    Detail(Box<DetailView>),
    /// A single localized error or not-found message
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub controls: FilterControls,
    pub summary: String,
    pub cards: Vec<CardView>,
    /// Shown instead of cards when nothing matches
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControls {
    pub search_label: String,
    pub search_placeholder: String,
    pub search_value: String,
    pub year: SelectControl,
    pub talk_language: SelectControl,
    pub talk_type: SelectControl,
    pub core_only_label: String,
    pub core_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectControl {
    /// Form field name
    pub name: &'static str,
    pub label: String,
    /// First entry is the "all" option with an empty value
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageBadge {
    /// Raw delivery language, lower-cased for styling
    pub class: String,
    /// `ES`, `EN` or the raw language
    pub text: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub href: String,
    pub label: String,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub badge: LanguageBadge,
    pub year: Option<String>,
    pub place: Option<String>,
    pub type_label: Option<String>,
    pub core: bool,
    pub description: Option<String>,
    /// Present only when the talk has key learnings or key points
    pub detail_link: Option<LinkView>,
    pub links: Vec<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub badge: LanguageBadge,
    pub meta: Vec<MetaItem>,
    pub core_label: Option<String>,
    pub description: Option<Section>,
    /// Markdown source
    pub key_learning: Option<Section>,
    /// Markdown source
    pub key_points: Option<Section>,
    pub links: Option<LinksSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaItem {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinksSection {
    pub heading: String,
    pub links: Vec<LinkView>,
}

/// Project the state onto a screen description
pub fn project(state: &AppState, site: &SiteConfig, footer_year: i32) -> Screen {
    let lang = state.lang;
    let on_detail = matches!(state.route, Route::Detail(_));

    let chrome = Chrome {
        title: t(lang, "title").to_string(),
        subtitle: format!("{} {}", t(lang, "subtitle"), site.author),
        languages: Lang::all()
            .iter()
            .map(|l| LanguageToggle {
                code: l.code(),
                active: *l == lang,
            })
            .collect(),
        back_link: on_detail.then(|| LinkView {
            href: site.list_page.clone(),
            label: t(lang, "back_to_talks").to_string(),
            icon: "",
        }),
        footer_year,
    };

    let body = match (&state.load, &state.route) {
        (_, Route::Detail(None)) => Body::Message(t(lang, "not_found").to_string()),
        (LoadState::Pending, _) => Body::Loading(t(lang, "loading").to_string()),
        (LoadState::Failed(_), Route::List) => Body::Message(t(lang, "error_loading").to_string()),
        (LoadState::Failed(_), Route::Detail(_)) => {
            Body::Message(t(lang, "loading_error").to_string())
        }
        (LoadState::Loaded, Route::List) => Body::List(list_view(state, site)),
        (LoadState::Loaded, Route::Detail(Some(_))) => match state.current_talk() {
            Some(talk) => Body::Detail(Box::new(detail_view(talk, lang))),
            None => Body::Message(t(lang, "not_found").to_string()),
        },
    };

    Screen { lang, chrome, body }
}

fn list_view(state: &AppState, site: &SiteConfig) -> ListView {
    let lang = state.lang;
    let visible = state.visible_talks();
    let summary = ResultSummary::from_talks(visible.iter().copied()).render(lang);
    let cards: Vec<CardView> = visible
        .iter()
        .map(|talk| card_view(talk, lang, &site.detail_page))
        .collect();
    let empty_message = cards
        .is_empty()
        .then(|| t(lang, "no_results").to_string());

    ListView {
        controls: filter_controls(state, &state.options),
        summary,
        cards,
        empty_message,
    }
}

fn filter_controls(state: &AppState, options: &FilterOptions) -> FilterControls {
    let lang = state.lang;
    let criteria = &state.criteria;

    let year = select(
        "year",
        t(lang, "filter_by_year"),
        t(lang, "all_years"),
        criteria.year.as_deref(),
        options.years.iter().map(|y| (y.clone(), y.clone())),
    );
    let talk_language = select(
        "talk_language",
        t(lang, "filter_by_language"),
        t(lang, "all_languages"),
        criteria.talk_language.as_deref(),
        FilterOptions::TALK_LANGUAGES.iter().map(|value| {
            let key = value.to_lowercase();
            (value.to_string(), t(lang, &key).to_string())
        }),
    );
    let talk_type = select(
        "type",
        t(lang, "filter_by_type"),
        t(lang, "all_types"),
        criteria.talk_type.as_deref(),
        options
            .types
            .iter()
            .map(|ty| (ty.clone(), t(lang, ty).to_string())),
    );

    FilterControls {
        search_label: t(lang, "search_label").to_string(),
        search_placeholder: t(lang, "search_placeholder").to_string(),
        search_value: criteria.search_text.clone(),
        year,
        talk_language,
        talk_type,
        core_only_label: t(lang, "core_only").to_string(),
        core_only: criteria.core_only,
    }
}

fn select(
    name: &'static str,
    label: &str,
    all_label: &str,
    current: Option<&str>,
    values: impl Iterator<Item = (String, String)>,
) -> SelectControl {
    let current = current.unwrap_or("");
    let mut options = vec![SelectOption {
        value: String::new(),
        label: all_label.to_string(),
        selected: current.is_empty(),
    }];
    options.extend(values.map(|(value, label)| SelectOption {
        selected: value == current,
        value,
        label,
    }));

    SelectControl {
        name,
        label: label.to_string(),
        options,
    }
}

/// Badge for the language a talk was delivered in
pub fn language_badge(talk: &Talk) -> LanguageBadge {
    let language = talk.talk_language.as_deref().unwrap_or("Unknown");
    let text = match language {
        "Spanish" => "ES",
        "English" => "EN",
        other => other,
    };

    LanguageBadge {
        class: language.to_lowercase(),
        text: text.to_string(),
        language: language.to_string(),
    }
}

fn external_links(talk: &Talk, labels: [&str; 3]) -> Vec<LinkView> {
    let [blog, video, slides] = labels;
    [
        (&talk.blog, blog, "📝"),
        (&talk.video, video, "🎥"),
        (&talk.presentation, slides, "📊"),
    ]
    .into_iter()
    .filter_map(|(href, label, icon)| {
        href.as_ref().map(|href| LinkView {
            href: href.clone(),
            label: label.to_string(),
            icon,
        })
    })
    .collect()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Card shown in the list view
pub fn card_view(talk: &Talk, lang: Lang, detail_page: &str) -> CardView {
    let id = talk.id();
    let detail_link = talk.has_detail_content(lang).then(|| LinkView {
        href: format!("{}?id={}", detail_page, urlencoding::encode(&id)),
        label: t(lang, "view_full_details").to_string(),
        icon: "📖",
    });

    CardView {
        title: talk.resolve(TalkField::Name, lang).to_string(),
        badge: language_badge(talk),
        year: talk.year.clone(),
        place: talk.place.clone(),
        type_label: talk.talk_type.as_deref().map(|ty| t(lang, ty).to_string()),
        core: talk.core,
        description: non_empty(talk.resolve(TalkField::Description, lang)),
        detail_link,
        links: external_links(talk, ["Blog", "Video", "Slides"]),
        id,
    }
}

/// Full detail view of one talk
pub fn detail_view(talk: &Talk, lang: Lang) -> DetailView {
    let section = |key: &str, field: TalkField| {
        non_empty(talk.resolve(field, lang)).map(|content| Section {
            heading: t(lang, key).to_string(),
            content,
        })
    };

    let meta = [
        ("year", &talk.year),
        ("event", &talk.place),
        ("coauthors", &talk.coauthors),
    ]
    .into_iter()
    .filter_map(|(key, value)| {
        value.as_ref().map(|value| MetaItem {
            label: t(lang, key).to_string(),
            value: value.clone(),
        })
    })
    .collect();

    let links = external_links(talk, [t(lang, "blog"), t(lang, "video"), t(lang, "slides")]);

    DetailView {
        title: talk.resolve(TalkField::Name, lang).to_string(),
        badge: language_badge(talk),
        meta,
        core_label: talk.core.then(|| t(lang, "core_talk").to_string()),
        description: section("description", TalkField::Description),
        key_learning: section("key_learning", TalkField::KeyLearning),
        key_points: section("key_points", TalkField::KeyPoints),
        links: (!links.is_empty()).then(|| LinksSection {
            heading: t(lang, "links").to_string(),
            links,
        }),
    }
}
