//! Root application state
//!
//! `AppState` is replaced wholesale on every message: `update` consumes the
//! current value and returns the next one. The talk collection is shared
//! behind an `Arc` so an update never copies it.

use super::{FilterMessage, Message, Route};
use crate::filter::{self, FilterCriteria, FilterOptions};
use crate::i18n::Lang;
use crate::talk::Talk;
use std::sync::Arc;

/// Progress of the single data fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    /// Fetch failed; the reason is kept for logging only
    Failed(String),
}

/// Root application state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Every talk, in source order. Empty until loaded.
    pub talks: Arc<Vec<Talk>>,

    /// Selector values derived from the loaded talks
    pub options: FilterOptions,

    /// Current filter selections and search text
    pub criteria: FilterCriteria,

    /// Current UI language
    pub lang: Lang,

    /// Current view
    pub route: Route,

    /// Data fetch progress
    pub load: LoadState,
}

impl AppState {
    /// Initial state for a page load in `lang`
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            ..Default::default()
        }
    }

    /// Initial state for a detail page load
    pub fn for_route(lang: Lang, route: Route) -> Self {
        Self {
            lang,
            route,
            ..Default::default()
        }
    }

    /// Apply a message, producing the next state
    pub fn update(self, message: Message) -> Self {
        match message {
            Message::TalksLoaded(talks) => {
                log::debug!("Loaded {} talks", talks.len());
                Self {
                    options: FilterOptions::from_talks(&talks),
                    talks: Arc::new(talks),
                    load: LoadState::Loaded,
                    ..self
                }
            }
            Message::LoadFailed(reason) => Self {
                talks: Arc::new(Vec::new()),
                options: FilterOptions::default(),
                load: LoadState::Failed(reason),
                ..self
            },
            Message::Filter(msg) => Self {
                criteria: apply_filter_message(self.criteria, msg),
                ..self
            },
            Message::LanguageChanged(lang) => Self { lang, ..self },
            Message::Navigate(route) => Self { route, ..self },
        }
    }

    /// Talks matching the current criteria, newest first
    pub fn visible_talks(&self) -> Vec<&Talk> {
        let mut visible = filter::filter(&self.talks, &self.criteria, self.lang);
        filter::sort_by_year(&mut visible);
        visible
    }

    /// Talk addressed by the current detail route, if it resolves
    pub fn current_talk(&self) -> Option<&Talk> {
        match &self.route {
            Route::Detail(Some(id)) => find_talk(&self.talks, id),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.load, LoadState::Failed(_))
    }
}

fn apply_filter_message(criteria: FilterCriteria, message: FilterMessage) -> FilterCriteria {
    match message {
        FilterMessage::Year(year) => FilterCriteria { year, ..criteria },
        FilterMessage::TalkLanguage(talk_language) => FilterCriteria {
            talk_language,
            ..criteria
        },
        FilterMessage::Type(talk_type) => FilterCriteria {
            talk_type,
            ..criteria
        },
        FilterMessage::CoreOnly(core_only) => FilterCriteria {
            core_only,
            ..criteria
        },
        FilterMessage::Search(search_text) => FilterCriteria {
            search_text,
            ..criteria
        },
        FilterMessage::Reset => FilterCriteria::default(),
    }
}

/// First talk whose computed identifier equals `id`.
///
/// Identifiers are assumed unique; on a collision the earliest talk in
/// source order wins.
pub fn find_talk<'a>(talks: &'a [Talk], id: &str) -> Option<&'a Talk> {
    talks.iter().find(|talk| talk.id() == id)
}
