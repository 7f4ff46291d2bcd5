//! Application message types
//!
//! Every change to [`AppState`](super::AppState) is expressed as one of
//! these messages and applied by `AppState::update`.

use crate::i18n::Lang;
use crate::talk::Talk;

/// Main application message enum
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The talk collection was fetched
    TalksLoaded(Vec<Talk>),

    /// The talk collection could not be fetched
    LoadFailed(String),

    /// A filter or search input changed
    Filter(FilterMessage),

    /// The visitor switched the UI language
    LanguageChanged(Lang),

    /// Switch between the list view and a detail view
    Navigate(Route),
}

/// Filter and search input messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMessage {
    /// Year selector; `None` selects all years
    Year(Option<String>),

    /// Delivery language selector; `None` selects all languages
    TalkLanguage(Option<String>),

    /// Type selector; `None` selects all types
    Type(Option<String>),

    /// Core-only checkbox
    CoreOnly(bool),

    /// Search box contents
    Search(String),

    /// Clear every selection
    Reset,
}

/// Which view is on screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,

    /// Detail view for the identifier taken from navigation, if any
    Detail(Option<String>),
}
