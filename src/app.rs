//! Catalog controller
//!
//! `Catalog` is the hub of the application: it owns the state, performs the
//! single data fetch, routes messages through the reducer and renders the
//! current screen.

use crate::config::Config;
use crate::error::LoadResult;
use crate::i18n::Lang;
use crate::preferences::PreferenceStore;
use crate::render::{HtmlRenderer, RenderOptions};
use crate::source::TalkSource;
use crate::state::{AppState, Message, Route};
use crate::view::{self, Screen};
use chrono::Datelike;

/// Talks catalog application
pub struct Catalog<S: PreferenceStore> {
    /// Application state
    state: AppState,

    /// Preferred language storage
    store: S,

    /// User configuration
    pub config: Config,

    renderer: HtmlRenderer,
}

impl<S: PreferenceStore> Catalog<S> {
    /// List page in the stored preferred language
    pub fn new(store: S, config: Config) -> Self {
        let lang = store.get();
        log::debug!("Starting catalog in '{}'", lang);
        let renderer = HtmlRenderer::with_options(RenderOptions {
            include_styles: config.site.inline_styles,
            custom_css: config.site.custom_css.clone(),
        });
        Self {
            state: AppState::new(lang),
            store,
            config,
            renderer,
        }
    }

    /// Start on `route` instead of the list page
    pub fn with_route(mut self, route: Route) -> Self {
        self.dispatch(Message::Navigate(route));
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the talk collection once.
    ///
    /// On failure the catalog is left empty and shows the localized error;
    /// the error is returned so the caller can report it.
    pub async fn load<T: TalkSource>(&mut self, source: &T) -> LoadResult<()> {
        log::debug!("Loading talks from {}", source.describe());
        match source.fetch().await {
            Ok(talks) => {
                self.dispatch(Message::TalksLoaded(talks));
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load talks from {}: {}", source.describe(), e);
                self.dispatch(Message::LoadFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Apply a message to the state
    pub fn dispatch(&mut self, message: Message) {
        let state = std::mem::take(&mut self.state);
        self.state = state.update(message);
    }

    /// Switch the UI language and remember it.
    ///
    /// A failed write is logged; the switch still happens.
    pub fn set_language(&mut self, lang: Lang) {
        if let Err(e) = self.store.set(lang) {
            log::warn!("Could not save preferred language: {}", e);
        }
        log::info!("Language changed to '{}'", lang);
        self.dispatch(Message::LanguageChanged(lang));
    }

    /// Switch the UI language for this run only
    pub fn override_language(&mut self, lang: Lang) {
        self.dispatch(Message::LanguageChanged(lang));
    }

    /// Screen for the current state, footer dated today
    pub fn screen(&self) -> Screen {
        view::project(&self.state, &self.config.site, chrono::Local::now().year())
    }

    /// Complete HTML document for the current state
    pub fn render(&self) -> String {
        self.renderer.page(&self.screen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LoadError, PreferenceError, PreferenceResult};
    use crate::preferences::MemoryPreferenceStore;
    use crate::state::FilterMessage;
    use crate::talk::{parse_talks, Talk};
    use crate::view::Body;

    struct StaticSource(&'static str);

    impl TalkSource for StaticSource {
        async fn fetch(&self) -> LoadResult<Vec<Talk>> {
            Ok(parse_talks(self.0.as_bytes())?)
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    struct FailingSource;

    impl TalkSource for FailingSource {
        async fn fetch(&self) -> LoadResult<Vec<Talk>> {
            Err(LoadError::Status {
                url: "https://example.com/talks.json".to_string(),
                status: 503,
            })
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self) -> Lang {
            Lang::En
        }

        fn set(&mut self, _lang: Lang) -> PreferenceResult<()> {
            Err(PreferenceError::DirectoryError)
        }
    }

    const TALKS: &str = r#"[
        {"year": "2023", "place": "Bilbao", "type": "talk", "name_es": "Charla vieja", "name_en": "Old talk"},
        {"year": "2024", "place": "Madrid", "type": "workshop", "core": true,
         "name_es": "Taller nuevo", "name_en": "New workshop", "key_learning_es": "Aprende"}
    ]"#;

    #[tokio::test]
    async fn test_load_and_render_list() {
        let mut catalog = Catalog::new(MemoryPreferenceStore::new(), Config::default());
        catalog.load(&StaticSource(TALKS)).await.unwrap();

        let html = catalog.render();
        assert!(html.contains(r#"<html lang="es">"#));
        assert!(html.find("Taller nuevo").unwrap() < html.find("Charla vieja").unwrap());
        assert!(html.contains("talk-detail.html?id=2024-madrid"));
    }

    #[tokio::test]
    async fn test_load_failure_shows_single_error() {
        let mut catalog = Catalog::new(MemoryPreferenceStore::new(), Config::default());
        let result = catalog.load(&FailingSource).await;

        assert!(matches!(result, Err(LoadError::Status { status: 503, .. })));
        assert!(catalog.state().talks.is_empty());
        let html = catalog.render();
        assert_eq!(html.matches(r#"class="error-message""#).count(), 1);
        assert!(html.contains("Error al cargar las charlas"));
        assert!(!html.contains(r#"class="talk-card"#));
    }

    #[tokio::test]
    async fn test_language_toggle_keeps_filters() {
        let mut catalog = Catalog::new(MemoryPreferenceStore::new(), Config::default());
        catalog.load(&StaticSource(TALKS)).await.unwrap();
        catalog.dispatch(Message::Filter(FilterMessage::CoreOnly(true)));

        catalog.set_language(Lang::En);

        assert_eq!(catalog.store().stored(), Some(Lang::En));
        assert_eq!(catalog.state().lang, Lang::En);
        assert!(catalog.state().criteria.core_only);
        let html = catalog.render();
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("New workshop"));
        assert!(!html.contains("Old talk"));
    }

    #[tokio::test]
    async fn test_failed_preference_write_still_switches() {
        let mut catalog = Catalog::new(ReadOnlyStore, Config::default());
        assert_eq!(catalog.state().lang, Lang::En);

        catalog.set_language(Lang::Es);
        assert_eq!(catalog.state().lang, Lang::Es);
    }

    #[tokio::test]
    async fn test_site_styles_follow_config() {
        let mut config = Config::default();
        config.site.custom_css = Some(".talk-card { border: 0; }".to_string());
        let catalog = Catalog::new(MemoryPreferenceStore::new(), config.clone());
        assert!(catalog.render().contains(".talk-card { border: 0; }"));

        config.site.inline_styles = false;
        let catalog = Catalog::new(MemoryPreferenceStore::new(), config);
        assert!(!catalog.render().contains("<style>"));
    }

    #[tokio::test]
    async fn test_detail_route() {
        let mut catalog = Catalog::new(MemoryPreferenceStore::with(Lang::En), Config::default())
            .with_route(Route::Detail(Some("2024-madrid".to_string())));
        catalog.load(&StaticSource(TALKS)).await.unwrap();

        match catalog.screen().body {
            Body::Detail(detail) => assert_eq!(detail.title, "New workshop"),
            other => panic!("expected detail, got {:?}", other),
        }
        assert!(catalog.screen().chrome.back_link.is_some());
    }

    #[tokio::test]
    async fn test_unknown_detail_id() {
        let mut catalog = Catalog::new(MemoryPreferenceStore::new(), Config::default())
            .with_route(Route::Detail(Some("1999-nowhere".to_string())));
        catalog.load(&StaticSource(TALKS)).await.unwrap();

        assert!(matches!(catalog.screen().body, Body::Message(_)));
    }
}
