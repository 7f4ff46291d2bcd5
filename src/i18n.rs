//! Internationalization (i18n) for the catalog interface
//!
//! Two UI languages are supported, Spanish (the default) and English. All
//! interface labels live in a static table per language; a key missing
//! from the table is returned verbatim, so unknown talk types such as
//! `unknown` render as themselves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UI language. Distinct from the language a talk was delivered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl Lang {
    /// ISO 639-1 code, also used as the bilingual field suffix.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    /// Parse a language code. Case-sensitive.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "es" => Some(Lang::Es),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// The complementary supported language.
    pub fn other(&self) -> Lang {
        match self {
            Lang::Es => Lang::En,
            Lang::En => Lang::Es,
        }
    }

    /// All supported languages, in switcher order.
    pub fn all() -> &'static [Lang] {
        &[Lang::Es, Lang::En]
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| format!("unsupported language '{}' (expected es or en)", s))
    }
}

const ES: &[(&str, &str)] = &[
    // List view
    ("title", "Charlas"),
    ("subtitle", "Una colección de charlas y presentaciones de"),
    ("search_placeholder", "Buscar charlas..."),
    ("search_label", "Buscar charlas"),
    ("all_years", "Todos los años"),
    ("filter_by_year", "Filtrar por año"),
    ("all_languages", "Todos los idiomas"),
    ("filter_by_language", "Filtrar por idioma"),
    ("all_types", "Todos los tipos"),
    ("filter_by_type", "Filtrar por tipo"),
    ("spanish", "Español"),
    ("english", "Inglés"),
    ("talk", "Charla"),
    ("workshop", "Taller"),
    ("podcast", "Podcast"),
    ("panel", "Panel"),
    ("core_only", "Solo charlas core"),
    ("talks_count", "charlas"),
    ("loading", "Cargando charlas..."),
    ("no_results", "No se encontraron charlas que coincidan con tus filtros."),
    ("error_loading", "Error al cargar las charlas. Por favor, recarga la página."),
    ("view_full_details", "Ver detalles completos"),
    // Detail view
    ("back_to_talks", "← Volver a todas las charlas"),
    ("description", "Descripción"),
    ("key_learning", "🎯 Aprendizaje Clave"),
    ("key_points", "📋 Puntos Clave"),
    ("links", "Enlaces"),
    ("blog", "Blog"),
    ("video", "Video"),
    ("slides", "Presentación"),
    ("loading_error", "Error al cargar los detalles de la charla."),
    ("not_found", "Charla no encontrada."),
    ("metadata", "Información"),
    ("year", "Año"),
    ("event", "Evento"),
    ("coauthors", "Coautores"),
    ("core_talk", "Charla Core"),
];

const EN: &[(&str, &str)] = &[
    // List view
    ("title", "Talks"),
    ("subtitle", "A collection of talks and presentations by"),
    ("search_placeholder", "Search talks..."),
    ("search_label", "Search talks"),
    ("all_years", "All Years"),
    ("filter_by_year", "Filter by year"),
    ("all_languages", "All Languages"),
    ("filter_by_language", "Filter by language"),
    ("all_types", "All Types"),
    ("filter_by_type", "Filter by type"),
    ("spanish", "Spanish"),
    ("english", "English"),
    ("talk", "Talk"),
    ("workshop", "Workshop"),
    ("podcast", "Podcast"),
    ("panel", "Panel"),
    ("core_only", "Core talks only"),
    ("talks_count", "talks"),
    ("loading", "Loading talks..."),
    ("no_results", "No talks found matching your filters."),
    ("error_loading", "Error loading talks. Please refresh the page."),
    ("view_full_details", "View full details"),
    // Detail view
    ("back_to_talks", "← Back to all talks"),
    ("description", "Description"),
    ("key_learning", "🎯 Key Learning"),
    ("key_points", "📋 Key Points"),
    ("links", "Links"),
    ("blog", "Blog"),
    ("video", "Video"),
    ("slides", "Slides"),
    ("loading_error", "Error loading talk details."),
    ("not_found", "Talk not found."),
    ("metadata", "Information"),
    ("year", "Year"),
    ("event", "Event"),
    ("coauthors", "Co-authors"),
    ("core_talk", "Core Talk"),
];

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::Es => ES,
        Lang::En => EN,
    }
}

/// Translate `key` into `lang`, returning the key itself when it has no entry.
pub fn t(lang: Lang, key: &str) -> &str {
    catalog_for(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}
