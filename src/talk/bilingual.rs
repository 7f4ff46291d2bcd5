//! Bilingual text fields and their resolution rule

use crate::i18n::Lang;
use serde::{Deserialize, Serialize};

/// The logical long-form fields a talk carries in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TalkField {
    Name,
    Description,
    KeyLearning,
    KeyPoints,
}

impl TalkField {
    /// JSON key prefix (`name` for `name_es`, `name_en`, `name`).
    pub fn key(&self) -> &'static str {
        match self {
            TalkField::Name => "name",
            TalkField::Description => "description",
            TalkField::KeyLearning => "key_learning",
            TalkField::KeyPoints => "key_points",
        }
    }

    pub fn all() -> &'static [TalkField] {
        &[
            TalkField::Name,
            TalkField::Description,
            TalkField::KeyLearning,
            TalkField::KeyPoints,
        ]
    }
}

/// One logical field in its Spanish, English and untagged variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualText {
    pub es: Option<String>,
    pub en: Option<String>,
    pub base: Option<String>,
}

impl BilingualText {
    pub fn new(es: Option<String>, en: Option<String>, base: Option<String>) -> Self {
        Self { es, en, base }
    }

    /// The variant tagged with `lang`, if present and non-empty.
    pub fn get(&self, lang: Lang) -> Option<&str> {
        let value = match lang {
            Lang::Es => self.es.as_deref(),
            Lang::En => self.en.as_deref(),
        };
        value.filter(|s| !s.is_empty())
    }

    /// Requested language, then the other language, then the untagged
    /// value, then the empty string.
    pub fn resolve(&self, lang: Lang) -> &str {
        self.get(lang)
            .or_else(|| self.get(lang.other()))
            .or_else(|| self.base.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("")
    }

    /// True when no variant carries text.
    pub fn is_empty(&self) -> bool {
        self.resolve(Lang::Es).is_empty()
    }
}
