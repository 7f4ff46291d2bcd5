//! Talk records
//!
//! A talk is read-only data loaded from the catalog JSON document. The flat
//! `name_es` / `name_en` / `name` keys of the document are folded into one
//! [`BilingualText`] per logical field while deserializing, so nothing
//! downstream builds field names out of strings.

mod bilingual;

pub use bilingual::{BilingualText, TalkField};

use crate::i18n::Lang;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

/// A single talk, workshop, podcast or panel appearance.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawTalk")]
pub struct Talk {
    /// Occurrence year, normalized to its string form
    pub year: Option<String>,
    /// Venue or event name
    pub place: Option<String>,
    /// Category (`talk`, `workshop`, `podcast`, `panel`, ...)
    pub talk_type: Option<String>,
    /// Language the talk was delivered in (`Spanish`, `English`, ...)
    pub talk_language: Option<String>,
    /// Highlight entry
    pub core: bool,
    pub name: BilingualText,
    pub description: BilingualText,
    pub key_learning: BilingualText,
    /// Markdown; list-valued key points arrive here as a bullet list
    pub key_points: BilingualText,
    pub blog: Option<String>,
    pub video: Option<String>,
    pub presentation: Option<String>,
    pub coauthors: Option<String>,
}

impl Talk {
    /// The bilingual value behind a logical field.
    pub fn field(&self, field: TalkField) -> &BilingualText {
        match field {
            TalkField::Name => &self.name,
            TalkField::Description => &self.description,
            TalkField::KeyLearning => &self.key_learning,
            TalkField::KeyPoints => &self.key_points,
        }
    }

    /// Resolve a logical field in `lang`, falling back as described on
    /// [`BilingualText::resolve`].
    pub fn resolve(&self, field: TalkField, lang: Lang) -> &str {
        self.field(field).resolve(lang)
    }

    /// Computed identifier used to link the list view to the detail view.
    pub fn id(&self) -> String {
        talk_id(self.year.as_deref(), self.place.as_deref())
    }

    /// Whether the detail view has long-form content to show in `lang`.
    pub fn has_detail_content(&self, lang: Lang) -> bool {
        !self.resolve(TalkField::KeyLearning, lang).is_empty()
            || !self.resolve(TalkField::KeyPoints, lang).is_empty()
    }
}

/// `lowercase(year + "-" + place)` with every whitespace run collapsed to `-`.
pub fn talk_id(year: Option<&str>, place: Option<&str>) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));

    let raw = format!("{}-{}", year.unwrap_or(""), place.unwrap_or("")).to_lowercase();
    whitespace.replace_all(&raw, "-").into_owned()
}

/// Parse a catalog document: either a bare array of talks or an object
/// with a `talks` array.
pub fn parse_talks(bytes: &[u8]) -> Result<Vec<Talk>, serde_json::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Document {
        List(Vec<Talk>),
        Wrapped { talks: Vec<Talk> },
    }

    Ok(match serde_json::from_slice(bytes)? {
        Document::List(talks) => talks,
        Document::Wrapped { talks } => talks,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearValue {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl TextOrList {
    fn into_markdown(self) -> String {
        match self {
            TextOrList::Text(s) => s,
            TextOrList::List(items) => items
                .iter()
                .map(|item| format!("- {}", item))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn into_joined(self) -> String {
        match self {
            TextOrList::Text(s) => s,
            TextOrList::List(items) => items.join(", "),
        }
    }
}

/// Wire shape of a talk record.
#[derive(Deserialize, Default)]
#[serde(default)]
struct RawTalk {
    year: Option<YearValue>,
    place: Option<String>,
    #[serde(rename = "type")]
    talk_type: Option<String>,
    talk_language: Option<String>,
    core: Option<bool>,
    name_es: Option<String>,
    name_en: Option<String>,
    name: Option<String>,
    description_es: Option<String>,
    description_en: Option<String>,
    description: Option<String>,
    key_learning_es: Option<String>,
    key_learning_en: Option<String>,
    key_learning: Option<String>,
    key_points_es: Option<TextOrList>,
    key_points_en: Option<TextOrList>,
    key_points: Option<TextOrList>,
    blog: Option<String>,
    video: Option<String>,
    presentation: Option<String>,
    coauthors: Option<TextOrList>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl From<RawTalk> for Talk {
    fn from(raw: RawTalk) -> Self {
        let year = raw.year.map(|y| match y {
            YearValue::Text(s) => s,
            YearValue::Number(n) => n.to_string(),
        });

        Self {
            year: non_empty(year),
            place: non_empty(raw.place),
            talk_type: non_empty(raw.talk_type),
            talk_language: non_empty(raw.talk_language),
            core: raw.core.unwrap_or(false),
            name: BilingualText::new(raw.name_es, raw.name_en, raw.name),
            description: BilingualText::new(raw.description_es, raw.description_en, raw.description),
            key_learning: BilingualText::new(
                raw.key_learning_es,
                raw.key_learning_en,
                raw.key_learning,
            ),
            key_points: BilingualText::new(
                raw.key_points_es.map(TextOrList::into_markdown),
                raw.key_points_en.map(TextOrList::into_markdown),
                raw.key_points.map(TextOrList::into_markdown),
            ),
            blog: non_empty(raw.blog),
            video: non_empty(raw.video),
            presentation: non_empty(raw.presentation),
            coauthors: non_empty(raw.coauthors.map(TextOrList::into_joined)),
        }
    }
}
