//! Filtering, search and ordering of the talk collection
//!
//! Every function here is pure: it borrows the immutable collection and
//! returns a freshly built view. The catalog holds tens to low hundreds of
//! talks, so the search corpus is rebuilt per call with no index.

use crate::i18n::Lang;
use crate::talk::{Talk, TalkField};
use std::cmp::Reverse;

/// Current filter selections. `None` or an empty string means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub year: Option<String>,
    pub talk_language: Option<String>,
    pub talk_type: Option<String>,
    pub core_only: bool,
    pub search_text: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no criterion restricts the collection.
    pub fn is_empty(&self) -> bool {
        active(&self.year).is_none()
            && active(&self.talk_language).is_none()
            && active(&self.talk_type).is_none()
            && !self.core_only
            && self.search_text.trim().is_empty()
    }

    /// Whether `talk` satisfies every active criterion.
    pub fn matches(&self, talk: &Talk, lang: Lang) -> bool {
        if !exact(&self.year, &talk.year) {
            return false;
        }
        if !exact(&self.talk_language, &talk.talk_language) {
            return false;
        }
        if !exact(&self.talk_type, &talk.talk_type) {
            return false;
        }
        if self.core_only && !talk.core {
            return false;
        }

        let query = self.search_text.trim().to_lowercase();
        query.is_empty() || search_corpus(talk, lang).contains(&query)
    }
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|s| !s.is_empty())
}

fn exact(criterion: &Option<String>, value: &Option<String>) -> bool {
    match active(criterion) {
        Some(wanted) => value.as_deref() == Some(wanted),
        None => true,
    }
}

/// Lower-cased searchable text of a talk in `lang`: resolved name,
/// resolved description, raw place and resolved key learning, skipping
/// empty parts, joined by a space.
pub fn search_corpus(talk: &Talk, lang: Lang) -> String {
    [
        talk.resolve(TalkField::Name, lang),
        talk.resolve(TalkField::Description, lang),
        talk.place.as_deref().unwrap_or(""),
        talk.resolve(TalkField::KeyLearning, lang),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

/// Talks matching `criteria`, in input order.
pub fn filter<'a>(talks: &'a [Talk], criteria: &FilterCriteria, lang: Lang) -> Vec<&'a Talk> {
    let matched: Vec<&Talk> = talks
        .iter()
        .filter(|talk| criteria.matches(talk, lang))
        .collect();

    log::debug!("Filter kept {} of {} talks", matched.len(), talks.len());
    matched
}

/// Stable sort by numeric year, descending. Missing or non-numeric years
/// count as 0.
pub fn sort_by_year(talks: &mut [&Talk]) {
    talks.sort_by_key(|talk| Reverse(numeric_year(talk.year.as_deref())));
}

/// Integer prefix of a year string: optional surrounding whitespace,
/// optional sign, then ASCII digits. No digits yields 0; an oversized
/// digit run saturates.
pub fn numeric_year(year: Option<&str>) -> i64 {
    let Some(year) = year else {
        return 0;
    };
    let trimmed = year.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }

    // Digit runs past i64 saturate instead of collapsing to 0
    digits.parse::<i64>().map_or(sign * i64::MAX, |n| sign * n)
}

/// Selectable values observed in the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Distinct years, newest first
    pub years: Vec<String>,
    /// Distinct types, ascending
    pub types: Vec<String>,
}

impl FilterOptions {
    /// Delivery-language values the language selector offers.
    pub const TALK_LANGUAGES: [&'static str; 2] = ["Spanish", "English"];

    pub fn from_talks(talks: &[Talk]) -> Self {
        let mut years: Vec<String> = Vec::new();
        let mut types: Vec<String> = Vec::new();

        for talk in talks {
            if let Some(year) = &talk.year {
                if !years.contains(year) {
                    years.push(year.clone());
                }
            }
            if let Some(talk_type) = &talk.talk_type {
                if !types.contains(talk_type) {
                    types.push(talk_type.clone());
                }
            }
        }

        years.sort_by_key(|year| Reverse(numeric_year(Some(year))));
        types.sort();

        Self { years, types }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn talks(value: serde_json::Value) -> Vec<Talk> {
        serde_json::from_value(value).unwrap()
    }

    fn years(result: &[&Talk]) -> Vec<String> {
        result
            .iter()
            .map(|t| t.year.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_empty_criteria_keeps_everything_in_order() {
        let all = talks(json!([
            {"year": "2022", "place": "A"},
            {"year": "2024", "place": "B"},
            {"place": "C"}
        ]));
        let result = filter(&all, &FilterCriteria::new(), Lang::Es);
        let places: Vec<_> = result.iter().map(|t| t.place.as_deref().unwrap()).collect();
        assert_eq!(places, vec!["A", "B", "C"]);
        assert!(FilterCriteria::new().is_empty());
    }

    #[test]
    fn test_filter_by_year() {
        let all = talks(json!([
            {"year": "2024", "name_es": "Talk 2024"},
            {"year": "2023", "name_es": "Talk 2023"},
            {"year": "2024", "name_es": "Another 2024"}
        ]));
        let criteria = FilterCriteria {
            year: Some("2024".to_string()),
            ..Default::default()
        };
        let result = filter(&all, &criteria, Lang::Es);
        assert_eq!(years(&result), vec!["2024", "2024"]);

        let any = FilterCriteria {
            year: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter(&all, &any, Lang::Es).len(), 3);
    }

    #[test]
    fn test_filter_by_talk_language_and_type() {
        let all = talks(json!([
            {"talk_language": "Spanish", "type": "talk"},
            {"talk_language": "English", "type": "talk"},
            {"talk_language": "Spanish", "type": "podcast"}
        ]));
        let criteria = FilterCriteria {
            talk_language: Some("Spanish".to_string()),
            talk_type: Some("talk".to_string()),
            ..Default::default()
        };
        let result = filter(&all, &criteria, Lang::En);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].talk_language.as_deref(), Some("Spanish"));
        assert_eq!(result[0].talk_type.as_deref(), Some("talk"));
    }

    #[test]
    fn test_core_only_excludes_falsy_and_missing() {
        let all = talks(json!([{"core": true}, {"core": false}, {}]));
        let criteria = FilterCriteria {
            core_only: true,
            ..Default::default()
        };
        let result = filter(&all, &criteria, Lang::Es);
        assert_eq!(result.len(), 1);
        assert!(result[0].core);
    }

    #[test]
    fn test_search_matches_place_case_insensitively() {
        let all = talks(json!([
            {"name_es": "Entrega continua", "place": "TDD Conference"},
            {"name_es": "Otra", "place": "Madrid"}
        ]));
        let criteria = FilterCriteria {
            search_text: "TDD".to_string(),
            ..Default::default()
        };
        let result = filter(&all, &criteria, Lang::Es);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].place.as_deref(), Some("TDD Conference"));
    }

    #[test]
    fn test_search_uses_resolved_language() {
        let all = talks(json!([
            {"name_es": "Pruebas", "name_en": "Testing"}
        ]));
        let criteria = FilterCriteria {
            search_text: "  testing ".to_string(),
            ..Default::default()
        };
        assert!(filter(&all, &criteria, Lang::Es).is_empty());
        assert_eq!(filter(&all, &criteria, Lang::En).len(), 1);
    }

    #[test]
    fn test_search_corpus_skips_empty_parts() {
        let all = talks(json!([{"name_en": "Lean", "place": "Bilbao"}]));
        assert_eq!(search_corpus(&all[0], Lang::En), "lean bilbao");
    }

    #[test]
    fn test_filter_is_repeatable() {
        let all = talks(json!([
            {"year": "2022", "type": "talk"},
            {"year": "2024", "type": "talk"},
            {"year": "2023", "type": "panel"}
        ]));
        let criteria = FilterCriteria {
            talk_type: Some("talk".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filter(&all, &criteria, Lang::Es),
            filter(&all, &criteria, Lang::Es)
        );
    }

    #[test]
    fn test_sort_descending_by_year() {
        let all = talks(json!([{"year": "2022"}, {"year": "2024"}, {"year": "2023"}]));
        let mut result = filter(&all, &FilterCriteria::new(), Lang::Es);
        assert_eq!(years(&result), vec!["2022", "2024", "2023"]);
        sort_by_year(&mut result);
        assert_eq!(years(&result), vec!["2024", "2023", "2022"]);
    }

    #[test]
    fn test_sort_invalid_and_missing_years_last_and_stable() {
        let all = talks(json!([
            {"year": "invalid", "place": "first"},
            {"year": "2024"},
            {"place": "second"},
            {"year": null, "place": "third"}
        ]));
        let mut result: Vec<&Talk> = all.iter().collect();
        sort_by_year(&mut result);
        assert_eq!(result[0].year.as_deref(), Some("2024"));
        let rest: Vec<_> = result[1..].iter().map(|t| t.place.as_deref().unwrap()).collect();
        assert_eq!(rest, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_numeric_year_prefix() {
        assert_eq!(numeric_year(Some("2024")), 2024);
        assert_eq!(numeric_year(Some(" 2021-05")), 2021);
        assert_eq!(numeric_year(Some("invalid")), 0);
        assert_eq!(numeric_year(Some("")), 0);
        assert_eq!(numeric_year(Some("-")), 0);
        assert_eq!(numeric_year(None), 0);
    }

    #[test]
    fn test_oversized_year_sorts_first() {
        assert_eq!(numeric_year(Some("99999999999999999999")), i64::MAX);
        assert_eq!(numeric_year(Some("-99999999999999999999")), -i64::MAX);

        let all = talks(json!([{"year": "2024"}, {"year": "99999999999999999999"}]));
        let mut result: Vec<&Talk> = all.iter().collect();
        sort_by_year(&mut result);
        assert_eq!(years(&result), vec!["99999999999999999999", "2024"]);
    }

    #[test]
    fn test_filter_options() {
        let all = talks(json!([
            {"year": "2022", "type": "workshop"},
            {"year": "2024", "type": "talk"},
            {"year": "2022", "type": "talk"},
            {"type": "podcast"}
        ]));
        let options = FilterOptions::from_talks(&all);
        assert_eq!(options.years, vec!["2024", "2022"]);
        assert_eq!(options.types, vec!["podcast", "talk", "workshop"]);
    }
}
