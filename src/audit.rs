//! Translation completeness audit
//!
//! Reports which talks still lack Spanish text. A Spanish title is always
//! expected; the long-form Spanish fields are only expected when the English
//! counterpart exists.

use crate::i18n::Lang;
use crate::talk::{Talk, TalkField};
use std::collections::BTreeMap;
use std::fmt;

/// Technical vocabulary that is expected to stay in English
pub const TECHNICAL_TERMS: &[&str] = &[
    "TDD",
    "DevOps",
    "MVP",
    "continuous delivery",
    "pipeline",
    "deploy",
    "API",
    "frontend",
    "backend",
    "test",
    "refactoring",
    "pull request",
    "commit",
    "SOLID",
    "clean code",
    "sprint",
    "backlog",
    "feature flag",
    "microservices",
];

const MISSING_LISTED: usize = 5;
const TOP_TERMS: usize = 10;

/// A talk with at least one expected Spanish field missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslation {
    pub id: String,
    pub name: String,
    pub fields: Vec<TalkField>,
}

/// Fully translated talks out of a group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Completeness {
    pub total: usize,
    pub translated: usize,
}

impl Completeness {
    fn record(&mut self, translated: bool) {
        self.total += 1;
        if translated {
            self.translated += 1;
        }
    }

    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * self.translated as f64 / self.total as f64
        }
    }
}

impl fmt::Display for Completeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({:.1}%)", self.translated, self.total, self.percent())
    }
}

/// Result of auditing a talk collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationReport {
    pub total: usize,
    /// Talks carrying Spanish text, per field
    pub with_spanish: BTreeMap<&'static str, usize>,
    pub missing: Vec<MissingTranslation>,
    /// Number of Spanish text blocks scanned for technical terms
    pub fields_checked: usize,
    pub terms: BTreeMap<&'static str, usize>,
    pub core: Completeness,
    pub non_core: Completeness,
    pub by_year: BTreeMap<String, Completeness>,
}

impl TranslationReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Terms by descending count, ties in list order
    pub fn top_terms(&self) -> Vec<(&'static str, usize)> {
        let mut terms: Vec<_> = TECHNICAL_TERMS
            .iter()
            .filter_map(|term| self.terms.get(term).map(|count| (*term, *count)))
            .collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1));
        terms
    }
}

/// Spanish fields `talk` is expected to carry but does not
pub fn missing_fields(talk: &Talk) -> Vec<TalkField> {
    TalkField::all()
        .iter()
        .copied()
        .filter(|field| {
            let text = talk.field(*field);
            let expected = *field == TalkField::Name || text.get(Lang::En).is_some();
            expected && text.get(Lang::Es).is_none()
        })
        .collect()
}

/// Audit every talk in `talks`
pub fn audit(talks: &[Talk]) -> TranslationReport {
    let mut report = TranslationReport {
        total: talks.len(),
        ..Default::default()
    };

    for talk in talks {
        for field in TalkField::all() {
            let text = talk.field(*field);
            let expected = *field == TalkField::Name || text.get(Lang::En).is_some();
            if expected && text.get(Lang::Es).is_some() {
                *report.with_spanish.entry(field.key()).or_default() += 1;
            }
        }

        let missing = missing_fields(talk);
        let translated = missing.is_empty();
        if !translated {
            report.missing.push(MissingTranslation {
                id: talk.id(),
                name: talk.name.get(Lang::En).unwrap_or("N/A").to_string(),
                fields: missing,
            });
        }

        if talk.core {
            report.core.record(translated);
        } else {
            report.non_core.record(translated);
        }
        let year = talk.year.clone().unwrap_or_else(|| "unknown".to_string());
        report.by_year.entry(year).or_default().record(translated);

        for field in [TalkField::Description, TalkField::KeyLearning, TalkField::KeyPoints] {
            if let Some(text) = talk.field(field).get(Lang::Es) {
                report.fields_checked += 1;
                count_terms(text, &mut report.terms);
            }
        }
    }

    log::debug!(
        "Audited {} talks, {} with missing translations",
        report.total,
        report.missing.len()
    );
    report
}

fn count_terms(text: &str, counts: &mut BTreeMap<&'static str, usize>) {
    let text = text.to_lowercase();
    for term in TECHNICAL_TERMS {
        if text.contains(&term.to_lowercase()) {
            *counts.entry(*term).or_default() += 1;
        }
    }
}

impl fmt::Display for TranslationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(70);
        let thin = "-".repeat(70);
        let count = |field: TalkField| self.with_spanish.get(field.key()).copied().unwrap_or(0);

        writeln!(f, "{}", rule)?;
        writeln!(f, "TRANSLATION QUALITY REPORT")?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;

        writeln!(f, "1. REQUIRED FIELDS")?;
        writeln!(f, "{}", thin)?;
        writeln!(f, "Total talks: {}", self.total)?;
        writeln!(f, "With name_es: {}/{}", count(TalkField::Name), self.total)?;
        for field in [TalkField::Description, TalkField::KeyLearning, TalkField::KeyPoints] {
            writeln!(
                f,
                "With {key}_es: {} (where {key}_en exists)",
                count(field),
                key = field.key()
            )?;
        }
        writeln!(f)?;
        if self.is_complete() {
            writeln!(f, "All required translations are complete")?;
        } else {
            writeln!(f, "Missing translations: {}", self.missing.len())?;
            for item in self.missing.iter().take(MISSING_LISTED) {
                let fields: Vec<String> = item
                    .fields
                    .iter()
                    .map(|field| format!("{}_es", field.key()))
                    .collect();
                writeln!(f, "  - {}: {} - missing {}", item.id, item.name, fields.join(", "))?;
            }
        }
        writeln!(f)?;

        writeln!(f, "2. TECHNICAL TERMS")?;
        writeln!(f, "{}", thin)?;
        writeln!(f, "Fields checked: {}", self.fields_checked)?;
        for (term, count) in self.top_terms().into_iter().take(TOP_TERMS) {
            writeln!(f, "  - {}: {} occurrences", term, count)?;
        }
        writeln!(f)?;

        writeln!(f, "3. COMPLETENESS BY CATEGORY")?;
        writeln!(f, "{}", thin)?;
        writeln!(f, "Core talks: {}", self.core)?;
        writeln!(f, "Non-core talks: {}", self.non_core)?;
        writeln!(f, "By year:")?;
        for (year, stats) in self.by_year.iter().rev() {
            writeln!(f, "  {}: {}", year, stats)?;
        }
        writeln!(f, "{}", rule)
    }
}
