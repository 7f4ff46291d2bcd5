//! Result count summary shown above the cards

use crate::i18n::{t, Lang};
use crate::talk::Talk;
use std::collections::BTreeMap;

/// Category used for talks without a type.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Per-type counts of a filtered set, ordered by type key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSummary {
    pub total: usize,
    pub groups: Vec<(String, usize)>,
}

impl ResultSummary {
    pub fn from_talks<'a, I>(talks: I) -> Self
    where
        I: IntoIterator<Item = &'a Talk>,
    {
        // Byte-wise key order: uppercase types sort before lowercase ones,
        // unlike a locale-aware collation.
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut total = 0;
        for talk in talks {
            let key = talk.talk_type.as_deref().unwrap_or(UNKNOWN_TYPE);
            *counts.entry(key.to_string()).or_insert(0) += 1;
            total += 1;
        }

        Self {
            total,
            groups: counts.into_iter().collect(),
        }
    }

    /// `"3 Charla"`, `"3 talks"`, or `"5 (1 Panel, 4 Talks)"` style text.
    pub fn render(&self, lang: Lang) -> String {
        match self.groups.as_slice() {
            [] => "0".to_string(),
            [(talk_type, count)] => group_label(talk_type, *count, lang),
            groups => {
                let labels = groups
                    .iter()
                    .map(|(talk_type, count)| group_label(talk_type, *count, lang))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} ({})", self.total, labels)
            }
        }
    }
}

fn group_label(talk_type: &str, count: usize, lang: Lang) -> String {
    format!("{} {}{}", count, t(lang, talk_type), plural_suffix(count, lang))
}

/// Only English marks plurals, and only with a trailing `s`.
fn plural_suffix(count: usize, lang: Lang) -> &'static str {
    if lang == Lang::En && count != 1 {
        "s"
    } else {
        ""
    }
}
