//! Migration of legacy single-language talk data
//!
//! Legacy records carry English text in untagged `name`, `description`,
//! `key_learning` and `key_points` keys and the delivery language in
//! `language`. Migrated records move that text to the `_en` variants, leave
//! the `_es` variants empty for translation and rename `language` to
//! `talk_language`.

use crate::error::MigrationError;
use serde_json::{Map, Value};
use std::path::Path;

/// Keys copied unchanged when present
const CARRIED_KEYS: &[&str] = &[
    "year",
    "date",
    "blog",
    "video",
    "presentation",
    "place",
    "coauthors",
    "last_modified",
    "core",
];

/// Keys split into `_en` and `_es` variants
const TRANSLATABLE_KEYS: &[&str] = &["name", "description", "key_learning", "key_points"];

/// Migrate one legacy record
pub fn migrate_talk(talk: &Map<String, Value>) -> Map<String, Value> {
    let mut migrated = Map::new();

    for key in CARRIED_KEYS {
        if let Some(value) = talk.get(*key) {
            migrated.insert((*key).to_string(), value.clone());
        }
    }

    if let Some(language) = talk.get("language") {
        migrated.insert("talk_language".to_string(), language.clone());
    }

    for key in TRANSLATABLE_KEYS {
        let value = talk.get(*key).cloned().unwrap_or(Value::Null);
        migrated.insert(format!("{}_en", key), value);
        migrated.insert(format!("{}_es", key), Value::Null);
    }

    migrated
}

/// Migrate a legacy document, which must be a JSON array of objects
pub fn migrate_document(document: Value) -> Result<Value, MigrationError> {
    let Value::Array(talks) = document else {
        return Err(MigrationError::Format("expected a JSON array".to_string()));
    };

    talks
        .iter()
        .enumerate()
        .map(|(index, talk)| match talk {
            Value::Object(record) => Ok(Value::Object(migrate_talk(record))),
            _ => Err(MigrationError::Format(format!(
                "entry {} is not an object",
                index
            ))),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

/// Read `input`, migrate it and write pretty JSON to `output`.
///
/// Returns the number of migrated talks.
pub fn migrate_file(input: &Path, output: &Path) -> Result<usize, MigrationError> {
    let content = std::fs::read_to_string(input).map_err(|e| MigrationError::ReadError {
        path: input.to_path_buf(),
        source: e,
    })?;

    let migrated = migrate_document(serde_json::from_str(&content)?)?;
    let count = migrated.as_array().map_or(0, Vec::len);

    let mut text = serde_json::to_string_pretty(&migrated)?;
    text.push('\n');
    std::fs::write(output, text).map_err(|e| MigrationError::WriteError {
        path: output.to_path_buf(),
        source: e,
    })?;

    log::info!(
        "Migrated {} talks from {} to {}",
        count,
        input.display(),
        output.display()
    );
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;
    use crate::talk::{parse_talks, TalkField};
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_migrate_talk() {
        let legacy = json!({
            "year": 2019,
            "place": "Madrid",
            "language": "Spanish",
            "core": true,
            "name": "Lean software",
            "key_points": ["Small steps", "Fast feedback"],
            "type": "talk"
        });
        let migrated = Value::Object(migrate_talk(legacy.as_object().unwrap()));

        assert_eq!(migrated["year"], json!(2019));
        assert_eq!(migrated["talk_language"], json!("Spanish"));
        assert!(migrated.get("language").is_none());
        assert_eq!(migrated["name_en"], json!("Lean software"));
        assert_eq!(migrated["name_es"], Value::Null);
        assert_eq!(migrated["description_en"], Value::Null);
        assert_eq!(migrated["key_points_en"], json!(["Small steps", "Fast feedback"]));
        assert!(migrated.get("name").is_none());
        assert!(migrated.get("type").is_none());
    }

    #[test]
    fn test_migrated_records_resolve_to_english() {
        let migrated = migrate_document(json!([{
            "year": "2020",
            "place": "Online",
            "name": "Remote work",
            "description": "Working apart"
        }]))
        .unwrap();
        let talks = parse_talks(migrated.to_string().as_bytes()).unwrap();

        assert_eq!(talks[0].resolve(TalkField::Name, Lang::Es), "Remote work");
        assert_eq!(talks[0].name.get(Lang::Es), None);
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(matches!(
            migrate_document(json!({"talks": []})),
            Err(MigrationError::Format(_))
        ));
        assert!(matches!(
            migrate_document(json!([1])),
            Err(MigrationError::Format(_))
        ));
    }

    #[test]
    fn test_migrate_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("talks.json");
        let output = dir.path().join("talks.migrated.json");
        std::fs::write(&input, r#"[{"name": "Uno"}, {"name": "Dos"}]"#).unwrap();

        assert_eq!(migrate_file(&input, &output).unwrap(), 2);
        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written[1]["name_en"], json!("Dos"));
    }

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let result = migrate_file(&dir.path().join("absent.json"), &dir.path().join("out.json"));
        assert!(matches!(result, Err(MigrationError::ReadError { .. })));
    }
}
