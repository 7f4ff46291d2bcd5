use talks_catalog::config::Config;
use talks_catalog::preferences::{JsonPreferenceStore, PreferenceStore};
use talks_catalog::source::FileSource;
use talks_catalog::state::{FilterMessage, Message, Route};
use talks_catalog::{Catalog, Lang};
use tempfile::TempDir;

const TALKS: &str = r#"{
    "talks": [
        {
            "year": 2022,
            "place": "Codemotion Madrid",
            "type": "talk",
            "talk_language": "Spanish",
            "name_es": "Equipos de producto",
            "name_en": "Product teams",
            "description_es": "Cómo <b>organizar</b> equipos"
        },
        {
            "year": "2024",
            "place": "Pamplona Software Crafters",
            "type": "workshop",
            "talk_language": "English",
            "core": true,
            "name_es": "Desarrollo incremental",
            "name_en": "Incremental development",
            "key_learning_en": "Small **safe** steps",
            "key_points_en": ["Vertical slicing", "Continuous deployment"],
            "video": "https://video.example/watch?v=1&t=2"
        }
    ]
}"#;

fn fixture() -> (TempDir, FileSource, JsonPreferenceStore) {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("talks.json");
    std::fs::write(&data, TALKS).unwrap();
    let store = JsonPreferenceStore::new(dir.path().join("prefs").join("preferences.json"));
    (dir, FileSource::new(data), store)
}

#[tokio::test]
async fn test_list_page_end_to_end() {
    let (_dir, source, store) = fixture();
    let mut catalog = Catalog::new(store, Config::default());
    catalog.load(&source).await.unwrap();

    let html = catalog.render();
    assert!(html.contains("2 (1 Charla, 1 Taller)"));
    assert!(html.find("Desarrollo incremental").unwrap() < html.find("Equipos de producto").unwrap());
    assert!(html.contains("Cómo &lt;b&gt;organizar&lt;/b&gt; equipos"));
    assert!(html.contains("https://video.example/watch?v=1&amp;t=2"));
    assert!(html.contains("talk-detail.html?id=2024-pamplona-software-crafters"));

    catalog.dispatch(Message::Filter(FilterMessage::Search("CODEMOTION".to_string())));
    let html = catalog.render();
    assert!(html.contains(r#"id="results-count" class="results-count">1 Charla</p>"#));
}

#[tokio::test]
async fn test_language_preference_survives_restart() {
    let (dir, source, store) = fixture();
    let mut catalog = Catalog::new(store, Config::default());
    catalog.load(&source).await.unwrap();
    catalog.set_language(Lang::En);
    assert!(catalog.render().contains("Incremental development"));

    let reopened = JsonPreferenceStore::new(dir.path().join("prefs").join("preferences.json"));
    assert_eq!(reopened.get(), Lang::En);
    let catalog = Catalog::new(reopened, Config::default());
    assert_eq!(catalog.state().lang, Lang::En);
}

#[tokio::test]
async fn test_detail_page_end_to_end() {
    let (_dir, source, store) = fixture();
    let mut catalog = Catalog::new(store, Config::default())
        .with_route(Route::Detail(Some("2024-pamplona-software-crafters".to_string())));
    catalog.load(&source).await.unwrap();

    let html = catalog.render();
    assert!(html.contains("Desarrollo incremental"));
    assert!(html.contains("<strong>safe</strong>"));
    assert!(html.contains("<li>Vertical slicing</li>"));
    assert!(html.contains(r#"href="index.html""#));
}

#[tokio::test]
async fn test_missing_data_file() {
    let dir = TempDir::new().unwrap();
    let store = JsonPreferenceStore::new(dir.path().join("preferences.json"));
    let mut catalog = Catalog::new(store, Config::default());

    let result = catalog.load(&FileSource::new(dir.path().join("absent.json"))).await;
    assert!(result.is_err());
    assert!(catalog.render().contains("Error al cargar las charlas"));
}
