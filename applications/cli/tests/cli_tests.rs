//! Command tests against a mock catalog and a temporary data directory

use cadence_catalog::{CatalogClient, CatalogConfig};
use cadence_cli::commands::{chart, play, playlist, search};
use cadence_cli::AppConfig;
use cadence_core::{CuratedCollection, KeyValueStore};
use cadence_playback::PlaybackConfig;
use cadence_storage::{FileStore, PlaylistLibrary};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn song(id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Song {}", id),
        "primaryArtists": "Test Artist",
        "duration": 200,
        "downloadUrl": [
            {"quality": "320kbps", "url": format!("https://audio/{}.mp4", id)}
        ]
    })
}

fn results(songs: Vec<Value>) -> Value {
    json!({"success": true, "data": {"results": songs}})
}

async fn mount_songs(server: &MockServer, query: &str, songs: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/search/songs"))
        .and(query_param("query", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(results(songs)))
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(CatalogConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Configuration
// =============================================================================

mod configuration {
    use super::*;

    #[test]
    fn test_file_and_environment_layers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cadence.toml");
        std::fs::write(
            &path,
            r#"
[catalog]
base_url = "http://localhost:9000/api"

[playback]
volume = 70

[storage]
data_dir = "/tmp/cadence-test"
"#,
        )
        .unwrap();
        std::env::set_var("CADENCECLITEST_PLAYBACK__HISTORY_SIZE", "10");

        let config = AppConfig::load_with_prefix(Some(&path), "CADENCECLITEST").unwrap();

        assert_eq!(config.catalog.base_url, "http://localhost:9000/api");
        assert_eq!(config.catalog.playlist_fetch_limit, 100);
        assert_eq!(config.playback.volume, 70);
        assert_eq!(config.playback.history_size, 10);
        assert_eq!(config.playback.search_limit, 250);
        assert_eq!(
            config.storage.data_dir,
            std::path::PathBuf::from("/tmp/cadence-test")
        );
    }

    #[test]
    fn test_invalid_volume_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loud.toml");
        std::fs::write(&path, "[playback]\nvolume = 120\n").unwrap();

        assert!(AppConfig::load_with_prefix(Some(&path), "CADENCECLILOUD").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(AppConfig::load_with_prefix(Some(&path), "CADENCECLIABSENT").is_err());
    }
}

// =============================================================================
// Search and charts
// =============================================================================

mod browsing {
    use super::*;

    #[tokio::test]
    async fn test_search_returns_playable_songs() {
        let server = MockServer::start().await;
        mount_songs(&server, "tum hi ho", vec![song("a"), json!({"id": "b", "name": "x"})]).await;
        let client = client_for(&server);

        let found = search::run(&client, " tum hi ho ", 25).await.unwrap();

        assert_eq!(found.tracks.len(), 1);
        assert_eq!(found.tracks[0].id, "a");
    }

    #[tokio::test]
    async fn test_blank_search_is_error() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        assert!(search::run(&client, "  ", 25).await.is_err());
    }

    #[tokio::test]
    async fn test_failed_chart_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let client = client_for(&server);

        assert!(chart::run(&client, CuratedCollection::Trending).await.is_err());
    }
}

// =============================================================================
// Playlists
// =============================================================================

mod playlists {
    use super::*;

    #[tokio::test]
    async fn test_import_saves_playable_songs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlists"))
            .and(query_param("id", "pl7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "id": "pl7",
                    "name": "Weekend",
                    "songs": [song("a"), {"id": "b", "name": "no audio"}, song("c")]
                }
            })))
            .mount(&server)
            .await;
        let client = client_for(&server);
        let dir = tempfile::tempdir().unwrap();
        let mut library = PlaylistLibrary::open(Box::new(FileStore::open(dir.path()).unwrap()));

        let name = playlist::import(&client, &mut library, "pl7", None)
            .await
            .unwrap();

        assert_eq!(name, "Weekend");
        let reopened = PlaylistLibrary::open(Box::new(FileStore::open(dir.path()).unwrap()));
        let ids: Vec<&str> = reopened
            .get("Weekend")
            .unwrap()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_import_under_custom_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"id": "pl8", "name": "Remote", "songs": [song("a")]}
            })))
            .mount(&server)
            .await;
        let client = client_for(&server);
        let dir = tempfile::tempdir().unwrap();
        let mut library = PlaylistLibrary::open(Box::new(FileStore::open(dir.path()).unwrap()));

        playlist::import(&client, &mut library, "pl8", Some("Mine"))
            .await
            .unwrap();

        assert!(library.contains("Mine"));
        assert!(!library.contains("Remote"));
    }

    #[tokio::test]
    async fn test_import_of_missing_playlist_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playlists"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": false, "data": null})),
            )
            .mount(&server)
            .await;
        let client = client_for(&server);
        let dir = tempfile::tempdir().unwrap();
        let mut library = PlaylistLibrary::open(Box::new(FileStore::open(dir.path()).unwrap()));

        assert!(playlist::import(&client, &mut library, "gone", None)
            .await
            .is_err());
        assert!(library.is_empty());
    }

    #[test]
    fn test_show_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = PlaylistLibrary::open(Box::new(FileStore::open(dir.path()).unwrap()));

        assert!(playlist::show(&library, "Nope").is_err());
        assert!(!playlist::delete(&mut library, "Nope").unwrap());
    }
}

// =============================================================================
// Play sessions
// =============================================================================

mod play_session {
    use super::*;

    fn options(query: &str, tracks: usize) -> play::PlayOptions {
        play::PlayOptions {
            query: query.to_string(),
            tracks,
            shuffle: false,
        }
    }

    #[tokio::test]
    async fn test_plays_through_results_in_order() {
        let server = MockServer::start().await;
        mount_songs(&server, "lofi", vec![song("a"), song("b"), song("c")]).await;
        let dir = tempfile::tempdir().unwrap();
        let store: Box<dyn KeyValueStore> = Box::new(FileStore::open(dir.path()).unwrap());

        let played = play::run(
            PlaybackConfig::default(),
            Arc::new(client_for(&server)),
            store,
            &options("lofi", 2),
        )
        .await
        .unwrap();

        assert_eq!(played, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_stops_when_results_run_out() {
        let server = MockServer::start().await;
        mount_songs(&server, "short", vec![song("a"), song("b")]).await;
        let dir = tempfile::tempdir().unwrap();
        let store: Box<dyn KeyValueStore> = Box::new(FileStore::open(dir.path()).unwrap());

        let played = play::run(
            PlaybackConfig::default(),
            Arc::new(client_for(&server)),
            store,
            &options("short", 5),
        )
        .await
        .unwrap();

        assert_eq!(played, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_no_results_is_error() {
        let server = MockServer::start().await;
        mount_songs(&server, "nothing", Vec::new()).await;
        let dir = tempfile::tempdir().unwrap();
        let store: Box<dyn KeyValueStore> = Box::new(FileStore::open(dir.path()).unwrap());

        let result = play::run(
            PlaybackConfig::default(),
            Arc::new(client_for(&server)),
            store,
            &options("nothing", 1),
        )
        .await;

        assert!(result.is_err());
    }
}
