use album_cli::{connect, run, Report};
use album_config::{AppConfig, ConfigError, OutputFormat, QueryConfig};
use album_core::{Album, AlbumId, AlbumStore, MemoryStore, NewAlbum, StoreError, StoreResult};

fn catalog() -> MemoryStore {
    MemoryStore::with_albums(vec![
        NewAlbum::new("Blue Train", "John Coltrane", 56.99).with_id(1),
        NewAlbum::new("Giant Steps", "John Coltrane", 63.99).with_id(2),
        NewAlbum::new("Jeru", "Gerry Mulligan", 17.99).with_id(3),
    ])
}

fn query(artist: &str, album_id: i64) -> QueryConfig {
    QueryConfig {
        artist: artist.to_string(),
        album_id,
    }
}

#[tokio::test]
async fn default_lookups_render_as_text() {
    let mut store = catalog();
    let report = run(&mut store, &query("John Coltrane", 2)).await.unwrap();

    assert_eq!(report.albums.len(), 2);
    assert_eq!(report.album.title, "Giant Steps");

    insta::assert_snapshot!(report.render(OutputFormat::Text).unwrap(), @r###"
    Albums found: [{1 "Blue Train" "John Coltrane" 56.99} {2 "Giant Steps" "John Coltrane" 63.99}]
    Album found: {2 "Giant Steps" "John Coltrane" 63.99}
    "###);
}

#[tokio::test]
async fn json_report() {
    let mut store = catalog();
    let report = run(&mut store, &query("Gerry Mulligan", 3)).await.unwrap();

    insta::assert_snapshot!(report.render(OutputFormat::Json).unwrap(), @r###"
    {
      "artist": "Gerry Mulligan",
      "albums": [
        {
          "id": 3,
          "title": "Jeru",
          "artist": "Gerry Mulligan",
          "price": 17.99
        }
      ],
      "album": {
        "id": 3,
        "title": "Jeru",
        "artist": "Gerry Mulligan",
        "price": 17.99
      }
    }
    "###);
}

#[tokio::test]
async fn unknown_artist_is_not_an_error() {
    let mut store = catalog();
    let report = run(&mut store, &query("Nobody", 1)).await.unwrap();

    assert!(report.albums.is_empty());
    assert_eq!(report.render(OutputFormat::Text).unwrap().lines().next(), Some("Albums found: []"));
}

#[tokio::test]
async fn missing_id_surfaces_not_found() {
    let mut store = catalog();
    let err = run(&mut store, &query("John Coltrane", 999)).await.unwrap_err();

    let store_err = err.downcast_ref::<StoreError>().expect("store error in chain");
    assert!(store_err.is_not_found());
    assert_eq!(
        format!("{:#}", err),
        "Album lookup failed: album_by_id 999: no such album"
    );
}

/// Store whose round trips always fail
struct BrokenStore;

#[async_trait::async_trait]
impl AlbumStore for BrokenStore {
    fn name(&self) -> &str {
        "broken"
    }

    async fn albums_by_artist(&mut self, artist: &str) -> StoreResult<Vec<Album>> {
        Err(StoreError::query("albums_by_artist", artist, "connection reset by peer"))
    }

    async fn album_by_id(&mut self, id: AlbumId) -> StoreResult<Album> {
        Err(StoreError::query("album_by_id", id, "connection reset by peer"))
    }

    async fn add_album(&mut self, _album: &NewAlbum) -> StoreResult<AlbumId> {
        Err(StoreError::write("add_album", "read-only"))
    }
}

#[tokio::test]
async fn query_failure_stops_the_run() {
    let mut store = BrokenStore;
    let err = run(&mut store, &query("John Coltrane", 2)).await.unwrap_err();

    assert_eq!(
        format!("{:#}", err),
        r#"Artist lookup failed: albums_by_artist "John Coltrane": connection reset by peer"#
    );
    assert!(!err.downcast_ref::<StoreError>().unwrap().is_not_found());
}

#[tokio::test]
async fn runs_against_trait_objects() {
    let mut store: Box<dyn AlbumStore> = Box::new(catalog());
    let report: Report = run(store.as_mut(), &query("John Coltrane", 1)).await.unwrap();
    assert_eq!(report.album.title, "Blue Train");
}

fn config_with_url(url: &str) -> AppConfig {
    let url = url.to_string();
    AppConfig::default()
        .with_env(move |var| (var == "DATABASE_URL").then(|| url.clone()))
        .unwrap()
}

#[tokio::test]
async fn malformed_database_url_is_a_connection_error() {
    let err = connect(&config_with_url("not a url")).await.err().unwrap();

    let store_err = err.downcast_ref::<StoreError>().expect("store error in chain");
    assert!(matches!(store_err, StoreError::Connection { .. }));
    assert!(err.downcast_ref::<ConfigError>().is_none());
}

#[tokio::test]
async fn unreachable_server_is_a_connection_error() {
    let err = connect(&config_with_url("postgres://albums@127.0.0.1:1/albums"))
        .await
        .err()
        .unwrap();

    match err.downcast_ref::<StoreError>() {
        Some(StoreError::Connection { target, .. }) => assert_eq!(target, "127.0.0.1:1/albums"),
        other => panic!("expected connection error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_database_url_is_a_config_error() {
    let err = connect(&AppConfig::default()).await.err().unwrap();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::MissingDatabaseUrl)
    ));
}
