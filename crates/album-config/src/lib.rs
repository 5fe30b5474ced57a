use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

pub const DEFAULT_ARTIST: &str = "John Coltrane";
pub const DEFAULT_ALBUM_ID: i64 = 2;

#[derive(Clone, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_deref().map(redact_url))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuerySection {
    pub artist: Option<String>,
    pub album_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub database: Option<DatabaseConfig>,
    pub query: Option<QuerySection>,
    pub output: Option<OutputSection>,
}

/// The two lookups the driver performs
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    pub artist: String,
    pub album_id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No database URL: set DATABASE_URL or [database] url")]
    MissingDatabaseUrl,
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

impl AppConfig {
    /// Load configuration from ALBUMS_CONFIG path (TOML) if present, then
    /// apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("ALBUMS_CONFIG").unwrap_or_else(|_| "albums.toml".to_string());
        Self::load_from(&path)?.with_env(|var| std::env::var(var).ok())
    }

    /// Read a TOML file. A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let s = fs::read_to_string(path)?;
        Ok(toml::from_str::<AppConfig>(&s)?)
    }

    /// Apply overrides from an environment lookup:
    /// DATABASE_URL, ALBUMS_ARTIST, ALBUMS_ID, ALBUMS_OUTPUT
    pub fn with_env<F>(mut self, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env("DATABASE_URL") {
            self.database.get_or_insert_with(Default::default).url = Some(url);
        }

        if let Some(artist) = env("ALBUMS_ARTIST") {
            self.query.get_or_insert_with(Default::default).artist = Some(artist);
        }

        if let Some(value) = env("ALBUMS_ID") {
            let id = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: "ALBUMS_ID",
                value: value.clone(),
            })?;
            self.query.get_or_insert_with(Default::default).album_id = Some(id);
        }

        if let Some(value) = env("ALBUMS_OUTPUT") {
            let format = value.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "ALBUMS_OUTPUT",
                value: value.clone(),
            })?;
            self.output.get_or_insert_with(Default::default).format = Some(format);
        }

        Ok(self)
    }

    /// Database URL. There is no built-in default.
    /// The value is not validated here; the connector rejects bad URLs.
    pub fn database_url(&self) -> Result<&str, ConfigError> {
        self.database
            .as_ref()
            .and_then(|d| d.url.as_deref())
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)
    }

    /// Database URL with any password masked, for logs
    pub fn redacted_database_url(&self) -> Option<String> {
        self.database
            .as_ref()
            .and_then(|d| d.url.as_deref())
            .map(redact_url)
    }

    /// Lookup inputs (defaults: "John Coltrane", id 2)
    pub fn query(&self) -> QueryConfig {
        let section = self.query.clone().unwrap_or_default();
        QueryConfig {
            artist: section.artist.unwrap_or_else(|| DEFAULT_ARTIST.to_string()),
            album_id: section.album_id.unwrap_or(DEFAULT_ALBUM_ID),
        }
    }

    /// Report format (default text)
    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }
}

/// Mask the password of a connection URL. Unparseable input is masked whole.
pub fn redact_url(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("***"));
            }
            url.to_string()
        }
        Err(_) => "<unparseable>".to_string(),
    }
}
