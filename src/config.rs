use std::fmt;
use std::path::PathBuf;

/// DSN that selects a private, non-durable database.
pub const IN_MEMORY: &str = ":memory:";

/// Query used to fetch the engine version.
pub const VERSION_QUERY: &str = "select sqlite_version()";

/// Where the probe opens its database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionSpec {
    /// Ephemeral database discarded when the connection closes.
    #[default]
    InMemory,
    /// A database file. A read-only open never creates the file.
    File { path: PathBuf, read_only: bool },
}

impl ConnectionSpec {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ConnectionSpec::File {
            path: path.into(),
            read_only: false,
        }
    }

    pub fn read_only(path: impl Into<PathBuf>) -> Self {
        ConnectionSpec::File {
            path: path.into(),
            read_only: true,
        }
    }
}

impl fmt::Display for ConnectionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionSpec::InMemory => f.write_str(IN_MEMORY),
            ConnectionSpec::File {
                path,
                read_only: false,
            } => write!(f, "{}", path.display()),
            ConnectionSpec::File {
                path,
                read_only: true,
            } => write!(f, "{} (read-only)", path.display()),
        }
    }
}

/// Everything the probe needs: where to connect and what to ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub connection: ConnectionSpec,
    pub query: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            connection: ConnectionSpec::InMemory,
            query: VERSION_QUERY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_dsn() {
        assert_eq!(ConnectionSpec::InMemory.to_string(), ":memory:");
        assert_eq!(ConnectionSpec::file("a.db").to_string(), "a.db");
        assert_eq!(ConnectionSpec::read_only("a.db").to_string(), "a.db (read-only)");
    }

    #[test]
    fn default_config_asks_memory_db_for_version() {
        let config = ProbeConfig::default();
        assert_eq!(config.connection, ConnectionSpec::InMemory);
        assert_eq!(config.query, "select sqlite_version()");
    }
}
