use crate::config::{ConnectionSpec, ProbeConfig};
use crate::error::ProbeError;
use crate::version::VersionString;
use log::{debug, info, warn};
use rusqlite::{Connection, OpenFlags};

/// An open database connection that can answer a single scalar query.
///
/// The connection is released exactly once: by [`DatabaseProbe::close`], or
/// when the probe is dropped on an early return.
pub struct DatabaseProbe {
    conn: Connection,
    release: Release,
}

/// Marks the end of a probe's connection. Dropped after the connection.
struct Release {
    spec: ConnectionSpec,
}

impl Drop for Release {
    fn drop(&mut self) {
        debug!("released sqlite database {}", self.spec);
        #[cfg(test)]
        tests::RELEASES.with(|n| n.set(n.get() + 1));
    }
}

impl DatabaseProbe {
    pub fn open(spec: &ConnectionSpec) -> Result<Self, ProbeError> {
        let conn = match spec {
            ConnectionSpec::InMemory => Connection::open_in_memory(),
            ConnectionSpec::File {
                path,
                read_only: false,
            } => Connection::open(path),
            ConnectionSpec::File {
                path,
                read_only: true,
            } => Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY
                    | OpenFlags::SQLITE_OPEN_URI
                    | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            ),
        }
        .map_err(|source| ProbeError::Open {
            spec: spec.clone(),
            source,
        })?;

        debug!("opened sqlite database {}", spec);
        Ok(Self {
            conn,
            release: Release { spec: spec.clone() },
        })
    }

    pub fn spec(&self) -> &ConnectionSpec {
        &self.release.spec
    }

    /// Run a read-only query and return the first column of the first row
    /// as text. Extra rows are ignored; zero rows is an error.
    pub fn query_scalar(&self, sql: &str) -> Result<String, ProbeError> {
        let query_err = |source: rusqlite::Error| ProbeError::Query {
            sql: sql.to_string(),
            source,
        };

        let mut stmt = self.conn.prepare(sql).map_err(query_err)?;
        if !stmt.readonly() {
            return Err(ProbeError::NotReadOnly {
                sql: sql.to_string(),
            });
        }
        let columns = stmt.column_count();
        if columns != 1 {
            return Err(ProbeError::ColumnCount {
                sql: sql.to_string(),
                columns,
            });
        }

        stmt.query_row([], |row| row.get::<_, String>(0))
            .map_err(query_err)
    }

    /// [`query_scalar`](Self::query_scalar), rejecting an empty answer.
    pub fn query_version(&self, sql: &str) -> Result<VersionString, ProbeError> {
        let value = self.query_scalar(sql)?;
        VersionString::new(value).ok_or_else(|| ProbeError::EmptyValue {
            sql: sql.to_string(),
        })
    }

    pub fn close(self) -> Result<(), ProbeError> {
        let DatabaseProbe { conn, release } = self;
        match conn.close() {
            Ok(()) => Ok(()),
            Err((_conn, source)) => {
                warn!("closing sqlite database {} failed", release.spec);
                Err(ProbeError::Close {
                    spec: release.spec.clone(),
                    source,
                })
            }
        }
    }
}

/// Write the engine version to the log.
pub fn report(version: &VersionString) {
    info!("sqlite version: {}", version);
}

/// Open, query, report and close. The connection is released before this
/// returns, whichever way it returns.
pub fn run(config: &ProbeConfig) -> Result<VersionString, ProbeError> {
    let probe = DatabaseProbe::open(&config.connection)?;
    let version = probe.query_version(&config.query)?;
    report(&version);
    probe.close()?;
    Ok(version)
}
