//! Error types for loading bookings and running the dashboard pipeline.

use std::fmt;
use std::path::PathBuf;

/// The bookings file could not be read or parsed.
#[derive(Debug)]
pub enum DataLoadError {
    /// The file is missing or unreadable.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A row is not valid CSV or a typed column failed to parse.
    /// `record` is the 1-based data row, when known.
    Parse {
        record: Option<u64>,
        source: csv::Error,
    },
    /// The header lacks a column the dashboard reads by name.
    MissingColumn(&'static str),
    /// The parsed bookings could not be loaded into the query database.
    Database(String),
}

impl fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataLoadError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            DataLoadError::Parse {
                record: Some(record),
                source,
            } => write!(f, "invalid booking record {}: {}", record, source),
            DataLoadError::Parse { record: None, source } => {
                write!(f, "invalid bookings CSV: {}", source)
            }
            DataLoadError::MissingColumn(column) => {
                write!(f, "bookings CSV has no '{}' column", column)
            }
            DataLoadError::Database(msg) => write!(f, "cannot index bookings: {}", msg),
        }
    }
}

impl std::error::Error for DataLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataLoadError::Io { source, .. } => Some(source),
            DataLoadError::Parse { source, .. } => Some(source),
            DataLoadError::MissingColumn(_) | DataLoadError::Database(_) => None,
        }
    }
}

/// Conditions that stop a dashboard pass after loading.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum DashboardError {
    /// The hotel filter matched no bookings.
    EmptyFilterResult,
    /// A filter or aggregate query failed.
    Query(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::EmptyFilterResult => {
                f.write_str("No data available with the current filters.")
            }
            DashboardError::Query(msg) => write!(f, "query failed: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            DashboardError::EmptyFilterResult.to_string(),
            "No data available with the current filters."
        );
        assert_eq!(
            DataLoadError::MissingColumn("adr").to_string(),
            "bookings CSV has no 'adr' column"
        );

        let io = DataLoadError::Io {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(io.to_string().starts_with("cannot read missing.csv"));
    }

    #[test]
    fn test_database_errors() {
        assert_eq!(
            DataLoadError::Database("disk I/O error".to_string()).to_string(),
            "cannot index bookings: disk I/O error"
        );
        let query = DashboardError::Query("no such column: adr".to_string());
        assert_eq!(query.to_string(), "query failed: no such column: adr");
        assert_ne!(query, DashboardError::EmptyFilterResult);
    }
}
