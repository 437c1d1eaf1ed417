//! Errores del crate.
//!
//! Dos familias separadas a propósito:
//! - [`ReportError`]: fallas al recuperar un reporte. El cargador las absorbe
//!   y devuelve un `ParsedReport` vacío.
//! - [`ConfigError`]: errores de autoría en las tablas de métricas o en la
//!   configuración de escalas. Se propagan al llamador.

use std::path::PathBuf;
use thiserror::Error;

/// Errores al recuperar el texto de un reporte.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to read report {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("report {0} is not valid UTF-8")]
    Encoding(PathBuf),

    #[error("failed to list reports in {path}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errores de configuración en tablas estáticas o planes de ticks.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("group '{group}' has no value for metric '{metric}'")]
    MissingMetric { group: String, metric: String },

    #[error("log scale minimum {min} is not positive and no positive tick candidate exists")]
    NoPositiveMinimum { min: f64 },

    #[error("invalid log scale range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    #[error("unknown metric table '{0}'")]
    UnknownTable(String),

    #[error("invalid metric tables: {0}")]
    InvalidTables(#[from] serde_json::Error),

    #[error("failed to read metric tables from {path}: {source}")]
    TablesFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
