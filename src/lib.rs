// Biblioteca raíz del crate `cliquestats`.
// Parser de reportes de cliques maximales, normalizador de series para
// gráficos logarítmicos y la API HTTP que los expone.
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod report;
pub mod series;
pub mod server;

pub use config::Settings;
pub use error::{ConfigError, ReportError};
pub use models::{CliqueCount, Group, GroupSeries, MetricSeries, ParsedReport, Tick, TickPlan};
pub use report::{load_report, load_reports, parse_report};
pub use series::{build_group_series, build_grouped_series, build_log_tick_plan, format_value};

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
