//! Módulo `report`: lectura tolerante de reportes de enumeración de cliques.
//!
//! Submódulos:
//! - `testcase`: inferencia del dataset a partir del nombre del archivo
//! - `dialect`: localización y lectura de la tabla de distribución (2 dialectos)
//! - `summary`: líneas de resumen (total, tamaño máximo, grafo, tiempos)
//! - `loader`: lectura asíncrona de archivos con fallback a reporte vacío

pub mod dialect;
pub mod loader;
pub mod summary;
pub mod testcase;

pub use dialect::{TableDialect, locate_table};
pub use loader::{
    list_reports, load_report, load_report_text, load_reports, resolve_report_path, try_load_report,
};
pub use testcase::infer_test_case;

use std::collections::BTreeMap;
use crate::models::{CliqueCount, ParsedReport};

/// Parsea el texto de un reporte. Nunca falla: lo que no se encuentre queda
/// en su valor por defecto (0, lista vacía, "Unknown").
///
/// - `total_cliques`: la línea de total si existe, si no la suma de la distribución.
/// - `largest_clique_size`: el tamaño máximo de la distribución; si la
///   distribución está vacía, la línea de tamaño máximo si existe, si no 0.
pub fn parse_report(text: &str, source: &str) -> ParsedReport {
    let lines: Vec<&str> = text.lines().collect();
    let test_case = infer_test_case(source);

    let raw_rows = match locate_table(&lines) {
        Some(loc) => {
            log::debug!("{}: tabla {:?} en la línea {}", source, loc.dialect, loc.marker_line + 1);
            loc.dialect.read_rows(&lines, loc.marker_line)
        }
        None => {
            log::debug!("{}: no se encontró tabla de distribución", source);
            Vec::new()
        }
    };
    let distribution = finalize_distribution(raw_rows);

    let summed = distribution.iter().fold(0u64, |acc, c| acc.saturating_add(c.count));
    let total_cliques = match summary::find_total(&lines) {
        Some(stated) => {
            if !distribution.is_empty() && stated != summed {
                log::debug!(
                    "{}: total declarado {} distinto de la suma {}",
                    source,
                    stated,
                    summed
                );
            }
            stated
        }
        None => summed,
    };

    let largest_clique_size = match distribution.last() {
        Some(c) => c.size,
        None => summary::find_largest(&lines).unwrap_or(0),
    };

    ParsedReport {
        test_case,
        total_cliques,
        largest_clique_size,
        distribution,
        graph: summary::find_graph(&lines),
        timing: summary::find_timing(&lines),
    }
}

/// Ordena por tamaño y deja una entrada por tamaño (gana la última leída).
pub fn finalize_distribution(rows: Vec<CliqueCount>) -> Vec<CliqueCount> {
    let mut by_size: BTreeMap<u64, u64> = BTreeMap::new();
    for row in rows {
        by_size.insert(row.size, row.count);
    }
    by_size.into_iter().map(|(size, count)| CliqueCount { size, count }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_sizes_keep_last_value() {
        let rows = vec![
            CliqueCount { size: 5, count: 1 },
            CliqueCount { size: 2, count: 8 },
            CliqueCount { size: 5, count: 3 },
        ];
        let out = finalize_distribution(rows);
        assert_eq!(out, vec![CliqueCount { size: 2, count: 8 }, CliqueCount { size: 5, count: 3 }]);
    }

    #[test]
    fn empty_text_gives_defaults() {
        assert_eq!(parse_report("", "x.txt"), ParsedReport::empty());
    }

    #[test]
    fn stated_total_is_trusted() {
        let text = "| Clique Size | Number of Cliques |\n---\n| 2 | 3 |\n\n\
                    Total number of cliques: 100\n";
        let r = parse_report(text, "x.txt");
        assert_eq!(r.total_cliques, 100);
        assert_eq!(r.largest_clique_size, 2);
    }

    #[test]
    fn largest_comes_from_distribution_when_present() {
        let text = "| Clique Size | Count |\n+---+\n| 4 | 1 |\n+---+\nLargest clique size: 9\n";
        assert_eq!(parse_report(text, "x.txt").largest_clique_size, 4);
    }
}
