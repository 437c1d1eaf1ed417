//! Localización y lectura de la tabla "tamaño de clique / cantidad".
//!
//! Hay dos formatos de tabla en los reportes:
//!
//! ```text
//! Dialecto A (ELS, Chiba):            Dialecto B (Tomita):
//!
//! | Clique Size | Number of Cliques | ===== Clique Size Distribution =====
//! -----------------------------------  +------------+-----------------+
//! |           3 |             1,250 | | Clique Size | Number of Cliques |
//! |           5 |                40 | +------------+-----------------+
//! -----------------------------------  |          3 |            1250 |
//!                                      +------------+-----------------+
//! ```
//!
//! El dialecto se elige según qué marcador aparece primero en el texto.

use std::sync::OnceLock;
use regex::Regex;
use crate::models::CliqueCount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableDialect {
    /// Encabezado con "Clique Size | Number of Cliques" seguido de un separador.
    HeaderTable,
    /// Banner `===== Clique Size Distribution =====`.
    BannerTable,
}

/// Posición de la tabla dentro del reporte: dialecto y línea del marcador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLocation {
    pub dialect: TableDialect,
    pub marker_line: usize,
}

fn row_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\|\s*(\d+)\s*\|\s*(\d[\d,]*)\s*(?:\||$)").unwrap())
}

/// Parsea una fila `| <size> | <count> |`. El conteo puede traer separadores de miles.
/// Filas con tamaño 0 o números fuera de rango se descartan.
pub fn parse_row(line: &str) -> Option<CliqueCount> {
    let caps = row_regex().captures(line)?;
    let size = caps[1].parse::<u64>().ok()?;
    let count = caps[2].replace(',', "").parse::<u64>().ok()?;
    if size == 0 {
        return None;
    }
    Some(CliqueCount { size, count })
}

pub fn is_header_marker(line: &str) -> bool {
    if !line.contains('|') {
        return false;
    }
    let l = line.to_ascii_lowercase();
    l.contains("clique size") && (l.contains("number of cliques") || l.contains("count"))
}

pub fn is_banner_marker(line: &str) -> bool {
    let t = line.trim();
    t.starts_with("==") && t.to_ascii_lowercase().contains("clique size distribution")
}

/// Línea de regla horizontal (`-----`, `+----+----+`).
pub fn is_dashed_rule(line: &str) -> bool {
    line.contains("---")
}

/// Busca el primer marcador de tabla de cualquiera de los dos dialectos.
pub fn locate_table(lines: &[&str]) -> Option<TableLocation> {
    lines.iter().enumerate().find_map(|(i, line)| {
        if is_banner_marker(line) {
            Some(TableLocation { dialect: TableDialect::BannerTable, marker_line: i })
        } else if is_header_marker(line) {
            Some(TableLocation { dialect: TableDialect::HeaderTable, marker_line: i })
        } else {
            None
        }
    })
}

impl TableDialect {
    /// Lee las filas de datos que siguen al marcador en `start`.
    pub fn read_rows(self, lines: &[&str], start: usize) -> Vec<CliqueCount> {
        match self {
            TableDialect::HeaderTable => read_header_table(lines, start),
            TableDialect::BannerTable => read_banner_table(lines, start),
        }
    }
}

fn read_header_table(lines: &[&str], header: usize) -> Vec<CliqueCount> {
    let mut rows = Vec::new();
    let mut i = header + 1;

    // saltar el separador; si falta y ya viene una fila, se lee normalmente
    if let Some(next) = lines.get(i) {
        if parse_row(next).is_none() {
            i += 1;
        }
    }

    while let Some(line) = lines.get(i) {
        if !line.contains('|') || is_dashed_rule(line) {
            break;
        }
        if let Some(row) = parse_row(line) {
            rows.push(row);
        }
        i += 1;
    }
    rows
}

/// Dentro del bloque: reglas, líneas vacías y el encabezado con pipes son
/// marco. El bloque termina en la primera línea de texto sin pipes después
/// de los datos, o en la regla que cierra un encabezado sin filas.
fn read_banner_table(lines: &[&str], banner: usize) -> Vec<CliqueCount> {
    let mut rows = Vec::new();
    let mut header_seen = false;
    let mut rules_after_header = 0;
    for line in lines.iter().skip(banner + 1) {
        if let Some(row) = parse_row(line) {
            rows.push(row);
            continue;
        }
        let t = line.trim();
        if t.is_empty() {
            continue;
        }
        if t.starts_with('|') {
            header_seen = true;
            continue;
        }
        if !rows.is_empty() {
            break;
        }
        if header_seen {
            // la primera regla separa el encabezado; la segunda cierra la tabla vacía
            if is_dashed_rule(t) && rules_after_header == 0 {
                rules_after_header += 1;
                continue;
            }
            break;
        }
    }
    rows
}
