//! Líneas de resumen que pueden aparecer en cualquier parte del reporte:
//! total de cliques, tamaño máximo, tamaño del grafo y tiempos de ejecución.

use std::sync::OnceLock;
use regex::Regex;
use crate::models::{ExecutionTiming, GraphSummary};

/// Frases aceptadas para el total (en minúsculas).
pub const TOTAL_PHRASES: &[&str] = &[
    "total number of maximal cliques",
    "total number of cliques",
    "total maximal cliques",
];

/// Frases aceptadas para el tamaño de la clique más grande.
pub const LARGEST_PHRASES: &[&str] = &["largest clique size", "maximum clique size"];

const NUMBER: &str = r"[-+]?\d+(?:\.\d+)?(?:[eE][-+]?\d+)?";
const TIME_UNIT: &str = r"(ms|milliseconds|s|sec|seconds)";

/// Entero inmediatamente después del primer separador (`:` o `|`).
fn stated_integer_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^:|]*[:|]\s*(\d[\d,]*)").unwrap())
}

fn edges_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bedges:\s*(\d[\d,]*)").unwrap())
}

fn nodes_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bnodes:\s*(\d[\d,]*)").unwrap())
}

fn run_row_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"^\s*\|\s*\d+\s*\|\s*({NUMBER})\s*ms\b")).unwrap())
}

fn avg_row_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"(?i)^\s*\|\s*avg\s*\|\s*({NUMBER})\s*ms\b")).unwrap())
}

fn seconds_row_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"(?i)execution time \(seconds\)\s*\|\s*({NUMBER})")).unwrap()
    })
}

fn elapsed_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"(?i)(?:time elapsed|^\s*execution time):\s*({NUMBER})\s*{TIME_UNIT}?\b"
        ))
        .unwrap()
    })
}

fn parse_grouped(s: &str) -> Option<u64> {
    s.replace(',', "").parse::<u64>().ok()
}

/// Valor declarado tras alguna de las frases, buscando línea por línea: el
/// entero que sigue al separador `:` (o `|` en tablas de métricas). Los
/// números entre la frase y el separador no cuentan, y una línea con la
/// frase pero sin número tampoco.
pub fn find_stated_value(lines: &[&str], phrases: &[&str]) -> Option<u64> {
    lines.iter().find_map(|line| {
        let lower = line.to_ascii_lowercase();
        phrases.iter().find_map(|phrase| {
            let at = lower.find(phrase)?;
            let rest = &line[at + phrase.len()..];
            let caps = stated_integer_regex().captures(rest)?;
            parse_grouped(&caps[1])
        })
    })
}

pub fn find_total(lines: &[&str]) -> Option<u64> {
    find_stated_value(lines, TOTAL_PHRASES)
}

pub fn find_largest(lines: &[&str]) -> Option<u64> {
    find_stated_value(lines, LARGEST_PHRASES)
}

/// `Edges: N | Nodes: M` (ambos en la misma línea, en cualquier orden).
pub fn find_graph(lines: &[&str]) -> Option<GraphSummary> {
    lines.iter().find_map(|line| {
        let edges = edges_regex().captures(line).and_then(|c| parse_grouped(&c[1]))?;
        let nodes = nodes_regex().captures(line).and_then(|c| parse_grouped(&c[1]))?;
        Some(GraphSummary { nodes, edges })
    })
}

/// Recupera tiempos de ejecución. Las filas `| n | x ms |` sólo cuentan
/// después del encabezado `| Run # | Execution Time (ms) |`.
pub fn find_timing(lines: &[&str]) -> Option<ExecutionTiming> {
    let mut runs_ms = Vec::new();
    let mut average_ms: Option<f64> = None;
    let mut in_run_table = false;

    for line in lines {
        let lower = line.to_ascii_lowercase();
        if lower.contains("run #") && lower.contains("execution time") {
            in_run_table = true;
            continue;
        }
        if in_run_table {
            if let Some(v) = run_row_regex().captures(line).and_then(|c| c[1].parse::<f64>().ok()) {
                runs_ms.push(v);
                continue;
            }
        }
        if average_ms.is_none() {
            if let Some(v) = avg_row_regex().captures(line).and_then(|c| c[1].parse::<f64>().ok()) {
                average_ms = Some(v);
                in_run_table = false;
                continue;
            }
            let seconds = seconds_row_regex().captures(line).and_then(|c| c[1].parse::<f64>().ok());
            if let Some(v) = seconds {
                average_ms = Some(v * 1000.0);
                continue;
            }
            if let Some(caps) = elapsed_regex().captures(line) {
                if let Ok(v) = caps[1].parse::<f64>() {
                    let unit = caps.get(2).map(|m| m.as_str().to_ascii_lowercase());
                    let ms = match unit.as_deref() {
                        Some("ms") | Some("milliseconds") => v,
                        _ => v * 1000.0,
                    };
                    average_ms = Some(ms);
                }
            }
        }
    }

    if average_ms.is_none() && !runs_ms.is_empty() {
        average_ms = Some(runs_ms.iter().sum::<f64>() / runs_ms.len() as f64);
    }
    if runs_ms.is_empty() && average_ms.is_none() {
        return None;
    }
    Some(ExecutionTiming { runs_ms, average_ms })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_accepts_every_phrasing() {
        assert_eq!(find_total(&["Total Number of Maximal Cliques: 1290"]), Some(1290));
        assert_eq!(find_total(&["Total number of cliques: 7"]), Some(7));
        assert_eq!(find_total(&["| Total maximal cliques    |        1,024 |"]), Some(1024));
        assert_eq!(find_total(&["nothing here"]), None);
    }

    #[test]
    fn phrase_without_number_is_ignored() {
        let lines = ["Total number of cliques: n/a", "Total number of cliques: 12"];
        assert_eq!(find_total(&lines), Some(12));
    }

    #[test]
    fn value_is_read_after_the_separator() {
        let lines = ["Total number of maximal cliques (size >= 3): 99"];
        assert_eq!(find_total(&lines), Some(99));
        assert_eq!(find_largest(&["Largest clique size (k=4) | 12"]), Some(12));
        assert_eq!(find_total(&["Total number of cliques 42"]), None);
    }

    #[test]
    fn largest_reads_table_row() {
        assert_eq!(find_largest(&["| Maximum clique size      |            9 |"]), Some(9));
        assert_eq!(find_largest(&["Largest Clique Size: 17"]), Some(17));
    }

    #[test]
    fn graph_line() {
        let g = find_graph(&["Edges: 183831 | Nodes: 36692"]).unwrap();
        assert_eq!(g, GraphSummary { nodes: 36692, edges: 183831 });
        assert!(find_graph(&["Edges: 10"]).is_none());
    }

    #[test]
    fn run_table_and_average() {
        let lines = [
            "--- Execution Time Table ---",
            "---------------------------------",
            "| Run # | Execution Time (ms)    |",
            "---------------------------------",
            "|     1  |        120 ms   |",
            "|     2  |        130 ms   |",
            "---------------------------------",
            "| Avg   |        125 ms   |",
        ];
        let t = find_timing(&lines).unwrap();
        assert_eq!(t.runs_ms, vec![120.0, 130.0]);
        assert_eq!(t.average_ms, Some(125.0));
    }

    #[test]
    fn average_falls_back_to_mean_of_runs() {
        let lines = ["| Run # | Execution Time (ms) |", "| 1 | 10 ms |", "| 2 | 30 ms |"];
        assert_eq!(find_timing(&lines).unwrap().average_ms, Some(20.0));
    }

    #[test]
    fn seconds_are_converted() {
        let t = find_timing(&["| Execution Time (seconds) |                    1.5 |"]).unwrap();
        assert_eq!(t.average_ms, Some(1500.0));
        let t = find_timing(&["Time elapsed: 0.25 seconds"]).unwrap();
        assert_eq!(t.average_ms, Some(250.0));
        let t = find_timing(&["Execution Time: 42 ms"]).unwrap();
        assert_eq!(t.average_ms, Some(42.0));
        assert!(find_timing(&["Run 1 execution time: 120 ms"]).is_none());
        assert!(find_timing(&["| 3 | 10 |"]).is_none());
    }
}
