use std::path::{Path, PathBuf};
use futures_util::future::join_all;
use crate::error::ReportError;
use crate::models::ParsedReport;
use super::parse_report;

/// Resuelve `name` contra el directorio de reportes. Si la ruta existe tal
/// cual se usa directamente; si no, se une a `base_dir` (quitando un `/`
/// inicial, igual que una ruta "absoluta" del sitio estático).
pub fn resolve_report_path(base_dir: &Path, name: &str) -> PathBuf {
    let direct = Path::new(name);
    if direct.exists() {
        return direct.to_path_buf();
    }
    base_dir.join(name.trim_start_matches('/'))
}

pub async fn load_report_text(path: &Path) -> Result<String, ReportError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| ReportError::Encoding(path.to_path_buf()))
}

/// Lee y parsea un reporte propagando el error de lectura.
pub async fn try_load_report(path: &Path) -> Result<ParsedReport, ReportError> {
    let text = load_report_text(path).await?;
    Ok(parse_report(&text, &path.to_string_lossy()))
}

/// Lee y parsea un reporte. Si la lectura falla se registra el error y se
/// devuelve el reporte vacío; no hay reintentos.
pub async fn load_report(path: &Path) -> ParsedReport {
    match try_load_report(path).await {
        Ok(report) => report,
        Err(e) => {
            log::error!("Error parsing clique data: {}", e);
            ParsedReport::empty()
        }
    }
}

/// Carga varios reportes de forma concurrente. El resultado conserva el orden de entrada.
pub async fn load_reports(paths: &[PathBuf]) -> Vec<(PathBuf, ParsedReport)> {
    let reports = join_all(paths.iter().map(|p| load_report(p))).await;
    paths.iter().cloned().zip(reports).collect()
}

/// Archivos `.txt` del directorio, ordenados por nombre.
pub async fn list_reports(dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let list_err = |source| ReportError::List { path: dir.to_path_buf(), source };
    let mut entries = tokio::fs::read_dir(dir).await.map_err(list_err)?;
    let mut out = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
        let path = entry.path();
        let is_txt = path.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("txt"));
        if is_txt && path.is_file() {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}
