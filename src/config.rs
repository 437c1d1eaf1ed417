// Configuración del servicio: `.env` + variables de entorno.

use std::path::PathBuf;

pub const BIND_VAR: &str = "CLIQUESTATS_BIND";
pub const REPORTS_DIR_VAR: &str = "CLIQUESTATS_REPORTS_DIR";
pub const TABLES_VAR: &str = "CLIQUESTATS_TABLES";

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind: String,
    pub reports_dir: PathBuf,
    /// Archivo JSON con tablas de métricas; `None` usa las embebidas.
    pub tables_path: Option<PathBuf>,
}

impl Settings {
    /// Carga `.env` si existe y lee las variables `CLIQUESTATS_*`.
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();

        let bind = non_empty_var(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let reports_dir = get_reports_dir();
        let tables_path = non_empty_var(TABLES_VAR).map(PathBuf::from);

        Settings { bind, reports_dir, tables_path }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bind: DEFAULT_BIND.to_string(),
            reports_dir: PathBuf::from("reports"),
            tables_path: None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Directorio de reportes: la variable de entorno si apunta a algo que
/// existe, si no el primer candidato existente bajo el CWD.
pub fn get_reports_dir() -> PathBuf {
    if let Some(path) = non_empty_var(REPORTS_DIR_VAR) {
        let p = PathBuf::from(path);
        if p.exists() {
            log::info!("Usando {}: {:?}", REPORTS_DIR_VAR, p);
            return p;
        }
        log::warn!("{} apunta a {:?}, que no existe; buscando alternativas", REPORTS_DIR_VAR, p);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_reports_dir(&cwd)
}

pub fn find_reports_dir(cwd: &std::path::Path) -> PathBuf {
    let candidates = [cwd.join("reports"), cwd.join("public/reports"), cwd.join("data/reports")];
    for candidate in candidates {
        if candidate.is_dir() {
            log::info!("Reportes encontrados en {:?}", candidate);
            return candidate;
        }
    }
    log::warn!("No se encontró directorio de reportes bajo {:?}; usando 'reports'", cwd);
    PathBuf::from("reports")
}
