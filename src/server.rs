use std::collections::HashMap;
use std::path::{Path, PathBuf};
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::Serialize;
use serde_json::json;
use crate::config::Settings;
use crate::error::ConfigError;
use crate::models::{GroupSeries, MetricSeries, ParsedReport, TickPlan};
use crate::render::{render_comparison, render_histogram};
use crate::report::{list_reports, load_report, load_reports, try_load_report};
use crate::series::{MetricTables, format_value};

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Estado compartido por los handlers. Sólo lectura después de arrancar.
pub struct AppState {
    pub settings: Settings,
    pub tables: MetricTables,
}

impl AppState {
    /// Carga las tablas configuradas y las valida antes de servir nada.
    pub fn from_settings(settings: Settings) -> Result<Self, ConfigError> {
        let tables = MetricTables::load(settings.tables_path.as_deref())?;
        tables.validate()?;
        Ok(AppState { settings, tables })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TableSeriesResponse {
    id: String,
    title: String,
    axis_label: String,
    categories: Vec<String>,
    metric_series: Vec<MetricSeries>,
    group_series: Vec<GroupSeries>,
    tick_plan: TickPlan,
    /// Etiquetas de barra, alineadas con `group_series`.
    labels: Vec<Vec<String>>,
}

/// Nombre de archivo pedido por query. Sólo nombres simples: la lectura
/// queda dentro del directorio de reportes.
fn file_param(query: &HashMap<String, String>) -> Result<String, HttpResponse> {
    let file = match query.get("file").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(f) => f.to_string(),
        None => {
            return Err(HttpResponse::BadRequest()
                .json(json!({"error": "file query parameter is required"})));
        }
    };
    let nested = file.contains('/') || file.contains('\\');
    if file.contains("..") || nested || Path::new(&file).is_absolute() {
        return Err(HttpResponse::BadRequest().json(json!({
            "error": "file must be a plain file name inside the reports directory"
        })));
    }
    Ok(file)
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

/// GET /reports
async fn reports_list_handler(state: web::Data<AppState>) -> impl Responder {
    let dir = &state.settings.reports_dir;
    match list_reports(dir).await {
        Ok(paths) => {
            let names: Vec<String> = paths.iter().map(|p| file_name(p)).collect();
            HttpResponse::Ok().json(json!({"reportsDir": dir.to_string_lossy(), "reports": names}))
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

/// GET /reports/parse?file=Tomita_WikiVote.txt
/// Si la lectura falla responde el reporte vacío con un campo `error`.
async fn reports_parse_handler(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let file = match file_param(&query) {
        Ok(f) => f,
        Err(resp) => return resp,
    };
    let path = state.settings.reports_dir.join(&file);
    match try_load_report(&path).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            log::error!("Error parsing clique data: {}", e);
            let mut body =
                serde_json::to_value(ParsedReport::empty()).unwrap_or_else(|_| json!({}));
            body["error"] = json!(e.to_string());
            HttpResponse::Ok().json(body)
        }
    }
}

/// GET /reports/all
/// Parsea todos los reportes del directorio de forma concurrente.
async fn reports_all_handler(state: web::Data<AppState>) -> impl Responder {
    let paths: Vec<PathBuf> = match list_reports(&state.settings.reports_dir).await {
        Ok(p) => p,
        Err(e) => {
            return HttpResponse::InternalServerError().json(json!({"error": e.to_string()}));
        }
    };
    let parsed = load_reports(&paths).await;
    let out: Vec<serde_json::Value> = parsed
        .into_iter()
        .map(|(path, report)| json!({"file": file_name(&path), "report": report}))
        .collect();
    HttpResponse::Ok().json(out)
}

/// GET /tables
async fn tables_list_handler(state: web::Data<AppState>) -> impl Responder {
    let tables: Vec<serde_json::Value> = state
        .tables
        .tables
        .iter()
        .map(|t| json!({"id": t.id, "title": t.title}))
        .collect();
    HttpResponse::Ok().json(tables)
}

fn config_error_response(e: ConfigError) -> HttpResponse {
    match e {
        ConfigError::UnknownTable(_) => {
            HttpResponse::NotFound().json(json!({"error": e.to_string()}))
        }
        other => HttpResponse::InternalServerError().json(json!({"error": other.to_string()})),
    }
}

fn table_series(tables: &MetricTables, id: &str) -> Result<TableSeriesResponse, ConfigError> {
    let table = tables.find(id)?;
    let metric_series = table.grouped_series()?;
    let group_series = table.group_series()?;
    let tick_plan = table.tick_plan()?;
    let labels = group_series
        .iter()
        .map(|s| s.values.iter().map(|v| format_value(*v)).collect())
        .collect();
    Ok(TableSeriesResponse {
        id: table.id.clone(),
        title: table.title.clone(),
        axis_label: table.axis_label.clone(),
        categories: table.metric_labels(),
        metric_series,
        group_series,
        tick_plan,
        labels,
    })
}

/// GET /tables/{id}/series
async fn table_series_handler(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    match table_series(&state.tables, &id) {
        Ok(resp) => HttpResponse::Ok().json(resp),
        Err(e) => config_error_response(e),
    }
}

/// GET /charts/histogram.svg?file=...
async fn histogram_svg_handler(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let file = match file_param(&query) {
        Ok(f) => f,
        Err(resp) => return resp,
    };
    let report = load_report(&state.settings.reports_dir.join(&file)).await;
    let title = format!("Clique Size Distribution - {}", report.test_case);
    match render_histogram(&report, &title) {
        Ok(svg) => HttpResponse::Ok().content_type(SVG_CONTENT_TYPE).body(svg),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

/// GET /charts/{id}.svg
async fn table_svg_handler(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    let table = match state.tables.find(&id) {
        Ok(t) => t,
        Err(e) => return config_error_response(e),
    };
    match render_comparison(table) {
        Ok(svg) => HttpResponse::Ok().content_type(SVG_CONTENT_TYPE).body(svg),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

async fn help_handler(state: web::Data<AppState>) -> impl Responder {
    let table_ids: Vec<&str> = state.tables.tables.iter().map(|t| t.id.as_str()).collect();
    HttpResponse::Ok().json(json!({
        "description": "API del dashboard de enumeración de cliques maximales: \
                        reportes parseados y series listas para graficar.",
        "endpoints": {
            "GET /reports": "lista los reportes .txt del directorio configurado",
            "GET /reports/parse?file=NAME":
                "parsea un reporte (reporte vacío + 'error' si no se puede leer)",
            "GET /reports/all": "parsea todos los reportes de forma concurrente",
            "GET /tables": "tablas de métricas configuradas",
            "GET /tables/{id}/series": "series agrupadas, plan de ticks y etiquetas de una tabla",
            "GET /charts/histogram.svg?file=NAME": "histograma SVG de un reporte",
            "GET /charts/{id}.svg": "gráfico de comparación SVG de una tabla"
        },
        "example": "/reports/parse?file=Tomita_WikiVote.txt",
        "tables": table_ids,
    }))
}

/// Rutas de la API. Las rutas fijas van antes que las de patrón.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/reports", web::get().to(reports_list_handler))
        .route("/reports/parse", web::get().to(reports_parse_handler))
        .route("/reports/all", web::get().to(reports_all_handler))
        .route("/tables", web::get().to(tables_list_handler))
        .route("/tables/{id}/series", web::get().to(table_series_handler))
        .route("/charts/histogram.svg", web::get().to(histogram_svg_handler))
        .route("/charts/{id}.svg", web::get().to(table_svg_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(state: AppState) -> std::io::Result<()> {
    let bind_addr = state.settings.bind.clone();
    let data = web::Data::new(state);
    log::info!("Iniciando servidor en http://{}", bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .configure(configure)
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
