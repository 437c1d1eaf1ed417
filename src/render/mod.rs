//! Renderizado SVG de los gráficos del dashboard con [`plotters`].
//!
//! Consume la salida del parser y del normalizador: histograma de cliques por
//! tamaño y comparación agrupada en escala logarítmica. Los ticks del eje y
//! vienen del `TickPlan` de la tabla, no de la inferencia de plotters.

use std::sync::OnceLock;
use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;
use crate::error::ConfigError;
use crate::models::{GroupSeries, ParsedReport, TickPlan};
use crate::series::{MetricTable, format_value};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to draw chart: {0}")]
    Drawing(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

type Result<T> = core::result::Result<T, RenderError>;

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Drawing(e.to_string())
}

/// Paleta y tamaños compartidos por todos los gráficos.
#[derive(Debug, Clone)]
pub struct ChartTheme {
    pub palette: Vec<RGBColor>,
    pub histogram_bar: RGBColor,
    pub size: (u32, u32),
}

impl Default for ChartTheme {
    fn default() -> Self {
        ChartTheme {
            palette: vec![
                RGBColor(54, 162, 235),
                RGBColor(255, 99, 132),
                RGBColor(75, 192, 192),
                RGBColor(255, 206, 86),
                RGBColor(153, 102, 255),
            ],
            histogram_bar: RGBColor(99, 102, 241),
            size: (900, 500),
        }
    }
}

const AXIS_PADDING: f64 = 1.5;

static THEME: OnceLock<ChartTheme> = OnceLock::new();

/// Configuración global de gráficos. Idempotente: sólo la primera llamada la crea.
pub fn init() -> &'static ChartTheme {
    THEME.get_or_init(ChartTheme::default)
}

/// Etiqueta de categoría para posiciones enteras del eje x.
fn category_label(labels: &[String], x: f64) -> String {
    let i = x.round();
    if (x - i).abs() > 1e-6 || i < 0.0 {
        return String::new();
    }
    labels.get(i as usize).cloned().unwrap_or_default()
}

fn tick_plan_label(plan: &TickPlan, y: f64) -> String {
    plan.ticks
        .iter()
        .find(|t| ((t.value - y) / t.value).abs() < 1e-6)
        .map(|t| t.label.clone())
        .unwrap_or_default()
}

/// Histograma de la distribución de tamaños. Sin datos dibuja un aviso.
pub fn render_histogram(report: &ParsedReport, title: &str) -> Result<String> {
    let theme = init();
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, theme.size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        if report.has_data() {
            draw_histogram(&root, report, title, theme)?;
        } else {
            draw_no_data(&root, title, theme)?;
        }
        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}

fn draw_no_data(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    title: &str,
    theme: &ChartTheme,
) -> Result<()> {
    let (w, h) = theme.size;
    root.draw(&Text::new(title.to_string(), (20, 20), ("sans-serif", 20).into_font()))
        .map_err(draw_err)?;
    root.draw(&Text::new(
        "No data available".to_string(),
        (w as i32 / 2 - 80, h as i32 / 2),
        ("sans-serif", 18).into_font().color(&RED),
    ))
    .map_err(draw_err)?;
    Ok(())
}

fn draw_histogram(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    report: &ParsedReport,
    title: &str,
    theme: &ChartTheme,
) -> Result<()> {
    let (labels, counts) = report.histogram();
    let n = labels.len() as f64;
    let y_max = counts.iter().copied().max().unwrap_or(1).max(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 20))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5f64..(n - 0.5), 0f64..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|x| category_label(&labels, *x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .x_desc("Clique Size")
        .y_desc("Number of Cliques")
        .draw()
        .map_err(draw_err)?;

    let bar = theme.histogram_bar.mix(0.5);
    chart
        .draw_series(counts.iter().enumerate().map(|(i, c)| {
            let x = i as f64;
            Rectangle::new([(x - 0.5, 0.0), (x + 0.5, *c as f64)], bar.filled())
        }))
        .map_err(draw_err)?
        .label("Number of Cliques")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], bar.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)?;
    Ok(())
}

/// Gráfico de barras agrupadas (una barra por grupo dentro de cada métrica)
/// en escala logarítmica. Los ceros se dejan sin barra pero con etiqueta.
pub fn render_comparison(table: &MetricTable) -> Result<String> {
    let series = table.group_series()?;
    let plan = table.tick_plan()?;
    let categories = table.metric_labels();
    let variants = table.variants.len().max(1);
    render_grouped_log_bars(
        &table.title,
        &table.axis_label,
        &categories,
        &series,
        &plan,
        variants,
    )
}

pub fn render_grouped_log_bars(
    title: &str,
    axis_label: &str,
    categories: &[String],
    series: &[GroupSeries],
    plan: &TickPlan,
    variants: usize,
) -> Result<String> {
    let theme = init();
    let (y_min, y_max) = match (plan.ticks.first(), plan.ticks.last()) {
        (Some(lo), Some(hi)) if hi.value > lo.value => (lo.value, hi.value),
        (Some(lo), _) => (lo.value, lo.value * 10.0),
        _ => (0.1, 10.0),
    };
    let y_top = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(y_max, f64::max);
    // los ticks de los extremos quedan dentro del eje
    let (axis_lo, axis_hi) = (y_min / AXIS_PADDING, y_top * AXIS_PADDING);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, theme.size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let m = categories.len() as f64;
        let y_axis = (axis_lo..axis_hi).log_scale().with_key_points(plan.values());
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 18))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5f64..(m - 0.5), y_axis)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(categories.len())
            .x_label_formatter(&|x| category_label(categories, *x))
            .y_label_formatter(&|y| tick_plan_label(plan, *y))
            .y_desc(axis_label)
            .draw()
            .map_err(draw_err)?;

        // líneas guía en los ticks explícitos
        chart
            .draw_series(plan.ticks.iter().map(|t| {
                PathElement::new(vec![(-0.5, t.value), (m - 0.5, t.value)], BLACK.mix(0.15))
            }))
            .map_err(draw_err)?;

        let groups = series.len().max(1) as f64;
        let slot = 0.8 / groups;
        for (gi, s) in series.iter().enumerate() {
            let base = theme.palette[(gi / variants) % theme.palette.len()];
            let alpha = if gi % variants == 0 { 0.8 } else { 0.4 };
            let color = base.mix(alpha);
            let x_offset = -0.4 + slot * gi as f64;

            chart
                .draw_series(s.values.iter().enumerate().filter(|(_, v)| **v > axis_lo).map(
                    |(ci, v)| {
                        let x0 = ci as f64 + x_offset;
                        Rectangle::new([(x0, axis_lo), (x0 + slot, *v)], color.filled())
                    },
                ))
                .map_err(draw_err)?
                .label(s.group.clone())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                });

            chart
                .draw_series(s.values.iter().enumerate().map(|(ci, v)| {
                    let x = ci as f64 + x_offset;
                    let y = v.max(axis_lo);
                    Text::new(format_value(*v), (x, y), ("sans-serif", 9).into_font())
                }))
                .map_err(draw_err)?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}
