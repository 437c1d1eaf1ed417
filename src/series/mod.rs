//! Módulo `series`: normalización de tablas numéricas multi-dataset/multi-métrica
//! a series listas para gráficos de barras con escala logarítmica.
//!
//! Submódulos:
//! - `format`: etiqueta de magnitud común a todos los gráficos
//! - `ticks`: plan de ticks explícito para ejes logarítmicos
//! - `tables`: tablas de métricas estáticas (JSON) y su conversión a `Group`

pub mod format;
pub mod tables;
pub mod ticks;

pub use format::{format_value, tick_label};
pub use tables::{MetricTable, MetricTables};
pub use ticks::{build_log_tick_plan, decade_ticks};

use crate::error::ConfigError;
use crate::models::{Group, GroupSeries, MetricSeries};

/// Verifica que cada grupo tenga valor para cada métrica pedida.
/// Un valor faltante es un error de autoría, nunca un cero implícito.
pub fn validate_groups<S: AsRef<str>>(
    groups: &[Group],
    metric_order: &[S],
) -> Result<(), ConfigError> {
    for group in groups {
        for key in metric_order {
            if !group.metrics.contains_key(key.as_ref()) {
                return Err(ConfigError::MissingMetric {
                    group: group.name.clone(),
                    metric: key.as_ref().to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Una serie por métrica (en orden de `metric_order`) con los valores de
/// cada grupo en orden de grupo.
pub fn build_grouped_series<S: AsRef<str>>(
    groups: &[Group],
    metric_order: &[S],
) -> Result<Vec<MetricSeries>, ConfigError> {
    validate_groups(groups, metric_order)?;
    Ok(metric_order
        .iter()
        .map(|key| MetricSeries {
            metric: key.as_ref().to_string(),
            values: groups.iter().map(|g| g.metrics[key.as_ref()]).collect(),
        })
        .collect())
}

/// Vista transpuesta: una serie por grupo con sus valores en orden de métrica.
/// Es la forma de los gráficos de comparación (una barra por dataset).
pub fn build_group_series<S: AsRef<str>>(
    groups: &[Group],
    metric_order: &[S],
) -> Result<Vec<GroupSeries>, ConfigError> {
    validate_groups(groups, metric_order)?;
    Ok(groups
        .iter()
        .map(|g| GroupSeries {
            group: g.name.clone(),
            values: metric_order.iter().map(|key| g.metrics[key.as_ref()]).collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<Group> {
        vec![
            Group::new("As-733").with_metric("edges", 0.5).with_metric("triangles", 7.0),
            Group::new("Yeast").with_metric("edges", 0.0).with_metric("triangles", 0.636364),
        ]
    }

    #[test]
    fn series_follow_metric_then_group_order() {
        let series = build_grouped_series(&groups(), &["triangles", "edges"]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].metric, "triangles");
        assert_eq!(series[0].values, vec![7.0, 0.636364]);
        assert_eq!(series[1].values, vec![0.5, 0.0]);
    }

    #[test]
    fn transposed_series() {
        let series = build_group_series(&groups(), &["edges", "triangles"]).unwrap();
        assert_eq!(series[1].group, "Yeast");
        assert_eq!(series[1].values, vec![0.0, 0.636364]);
    }

    #[test]
    fn missing_metric_fails_fast() {
        let mut gs = groups();
        gs[1].metrics.remove("triangles");
        match build_grouped_series(&gs, &["edges", "triangles"]) {
            Err(ConfigError::MissingMetric { group, metric }) => {
                assert_eq!(group, "Yeast");
                assert_eq!(metric, "triangles");
            }
            other => panic!("expected MissingMetric, got {:?}", other),
        }
    }

    #[test]
    fn empty_inputs() {
        let empty: Vec<Group> = Vec::new();
        let series = build_grouped_series(&empty, &["edges"]).unwrap();
        assert_eq!(series[0].values, Vec::<f64>::new());
        assert!(build_grouped_series::<&str>(&groups(), &[]).unwrap().is_empty());
    }
}
