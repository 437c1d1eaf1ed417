//! Tablas de métricas estáticas.
//!
//! Se escriben a mano como JSON (ver `src/datafiles/metric_tables.json`):
//!
//! ```json
//! {
//!   "id": "density",
//!   "metrics": [{ "key": "edges", "label": "Edge" }],
//!   "variants": [{ "key": "exact", "label": "Exact" }],
//!   "scale": { "min": 0.1, "max": 100000, "ticks": [0.1, 1, 10] },
//!   "groups": [{ "name": "As-733", "metrics": { "edges": { "exact": 0.5 } } }]
//! }
//! ```
//!
//! Con `variants`, cada grupo se expande a un `Group` por variante llamado
//! `"<grupo> (<variante>)"`. Sin `variants`, cada métrica es un número.

use std::collections::HashMap;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::ConfigError;
use crate::models::{Group, GroupSeries, MetricSeries, TickPlan};
use super::{build_group_series, build_grouped_series, build_log_tick_plan, decade_ticks};

const EMBEDDED_TABLES: &str = include_str!("../datafiles/metric_tables.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelledKey {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Plain(f64),
    Variants(HashMap<String, f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableGroup {
    pub name: String,
    pub metrics: HashMap<String, MetricValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleConfig {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub ticks: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTable {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub axis_label: String,
    #[serde(default)]
    pub category_label: String,
    pub metrics: Vec<LabelledKey>,
    #[serde(default)]
    pub variants: Vec<LabelledKey>,
    pub scale: ScaleConfig,
    pub groups: Vec<TableGroup>,
}

impl MetricTable {
    pub fn metric_order(&self) -> Vec<String> {
        self.metrics.iter().map(|m| m.key.clone()).collect()
    }

    pub fn metric_labels(&self) -> Vec<String> {
        self.metrics.iter().map(|m| m.label.clone()).collect()
    }

    /// Expande la tabla a grupos planos. Una variante ausente simplemente no
    /// se inserta; la validación posterior la reporta como métrica faltante.
    pub fn groups(&self) -> Vec<Group> {
        if self.variants.is_empty() {
            return self
                .groups
                .iter()
                .map(|tg| {
                    let mut g = Group::new(tg.name.clone());
                    for (key, value) in &tg.metrics {
                        if let MetricValue::Plain(v) = value {
                            g.metrics.insert(key.clone(), *v);
                        }
                    }
                    g
                })
                .collect();
        }

        let mut out = Vec::with_capacity(self.groups.len() * self.variants.len());
        for tg in &self.groups {
            for variant in &self.variants {
                let mut g = Group::new(format!("{} ({})", tg.name, variant.label));
                for (key, value) in &tg.metrics {
                    let v = match value {
                        MetricValue::Plain(v) => Some(*v),
                        MetricValue::Variants(by_variant) => by_variant.get(&variant.key).copied(),
                    };
                    if let Some(v) = v {
                        g.metrics.insert(key.clone(), v);
                    }
                }
                out.push(g);
            }
        }
        out
    }

    pub fn grouped_series(&self) -> Result<Vec<MetricSeries>, ConfigError> {
        build_grouped_series(&self.groups(), &self.metric_order())
    }

    pub fn group_series(&self) -> Result<Vec<GroupSeries>, ConfigError> {
        build_group_series(&self.groups(), &self.metric_order())
    }

    /// Plan de ticks de la tabla; sin ticks escritos se usan las décadas del rango.
    pub fn tick_plan(&self) -> Result<TickPlan, ConfigError> {
        let candidates = if self.scale.ticks.is_empty() {
            decade_ticks(self.scale.min, self.scale.max)
        } else {
            self.scale.ticks.clone()
        };
        build_log_tick_plan(self.scale.min, self.scale.max, &candidates)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTables {
    pub tables: Vec<MetricTable>,
}

impl MetricTables {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Tablas de densidad y tiempo de ejecución que vienen con el crate.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_TABLES)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::TablesFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Usa el archivo indicado si existe en la configuración; si no, las tablas embebidas.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::embedded(),
        }
    }

    pub fn find(&self, id: &str) -> Result<&MetricTable, ConfigError> {
        self.tables
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ConfigError::UnknownTable(id.to_string()))
    }

    /// Valida todas las tablas (series y ticks) de una vez, para fallar al arrancar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for table in &self.tables {
            table.grouped_series()?;
            table.tick_plan()?;
        }
        Ok(())
    }
}
