// Estructuras de datos principales

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Etiqueta usada cuando el nombre del archivo no coincide con ningún dataset conocido.
pub const UNKNOWN_TEST_CASE: &str = "Unknown";

/// Una fila de la tabla de distribución: tamaño de clique -> cantidad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliqueCount {
    pub size: u64,
    pub count: u64,
}

/// Línea `Edges: N | Nodes: M` que imprime ELS antes de correr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    pub nodes: u64,
    pub edges: u64,
}

/// Tiempos de ejecución recuperados del reporte, siempre en milisegundos.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionTiming {
    pub runs_ms: Vec<f64>,
    pub average_ms: Option<f64>,
}

/// Resultado canónico de parsear un reporte de enumeración de cliques maximales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReport {
    pub test_case: String,
    pub total_cliques: u64,
    pub largest_clique_size: u64,
    /// Ordenada estrictamente por `size`, sin tamaños repetidos.
    pub distribution: Vec<CliqueCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<ExecutionTiming>,
}

impl ParsedReport {
    /// Registro por defecto cuando no se pudo leer nada utilizable.
    pub fn empty() -> Self {
        ParsedReport {
            test_case: UNKNOWN_TEST_CASE.to_string(),
            total_cliques: 0,
            largest_clique_size: 0,
            distribution: Vec::new(),
            graph: None,
            timing: None,
        }
    }

    pub fn has_data(&self) -> bool {
        !self.distribution.is_empty()
    }

    /// Etiquetas del eje x (tamaños) y alturas de barra (cantidades) para el histograma.
    pub fn histogram(&self) -> (Vec<String>, Vec<u64>) {
        let labels = self.distribution.iter().map(|c| c.size.to_string()).collect();
        let counts = self.distribution.iter().map(|c| c.count).collect();
        (labels, counts)
    }
}

impl Default for ParsedReport {
    fn default() -> Self {
        ParsedReport::empty()
    }
}

/// Entidad con nombre (dataset o algoritmo) con un valor por métrica.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub metrics: HashMap<String, f64>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group { name: name.into(), metrics: HashMap::new() }
    }

    pub fn with_metric(mut self, key: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(key.into(), value);
        self
    }
}

/// Valores de una métrica a través de todos los grupos, en orden de grupo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSeries {
    pub metric: String,
    pub values: Vec<f64>,
}

/// Vista transpuesta: valores de un grupo a través del orden de métricas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSeries {
    pub group: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Ticks explícitos para un eje logarítmico, en orden ascendente.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TickPlan {
    pub ticks: Vec<Tick>,
}

impl TickPlan {
    pub fn values(&self) -> Vec<f64> {
        self.ticks.iter().map(|t| t.value).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}
