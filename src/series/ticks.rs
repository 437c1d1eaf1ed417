use crate::error::ConfigError;
use crate::models::{Tick, TickPlan};
use super::format::tick_label;

/// Construye los ticks explícitos de un eje logarítmico.
///
/// Los candidatos no finitos se ignoran. Un `min` no positivo se reemplaza
/// por el candidato positivo más pequeño (una escala log no representa el 0);
/// si no hay ninguno es un error de configuración. Los candidatos dentro de
/// `[min, max]` (inclusive) se ordenan y se eliminan duplicados.
pub fn build_log_tick_plan(
    min: f64,
    max: f64,
    candidates: &[f64],
) -> Result<TickPlan, ConfigError> {
    if min.is_nan() || !max.is_finite() {
        return Err(ConfigError::InvalidRange { min, max });
    }

    let finite: Vec<f64> = candidates.iter().copied().filter(|v| v.is_finite()).collect();

    let min = if min > 0.0 {
        min
    } else {
        finite
            .iter()
            .copied()
            .filter(|v| *v > 0.0)
            .min_by(|a, b| a.total_cmp(b))
            .ok_or(ConfigError::NoPositiveMinimum { min })?
    };
    if min > max {
        return Err(ConfigError::InvalidRange { min, max });
    }

    let mut values: Vec<f64> = finite.into_iter().filter(|v| *v >= min && *v <= max).collect();
    values.sort_by(|a, b| a.total_cmp(b));
    values.dedup();

    let ticks = values.into_iter().map(|value| Tick { value, label: tick_label(value) }).collect();
    Ok(TickPlan { ticks })
}

/// Potencias de diez dentro de `[min, max]`. Vacío si `min` no es positivo.
pub fn decade_ticks(min: f64, max: f64) -> Vec<f64> {
    if !(min > 0.0) || !max.is_finite() || min > max {
        return Vec::new();
    }
    let lo = min.log10().floor() as i32;
    let hi = max.log10().ceil() as i32;
    let tolerance = 1e-9;

    (lo..=hi)
        .map(|k| if k < 0 { 1.0 / 10f64.powi(-k) } else { 10f64.powi(k) })
        .filter(|v| *v >= min * (1.0 - tolerance) && *v <= max * (1.0 + tolerance))
        .collect()
}
