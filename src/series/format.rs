/// Etiqueta de magnitud compartida por todos los gráficos:
/// - `0` exacto -> `"0"`
/// - `0 < |v| < 0.01` -> exponencial con un decimal (`4.1e-3`)
/// - resto -> punto fijo con dos decimales (`2.50`)
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() < 0.01 {
        return format!("{:.1e}", value);
    }
    format!("{:.2}", value)
}

/// Representación decimal simple para etiquetas de ticks (`0.1`, `1`, `30000`).
pub fn tick_label(value: f64) -> String {
    format!("{}", value)
}
