use crate::models::UNKNOWN_TEST_CASE;

/// Reglas (subcadena, etiqueta) evaluadas en orden; gana la primera.
/// Para un dataset nuevo basta con agregar una fila.
pub const TEST_CASE_RULES: &[(&str, &str)] = &[
    ("Email-Enron", "Email-Enron"),
    ("WikiVote", "WikiVote"),
    ("skitter", "Skitter"),
];

/// Último componente de una ruta o URL (acepta `/` y `\`).
pub fn file_name(source: &str) -> &str {
    source.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(source)
}

/// Infiere el dataset a partir del nombre del archivo de origen.
pub fn infer_test_case(source: &str) -> String {
    infer_with_rules(source, TEST_CASE_RULES)
}

pub fn infer_with_rules(source: &str, rules: &[(&str, &str)]) -> String {
    let name = file_name(source);
    rules
        .iter()
        .find(|(needle, _)| name.contains(needle))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| UNKNOWN_TEST_CASE.to_string())
}
