use serde::Deserialize;

/// Address returned by the CEP endpoint.
///
/// Only the fields we display are kept; `service`, `location` and anything
/// else in the body is ignored. Fields may come back as `null` or be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

impl Address {
    /// the field value, or `None` when it is absent or blank
    pub fn non_empty(field: &Option<String>) -> Option<&str> {
        field.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
