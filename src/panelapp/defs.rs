use serde::Deserialize;

/// Body of `GET genes/{symbol}`. Only the fields the lookup reads are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneResponse {
    pub count: u64,
    #[serde(default)]
    pub results: Vec<GeneEntry>,
}

/// One gene-panel association.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneEntry {
    pub panel: PanelRef,
    #[serde(default)]
    pub confidence_level: Option<FieldValue>,
    #[serde(default)]
    pub penetrance: Option<FieldValue>,
    #[serde(default)]
    pub mode_of_inheritance: Option<FieldValue>,
    #[serde(default)]
    pub evidence: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelRef {
    #[serde(default)]
    pub id: Option<FieldValue>,
    pub name: String,
}

/// Scalar the service sends as either a JSON string or number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(v) => write!(f, "{v}"),
            FieldValue::Integer(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl GeneEntry {
    pub fn panel_id(&self) -> Option<String> {
        self.panel.id.as_ref().map(FieldValue::to_string)
    }

    pub fn evidence_joined(&self) -> String {
        self.evidence.as_deref().unwrap_or_default().join(",")
    }
}

pub fn field_text(value: Option<&FieldValue>) -> String {
    value.map(FieldValue::to_string).unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/src_inline/panelapp/defs.rs"]
mod tests;
