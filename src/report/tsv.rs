use crate::panelapp::defs::{GeneEntry, field_text};

pub const HEADER: &str = "Gene Symbol\tpanelApp Name\tpanelApp ID\tConfidence level\tPenetrance\tMode of inheritence\tevidence";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub gene_symbol: String,
    pub panel_name: String,
    pub panel_id: String,
    pub confidence_level: String,
    pub penetrance: String,
    pub mode_of_inheritance: String,
    pub evidence: String,
}

impl OutputRow {
    /// Gene symbol comes from the query, not the response body.
    pub fn from_entry(gene_symbol: &str, panel_id: String, entry: &GeneEntry) -> Self {
        Self {
            gene_symbol: gene_symbol.to_string(),
            panel_name: entry.panel.name.clone(),
            panel_id,
            confidence_level: field_text(entry.confidence_level.as_ref()),
            penetrance: field_text(entry.penetrance.as_ref()),
            mode_of_inheritance: field_text(entry.mode_of_inheritance.as_ref()),
            evidence: entry.evidence_joined(),
        }
    }

    pub fn to_line(&self) -> String {
        [
            self.gene_symbol.as_str(),
            self.panel_name.as_str(),
            self.panel_id.as_str(),
            self.confidence_level.as_str(),
            self.penetrance.as_str(),
            self.mode_of_inheritance.as_str(),
            self.evidence.as_str(),
        ]
        .join("\t")
    }
}

pub fn render_rows(rows: &[OutputRow]) -> String {
    let mut buf = String::new();
    buf.push_str(HEADER);
    buf.push('\n');
    for row in rows {
        buf.push_str(&row.to_line());
        buf.push('\n');
    }
    buf
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tsv.rs"]
mod tests;
