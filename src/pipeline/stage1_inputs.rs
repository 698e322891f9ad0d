use std::collections::HashSet;

use thiserror::Error;
use tracing::info;

use crate::input::{InputError, InputKind, resolve_list};

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("Bad format for gene symbols or panel IDs: {0}")]
    Input(#[from] InputError),
}

#[derive(Debug, Clone)]
pub struct LookupInputs {
    pub genes: Vec<String>,
    pub panels: Vec<String>,
    pub panel_set: HashSet<String>,
}

impl LookupInputs {
    pub fn new(genes: Vec<String>, panels: Vec<String>) -> Self {
        let panel_set = panels.iter().cloned().collect();
        Self {
            genes,
            panels,
            panel_set,
        }
    }

    pub fn wants_panel(&self, panel_id: &str) -> bool {
        self.panel_set.contains(panel_id)
    }
}

pub fn run_stage1(gene_arg: &str, panel_arg: &str) -> Result<LookupInputs, Stage1Error> {
    let genes = resolve_list(InputKind::Gene, gene_arg)?;
    let panels = resolve_list(InputKind::Panel, panel_arg)?;

    info!(genes = ?genes, "gene symbols");
    info!(panels = ?panels, "panelApp ids");
    info!(
        n_genes = genes.len(),
        n_panels = panels.len(),
        "genes and panels submitted"
    );

    Ok(LookupInputs::new(genes, panels))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_inputs.rs"]
mod tests;
