use tracing::{debug, warn};

use crate::panelapp::GeneSource;
use crate::panelapp::defs::GeneResponse;
use crate::pipeline::stage1_inputs::LookupInputs;
use crate::report::tsv::OutputRow;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupSummary {
    pub genes_queried: usize,
    pub genes_failed: usize,
    pub genes_unknown: usize,
    pub rows: usize,
}

#[derive(Debug, Clone)]
pub struct LookupCtx {
    pub rows: Vec<OutputRow>,
    pub summary: LookupSummary,
}

/// Queries every gene in order and keeps associations whose panel was
/// requested. A failing gene is logged and skipped.
pub fn run_stage2<S>(source: &S, inputs: &LookupInputs) -> LookupCtx
where
    S: GeneSource + ?Sized,
{
    let mut rows = Vec::new();
    let mut summary = LookupSummary::default();

    for gene in &inputs.genes {
        summary.genes_queried += 1;
        let response = match source.fetch_gene(gene) {
            Ok(response) => response,
            Err(err) => {
                warn!(gene = %gene, error = %err, "no panelApp answer for gene");
                summary.genes_failed += 1;
                continue;
            }
        };

        if response.count == 0 {
            warn!(gene = %gene, "panelApp does not know gene; check HGNC validity");
            summary.genes_unknown += 1;
        }

        let matched = matching_rows(gene, &response, inputs);
        debug!(
            gene = %gene,
            associations = response.results.len(),
            matched = matched.len()
        );
        rows.extend(matched);
    }

    summary.rows = rows.len();
    LookupCtx { rows, summary }
}

pub fn matching_rows(gene: &str, response: &GeneResponse, inputs: &LookupInputs) -> Vec<OutputRow> {
    response
        .results
        .iter()
        .filter_map(|entry| {
            let panel_id = entry.panel_id()?;
            inputs
                .wants_panel(&panel_id)
                .then(|| OutputRow::from_entry(gene, panel_id, entry))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_lookup.rs"]
mod tests;
