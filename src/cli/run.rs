use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::config::LookupConfig;
use crate::panelapp::{GeneSource, PanelAppClient};
use crate::pipeline::stage1_inputs::run_stage1;
use crate::pipeline::stage2_lookup::run_stage2;
use crate::pipeline::stage3_write::run_stage3;

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Path to a .txt gene list (one HGNC symbol per line), or comma-separated gene symbols
    #[arg(short = 'g', long = "gene-symbols")]
    pub(crate) gene_symbols: String,

    /// Path to a .txt panel ID list (one ID per line), or comma-separated panelApp IDs
    #[arg(short = 'p', long = "panel-ids")]
    pub(crate) panel_ids: String,
}

pub fn handle(args: LookupArgs) -> anyhow::Result<()> {
    let cfg = LookupConfig::from_env();
    info!(api = %cfg.base_url, out_dir = %cfg.out_dir.display(), "configuration");
    let client = PanelAppClient::new(&cfg)?;
    run_lookup(&args, &client, &cfg.out_dir)?;
    Ok(())
}

/// Runs the three stages against any gene source and returns the written file.
pub fn run_lookup<S>(
    args: &LookupArgs,
    source: &S,
    out_dir: &Path,
) -> anyhow::Result<PathBuf>
where
    S: GeneSource + ?Sized,
{
    let start = Instant::now();
    info!(stage = "stage1_inputs", "starting stage");
    let inputs = run_stage1(&args.gene_symbols, &args.panel_ids)?;
    info!(
        stage = "stage1_inputs",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage2_lookup", "starting stage");
    let lookup = run_stage2(source, &inputs);
    info!(
        stage = "stage2_lookup",
        elapsed_ms = start.elapsed().as_millis(),
        genes = lookup.summary.genes_queried,
        failed = lookup.summary.genes_failed,
        unknown = lookup.summary.genes_unknown,
        rows = lookup.summary.rows,
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage3_write", "starting stage");
    let path = run_stage3(lookup.rows, out_dir)?;
    info!(
        stage = "stage3_write",
        elapsed_ms = start.elapsed().as_millis(),
        path = %path.display(),
        "finished stage"
    );
    Ok(path)
}
