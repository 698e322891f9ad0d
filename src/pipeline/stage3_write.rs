use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::report::tsv::{OutputRow, render_rows};

#[derive(Debug, Error)]
pub enum Stage3Error {
    #[error("cannot write results to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn output_file_name(now: &DateTime<Local>) -> String {
    format!("panelApp_{}.tsv", now.format("%Y_%m_%d_%H_%M_%S"))
}

pub fn run_stage3(rows: Vec<OutputRow>, out_dir: &Path) -> Result<PathBuf, Stage3Error> {
    run_stage3_at(rows, out_dir, Local::now())
}

pub fn run_stage3_at(
    rows: Vec<OutputRow>,
    out_dir: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf, Stage3Error> {
    std::fs::create_dir_all(out_dir).map_err(|source| Stage3Error::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let path = out_dir.join(output_file_name(&now));
    let payload = render_rows(&rows);
    std::fs::write(&path, payload).map_err(|source| Stage3Error::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_write.rs"]
mod tests;
