use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::input::{InputError, InputKind};

static GENE_LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.,-]+$").expect("gene list pattern compiles")
});
static PANEL_LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d,]+$").expect("panel list pattern compiles"));

/// Resolves a raw CLI value into an ordered list of identifiers.
///
/// A value ending in `.txt` that names an existing file is read one entry per
/// line and sorted. Anything else must match the inline pattern for `kind` and
/// is split on commas, keeping the given order.
pub fn resolve_list(kind: InputKind, raw: &str) -> Result<Vec<String>, InputError> {
    let path = Path::new(raw);
    if raw.ends_with(".txt") && path.is_file() {
        return read_list_file(kind, path);
    }

    if !inline_pattern(kind).is_match(raw) {
        return Err(InputError::InvalidFormat {
            kind,
            value: raw.to_string(),
        });
    }

    let entries: Vec<String> = raw
        .split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if entries.is_empty() {
        return Err(InputError::InvalidFormat {
            kind,
            value: raw.to_string(),
        });
    }
    Ok(entries)
}

pub fn read_list_file(kind: InputKind, path: &Path) -> Result<Vec<String>, InputError> {
    let text = fs::read_to_string(path)?;
    let mut entries: Vec<String> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if entries.is_empty() {
        return Err(InputError::EmptyFile {
            kind,
            path: path.to_path_buf(),
        });
    }
    entries.sort();
    Ok(entries)
}

fn inline_pattern(kind: InputKind) -> &'static Regex {
    match kind {
        InputKind::Gene => &GENE_LIST_RE,
        InputKind::Panel => &PANEL_LIST_RE,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/list.rs"]
mod tests;
