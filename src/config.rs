use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://panelapp.genomicsengland.co.uk/api/v1/";
pub const DEFAULT_RESULTS_DIR: &str = "results";

pub const API_URL_ENV: &str = "PANELAPP_API_URL";
pub const RESULTS_DIR_ENV: &str = "PANELAPP_RESULTS_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Service root; always ends with `/` so `genes/{symbol}` can be appended.
    pub base_url: String,
    pub out_dir: PathBuf,
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            out_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            user_agent: default_user_agent(),
        }
    }
}

impl LookupConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            cfg.base_url = normalize_base_url(url.trim());
        }
        if let Some(dir) = lookup(RESULTS_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            cfg.out_dir = PathBuf::from(dir.trim());
        }
        cfg
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = normalize_base_url(url);
        self
    }

    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }
}

pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn normalize_base_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
