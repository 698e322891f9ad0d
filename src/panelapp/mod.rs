pub mod defs;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use thiserror::Error;

use crate::config::LookupConfig;
use crate::panelapp::defs::GeneResponse;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Anything that can answer a per-gene panel query.
pub trait GeneSource {
    fn fetch_gene(&self, symbol: &str) -> Result<GeneResponse, LookupError>;
}

/// Blocking client for the PanelApp REST API.
#[derive(Debug, Clone)]
pub struct PanelAppClient {
    http: Client,
    base_url: String,
}

impl PanelAppClient {
    pub fn new(cfg: &LookupConfig) -> Result<Self, LookupError> {
        let http = Client::builder()
            .user_agent(cfg.user_agent.clone())
            .build()?;
        Ok(Self {
            http,
            base_url: cfg.base_url.clone(),
        })
    }

    pub fn gene_url(&self, symbol: &str) -> String {
        format!("{}genes/{}", self.base_url, symbol)
    }
}

impl GeneSource for PanelAppClient {
    fn fetch_gene(&self, symbol: &str) -> Result<GeneResponse, LookupError> {
        let url = self.gene_url(symbol);
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/panelapp/mod.rs"]
mod tests;
