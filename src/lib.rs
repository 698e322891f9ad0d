pub mod cli;
pub mod config;
pub mod input;
pub mod panelapp;
pub mod pipeline;
pub mod report;

pub mod prelude {
    pub use crate::config::LookupConfig;
    pub use crate::panelapp::{GeneSource, PanelAppClient};
    pub use crate::pipeline::stage1_inputs::LookupInputs;
    pub use crate::report::tsv::OutputRow;
}
