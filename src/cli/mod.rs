use clap::Parser;

mod run;

pub use run::LookupArgs;

#[derive(Parser, Debug)]
#[command(
    name = "panelapp-lookup",
    version,
    about = "Look up gene symbols in PanelApp and keep the associations for selected panels"
)]
pub struct Cli {
    #[command(flatten)]
    lookup: LookupArgs,
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        run::handle(self.lookup)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
