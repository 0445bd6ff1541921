use std::{fs, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use mstgen_mobx::{DEFAULT_MODULE, runtime_module_source};
use tracing::info;

#[derive(Args)]
pub struct RuntimeCommand {
    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Module the base `types` namespace is imported from
    #[arg(long, default_value = DEFAULT_MODULE)]
    pub base: String,
}

impl RuntimeCommand {
    /// Run the runtime command
    pub fn run(&self) -> Result<()> {
        let source = runtime_module_source(&self.base);
        match &self.output {
            Some(path) => {
                fs::write(path, source)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), "wrote runtime module");
                println!("Generated: {}", path.display());
            }
            None => print!("{}", source),
        }
        Ok(())
    }
}
