mod check;
mod generate;
mod runtime;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use generate::GenerateCommand;
use mstgen_mobx::RendererConfig;
use runtime::RuntimeCommand;

/// Configuration file picked up from the working directory.
const DEFAULT_CONFIG: &str = "mstgen.toml";

/// Print a diagnostic with its source snippet and exit with status 1.
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for Result<T, Box<E>>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|err| {
            eprintln!("{:?}", miette::Report::new(*err));
            std::process::exit(1)
        })
    }
}

/// Load the renderer configuration: the given file, else `mstgen.toml` in
/// the working directory when present, else defaults.
pub(crate) fn load_config(path: Option<&Path>) -> mstgen_mobx::Result<RendererConfig> {
    let discovered = PathBuf::from(DEFAULT_CONFIG);
    match path {
        Some(path) => RendererConfig::open(path),
        None if discovered.is_file() => RendererConfig::open(discovered),
        None => Ok(RendererConfig::default()),
    }
}

#[derive(Parser)]
#[command(name = "mstgen", version, about = "Generate mobx-state-tree models from a JSON type graph")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> eyre::Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Runtime(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a models file from a type graph
    Generate(GenerateCommand),

    /// Validate a type graph and renderer configuration without writing anything
    Check(CheckCommand),

    /// Write the runtime `types` module with the timestamp-normalizing Date
    Runtime(RuntimeCommand),
}
