use std::{fs, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use mstgen_graph::TypeGraph;
use mstgen_mobx::{DEFAULT_MODULE, Generator, RendererConfig, runtime_module_source};
use tracing::info;

use super::{UnwrapOrExit, load_config};
use crate::module_path::{relative_module_reference, resolve_module_reference};

#[derive(Args)]
pub struct GenerateCommand {
    /// Type graph JSON file
    pub graph: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Renderer configuration (defaults to ./mstgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override a renderer option, e.g. `-O converters=all-objects`
    #[arg(short = 'O', long = "option", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub options: Vec<(String, String)>,

    /// Also write the runtime `types` module here and import models from it
    #[arg(long, requires = "output")]
    pub runtime_module: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let graph = TypeGraph::open(&self.graph).unwrap_or_exit();
        let config = self.config().unwrap_or_exit();
        let config = self.with_module_reference(config)?;

        // Nothing is written unless generation succeeds
        let code = Generator::new(&graph, &config).generate().unwrap_or_exit();

        if let Some(path) = &self.runtime_module {
            fs::write(path, runtime_module_source(DEFAULT_MODULE))
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote runtime module");
        }

        match &self.output {
            Some(path) => {
                fs::write(path, code)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), "wrote models");
                println!("Generated: {}", path.display());
            }
            None => print!("{}", code),
        }

        Ok(())
    }

    /// The configuration file with `-O` overrides applied on top.
    fn config(&self) -> mstgen_mobx::Result<RendererConfig> {
        let mut config = load_config(self.config.as_deref())?;
        for (key, value) in &self.options {
            config.set(key, value)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Point the module reference at the runtime module, or at the local
    /// file it already names, from the output location. Output to stdout
    /// has no location, so a plain reference is left alone there.
    fn with_module_reference(&self, mut config: RendererConfig) -> Result<RendererConfig> {
        let Some(output) = &self.output else {
            return Ok(config);
        };
        config.module_reference = match &self.runtime_module {
            Some(runtime) => relative_module_reference(runtime, output)
                .wrap_err("Failed to locate the runtime module")?,
            None => resolve_module_reference(&config.module_reference, output)
                .wrap_err("Failed to resolve the module reference")?,
        };
        Ok(config)
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    Ok((key.trim().to_string(), value.trim().to_string()))
}
