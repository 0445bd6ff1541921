use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mstgen_graph::{TypeGraph, TypeKind};
use mstgen_mobx::Generator;

use super::{UnwrapOrExit, load_config};

#[derive(Args)]
pub struct CheckCommand {
    /// Type graph JSON file
    pub graph: PathBuf,

    /// Renderer configuration (defaults to ./mstgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let graph = TypeGraph::open(&self.graph).unwrap_or_exit();
        let config = load_config(self.config.as_deref()).unwrap_or_exit();

        // Rendering in memory also checks that every named type gets a name
        Generator::new(&graph, &config).generate().unwrap_or_exit();

        println!("✓ {} is valid\n", self.graph.display());

        let (classes, enums, unions) = count_named(&graph);
        println!("  {} types", graph.len());
        println!("  {} classes, {} enums, {} unions", classes, enums, unions);

        let top_levels = graph.top_levels();
        println!(
            "\n  {} top-level{}:",
            top_levels.len(),
            if top_levels.len() == 1 { "" } else { "s" }
        );
        for top in top_levels {
            println!("    {} ({})", top.name, graph.kind(top.ty).name());
        }

        Ok(())
    }
}

fn count_named(graph: &TypeGraph) -> (usize, usize, usize) {
    graph
        .iter()
        .fold((0, 0, 0), |(classes, enums, unions), (_, node)| match node.kind {
            TypeKind::Class { .. } => (classes + 1, enums, unions),
            TypeKind::Enum { .. } => (classes, enums + 1, unions),
            TypeKind::Union { .. } => (classes, enums, unions + 1),
            _ => (classes, enums, unions),
        })
}

#[cfg(test)]
mod tests {
    use mstgen_graph::GraphBuilder;

    use super::*;

    #[test]
    fn test_count_named() {
        let mut b = GraphBuilder::new();
        let string = b.string();
        let null = b.null();
        b.class("A");
        b.class("B");
        b.enumeration("E", ["x"]);
        b.union([string, null]);
        let graph = b.build().unwrap();
        assert_eq!(count_named(&graph), (2, 1, 1));
    }
}
