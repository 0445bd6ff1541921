//! Declaration order.

use std::collections::HashSet;

use mstgen_graph::{TypeGraph, TypeId, TypeKind};

/// Whether a type gets a declaration of its own.
pub fn is_declarable(kind: &TypeKind, declare_unions_separately: bool) -> bool {
    match kind {
        TypeKind::Class { .. } | TypeKind::Enum { .. } => true,
        TypeKind::Union { .. } => declare_unions_separately,
        _ => false,
    }
}

/// Whether a type can be referenced before its declaration has been emitted.
///
/// Classes are wrapped in a late reference and enums have no dependencies,
/// so both can be. Unions cannot; a union not yet declared is inlined.
pub fn can_be_forward_declared(kind: &TypeKind) -> bool {
    matches!(kind, TypeKind::Class { .. } | TypeKind::Enum { .. })
}

/// Order declarable types so dependencies come before their dependents.
///
/// Depth-first post-order from each top-level in turn, then from every
/// remaining node in graph order. Cycles (always through a class) are cut
/// at the first revisit.
pub fn declaration_order(graph: &TypeGraph, declare_unions_separately: bool) -> Vec<TypeId> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();

    let roots = graph
        .top_levels()
        .iter()
        .map(|t| t.ty)
        .chain(graph.iter().map(|(id, _)| id));
    for root in roots {
        visit(graph, root, declare_unions_separately, &mut visited, &mut order);
    }
    order
}

fn visit(
    graph: &TypeGraph,
    id: TypeId,
    declare_unions_separately: bool,
    visited: &mut HashSet<TypeId>,
    order: &mut Vec<TypeId>,
) {
    if !visited.insert(id) {
        return;
    }
    let kind = graph.kind(id);
    for child in kind.children() {
        visit(graph, child, declare_unions_separately, visited, order);
    }
    if is_declarable(kind, declare_unions_separately) {
        order.push(id);
    }
}
