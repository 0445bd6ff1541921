//! Structural checks run before a graph is handed out.

use std::collections::HashSet;

use crate::{GraphError, TopLevel, TypeId, TypeKind, TypeNode};

/// Check a set of nodes and top-levels, returning the first problem found.
pub(crate) fn validate(nodes: &[TypeNode], top_levels: &[TopLevel]) -> Result<(), GraphError> {
    let in_range = |id: TypeId| id.index() < nodes.len();

    for (i, node) in nodes.iter().enumerate() {
        let from = TypeId(i as u32);
        for to in node.kind.children() {
            if !in_range(to) {
                return Err(GraphError::DanglingReference { from, to });
            }
        }
        match &node.kind {
            TypeKind::Union { members } if members.is_empty() => {
                return Err(GraphError::EmptyUnion(from));
            }
            TypeKind::Enum { cases } if cases.is_empty() => {
                return Err(GraphError::EmptyEnum(from));
            }
            _ => {}
        }
    }

    let mut seen = HashSet::new();
    for top in top_levels {
        if !in_range(top.ty) {
            return Err(GraphError::DanglingTopLevel {
                name: top.name.clone(),
                to: top.ty,
            });
        }
        if !seen.insert(top.name.as_str()) {
            return Err(GraphError::DuplicateTopLevel(top.name.clone()));
        }
    }

    if let Some(id) = find_unmediated_cycle(nodes) {
        return Err(GraphError::UnmediatedCycle(id));
    }

    Ok(())
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Find a node on a reference cycle made only of non-class nodes.
///
/// Classes break cycles because their declarations can be referenced lazily;
/// a cycle through arrays, maps and unions alone has no finite rendering.
fn find_unmediated_cycle(nodes: &[TypeNode]) -> Option<TypeId> {
    let mut marks = vec![Mark::Unvisited; nodes.len()];

    for start in 0..nodes.len() {
        if marks[start] != Mark::Unvisited || is_class(&nodes[start]) {
            continue;
        }
        // Iterative DFS: (node, next child index)
        let mut stack = vec![(start, 0usize)];
        marks[start] = Mark::InProgress;

        while let Some(frame) = stack.last_mut() {
            let (current, next) = *frame;
            let children = nodes[current].kind.children();
            if let Some(child) = children.get(next) {
                frame.1 += 1;
                let child = child.index();
                if is_class(&nodes[child]) {
                    continue;
                }
                match marks[child] {
                    Mark::InProgress => return Some(TypeId(child as u32)),
                    Mark::Unvisited => {
                        marks[child] = Mark::InProgress;
                        stack.push((child, 0));
                    }
                    Mark::Done => {}
                }
            } else {
                marks[current] = Mark::Done;
                stack.pop();
            }
        }
    }

    None
}

fn is_class(node: &TypeNode) -> bool {
    matches!(node.kind, TypeKind::Class { .. })
}

#[cfg(test)]
mod tests {
    use indexmap::{IndexMap, IndexSet};

    use super::*;
    use crate::ClassProperty;

    fn node(kind: TypeKind) -> TypeNode {
        TypeNode::new(kind)
    }

    fn top(name: &str, ty: u32) -> TopLevel {
        TopLevel {
            name: name.to_string(),
            ty: TypeId(ty),
        }
    }

    #[test]
    fn test_valid_graph() {
        let nodes = vec![
            node(TypeKind::String),
            node(TypeKind::Array { items: TypeId(0) }),
        ];
        assert_eq!(validate(&nodes, &[top("Names", 1)]), Ok(()));
    }

    #[test]
    fn test_dangling_reference() {
        let nodes = vec![node(TypeKind::Array { items: TypeId(7) })];
        assert_eq!(
            validate(&nodes, &[]),
            Err(GraphError::DanglingReference {
                from: TypeId(0),
                to: TypeId(7)
            })
        );
    }

    #[test]
    fn test_dangling_top_level() {
        let nodes = vec![node(TypeKind::String)];
        assert!(matches!(
            validate(&nodes, &[top("Root", 4)]),
            Err(GraphError::DanglingTopLevel { .. })
        ));
    }

    #[test]
    fn test_empty_union_and_enum() {
        let union = vec![node(TypeKind::Union { members: vec![] })];
        assert_eq!(
            validate(&union, &[]),
            Err(GraphError::EmptyUnion(TypeId(0)))
        );

        let enumeration = vec![node(TypeKind::Enum {
            cases: IndexSet::new(),
        })];
        assert_eq!(
            validate(&enumeration, &[]),
            Err(GraphError::EmptyEnum(TypeId(0)))
        );
    }

    #[test]
    fn test_duplicate_top_level() {
        let nodes = vec![node(TypeKind::String)];
        assert_eq!(
            validate(&nodes, &[top("A", 0), top("A", 0)]),
            Err(GraphError::DuplicateTopLevel("A".to_string()))
        );
    }

    #[test]
    fn test_cycle_through_class_is_allowed() {
        let mut properties = IndexMap::new();
        properties.insert("children".to_string(), ClassProperty::new(TypeId(1)));
        let nodes = vec![
            node(TypeKind::Class { properties }),
            node(TypeKind::Array { items: TypeId(0) }),
        ];
        assert_eq!(validate(&nodes, &[top("Tree", 0)]), Ok(()));
    }

    #[test]
    fn test_cycle_without_class_is_rejected() {
        let nodes = vec![
            node(TypeKind::Union {
                members: vec![TypeId(2), TypeId(1)],
            }),
            node(TypeKind::Array { items: TypeId(0) }),
            node(TypeKind::Null),
        ];
        assert!(matches!(
            validate(&nodes, &[]),
            Err(GraphError::UnmediatedCycle(_))
        ));
    }

    #[test]
    fn test_self_referencing_array() {
        let nodes = vec![node(TypeKind::Array { items: TypeId(0) })];
        assert_eq!(
            validate(&nodes, &[]),
            Err(GraphError::UnmediatedCycle(TypeId(0)))
        );
    }
}
