//! Hierarchy reconstruction
//!
//! The service returns tasks and projects as flat lists where each item may
//! name a parent. [`build_forest`] turns such a list back into nested
//! [`Node`]s.
//!
//! Guarantees, for input with unique ids:
//! - every item appears exactly once in the result
//! - an item whose parent is in the batch is a child of that parent
//! - an item whose parent is missing from the batch (or is itself) is a root
//! - siblings keep their relative input order
//!
//! Parent chains that loop back on themselves never reach a root. The first
//! member of such a loop, in input order, is promoted to a root and the edge
//! back into it is dropped.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Anything that can be placed in a hierarchy
pub trait Hierarchical {
    fn id(&self) -> &str;
    fn parent_id(&self) -> Option<&str>;
}

/// An item together with its children
///
/// Serializes as the item's own fields plus a `children` array, which is
/// always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<T> {
    #[serde(flatten)]
    pub item: T,
    pub children: Vec<Node<T>>,
}

impl<T> Node<T> {
    pub fn leaf(item: T) -> Self {
        Self {
            item,
            children: Vec::new(),
        }
    }

    /// Number of items in this subtree, including this one
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }
}

/// Ordered root nodes
pub type Forest<T> = Vec<Node<T>>;

/// Rebuild the forest implied by the items' parent references
pub fn build_forest<T: Hierarchical>(items: Vec<T>) -> Forest<T> {
    // First pass: index positions by id. The first occurrence wins.
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        index.entry(item.id()).or_insert(position);
    }

    // Second pass: attach each item to its parent, in input order.
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); items.len()];
    let mut roots = Vec::new();
    for (position, item) in items.iter().enumerate() {
        match item.parent_id().and_then(|parent| index.get(parent)) {
            Some(&parent) if parent != position => children[parent].push(position),
            _ => roots.push(position),
        }
    }
    drop(index);

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let mut forest = Vec::with_capacity(roots.len());
    for root in roots {
        if let Some(node) = assemble(root, &children, &mut slots) {
            forest.push(node);
        }
    }

    // Whatever is left sits on a parent cycle.
    for position in 0..slots.len() {
        if let Some(node) = assemble(position, &children, &mut slots) {
            forest.push(node);
        }
    }

    forest
}

/// Move the item at `position` and its unclaimed descendants into a node
///
/// Depth-first with an explicit work list, so chain length is bounded by
/// memory rather than by the call stack.
fn assemble<T>(
    position: usize,
    children: &[Vec<usize>],
    slots: &mut [Option<T>],
) -> Option<Node<T>> {
    let item = slots[position].take()?;
    // (position, next child to visit, node under construction)
    let mut stack = vec![(position, 0usize, Node::leaf(item))];

    while let Some(frame) = stack.last_mut() {
        let (current, cursor) = (frame.0, frame.1);
        if let Some(&child) = children[current].get(cursor) {
            frame.1 += 1;
            if let Some(item) = slots[child].take() {
                stack.push((child, 0, Node::leaf(item)));
            }
            continue;
        }

        let (_, _, node) = stack.pop()?;
        match stack.last_mut() {
            Some(parent) => parent.2.children.push(node),
            None => return Some(node),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: &'static str,
        parent: Option<&'static str>,
    }

    impl Hierarchical for Item {
        fn id(&self) -> &str {
            self.id
        }

        fn parent_id(&self) -> Option<&str> {
            self.parent
        }
    }

    fn item(id: &'static str, parent: Option<&'static str>) -> Item {
        Item { id, parent }
    }

    /// Flatten to (id, parent-in-forest) pairs, depth first
    fn edges(forest: &[Node<Item>]) -> Vec<(&'static str, Option<&'static str>)> {
        fn walk(
            node: &Node<Item>,
            parent: Option<&'static str>,
            out: &mut Vec<(&'static str, Option<&'static str>)>,
        ) {
            out.push((node.item.id, parent));
            for child in &node.children {
                walk(child, Some(node.item.id), out);
            }
        }

        let mut out = Vec::new();
        for root in forest {
            walk(root, None, &mut out);
        }
        out
    }

    #[test]
    fn test_empty_input() {
        let forest = build_forest::<Item>(Vec::new());
        assert!(forest.is_empty());
    }

    #[test]
    fn test_flat_items_are_all_roots() {
        let forest = build_forest(vec![item("a", None), item("b", None)]);
        assert_eq!(forest.len(), 2);
        assert!(forest.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_nesting_follows_parent_ids() {
        let forest = build_forest(vec![
            item("child", Some("root")),
            item("root", None),
            item("grandchild", Some("child")),
        ]);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].item.id, "root");
        assert_eq!(forest[0].children[0].item.id, "child");
        assert_eq!(forest[0].children[0].children[0].item.id, "grandchild");
        assert_eq!(forest[0].size(), 3);
    }

    #[test]
    fn test_missing_parent_becomes_root() {
        let forest = build_forest(vec![item("a", Some("filtered-out")), item("b", Some("a"))]);

        assert_eq!(edges(&forest), vec![("a", None), ("b", Some("a"))]);
    }

    #[test]
    fn test_children_keep_input_order() {
        let forest = build_forest(vec![
            item("c3", Some("p")),
            item("p", None),
            item("c1", Some("p")),
            item("c2", Some("p")),
        ]);

        let order: Vec<_> = forest[0].children.iter().map(|n| n.item.id).collect();
        assert_eq!(order, vec!["c3", "c1", "c2"]);
    }

    #[test]
    fn test_self_reference_is_root() {
        let forest = build_forest(vec![item("a", Some("a"))]);

        assert_eq!(forest.len(), 1);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn test_cycle_keeps_every_item_once() {
        let forest = build_forest(vec![
            item("x", None),
            item("a", Some("b")),
            item("b", Some("a")),
        ]);

        assert_eq!(
            edges(&forest),
            vec![("x", None), ("a", None), ("b", Some("a"))]
        );
    }

    #[test]
    fn test_every_item_appears_once_with_its_parent() {
        let input = vec![
            item("1", None),
            item("2", Some("1")),
            item("3", Some("2")),
            item("4", Some("1")),
            item("5", Some("missing")),
            item("6", Some("5")),
            item("7", None),
        ];

        let forest = build_forest(input.clone());
        let mut found = edges(&forest);
        found.sort();

        let mut expected: Vec<_> = input
            .iter()
            .map(|i| {
                let parent = i.parent.filter(|p| input.iter().any(|o| o.id == *p));
                (i.id, parent)
            })
            .collect();
        expected.sort();

        assert_eq!(found, expected);
        assert_eq!(forest.iter().map(Node::size).sum::<usize>(), input.len());
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let input = vec![
            item("b", Some("a")),
            item("a", None),
            item("c", Some("a")),
            item("d", Some("zzz")),
        ];

        assert_eq!(build_forest(input.clone()), build_forest(input));
    }

    struct Link {
        id: String,
        parent: Option<String>,
    }

    impl Hierarchical for Link {
        fn id(&self) -> &str {
            &self.id
        }

        fn parent_id(&self) -> Option<&str> {
            self.parent.as_deref()
        }
    }

    /// `0 <- 1 <- ... <- n-1`, optionally closed into a loop via `0 -> n-1`
    fn chain(n: usize, closed: bool) -> Vec<Link> {
        (0..n)
            .map(|i| Link {
                id: i.to_string(),
                parent: match i.checked_sub(1) {
                    Some(prev) => Some(prev.to_string()),
                    None if closed => Some((n - 1).to_string()),
                    None => None,
                },
            })
            .collect()
    }

    /// Follow the single path from the root, dismantling it level by level
    fn path_ids(mut forest: Forest<Link>) -> Vec<String> {
        assert_eq!(forest.len(), 1);
        let mut ids = Vec::new();
        let mut next = forest.pop();
        while let Some(mut node) = next {
            assert!(node.children.len() <= 1);
            next = node.children.pop();
            ids.push(node.item.id);
        }
        ids
    }

    #[test]
    fn test_deep_chain() {
        const DEPTH: usize = 100_000;

        let forest = build_forest(chain(DEPTH, false));
        assert_eq!(forest[0].size(), DEPTH);

        let ids = path_ids(forest);
        assert_eq!(ids.len(), DEPTH);
        assert_eq!(ids[0], "0");
        assert_eq!(ids[DEPTH - 1], (DEPTH - 1).to_string());
    }

    #[test]
    fn test_long_cycle_is_promoted() {
        const DEPTH: usize = 100_000;

        let ids = path_ids(build_forest(chain(DEPTH, true)));
        assert_eq!(ids.len(), DEPTH);
        assert_eq!(ids[0], "0");
    }

    #[test]
    fn test_children_always_serialized() {
        #[derive(Serialize)]
        struct Named {
            id: String,
        }

        let node = Node::leaf(Named { id: "1".into() });
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "1", "children": [] }));
    }
}
