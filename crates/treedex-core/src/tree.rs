//! Constituency tree model.
//!
//! Trees arrive as bracketed (Penn-treebank style) notation produced by the
//! parser collaborator, e.g. `(ROOT (S (NP (PRP I)) (VP (VBP run))))`.
//! [`parse_forest`] accepts one or more trees per input and builds each into
//! an arena-backed [`Tree`]: nodes live in a single `Vec`, parent links are
//! indices for lookup only, and the `Tree` is the sole owner of its nodes.
//!
//! A leaf is a `(TAG token)` pair — the node's label is the part-of-speech
//! tag and the terminal token is carried on the node itself. Trees are
//! immutable after construction.

use crate::error::{TreeError, TreeResult};

/// One node in the arena.
#[derive(Debug, Clone)]
struct NodeData {
    label: String,
    token: Option<String>,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// An immutable, rooted, ordered constituency tree.
#[derive(Debug, Clone)]
pub struct Tree {
    /// Nodes in depth-first pre-order; index 0 is the root.
    nodes: Vec<NodeData>,
}

impl Tree {
    /// The root node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            index: 0,
        }
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a constructed tree has at least a root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first pre-order traversal over every node.
    ///
    /// The sequence is lazy, finite, and restartable (call again for a
    /// fresh iterator). Nodes are stored in pre-order, so this is a plain
    /// index walk.
    pub fn preorder(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(move |index| NodeRef { tree: self, index })
    }

    /// Leaves (tagged terminals) in textual order.
    pub fn leaves(&self) -> impl Iterator<Item = NodeRef<'_>> {
        self.preorder().filter(|n| n.is_leaf())
    }
}

/// A cheap, copyable handle to one node of a [`Tree`].
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t Tree,
    index: usize,
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl Eq for NodeRef<'_> {}

impl<'t> NodeRef<'t> {
    fn data(&self) -> &'t NodeData {
        &self.tree.nodes[self.index]
    }

    fn at(&self, index: usize) -> Self {
        Self {
            tree: self.tree,
            index,
        }
    }

    /// The node's grammatical category (or part-of-speech tag for leaves).
    pub fn label(&self) -> &'t str {
        &self.data().label
    }

    /// The terminal token, present only on leaves.
    pub fn token(&self) -> Option<&'t str> {
        self.data().token.as_deref()
    }

    /// `true` if this node has no children (a tagged terminal).
    pub fn is_leaf(&self) -> bool {
        self.data().children.is_empty()
    }

    /// The parent node, if any. A weak back-reference: lookup only.
    pub fn parent(&self) -> Option<Self> {
        self.data().parent.map(|p| self.at(p))
    }

    /// Ordered children, possibly empty.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'t>> {
        let tree = self.tree;
        self.data()
            .children
            .iter()
            .map(move |&index| NodeRef { tree, index })
    }

    /// The leftmost child, if any.
    pub fn first_child(&self) -> Option<Self> {
        self.data().children.first().map(|&c| self.at(c))
    }

    /// Proper descendants (any depth, excluding this node), pre-order.
    pub fn descendants(&self) -> impl Iterator<Item = NodeRef<'t>> {
        let tree = self.tree;
        let mut stack: Vec<usize> = self.data().children.iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let index = stack.pop()?;
            stack.extend(tree.nodes[index].children.iter().rev());
            Some(NodeRef { tree, index })
        })
    }

    /// Proper ancestors, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = NodeRef<'t>> {
        let tree = self.tree;
        let mut current = self.data().parent;
        std::iter::from_fn(move || {
            let index = current?;
            current = tree.nodes[index].parent;
            Some(NodeRef { tree, index })
        })
    }

    /// This node's position among its parent's children.
    fn sibling_position(&self) -> Option<(NodeRef<'t>, usize)> {
        let parent = self.parent()?;
        let pos = parent
            .data()
            .children
            .iter()
            .position(|&c| c == self.index)?;
        Some((parent, pos))
    }

    /// Sisters strictly after this node, nearest first.
    pub fn sisters_after(&self) -> impl Iterator<Item = NodeRef<'t>> {
        let slot = self.sibling_position();
        let tree = self.tree;
        slot.into_iter().flat_map(move |(parent, pos)| {
            parent.data().children[pos + 1..]
                .iter()
                .map(move |&index| NodeRef { tree, index })
        })
    }

    /// Sisters strictly before this node, nearest first.
    pub fn sisters_before(&self) -> impl Iterator<Item = NodeRef<'t>> {
        let slot = self.sibling_position();
        let tree = self.tree;
        slot.into_iter().flat_map(move |(parent, pos)| {
            parent.data().children[..pos]
                .iter()
                .rev()
                .map(move |&index| NodeRef { tree, index })
        })
    }

    /// The sister immediately after this node.
    pub fn next_sister(&self) -> Option<Self> {
        self.sisters_after().next()
    }

    /// The sister immediately before this node.
    pub fn previous_sister(&self) -> Option<Self> {
        self.sisters_before().next()
    }
}

/// Parse bracketed notation holding one or more trees.
///
/// Whitespace between trees is ignored. Construction is strict about
/// bracket balance and node shape (a node holds either child nodes or a
/// single terminal token, never both) but makes no linguistic judgment:
/// structurally odd trees parse fine and simply match fewer queries.
#[tracing::instrument(skip_all, fields(input_len = input.len()))]
pub fn parse_forest(input: &str) -> TreeResult<Vec<Tree>> {
    let mut forest = Vec::new();
    let mut nodes: Vec<NodeData> = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b if b.is_ascii_whitespace() => pos += 1,
            b'(' => {
                pos += 1;
                let label = scan_atom(input, &mut pos);
                let parent = open.last().copied();
                if let Some(p) = parent
                    && nodes[p].token.is_some()
                {
                    return Err(TreeError::MixedContent {
                        label: nodes[p].label.clone(),
                        position: pos,
                    });
                }
                let index = nodes.len();
                nodes.push(NodeData {
                    label,
                    token: None,
                    parent,
                    children: Vec::new(),
                });
                if let Some(p) = parent {
                    nodes[p].children.push(index);
                }
                open.push(index);
            }
            b')' => {
                let Some(index) = open.pop() else {
                    return Err(TreeError::UnexpectedClose { position: pos });
                };
                let node = &nodes[index];
                if node.children.is_empty() && node.token.is_none() {
                    return Err(TreeError::EmptyNode {
                        label: node.label.clone(),
                        position: pos,
                    });
                }
                pos += 1;
                if open.is_empty() {
                    forest.push(Tree {
                        nodes: std::mem::take(&mut nodes),
                    });
                }
            }
            _ => {
                let start = pos;
                let token = scan_atom(input, &mut pos);
                let Some(&top) = open.last() else {
                    return Err(TreeError::StrayToken {
                        token,
                        position: start,
                    });
                };
                let node = &mut nodes[top];
                if !node.children.is_empty() || node.token.is_some() {
                    return Err(TreeError::MixedContent {
                        label: node.label.clone(),
                        position: start,
                    });
                }
                node.token = Some(token);
            }
        }
    }

    if !open.is_empty() {
        return Err(TreeError::UnclosedNode { open: open.len() });
    }
    if forest.is_empty() {
        return Err(TreeError::Empty);
    }
    Ok(forest)
}

/// Consume one atom (label or token): everything up to whitespace or a bracket.
///
/// May be empty, which covers parsers that emit an unlabeled root `( (S …))`.
fn scan_atom(input: &str, pos: &mut usize) -> String {
    let bytes = input.as_bytes();
    let start = *pos;
    while *pos < bytes.len() {
        let b = bytes[*pos];
        if b.is_ascii_whitespace() || b == b'(' || b == b')' {
            break;
        }
        *pos += 1;
    }
    input[start..*pos].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(input: &str) -> Tree {
        let mut forest = parse_forest(input).unwrap();
        assert_eq!(forest.len(), 1);
        forest.pop().unwrap()
    }

    #[test]
    fn parses_simple_sentence() {
        let tree = single("(ROOT (S (NP (PRP I)) (VP (VBP run))))");
        let root = tree.root();
        assert_eq!(root.label(), "ROOT");
        assert!(root.parent().is_none());
        let s = root.first_child().unwrap();
        assert_eq!(s.label(), "S");
        assert_eq!(s.children().count(), 2);
    }

    #[test]
    fn leaves_carry_tokens() {
        let tree = single("(ROOT (S (NP (PRP I)) (VP (VBP run))))");
        let tokens: Vec<_> = tree.leaves().map(|l| l.token().unwrap()).collect();
        assert_eq!(tokens, vec!["I", "run"]);
        let tags: Vec<_> = tree.leaves().map(|l| l.label()).collect();
        assert_eq!(tags, vec!["PRP", "VBP"]);
    }

    #[test]
    fn preorder_visits_parent_before_children() {
        let tree = single("(A (B (D d)) (C c))");
        let labels: Vec<_> = tree.preorder().map(|n| n.label()).collect();
        assert_eq!(labels, vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn preorder_restarts() {
        let tree = single("(A (B b) (C c))");
        assert_eq!(tree.preorder().count(), 3);
        assert_eq!(tree.preorder().count(), 3);
    }

    #[test]
    fn parent_links_point_back() {
        let tree = single("(A (B (C c)))");
        let c = tree.preorder().find(|n| n.label() == "C").unwrap();
        assert_eq!(c.parent().unwrap().label(), "B");
        let up: Vec<_> = c.ancestors().map(|n| n.label()).collect();
        assert_eq!(up, vec!["B", "A"]);
    }

    #[test]
    fn descendants_cover_whole_subtree() {
        let tree = single("(A (B (D d) (E e)) (C c))");
        let b = tree.preorder().find(|n| n.label() == "B").unwrap();
        let below: Vec<_> = b.descendants().map(|n| n.label()).collect();
        assert_eq!(below, vec!["D", "E"]);
    }

    #[test]
    fn sister_navigation() {
        let tree = single("(A (B b) (C c) (D d))");
        let c = tree.preorder().find(|n| n.label() == "C").unwrap();
        assert_eq!(c.next_sister().unwrap().label(), "D");
        assert_eq!(c.previous_sister().unwrap().label(), "B");
        let after: Vec<_> = c.sisters_after().map(|n| n.label()).collect();
        assert_eq!(after, vec!["D"]);
        let root = tree.root();
        assert!(root.next_sister().is_none());
    }

    #[test]
    fn parses_multiple_trees() {
        let forest = parse_forest("(ROOT (X x))\n(ROOT (Y y))").unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[1].root().first_child().unwrap().label(), "Y");
    }

    #[test]
    fn accepts_unlabeled_root() {
        let tree = single("( (S (NP (PRP I)) (VP (VBP run))))");
        assert_eq!(tree.root().label(), "");
        assert_eq!(tree.root().first_child().unwrap().label(), "S");
    }

    #[test]
    fn rejects_unbalanced_input() {
        assert!(matches!(
            parse_forest("(ROOT (S"),
            Err(TreeError::UnclosedNode { open: 2 })
        ));
        assert!(matches!(
            parse_forest("(ROOT (X x)))"),
            Err(TreeError::UnexpectedClose { .. })
        ));
    }

    #[test]
    fn rejects_empty_node_and_stray_token() {
        assert!(matches!(
            parse_forest("(ROOT ())"),
            Err(TreeError::EmptyNode { .. })
        ));
        assert!(matches!(
            parse_forest("hello"),
            Err(TreeError::StrayToken { .. })
        ));
        assert!(matches!(parse_forest("   "), Err(TreeError::Empty)));
    }

    #[test]
    fn rejects_mixed_content() {
        assert!(matches!(
            parse_forest("(X t (Y y))"),
            Err(TreeError::MixedContent { .. })
        ));
        assert!(matches!(
            parse_forest("(X (Y y) t)"),
            Err(TreeError::MixedContent { .. })
        ));
    }
}
