//! Structural queries over constituency trees.
//!
//! A [`Pattern`] is a composable test on a single node: category and token
//! tests, boolean combinators, and relational operators that reach the
//! node's children, head child, parent, descendants, ancestors, and
//! sisters. One recursive evaluator serves every operator; there is no
//! per-operator matcher.
//!
//! The operator set is fixed. The process-wide battery of named queries
//! built from it lives in [`crate::queries`]; nothing at the engine
//! boundary accepts user-supplied query text, so evaluation can never fail
//! — a pattern that fits nothing simply matches zero nodes.

use crate::head::head_child;
use crate::tree::{NodeRef, Tree};

/// A structural query over tree nodes.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches every node.
    Any,
    /// Node label is one of the given categories.
    Label(Vec<&'static str>),
    /// Node is a leaf whose terminal token is one of the given words.
    Token(Vec<&'static str>),
    /// All sub-patterns hold on this node.
    All(Vec<Pattern>),
    /// At least one sub-pattern holds on this node.
    AnyOf(Vec<Pattern>),
    /// The sub-pattern does not hold.
    Not(Box<Pattern>),
    /// Some child satisfies the sub-pattern.
    HasChild(Box<Pattern>),
    /// The leftmost child satisfies the sub-pattern.
    HasFirstChild(Box<Pattern>),
    /// The designated head child satisfies the sub-pattern.
    HeadedBy(Box<Pattern>),
    /// The parent satisfies the sub-pattern.
    ChildOf(Box<Pattern>),
    /// Some proper descendant (any depth) satisfies the sub-pattern.
    Dominates(Box<Pattern>),
    /// Some proper ancestor satisfies the sub-pattern.
    DominatedBy(Box<Pattern>),
    /// Some sister after this node satisfies the sub-pattern.
    Precedes(Box<Pattern>),
    /// The sister immediately after this node satisfies the sub-pattern.
    ImmediatelyPrecedes(Box<Pattern>),
    /// Some sister before this node satisfies the sub-pattern.
    Follows(Box<Pattern>),
    /// The sister immediately before this node satisfies the sub-pattern.
    ImmediatelyFollows(Box<Pattern>),
}

impl Pattern {
    /// Decide whether this pattern holds at `node`.
    ///
    /// Exhaustive recursive search: a compound pattern holds only if every
    /// relational clause is satisfiable against some node reachable per
    /// its operator.
    pub fn matches(&self, node: NodeRef<'_>) -> bool {
        match self {
            Self::Any => true,
            Self::Label(categories) => categories.iter().any(|c| *c == node.label()),
            Self::Token(words) => node.token().is_some_and(|t| words.iter().any(|w| *w == t)),
            Self::All(parts) => parts.iter().all(|p| p.matches(node)),
            Self::AnyOf(parts) => parts.iter().any(|p| p.matches(node)),
            Self::Not(part) => !part.matches(node),
            Self::HasChild(part) => node.children().any(|c| part.matches(c)),
            Self::HasFirstChild(part) => node.first_child().is_some_and(|c| part.matches(c)),
            Self::HeadedBy(part) => head_child(node).is_some_and(|h| part.matches(h)),
            Self::ChildOf(part) => node.parent().is_some_and(|p| part.matches(p)),
            Self::Dominates(part) => node.descendants().any(|d| part.matches(d)),
            Self::DominatedBy(part) => node.ancestors().any(|a| part.matches(a)),
            Self::Precedes(part) => node.sisters_after().any(|s| part.matches(s)),
            Self::ImmediatelyPrecedes(part) => {
                node.next_sister().is_some_and(|s| part.matches(s))
            }
            Self::Follows(part) => node.sisters_before().any(|s| part.matches(s)),
            Self::ImmediatelyFollows(part) => {
                node.previous_sister().is_some_and(|s| part.matches(s))
            }
        }
    }

    /// Every node of `tree` satisfying this pattern, in pre-order.
    pub fn matching_nodes<'t>(&self, tree: &'t Tree) -> Vec<NodeRef<'t>> {
        tree.preorder().filter(|n| self.matches(*n)).collect()
    }

    /// Number of distinct nodes satisfying this pattern.
    ///
    /// Overlapping matches rooted at different nodes all count; a single
    /// node satisfying several disjuncts counts once.
    pub fn match_count(&self, tree: &Tree) -> usize {
        tree.preorder().filter(|n| self.matches(*n)).count()
    }

    /// Conjoin with another pattern, flattening nested conjunctions.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::All(mut parts) => {
                parts.push(other);
                Self::All(parts)
            }
            first => Self::All(vec![first, other]),
        }
    }
}

/// Category test: label is one of `categories`.
pub fn category(categories: &[&'static str]) -> Pattern {
    Pattern::Label(categories.to_vec())
}

/// Token test: leaf terminal is one of `words`.
pub fn word(words: &[&'static str]) -> Pattern {
    Pattern::Token(words.to_vec())
}

/// Matches any node at all.
pub const fn any_node() -> Pattern {
    Pattern::Any
}

/// Disjunction over alternatives.
pub fn any_of(alternatives: Vec<Pattern>) -> Pattern {
    Pattern::AnyOf(alternatives)
}

/// Negation.
pub fn not(part: Pattern) -> Pattern {
    Pattern::Not(Box::new(part))
}

/// Some child matches.
pub fn has_child(part: Pattern) -> Pattern {
    Pattern::HasChild(Box::new(part))
}

/// The leftmost child matches.
pub fn has_first_child(part: Pattern) -> Pattern {
    Pattern::HasFirstChild(Box::new(part))
}

/// The head child matches.
pub fn headed_by(part: Pattern) -> Pattern {
    Pattern::HeadedBy(Box::new(part))
}

/// The parent matches.
pub fn child_of(part: Pattern) -> Pattern {
    Pattern::ChildOf(Box::new(part))
}

/// Some descendant matches.
pub fn dominates(part: Pattern) -> Pattern {
    Pattern::Dominates(Box::new(part))
}

/// Some ancestor matches.
pub fn dominated_by(part: Pattern) -> Pattern {
    Pattern::DominatedBy(Box::new(part))
}

/// Some later sister matches.
pub fn precedes(part: Pattern) -> Pattern {
    Pattern::Precedes(Box::new(part))
}

/// The immediately following sister matches.
pub fn immediately_precedes(part: Pattern) -> Pattern {
    Pattern::ImmediatelyPrecedes(Box::new(part))
}

/// Some earlier sister matches.
pub fn follows(part: Pattern) -> Pattern {
    Pattern::Follows(Box::new(part))
}

/// The immediately preceding sister matches.
pub fn immediately_follows(part: Pattern) -> Pattern {
    Pattern::ImmediatelyFollows(Box::new(part))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::parse_forest;

    fn tree(input: &str) -> Tree {
        parse_forest(input).unwrap().pop().unwrap()
    }

    #[test]
    fn label_and_token_tests() {
        let t = tree("(ROOT (S (NP (PRP I)) (VP (VBP run))))");
        assert_eq!(category(&["NP", "VP"]).match_count(&t), 2);
        assert_eq!(word(&["run"]).match_count(&t), 1);
        // token tests never match internal nodes
        assert_eq!(word(&["S"]).match_count(&t), 0);
    }

    #[test]
    fn child_and_parent_relations() {
        let t = tree("(ROOT (S (NP (PRP I)) (VP (VBP run))))");
        let vp_under_s = category(&["VP"]).and(child_of(category(&["S"])));
        assert_eq!(vp_under_s.match_count(&t), 1);
        let s_with_vp = category(&["S"]).and(has_child(category(&["VP"])));
        assert_eq!(s_with_vp.match_count(&t), 1);
        // root has no parent
        assert_eq!(
            category(&["ROOT"]).and(not(child_of(any_node()))).match_count(&t),
            1
        );
    }

    #[test]
    fn first_child_relation() {
        let t = tree("(S (NP (PRP I)) (VP (VBP run)))");
        assert_eq!(
            category(&["S"])
                .and(has_first_child(category(&["NP"])))
                .match_count(&t),
            1
        );
        assert_eq!(
            category(&["S"])
                .and(has_first_child(category(&["VP"])))
                .match_count(&t),
            0
        );
    }

    #[test]
    fn dominance_is_transitive_and_proper() {
        let t = tree("(ROOT (S (NP (NP (NN dog)) (PP (IN of) (NP (NN war))))))");
        // ROOT dominates NN at depth 4
        assert_eq!(
            category(&["ROOT"]).and(dominates(category(&["NN"]))).match_count(&t),
            1
        );
        // no node dominates itself
        assert_eq!(
            category(&["NN"]).and(dominates(category(&["NN"]))).match_count(&t),
            0
        );
        // NN is dominated by S but not by VP
        assert_eq!(
            category(&["NN"]).and(dominated_by(category(&["S"]))).match_count(&t),
            2
        );
        assert_eq!(
            category(&["NN"]).and(dominated_by(category(&["VP"]))).match_count(&t),
            0
        );
    }

    #[test]
    fn sister_relations() {
        let t = tree("(X (A a) (B b) (C c))");
        assert_eq!(
            category(&["A"]).and(precedes(category(&["C"]))).match_count(&t),
            1
        );
        assert_eq!(
            category(&["A"])
                .and(immediately_precedes(category(&["C"])))
                .match_count(&t),
            0
        );
        assert_eq!(
            category(&["B"])
                .and(immediately_precedes(category(&["C"])))
                .match_count(&t),
            1
        );
        assert_eq!(
            category(&["C"]).and(follows(category(&["A"]))).match_count(&t),
            1
        );
        assert_eq!(
            category(&["C"])
                .and(immediately_follows(category(&["A"])))
                .match_count(&t),
            0
        );
    }

    #[test]
    fn head_relation_uses_category_rules() {
        let t = tree("(S (NP (PRP I)) (VP (ADVP (RB often)) (VBP run)))");
        assert_eq!(
            category(&["VP"]).and(headed_by(category(&["VBP"]))).match_count(&t),
            1
        );
        assert_eq!(
            category(&["VP"]).and(headed_by(category(&["ADVP"]))).match_count(&t),
            0
        );
    }

    #[test]
    fn negation_and_disjunction() {
        let t = tree("(X (NP (NN a)) (NP (NN b) (CC and) (NN c)))");
        let np_without_cc = category(&["NP"]).and(not(has_child(category(&["CC"]))));
        assert_eq!(np_without_cc.match_count(&t), 1);
        let either = any_of(vec![category(&["CC"]), category(&["X"])]);
        assert_eq!(either.match_count(&t), 2);
    }

    #[test]
    fn node_matching_two_disjuncts_counts_once() {
        let t = tree("(X (NP (NN a)))");
        let both_arms = any_of(vec![
            category(&["NP"]),
            has_child(category(&["NN"])),
        ]);
        // NP satisfies both arms but is one node; X satisfies neither arm's
        // category test but does have an NN grandchild, not child.
        assert_eq!(both_arms.match_count(&t), 1);
    }

    #[test]
    fn matching_nodes_come_back_in_preorder() {
        let t = tree("(X (NN a) (Y (NN b)) (NN c))");
        let hits = category(&["NN"]).matching_nodes(&t);
        let tokens: Vec<_> = hits.iter().map(|n| n.token().unwrap()).collect();
        assert_eq!(tokens, vec!["a", "b", "c"]);
    }

    #[test]
    fn absence_of_matches_is_zero_not_error() {
        let t = tree("(X (Y y))");
        assert_eq!(category(&["ZZZ"]).match_count(&t), 0);
        assert!(category(&["ZZZ"]).matching_nodes(&t).is_empty());
    }
}
