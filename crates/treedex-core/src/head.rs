//! Head-child selection for phrase categories.
//!
//! The head-child pattern operator needs to know which daughter carries a
//! constituent's head. Selection is Collins-style: each category has a
//! priority list of daughter labels; the first list entry that names some
//! child wins, scanning children left to right. Categories without a rule
//! fall back to the leftmost child.
//!
//! Only the categories the query battery interrogates need rules; the
//! tables below cover clause and verb-phrase heads plus the subordinate
//! clause introducers.

use crate::tree::NodeRef;

/// Daughter-label priorities per category.
const HEAD_RULES: &[(&str, &[&str])] = &[
    (
        "VP",
        &[
            "TO", "VBD", "VBN", "MD", "VBZ", "VB", "VBG", "VBP", "VP", "ADJP", "NN", "NNS", "NP",
        ],
    ),
    ("S", &["TO", "IN", "VP", "S", "SBAR", "ADJP", "UCP", "NP"]),
    (
        "SBAR",
        &[
            "WHNP", "WHPP", "WHADVP", "WHADJP", "IN", "DT", "S", "SQ", "SINV", "SBAR", "FRAG",
        ],
    ),
    ("SQ", &["VBZ", "VBD", "VBP", "VB", "MD", "VP", "SQ"]),
    (
        "SINV",
        &[
            "VBZ", "VBD", "VBP", "VB", "MD", "VP", "S", "SINV", "ADJP", "NP",
        ],
    ),
];

/// The designated head child of `node`, if it has children at all.
pub fn head_child(node: NodeRef<'_>) -> Option<NodeRef<'_>> {
    let priorities = HEAD_RULES
        .iter()
        .find(|(category, _)| *category == node.label())
        .map(|(_, list)| *list);

    if let Some(priorities) = priorities {
        for wanted in priorities {
            if let Some(child) = node.children().find(|c| c.label() == *wanted) {
                return Some(child);
            }
        }
    }
    node.first_child()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::parse_forest;

    fn first_match<'t>(tree: &'t crate::tree::Tree, label: &str) -> NodeRef<'t> {
        tree.preorder().find(|n| n.label() == label).unwrap()
    }

    #[test]
    fn vp_head_prefers_finite_verb_over_position() {
        let forest = parse_forest("(VP (ADVP (RB quickly)) (VBZ runs) (NP (NN home)))").unwrap();
        let head = head_child(forest[0].root()).unwrap();
        assert_eq!(head.label(), "VBZ");
    }

    #[test]
    fn vp_head_respects_priority_order() {
        // TO outranks the embedded VP
        let forest = parse_forest("(VP (TO to) (VP (VB run)))").unwrap();
        assert_eq!(head_child(forest[0].root()).unwrap().label(), "TO");
    }

    #[test]
    fn sbar_head_is_wh_phrase() {
        let forest = parse_forest("(SBAR (WHNP (WP what)) (S (NP (PRP he)) (VP (VBZ wants))))")
            .unwrap();
        assert_eq!(head_child(forest[0].root()).unwrap().label(), "WHNP");
    }

    #[test]
    fn sq_head_is_finite_verb() {
        let forest = parse_forest("(SQ (VBZ Is) (NP (PRP he)) (ADJP (JJ tall)))").unwrap();
        assert_eq!(head_child(forest[0].root()).unwrap().label(), "VBZ");
    }

    #[test]
    fn unknown_category_falls_back_to_leftmost() {
        let forest = parse_forest("(NP (DT the) (NN dog))").unwrap();
        assert_eq!(head_child(forest[0].root()).unwrap().label(), "DT");
        let leaf = first_match(&forest[0], "NN");
        assert!(head_child(leaf).is_none());
    }
}
