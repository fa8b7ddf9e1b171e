//! The fixed battery of named structural queries.
//!
//! Nine reported structures are counted through thirteen queries: the nine
//! headline categories plus the question-verb-phrase and fragment queries
//! whose tallies fold into verb phrases, clauses, and T-units during the
//! correction step, and the three complex-nominal sub-queries whose sum is
//! reported as one figure.
//!
//! The set is process-wide configuration: built once, immutable, not
//! extensible at the engine boundary. Get it via [`standard`].

use std::sync::LazyLock;

use crate::pattern::{
    Pattern, any_node, any_of, category, child_of, dominated_by, dominates, follows, has_child,
    has_first_child, headed_by, immediately_precedes, not, precedes, word,
};

/// Finite verb or modal tags.
const FINITE_VERB: &[&str] = &["MD", "VBZ", "VBP", "VBD"];

/// Clause-level categories for the finiteness test.
const CLAUSE: &[&str] = &["S", "SINV", "SQ"];

/// Clause-level categories for T-unit detection (adds direct questions).
const T_UNIT_CLAUSE: &[&str] = &["S", "SBARQ", "SINV", "SQ"];

/// A finite clause: S/SINV/SQ whose finiteness is evidenced by a finite
/// verb or modal — as the clause's own head, as the head of a verb-phrase
/// child, or as the head of a verb phrase coordinated under a conjunction.
/// The first alternative admits imperatives: a clause directly under the
/// root whose first child is a verb phrase headed by a base-form verb.
fn finite_clause() -> Pattern {
    category(CLAUSE).and(any_of(vec![
        child_of(category(&["ROOT"]))
            .and(has_first_child(category(&["VP"]).and(headed_by(category(&["VB"]))))),
        headed_by(category(FINITE_VERB)),
        has_child(category(&["VP"]).and(any_of(vec![
            headed_by(category(FINITE_VERB)),
            has_child(category(&["CC"]))
                .and(has_child(category(&["VP"]).and(headed_by(category(FINITE_VERB))))),
        ]))),
    ]))
}

/// A T-unit: a clause-level node that is the whole parsed unit, or that
/// follows a clause-level sister without being buried inside a
/// subordinate clause or verb phrase.
fn t_unit() -> Pattern {
    category(T_UNIT_CLAUSE).and(any_of(vec![
        child_of(category(&["ROOT"])),
        follows(category(T_UNIT_CLAUSE)).and(not(dominated_by(category(&["SBAR", "VP"])))),
    ]))
}

/// A subordinate clause containing a finite clause.
fn dependent_clause() -> Pattern {
    category(&["SBAR"]).and(has_child(finite_clause()))
}

/// The thirteen named queries, strongly typed and built once.
#[derive(Debug)]
pub struct QuerySet {
    /// The top sentence node: a root with no enclosing structure.
    pub sentence: Pattern,
    /// A verb phrase directly under a finite clause category.
    pub verb_phrase: Pattern,
    /// A finite verb or modal under a question clause that lacks its own
    /// verb phrase; folded into the verb-phrase total.
    pub question_verb_phrase: Pattern,
    /// A finite clause.
    pub clause: Pattern,
    /// An independent, unsubordinated clause.
    pub t_unit: Pattern,
    /// A subordinate clause containing a finite clause.
    pub dependent_clause: Pattern,
    /// A T-unit dominating at least one dependent clause.
    pub complex_t_unit: Pattern,
    /// A phrase joined internally by a coordinating conjunction.
    pub coordinate_phrase: Pattern,
    /// A noun phrase with embedded modification, or adjacent noun phrases
    /// not joined by a conjunction.
    pub nominal_modified: Pattern,
    /// A nominal subordinate clause functioning as a verb argument.
    pub nominal_clause: Pattern,
    /// A gerund or infinitive clause in subject position.
    pub nominal_gerund: Pattern,
    /// A root-level fragment with no finite clause inside; folded into the
    /// clause total.
    pub fragment_clause: Pattern,
    /// A root-level fragment with no T-unit inside; folded into the T-unit
    /// total.
    pub fragment_t_unit: Pattern,
}

impl QuerySet {
    /// Build the standard battery.
    fn build() -> Self {
        Self {
            sentence: category(&["ROOT"]).and(not(child_of(any_node()))),

            verb_phrase: category(&["VP"]).and(child_of(category(CLAUSE))),

            question_verb_phrase: category(FINITE_VERB).and(child_of(
                category(&["SQ"]).and(not(has_child(category(&["VP"])))),
            )),

            clause: finite_clause(),

            t_unit: t_unit(),

            dependent_clause: dependent_clause(),

            complex_t_unit: t_unit().and(dominates(dependent_clause())),

            coordinate_phrase: category(&["ADJP", "ADVP", "NP", "VP"])
                .and(has_child(category(&["CC"]))),

            nominal_modified: category(&["NP"])
                .and(not(child_of(category(&["NP"]))))
                .and(any_of(vec![
                    dominates(category(&["JJ", "POS", "PP", "S", "VBG"])),
                    dominates(
                        category(&["NP"])
                            .and(precedes(category(&["NP"])))
                            .and(not(immediately_precedes(category(&["CC"])))),
                    ),
                ])),

            nominal_clause: category(&["SBAR"])
                .and(any_of(vec![
                    headed_by(category(&["WHNP"])),
                    headed_by(
                        category(&["IN"]).and(word(&["That", "that", "For", "for"])),
                    ),
                    has_first_child(category(&["S"])),
                ]))
                .and(any_of(vec![
                    immediately_precedes(category(&["VP"])),
                    child_of(category(&["VP"])),
                ])),

            nominal_gerund: category(&["S"])
                .and(has_child(
                    category(&["VP"]).and(headed_by(category(&["VBG", "TO"]))),
                ))
                .and(immediately_precedes(category(&["VP"]))),

            fragment_clause: category(&["FRAG"])
                .and(child_of(category(&["ROOT"])))
                .and(not(dominates(finite_clause()))),

            fragment_t_unit: category(&["FRAG"])
                .and(child_of(category(&["ROOT"])))
                .and(not(dominates(t_unit()))),
        }
    }
}

static STANDARD: LazyLock<QuerySet> = LazyLock::new(QuerySet::build);

/// The process-wide query battery.
pub fn standard() -> &'static QuerySet {
    &STANDARD
}
