//! Structure counting over parsed units.
//!
//! Runs the query battery over every tree of a unit, applies the overlap
//! correction step once, counts words, and assembles the nine-figure
//! [`StructureCount`] that the ratio layer consumes.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::queries::{QuerySet, standard};
use crate::tree::Tree;

/// Part-of-speech tags that mark countable words: uppercase letters with
/// an optional possessive/currency `$` suffix. Punctuation tags and trace
/// categories such as `-NONE-` fall outside this shape.
static WORD_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]+\$?$").expect("valid regex"));

/// Raw tallies of the thirteen queries for one unit (tree or forest).
///
/// Summable across trees: a document's tally is the sum over its sentence
/// trees. [`PatternHits::corrected`] folds the fragment and question
/// figures into their target categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternHits {
    /// Top sentence nodes.
    pub sentences: usize,
    /// Verb phrases under finite clauses.
    pub verb_phrases: usize,
    /// Finite verbs heading verb-phrase-less questions.
    pub question_verb_phrases: usize,
    /// Finite clauses.
    pub clauses: usize,
    /// T-units.
    pub t_units: usize,
    /// Dependent clauses.
    pub dependent_clauses: usize,
    /// Complex T-units.
    pub complex_t_units: usize,
    /// Coordinate phrases.
    pub coordinate_phrases: usize,
    /// Modified or stacked noun phrases.
    pub nominal_modified: usize,
    /// Nominal subordinate clauses.
    pub nominal_clauses: usize,
    /// Gerund/infinitive subject clauses.
    pub nominal_gerunds: usize,
    /// Root-level fragments lacking a finite clause.
    pub fragment_clauses: usize,
    /// Root-level fragments lacking a T-unit.
    pub fragment_t_units: usize,
}

impl PatternHits {
    /// Tally one tree against the battery.
    pub fn tally(queries: &QuerySet, tree: &Tree) -> Self {
        Self {
            sentences: queries.sentence.match_count(tree),
            verb_phrases: queries.verb_phrase.match_count(tree),
            question_verb_phrases: queries.question_verb_phrase.match_count(tree),
            clauses: queries.clause.match_count(tree),
            t_units: queries.t_unit.match_count(tree),
            dependent_clauses: queries.dependent_clause.match_count(tree),
            complex_t_units: queries.complex_t_unit.match_count(tree),
            coordinate_phrases: queries.coordinate_phrase.match_count(tree),
            nominal_modified: queries.nominal_modified.match_count(tree),
            nominal_clauses: queries.nominal_clause.match_count(tree),
            nominal_gerunds: queries.nominal_gerund.match_count(tree),
            fragment_clauses: queries.fragment_clause.match_count(tree),
            fragment_t_units: queries.fragment_t_unit.match_count(tree),
        }
    }

    /// Add another unit's tallies into this one.
    pub fn add(&mut self, other: &Self) {
        self.sentences += other.sentences;
        self.verb_phrases += other.verb_phrases;
        self.question_verb_phrases += other.question_verb_phrases;
        self.clauses += other.clauses;
        self.t_units += other.t_units;
        self.dependent_clauses += other.dependent_clauses;
        self.complex_t_units += other.complex_t_units;
        self.coordinate_phrases += other.coordinate_phrases;
        self.nominal_modified += other.nominal_modified;
        self.nominal_clauses += other.nominal_clauses;
        self.nominal_gerunds += other.nominal_gerunds;
        self.fragment_clauses += other.fragment_clauses;
        self.fragment_t_units += other.fragment_t_units;
    }

    /// Apply the correction step: fragments fold into clauses and T-units,
    /// question verbs into verb phrases. Donor fields are drained, so
    /// correcting an already-corrected tally changes nothing.
    #[must_use]
    pub const fn corrected(mut self) -> Self {
        self.clauses += self.fragment_clauses;
        self.fragment_clauses = 0;
        self.t_units += self.fragment_t_units;
        self.fragment_t_units = 0;
        self.verb_phrases += self.question_verb_phrases;
        self.question_verb_phrases = 0;
        self
    }

    /// Total complex nominals: the sum of the three sub-queries.
    pub const fn complex_nominals(&self) -> usize {
        self.nominal_modified + self.nominal_clauses + self.nominal_gerunds
    }
}

/// The nine reported structure frequencies for one analysis unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StructureCount {
    /// Words (W).
    pub words: usize,
    /// Sentences (S).
    pub sentences: usize,
    /// Verb phrases (VP), question verbs included.
    pub verb_phrases: usize,
    /// Clauses (C), fragment clauses included.
    pub clauses: usize,
    /// T-units (T), fragment T-units included.
    pub t_units: usize,
    /// Dependent clauses (DC).
    pub dependent_clauses: usize,
    /// Complex T-units (CT).
    pub complex_t_units: usize,
    /// Coordinate phrases (CP).
    pub coordinate_phrases: usize,
    /// Complex nominals (CN), summed over the three sub-queries.
    pub complex_nominals: usize,
}

impl StructureCount {
    /// Assemble the reported figures from corrected tallies and a word count.
    pub fn from_hits(hits: &PatternHits, words: usize) -> Self {
        Self {
            words,
            sentences: hits.sentences,
            verb_phrases: hits.verb_phrases,
            clauses: hits.clauses,
            t_units: hits.t_units,
            dependent_clauses: hits.dependent_clauses,
            complex_t_units: hits.complex_t_units,
            coordinate_phrases: hits.coordinate_phrases,
            complex_nominals: hits.complex_nominals(),
        }
    }
}

/// Count words in one tree: leaves whose tag looks like a word tag and
/// whose token carries no bracket or hyphen (screens out `-LRB-`-style
/// tokens and trace markers alongside punctuation).
pub fn count_words(tree: &Tree) -> usize {
    tree.leaves()
        .filter(|leaf| WORD_TAG.is_match(leaf.label()))
        .filter(|leaf| {
            leaf.token()
                .is_some_and(|t| !t.chars().any(|c| matches!(c, '(' | ')' | '-')))
        })
        .count()
}

/// Produce the structure count for one unit given all its trees.
///
/// Tallies every tree against the standard battery, sums, applies the
/// correction step once, and counts words independently of the battery.
#[tracing::instrument(skip_all, fields(trees = trees.len()))]
pub fn count_structures(trees: &[Tree]) -> StructureCount {
    let queries = standard();
    let mut hits = PatternHits::default();
    let mut words = 0;
    for tree in trees {
        hits.add(&PatternHits::tally(queries, tree));
        words += count_words(tree);
    }
    StructureCount::from_hits(&hits.corrected(), words)
}
