//! Batch aggregation over analysis units.
//!
//! One unit is one forest of parsed trees: a whole document, or a single
//! sentence. Aggregation runs the structure counter and the ratio layer
//! over each unit in insertion order, accumulates the records, and keeps
//! per-unit failures to the side — one malformed unit never aborts a
//! batch. No state crosses units; each forest is dropped as soon as its
//! record exists.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::UnitLabel;
use crate::counts::{StructureCount, count_structures};
use crate::error::TreeError;
use crate::indices::ComplexityIndices;
use crate::tree::{Tree, parse_forest};

/// The full analysis result for one unit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisRecord {
    /// Unit identifier: filename or sentence id.
    pub identifier: String,
    /// The nine structure frequencies.
    pub counts: StructureCount,
    /// The fourteen derived ratios.
    pub indices: ComplexityIndices,
}

impl AnalysisRecord {
    /// Analyze one unit given its parsed trees.
    pub fn build(identifier: impl Into<String>, trees: &[Tree]) -> Self {
        let counts = count_structures(trees);
        let indices = ComplexityIndices::from_counts(&counts);
        Self {
            identifier: identifier.into(),
            counts,
            indices,
        }
    }

    /// The sentence-level label for this record.
    pub const fn label(&self) -> UnitLabel {
        UnitLabel::from_counts(&self.counts)
    }
}

/// A record paired with its sentence-level label.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LabeledRecord {
    /// The analysis record.
    #[serde(flatten)]
    pub record: AnalysisRecord,
    /// Simple/Complex label derived from the record.
    pub label: UnitLabel,
}

/// A whole document together with its per-sentence breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DocumentAnalysis {
    /// The whole-document record.
    pub document: AnalysisRecord,
    /// One labeled record per sentence, in document order.
    pub sentences: Vec<LabeledRecord>,
}

impl DocumentAnalysis {
    /// Analyze a document and each of its sentences.
    ///
    /// Every tree is one sentence; the document record covers them all.
    pub fn build(identifier: &str, trees: &[Tree]) -> Self {
        Self {
            document: AnalysisRecord::build(identifier, trees),
            sentences: analyze_sentences(identifier, trees),
        }
    }
}

/// A unit that could not be analyzed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UnitFailure {
    /// Identifier of the failed unit.
    pub identifier: String,
    /// Why the unit was skipped.
    pub reason: String,
}

/// Records and failures from one batch run, both in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct BatchOutcome {
    /// One record per successfully analyzed unit.
    pub records: Vec<AnalysisRecord>,
    /// Units skipped because their trees would not build.
    pub failures: Vec<UnitFailure>,
}

/// Analyze a whole document from its bracketed-notation text.
pub fn analyze_document(identifier: &str, notation: &str) -> Result<AnalysisRecord, TreeError> {
    let trees = parse_forest(notation)?;
    Ok(AnalysisRecord::build(identifier, &trees))
}

/// Analyze each tree of a document as its own sentence unit.
///
/// Identifiers are `prefix-001`, `prefix-002`, … in document order.
#[tracing::instrument(skip_all, fields(prefix))]
pub fn analyze_sentences(prefix: &str, trees: &[Tree]) -> Vec<LabeledRecord> {
    trees
        .iter()
        .enumerate()
        .map(|(i, tree)| {
            let record =
                AnalysisRecord::build(format!("{prefix}-{:03}", i + 1), std::slice::from_ref(tree));
            let label = record.label();
            LabeledRecord { record, label }
        })
        .collect()
}

/// Analyze a collection of units, each given as (identifier, notation).
///
/// Units are processed in the order supplied and the output rows preserve
/// it. A unit whose notation fails to build is reported in
/// [`BatchOutcome::failures`] and skipped; the batch continues.
#[tracing::instrument(skip_all)]
pub fn analyze_batch<I, S, T>(units: I) -> BatchOutcome
where
    I: IntoIterator<Item = (S, T)>,
    S: Into<String>,
    T: AsRef<str>,
{
    let mut outcome = BatchOutcome::default();
    for (identifier, notation) in units {
        let identifier = identifier.into();
        match analyze_document(&identifier, notation.as_ref()) {
            Ok(record) => outcome.records.push(record),
            Err(err) => {
                tracing::warn!(unit = %identifier, error = %err, "skipping unit");
                outcome.failures.push(UnitFailure {
                    identifier,
                    reason: err.to_string(),
                });
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "(ROOT (S (NP (PRP I)) (VP (VBP run))))";
    const COMPLEX: &str = "(ROOT (S (NP (PRP I)) (VP (VBP think) \
                           (SBAR (IN that) (S (NP (PRP he)) (VP (VBZ runs)))))))";

    #[test]
    fn document_record_carries_counts_and_ratios() {
        let record = analyze_document("essay.txt", SIMPLE).unwrap();
        assert_eq!(record.identifier, "essay.txt");
        assert_eq!(record.counts.words, 2);
        assert_eq!(record.indices.mls, 2.0);
    }

    #[test]
    fn sentence_records_are_labeled_in_order() {
        let trees = parse_forest(&format!("{SIMPLE}\n{COMPLEX}")).unwrap();
        let labeled = analyze_sentences("essay", &trees);
        assert_eq!(labeled.len(), 2);
        assert_eq!(labeled[0].record.identifier, "essay-001");
        assert_eq!(labeled[0].label, UnitLabel::Simple);
        assert_eq!(labeled[1].record.identifier, "essay-002");
        assert_eq!(labeled[1].label, UnitLabel::Complex);
    }

    #[test]
    fn batch_preserves_order_and_collects_failures() {
        let outcome = analyze_batch(vec![
            ("a.txt", SIMPLE),
            ("broken.txt", "(ROOT (S"),
            ("b.txt", COMPLEX),
        ]);
        let ids: Vec<_> = outcome.records.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, vec!["a.txt", "b.txt"]);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].identifier, "broken.txt");
        assert!(outcome.failures[0].reason.contains("unbalanced"));
    }

    #[test]
    fn empty_batch_is_fine() {
        let outcome = analyze_batch(Vec::<(String, String)>::new());
        assert!(outcome.records.is_empty());
        assert!(outcome.failures.is_empty());
    }

    #[test]
    fn document_analysis_pairs_document_with_sentences() {
        let trees = parse_forest(&format!("{SIMPLE}\n{COMPLEX}")).unwrap();
        let analysis = DocumentAnalysis::build("essay", &trees);
        assert_eq!(analysis.document.identifier, "essay");
        assert_eq!(analysis.document.counts.sentences, 2);
        assert_eq!(analysis.sentences.len(), 2);
        // the document totals cover every sentence
        let word_sum: usize = analysis
            .sentences
            .iter()
            .map(|l| l.record.counts.words)
            .sum();
        assert_eq!(analysis.document.counts.words, word_sum);
    }

    #[test]
    fn record_label_tracks_complex_t_units() {
        let simple = analyze_document("s", SIMPLE).unwrap();
        let complex = analyze_document("c", COMPLEX).unwrap();
        assert_eq!(simple.label(), UnitLabel::Simple);
        assert_eq!(complex.label(), UnitLabel::Complex);
    }
}
