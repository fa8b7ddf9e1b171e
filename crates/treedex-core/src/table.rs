//! Tabular output assembly.
//!
//! One header row plus one 24-field row per unit: identifier, the nine
//! frequencies as integers, the fourteen ratios with exactly four
//! fractional digits. Fields are plain comma-joined — the format is meant
//! for spreadsheet import, and identifiers are filenames. Sentence-level
//! tables carry a trailing `Label` column.

use crate::batch::{AnalysisRecord, LabeledRecord};

/// The 24 output fields, in reporting order.
pub const HEADER: [&str; 24] = [
    "Filename",
    "words (W)",
    "sentences (S)",
    "verb phrases (VP)",
    "clauses (C)",
    "T-units (T)",
    "dependent clauses (DC)",
    "complex T-units (CT)",
    "coordinate phrases (CP)",
    "complex nominals (CN)",
    "mean length of sentence (MLS)",
    "mean length of T-unit (MLT)",
    "mean length of clause (MLC)",
    "clauses per sentence (C/S)",
    "verb phrases per T-unit (VP/T)",
    "clauses per T-unit (C/T)",
    "dependent clauses per clause (DC/C)",
    "dependent clauses per T-unit (DC/T)",
    "T-units per sentence (T/S)",
    "complex T-unit ratio (CT/T)",
    "coordinate phrases per T-unit (CP/T)",
    "coordinate phrases per clause (CP/C)",
    "complex nominals per T-unit (CN/T)",
    "complex nominals per clause (CN/C)",
];

/// Zero-based index of the complex-T-unit column — the column the
/// sentence classifier keys on.
pub const COMPLEX_T_UNIT_COLUMN: usize = 7;

/// The comma-joined header row.
pub fn header_row() -> String {
    HEADER.join(",")
}

/// The header row with the trailing `Label` column.
pub fn labeled_header_row() -> String {
    format!("{},Label", header_row())
}

/// The 24 field values for one record.
pub fn fields(record: &AnalysisRecord) -> Vec<String> {
    let c = &record.counts;
    let mut out = Vec::with_capacity(HEADER.len());
    out.push(record.identifier.clone());
    for count in [
        c.words,
        c.sentences,
        c.verb_phrases,
        c.clauses,
        c.t_units,
        c.dependent_clauses,
        c.complex_t_units,
        c.coordinate_phrases,
        c.complex_nominals,
    ] {
        out.push(count.to_string());
    }
    for ratio in record.indices.in_order() {
        out.push(format!("{ratio:.4}"));
    }
    out
}

/// The comma-joined row for one record.
pub fn record_row(record: &AnalysisRecord) -> String {
    fields(record).join(",")
}

/// The comma-joined row for one labeled record.
pub fn labeled_row(labeled: &LabeledRecord) -> String {
    format!("{},{}", record_row(&labeled.record), labeled.label)
}
