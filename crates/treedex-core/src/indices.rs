//! Syntactic complexity indices.
//!
//! Fourteen ratios derived from one [`StructureCount`]. Division is safe
//! in a deliberately broad sense: the quotient is zero whenever either
//! operand is zero — the numerator too, not just the denominator.
//! Ratios are stored at full precision; the tabular layer formats them to
//! four fractional digits.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counts::StructureCount;

/// Divide two counts, yielding 0.0 when either is zero.
///
/// Never a division error, never negative.
pub fn safe_div(x: f64, y: f64) -> f64 {
    if x == 0.0 || y == 0.0 { 0.0 } else { x / y }
}

/// The fourteen complexity ratios for one analysis unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComplexityIndices {
    /// Mean length of sentence (MLS): words per sentence.
    pub mls: f64,
    /// Mean length of T-unit (MLT): words per T-unit.
    pub mlt: f64,
    /// Mean length of clause (MLC): words per clause.
    pub mlc: f64,
    /// Clauses per sentence (C/S).
    pub c_s: f64,
    /// Verb phrases per T-unit (VP/T).
    pub vp_t: f64,
    /// Clauses per T-unit (C/T).
    pub c_t: f64,
    /// Dependent clauses per clause (DC/C).
    pub dc_c: f64,
    /// Dependent clauses per T-unit (DC/T).
    pub dc_t: f64,
    /// T-units per sentence (T/S).
    pub t_s: f64,
    /// Complex T-unit ratio (CT/T).
    pub ct_t: f64,
    /// Coordinate phrases per T-unit (CP/T).
    pub cp_t: f64,
    /// Coordinate phrases per clause (CP/C).
    pub cp_c: f64,
    /// Complex nominals per T-unit (CN/T).
    pub cn_t: f64,
    /// Complex nominals per clause (CN/C).
    pub cn_c: f64,
}

impl ComplexityIndices {
    /// Derive all fourteen ratios from one structure count.
    pub fn from_counts(counts: &StructureCount) -> Self {
        let w = counts.words as f64;
        let s = counts.sentences as f64;
        let vp = counts.verb_phrases as f64;
        let c = counts.clauses as f64;
        let t = counts.t_units as f64;
        let dc = counts.dependent_clauses as f64;
        let ct = counts.complex_t_units as f64;
        let cp = counts.coordinate_phrases as f64;
        let cn = counts.complex_nominals as f64;

        Self {
            mls: safe_div(w, s),
            mlt: safe_div(w, t),
            mlc: safe_div(w, c),
            c_s: safe_div(c, s),
            vp_t: safe_div(vp, t),
            c_t: safe_div(c, t),
            dc_c: safe_div(dc, c),
            dc_t: safe_div(dc, t),
            t_s: safe_div(t, s),
            ct_t: safe_div(ct, t),
            cp_t: safe_div(cp, t),
            cp_c: safe_div(cp, c),
            cn_t: safe_div(cn, t),
            cn_c: safe_div(cn, c),
        }
    }

    /// The ratios in reporting order.
    pub const fn in_order(&self) -> [f64; 14] {
        [
            self.mls, self.mlt, self.mlc, self.c_s, self.vp_t, self.c_t, self.dc_c, self.dc_t,
            self.t_s, self.ct_t, self.cp_t, self.cp_c, self.cn_t, self.cn_c,
        ]
    }
}
