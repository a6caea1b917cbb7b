//! Per-record Shannon and Simpson components
//!
//! shannon_i = -p_i ln p_i, simpson_i = p_i²
//!
//! A zero proportion contributes exactly 0 to Shannon (lim x→0 of x ln x).
//! Evaluating the expression literally gives 0 × -inf = NaN, so that case is
//! special-cased.

/// Component columns derived from a proportion column
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentColumns {
    /// ln(p_i); -inf where p_i == 0
    pub ln_proportion: Vec<f64>,
    pub shannon: Vec<f64>,
    pub simpson: Vec<f64>,
}

/// Shannon contribution of a single proportion
#[inline]
pub fn shannon_component(p: f64) -> f64 {
    if p == 0.0 {
        0.0
    } else {
        -p * p.ln()
    }
}

/// Simpson contribution of a single proportion
#[inline]
pub fn simpson_component(p: f64) -> f64 {
    p * p
}

/// Calculate component columns for every record
pub fn calculate_components(proportions: &[f64]) -> ComponentColumns {
    let n = proportions.len();
    let mut ln_proportion = Vec::with_capacity(n);
    let mut shannon = Vec::with_capacity(n);
    let mut simpson = Vec::with_capacity(n);

    for &p in proportions {
        ln_proportion.push(p.ln());
        shannon.push(shannon_component(p));
        simpson.push(simpson_component(p));
    }

    ComponentColumns {
        ln_proportion,
        shannon,
        simpson,
    }
}
