//! Fixed classification policy.
//!
//! These values are an empirically chosen policy, not a calibrated model.
//! They are kept verbatim, including the asymmetric Low/Medium clauses.

/// Population standard deviation (intensity units) below which an image is
/// treated as near-uniform and short-circuited to `Low`.
pub const MIN_STD_DEV: f64 = 1.0;

/// `Low` requires the normalized chi-square score strictly below this value...
pub const LOW_MAX_CHI_SQUARE: f64 = 0.1;

/// ...and the entropy strictly below this value.
pub const LOW_MAX_ENTROPY: f64 = 7.3;

/// `Medium` when the normalized chi-square score is strictly below this value...
pub const MEDIUM_MAX_CHI_SQUARE: f64 = 0.5;

/// ...or the entropy is strictly below this value.
pub const MEDIUM_MAX_ENTROPY: f64 = 7.8;

/// Upper bound of Shannon entropy for an 8-bit channel.
pub const MAX_ENTROPY_BITS: f64 = 8.0;

/// Decimal places kept in reported scores.
pub const SCORE_DECIMALS: usize = 3;
