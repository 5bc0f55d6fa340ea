//! Scoring module - per-round points and star ratings
//!
//! - A cascade round scores `unique cleared cells x per-cell rate`
//!   (100, or 150 for the rainbow item's own clear).
//! - Stars compare a final score against the stage target:
//!
//! | Score | Stars |
//! |-------|-------|
//! | below target | 0 |
//! | target ..= 1.2 x target | 1 |
//! | above 1.2 x target ..= 1.5 x target | 2 |
//! | above 1.5 x target | 3 |
//!
//! A score sitting exactly on 1.2x or 1.5x keeps the lower rating
//! (6000 against 5000 is one star, 7500 is two).
//! Ratios are compared in integer arithmetic (`5s > 6t`, `2s > 3t`).

/// Score for clearing `cleared` cells at `per_cell` points each
pub fn round_score(cleared: usize, per_cell: u32) -> u32 {
    (cleared as u32).saturating_mul(per_cell)
}

/// Star rating (0-3) of `score` against `target`
pub fn star_rating(score: u32, target: u32) -> u8 {
    let s = score as u64;
    let t = target as u64;
    if s < t {
        0
    } else if 5 * s <= 6 * t {
        1
    } else if 2 * s <= 3 * t {
        2
    } else {
        3
    }
}
