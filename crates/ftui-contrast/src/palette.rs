//! Darkest-color selection over a palette.
//!
//! Ties go to the earliest color: a later candidate only replaces the
//! current one when its luminance is strictly lower. The parallel variants
//! reduce over `(index, luminance)` pairs with the same rule, so they agree
//! with the sequential ones.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::color::Color;

/// Index of the darkest color, or `None` for an empty palette.
#[must_use]
pub fn darkest_index(colors: &[Color]) -> Option<usize> {
    let (first, rest) = colors.split_first()?;
    let mut best = 0;
    let mut best_luma = first.luminance();
    for (offset, color) in rest.iter().enumerate() {
        let luma = color.luminance();
        if luma < best_luma {
            best = offset + 1;
            best_luma = luma;
        }
    }
    Some(best)
}

/// The darkest color in `colors`, earliest wins on ties.
///
/// An empty palette has no darkest color; callers that need a value must
/// guarantee at least one candidate.
#[must_use]
pub fn darkest_of(colors: &[Color]) -> Option<Color> {
    darkest_index(colors).map(|idx| colors[idx])
}

/// Parallel [`darkest_index`] for large palettes.
#[must_use]
pub fn par_darkest_index(colors: &[Color]) -> Option<usize> {
    colors
        .par_iter()
        .enumerate()
        .map(|(idx, color)| (idx, color.luminance()))
        .reduce_with(darker_of)
        .map(|(idx, _)| idx)
}

/// Parallel [`darkest_of`] for large palettes.
#[must_use]
pub fn par_darkest_of(colors: &[Color]) -> Option<Color> {
    par_darkest_index(colors).map(|idx| colors[idx])
}

fn darker_of(a: (usize, f64), b: (usize, f64)) -> (usize, f64) {
    match b.1.total_cmp(&a.1) {
        Ordering::Less => b,
        Ordering::Greater => a,
        Ordering::Equal if b.0 < a.0 => b,
        Ordering::Equal => a,
    }
}
