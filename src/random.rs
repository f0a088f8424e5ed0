//! Uniform random helpers used for placement and simulated shooters.
//! no_std friendly: callers supply the RNG.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::GameError;

/// Pick an element at a uniformly sampled index.
///
/// Returns `GameError::EmptyInput` when `items` is empty.
pub fn choice<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Result<&'a T, GameError> {
    if items.is_empty() {
        return Err(GameError::EmptyInput);
    }
    let idx = rng.random_range(0..items.len());
    Ok(&items[idx])
}

/// Return a uniformly shuffled copy of `items` (Fisher–Yates). The input is
/// left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// [`choice`] backed by the thread-local RNG.
#[cfg(feature = "std")]
pub fn random_choice<T>(items: &[T]) -> Result<&T, GameError> {
    choice(&mut rand::rng(), items)
}

/// [`shuffle`] backed by the thread-local RNG.
#[cfg(feature = "std")]
pub fn random_shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle(&mut rand::rng(), items)
}
