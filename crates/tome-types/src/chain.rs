//! Inspection of `std::error::Error` source chains.
//!
//! Errors in Tome wrap their cause through [`Error::source`]. These helpers
//! walk that chain, starting with the error itself, so callers can ask
//! whether a particular cause is present without knowing how many layers
//! sit in between.

use std::error::Error;

/// Iterate over `err` followed by each of its transitive sources.
pub fn sources<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(err), |&e| e.source())
}

/// Return the first link in the chain whose concrete type is `E`.
pub fn find_cause<'a, E>(err: &'a (dyn Error + 'static)) -> Option<&'a E>
where
    E: Error + 'static,
{
    sources(err).find_map(|e| e.downcast_ref::<E>())
}

/// Returns `true` if any link in the chain is an `E` equal to `target`.
pub fn chain_contains<E>(err: &(dyn Error + 'static), target: &E) -> bool
where
    E: Error + PartialEq + 'static,
{
    sources(err).any(|e| e.downcast_ref::<E>() == Some(target))
}
