//! Common, shared types.

pub mod layers;
pub mod signals;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;
