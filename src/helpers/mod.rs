//! Small general-purpose pieces used across the crate

#[cfg(test)]
use super::*;

#[cfg(test)]
mod test_helpers;
mod thin_ptr;

#[cfg(test)]
pub use test_helpers::*;
pub use thin_ptr::ThinPtr;
