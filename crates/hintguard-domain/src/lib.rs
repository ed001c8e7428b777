//! Pure HintPath rule evaluation (no IO).
//!
//! Input: reference declarations parsed elsewhere, plus an injected
//! [`FileExistenceChecker`] for the one rule that needs the file system.
//! Output: ordered violations, findings, verdict and summary data.

#![forbid(unsafe_code)]

pub mod checker;
pub mod model;
pub mod policy;
pub mod report;
pub mod violation;

pub mod checks;
mod engine;
mod fingerprint;
mod verifier;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use checker::FileExistenceChecker;
pub use engine::evaluate;
pub use verifier::Verifier;
pub use violation::{Violation, ViolationKind};
