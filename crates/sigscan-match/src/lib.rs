#![deny(missing_docs)]

//! Concrete decay-signature matchers.
//!
//! Each matcher implements the [`sigscan_truth::SignatureMatcher`]
//! contract for one hypothesized process: charged-kaon decay (muonic or
//! pionic), neutral-kaon decay through a K-short, and Lambda decay.
//! Matchers are first-fit: the scan stops at the first primary particle
//! satisfying seed, topology, and threshold tests.

mod charged_kaon;
mod helpers;
mod kaon_short;
mod lambda;

pub use charged_kaon::ChargedKaonMatcher;
pub use kaon_short::KaonShortMatcher;
pub use lambda::LambdaMatcher;
