//! Ready-made game setups.
//!
//! `classic` deals the standard board game: classic ticket allotments, the
//! 24-round reveal schedule and seeded start locations.

pub mod classic;

pub use classic::ClassicSetup;
