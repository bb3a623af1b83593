//! Pure detector functions over a validated transcript.
//!
//! Polymorphism here is limited to the two filler-detection strategies
//! (word-level timing vs. position-estimated), modeled as a tagged variant
//! (`filler::TimingSource`) rather than a trait object.

pub mod filler;
pub mod silence;
