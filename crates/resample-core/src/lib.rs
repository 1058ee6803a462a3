//! Core primitives shared by the resampling engines
//!
//! This crate provides the pieces every resampling procedure needs and none
//! of the statistics:
//!
//! - **Errors**: a unified error type for all resample-stats crates
//! - **Seeding**: base-seed resolution and per-trial generator derivation
//! - **Sampling**: with-replacement draws for bootstrap resampling
//! - **Execution**: a trial runner that is sequential by default and uses
//!   rayon when the `parallel` feature is enabled
//!
//! Trials are order-independent by construction: trial `i` always derives its
//! own generator from the base seed and its index, so a seeded run produces
//! identical results whether trials execute on one thread or many.

pub mod error;
pub mod execution;
pub mod sampling;
pub mod seed;

pub use error::{Error, Result};
