//! Sampling strategies for minimal samples.
//!
//! Every sampler implements the shared [`Sampler`](crate::core::Sampler)
//! trait, so the RANSAC loop never touches a random number generator
//! directly.

pub mod uniform;

pub use uniform::UniformRandomSampler;
