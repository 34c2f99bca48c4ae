//! Errors raised by the numerical layer.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CosmoError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CosmoError {
    #[error("{what} needs at least {min} samples, got {got}")]
    TooFewSamples {
        what: &'static str,
        min: usize,
        got: usize,
    },

    #[error("length mismatch in {what}: {left} vs {right}")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    #[error("negative discriminant {discriminant} solving E(z) at z = {z}")]
    NegativeDiscriminant { z: f64, discriminant: f64 },

    #[error("non-finite {what} at index {index}")]
    NonFinite { what: &'static str, index: usize },

    #[error("integration diverged at x = {x}")]
    IntegrationFailed { x: f64 },

    #[error("invalid distribution for {name}: {message}")]
    InvalidDistribution { name: &'static str, message: String },

    #[error("zero reference value at index {index}")]
    ZeroReference { index: usize },
}
