//! # volura-math
//!
//! Linear algebra primitives for the Volura simulation engine.
//!
//! Provides:
//! - Re-exports of `glam` double-precision types (`DVec3`, `DMat3`, etc.)
//! - Sign-corrected 3×3 singular value decomposition and polar rotation
//!   extraction for the corotational force model
//! - Sparse matrix representation (CSR) and Cholesky solver interface
//! - A `faer`-backed sparse LLᵀ solver with cached factorization

pub mod faer_solver;
pub mod sparse;
pub mod svd;

// Re-export glam's f64 types as the canonical math types for Volura.
pub use glam::{DMat3, DMat4, DQuat, DVec2, DVec3, DVec4};
