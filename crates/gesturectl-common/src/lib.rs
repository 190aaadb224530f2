//! # gesturectl-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the entire gesturectl workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and provides the primitives the classifier, the runtime
//! loop, and the front-ends all build upon.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
