// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Generator orchestration for the primelib SDK generator.
//!
//! Turns a resolved [`primelib_config::Configuration`] into generator tasks and
//! runs each one through an external code generation backend.
//!
//! # Module Organization
//!
//! - [`task`] - The unit of work ([`GeneratorTask`]) and its options
//! - [`backend`] - Backend invokers (openapi-generator, primecodegen)
//! - [`reconcile`] - Manifest-driven removal of stale output
//! - [`preset`] - Language presets mapped onto backend configuration
//! - [`orchestrator`] - Planning and sequential execution of tasks
//! - [`process`] - The process runner seam
//! - [`testing`] - Test utilities (feature-gated)

pub mod backend;
mod error;
pub mod orchestrator;
pub mod preset;
pub mod process;
pub mod reconcile;
pub mod task;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use backend::{Backend, Invocation, OpenApiGenerator, PrimeCodeGen};
pub use error::{Error, Result};
pub use orchestrator::{FailurePolicy, Orchestrator, PlanContext, RunReport, TaskOutcome};
pub use process::{ProcessRunner, SystemRunner, executable_from_env, resolve_executable};
pub use reconcile::{MANIFEST_PATH, ReconcileReport};
pub use task::{GenerateOptions, GeneratorTask};
