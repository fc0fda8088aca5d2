//! Document assembly engine.
//!
//! Ties the shell package, component library and plan validator together and
//! implements the assembly algorithm: clone the shell, walk the plan's
//! component tree in order, render each instance, splice the rendered XML
//! into the shell's document body, and re-serialize the package.
//!
//! The engine holds only read-only state after construction and is safe to
//! share across concurrent requests; all per-request mutation happens on a
//! clone of the shell.

pub mod assembler;
pub mod engine;
pub mod error;

pub use assembler::{Assembler, MAX_PLAN_DEPTH, MAX_PLAN_NODES, SpliceStrategy};
pub use engine::Engine;
pub use error::{AssembleError, EngineError};
