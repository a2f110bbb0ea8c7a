//! Emmental Virtual Machine
//!
//! This crate implements an interpreter for Emmental, a self-modifying
//! language over 8-bit cells. Every symbol (byte value) is bound to a
//! definition, a flat sequence of primitive actions, and programs rebind
//! symbols at runtime with `!`. The only control transfer is `?`, which runs
//! a symbol's current definition; since the language has no loop construct,
//! the VM eliminates tail calls so that recursion through `?` iterates at
//! constant host stack depth.
//!
//! # Modules
//!
//! - `value`: Cell type and wrapping cell arithmetic
//! - `action`: Primitive actions and the initial bindings
//! - `definitions`: The mutable symbol → definition table
//! - `vm`: Stack, queue and the execution engine
//! - `config`: VM tunables
//! - `disassemble`: Human-readable definition listings
//! - `error`: Error types for the VM

pub mod action;
pub mod config;
pub mod definitions;
pub mod disassemble;
pub mod error;
pub mod value;
pub mod vm;

// Re-export main types
pub use action::Action;
pub use config::VmConfig;
pub use definitions::{Definition, DefinitionTable};
pub use disassemble::{disassemble_definition, disassemble_redefined};
pub use error::VmError;
pub use value::Cell;
pub use vm::{Queue, Stack, VM};
