//! Error types for the VM

use std::io;
use thiserror::Error;

/// VM runtime errors
///
/// Executing an unbound symbol is not an error: it runs the empty
/// definition and does nothing.
#[derive(Debug, Error)]
pub enum VmError {
    /// Pop or peek on an empty stack
    #[error("Stack underflow in {action}")]
    StackUnderflow { action: &'static str },

    /// Dequeue from an empty queue
    #[error("Queue underflow in {action}")]
    QueueUnderflow { action: &'static str },

    /// Too many nested non-tail `execute` calls
    #[error("Call depth exceeded (limit {limit})")]
    CallDepthExceeded { limit: usize },

    /// Failure reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
