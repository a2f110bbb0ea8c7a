//! VM configuration

/// Default bound on nested non-tail `execute` calls
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Tunables for a [`VM`](crate::VM) instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmConfig {
    /// Nested non-tail `execute` calls allowed before the run fails with
    /// `CallDepthExceeded`. Tail calls never count.
    pub max_call_depth: usize,

    /// Flush pending output before blocking on input
    pub flush_before_input: bool,
}

impl VmConfig {
    pub fn new() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            flush_before_input: true,
        }
    }

    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }

    pub fn with_flush_before_input(mut self, flush_before_input: bool) -> Self {
        self.flush_before_input = flush_before_input;
        self
    }
}

impl Default for VmConfig {
    fn default() -> Self {
        Self::new()
    }
}
