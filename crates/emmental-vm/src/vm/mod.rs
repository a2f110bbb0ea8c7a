//! Virtual Machine implementation

use crate::action::Action;
use crate::config::VmConfig;
use crate::definitions::{Definition, DefinitionTable};
use crate::error::VmError;
use crate::value::{self, Cell};
use log::trace;
use std::io::{self, Read, Write};

// Module structure
mod execution;
mod frame;
mod stack;

// Re-export public types
pub use frame::CallFrame;
pub use stack::{Queue, Stack};

/// Virtual Machine
///
/// Owns the stack, the queue and the definition table for one run, plus the
/// byte streams read by `,` and written by `.`. Nested `execute` calls live
/// in an explicit frame stack, so call depth never consumes host stack.
pub struct VM<R, W> {
    /// Data stack
    stack: Stack,

    /// FIFO queue fed by `^` and drained by `v`
    queue: Queue,

    /// Current meaning of every symbol
    definitions: DefinitionTable,

    /// Call stack; the bottom frame is the dispatched program byte
    frames: Vec<CallFrame>,

    /// Source for the input action
    input: R,

    /// Sink for the output action
    output: W,

    config: VmConfig,

    /// Deepest nesting of non-tail `execute` calls reached so far
    high_water: usize,
}

impl<R: Read, W: Write> VM<R, W> {
    /// Create a new VM with the default configuration
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, VmConfig::default())
    }

    /// Create a new VM with an explicit configuration
    pub fn with_config(input: R, output: W, config: VmConfig) -> Self {
        Self {
            stack: Stack::new(),
            queue: Queue::new(),
            definitions: DefinitionTable::new(),
            frames: Vec::with_capacity(64),
            input,
            output,
            config,
            high_water: 0,
        }
    }

    /// Dispatch every byte of `program`, left to right
    ///
    /// Output is flushed before returning, whether or not the run failed.
    pub fn run(&mut self, program: &[u8]) -> Result<(), VmError> {
        let result = program.iter().try_for_each(|&symbol| self.dispatch(symbol));
        let flushed = self.output.flush();
        result?;
        flushed?;
        Ok(())
    }

    /// Run the current definition of one program byte
    pub fn dispatch(&mut self, symbol: Cell) -> Result<(), VmError> {
        let definition = self.definitions.get(symbol).clone();
        self.run_definition(definition)
    }

    /// Run a definition, and every call it makes, to completion
    fn run_definition(&mut self, definition: Definition) -> Result<(), VmError> {
        let base = self.frames.len();
        self.frames.push(CallFrame::new(definition));
        let result = self.run_frames(base);
        self.frames.truncate(base);
        result
    }

    /// Main execution loop
    ///
    /// A trailing `execute` replaces the current frame instead of pushing a
    /// new one, so tail recursion runs at constant depth.
    fn run_frames(&mut self, base: usize) -> Result<(), VmError> {
        while self.frames.len() > base {
            let frame = self.frames.last_mut().ok_or(VmError::StackUnderflow {
                action: Action::Execute.name(),
            })?;

            let action = match frame.fetch() {
                Some(action) => action,
                None => {
                    // End of definition, return to caller
                    self.frames.pop();
                    continue;
                }
            };

            if !action.is_call_through() {
                self.perform(action)?;
                continue;
            }

            let tail_call = frame.is_finished();
            let symbol = self.stack.pop(action.name())?;
            let definition = self.definitions.get(symbol).clone();

            if tail_call {
                trace!("tail call into {}", value::describe(symbol));
                *frame = CallFrame::new(definition);
                continue;
            }

            let depth = self.frames.len() - base;
            if depth > self.config.max_call_depth {
                return Err(VmError::CallDepthExceeded {
                    limit: self.config.max_call_depth,
                });
            }
            trace!("execute {} at depth {}", value::describe(symbol), depth);
            self.high_water = self.high_water.max(depth);
            self.frames.push(CallFrame::new(definition));
        }
        Ok(())
    }

    /// Pop a symbol and run its current definition
    pub(crate) fn call_symbol(&mut self) -> Result<(), VmError> {
        let symbol = self.stack.pop(Action::Execute.name())?;
        let definition = self.definitions.get(symbol).clone();
        self.run_definition(definition)
    }

    /// Perform a single primitive action
    pub fn perform(&mut self, action: Action) -> Result<(), VmError> {
        match action {
            // Literals, stack and queue
            Action::PushDigit(_)
            | Action::PushChar(_)
            | Action::Dup
            | Action::Enqueue
            | Action::Dequeue => self.execute_stack_ops(action),

            // Arithmetic
            Action::Add | Action::Sub | Action::Log2 => self.execute_arithmetic(action),

            // I/O
            Action::Output | Action::Input => self.execute_io(action),

            // Redefinition and execution
            Action::Redefine | Action::Execute => self.execute_meta(action),
        }
    }

    // ===== Accessors =====

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn definitions(&self) -> &DefinitionTable {
        &self.definitions
    }

    /// Deepest nesting of non-tail `execute` calls reached so far
    pub fn call_depth_high_water(&self) -> usize {
        self.high_water
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consume the VM and hand back its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one byte, `None` at end of input
    pub(crate) fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
