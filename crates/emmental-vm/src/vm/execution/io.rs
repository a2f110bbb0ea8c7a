//! Byte I/O action execution

use crate::action::Action;
use crate::error::VmError;
use crate::value;
use crate::vm::VM;
use log::debug;
use std::io::{Read, Write};

impl<R: Read, W: Write> VM<R, W> {
    /// Execute output and input actions
    pub(crate) fn execute_io(&mut self, action: Action) -> Result<(), VmError> {
        match action {
            Action::Output => {
                let cell = self.stack.pop(action.name())?;
                self.output.write_all(&[cell])?;
                Ok(())
            }

            Action::Input => {
                if self.config.flush_before_input {
                    self.output.flush()?;
                }
                let cell = match self.read_byte()? {
                    Some(byte) => byte,
                    None => {
                        debug!("end of input, pushing {}", value::EOF_SENTINEL);
                        value::EOF_SENTINEL
                    }
                };
                self.stack.push(cell);
                Ok(())
            }

            _ => unreachable!("Non-I/O action in I/O handler"),
        }
    }
}
