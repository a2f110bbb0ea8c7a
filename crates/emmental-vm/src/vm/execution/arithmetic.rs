//! Arithmetic action execution

use crate::action::Action;
use crate::error::VmError;
use crate::value;
use crate::vm::VM;
use std::io::{Read, Write};

impl<R: Read, W: Write> VM<R, W> {
    /// Execute arithmetic actions
    pub(crate) fn execute_arithmetic(&mut self, action: Action) -> Result<(), VmError> {
        let name = action.name();

        match action {
            Action::Add => {
                let a = self.stack.pop(name)?;
                let b = self.stack.pop(name)?;
                self.stack.push(a.wrapping_add(b));
                Ok(())
            }

            // The operand popped second is the minuend
            Action::Sub => {
                let a = self.stack.pop(name)?;
                let b = self.stack.pop(name)?;
                self.stack.push(b.wrapping_sub(a));
                Ok(())
            }

            Action::Log2 => {
                let c = self.stack.pop(name)?;
                self.stack.push(value::discrete_log(c));
                Ok(())
            }

            _ => unreachable!("Non-arithmetic action in arithmetic handler"),
        }
    }
}
