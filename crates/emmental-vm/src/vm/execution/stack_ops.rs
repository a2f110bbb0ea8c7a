//! Literal, stack and queue action execution

use crate::action::Action;
use crate::error::VmError;
use crate::value;
use crate::vm::VM;
use std::io::{Read, Write};

impl<R: Read, W: Write> VM<R, W> {
    /// Execute literal, stack and queue actions
    pub(crate) fn execute_stack_ops(&mut self, action: Action) -> Result<(), VmError> {
        let name = action.name();

        match action {
            Action::PushDigit(digit) => self
                .stack
                .mutate_top(name, |tail| value::accumulate_digit(tail, digit)),

            Action::PushChar(cell) => {
                self.stack.push(cell);
                Ok(())
            }

            Action::Dup => {
                let top = self.stack.peek(name)?;
                self.stack.push(top);
                Ok(())
            }

            // Copies; the stack keeps its tail
            Action::Enqueue => {
                let top = self.stack.peek(name)?;
                self.queue.enqueue(top);
                Ok(())
            }

            Action::Dequeue => {
                let head = self.queue.dequeue(name)?;
                self.stack.push(head);
                Ok(())
            }

            _ => unreachable!("Non-stack action in stack handler"),
        }
    }
}
