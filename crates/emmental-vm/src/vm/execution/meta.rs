//! Redefinition and execution

use crate::action::Action;
use crate::definitions::Definition;
use crate::error::VmError;
use crate::value;
use crate::vm::VM;
use log::debug;
use std::io::{Read, Write};

impl<R: Read, W: Write> VM<R, W> {
    /// Execute the redefine and execute actions
    pub(crate) fn execute_meta(&mut self, action: Action) -> Result<(), VmError> {
        match action {
            Action::Redefine => self.redefine(),
            Action::Execute => self.call_symbol(),
            _ => unreachable!("Non-meta action in meta handler"),
        }
    }

    /// Pop a symbol and bind it to the flattened source above the last `;`
    ///
    /// Without a delimiter the source starts at the bottom of the stack. The
    /// source, and the delimiter if any, are removed from the stack.
    fn redefine(&mut self) -> Result<(), VmError> {
        let symbol = self.stack.pop(Action::Redefine.name())?;

        let boundary = self.stack.find_last(value::DELIMITER);
        let source_start = boundary.map_or(0, |index| index + 1);
        let actions = self.definitions.flatten(self.stack.tail_from(source_start));
        self.stack.truncate_from(boundary.unwrap_or(0));

        debug!(
            "redefine {} as [{}]",
            value::describe(symbol),
            actions
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        let definition: Definition = actions.into();
        self.definitions.set(symbol, definition);
        Ok(())
    }
}
