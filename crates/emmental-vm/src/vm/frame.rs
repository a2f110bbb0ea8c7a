//! Call frame implementation

use crate::action::Action;
use crate::definitions::Definition;

/// Activation of one definition
#[derive(Debug, Clone)]
pub struct CallFrame {
    /// Definition being executed
    pub definition: Definition,

    /// Instruction pointer (next action to run)
    pub ip: usize,
}

impl CallFrame {
    /// Create a new call frame
    pub fn new(definition: Definition) -> Self {
        Self { definition, ip: 0 }
    }

    /// Fetch current action and advance IP
    pub fn fetch(&mut self) -> Option<Action> {
        let action = self.definition.get(self.ip).copied();
        if action.is_some() {
            self.ip += 1;
        }
        action
    }

    /// True once every action has been fetched
    pub fn is_finished(&self) -> bool {
        self.ip >= self.definition.len()
    }
}
