//! Primitive action definitions for the Emmental VM
//!
//! Every definition, built-in or user-made, is a flat sequence of these
//! actions. `Execute` is the only action that transfers control: it pops a
//! symbol and runs that symbol's definition as found in the live table.

use crate::value::{self, Cell};
use std::fmt;

/// Built-in operation a definition is composed of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // ===== Literals =====
    /// Tail = tail * 10 + d (digit symbols `0`-`9`)
    PushDigit(u8),
    /// Push a fixed cell (`#` pushes 0, `;` pushes `;`)
    PushChar(Cell),

    // ===== I/O =====
    /// Pop and write one raw byte (`.`)
    Output,
    /// Read one raw byte and push it, 255 at end of input (`,`)
    Input,

    // ===== Stack & Queue =====
    /// Push a copy of the tail (`:`)
    Dup,
    /// Copy the tail onto the back of the queue (`^`)
    Enqueue,
    /// Move the queue's head onto the stack (`v`)
    Dequeue,

    // ===== Arithmetic =====
    /// Pop a, pop b, push a + b (`+`)
    Add,
    /// Pop a, pop b, push b - a (`-`)
    Sub,
    /// Pop c, push the index of its highest set bit, 8 for 0 (`~`)
    Log2,

    // ===== Meta =====
    /// Pop a symbol and bind it to the flattened source above the last `;` (`!`)
    Redefine,
    /// Pop a symbol and run its current definition (`?`)
    Execute,
}

impl Action {
    /// Name used in underflow diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Action::PushDigit(_) => "push-digit",
            Action::PushChar(_) => "push-char",
            Action::Output => "output",
            Action::Input => "input",
            Action::Dup => "duplicate",
            Action::Enqueue => "enqueue",
            Action::Dequeue => "dequeue",
            Action::Add => "add",
            Action::Sub => "subtract",
            Action::Log2 => "discrete-log",
            Action::Redefine => "redefine",
            Action::Execute => "execute",
        }
    }

    /// Whether this action resolves a symbol against the live table
    #[inline]
    pub fn is_call_through(&self) -> bool {
        matches!(self, Action::Execute)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::PushDigit(d) => write!(f, "digit {}", d),
            Action::PushChar(c) => write!(f, "push 0x{:02x}", c),
            Action::Output => write!(f, "output"),
            Action::Input => write!(f, "input"),
            Action::Dup => write!(f, "dup"),
            Action::Enqueue => write!(f, "enqueue"),
            Action::Dequeue => write!(f, "dequeue"),
            Action::Add => write!(f, "add"),
            Action::Sub => write!(f, "sub"),
            Action::Log2 => write!(f, "log2"),
            Action::Redefine => write!(f, "redefine"),
            Action::Execute => write!(f, "execute"),
        }
    }
}

/// Initial binding of every symbol that has one
pub fn builtin(symbol: Cell) -> Option<Action> {
    let action = match symbol {
        b'#' => Action::PushChar(value::NULL),
        b';' => Action::PushChar(value::DELIMITER),
        b'0'..=b'9' => Action::PushDigit(symbol - b'0'),
        b'.' => Action::Output,
        b'!' => Action::Redefine,
        b'?' => Action::Execute,
        b'^' => Action::Enqueue,
        b'v' => Action::Dequeue,
        b':' => Action::Dup,
        b'+' => Action::Add,
        b'-' => Action::Sub,
        b'~' => Action::Log2,
        b',' => Action::Input,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_symbols() {
        assert_eq!(builtin(b'#'), Some(Action::PushChar(0)));
        assert_eq!(builtin(b';'), Some(Action::PushChar(b';')));
        assert_eq!(builtin(b'0'), Some(Action::PushDigit(0)));
        assert_eq!(builtin(b'9'), Some(Action::PushDigit(9)));
        assert_eq!(builtin(b'?'), Some(Action::Execute));
        assert_eq!(builtin(b'v'), Some(Action::Dequeue));
        assert_eq!(builtin(b'a'), None);
        assert_eq!(builtin(0), None);
    }

    #[test]
    fn test_builtin_count() {
        let bound = (0..=255u8).filter_map(builtin).count();
        // ten digits plus `#;.!?^v:+-~,`
        assert_eq!(bound, 22);
    }

    #[test]
    fn test_only_execute_calls_through() {
        assert!(Action::Execute.is_call_through());
        assert!(!Action::Redefine.is_call_through());
        assert!(!Action::PushDigit(1).is_call_through());
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::PushDigit(3).to_string(), "digit 3");
        assert_eq!(Action::PushChar(b';').to_string(), "push 0x3b");
        assert_eq!(Action::Log2.to_string(), "log2");
    }
}
