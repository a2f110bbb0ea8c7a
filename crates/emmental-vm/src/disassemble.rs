//! Definition debugging utilities

use crate::action::Action;
use crate::definitions::DefinitionTable;
use crate::value::{self, Cell};

/// Render one binding as `'x' (0x78): dup, add, execute`
pub fn disassemble_definition(symbol: Cell, actions: &[Action]) -> String {
    let body = if actions.is_empty() {
        "<empty>".to_string()
    } else {
        actions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{:<6} (0x{:02x}): {}", value::describe(symbol), symbol, body)
}

/// Listing of every symbol rebound since the table was created
pub fn disassemble_redefined(table: &DefinitionTable) -> Vec<String> {
    table
        .iter_redefined()
        .map(|(symbol, definition)| disassemble_definition(symbol, definition))
        .collect()
}
