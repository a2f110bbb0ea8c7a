//! Definition table
//!
//! Maps every symbol to its current definition. Definitions are shared
//! `Rc<[Action]>` slices: a running definition keeps its own handle, so
//! rebinding the symbol mid-run never disturbs the actions already in flight.

use crate::action::{self, Action};
use crate::value::Cell;
use std::rc::Rc;

/// Ordered sequence of primitive actions bound to a symbol
pub type Definition = Rc<[Action]>;

/// Number of distinct symbols
pub const SYMBOL_COUNT: usize = 256;

/// Current meaning of all 256 symbols
#[derive(Debug, Clone)]
pub struct DefinitionTable {
    entries: Vec<Definition>,
}

impl DefinitionTable {
    /// Create a table holding the initial built-in bindings
    pub fn new() -> Self {
        let entries = (0..SYMBOL_COUNT)
            .map(|symbol| Self::initial(symbol as Cell))
            .collect();
        Self { entries }
    }

    fn initial(symbol: Cell) -> Definition {
        match action::builtin(symbol) {
            Some(action) => Rc::from([action]),
            None => Rc::from([]),
        }
    }

    /// Current definition of `symbol` (empty when unbound)
    #[inline]
    pub fn get(&self, symbol: Cell) -> &Definition {
        &self.entries[symbol as usize]
    }

    /// Replace the definition of `symbol`
    pub fn set(&mut self, symbol: Cell, definition: Definition) {
        self.entries[symbol as usize] = definition;
    }

    /// Concatenate the current definitions of `source`, in order
    ///
    /// The result is a snapshot; later rebinding of any source symbol does
    /// not affect it.
    pub fn flatten(&self, source: &[Cell]) -> Vec<Action> {
        source
            .iter()
            .flat_map(|&symbol| self.get(symbol).iter().copied())
            .collect()
    }

    /// True if `symbol` still carries its initial binding
    pub fn is_builtin(&self, symbol: Cell) -> bool {
        let current = self.get(symbol);
        match action::builtin(symbol) {
            Some(action) => current.len() == 1 && current[0] == action,
            None => current.is_empty(),
        }
    }

    /// Symbols with a non-empty definition, ascending
    pub fn iter_defined(&self) -> impl Iterator<Item = (Cell, &Definition)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, definition)| !definition.is_empty())
            .map(|(symbol, definition)| (symbol as Cell, definition))
    }

    /// Symbols whose definition differs from the initial table, ascending
    pub fn iter_redefined(&self) -> impl Iterator<Item = (Cell, &Definition)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(symbol, definition)| (symbol as Cell, definition))
            .filter(|&(symbol, _)| !self.is_builtin(symbol))
    }
}

impl Default for DefinitionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_table() {
        let table = DefinitionTable::new();
        assert_eq!(&**table.get(b'+'), &[Action::Add]);
        assert_eq!(&**table.get(b'5'), &[Action::PushDigit(5)]);
        assert!(table.get(b'a').is_empty());
        assert!(table.get(0).is_empty());
        assert!(table.get(255).is_empty());
        assert_eq!(table.iter_defined().count(), 22);
        assert_eq!(table.iter_redefined().count(), 0);
    }

    #[test]
    fn test_flatten_concatenates_current_definitions() {
        let mut table = DefinitionTable::new();
        table.set(b'x', Rc::from([Action::Dup, Action::Add]));

        let flat = table.flatten(b"x.z?");
        assert_eq!(
            flat,
            vec![Action::Dup, Action::Add, Action::Output, Action::Execute]
        );
    }

    #[test]
    fn test_set_tracks_builtin_state() {
        let mut table = DefinitionTable::new();
        assert!(table.is_builtin(b'.'));

        table.set(b'.', Rc::from([Action::Add]));
        assert!(!table.is_builtin(b'.'));

        table.set(b'.', Rc::from([Action::Output]));
        assert!(table.is_builtin(b'.'));

        table.set(b'q', Rc::from([Action::Dup]));
        let redefined: Vec<Cell> = table.iter_redefined().map(|(s, _)| s).collect();
        assert_eq!(redefined, vec![b'q']);
    }

    #[test]
    fn test_clearing_a_builtin() {
        let mut table = DefinitionTable::new();
        table.set(b'+', Rc::from([]));
        assert!(table.get(b'+').is_empty());
        assert!(!table.is_builtin(b'+'));
        assert_eq!(table.iter_defined().count(), 21);
    }
}
