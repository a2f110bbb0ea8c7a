//! Stack and queue storage
//!
//! Both containers hold raw cells and report underflow with the name of the
//! action that caused it.

use crate::error::VmError;
use crate::value::Cell;
use std::collections::VecDeque;

/// Cell stack, growable at the tail only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    cells: Vec<Cell>,
}

impl Stack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Contents, bottom first
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Remove and return the tail
    #[inline]
    pub fn pop(&mut self, action: &'static str) -> Result<Cell, VmError> {
        self.cells.pop().ok_or(VmError::StackUnderflow { action })
    }

    /// Return the tail without removing it
    #[inline]
    pub fn peek(&self, action: &'static str) -> Result<Cell, VmError> {
        self.cells
            .last()
            .copied()
            .ok_or(VmError::StackUnderflow { action })
    }

    /// Replace the tail with `f(tail)`
    pub fn mutate_top<F>(&mut self, action: &'static str, f: F) -> Result<(), VmError>
    where
        F: FnOnce(Cell) -> Cell,
    {
        let top = self
            .cells
            .last_mut()
            .ok_or(VmError::StackUnderflow { action })?;
        *top = f(*top);
        Ok(())
    }

    /// Index of the rightmost cell equal to `cell`
    pub fn find_last(&self, cell: Cell) -> Option<usize> {
        self.cells.iter().rposition(|&c| c == cell)
    }

    /// Cells from `index` to the tail, without removing them
    pub fn tail_from(&self, index: usize) -> &[Cell] {
        &self.cells[index.min(self.cells.len())..]
    }

    /// Remove every cell from `index` to the tail, inclusive
    pub fn truncate_from(&mut self, index: usize) {
        self.cells.truncate(index);
    }
}

/// FIFO cell queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue {
    cells: VecDeque<Cell>,
}

impl Queue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            cells: VecDeque::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Contents, head first
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Append at the tail
    #[inline]
    pub fn enqueue(&mut self, cell: Cell) {
        self.cells.push_back(cell);
    }

    /// Remove and return the head
    #[inline]
    pub fn dequeue(&mut self, action: &'static str) -> Result<Cell, VmError> {
        self.cells
            .pop_front()
            .ok_or(VmError::QueueUnderflow { action })
    }
}
