//! Action execution handlers

mod arithmetic;
mod io;
mod meta;
mod stack_ops;
