//! Helper functions and common imports for integration tests.

use crate::config::VmConfig;
use crate::error::VmError;
use crate::vm::VM;
use std::io;

pub type TestVm = VM<io::Cursor<Vec<u8>>, Vec<u8>>;

/// Fresh VM reading `input` and writing into a byte vector
pub fn vm_with_input(input: &[u8]) -> TestVm {
    VM::new(io::Cursor::new(input.to_vec()), Vec::new())
}

/// Fresh VM with an explicit configuration and no input
pub fn vm_with_config(config: VmConfig) -> TestVm {
    VM::with_config(io::Cursor::new(Vec::new()), Vec::new(), config)
}

/// Run a program with empty input and return everything it wrote
pub fn execute(program: &[u8]) -> Result<Vec<u8>, String> {
    execute_with_input(program, b"")
}

/// Run a program against `input` and return everything it wrote
pub fn execute_with_input(program: &[u8], input: &[u8]) -> Result<Vec<u8>, String> {
    let mut vm = vm_with_input(input);
    vm.run(program)
        .map_err(|e: VmError| format!("Runtime error: {}", e))?;
    Ok(vm.into_output())
}

/// Run a program and return the final stack, bottom first
pub fn final_stack(program: &[u8]) -> Result<Vec<u8>, String> {
    let mut vm = vm_with_input(b"");
    vm.run(program)
        .map_err(|e| format!("Runtime error: {}", e))?;
    Ok(vm.stack().as_slice().to_vec())
}
