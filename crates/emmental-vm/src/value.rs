//! Cell domain shared by the stack, the queue and the definition table
//!
//! A cell is an 8-bit unsigned quantity. Every arithmetic operation on cells
//! wraps modulo 256; there is no overflow error.

/// Unit of data on the stack and queue, and the identifier of a symbol
pub type Cell = u8;

/// Cell pushed by the `#` symbol, conventionally the start of a literal
pub const NULL: Cell = 0;

/// Cell pushed by `;`, marking where a redefinition source begins
pub const DELIMITER: Cell = b';';

/// Cell pushed by `,` once the input stream is exhausted
pub const EOF_SENTINEL: Cell = 0xFF;

/// `tail * 10 + digit`, wrapping
#[inline]
pub fn accumulate_digit(tail: Cell, digit: u8) -> Cell {
    tail.wrapping_mul(10).wrapping_add(digit)
}

/// Index of the highest set bit, with 0 mapped to 8
#[inline]
pub fn discrete_log(cell: Cell) -> Cell {
    if cell == 0 {
        return 8;
    }
    let mut c = cell;
    let mut log = 0;
    while c > 1 {
        c >>= 1;
        log += 1;
    }
    log
}

/// Render a cell as a printable character where possible
pub fn describe(cell: Cell) -> String {
    if cell.is_ascii_graphic() {
        format!("'{}'", cell as char)
    } else {
        format!("0x{:02x}", cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_digit_wraps() {
        assert_eq!(accumulate_digit(0, 7), 7);
        assert_eq!(accumulate_digit(12, 3), 123);
        // 123 * 10 + 4 = 1234 = 4 * 256 + 210
        assert_eq!(accumulate_digit(123, 4), 210);
    }

    #[test]
    fn test_discrete_log() {
        assert_eq!(discrete_log(0), 8);
        assert_eq!(discrete_log(1), 0);
        assert_eq!(discrete_log(2), 1);
        assert_eq!(discrete_log(3), 1);
        assert_eq!(discrete_log(128), 7);
        assert_eq!(discrete_log(255), 7);
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(b'a'), "'a'");
        assert_eq!(describe(0), "0x00");
        assert_eq!(describe(b' '), "0x20");
    }
}
