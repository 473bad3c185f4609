use crate::{Error, String, Vec, vec};
use core::fmt;

/// A fixed-length tape of byte cells with a single data pointer.
///
/// The tape never grows or wraps. Every mutating operation reports whether it
/// took effect; an operation at a boundary leaves the tape untouched and
/// returns `false`, and the engine decides whether that is an error.
///
/// # Examples
///
/// ```
/// use tapevm_core::vm::Tape;
///
/// let mut tape = Tape::new(2).unwrap();
/// assert!(tape.increment());
/// assert!(tape.move_right());
/// assert!(!tape.move_right()); // already on the last cell
/// assert_eq!(tape.cells(), &[1, 0]);
/// ```
pub struct Tape {
    cells: Vec<u8>,
    pointer: usize,
}

impl Tape {
    /// Creates a zeroed tape of `size` cells with the pointer on cell 0.
    ///
    /// Fails with [`Error::InvalidOptions`] when `size` is zero, since the
    /// pointer must always rest on a cell.
    pub fn new(size: usize) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::InvalidOptions(String::from(
                "memory size must be at least one cell",
            )));
        }
        Ok(Self {
            cells: vec![0; size],
            pointer: 0,
        })
    }

    /// Moves the pointer one cell right, unless it is on the last cell.
    #[inline]
    pub fn move_right(&mut self) -> bool {
        if self.pointer + 1 < self.cells.len() {
            self.pointer += 1;
            true
        } else {
            false
        }
    }

    /// Moves the pointer one cell left, unless it is on the first cell.
    #[inline]
    pub fn move_left(&mut self) -> bool {
        match self.pointer.checked_sub(1) {
            Some(pointer) => {
                self.pointer = pointer;
                true
            }
            None => false,
        }
    }

    /// Adds one to the current cell, unless it holds 255.
    #[inline]
    pub fn increment(&mut self) -> bool {
        let cell = &mut self.cells[self.pointer];
        match cell.checked_add(1) {
            Some(value) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Subtracts one from the current cell, unless it holds 0.
    #[inline]
    pub fn decrement(&mut self) -> bool {
        let cell = &mut self.cells[self.pointer];
        match cell.checked_sub(1) {
            Some(value) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Stores `value` in the current cell if it fits in a byte.
    #[inline]
    pub fn store(&mut self, value: i32) -> bool {
        match u8::try_from(value) {
            Ok(byte) => {
                self.cells[self.pointer] = byte;
                true
            }
            Err(_) => false,
        }
    }

    /// Value of the current cell.
    #[inline]
    pub fn current(&self) -> u8 {
        self.cells[self.pointer]
    }

    #[inline]
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn into_cells(self) -> Vec<u8> {
        self.cells
    }
}

impl fmt::Debug for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the used prefix; a default tape has 30000 cells.
        let used = self
            .cells
            .iter()
            .rposition(|&c| c != 0)
            .map_or(0, |last| last + 1)
            .max(self.pointer + 1);
        f.debug_struct("Tape")
            .field("len", &self.cells.len())
            .field("pointer", &self.pointer)
            .field("cells", &&self.cells[..used])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tape() {
        let tape = Tape::new(30000).unwrap();
        assert_eq!(tape.len(), 30000);
        assert_eq!(tape.pointer(), 0);
        assert!(tape.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_pointer_stops_at_both_ends() {
        let mut tape = Tape::new(3).unwrap();
        assert!(!tape.move_left());
        assert_eq!(tape.pointer(), 0);
        assert!(tape.move_right());
        assert!(tape.move_right());
        assert!(!tape.move_right());
        assert_eq!(tape.pointer(), 2);
        assert!(tape.move_left());
        assert_eq!(tape.pointer(), 1);
    }

    #[test]
    fn test_cell_saturates_instead_of_wrapping() {
        let mut tape = Tape::new(1).unwrap();
        assert!(!tape.decrement());
        assert_eq!(tape.current(), 0);
        for _ in 0..255 {
            assert!(tape.increment());
        }
        assert!(!tape.increment());
        assert_eq!(tape.current(), 255);
    }

    #[test]
    fn test_store_rejects_values_outside_a_byte() {
        let mut tape = Tape::new(1).unwrap();
        assert!(tape.store(65));
        assert!(!tape.store(256));
        assert!(!tape.store(-1));
        assert_eq!(tape.current(), 65);
        assert!(tape.store(0));
        assert!(tape.store(255));
        assert_eq!(tape.current(), 255);
    }

    #[test]
    fn test_zero_size_tape_rejected() {
        assert!(matches!(Tape::new(0), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_single_cell_tape() {
        let mut tape = Tape::new(1).unwrap();
        assert!(!tape.move_right());
        assert!(!tape.move_left());
        assert_eq!(tape.pointer(), 0);
    }

    #[test]
    fn test_debug_shows_used_prefix() {
        let mut tape = Tape::new(100).unwrap();
        tape.increment();
        tape.move_right();
        tape.move_right();
        let rendered = crate::format!("{:?}", tape);
        assert_eq!(rendered, "Tape { len: 100, pointer: 2, cells: [1, 0, 0] }");
    }
}
