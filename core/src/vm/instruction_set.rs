//! The eight-instruction set.
//!
//! Each instruction is a single byte whose discriminant is the ASCII symbol
//! it is written with, so a decoded program is exactly as large as its source
//! text counted in characters. Every character outside the alphabet decodes to
//! [`Instruction::Nop`].
//!
//! # Stack Discipline
//!
//! There is no stack. Instructions act on the cell under the data pointer:
//! `cell` below refers to `memory[data_pointer]`.

use core::fmt;

/// A single decoded instruction (exactly one byte).
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Any character outside the alphabet. Does nothing.
    ///
    /// Having Nop at 0x00 means zeroed buffers decode to inert code.
    Nop = 0x00,

    // ========================================================================
    // Data pointer
    // ========================================================================
    /// `>`: data_pointer += 1
    MoveRight = b'>',

    /// `<`: data_pointer -= 1
    MoveLeft = b'<',

    // ========================================================================
    // Cell arithmetic
    // ========================================================================
    /// `+`: cell += 1
    Increment = b'+',

    /// `-`: cell -= 1
    Decrement = b'-',

    // ========================================================================
    // I/O
    // ========================================================================
    /// `.`: emit cell to the output sink
    Output = b'.',

    /// `,`: cell = next value from the input source
    Input = b',',

    // ========================================================================
    // Control Flow
    // ========================================================================
    /// `[`: if cell == 0, jump to the matching `]`
    LoopStart = b'[',

    /// `]`: if cell != 0, jump to the matching `[`
    LoopEnd = b']',
}

impl Instruction {
    /// Decode one source character.
    #[inline]
    pub fn decode(c: char) -> Self {
        match c {
            '>' => Instruction::MoveRight,
            '<' => Instruction::MoveLeft,
            '+' => Instruction::Increment,
            '-' => Instruction::Decrement,
            '.' => Instruction::Output,
            ',' => Instruction::Input,
            '[' => Instruction::LoopStart,
            ']' => Instruction::LoopEnd,
            _ => Instruction::Nop,
        }
    }

    /// The character this instruction is written with, `None` for [`Instruction::Nop`].
    pub fn symbol(self) -> Option<char> {
        match self {
            Instruction::Nop => None,
            other => Some(other as u8 as char),
        }
    }
}

static_assertions::assert_eq_size!(Instruction, u8);

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "Nop"),
        }
    }
}
