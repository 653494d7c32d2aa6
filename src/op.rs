//! The operator catalogue and the two-outcome result of an engine call.

use core::fmt;

use crate::element::Element;

/// One of the seven element-wise bitwise operators.
///
/// The six binary operators combine each element with a broadcast mask;
/// [`BitOp::Not`] is unary. The negated forms are the plain operator
/// followed by a complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitOp {
    /// `x & m`
    And,
    /// `x | m`
    Or,
    /// `x ^ m`
    Xor,
    /// `!(x & m)`
    Nand,
    /// `!(x | m)`
    Nor,
    /// `!(x ^ m)`
    Xnor,
    /// `!x`
    Not,
}

impl BitOp {
    /// Every operator, masked ones first.
    pub const ALL: [BitOp; 7] = [
        BitOp::And,
        BitOp::Or,
        BitOp::Xor,
        BitOp::Nand,
        BitOp::Nor,
        BitOp::Xnor,
        BitOp::Not,
    ];

    /// Whether the operator consumes a mask.
    #[inline]
    pub const fn is_masked(self) -> bool {
        !matches!(self, BitOp::Not)
    }

    /// Whether the result is complemented after the base operator.
    #[inline]
    pub const fn is_negated(self) -> bool {
        matches!(self, BitOp::Nand | BitOp::Nor | BitOp::Xnor | BitOp::Not)
    }

    /// Apply the operator to a single element.
    ///
    /// This is the reference semantics every vector path must reproduce
    /// bit for bit. `mask` is ignored for [`BitOp::Not`].
    #[inline(always)]
    pub fn apply<T: Element>(self, value: T, mask: T) -> T {
        match self {
            BitOp::And => value & mask,
            BitOp::Or => value | mask,
            BitOp::Xor => value ^ mask,
            BitOp::Nand => !(value & mask),
            BitOp::Nor => !(value | mask),
            BitOp::Xnor => !(value ^ mask),
            BitOp::Not => !value,
        }
    }

    /// Lower-case operator name.
    pub const fn name(self) -> &'static str {
        match self {
            BitOp::And => "and",
            BitOp::Or => "or",
            BitOp::Xor => "xor",
            BitOp::Nand => "nand",
            BitOp::Nor => "nor",
            BitOp::Xnor => "xnor",
            BitOp::Not => "not",
        }
    }
}

impl fmt::Display for BitOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a vectorized call actually ran.
///
/// `NotPerformed` means the CPU lacks the requested vector width and the
/// target slice was not written at all. The caller is expected to fall back
/// to [`crate::scalar`] (or use [`crate::default`], which does so itself).
#[must_use = "a NotPerformed outcome leaves the target untouched"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Every element of the target was written.
    Performed,
    /// Nothing was written.
    NotPerformed,
}

impl Outcome {
    /// `true` for [`Outcome::Performed`].
    #[inline]
    pub const fn is_performed(self) -> bool {
        matches!(self, Outcome::Performed)
    }
}

impl From<Outcome> for bool {
    #[inline]
    fn from(outcome: Outcome) -> bool {
        outcome.is_performed()
    }
}
