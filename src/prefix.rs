// SPDX-License-Identifier: MIT OR Apache-2.0

//! The prefix mask selecting which call-site fields decorate a record.
//!
//! Combine flags with `|`, and narrow or toggle them with `&` and `^`:
//!
//! ```rust
//! use goinglogging::Prefix;
//!
//! let mut p = Prefix::FILE | Prefix::LINE;
//! p |= Prefix::TIME;
//! p &= Prefix::FILE | Prefix::TIME;
//! assert_eq!(p, Prefix::FILE | Prefix::TIME);
//! assert_eq!(p ^ p, Prefix::NONE);
//! ```

use bitflags::bitflags;

bitflags! {
    /// Fields written before the body of each record.
    ///
    /// The decorator always writes them in declaration order, separated as
    /// described on [`set_prefixes`](crate::set_prefixes).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Prefix: u32 {
        /// File name, e.g. `main.rs`.
        const FILE = 1 << 0;
        /// Line number in the file, e.g. `Line: 16`.
        const LINE = 1 << 1;
        /// Enclosing function, e.g. `calculate()`.
        const FUNCTION = 1 << 2;
        /// Local time as `hour:minute:second.millisecond`, e.g. `10:02:13.057`.
        const TIME = 1 << 3;
        /// Id of the current thread, e.g. `TID: ThreadId(2)`.
        const THREAD = 1 << 4;
        /// Marks every name in the body with a leading `type `.
        const TYPE_NAME = 1 << 5;
    }
}

impl Prefix {
    /// No prefix at all.
    pub const NONE: Prefix = Prefix::empty();
    /// The mask in effect before anything is configured.
    pub const DEFAULT: Prefix = Prefix::FILE.union(Prefix::LINE);
    /// Every field.
    pub const ALL: Prefix = Prefix::all();
}

impl Default for Prefix {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/*
Boilerplate notes for Prefix:

- Debug/Clone/Copy/PartialEq/Eq/Hash: derived, it's a u32 underneath.
- PartialOrd/Ord: derived so masks can sit in ordered sets; ordering is by raw bits.
- Default: FILE | LINE, same as the process-wide store starts with.
- Display: not implemented, Debug already prints the flag names.
*/

#[cfg(test)]
mod tests {
    use super::Prefix;
    use proptest::prelude::*;

    fn any_prefix() -> impl Strategy<Value = Prefix> {
        (0u32..64).prop_map(Prefix::from_bits_truncate)
    }

    #[test]
    fn bit_assignment() {
        assert_eq!(Prefix::FILE.bits(), 1);
        assert_eq!(Prefix::LINE.bits(), 2);
        assert_eq!(Prefix::FUNCTION.bits(), 4);
        assert_eq!(Prefix::TIME.bits(), 8);
        assert_eq!(Prefix::THREAD.bits(), 16);
        assert_eq!(Prefix::TYPE_NAME.bits(), 32);
        assert_eq!(Prefix::ALL.bits(), 63);
        assert_eq!(Prefix::NONE.bits(), 0);
    }

    #[test]
    fn default_is_file_and_line() {
        assert_eq!(Prefix::default(), Prefix::FILE | Prefix::LINE);
    }

    #[test]
    fn in_place_operators() {
        let mut p = Prefix::NONE;
        p |= Prefix::THREAD;
        assert!(p.contains(Prefix::THREAD));
        p ^= Prefix::THREAD | Prefix::TIME;
        assert_eq!(p, Prefix::TIME);
        p &= Prefix::FILE;
        assert_eq!(p, Prefix::NONE);
    }

    #[test]
    fn unknown_bits_are_dropped() {
        assert_eq!(Prefix::from_bits_truncate(1 << 12 | 1), Prefix::FILE);
    }

    proptest! {
        #[test]
        fn union_is_idempotent(m in any_prefix()) {
            prop_assert_eq!(m | m, m);
            prop_assert_eq!(m & m, m);
        }

        #[test]
        fn operators_commute(a in any_prefix(), b in any_prefix()) {
            prop_assert_eq!(a | b, b | a);
            prop_assert_eq!(a & b, b & a);
            prop_assert_eq!(a ^ b, b ^ a);
        }

        #[test]
        fn xor_with_self_is_none(m in any_prefix()) {
            prop_assert_eq!(m ^ m, Prefix::NONE);
        }
    }
}
