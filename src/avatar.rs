//! Deterministic avatar variant selection
//!
//! A display name maps to one of eight avatar glyph variants through an
//! additive checksum of its code points, reduced mod 8 and looked up in
//! [`VARIANT_TABLE`]. The checksum is order-insensitive, so anagrams share a
//! variant.
//!
//! Changing the table (or its length) reassigns existing users, so both are
//! fixed data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Avatar glyph variants. Declaration order is catalog order only; the
/// name -> variant mapping comes from [`VARIANT_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Alien,
    Dragon,
    Ghost,
    Knight,
    Robot,
    Skull,
    Wizard,
}

/// Residue (checksum mod 8) -> variant
pub const VARIANT_TABLE: [Variant; 8] = [
    Variant::Default, // 0
    Variant::Knight,  // 1
    Variant::Wizard,  // 2
    Variant::Robot,   // 3
    Variant::Ghost,   // 4
    Variant::Dragon,  // 5
    Variant::Alien,   // 6
    Variant::Skull,   // 7
];

const MODULUS: u64 = VARIANT_TABLE.len() as u64;

impl Variant {
    pub const ALL: [Variant; 8] = [
        Variant::Default,
        Variant::Alien,
        Variant::Dragon,
        Variant::Ghost,
        Variant::Knight,
        Variant::Robot,
        Variant::Skull,
        Variant::Wizard,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Alien => "alien",
            Variant::Dragon => "dragon",
            Variant::Ghost => "ghost",
            Variant::Knight => "knight",
            Variant::Robot => "robot",
            Variant::Skull => "skull",
            Variant::Wizard => "wizard",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sum of the code points of `name`.
///
/// Sums Unicode scalar values, not UTF-16 code units: outside the BMP the
/// result differs from a `charCodeAt` sum ("🎮" is 127918 here, 112618 as a
/// surrogate pair).
pub fn checksum(name: &str) -> u64 {
    name.chars().map(|c| c as u64).sum()
}

/// Pick the avatar variant for a display name
pub fn select_variant(name: &str) -> Variant {
    VARIANT_TABLE[(checksum(name) % MODULUS) as usize]
}
