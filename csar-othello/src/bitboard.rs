//! Low-level bitboard operations.
//!
//! These operations are unchecked: they assume the two player bitboards are
//! disjoint, and produce inconsistent results otherwise.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! the MSB is the upper-left of the board (A1), and uses row-major order.

use crate::location::Location;
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(pub(crate) u64);

/// Starting bitboard for Dark (E4, D5).
pub const DARK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for Light (D4, E5).
pub const LIGHT_START: Bitboard = Bitboard(0x0000001008000000);

/// The board with no discs.
pub const EMPTY: Bitboard = Bitboard(0);

impl Bitboard {
    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if `loc` is set in this bitboard.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        !(self & Bitboard::from(loc)).is_empty()
    }
}

/// One of the eight ray directions, expressed as a shift on the packed board.
/// Positive shifts move towards the MSB (north and west), negative towards the LSB.
#[derive(Clone, Copy, Debug)]
struct Ray {
    shift: i32,
    /// Opponent squares a flood may pass through without wrapping around an edge.
    interior: u64,
    /// Squares a single step may land on without wrapping around an edge.
    landing: u64,
}

impl Ray {
    #[inline]
    fn step(self, bits: u64) -> u64 {
        if self.shift > 0 {
            bits << self.shift
        } else {
            bits >> -self.shift
        }
    }
}

// Columns A..H map to bits 7..0 of each row byte.
const NOT_A_FILE: u64 = 0x7f7f7f7f7f7f7f7f;
const NOT_H_FILE: u64 = 0xfefefefefefefefe;
const HORIZONTAL_INTERIOR: u64 = 0x7e7e7e7e7e7e7e7e;
const VERTICAL_INTERIOR: u64 = 0x00ffffffffffff00;
const DIAGONAL_INTERIOR: u64 = 0x007e7e7e7e7e7e00;

const RAYS: [Ray; 8] = [
    // W
    Ray {
        shift: 1,
        interior: HORIZONTAL_INTERIOR,
        landing: NOT_H_FILE,
    },
    // E
    Ray {
        shift: -1,
        interior: HORIZONTAL_INTERIOR,
        landing: NOT_A_FILE,
    },
    // N
    Ray {
        shift: 8,
        interior: VERTICAL_INTERIOR,
        landing: 0xffffffffffffff00,
    },
    // S
    Ray {
        shift: -8,
        interior: VERTICAL_INTERIOR,
        landing: 0x00ffffffffffffff,
    },
    // NE
    Ray {
        shift: 7,
        interior: DIAGONAL_INTERIOR,
        landing: NOT_A_FILE & 0xffffffffffffff00,
    },
    // NW
    Ray {
        shift: 9,
        interior: DIAGONAL_INTERIOR,
        landing: NOT_H_FILE & 0xffffffffffffff00,
    },
    // SE
    Ray {
        shift: -9,
        interior: DIAGONAL_INTERIOR,
        landing: NOT_A_FILE & 0x00ffffffffffffff,
    },
    // SW
    Ray {
        shift: -7,
        interior: DIAGONAL_INTERIOR,
        landing: NOT_H_FILE & 0x00ffffffffffffff,
    },
];

/// The longest run of opponent discs that can sit between two squares on one line.
const MAX_RUN: usize = 6;

/// Score a board as: # my pieces - # opponent pieces.
#[inline]
pub fn score_absolute_difference(active: Bitboard, opponent: Bitboard) -> i32 {
    (active.0.count_ones() as i32) - (opponent.0.count_ones() as i32)
}

/// Compute a mask of the legal moves for the active player from
/// masks of the active player's pieces and the opponent's pieces.
///
/// Each direction smears the active player's discs across runs of opponent
/// discs; an empty square one step past such a run is a legal move.
#[inline]
pub fn get_move_mask(active: Bitboard, opponent: Bitboard) -> Bitboard {
    let empties = !(active.0 | opponent.0);
    let mut moves = 0;

    for ray in RAYS.iter() {
        let mask = opponent.0 & ray.interior;
        let mut run = mask & ray.step(active.0);
        for _ in 1..MAX_RUN {
            run |= mask & ray.step(run);
        }
        moves |= empties & ray.step(run);
    }

    Bitboard(moves)
}

/// Compute the opponent discs captured if the active player plays `move_mask`,
/// which must be a one-hot bitboard. Returns an empty mask if the square is occupied.
/// The result is only meaningful for legal moves; an illegal empty square flips nothing.
#[inline]
pub fn get_flip_mask(active: Bitboard, opponent: Bitboard, move_mask: Bitboard) -> Bitboard {
    if !((active | opponent) & move_mask).is_empty() {
        return EMPTY;
    }

    let mut flips = 0;

    for ray in RAYS.iter() {
        let mut run = 0;
        let mut cursor = ray.step(move_mask.0) & ray.landing;

        while cursor & opponent.0 != 0 {
            run |= cursor;
            cursor = ray.step(cursor) & ray.landing;
        }

        // Only a run capped by one of our own discs is captured.
        if cursor & active.0 != 0 {
            flips |= run;
        }
    }

    Bitboard(flips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn loc(s: &str) -> Bitboard {
        Location::from_str(s).unwrap().into()
    }

    #[test]
    fn opening_move_mask() {
        let moves = get_move_mask(DARK_START, LIGHT_START);
        assert_eq!(moves, loc("d3") | loc("c4") | loc("f5") | loc("e6"));
    }

    #[test]
    fn opening_flips_one_disc_each() {
        let moves = get_move_mask(DARK_START, LIGHT_START);
        for bit in (0..64).map(|i| Bitboard(1 << i)) {
            if (moves & bit).is_empty() {
                continue;
            }
            assert_eq!(get_flip_mask(DARK_START, LIGHT_START, bit).count_occupied(), 1);
        }
        assert_eq!(get_flip_mask(DARK_START, LIGHT_START, loc("f5")), loc("e5"));
    }

    #[test]
    fn flip_mask_of_occupied_square_is_empty() {
        assert!(get_flip_mask(DARK_START, LIGHT_START, loc("d4")).is_empty());
        assert!(get_flip_mask(DARK_START, LIGHT_START, loc("e4")).is_empty());
    }

    #[test]
    fn flip_mask_without_sandwich_is_empty() {
        // A light run ending at the edge with no dark disc behind it.
        let active = loc("a1");
        let opponent = loc("g1") | loc("h1");
        assert!(get_flip_mask(active, opponent, loc("f1")).is_empty());
        assert!(get_move_mask(active, opponent).is_empty());
    }

    #[test]
    fn rays_do_not_wrap_around_edges() {
        // H1 and A2 are adjacent bits but not adjacent squares.
        let active = loc("g1");
        let opponent = loc("h1");
        assert!(get_move_mask(active, opponent).is_empty());
        assert!(get_flip_mask(active, opponent, loc("a2")).is_empty());

        let active = loc("a3");
        let opponent = loc("h2");
        assert!(get_flip_mask(active, opponent, loc("g1")).is_empty());
    }

    #[test]
    fn long_run_flips_six() {
        let active = loc("a1");
        let opponent = loc("b1") | loc("c1") | loc("d1") | loc("e1") | loc("f1") | loc("g1");
        assert_eq!(get_move_mask(active, opponent), loc("h1"));
        assert_eq!(get_flip_mask(active, opponent, loc("h1")), opponent);
    }

    #[test]
    fn flips_in_several_directions() {
        // Dark plays D4, capturing along the row and the diagonal.
        let active = loc("b4") | loc("b2");
        let opponent = loc("c4") | loc("c3");
        assert_eq!(get_flip_mask(active, opponent, loc("d4")), opponent);
    }

    #[test]
    fn score_difference() {
        assert_eq!(score_absolute_difference(DARK_START, LIGHT_START), 0);
        assert_eq!(score_absolute_difference(DARK_START | loc("a1"), LIGHT_START), 1);
    }
}
