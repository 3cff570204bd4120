//! Position fingerprints for the transposition table.
//!
//! Each side's discs are split into eight bytes, and every (side, byte index,
//! byte value) triple has its own random mask. The fingerprint is the XOR of
//! the sixteen selected masks. Sides are taken relative to the mover, so the
//! same layout with the same player to move hashes identically no matter
//! which color that player is or how the position was reached.

use csar_othello::{Bitboard, Board};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used when none is configured, so runs are reproducible.
pub const DEFAULT_SEED: u64 = 0x0c5a_2f1e_77d3_4b09;

const SIDES: usize = 2;
const BYTES: usize = 8;
const BYTE_VALUES: usize = 256;

const OWN: usize = 0;
const OPPONENT: usize = 1;

pub struct PositionHasher {
    masks: Box<[[[u64; BYTE_VALUES]; BYTES]; SIDES]>,
}

impl PositionHasher {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut masks = Box::new([[[0u64; BYTE_VALUES]; BYTES]; SIDES]);
        for side in masks.iter_mut() {
            for byte in side.iter_mut() {
                for mask in byte.iter_mut() {
                    *mask = rng.gen::<u64>();
                }
            }
        }

        Self { masks }
    }

    #[inline]
    pub fn hash(&self, board: &Board) -> u64 {
        self.fold(OWN, board.own()) ^ self.fold(OPPONENT, board.opponent())
    }

    #[inline]
    fn fold(&self, side: usize, discs: Bitboard) -> u64 {
        let table = &self.masks[side];
        u64::from(discs)
            .to_le_bytes()
            .iter()
            .zip(table.iter())
            .fold(0, |acc, (&value, masks)| acc ^ masks[value as usize])
    }
}

impl Default for PositionHasher {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csar_othello::{Location, Player};

    fn play(moves: &[&str]) -> Board {
        let mut board = Board::new();
        for mv in moves {
            let loc: Location = mv.parse().unwrap();
            assert!(board.is_legal(loc));
            board.apply_move(Some(loc));
            board.compute_status();
        }
        board
    }

    #[test]
    fn same_seed_same_hash() {
        let board = play(&["f5", "d6"]);
        assert_eq!(
            PositionHasher::new(7).hash(&board),
            PositionHasher::new(7).hash(&board)
        );
        assert_ne!(
            PositionHasher::new(7).hash(&board),
            PositionHasher::new(8).hash(&board)
        );
    }

    #[test]
    fn transpositions_hash_identically() {
        let hasher = PositionHasher::default();
        let first = play(&["d3", "c3", "c4"]);
        let second = play(&["c4", "c3", "d3"]);

        assert_eq!(first, second);
        assert_eq!(hasher.hash(&first), hasher.hash(&second));
        assert_ne!(hasher.hash(&first), hasher.hash(&play(&["d3", "c3"])));
    }

    #[test]
    fn hash_is_relative_to_the_mover() {
        let hasher = PositionHasher::default();
        let board = play(&["f5", "f6", "e6"]);
        let mirrored =
            Board::from_discs(board.light(), board.dark(), !board.mover()).unwrap();

        assert_eq!(mirrored.own(), board.own());
        assert_eq!(hasher.hash(&mirrored), hasher.hash(&board));

        let mut passed = board;
        passed.apply_move(None);
        assert_ne!(hasher.hash(&passed), hasher.hash(&board));
    }

    #[test]
    fn opening_moves_are_distinct() {
        let hasher = PositionHasher::default();
        let board = Board::new();
        let mut hashes: Vec<u64> = board
            .legal_moves()
            .map(|mv| {
                let mut next = board;
                next.apply_move(Some(mv));
                hasher.hash(&next)
            })
            .collect();
        hashes.sort_unstable();
        hashes.dedup();
        assert_eq!(hashes.len(), 4);
        assert_eq!(board.mover(), Player::Dark);
    }
}
