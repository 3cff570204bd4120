//! The complete state of an Othello game, and the rules for advancing it.
//!
//! A [`Board`] stores both players' discs as color-absolute bitboards together
//! with the side to move. Disc counts and the legal move set are derived data:
//! they are recomputed by every mutation and cannot be set from outside.

use crate::bitboard::{self, Bitboard, DARK_START, EMPTY, LIGHT_START};
use crate::game::{Outcome, Phase, Player};
use crate::location::{Location, LocationList};
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt::{self, Write};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Board {
    mover: Player,
    phase: Phase,
    dark: Bitboard,
    light: Bitboard,
    dark_count: u8,
    light_count: u8,
    legal_moves: Bitboard,
}

/// Raised when a position is built from inconsistent disc sets.
#[derive(Debug, Display, Error, PartialEq)]
pub enum BoardError {
    #[display(fmt = "a square is occupied by both players")]
    Overlap,
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    #[display(fmt = "unexpected character {:?}", _0)]
    BadCharacter(#[error(not(source))] char),
    #[display(fmt = "missing side to move")]
    MissingPlayer,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard four-disc opening position, Dark to move.
    pub fn new() -> Self {
        Self::with_discs(DARK_START, LIGHT_START, Player::Dark)
    }

    /// Build a position from arbitrary disc sets.
    /// The phase starts as [`Phase::InProgress`]; call [`Board::compute_status`] to settle it.
    pub fn from_discs(dark: Bitboard, light: Bitboard, mover: Player) -> Result<Self, BoardError> {
        if !(dark & light).is_empty() {
            return Err(BoardError::Overlap);
        }
        Ok(Self::with_discs(dark, light, mover))
    }

    fn with_discs(dark: Bitboard, light: Bitboard, mover: Player) -> Self {
        let mut board = Self {
            mover,
            phase: Phase::InProgress,
            dark,
            light,
            dark_count: 0,
            light_count: 0,
            legal_moves: EMPTY,
        };
        board.refresh();
        board
    }

    /// Recompute every derived field from the disc sets and the side to move.
    /// Panics if a square ended up owned by both players.
    #[inline]
    fn refresh(&mut self) {
        assert!(
            (self.dark & self.light).is_empty(),
            "disc sets overlap: dark {:#018x}, light {:#018x}",
            u64::from(self.dark),
            u64::from(self.light)
        );
        self.dark_count = self.dark.count_occupied();
        self.light_count = self.light.count_occupied();
        self.legal_moves = bitboard::get_move_mask(self.own(), self.opponent());
    }

    /// Place a disc for the side to move, or pass with `None`.
    ///
    /// The move is not checked for legality: callers must only pass squares
    /// from [`Board::legal_moves`]. The side to move always changes.
    #[inline]
    pub fn apply_move(&mut self, mv: Option<Location>) {
        let (placed, flips) = match mv {
            Some(loc) => {
                let placed = Bitboard::from(loc);
                (placed, bitboard::get_flip_mask(self.own(), self.opponent(), placed))
            }
            None => (EMPTY, EMPTY),
        };

        match self.mover {
            Player::Dark => {
                self.dark ^= placed | flips;
                self.light ^= flips;
            }
            Player::Light => {
                self.light ^= placed | flips;
                self.dark ^= flips;
            }
        }

        self.mover = !self.mover;
        self.refresh();
    }

    /// Settle the phase after a move.
    ///
    /// If the side to move is stuck, the turn is handed back to the other side,
    /// and the game ends if that side is stuck as well.
    pub fn compute_status(&mut self) {
        if !self.legal_moves.is_empty() {
            self.phase = Phase::InProgress;
            return;
        }

        self.apply_move(None);
        self.phase = if self.legal_moves.is_empty() {
            Phase::Terminal
        } else {
            Phase::OneSidePassed
        };
    }

    #[inline]
    pub fn mover(&self) -> Player {
        self.mover
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn dark(&self) -> Bitboard {
        self.dark
    }

    #[inline]
    pub fn light(&self) -> Bitboard {
        self.light
    }

    /// Discs belonging to the side to move.
    #[inline]
    pub fn own(&self) -> Bitboard {
        match self.mover {
            Player::Dark => self.dark,
            Player::Light => self.light,
        }
    }

    /// Discs belonging to the side not to move.
    #[inline]
    pub fn opponent(&self) -> Bitboard {
        match self.mover {
            Player::Dark => self.light,
            Player::Light => self.dark,
        }
    }

    #[inline]
    pub fn dark_count(&self) -> u8 {
        self.dark_count
    }

    #[inline]
    pub fn light_count(&self) -> u8 {
        self.light_count
    }

    #[inline]
    pub fn count(&self, player: Player) -> u8 {
        match player {
            Player::Dark => self.dark_count,
            Player::Light => self.light_count,
        }
    }

    /// Mask of the empty squares.
    #[inline]
    pub fn empties(&self) -> Bitboard {
        !(self.dark | self.light)
    }

    #[inline]
    pub fn legal_moves(&self) -> LocationList {
        LocationList::from(self.legal_moves)
    }

    #[inline]
    pub fn is_legal(&self, loc: Location) -> bool {
        self.legal_moves.contains(loc)
    }

    /// Discs the side to move would capture by playing `loc`.
    #[inline]
    pub fn flips(&self, loc: Location) -> Bitboard {
        bitboard::get_flip_mask(self.own(), self.opponent(), loc.into())
    }

    /// Who won, by disc count. Only meaningful once the game is over.
    pub fn outcome(&self) -> Outcome {
        match self.dark_count.cmp(&self.light_count) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::Dark),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Light),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    fn square_char(&self, loc: Location) -> char {
        if self.dark.contains(loc) {
            'X'
        } else if self.light.contains(loc) {
            'O'
        } else {
            '.'
        }
    }
}

/// Parse a board from 64 squares in row-major order (`X` dark, `O` light,
/// `-` or `.` empty), followed by the side to move (`X` or `O`).
/// Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < NUM_SPACES {
            return Err(ParseBoardError::WrongLength(chars.len()));
        }

        let mut dark = 0u64;
        let mut light = 0u64;
        for (index, &c) in chars[..NUM_SPACES].iter().enumerate() {
            let bit = 1u64 << (63 - index);
            match c {
                'X' | 'x' | '*' => dark |= bit,
                'O' | 'o' => light |= bit,
                '-' | '.' => {}
                other => return Err(ParseBoardError::BadCharacter(other)),
            }
        }

        let mover = match &chars[NUM_SPACES..] {
            [] => return Err(ParseBoardError::MissingPlayer),
            ['X'] | ['x'] | ['*'] => Player::Dark,
            ['O'] | ['o'] => Player::Light,
            [c] => return Err(ParseBoardError::BadCharacter(*c)),
            rest => return Err(ParseBoardError::WrongLength(NUM_SPACES + rest.len())),
        };

        Ok(Self::with_discs(dark.into(), light.into(), mover))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("   a b c d e f g h")?;
        for index in 0..NUM_SPACES as u8 {
            let loc = Location::from_index(index);
            let (row, col) = loc.to_coords();
            if col == 0 {
                write!(f, "\n {}", row + 1)?;
            }
            write!(f, " {}", self.square_char(loc))?;
            if col == EDGE_LENGTH - 1 {
                f.write_char(' ')?;
            }
        }
        write!(
            f,
            "\nX Dark: {}  O Light: {}\nTo move: {}",
            self.dark_count, self.light_count, self.mover
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn loc(s: &str) -> Location {
        Location::from_str(s).unwrap()
    }

    #[test]
    fn opening_position() {
        let board = Board::new();
        assert_eq!(board.mover(), Player::Dark);
        assert_eq!(board.phase(), Phase::InProgress);
        assert_eq!(board.dark_count(), 2);
        assert_eq!(board.light_count(), 2);
        assert_eq!(board.legal_moves().len(), 4);
        for mv in board.legal_moves() {
            assert_eq!(board.flips(mv).count_occupied(), 1);
        }
    }

    #[test]
    fn dark_captures_east_of_center() {
        let mut board = Board::new();
        board.apply_move(Some(loc("f5")));
        board.compute_status();

        assert_eq!(board.dark_count(), 4);
        assert_eq!(board.light_count(), 1);
        assert_eq!(board.mover(), Player::Light);
        assert_eq!(board.phase(), Phase::InProgress);
        assert!(board.dark().contains(loc("e5")));
    }

    #[test]
    fn null_move_only_swaps_sides() {
        let mut board = Board::new();
        let before = board;
        board.apply_move(None);

        assert_eq!(board.dark(), before.dark());
        assert_eq!(board.light(), before.light());
        assert_eq!(board.mover(), Player::Light);
        assert_eq!(board.legal_moves().len(), 4);
    }

    #[test]
    #[should_panic(expected = "disc sets overlap")]
    fn placing_on_an_occupied_square_panics() {
        let mut board = Board::new();
        board.apply_move(Some(loc("d4")));
    }

    #[test]
    fn rejects_overlapping_discs() {
        let discs = Bitboard::from(0x0000000810000000);
        assert_eq!(
            Board::from_discs(discs, discs, Player::Dark),
            Err(BoardError::Overlap)
        );
    }

    #[test]
    fn forced_pass_returns_turn() {
        // After Dark captures b1, Light has no reply but Dark can still take h7.
        let mut board: Board = "XO------ -------- -------- -------- \
                                -------- -------- -------O -------X X"
            .parse()
            .unwrap();
        assert!(board.is_legal(loc("c1")));
        board.apply_move(Some(loc("c1")));
        assert_eq!(board.mover(), Player::Light);
        assert!(board.legal_moves().is_empty());
        board.compute_status();

        assert_eq!(board.mover(), Player::Dark);
        assert_eq!(board.phase(), Phase::OneSidePassed);
        assert_eq!(board.legal_moves().collect::<Vec<_>>(), vec![loc("h6")]);
    }

    #[test]
    fn double_pass_is_terminal() {
        // Only dark discs remain: nobody can move.
        let mut board = Board::from_discs(
            Bitboard::from(0xff00000000000000),
            Bitboard::from(0),
            Player::Light,
        )
        .unwrap();
        board.compute_status();

        assert_eq!(board.phase(), Phase::Terminal);
        assert_eq!(board.outcome(), Outcome::Winner(Player::Dark));
    }

    #[test]
    fn parse_board() {
        let board: Board = "-------- -------- -------- ---OX--- \
                            ---XO--- -------- -------- -------- X"
            .parse()
            .unwrap();
        assert_eq!(board, Board::new());

        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength(2))
        );
        assert_eq!(
            "-".repeat(64).parse::<Board>(),
            Err(ParseBoardError::MissingPlayer)
        );
        assert_eq!(
            format!("{}Z", "-".repeat(64)).parse::<Board>(),
            Err(ParseBoardError::BadCharacter('Z'))
        );
    }

    #[test]
    fn display_board() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "   a b c d e f g h");
        assert_eq!(lines[4], " 4 . . . O X . . . ");
        assert_eq!(lines[5], " 5 . . . X O . . . ");
        assert_eq!(lines[8], " 8 . . . . . . . . ");
        assert!(text.contains("X Dark: 2  O Light: 2"));
        assert!(text.ends_with("To move: Dark"));
    }
}
