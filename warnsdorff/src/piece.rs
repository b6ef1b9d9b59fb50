use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Board, Location, TourConfigError};

/// The kind of chess piece walking the tour.
///
/// The rook is a single-step variant: it moves exactly one cell in a
/// cardinal direction per step, not an arbitrary sliding distance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Knight,
    King,
    Rook,
}

static KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, 1),
    (-2, -1),
    (-1, 2),
    (-1, -2),
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
];

static KING_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

static ROOK_OFFSETS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

impl PieceKind {
    /// The move table for this kind. The declaration order is part of
    /// the tour's tie-breaking contract and must not be reordered.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            PieceKind::Knight => &KNIGHT_OFFSETS,
            PieceKind::King => &KING_OFFSETS,
            PieceKind::Rook => &ROOK_OFFSETS,
        }
    }
}

impl FromStr for PieceKind {
    type Err = TourConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("knight") {
            Ok(PieceKind::Knight)
        } else if s.eq_ignore_ascii_case("king") {
            Ok(PieceKind::King)
        } else if s.eq_ignore_ascii_case("rook") {
            Ok(PieceKind::Rook)
        } else {
            Err(TourConfigError::UnknownPieceKind {
                input: s.to_string(),
            })
        }
    }
}

/// A single token moving across a board.
#[derive(Clone, Debug)]
pub struct Piece {
    kind: PieceKind,
    location: Option<Location>,
}

impl Piece {
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            location: None,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// `None` until a tour has started.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Unconditional assignment; legality is the board's concern, not
    /// the piece's.
    pub fn set_location(&mut self, loc: Location) {
        self.location = Some(loc);
    }

    /// Every cell reachable in one move from `from` that is still
    /// valid on `board`, in move-table order.
    pub fn candidate_moves(&self, from: Location, board: &Board) -> Vec<Location> {
        let mut moves = Vec::with_capacity(self.kind.offsets().len());
        for &(dx, dy) in self.kind.offsets() {
            let to = from.offset_by(dx, dy);
            if board.is_valid(to) {
                moves.push(to);
            }
        }
        moves
    }
}
