use std::str::FromStr;

use crate::{Board, Location, Piece, PieceKind, Shape, TourConfigError};

/// A self-avoiding walk of one piece over one board.
///
/// Every move is chosen by Warnsdorff's rule: among the legal moves
/// from the current square, go to the one whose destination has the
/// fewest onward legal moves. When several candidates share the
/// minimum, the one declared *last* in the piece's move table wins.
/// This reproduces the behavior of collecting scores into a map keyed
/// by score value, where a later candidate with the same score
/// overwrites an earlier one.
///
/// A tour owns its board and piece for its whole lifetime; starting it
/// again rebuilds the board and begins a fresh walk.
#[derive(Debug)]
pub struct Tour {
    board: Board,
    piece: Piece,
}

impl Tour {
    /// Builds a tour from the string-typed configuration surface.
    /// Piece and shape names are matched case-insensitively;
    /// `"rectangle"` is accepted as an alias for `"square"`.
    pub fn new(
        piece_kind: &str,
        width: i32,
        height: i32,
        shape: &str,
    ) -> Result<Self, TourConfigError> {
        let kind = PieceKind::from_str(piece_kind)?;
        let shape = Shape::from_str(shape)?;
        Self::with_config(kind, width, height, shape)
    }

    pub fn with_config(
        kind: PieceKind,
        width: i32,
        height: i32,
        shape: Shape,
    ) -> Result<Self, TourConfigError> {
        Ok(Self {
            board: Board::new(width, height, shape)?,
            piece: Piece::new(kind),
        })
    }

    /// Begins a tour at `loc` on a freshly rebuilt board and marks
    /// `loc` visited. Calling this again discards the previous tour's
    /// progress.
    pub fn start(&mut self, loc: Location) {
        self.board.build();
        self.piece.set_location(loc);
        self.board.mark_visited(loc);
    }

    /// Whether the piece still has a legal move to an unvisited cell.
    /// `false` before [`Self::start()`] has been called.
    pub fn has_next(&self) -> bool {
        if self.board.unvisited_count() == 0 {
            return false;
        }
        match self.piece.location() {
            Some(from) => !self.piece.candidate_moves(from, &self.board).is_empty(),
            None => false,
        }
    }

    /// Performs one Warnsdorff step: moves the piece to the chosen
    /// cell, marks it visited, and returns it. Returns `None` once no
    /// legal move remains, or before the tour has started.
    pub fn next(&mut self) -> Option<Location> {
        let from = self.piece.location()?;
        let mut best: Option<(usize, Location)> = None;
        for candidate in self.piece.candidate_moves(from, &self.board) {
            // Onward moves are counted against the pre-move board, so
            // the candidate itself still counts as unvisited here.
            let score = self.piece.candidate_moves(candidate, &self.board).len();
            // A candidate replaces the best on an equal score, which
            // gives the later candidate the win on ties.
            match best {
                Some((best_score, _)) if score > best_score => {}
                _ => best = Some((score, candidate)),
            }
        }
        let (_, chosen) = best?;
        self.board.mark_visited(chosen);
        self.piece.set_location(chosen);
        Some(chosen)
    }

    /// Where the piece currently stands; `None` before the tour starts.
    pub fn piece_location(&self) -> Option<Location> {
        self.piece.location()
    }

    pub fn shape(&self) -> Shape {
        self.board.shape()
    }

    /// The composed board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::TourInput;

    fn run_to_exhaustion(tour: &mut Tour) -> Vec<Location> {
        let mut path = Vec::new();
        while let Some(loc) = tour.next() {
            path.push(loc);
        }
        path
    }

    #[test]
    fn knight_on_5x5_takes_the_last_tied_candidate() {
        let mut tour = Tour::new("Knight", 5, 5, "square").unwrap();
        tour.start(Location::new(3, 3));
        assert_eq!(tour.board().unvisited_count(), 24);
        // All 8 candidates from (3, 3) have exactly 2 onward moves, so
        // the tie resolves to the candidate from the last offset in the
        // move table, (2, -1).
        let first = tour.next().unwrap();
        assert_eq!(first, Location::new(5, 2));
        assert_eq!(tour.piece_location(), Some(first));
        assert!(!tour.board().is_valid(first));
        assert_eq!(tour.board().unvisited_count(), 23);
    }

    #[test]
    fn king_on_right_triangle_picks_fewest_onward_moves() {
        let mut tour = Tour::new("King", 3, 3, "rightTriangle").unwrap();
        tour.start(Location::new(1, 1));
        let piece = Piece::new(PieceKind::King);
        let candidates: HashSet<Location> = piece
            .candidate_moves(Location::new(1, 1), tour.board())
            .into_iter()
            .collect();
        assert_eq!(
            candidates,
            HashSet::from_iter([Location::new(2, 1), Location::new(2, 2)])
        );
        // (2, 1) has 3 onward moves, (2, 2) has 4.
        assert_eq!(tour.next(), Some(Location::new(2, 1)));
    }

    #[test]
    fn exhausted_tour_keeps_returning_none() {
        let mut tour = Tour::new("rook", 2, 1, "square").unwrap();
        tour.start(Location::new(1, 1));
        assert!(tour.has_next());
        assert_eq!(tour.next(), Some(Location::new(2, 1)));
        assert!(!tour.has_next());
        assert_eq!(tour.next(), None);
        assert_eq!(tour.next(), None);
        assert_eq!(tour.piece_location(), Some(Location::new(2, 1)));
    }

    #[test]
    fn has_next_is_false_before_start() {
        let tour = Tour::new("knight", 8, 8, "square").unwrap();
        assert!(!tour.has_next());
        assert_eq!(tour.piece_location(), None);
    }

    #[test]
    fn has_next_is_false_once_everything_is_visited() {
        let mut tour = Tour::new("king", 1, 1, "square").unwrap();
        tour.start(Location::new(1, 1));
        assert_eq!(tour.board().unvisited_count(), 0);
        assert!(!tour.has_next());
        assert_eq!(tour.next(), None);
    }

    #[test]
    fn king_completes_a_small_square_board() {
        let mut tour = Tour::new("king", 3, 3, "square").unwrap();
        tour.start(Location::new(1, 1));
        let path = run_to_exhaustion(&mut tour);
        // A king can always reach some unvisited neighbor on a 3x3
        // board until every cell is gone.
        assert_eq!(path.len(), 8);
        assert_eq!(tour.board().unvisited_count(), 0);
    }

    #[test]
    fn restarting_rebuilds_the_board() {
        let mut tour = Tour::new("king", 3, 3, "square").unwrap();
        tour.start(Location::new(1, 1));
        run_to_exhaustion(&mut tour);
        assert_eq!(tour.board().unvisited_count(), 0);

        tour.start(Location::new(2, 2));
        assert_eq!(tour.board().unvisited_count(), 8);
        assert_eq!(tour.piece_location(), Some(Location::new(2, 2)));
        assert!(tour.has_next());
    }

    #[test]
    fn construction_rejects_bad_input() {
        assert_eq!(
            Tour::new("bishop", 8, 8, "square").unwrap_err(),
            TourConfigError::UnknownPieceKind {
                input: "bishop".to_string()
            }
        );
        assert_eq!(
            Tour::new("knight", 8, 8, "pentagon").unwrap_err(),
            TourConfigError::UnknownShape {
                input: "pentagon".to_string()
            }
        );
        assert!(matches!(
            Tour::new("knight", 0, 8, "square").unwrap_err(),
            TourConfigError::InvalidDimensions { .. }
        ));
    }

    quickcheck! {
        fn tour_terminates_without_revisits(input: TourInput) -> bool {
            let mut tour =
                Tour::with_config(input.kind, input.width, input.height, input.shape).unwrap();
            tour.start(input.start);
            let cell_count = tour.board().unvisited_count();

            let mut seen = HashSet::new();
            let mut previous = input.start;
            let mut steps = 0;
            while tour.has_next() {
                let loc = match tour.next() {
                    Some(loc) => loc,
                    // has_next promised a move.
                    None => return false,
                };
                // Never the start square, never a repeat, and always
                // reachable by one offset from where the piece stood.
                if loc == input.start || !seen.insert(loc) {
                    return false;
                }
                let delta = (loc.x - previous.x, loc.y - previous.y);
                if !input.kind.offsets().contains(&delta) {
                    return false;
                }
                if tour.board().is_valid(loc) {
                    return false;
                }
                previous = loc;
                steps += 1;
            }
            tour.next().is_none() && steps <= cell_count
        }

        fn tour_is_deterministic(input: TourInput) -> bool {
            let mut first =
                Tour::with_config(input.kind, input.width, input.height, input.shape).unwrap();
            let mut second =
                Tour::with_config(input.kind, input.width, input.height, input.shape).unwrap();
            first.start(input.start);
            second.start(input.start);
            loop {
                match (first.next(), second.next()) {
                    (None, None) => return true,
                    (a, b) if a == b => continue,
                    _ => return false,
                }
            }
        }
    }
}
