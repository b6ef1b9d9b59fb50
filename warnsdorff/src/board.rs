use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Location, TourConfigError};

/// The set of playable cells a board starts out with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Every cell of the `width` x `height` rectangle.
    Square,
    /// A staircase triangle: row `x` holds the cells with `y <= x`,
    /// so the hypotenuse runs along increasing `x`.
    RightTriangle,
    /// A non-convex shape made from two generated regions, see
    /// [`Board::build()`].
    Irregular,
}

impl FromStr for Shape {
    type Err = TourConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("square") || s.eq_ignore_ascii_case("rectangle") {
            Ok(Shape::Square)
        } else if s.eq_ignore_ascii_case("righttriangle") {
            Ok(Shape::RightTriangle)
        } else if s.eq_ignore_ascii_case("irregular") {
            Ok(Shape::Irregular)
        } else {
            Err(TourConfigError::UnknownShape {
                input: s.to_string(),
            })
        }
    }
}

/// The playable surface of one tour: its dimensions, its shape, and the
/// cells that have not been visited yet.
#[derive(Clone, Debug)]
pub struct Board {
    width: i32,
    height: i32,
    shape: Shape,
    unvisited: HashSet<Location>,
}

impl Board {
    /// Creates a board with no unvisited cells. [`Self::build()`]
    /// populates it at the start of each tour.
    pub fn new(width: i32, height: i32, shape: Shape) -> Result<Self, TourConfigError> {
        if width < 1 || height < 1 {
            return Err(TourConfigError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            shape,
            unvisited: HashSet::new(),
        })
    }

    /// Marks every cell of the configured shape unvisited, replacing
    /// whatever a previous tour left behind.
    pub fn build(&mut self) {
        self.unvisited.clear();
        match self.shape {
            Shape::Square => {
                for x in 1..=self.width {
                    for y in 1..=self.height {
                        self.unvisited.insert(Location::new(x, y));
                    }
                }
            }
            Shape::RightTriangle => {
                for x in 1..=self.width {
                    for y in 1..=x {
                        self.unvisited.insert(Location::new(x, y));
                    }
                }
            }
            Shape::Irregular => {
                // Two overlapping generated regions; inserting a cell
                // twice is fine since this is a set. The second region
                // can produce cells above the bounding box, which stay
                // in the set but are never admitted by is_valid.
                for x in (1..=self.width).rev() {
                    for y in x..self.height {
                        self.unvisited.insert(Location::new(x, y));
                    }
                }
                for x in (1..=self.width).rev() {
                    for y in ((self.height / 2 + 1)..=self.width).rev() {
                        self.unvisited.insert(Location::new(x, y));
                    }
                }
            }
        }
    }

    /// Whether a piece may move to `loc`: inside the bounding box and
    /// not yet visited.
    ///
    /// Cells outside a triangular or irregular shape were never
    /// inserted into the unvisited set, so the membership test covers
    /// shape as well as visitation.
    pub fn is_valid(&self, loc: Location) -> bool {
        loc.x >= 1
            && loc.x <= self.width
            && loc.y >= 1
            && loc.y <= self.height
            && self.unvisited.contains(&loc)
    }

    /// Removes `loc` from the unvisited set. A no-op when `loc` is
    /// already visited or was never on the board.
    pub fn mark_visited(&mut self, loc: Location) {
        self.unvisited.remove(&loc);
    }

    /// Whether `loc` still counts as unvisited. Unlike
    /// [`Self::is_valid()`] this does not bounds-check, which matters
    /// only for rendering.
    pub fn is_unvisited(&self, loc: Location) -> bool {
        self.unvisited.contains(&loc)
    }

    pub fn unvisited_count(&self) -> usize {
        self.unvisited.len()
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}
