use crate::{Location, PieceKind, Shape};

/// A small random tour configuration with an in-bounds start square.
#[derive(Clone, Debug)]
pub struct TourInput {
    pub kind: PieceKind,
    pub shape: Shape,
    pub width: i32,
    pub height: i32,
    pub start: Location,
}

impl quickcheck::Arbitrary for TourInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let kind = *g
            .choose(&[PieceKind::Knight, PieceKind::King, PieceKind::Rook])
            .unwrap();
        let shape = *g
            .choose(&[Shape::Square, Shape::RightTriangle, Shape::Irregular])
            .unwrap();
        let width = (u8::arbitrary(g) % 8) as i32 + 1;
        let height = (u8::arbitrary(g) % 8) as i32 + 1;
        // The start square is anywhere in the bounding box; it does not
        // have to lie on the shape, just like the reference drivers.
        let start = Location::new(
            (u8::arbitrary(g) as i32) % width + 1,
            (u8::arbitrary(g) as i32) % height + 1,
        );
        TourInput {
            kind,
            shape,
            width,
            height,
            start,
        }
    }
}
