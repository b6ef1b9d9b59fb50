/// The error type for constructing a [`Tour`](crate::Tour) or a
/// [`Board`](crate::Board).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TourConfigError {
    UnknownPieceKind { input: String },
    UnknownShape { input: String },
    InvalidDimensions { width: i32, height: i32 },
}

impl std::error::Error for TourConfigError {}

impl std::fmt::Display for TourConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TourConfigError::UnknownPieceKind { input } => write!(
                f,
                "Unrecognized piece kind {:?}, expected knight, king or rook",
                input
            ),
            TourConfigError::UnknownShape { input } => write!(
                f,
                "Unrecognized board shape {:?}, expected square, rectangle, righttriangle or irregular",
                input
            ),
            TourConfigError::InvalidDimensions { width, height } => write!(
                f,
                "Board dimensions must be positive, got {} x {}",
                width, height
            ),
        }
    }
}
