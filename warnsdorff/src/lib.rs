pub use board::*;
pub use errors::*;
pub use location::*;
pub use piece::*;
pub use tour::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod location;
mod piece;
mod tour;
mod visualization;
