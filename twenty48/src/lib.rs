pub use board::*;
pub use direction::*;
pub use merge::*;
pub use position::*;
pub use traversal::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod direction;
mod merge;
mod position;
mod traversal;
mod visualization;
