pub mod player;
pub mod mover;
pub mod submarine;
pub mod boost;

pub use player::*;
pub use mover::*;
pub use submarine::*;
pub use boost::*;
