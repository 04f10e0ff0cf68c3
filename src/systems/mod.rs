pub mod movement;
pub mod boost;
pub mod toggle;
pub mod spawn;

pub use movement::*;
pub use boost::*;
pub use toggle::*;
pub use spawn::*;
