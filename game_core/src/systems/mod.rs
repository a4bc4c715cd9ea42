pub mod collision;
pub mod input;
pub mod movement;
pub mod win;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use win::*;
