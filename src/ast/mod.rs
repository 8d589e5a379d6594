pub mod kind;
pub mod node;

pub use kind::*;
pub use node::*;
