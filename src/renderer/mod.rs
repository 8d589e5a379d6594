pub mod renderer;
pub mod state;
pub mod traits;
pub mod components;
pub mod declarations;
pub mod dump;
pub mod expressions;
pub mod statements;

pub use renderer::*;
pub use state::*;
pub use traits::*;
