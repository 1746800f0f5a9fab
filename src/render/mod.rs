pub mod canvas;
pub mod renderer;

pub use canvas::{BombIcon, TrailCanvas};
pub use renderer::Renderer;
