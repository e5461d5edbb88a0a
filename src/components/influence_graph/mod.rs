mod component;
mod render;
mod state;

pub use component::InfluenceGraphCanvas;
pub use state::InfluenceScene;
