mod component;
mod render;
pub mod scale;
mod state;
mod types;

pub use component::NetworkCanvas;
pub use state::NetworkOptions;
pub use types::GraphDocument;
