mod component;
mod fetch;
mod palette;
mod render;
mod scene;
mod sim;
mod types;

pub use component::NetworkGraphCanvas;
pub use fetch::{FetchError, fetch_graph};
pub use palette::CategoryPalette;
pub use scene::{LinkVisual, NodeVisual, Scene};
pub use sim::{SimConfig, Simulation};
pub use types::{GraphDocument, GraphLink, GraphNode};
