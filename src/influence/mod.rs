//! Attributed influence graph, its layout engines and render mapping.

mod graph;
mod join;
mod layout;
mod simulation;
mod style;

pub use graph::{GraphEdge, GraphNode, InfluenceGraph, build_graph};
pub use join::{LayerMembers, layer_members};
pub use layout::{LayoutEngine, LayoutResult, Point, SpringLayout, layout};
pub use simulation::ForceSimulation;
pub use style::{DEFAULT_COLOR, NodeStyle, SIZE_PER_POWER, cluster_color, node_style, render_edges};
