pub mod influence_graph;
pub mod power_index;
