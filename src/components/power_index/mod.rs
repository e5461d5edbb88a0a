mod chart;
mod selector;

pub use chart::{IndexChart, RadarComparison};
pub use selector::ProfileSelector;
