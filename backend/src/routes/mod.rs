pub mod dataset;
pub mod facets;
pub mod flow;
pub mod graph;
pub mod records;
pub mod scatter;
pub mod timeline;
pub mod yearly;
