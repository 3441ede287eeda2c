//! Service layer: normalization, filtering and view construction.
//!
//! Every function here is pure and synchronous. Callers hand in a slice of
//! [`Record`](crate::models::Record)s (normally the working set of a
//! [`Dataset`](crate::db::Dataset) snapshot, already run through
//! [`filter_records`]) and get back a serializable DTO from [`crate::api`].

pub mod error;
pub mod facets;
pub mod filter;
pub mod flow;
pub mod graph;
pub mod normalizer;
pub mod scatter;
pub mod timeline;
pub mod yearly;

pub use error::{AnalysisError, AnalysisResult};
pub use facets::{date_bounds, facet_values, facets};
pub use filter::{basic_search, filter_records, results_table};
pub use flow::build_flow;
pub use graph::build_graph;
pub use normalizer::{normalize, working_set};
pub use scatter::{build_scatter, build_scatter_for};
pub use timeline::build_timeline;
pub use yearly::build_yearly_counts;
