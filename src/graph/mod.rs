pub mod traits;
pub mod vertex;
pub mod adjacency;
pub mod generators;

pub use traits::{VertexKey, Weight};
pub use vertex::{Color, Vertex, VertexId};
pub use adjacency::Graph;
