use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

/// Numeric edge weight usable by every algorithm in the crate.
///
/// `Ord` is required so weights can key a priority queue, which in practice means
/// `ordered_float::OrderedFloat<f32>` or `OrderedFloat<f64>`. `W::infinity()` is the
/// "not yet reached" distance sentinel.
pub trait Weight: Float + Debug + Copy + Ord {}

impl<T> Weight for T where T: Float + Debug + Copy + Ord {}

/// Identity of a vertex.
///
/// The total order on keys breaks ties inside priority queues, which keeps every
/// algorithm's visitation order deterministic.
pub trait VertexKey: Clone + Eq + Hash + Ord + Debug {}

impl<T> VertexKey for T where T: Clone + Eq + Hash + Ord + Debug {}
