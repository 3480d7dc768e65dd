pub mod deep_ops;
pub mod sequence_ops;
pub mod shallow_ops;
pub mod tuple_ops;

pub use deep_ops::{deep_delete, deep_merge, transmute_deep};
pub use shallow_ops::{augment_shallow, prune_shallow, transmute_shallow};
pub use tuple_ops::{augment_tuple, prune_tuple};
