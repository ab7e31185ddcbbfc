pub mod cut;
pub mod node;
pub mod serialize;

pub use cut::{cut_by_distance, cut_to_k};
pub use node::{DendrogramNode, LeafLabels};
pub use serialize::to_document;
