pub mod float;

pub use float::AggloFloat;
