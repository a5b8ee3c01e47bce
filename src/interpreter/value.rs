/// The runtime value produced by evaluation.
pub mod core;
