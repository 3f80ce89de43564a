pub mod check;
pub mod compile;
pub mod ir;
pub mod run_common;
pub mod tree_loader;
