pub mod filter;
pub mod sort;
