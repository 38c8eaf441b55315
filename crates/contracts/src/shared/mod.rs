pub mod filter;
pub mod metadata;
