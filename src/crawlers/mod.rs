pub mod fetcher;
pub mod listing;
pub mod product;

pub use fetcher::{HttpFetcher, PageFetcher};
