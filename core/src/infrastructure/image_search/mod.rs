pub mod pexels_client;

pub use pexels_client::PexelsImageSearch;
