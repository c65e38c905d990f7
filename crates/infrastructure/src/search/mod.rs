pub mod searxng;

pub use searxng::SearxngSearchProvider;
