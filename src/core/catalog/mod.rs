//! Catalog sources for the search engine.
//!
//! Catalogs come either from a JSON file or from the seeded sample
//! generator. Both yield a plain `Vec<Shirt>` owned by the engine.

mod loader;
mod sample;

pub use loader::{load_catalog, parse_catalog, save_catalog, validate_catalog};
pub use sample::SampleCatalogBuilder;
