//! Data model for an asset inventory.
//!
//! Re-exports the asset record, the category taxonomy, and size helpers.
pub mod asset;
pub mod category;
pub mod size;

pub use asset::AssetRecord;
pub use category::{classify_file_name, extension_of, Category};
