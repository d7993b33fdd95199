//! Adapters - Implementations of port interfaces.
//!
//! - `content` - Catalog-backed and scripted content providers

pub mod content;

pub use content::{
    CatalogError, ContentCatalog, RandomContentProvider, ScriptedContentProvider,
};
