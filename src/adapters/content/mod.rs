//! Content adapters - sources of follow-up questions and diagnosis templates.

mod catalog;
mod random_provider;
mod scripted_provider;

pub use catalog::{CatalogError, ContentCatalog};
pub use random_provider::RandomContentProvider;
pub use scripted_provider::{ScriptedContentProvider, DEFAULT_SCRIPTED_QUESTION};
