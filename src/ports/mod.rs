//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ContentProvider` - Follow-up questions and canned diagnosis templates

mod content_provider;

pub use content_provider::ContentProvider;
