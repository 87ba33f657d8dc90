//! Core module - identifiers, numeric inputs, workspace and data sources

pub mod config;
pub mod entity;
pub mod identity;
pub mod loader;
pub mod numeric;
pub mod project;
pub mod source;

pub use config::Config;
pub use entity::Entity;
pub use identity::{EntityId, EntityPrefix, IdParseError};
pub use numeric::{Amount, Efficiency};
pub use project::{Project, ProjectError};
pub use source::{load_with_fallback, FileSource, MockSource, Origin, SourceError, StyleSource};
