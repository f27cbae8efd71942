//! Catalog of GraphQL schema fixtures for transformer test suites.
//!
//! This crate is a lookup table: an immutable registry mapping fixture
//! names to [`SchemaFixture`] records. Each record carries a description,
//! the transformer generations and client platforms the schema is supported
//! on, and the schema source text itself. The SDL is not parsed or
//! validated here; consuming test suites feed it to whatever pipeline they
//! are exercising.
//!
//! ```
//! use fixture_catalog::{PlatformFlags, VersionFlags};
//!
//! let record = fixture_catalog::fixture("@model-simple")?;
//! assert!(record.supports_version(VersionFlags::V2));
//! assert!(record.supports_platform(PlatformFlags::IOS | PlatformFlags::ANDROID));
//! # Ok::<(), fixture_catalog::CatalogError>(())
//! ```

mod catalog;
mod error;
mod fixtures;
mod record;

pub use catalog::{fixture, fixture_names, fixtures};
pub use error::{CatalogError, Result};
pub use record::SchemaFixture;

// Re-exported so consumers can name capability flags without a separate
// dependency on the types crate.
pub use fixture_types::{PlatformFlags, VersionFlags};
