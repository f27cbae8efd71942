//! Capability flag sets for the schema fixture catalog.
//!
//! Fixtures are tagged with the transformer generations and the client
//! platform/datastore combinations they are expected to work with. Both tag
//! families are small fixed sets of independent booleans, so they are
//! modeled as bit flags: combine with `|`, exclude with `a & !b`, and test
//! support with `contains`.
//!
//! For example, a schema that only works on the JavaScript and iOS clients
//! is tagged `PlatformFlags::JS | PlatformFlags::IOS`, and one that works
//! everywhere except Flutter with DataStore enabled is tagged
//! `PlatformFlags::ALL & !PlatformFlags::FLUTTER_DATASTORE`.
//!
//! # Type Categories
//!
//! - **Version flags**: [`VersionFlags`]
//! - **Platform flags**: [`PlatformFlags`]

mod platform;
mod version;

pub use platform::PlatformFlags;
pub use version::VersionFlags;
