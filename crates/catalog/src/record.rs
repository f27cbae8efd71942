//! The fixture record type: [`SchemaFixture`].

use fixture_types::{PlatformFlags, VersionFlags};

/// A named schema fixture: source text plus the capability tags describing
/// where it is expected to work.
///
/// Records are plain data. The SDL is carried verbatim and is not checked
/// for syntactic correctness by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SchemaFixture {
    /// Human-readable summary of what the schema exercises.
    pub description: &'static str,
    /// Transformer generations the schema is supported on.
    pub supported_versions: VersionFlags,
    /// Client platform/datastore combinations the schema is supported on.
    pub supported_platforms: PlatformFlags,
    /// The schema source text.
    pub sdl: &'static str,
}

impl SchemaFixture {
    /// Returns true if the fixture supports *every* requested platform bit,
    /// not just any of them.
    #[must_use]
    pub const fn supports_platform(&self, platforms: PlatformFlags) -> bool {
        self.supported_platforms.contains(platforms)
    }

    /// Returns true if the fixture supports *every* requested transformer
    /// generation bit.
    #[must_use]
    pub const fn supports_version(&self, versions: VersionFlags) -> bool {
        self.supported_versions.contains(versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: SchemaFixture = SchemaFixture {
        description: "test fixture",
        supported_versions: VersionFlags::V2,
        supported_platforms: PlatformFlags::JS.union(PlatformFlags::IOS),
        sdl: "type Query { ok: Boolean }",
    };

    #[test]
    fn test_supports_platform_requires_all_requested_bits() {
        assert!(FIXTURE.supports_platform(PlatformFlags::JS));
        assert!(FIXTURE.supports_platform(PlatformFlags::JS | PlatformFlags::IOS));
        // ANDROID is not supported, so the combination fails even though
        // JS alone would pass.
        assert!(!FIXTURE.supports_platform(PlatformFlags::JS | PlatformFlags::ANDROID));
    }

    #[test]
    fn test_supports_version_requires_all_requested_bits() {
        assert!(FIXTURE.supports_version(VersionFlags::V2));
        assert!(!FIXTURE.supports_version(VersionFlags::V1));
        assert!(!FIXTURE.supports_version(VersionFlags::V1 | VersionFlags::V2));
    }

    #[test]
    fn test_record_serializes_flags_as_bits() {
        let json = serde_json::to_value(FIXTURE).unwrap();
        assert_eq!(json["description"], "test fixture");
        assert_eq!(json["supported_versions"], 2);
        assert_eq!(json["supported_platforms"], (1 << 2) | (1 << 4));
    }
}
