//! Registry construction and lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{CatalogError, Result};
use crate::fixtures::FIXTURES;
use crate::record::SchemaFixture;

/// Lazily initialized fixture registry.
///
/// Built once from the static table on first access and never mutated
/// afterward; concurrent readers need no synchronization.
static REGISTRY: LazyLock<HashMap<&'static str, &'static SchemaFixture>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(FIXTURES.len());
    for (name, record) in FIXTURES {
        assert!(!name.is_empty(), "fixture names must be non-empty");
        let previous = map.insert(*name, record);
        assert!(previous.is_none(), "duplicate fixture name: {name}");
    }
    tracing::debug!("fixture registry initialized with {} entries", map.len());
    map
});

/// Look up a fixture by exact name.
///
/// No fuzzy matching and no case normalization: the name must match a
/// registered key byte for byte.
pub fn fixture(name: &str) -> Result<&'static SchemaFixture> {
    REGISTRY
        .get(name)
        .copied()
        .ok_or_else(|| CatalogError::UnknownFixture(name.to_string()))
}

/// All registered fixture names, sorted.
///
/// The registry itself has no meaningful order; sorting here gives
/// consuming test suites reproducible iteration.
#[must_use]
pub fn fixture_names() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Iterate over every registered (name, fixture) entry. Order is
/// unspecified.
#[must_use]
pub fn fixtures() -> impl Iterator<Item = (&'static str, &'static SchemaFixture)> {
    REGISTRY.iter().map(|(name, record)| (*name, *record))
}

#[cfg(test)]
mod tests {
    use fixture_types::{PlatformFlags, VersionFlags};

    use super::*;
    use crate::fixtures::FIXTURES;

    #[test]
    fn test_every_fixture_is_well_formed() {
        for (name, record) in fixtures() {
            assert!(!record.description.is_empty(), "{name} has no description");
            assert!(!record.sdl.trim().is_empty(), "{name} has no sdl");
            assert!(
                !record.supported_versions.is_empty(),
                "{name} supports no versions"
            );
            assert!(
                !record.supported_platforms.is_empty(),
                "{name} supports no platforms"
            );
        }
    }

    #[test]
    fn test_names_are_unique() {
        assert_eq!(fixture_names().len(), FIXTURES.len());
    }

    #[test]
    fn test_names_are_sorted_for_reproducible_iteration() {
        let names = fixture_names();
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_model_simple_is_supported_everywhere() {
        let record = fixture("@model-simple").unwrap();
        assert!(record.supports_version(VersionFlags::V1 | VersionFlags::V2));
        for flag in PlatformFlags::NAMED {
            assert!(record.supports_platform(flag), "expected support for {flag:?}");
        }
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = fixture("nonexistent-key").unwrap_err();
        assert_eq!(err, CatalogError::UnknownFixture("nonexistent-key".into()));
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        assert!(fixture("@MODEL-SIMPLE").is_err());
        assert!(fixture("@model-simple ").is_err());
        assert!(fixture("model-simple").is_err());
    }

    #[test]
    fn test_studio_exclusion_keeps_other_platforms() {
        let record =
            fixture("@hasMany-with-implicit-parameters-with-@belongsTo-with-implicit-parameters")
                .unwrap();
        assert!(!record.supports_platform(PlatformFlags::STUDIO));
        for flag in [
            PlatformFlags::API,
            PlatformFlags::JS,
            PlatformFlags::IOS,
            PlatformFlags::ANDROID,
            PlatformFlags::FLUTTER,
        ] {
            assert!(record.supports_platform(flag), "expected support for {flag:?}");
        }
        // Only the studio bit was excluded; DataStore-enabled clients are
        // still covered.
        assert!(record.supports_platform(PlatformFlags::JS_DATASTORE));
    }

    #[test]
    fn test_cyclic_fixtures_exclude_datastore_clients() {
        for name in ["v2-cyclic-has-one-dependency", "v2-cyclic-has-many-dependency"] {
            let record = fixture(name).unwrap();
            assert!(record.supports_platform(
                PlatformFlags::API
                    | PlatformFlags::JS
                    | PlatformFlags::IOS
                    | PlatformFlags::ANDROID
                    | PlatformFlags::FLUTTER
            ));
            assert!(!record.supports_platform(PlatformFlags::DATASTORE), "{name}");
            assert!(!record.supports_platform(PlatformFlags::JS_DATASTORE), "{name}");
            assert!(!record.supports_platform(PlatformFlags::STUDIO), "{name}");
        }
    }

    #[test]
    fn test_fixture_name_inventory() {
        insta::assert_snapshot!(fixture_names().join("\n"), @r"
        @default-string-value
        @hasMany-explicit-parameters
        @hasMany-implicit-and-explicit-parameters
        @hasMany-implicit-parameters
        @hasMany-with-@belongsTo-with-explicit-parameters
        @hasMany-with-@belongsTo-with-implicit-parameters
        @hasMany-with-implicit-parameters-with-@belongsTo-with-implicit-parameters
        @hasOne-explicit-fields
        @hasOne-implicit-and-explicit-fields
        @hasOne-implicit-fields
        @hasOne-with-@belongsTo-with-explicit-parameters
        @hasOne-with-@belongsTo-with-implicit-parameters
        @manyToMany
        @model-simple
        @model-with-appsync-scalars
        @model-with-enums
        custom-@primaryKey-with-sort-fields
        multiple-@belongsTo-on-same-type
        v2-cyclic-has-many-dependency
        v2-cyclic-has-one-dependency
        v2-index-with-queryfield
        v2-primary-key-with-composite-sort-key
        v2-recursive-has-many-dependency
        v2-recursive-has-one-dependency
        ");
    }
}
