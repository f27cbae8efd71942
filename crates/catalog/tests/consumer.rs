//! Exercises the catalog the way a consuming test suite would.

use anyhow::Result;
use fixture_catalog::{fixture, fixture_names, fixtures, PlatformFlags, VersionFlags};

#[test]
fn selects_fixtures_for_a_datastore_client() -> Result<()> {
    let record = fixture("@model-simple")?;
    assert!(record.supports_platform(PlatformFlags::IOS_DATASTORE));

    // Cyclic schemas drop out when filtering for DataStore support.
    let datastore_ready: Vec<&str> = fixtures()
        .filter(|(_, record)| record.supports_platform(PlatformFlags::JS_DATASTORE))
        .map(|(name, _)| name)
        .collect();
    assert!(!datastore_ready.contains(&"v2-cyclic-has-one-dependency"));
    assert!(!datastore_ready.contains(&"v2-cyclic-has-many-dependency"));
    assert!(datastore_ready.contains(&"@manyToMany"));
    Ok(())
}

#[test]
fn nothing_in_the_corpus_is_v1_only() {
    for (name, record) in fixtures() {
        if record.supports_version(VersionFlags::V1) {
            assert!(record.supports_version(VersionFlags::V2), "{name}");
        }
    }
}

#[test]
fn sdl_is_embeddable_as_is() -> Result<()> {
    for name in fixture_names() {
        let record = fixture(name)?;
        assert!(record.sdl.contains("type "), "{name}");
    }
    Ok(())
}

#[test]
fn metadata_dumps_as_json() -> Result<()> {
    let record = fixture("v2-index-with-queryfield")?;
    let json = serde_json::to_value(record)?;
    assert_eq!(json["description"], "@index with queryField");
    assert!(json["sdl"].as_str().is_some_and(|sdl| sdl.contains("@index")));
    Ok(())
}
