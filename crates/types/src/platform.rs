//! Client platform flags: [`PlatformFlags`].

bitflags::bitflags! {
    /// Client platform and datastore-mode combinations a fixture is
    /// supported on.
    ///
    /// Each platform gets two bits, one for plain API access and one for
    /// access with `DataStore` (offline sync) enabled. `ALL` is the
    /// complement of zero rather than the union of the named bits, so a
    /// fixture tagged `ALL` keeps covering platform bits enumerated later.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PlatformFlags: u32 {
        /// No platform.
        const NONE = 0;
        /// Plain API access, no `DataStore`.
        const API = 1 << 0;
        /// API access with `DataStore` enabled.
        const DATASTORE = 1 << 1;
        /// JavaScript client.
        const JS = 1 << 2;
        /// JavaScript client with `DataStore` enabled.
        const JS_DATASTORE = 1 << 3;
        /// iOS client.
        const IOS = 1 << 4;
        /// iOS client with `DataStore` enabled.
        const IOS_DATASTORE = 1 << 5;
        /// Android client.
        const ANDROID = 1 << 6;
        /// Android client with `DataStore` enabled.
        const ANDROID_DATASTORE = 1 << 7;
        /// Flutter client.
        const FLUTTER = 1 << 8;
        /// Flutter client with `DataStore` enabled.
        const FLUTTER_DATASTORE = 1 << 9;
        /// The visual schema editor.
        const STUDIO = 1 << 10;
        /// Every platform, including ones not yet enumerated.
        const ALL = !0;
    }
}

impl PlatformFlags {
    /// The individually named platform bits, excluding the `NONE` and
    /// `ALL` sentinels.
    pub const NAMED: [Self; 11] = [
        Self::API,
        Self::DATASTORE,
        Self::JS,
        Self::JS_DATASTORE,
        Self::IOS,
        Self::IOS_DATASTORE,
        Self::ANDROID,
        Self::ANDROID_DATASTORE,
        Self::FLUTTER,
        Self::FLUTTER_DATASTORE,
        Self::STUDIO,
    ];
}

impl Default for PlatformFlags {
    fn default() -> Self {
        Self::NONE
    }
}

impl serde::Serialize for PlatformFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bits().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for PlatformFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u32::deserialize(deserializer)?;
        Self::from_bits(bits).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid PlatformFlags bits: {bits:#x}"))
        })
    }
}
