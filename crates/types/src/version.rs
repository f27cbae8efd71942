//! Transformer generation flags: [`VersionFlags`].

bitflags::bitflags! {
    /// Transformer engine generations a fixture is supported on.
    ///
    /// `ALL` is the complement of zero, not `V1 | V2`: a fixture tagged
    /// `ALL` keeps covering generations whose bits are enumerated later,
    /// without the fixture itself needing to be retagged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VersionFlags: u32 {
        /// The first-generation transformer.
        const V1 = 1 << 0;
        /// The second-generation transformer.
        const V2 = 1 << 1;
        /// Every generation, including ones not yet enumerated.
        const ALL = !0;
    }
}

impl serde::Serialize for VersionFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bits().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for VersionFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u32::deserialize(deserializer)?;
        Self::from_bits(bits).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid VersionFlags bits: {bits:#x}"))
        })
    }
}
