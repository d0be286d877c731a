/// A bech32-encoded address, kept opaque at this layer.
///
/// Decoding and credential extraction belong to the node-facing
/// collaborators; planning only routes value between addresses.
#[derive(
    Debug,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    derive_more::Display,
    derive_more::From,
    derive_more::Into,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Address(String);

impl Address {
    pub fn new<S: Into<String>>(addr: S) -> Self {
        Self(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
