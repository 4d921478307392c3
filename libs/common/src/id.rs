use ulid::Ulid;

/// Generates a new ULID-based ID with the given prefix.
///
/// # Examples
/// ```
/// let id = argus_common::id::prefixed_ulid("vwr");
/// assert!(id.starts_with("vwr_"));
/// ```
pub fn prefixed_ulid(prefix: &str) -> String {
    format!("{}_{}", prefix, Ulid::new().to_string())
}

/// Marker trait for types that represent a prefixed ID.
pub trait PrefixedId {
    const PREFIX: &'static str;

    fn generate() -> String {
        prefixed_ulid(Self::PREFIX)
    }
}

/// Well-known ID prefixes.
pub mod prefix {
    /// A connection classified as an alert source (sensor device).
    pub const SENSOR: &str = "snr";
    /// A connection classified as a dashboard viewer.
    pub const VIEWER: &str = "vwr";
}
