//! Runtime compatibility rules.
//!
//! A package declares its target runtime as `<family>-<major>.<minor>`, for
//! example `netcore-8.0`. Launchers never parse this into a general version:
//! each variant carries a [`RuntimeRange`] naming one family prefix and an
//! inclusive range of major versions it can host.
//!
//! The major version is the run of ASCII digits directly after the family
//! prefix. Anything after it (the minor version, a suffix) is not inspected.

use tracing::debug;

/// Family prefix of .NET Core / .NET 5+ runtime identifiers.
pub const NETCORE_FAMILY: &str = "netcore-";

/// Inclusive range of major versions within one runtime family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeRange {
    family: &'static str,
    min_major: u32,
    max_major: u32,
}

impl RuntimeRange {
    /// A range over `family` accepting majors `min_major..=max_major`.
    pub const fn new(family: &'static str, min_major: u32, max_major: u32) -> Self {
        Self {
            family,
            min_major,
            max_major,
        }
    }

    /// Every `netcore-` runtime up to and including `max_major`.
    pub const fn netcore_up_to(max_major: u32) -> Self {
        Self::new(NETCORE_FAMILY, 0, max_major)
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn max_major(&self) -> u32 {
        self.max_major
    }

    /// Whether a launcher bound to this range can host `runtime`.
    ///
    /// Returns `false` for empty or malformed identifiers, other families,
    /// and majors outside the range. Never fails.
    pub fn supports(&self, runtime: &str) -> bool {
        let supported = match major_version(runtime, self.family) {
            Some(major) => (self.min_major..=self.max_major).contains(&major),
            None => false,
        };
        debug!(runtime, family = self.family, max_major = self.max_major, supported, "runtime check");
        supported
    }
}

/// Extract the major version of `runtime` if it belongs to `family`.
///
/// The identifier must be longer than the prefix, and the prefix must be
/// followed by at least one ASCII digit.
pub fn major_version(runtime: &str, family: &str) -> Option<u32> {
    let rest = runtime.strip_prefix(family)?;
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    rest[..digits_len].parse().ok()
}
