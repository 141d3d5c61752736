//! Product versioning, preconditions and validation.
//!
//! A product carries a single integer version. Clients read it back as an
//! ETag (`"3"`) and echo it in `If-Match` to assert which version they last
//! saw before writing.

use crate::config::VersionPolicy;
use std::fmt;

/// Version assigned to a product that is created without one.
pub const INITIAL_VERSION: i32 = 1;

/// Maximum product name length in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Prefix for canonical product locations.
const LOCATION_PREFIX: &str = "/product/";

/// Format a version as a strong ETag value (`"<version>"`).
pub fn etag(version: i32) -> String {
    format!("\"{version}\"")
}

/// Build the canonical location of a product (`/product/{id}`).
///
/// Ids are assigned by storage and always positive, so anything else
/// indicates a broken record rather than bad client input.
pub fn product_location(id: i64) -> crate::Result<String> {
    if id <= 0 {
        return Err(crate::Error::InvalidLocation(id));
    }
    Ok(format!("{LOCATION_PREFIX}{id}"))
}

/// Parsed `If-Match` precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IfMatch {
    /// `*`: matches whatever version is current.
    Any,
    /// A specific version the client expects to be current.
    Version(i32),
}

impl IfMatch {
    /// Parse an `If-Match` header value.
    ///
    /// Accepts a bare integer (`3`), a strong ETag (`"3"`), a weak ETag
    /// (`W/"3"`) or `*`.
    pub fn parse(value: &str) -> crate::Result<Self> {
        let value = value.trim();
        if value == "*" {
            return Ok(Self::Any);
        }

        let tag = value.strip_prefix("W/").unwrap_or(value);
        let tag = match tag.strip_prefix('"') {
            Some(rest) => rest.strip_suffix('"').ok_or_else(|| {
                crate::Error::InvalidPrecondition(format!("unterminated entity tag: {value}"))
            })?,
            None => tag,
        };

        tag.parse::<i32>().map(Self::Version).map_err(|_| {
            crate::Error::InvalidPrecondition(format!("expected an integer version, got {value:?}"))
        })
    }

    /// Whether this precondition holds for the given current version.
    pub fn matches(&self, current: i32) -> bool {
        match self {
            Self::Any => true,
            Self::Version(expected) => *expected == current,
        }
    }
}

impl fmt::Display for IfMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "*"),
            Self::Version(v) => write!(f, "{v}"),
        }
    }
}

/// Validate a product quantity.
pub fn validate_quantity(quantity: i32) -> crate::Result<()> {
    if quantity < 0 {
        return Err(crate::Error::InvalidProduct(format!(
            "quantity must be non-negative, got {quantity}"
        )));
    }
    Ok(())
}

/// Validate a product name.
pub fn validate_name(name: &str) -> crate::Result<()> {
    if name.trim().is_empty() {
        return Err(crate::Error::InvalidProduct(
            "name cannot be empty".to_string(),
        ));
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(crate::Error::InvalidProduct(format!(
            "name must be at most {MAX_NAME_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// Compute the version a successful update writes.
///
/// Under [`VersionPolicy::Client`] the requested version is stored verbatim,
/// which permits a client to move the version sideways or backwards. Only
/// when the request omits a version does the server pick `current + 1`.
/// Under [`VersionPolicy::Increment`] the server always writes `current + 1`.
pub fn next_version(
    policy: VersionPolicy,
    current: i32,
    requested: Option<i32>,
) -> crate::Result<i32> {
    let bump = || {
        current
            .checked_add(1)
            .ok_or(crate::Error::VersionOverflow(current))
    };
    match (policy, requested) {
        (VersionPolicy::Client, Some(version)) => Ok(version),
        (VersionPolicy::Client, None) | (VersionPolicy::Increment, _) => bump(),
    }
}
