//! FILENAME: core/tabs/src/address.rs

/// Scheme put in front of bare addresses.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Prefix `http://` unless the address already starts with the literal
/// `http`. `https://host` and `httpfoo.com` both count as schemed.
pub fn normalize_address(address: &str) -> String {
    if address.starts_with("http") {
        address.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME_PREFIX, address)
    }
}
