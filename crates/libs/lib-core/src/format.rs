//! # Display Formatting
//!
//! Helpers for rendering wallet identities in the UI.

/// Shorten an address to `prefix...suffix`.
///
/// Works on characters, so non-ASCII input never splits a code point. Addresses too
/// short to shorten meaningfully are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use lib_core::format::format_identity;
///
/// let short = format_identity("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU", 6, 4);
/// assert_eq!(short, "7xKXtg...gAsU");
/// assert_eq!(format_identity("abc", 4, 4), "abc");
/// ```
pub fn format_identity(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// Wallet label shown when connected (4 characters each side).
pub fn truncate_identity(address: &str) -> String {
    format_identity(address, 4, 4)
}
