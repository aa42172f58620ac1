//! # Generate
//!
//! Generate opaque random identifiers for verification offers.

use base64ct::{Base64UrlUnpadded, Encoding};

// "'`+=,./\|:;?><}{][_-
const SAFE_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789)(*&^%$#@!~";
const TOKEN_LEN: usize = 32;

/// Generates a base64 encoded random token for use as an offer identifier.
#[must_use]
pub fn offer_id() -> String {
    let rnd = random_string(TOKEN_LEN, SAFE_CHARS);
    Base64UrlUnpadded::encode_string(rnd.as_bytes())
}

// Generates a random string from a given set of characters. Uses fastrand so
// is not cryptographically secure.
fn random_string(len: usize, charset: &str) -> String {
    let chars: Vec<char> = charset.chars().collect();
    (0..len).map(|_| chars[fastrand::usize(..chars.len())]).collect()
}
