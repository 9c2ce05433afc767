use base64::{engine::general_purpose, Engine as _};

/// Encodes a string to standard Base64, padding included.
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input)
}

/// Decodes a Base64 string to its original form.
///
/// # Arguments
/// * `input` - The Base64 encoded string.
/// * `accept_urlsafe` - Whether the URL-safe alphabet is used.
///
/// # Returns
/// The decoded string, or an empty string if the input is invalid.
pub fn base64_decode(input: &str, accept_urlsafe: bool) -> String {
    let trimmed = input.trim_end_matches('=');
    let decoded = if accept_urlsafe {
        general_purpose::URL_SAFE_NO_PAD.decode(trimmed)
    } else {
        general_purpose::STANDARD_NO_PAD.decode(trimmed)
    };

    match decoded {
        Ok(bytes) => String::from_utf8_lossy(&bytes).to_string(),
        Err(_) => String::new(),
    }
}

/// Encodes a string to URL-safe Base64 without padding.
pub fn url_safe_base64_encode(input: &str) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(input)
}

/// Decodes a URL-safe Base64 string, with or without padding.
pub fn url_safe_base64_decode(input: &str) -> String {
    base64_decode(input, true)
}
