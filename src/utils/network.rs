use std::net::Ipv4Addr;

/// Whether `input` is a dotted-quad IPv4 address.
///
/// # Examples
/// ```
/// use subexport::utils::network::is_ip;
///
/// assert!(is_ip("1.1.1.1"));
/// assert!(!is_ip("example.com"));
/// ```
pub fn is_ip(input: &str) -> bool {
    input.parse::<Ipv4Addr>().is_ok()
}
