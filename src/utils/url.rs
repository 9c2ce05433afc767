//! URL encoding utilities and the download link builder

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a URI component
///
/// The input is taken as UTF-8 and every byte outside the unreserved set is
/// escaped, so emoji become `%F0%9F...` sequences.
///
/// # Examples
/// ```
/// use subexport::utils::url::encode_uri_component;
///
/// assert_eq!(encode_uri_component("US 1(a)"), "US%201(a)");
/// ```
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Decodes a URL-encoded string
///
/// Returns the original string if decoding fails.
///
/// # Examples
/// ```
/// use subexport::utils::url::url_decode;
///
/// assert_eq!(url_decode("Hello%20World%21"), "Hello World!");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}

/// Builds the link a client downloads a generated artifact from
///
/// # Arguments
/// * `base_url` - Prefix of the link, `/` when absent
/// * `filename` - Artifact name, may already carry a query string
/// * `is_gzipped` - When false `dl=1` is added so the file is served as an attachment
/// * `access_token` - Appended as `access_token` when present
pub fn get_download_url(
    base_url: Option<&str>,
    filename: &str,
    is_gzipped: bool,
    access_token: Option<&str>,
) -> String {
    let base_url = base_url.unwrap_or("/");
    let (name, existing_query) = match filename.split_once('?') {
        Some((name, query)) => (name, query),
        None => (filename, ""),
    };

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.extend_pairs(form_urlencoded::parse(existing_query.as_bytes()));
    if !is_gzipped {
        query.append_pair("dl", "1");
    }
    if let Some(token) = access_token {
        query.append_pair("access_token", token);
    }
    let query = query.finish();

    if query.is_empty() {
        format!("{}{}", base_url, name)
    } else {
        format!("{}{}?{}", base_url, name, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(
            encode_uri_component("🇭🇰HK(Example)"),
            "%F0%9F%87%AD%F0%9F%87%B0HK(Example)"
        );
        assert_eq!(
            encode_uri_component("obfs-local;obfs=tls;obfs-host=gateway.icloud.com"),
            "obfs-local%3Bobfs%3Dtls%3Bobfs-host%3Dgateway.icloud.com"
        );
        assert_eq!(url_decode(&encode_uri_component("测试 1")), "测试 1");
    }

    #[test]
    fn test_get_download_url() {
        assert_eq!(
            get_download_url(Some("http://example.com/"), "test.conf", true, None),
            "http://example.com/test.conf"
        );
        assert_eq!(get_download_url(None, "test.conf", true, None), "/test.conf");
        assert_eq!(
            get_download_url(None, "test.conf", false, None),
            "/test.conf?dl=1"
        );
        assert_eq!(
            get_download_url(None, "test.conf", true, Some("abcd")),
            "/test.conf?access_token=abcd"
        );
        assert_eq!(
            get_download_url(
                Some("http://example.com/"),
                "test.conf?foo=bar",
                true,
                Some("abcd")
            ),
            "http://example.com/test.conf?foo=bar&access_token=abcd"
        );
        assert_eq!(
            get_download_url(None, "test.conf", false, Some("abcd")),
            "/test.conf?dl=1&access_token=abcd"
        );
    }
}
