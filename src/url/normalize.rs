use crate::UrlError;
use url::Url;

/// Parses the seed URL a crawl starts from
///
/// The seed must be an absolute HTTP or HTTPS URL. Its fragment is removed
/// so that the seed's serialized form can serve both as the first
/// deduplication key and as the scope prefix.
///
/// # Examples
///
/// ```
/// use word_ripple::url::parse_seed;
///
/// let seed = parse_seed("https://example.com/docs#intro").unwrap();
/// assert_eq!(seed.as_str(), "https://example.com/docs");
/// ```
pub fn parse_seed(seed: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(seed.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::Malformed(format!("Seed has no host: {}", seed)));
    }

    url.set_fragment(None);
    Ok(url)
}

/// Resolves a link target against a base URL and strips its fragment
///
/// Resolution follows the WHATWG URL rules (`Url::join`), so relative paths,
/// protocol-relative references and absolute URLs all work. No scheme
/// filtering happens here: `mailto:` or `javascript:` targets resolve to
/// URLs that can never carry an HTTP seed as prefix, so the scope check
/// drops them.
///
/// # Arguments
///
/// * `base` - The URL relative links are resolved against
/// * `href` - The raw link target as found in the document
///
/// # Returns
///
/// * `Ok(Url)` - The canonical, fragment-free URL
/// * `Err(UrlError)` - The link could not be resolved
///
/// # Examples
///
/// ```
/// use url::Url;
/// use word_ripple::url::normalize_link;
///
/// let base = Url::parse("https://example.com/").unwrap();
/// let url = normalize_link(&base, "/guide#install").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/guide");
/// ```
pub fn normalize_link(base: &Url, href: &str) -> Result<Url, UrlError> {
    let href = href.trim();
    if href.is_empty() {
        return Err(UrlError::Malformed("empty link target".to_string()));
    }

    let mut url = base
        .join(href)
        .map_err(|e| UrlError::Parse(format!("{}: {}", href, e)))?;
    url.set_fragment(None);
    Ok(url)
}
