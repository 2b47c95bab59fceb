use url::Url;

/// Decides whether a candidate URL lies inside the crawl scope
///
/// A candidate is in scope when its serialized form starts with the seed's
/// serialized form. This is a plain string-prefix test over origin and path,
/// not a host comparison: with seed `https://example.com/docs`, the URL
/// `https://example.com/docs-archive` is in scope and
/// `https://example.com/blog` is not.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use word_ripple::url::is_in_scope;
///
/// let seed = Url::parse("https://example.com/").unwrap();
/// assert!(is_in_scope(&seed, &Url::parse("https://example.com/a").unwrap()));
/// assert!(!is_in_scope(&seed, &Url::parse("https://other.com/").unwrap()));
/// ```
pub fn is_in_scope(seed: &Url, candidate: &Url) -> bool {
    candidate.as_str().starts_with(seed.as_str())
}
