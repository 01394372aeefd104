//! URI helpers used during reference resolution: normalization,
//! absoluteness tests and RFC 3986 reference resolution against a base.
use url::Url;

/// RFC 3986 normalization. Relative references are returned unchanged since
/// they can only be normalized once joined with an absolute base.
pub(crate) fn normalize(uri: &str) -> String {
    match Url::parse(uri) {
        Ok(url) => url.to_string(),
        Err(_) => uri.to_string(),
    }
}

/// Normalize and strip the fragment.
pub(crate) fn normalize_defrag(uri: &str) -> String {
    normalize(defrag(uri).0)
}

/// Split a reference on its first `#`.
pub(crate) fn defrag(uri: &str) -> (&str, Option<&str>) {
    match uri.find('#') {
        Some(position) => (&uri[..position], Some(&uri[position + 1..])),
        None => (uri, None),
    }
}

/// A URI is absolute when its pre-fragment portion carries a scheme.
pub(crate) fn is_absolute(uri: &str) -> bool {
    Url::parse(defrag(uri).0).is_ok()
}

/// Join `reference` against `base` with "sibling file" semantics: the last
/// segment of `base` is treated as a document name, not a directory.
/// The redundant slashes give consistent join behaviour for bases with and
/// without trailing slashes.
pub(crate) fn join_sibling(base: &str, reference: &str) -> Result<String, url::ParseError> {
    let directory = Url::parse(&format!("{}/", base))?;
    let joined = directory.join(&format!("../{}", reference))?;
    Ok(joined.to_string())
}
