//! URL handling for tool arguments and upstream endpoints.

/// Error type for URL validation and endpoint resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("empty URL")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("missing path parameter: {0}")]
    MissingPathParam(String),
}

/// Validate a URL supplied as a tool argument.
///
/// The input must be an absolute `http` or `https` URL with a host.
/// Surrounding whitespace is ignored. No scheme is inferred.
pub fn parse_target_url(input: &str) -> Result<url::Url, UrlError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    Ok(parsed)
}

/// Resolve an endpoint template against the API base URL.
///
/// Template segments of the form `{name}` are replaced by the matching path
/// parameter, percent-encoded as a single segment. Query pairs are appended
/// form-encoded.
pub fn resolve_endpoint(
    base: &url::Url, template: &str, path_params: &[(&'static str, String)], query: &[(&'static str, String)],
) -> Result<url::Url, UrlError> {
    let mut url = base.clone();

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| UrlError::InvalidUrl(format!("cannot append a path to {base}")))?;
        segments.pop_if_empty();

        for segment in template.trim_start_matches('/').split('/') {
            match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) => {
                    let value = path_params
                        .iter()
                        .find(|(key, _)| *key == name)
                        .map(|(_, value)| value.as_str())
                        .ok_or_else(|| UrlError::MissingPathParam(name.to_string()))?;
                    segments.push(value);
                }
                None => {
                    segments.push(segment);
                }
            }
        }
    }

    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
    }

    Ok(url)
}
