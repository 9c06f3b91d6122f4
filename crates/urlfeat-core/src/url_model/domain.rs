//! Domain-ish pieces of a URL derived by splitting on separators.

/// Host part used for registration lookup: text after the last `//`,
/// up to the first `/`.
pub fn domain_of(url: &str) -> &str {
    let after_scheme = url.rsplit("//").next().unwrap_or(url);
    after_scheme.split('/').next().unwrap_or(after_scheme)
}

/// Text after the last `.` and before the following `/`.
pub fn domain_extension(url: &str) -> &str {
    let tail = url.rsplit('.').next().unwrap_or(url);
    tail.split('/').next().unwrap_or(tail)
}

/// Number of `/`-separated pieces after the scheme and `//`, minus one.
pub fn num_sub_domains(url: &str) -> usize {
    let after_http = url.rsplit("http").next().unwrap_or(url);
    let after_slashes = after_http.rsplit("//").next().unwrap_or(after_http);
    after_slashes.split('/').count() - 1
}
