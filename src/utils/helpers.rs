/// Origin plus path, concatenated as typed. Malformed results are left for
/// the HTTP client to reject.
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{}", base_url, endpoint)
}

pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}
