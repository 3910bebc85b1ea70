/// Extracts the host portion of a base URL for the `x-rapidapi-host`
/// header. The upstream gateway routes on this header, so it must carry the
/// bare host without scheme or path.
pub fn rapidapi_host(base_url: &str) -> String {
    let stripped = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"))
        .unwrap_or(base_url);
    stripped.split('/').next().unwrap_or(stripped).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_scheme_and_path() {
        assert_eq!(
            rapidapi_host("https://harem-altin-live-gold-price-data.p.rapidapi.com"),
            "harem-altin-live-gold-price-data.p.rapidapi.com"
        );
        assert_eq!(
            rapidapi_host("http://127.0.0.1:4545/some/path"),
            "127.0.0.1:4545"
        );
        assert_eq!(rapidapi_host("example.com"), "example.com");
    }
}
