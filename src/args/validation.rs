use reqwest::Url;

/// # Errors
///
/// Will return `Err` if the value is not an http(s) URL with a host
pub fn check_base_url(value: &str) -> Result<String, String> {
    let trimmed = value.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| format!("The api base '{value}' is not a valid URL: {e}."))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("The api base '{value}' must start with http:// or https://."));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(format!("The api base '{value}' has no host."));
    }
    Ok(trimmed.to_string())
}

/// # Errors
///
/// Will return `Err` if the value is not a positive integer
pub fn check_page_size(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("Page size must be at least 1.".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("The page size '{value}' is not a number.")),
    }
}
