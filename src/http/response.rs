//! Response construction for the mirror list endpoint.

/// Format rendered URLs as the response body, one per line.
pub fn url_list(urls: &[String]) -> String {
    let mut body = String::new();
    for url in urls {
        body.push_str(url);
        body.push('\n');
    }
    body
}
