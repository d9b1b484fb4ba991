//! Endpoint URL construction.
//!
//! Paths and query values are percent-encoded so drive letters (`C:`),
//! separators and spaces survive the trip to the file service.

use crate::config::{API_BASE_URL, endpoints};
use crate::models::Category;

/// Percent-encode a single path segment or query value.
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Build an absolute API URL from an endpoint path.
pub fn api_url(endpoint: &str) -> String {
    format!("{}{}", API_BASE_URL, endpoint)
}

/// `GET /api/files/{path}`
pub fn files_url(path: &str) -> String {
    format!("{}/{}", api_url(endpoints::FILES), encode_component(path))
}

/// `GET /api/files/category/{category}?path=…`
pub fn category_url(category: Category, base_path: &str) -> String {
    format!(
        "{}/{}?path={}",
        api_url(endpoints::CATEGORY),
        category.as_str(),
        encode_component(base_path)
    )
}

/// `GET /api/search?query=…&path=…`
pub fn search_url(query: &str, base_path: &str) -> String {
    format!(
        "{}?query={}&path={}",
        api_url(endpoints::SEARCH),
        encode_component(query),
        encode_component(base_path)
    )
}

/// `GET /api/folders/tree?path=…`
pub fn folder_tree_url(path: &str) -> String {
    format!(
        "{}?path={}",
        api_url(endpoints::FOLDER_TREE),
        encode_component(path)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_letter_is_encoded() {
        assert_eq!(files_url("C:"), "http://localhost:5000/api/files/C%3A");
        assert_eq!(
            files_url("C:\\Program Files"),
            "http://localhost:5000/api/files/C%3A%5CProgram%20Files"
        );
    }

    #[test]
    fn test_encoding_round_trips() {
        let path = "D:/music/AC&DC #1.mp3";
        let encoded = encode_component(path);
        assert!(!encoded.contains(':'));
        assert_eq!(urlencoding::decode(&encoded).unwrap(), path);
    }

    #[test]
    fn test_query_urls() {
        assert_eq!(
            search_url("my report", "/home/me"),
            "http://localhost:5000/api/search?query=my%20report&path=%2Fhome%2Fme"
        );
        assert_eq!(
            category_url(Category::Image, "C:"),
            "http://localhost:5000/api/files/category/image?path=C%3A"
        );
        assert_eq!(
            folder_tree_url("/"),
            "http://localhost:5000/api/folders/tree?path=%2F"
        );
    }
}
