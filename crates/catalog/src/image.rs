use serde::{Deserialize, Serialize};
use url::Url;

/// A named image reference. The URL is an arbitrary string here; the
/// validated variant is [`WebImage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub name: String,
}

/// Image whose URL must parse as a well-formed URL.
///
/// `Url`'s serde support parses on deserialize, so a malformed value fails
/// the enclosing body wholesale, and serializes back to the original string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebImage {
    pub url: Url,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn web_image_accepts_well_formed_url() {
        let image: WebImage = serde_json::from_value(json!({
            "url": "https://example.com/a.png",
            "name": "front",
        }))
        .unwrap();
        assert_eq!(image.url.as_str(), "https://example.com/a.png");
    }

    #[test]
    fn web_image_rejects_malformed_url() {
        let result: Result<WebImage, _> = serde_json::from_value(json!({
            "url": "example dot com",
            "name": "front",
        }));
        assert!(result.is_err());
    }
}
