/// Prefix every stored image must carry.
pub const DATA_IMAGE_PREFIX: &str = "data:image/";

/// True for a non-empty inline image (`data:image/...`).
pub fn is_data_image_uri(value: &str) -> bool {
    value.starts_with(DATA_IMAGE_PREFIX)
}

/// Keep `value` if it is an inline image, otherwise return `fallback`.
pub fn sanitize_image(value: &str, fallback: &str) -> String {
    if is_data_image_uri(value) {
        value.to_string()
    } else {
        fallback.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_data_image_uris() {
        assert!(is_data_image_uri("data:image/png;base64,iVBORw0KGgo="));
        assert!(is_data_image_uri("data:image/svg+xml;utf8,<svg/>"));
    }

    #[test]
    fn test_rejects_everything_else() {
        assert!(!is_data_image_uri(""));
        assert!(!is_data_image_uri("https://cdn.example.com/me.png"));
        assert!(!is_data_image_uri("data:text/html;base64,PGgxPg=="));
        assert!(!is_data_image_uri(" data:image/png;base64,AAAA"));
        assert!(!is_data_image_uri("DATA:IMAGE/png;base64,AAAA"));
    }

    #[test]
    fn test_sanitize_falls_back() {
        assert_eq!(sanitize_image("blob:xyz", ""), "");
        assert_eq!(
            sanitize_image("/img/me.jpg", "data:image/gif;base64,R0lG"),
            "data:image/gif;base64,R0lG"
        );
        assert_eq!(
            sanitize_image("data:image/png;base64,AAAA", ""),
            "data:image/png;base64,AAAA"
        );
    }
}
