use folio_types::Route;

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Href for a portfolio page.
pub fn page_href(page_id: &str) -> String {
    escape_html(&Route::Portfolio(page_id.to_string()).path())
}

/// Up to two initials, used when no profile image is set.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Wrap a body in a complete HTML document.
pub fn document(title: &str, css: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         <style>\n{}</style>\n\
         </head>\n\
         <body>\n{}</body>\n\
         </html>\n",
        escape_html(title),
        css,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("\"it's\""), "&quot;it&#39;s&quot;");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("alex morgan"), "AM");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("Mary Jane Watson"), "MJ");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn test_page_href() {
        assert_eq!(page_href("projects"), "/portfolio/projects");
    }
}
