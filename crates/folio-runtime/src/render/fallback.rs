use super::html::{document, escape_html};

const CSS: &str = "body { font-family: sans-serif; display: grid; place-items: center; \
                   min-height: 100vh; margin: 0; background: #f9fafb; color: #111827; }\n\
                   a { color: #2563eb; }\n";

/// Page shown when the stored style names no known template.
pub(crate) fn render_not_found(style: &str) -> String {
    let body = format!(
        "<div>\n<h1>Template not found</h1>\n\
         <p>No template is registered for style \"{}\".</p>\n\
         <p><a href=\"/\">Back to the builder</a></p>\n</div>\n",
        escape_html(style)
    );
    document("Template not found", CSS, &body)
}
