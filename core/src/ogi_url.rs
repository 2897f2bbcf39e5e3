use crate::query::{build_query, FormField};

pub const OGI_PNG_PATH: &str = "/v0/png";

/// `<origin><path>?<query>`. The `?` is always present, even with no fields.
pub fn build_ogi_url(origin: &str, path: &str, fields: &[FormField]) -> String {
    let origin = origin.trim_end_matches('/');
    format!("{origin}{path}?{}", build_query(fields))
}

/// The `og:image` tag a site owner pastes into `<head>`.
pub fn meta_tag_snippet(url: &str) -> String {
    format!(
        "<meta property=\"og:image\" content=\"{}\" />",
        escape_attribute(url)
    )
}

fn escape_attribute(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
