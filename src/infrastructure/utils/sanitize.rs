use ammonia::{Builder, UrlRelative};

/// Cleans user-supplied rich text so that no script-executing construct
/// survives, while benign formatting does. Allow-list based, pure, and
/// idempotent: sanitizing already-sanitized text is a no-op.
pub fn sanitize_rich_text(raw: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::Deny)
        .clean(raw)
        .to_string()
}
