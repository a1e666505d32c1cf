use std::future::Future;

/// Base used when a title normalizes to an empty slug.
const FALLBACK_SLUG: &str = "meal";

/// Derives the URL-safe base slug for a title: lowercased, runs of
/// whitespace and punctuation collapsed to `-`, everything outside
/// `[a-z0-9-]` stripped.
pub fn base_slug(title: &str) -> String {
    let base = slug::slugify(title);
    if base.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        base
    }
}

/// Returns the first collision-free slug for `title` according to `exists`:
/// the base slug itself, or `base-1`, `base-2`, ... The base is computed
/// once; only the numeric suffix varies between probes.
pub async fn unique_slug<E, F, Fut>(title: &str, mut exists: F) -> Result<String, E>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    let base = base_slug(title);

    let mut candidate = base.clone();
    let mut count = 1u32;
    while exists(candidate.clone()).await? {
        candidate = format!("{base}-{count}");
        count += 1;
    }

    Ok(candidate)
}
