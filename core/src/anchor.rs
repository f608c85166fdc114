/// Returns the element id referenced by an in-page anchor `href`, or `None`
/// for anything that should keep the browser's default navigation.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(id)
}
