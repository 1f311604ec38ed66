/// Resolve the `--limit` flag against the configured default.
#[must_use]
pub fn effective_limit(flag: Option<u32>, fallback: u32) -> u32 {
    flag.unwrap_or(fallback)
}
