use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Fixed page size for question listing.
pub const QUESTIONS_PER_PAGE: u64 = 10;

/// Row offset of a 1-based page. Saturates instead of overflowing so an
/// absurd page number simply lands past the last row.
pub fn page_offset(page: u64) -> u64 {
    page.saturating_sub(1)
        .saturating_mul(QUESTIONS_PER_PAGE)
        .min(i64::MAX as u64)
}

/// Escape LIKE wildcard characters in a search string.
pub fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Query-string helper: a value that is absent or does not parse becomes
/// `None` instead of rejecting the whole request.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.trim().parse().ok()))
}

/// A category key as clients send it: a number, or a string holding one.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum CategoryKey {
    Id(i64),
    Label(String),
}

/// A category reference in a request body. Accepts the bare key or the
/// `{id, type}` object the client UI keeps for the selected category.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum CategoryRef {
    Key(CategoryKey),
    Object { id: CategoryKey },
}

/// How a request-supplied category resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedCategory {
    /// Nothing usable was sent: null, `0`, `""` or `"0"`.
    Empty,
    Id(i32),
    /// Something was sent but it is not a category identifier.
    Invalid,
}

impl CategoryRef {
    pub fn resolve(&self) -> ResolvedCategory {
        let key = match self {
            CategoryRef::Key(key) | CategoryRef::Object { id: key } => key,
        };
        match key {
            CategoryKey::Id(id) => resolve_id(*id),
            CategoryKey::Label(label) => {
                let label = label.trim();
                if label.is_empty() {
                    return ResolvedCategory::Empty;
                }
                match label.parse::<i64>() {
                    Ok(id) => resolve_id(id),
                    Err(_) => ResolvedCategory::Invalid,
                }
            }
        }
    }
}

fn resolve_id(id: i64) -> ResolvedCategory {
    match i32::try_from(id) {
        Ok(0) => ResolvedCategory::Empty,
        Ok(id) => ResolvedCategory::Id(id),
        Err(_) => ResolvedCategory::Invalid,
    }
}

/// Resolve an optional request category; absent and null are `Empty`.
pub fn resolve_category(category: Option<&CategoryRef>) -> ResolvedCategory {
    category.map_or(ResolvedCategory::Empty, CategoryRef::resolve)
}
