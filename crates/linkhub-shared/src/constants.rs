//! Application-wide constants

/// Maximum length accepted for a project slug.
pub const MAX_SLUG_LENGTH: usize = 48;

/// Built-in redirect paths served at the apex; their keys are not available
/// as project slugs.
pub const DEFAULT_REDIRECTS: &[(&str, &str)] = &[
    ("home", "https://linkhub.sh"),
    ("signup", "https://app.linkhub.sh/register"),
    ("login", "https://app.linkhub.sh/login"),
    ("welcome", "https://app.linkhub.sh/welcome"),
    ("settings", "https://app.linkhub.sh/settings"),
    ("pricing", "https://linkhub.sh/pricing"),
    ("changelog", "https://linkhub.sh/changelog"),
    ("blog", "https://linkhub.sh/blog"),
    ("help", "https://linkhub.sh/help"),
    ("metatags", "https://linkhub.sh/tools/metatags"),
];

/// True when `key` shadows a built-in redirect path.
pub fn is_default_redirect(key: &str) -> bool {
    DEFAULT_REDIRECTS.iter().any(|(k, _)| *k == key)
}
