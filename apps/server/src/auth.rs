use finotes_core::UserContext;

/// Real authentication is not wired up; every request runs as this fixed
/// placeholder identity. The core takes an explicit [`UserContext`], so
/// swapping this for a token-derived identity touches only this module.
pub const PLACEHOLDER_USER_ID: &str = "00000000-0000-0000-0000-000000000000";

pub fn current_user() -> UserContext {
    UserContext::new(PLACEHOLDER_USER_ID)
}
