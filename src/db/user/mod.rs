pub mod get;
pub mod patch;
pub mod post;

pub use get::{get_all_users, get_user_by_id};
pub use patch::{recalculate_user_points, update_user_name};
pub use post::create_user;

/// Shared by creation and rename so both paths accept the same names.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let len_ok = (1..=40).contains(&name.len());
    let chars_ok = name
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '_' || c == '.' || c == '-');

    len_ok && chars_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("Josh"));
        assert!(is_valid_name("josh_allen.17"));
        assert!(is_valid_name("Big Dawg"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name(&"x".repeat(41)));
        assert!(!is_valid_name("drop; --table"));
        assert!(!is_valid_name("nope!"));
    }
}
