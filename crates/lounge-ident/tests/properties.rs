//! Property-based tests for identity generation.
//!
//! Checks that generated usernames and nicknames stay inside the IRC
//! grammar for arbitrary display names, including hostile Unicode.

use lounge_ident::{nickname, password, username, NickExt, MAX_IDENT_LEN, PASSWORD_LEN};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Display names built only from characters no nickname may contain.
fn forbidden_only_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ @!#$%&*()+=,.;:'\"<>?/~\t\r\n\x00-\x1f\x7f\u{3000}-\u{30ff}]{0,40}")
        .expect("valid regex")
}

// =============================================================================
// NICKNAME
// =============================================================================

proptest! {
    #[test]
    fn nickname_matches_grammar(name in any::<String>()) {
        let nick = nickname(&name);
        prop_assert!(nick.len() <= MAX_IDENT_LEN);
        prop_assert!(nick.as_str().is_valid_nick(), "invalid nick {:?} from {:?}", nick, name);
    }

    #[test]
    fn nickname_of_forbidden_only_is_fallback(name in forbidden_only_strategy()) {
        prop_assert_eq!(nickname(&name), "user");
    }

    #[test]
    fn nickname_is_deterministic(name in any::<String>()) {
        prop_assert_eq!(nickname(&name), nickname(&name));
    }
}

// =============================================================================
// USERNAME
// =============================================================================

proptest! {
    #[test]
    fn username_has_no_forbidden_chars(
        name in any::<String>(),
        id in prop::option::of(any::<String>()),
    ) {
        let user = username(&name, id.as_deref());
        prop_assert!(user.chars().count() <= MAX_IDENT_LEN);
        prop_assert!(!user.chars().any(|c| c.is_whitespace() || c == '@' || c.is_ascii_control()));
    }

    #[test]
    fn username_suffix_survives_short_names(
        name in "[a-z]{1,20}",
        id in "[a-z0-9]{4,12}",
    ) {
        let user = username(&name, Some(&id));
        let expected = format!("_{}", &id[id.len() - 4..]);
        prop_assert!(user.ends_with(&expected));
    }
}

// =============================================================================
// PASSWORD
// =============================================================================

#[test]
fn password_is_alphanumeric_and_fixed_length() {
    for _ in 0..500 {
        let pw = password();
        assert_eq!(pw.expose().chars().count(), PASSWORD_LEN);
        assert!(pw.expose().chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
