use super::*;
use proptest::prelude::*;

/// サブジェクトトークンに使える文字列
fn literal_token_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}".prop_map(|s| s)
}

proptest! {
    /// リテラルトークンを `.` で繋いだサブジェクトは常に有効
    #[test]
    fn prop_literal_subjects_are_valid(tokens in prop::collection::vec(literal_token_strategy(), 1..6)) {
        let subject = tokens.join(".");
        prop_assert!(validate_subject(&subject).is_ok());
    }

    /// 末尾に `>` を付けても有効
    #[test]
    fn prop_trailing_full_wildcard_is_valid(tokens in prop::collection::vec(literal_token_strategy(), 0..5)) {
        let mut tokens = tokens;
        tokens.push(">".to_string());
        prop_assert!(validate_subject(&tokens.join(".")).is_ok());
    }

    /// `>` の後にトークンが続くと無効
    #[test]
    fn prop_full_wildcard_followed_by_token_is_invalid(
        head in literal_token_strategy(),
        tail in literal_token_strategy()
    ) {
        let subject = format!("{}.>.{}", head, tail);
        prop_assert!(validate_subject(&subject).is_err());
    }

    /// 空トークンを含むと無効
    #[test]
    fn prop_empty_token_is_invalid(
        head in literal_token_strategy(),
        tail in literal_token_strategy()
    ) {
        let subject = format!("{}..{}", head, tail);
        prop_assert!(validate_subject(&subject).is_err());
    }
}
