use super::*;

// ========================================
// validate_subject tests
// ========================================

#[test]
fn test_validate_subject_literal() {
    assert!(validate_subject("orders").is_ok());
    assert!(validate_subject("orders.created.eu").is_ok());
}

#[test]
fn test_validate_subject_wildcards() {
    assert!(validate_subject("orders.>").is_ok());
    assert!(validate_subject("orders.*.eu").is_ok());
    assert!(validate_subject(">").is_ok());
    assert!(validate_subject("*").is_ok());
}

#[test]
fn test_validate_subject_empty() {
    let err = validate_subject("").unwrap_err();
    assert!(err.to_string().contains("cannot be empty"));
}

#[test]
fn test_validate_subject_whitespace() {
    assert!(validate_subject("orders created").is_err());
    assert!(validate_subject("orders\t").is_err());
}

#[test]
fn test_validate_subject_empty_token() {
    assert!(validate_subject("orders..eu").is_err());
    assert!(validate_subject(".orders").is_err());
    assert!(validate_subject("orders.").is_err());
}

#[test]
fn test_validate_subject_full_wildcard_not_last() {
    let err = validate_subject("orders.>.eu").unwrap_err();
    assert!(err.to_string().contains("last token"));
}

#[test]
fn test_validate_subject_partial_wildcard() {
    assert!(validate_subject("orders.a*").is_err());
    assert!(validate_subject("orders.>>").is_err());
}

// ========================================
// account key tests
// ========================================

#[test]
fn test_is_account_key() {
    let key = format!("A{}", "B".repeat(55));
    assert!(is_account_key(&key));
    assert!(validate_account_key(&key).is_ok());
}

#[test]
fn test_is_account_key_rejects_other_prefixes() {
    let operator_key = format!("O{}", "B".repeat(55));
    assert!(!is_account_key(&operator_key));
}

#[test]
fn test_is_account_key_rejects_wrong_length_and_alphabet() {
    assert!(!is_account_key("A"));
    assert!(!is_account_key(&format!("A{}", "B".repeat(54))));
    // base32 に 0/1/8/9 は含まれない
    assert!(!is_account_key(&format!("A{}1", "B".repeat(54))));
    assert!(validate_account_key("orders").is_err());
}

// ========================================
// token tests
// ========================================

#[test]
fn test_validate_token_compact_jwt() {
    assert!(validate_token("eyJhbGciOiJlZDI1NTE5In0.eyJzdWIiOiJ4In0.c2ln").is_ok());
}

#[test]
fn test_validate_token_rejects_garbage() {
    assert!(validate_token("").is_err());
    assert!(validate_token("not-a-token").is_err());
    assert!(validate_token("a.b.c.d").is_err());
}

#[test]
fn test_validate_token_requires_three_non_empty_segments() {
    assert!(validate_token("a.b.").is_err());
    assert!(validate_token(".b.c").is_err());
    assert!(validate_token("a..c").is_err());
    assert!(validate_token("a.b.c").is_ok());
}
