use super::*;

#[derive(Debug, Parser)]
struct TestCli {
    #[command(flatten)]
    args: Args,
}

fn parse(argv: &[&str]) -> Args {
    let mut full = vec!["edit"];
    full.extend_from_slice(argv);
    TestCli::try_parse_from(full).unwrap().args
}

#[test]
fn test_no_flags_means_no_changes() {
    let args = parse(&["orders.>"]);
    assert_eq!(args.subject.as_deref(), Some("orders.>"));
    assert!(args.changes().is_empty());
}

#[test]
fn test_bare_flags_mean_true() {
    let args = parse(&["--allow-trace", "--share"]);
    let changes = args.changes();

    assert_eq!(changes.allow_trace, Some(true));
    assert_eq!(changes.share, Some(true));
    assert_eq!(changes.local_subject, None);
}

#[test]
fn test_explicit_false() {
    let args = parse(&["charge", "--share=false", "--allow-trace=false"]);
    let changes = args.changes();

    assert_eq!(changes.share, Some(false));
    assert_eq!(changes.allow_trace, Some(false));
}

#[test]
fn test_flag_value_requires_equals() {
    // `--share false` の false は位置引数として扱われる
    let args = parse(&["--share", "false"]);
    assert_eq!(args.share, Some(true));
    assert_eq!(args.subject.as_deref(), Some("false"));
}

#[test]
fn test_local_subject() {
    let args = parse(&["charge", "--local-subject", "pay"]);
    assert_eq!(args.changes().local_subject.as_deref(), Some("pay"));
}

#[test]
fn test_invalid_bool_is_rejected() {
    assert!(TestCli::try_parse_from(["edit", "--share=maybe"]).is_err());
}
