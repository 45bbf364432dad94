use super::*;
use proptest::prelude::*;

fn account_key() -> String {
    format!("A{}", "C".repeat(55))
}

/// 単一トークンのサブジェクト
fn token_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,7}".prop_map(|s| s)
}

/// ローカルサブジェクトが重複しない (local, remote, kind) の組
fn entries_strategy() -> impl Strategy<Value = Vec<(String, String, ImportKind)>> {
    prop::collection::btree_map(token_strategy(), (token_strategy(), any::<bool>()), 0..16)
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(local, (remote, is_stream))| {
                    let kind = if is_stream {
                        ImportKind::Stream
                    } else {
                        ImportKind::Service
                    };
                    (local, remote, kind)
                })
                .collect()
        })
}

fn build(entries: &[(String, String, ImportKind)]) -> Imports {
    let mut imports = Imports::default();
    for (local, remote, kind) in entries {
        let mut imp: Import = match kind {
            ImportKind::Stream => StreamImport::new(remote, &account_key(), remote)
                .unwrap()
                .into(),
            ImportKind::Service => ServiceImport::new(remote, &account_key(), remote)
                .unwrap()
                .into(),
        };
        imp.set_local_subject(local).unwrap();
        imports.add(imp).unwrap();
    }
    imports
}

proptest! {
    /// 追加したローカルサブジェクトは常に同じ種別・同じリモートで見つかる
    #[test]
    fn prop_find_returns_inserted_import(entries in entries_strategy()) {
        let imports = build(&entries);

        for (local, remote, kind) in &entries {
            let found = imports.find(local);
            prop_assert!(found.is_some(), "{} not found", local);
            let found = found.unwrap();
            prop_assert_eq!(found.kind(), *kind);
            prop_assert_eq!(found.subject(), remote.as_str());
            prop_assert_eq!(found.local_subject(), Some(local.as_str()));
        }
    }

    /// 追加していないサブジェクトは見つからない
    #[test]
    fn prop_find_misses_unknown_subjects(
        entries in entries_strategy(),
        other in token_strategy()
    ) {
        let imports = build(&entries);
        // 追加したのは単一トークンのみ
        let unknown = format!("missing.{}", other);
        prop_assert!(imports.find(&unknown).is_none());

        if !entries.iter().any(|(local, _, _)| *local == other) {
            prop_assert!(imports.find(&other).is_none());
        }
    }

    /// 一覧は両種別の合計件数で、リモートサブジェクト昇順
    #[test]
    fn prop_all_by_subject_covers_both_kinds_sorted(entries in entries_strategy()) {
        let imports = build(&entries);
        let all = imports.all_by_subject();

        prop_assert_eq!(all.len(), imports.len());
        prop_assert_eq!(all.len(), imports.streams().len() + imports.services().len());
        prop_assert_eq!(all.len(), entries.len());

        let streams = entries.iter().filter(|(_, _, k)| *k == ImportKind::Stream).count();
        prop_assert_eq!(imports.streams().len(), streams);

        prop_assert!(all.windows(2).all(|w| w[0].subject() <= w[1].subject()));
    }
}
