use super::*;
use crate::auth::import::{ImportEntry, StreamImport};
use crate::auth::store::{Account, AccountKey};
use tempfile::TempDir;

fn key(fill: char) -> String {
    format!("A{}", fill.to_string().repeat(55))
}

fn document() -> StoreDocument {
    StoreDocument {
        operators: vec![Operator::new("O")
            .with_account(Account::new("A", key('A')))
            .with_account(Account::new("B", key('B')))],
        updated_at: None,
    }
}

#[test]
fn open_missing_file_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::open(temp_dir.path().join("store.json")).unwrap();

    assert!(store.operators().is_empty());
    assert!(store.document().updated_at.is_none());
}

#[test]
fn open_rejects_invalid_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = FileStore::open(&path).err().unwrap();
    assert!(matches!(err, AuthctlError::Store(_)));
}

#[test]
fn commit_then_open_roundtrips() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("store.json");

    let mut store = FileStore::with_document(&path, document());
    let import = StreamImport::new("orders", &key('A'), "orders.>").unwrap();
    store
        .account_mut(&AccountKey::new("O", "B"))
        .unwrap()
        .imports
        .add(import.into())
        .unwrap();
    store.commit().unwrap();

    let reopened = FileStore::open(&path).unwrap();
    let account = reopened.account(&AccountKey::new("O", "B")).unwrap();
    assert_eq!(account.imports.streams().len(), 1);
    assert_eq!(account.imports.streams().list()[0].base().name(), "orders");
    assert!(reopened.document().updated_at.is_some());
}

#[test]
fn staged_changes_are_not_persisted_without_commit() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");

    let mut store = FileStore::with_document(&path, document());
    store.commit().unwrap();

    store
        .account_mut(&AccountKey::new("O", "A"))
        .unwrap()
        .imports
        .add(StreamImport::new("x", &key('B'), "x").unwrap().into())
        .unwrap();
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    let account = reopened.account(&AccountKey::new("O", "A")).unwrap();
    assert!(account.imports.is_empty());
}

#[test]
fn commit_failure_is_reported_as_commit_error() {
    let temp_dir = TempDir::new().unwrap();
    // 既存ファイルを親ディレクトリとして使うと書き込みに失敗する
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let mut store = FileStore::with_document(blocker.join("store.json"), document());
    let err = store.commit().unwrap_err();

    assert!(matches!(err, AuthctlError::Commit(_)));
    assert!(store.document().updated_at.is_none());
}
