//! テスト用インメモリ認可ストア

use super::store::{Account, AuthStore, Operator};
use crate::error::{AuthctlError, Result};

/// テスト用インメモリストア
///
/// `commit()` 時点のスナップショットを保持するので、
/// コミットされた内容とステージング中の内容を区別して検証できる。
#[derive(Debug, Default)]
pub struct MemoryStore {
    operators: Vec<Operator>,
    committed: Vec<Operator>,
    commits: usize,
    fail_commit: bool,
}

impl MemoryStore {
    pub fn new(operators: Vec<Operator>) -> Self {
        Self {
            committed: operators.clone(),
            operators,
            commits: 0,
            fail_commit: false,
        }
    }

    /// オペレータ "O" 配下にアカウントを持つストア
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let mut operator = Operator::new("O");
        operator.accounts = accounts;
        Self::new(vec![operator])
    }

    /// commit を失敗させる
    pub fn failing_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    pub fn commits(&self) -> usize {
        self.commits
    }

    pub fn committed(&self) -> &[Operator] {
        &self.committed
    }
}

impl AuthStore for MemoryStore {
    fn operators(&self) -> &[Operator] {
        &self.operators
    }

    fn operators_mut(&mut self) -> &mut [Operator] {
        &mut self.operators
    }

    fn commit(&mut self) -> Result<()> {
        if self.fail_commit {
            return Err(AuthctlError::Commit("store is read-only".to_string()));
        }
        self.committed = self.operators.clone();
        self.commits += 1;
        Ok(())
    }
}
