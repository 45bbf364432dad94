//! 操作対象アカウントの解決

use crate::auth::{AccountKey, AuthStore};
use crate::error::{AuthctlError, Result};
use crate::prompt::Prompter;

/// オペレータ名・アカウント名の指定（未指定は None）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountSelector {
    pub operator: Option<String>,
    pub account: Option<String>,
}

impl AccountSelector {
    pub fn new(operator: Option<String>, account: Option<String>) -> Self {
        Self { operator, account }
    }
}

/// 候補が 1 つならそれを、複数なら対話的に選ばせる
fn choose<P: Prompter + ?Sized>(
    prompter: &mut P,
    message: &str,
    mut candidates: Vec<String>,
    none: impl FnOnce() -> AuthctlError,
) -> Result<String> {
    match candidates.len() {
        0 => Err(none()),
        1 => Ok(candidates.remove(0)),
        _ => {
            candidates.sort();
            prompter.select(message, &candidates)
        }
    }
}

/// オペレータとアカウントを解決する
pub fn select_account<S, P>(
    store: &S,
    prompter: &mut P,
    selector: &AccountSelector,
) -> Result<AccountKey>
where
    S: AuthStore + ?Sized,
    P: Prompter + ?Sized,
{
    let operator_name = match &selector.operator {
        Some(name) => name.clone(),
        None => choose(
            prompter,
            "Select an Operator",
            store.operator_names(),
            || AuthctlError::NoOperators,
        )?,
    };
    let operator = store.operator(&operator_name)?;

    let account_name = match &selector.account {
        Some(name) => {
            if operator.account(name).is_none() {
                return Err(AuthctlError::AccountNotFound(name.clone()));
            }
            name.clone()
        }
        None => choose(
            prompter,
            "Select an Account",
            operator.account_names(),
            || AuthctlError::NoAccounts(operator_name.clone()),
        )?,
    };

    tracing::debug!(operator = %operator_name, account = %account_name, "resolved account");
    Ok(AccountKey::new(operator_name, account_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::memory::MemoryStore;
    use crate::auth::{Account, Operator};
    use crate::prompt::ScriptedPrompter;

    fn key(fill: char) -> String {
        format!("A{}", fill.to_string().repeat(55))
    }

    fn two_operators() -> MemoryStore {
        MemoryStore::new(vec![
            Operator::new("O")
                .with_account(Account::new("B", key('B')))
                .with_account(Account::new("A", key('A'))),
            Operator::new("P").with_account(Account::new("C", key('C'))),
        ])
    }

    #[test]
    fn explicit_names_skip_prompting() {
        let store = two_operators();
        let mut prompter = ScriptedPrompter::new();
        let selector = AccountSelector::new(Some("O".into()), Some("A".into()));

        let key = select_account(&store, &mut prompter, &selector).unwrap();
        assert_eq!(key, AccountKey::new("O", "A"));
        assert!(prompter.offered.is_empty());
    }

    #[test]
    fn single_candidate_is_chosen_automatically() {
        let store = two_operators();
        let mut prompter = ScriptedPrompter::new();
        let selector = AccountSelector::new(Some("P".into()), None);

        let key = select_account(&store, &mut prompter, &selector).unwrap();
        assert_eq!(key, AccountKey::new("P", "C"));
        assert!(prompter.offered.is_empty());
    }

    #[test]
    fn multiple_candidates_prompt_sorted() {
        let store = two_operators();
        let mut prompter = ScriptedPrompter::new()
            .select_answer("O")
            .select_answer("B");

        let key = select_account(&store, &mut prompter, &AccountSelector::default()).unwrap();
        assert_eq!(key, AccountKey::new("O", "B"));
        assert_eq!(
            prompter.offered,
            vec![
                vec!["O".to_string(), "P".to_string()],
                vec!["A".to_string(), "B".to_string()],
            ]
        );
    }

    #[test]
    fn empty_store_has_no_operators() {
        let store = MemoryStore::new(vec![]);
        let mut prompter = ScriptedPrompter::new();
        let err = select_account(&store, &mut prompter, &AccountSelector::default()).unwrap_err();
        assert!(matches!(err, AuthctlError::NoOperators));
    }

    #[test]
    fn operator_without_accounts() {
        let store = MemoryStore::new(vec![Operator::new("O")]);
        let mut prompter = ScriptedPrompter::new();
        let err = select_account(&store, &mut prompter, &AccountSelector::default()).unwrap_err();
        assert!(matches!(err, AuthctlError::NoAccounts(ref op) if op == "O"));
    }

    #[test]
    fn unknown_names_fail() {
        let store = two_operators();
        let mut prompter = ScriptedPrompter::new();

        let err = select_account(
            &store,
            &mut prompter,
            &AccountSelector::new(Some("X".into()), None),
        )
        .unwrap_err();
        assert!(matches!(err, AuthctlError::OperatorNotFound(_)));

        let err = select_account(
            &store,
            &mut prompter,
            &AccountSelector::new(Some("O".into()), Some("Z".into())),
        )
        .unwrap_err();
        assert!(matches!(err, AuthctlError::AccountNotFound(_)));
    }
}
