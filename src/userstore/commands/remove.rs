use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StoreError};
use crate::model::User;
use crate::store::BackingStore;

use super::helpers::{load_users, save_users};

/// Drop every user with the given id and rewrite the store.
///
/// Fails with [`StoreError::NotFound`] when no user had that id, in which case
/// the store is left untouched.
pub fn run<S: BackingStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    if id.is_empty() {
        return Err(StoreError::MissingId);
    }

    let users = load_users(store)?;
    let (removed, kept): (Vec<User>, Vec<User>) = users.into_iter().partition(|u| u.id == id);

    if removed.is_empty() {
        return Err(StoreError::NotFound(id.to_string()));
    }

    save_users(store, &kept)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {} user(s) with id {}",
        removed.len(),
        id
    )));
    Ok(result.with_affected_users(removed))
}
