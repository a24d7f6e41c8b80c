use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DecodeTarget, Result, StoreError};
use crate::model::User;
use crate::store::BackingStore;

use super::helpers::{load_users_or_empty, save_users};

/// Append the user described by `item` to the record set.
///
/// No uniqueness check is made; adding a second record with an existing id
/// simply stores both.
pub fn run<S: BackingStore>(store: &mut S, item: &str) -> Result<CmdResult> {
    if item.is_empty() {
        return Err(StoreError::MissingItem);
    }

    let mut users = load_users_or_empty(store)?;
    let user: User =
        serde_json::from_str(item).map_err(|e| StoreError::decode(DecodeTarget::Item, e))?;

    users.push(user.clone());
    save_users(store, &users)?;

    let mut result = CmdResult::default().with_affected_users(vec![user.clone()]);
    result.add_message(CmdMessage::success(format!("User added: {}", user.id)));
    Ok(result)
}
