use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StoreError};
use crate::model::User;
use crate::store::BackingStore;
use std::io::Write;

use super::helpers::{encode, load_users};

/// Write the user with the given id to `out` as a JSON object.
///
/// When several users share the id, the last one in the set wins. When none
/// matches, an all-default user is written instead of failing, and the result
/// carries a warning so callers can tell the two cases apart.
pub fn run<S: BackingStore, W: Write + ?Sized>(
    store: &mut S,
    id: &str,
    out: &mut W,
) -> Result<CmdResult> {
    if id.is_empty() {
        return Err(StoreError::MissingId);
    }

    let users = load_users(store)?;
    let found = users.into_iter().filter(|u| u.id == id).last();

    let mut result = CmdResult::default();
    let user = match found {
        Some(user) => user,
        None => {
            result.add_message(CmdMessage::warning(format!(
                "No user with id {}; returning an empty record",
                id
            )));
            User::default()
        }
    };

    out.write_all(&encode(&user)?)?;
    Ok(result.with_affected_users(vec![user]))
}
