//! # API Facade
//!
//! The single entry point for userstore operations, whatever the caller.
//!
//! - [`perform`] is the whole-invocation entry: it validates [`Arguments`], opens
//!   the backing file, runs one operation and closes the file again.
//! - [`UserStoreApi`] is generic over [`BackingStore`], so the same dispatch can
//!   run against an [`InMemoryStore`](crate::store::memory::InMemoryStore) in
//!   tests.
//!
//! The API does not print. Query output is written to the caller's sink and
//! everything else comes back as a [`CmdResult`].

use crate::commands;
use crate::config::{Arguments, Operation};
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::BackingStore;
use std::io::Write;
use tracing::{debug, instrument};

pub struct UserStoreApi<S: BackingStore> {
    store: S,
}

impl<S: BackingStore> UserStoreApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add(&mut self, item: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, item)
    }

    pub fn list<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store, out)
    }

    pub fn find_by_id<W: Write + ?Sized>(
        &mut self,
        id: &str,
        out: &mut W,
    ) -> Result<commands::CmdResult> {
        commands::find::run(&mut self.store, id, out)
    }

    pub fn remove(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    /// Run `operation`, pulling its parameters from `args`.
    pub fn dispatch<W: Write + ?Sized>(
        &mut self,
        operation: Operation,
        args: &Arguments,
        out: &mut W,
    ) -> Result<commands::CmdResult> {
        debug!(%operation, "dispatching");
        match operation {
            Operation::Add => self.add(args.item()),
            Operation::List => self.list(out),
            Operation::FindById => self.find_by_id(args.id(), out),
            Operation::Remove => self.remove(args.id()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}

/// Run one full invocation against the file named in `args`.
///
/// The file is created when missing, even if the operation then turns out to be
/// unknown. On any error the file handle is released before returning.
#[instrument(skip_all, fields(operation = ?args.operation, file = ?args.file_name))]
pub fn perform<W: Write + ?Sized>(args: &Arguments, out: &mut W) -> Result<commands::CmdResult> {
    let file_name = args.file_name()?;
    let operation_name = args.operation_name()?;

    let store = FileStore::open(file_name)?;
    let mut api = UserStoreApi::new(store);

    let operation: Operation = operation_name.parse()?;
    let result = api.dispatch(operation, args, out)?;
    debug!(
        path = %api.store().path().display(),
        affected = result.affected_users.len(),
        "operation complete"
    );
    api.close()?;
    Ok(result)
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
