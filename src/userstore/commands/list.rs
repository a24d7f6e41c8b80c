use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BackingStore;
use std::io::Write;

/// Copy the stored content to `out` byte for byte.
///
/// The content is not decoded, so a corrupt file is listed as-is.
pub fn run<S: BackingStore, W: Write + ?Sized>(store: &mut S, out: &mut W) -> Result<CmdResult> {
    let content = store.read_all()?;
    out.write_all(&content)?;
    Ok(CmdResult::default())
}
