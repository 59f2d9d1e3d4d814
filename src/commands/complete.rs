use super::{controller, reported, TableArgs};
use crate::libs::messages::Message;
use crate::libs::table::TaskTable;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task id
    id: i64,
}

/// Toggles completion; the server decides the resulting state.
pub async fn cmd(args: CompleteArgs) -> Result<()> {
    let mut sync = controller(&TableArgs::default(), false, false).await?;
    let completed = reported(sync.toggle_complete(args.id).await)?;
    if !completed {
        let title = sync.table().row(args.id).map(|row| row.title.clone()).unwrap_or_default();
        msg_info!(Message::TaskReopened(title));
    }
    if sync.badge().text().is_some() {
        msg_info!(sync.badge());
    }
    Ok(())
}
