use super::{controller, reported, TableArgs};
use crate::libs::messages::Message;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task id
    id: i64,
}

pub async fn cmd(args: ShowArgs) -> Result<()> {
    let mut sync = controller(&TableArgs::default(), false, false).await?;
    let task = reported(sync.read_for_edit(args.id).await)?;
    View::form(Message::EditFormHeader(task.title), sync.edit_form());
    Ok(())
}
