use super::{controller, reported, table_header, TableArgs};
use crate::libs::messages::Message;
use crate::libs::sync::DeleteOutcome;
use crate::libs::table::{renumber, TaskTable};
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id
    id: i64,
    #[command(flatten)]
    table: TableArgs,
    /// Page the table is on when the task is deleted, starting from 1
    #[arg(short, long, default_value_t = 1)]
    page: usize,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let mut sync = controller(&args.table, false, args.yes).await?;
    let table = sync.table_mut();
    table.set_page(args.page.saturating_sub(1));
    renumber(table);

    match reported(sync.delete(args.id).await)? {
        DeleteOutcome::Cancelled => msg_info!(Message::DeleteCancelled),
        DeleteOutcome::Deleted => {
            let badge = sync.badge();
            View::tasks(table_header(args.table.kind()), sync.table_mut(), badge);
        }
    }
    Ok(())
}
