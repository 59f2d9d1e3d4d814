use super::{controller, table_header, TableArgs};
use crate::libs::table::{renumber, TaskTable};
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TasksArgs {
    #[command(flatten)]
    table: TableArgs,
    /// Only completed tasks
    #[arg(long)]
    completed: bool,
    /// Page to show, starting from 1
    #[arg(short, long, default_value_t = 1)]
    page: usize,
    /// Show descriptions in full
    #[arg(long)]
    expand: bool,
}

pub async fn cmd(args: TasksArgs) -> Result<()> {
    let mut sync = controller(&args.table, args.completed, false).await?;
    let badge = sync.badge();
    let table = sync.table_mut();
    table.set_page(args.page.saturating_sub(1));
    renumber(table);
    if args.expand {
        for row in table.page_rows_mut() {
            row.expand();
        }
    }
    View::tasks(table_header(args.table.kind()), table, badge);
    Ok(())
}
