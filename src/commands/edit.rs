use super::add::TaskFields;
use super::{controller, reported, table_header, Kind, TableArgs};
use crate::api::ApiError;
use crate::libs::messages::Message;
use crate::libs::sync::SyncError;
use crate::libs::task::RecurrenceKind;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id
    id: i64,
    /// Change the recurrence
    #[arg(short, long, value_enum)]
    kind: Option<Kind>,
    #[command(flatten)]
    fields: TaskFields,
}

/// Fetches the task into the edit form, overlays the given fields and
/// submits the whole form.
pub async fn cmd(args: EditArgs) -> Result<()> {
    let table_args = TableArgs::default();
    let mut sync = controller(&table_args, false, false).await?;
    let task = reported(sync.read_for_edit(args.id).await)?;

    let form = sync.edit_form_mut();
    if let Some(kind) = args.kind {
        form.set_kind(RecurrenceKind::from(kind));
    }
    args.fields.apply(form);

    if let Err(err) = sync.update(args.id).await {
        if matches!(err, SyncError::Api(ApiError::Validation(_))) {
            View::form(Message::EditFormHeader(task.title), sync.edit_form());
        }
        return reported(Err(err));
    }

    let badge = sync.badge();
    View::tasks(table_header(table_args.kind()), sync.table_mut(), badge);
    Ok(())
}
