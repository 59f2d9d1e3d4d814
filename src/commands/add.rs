use super::{controller, reported, table_header, Kind, TableArgs};
use crate::api::ApiError;
use crate::libs::form::TaskForm;
use crate::libs::messages::Message;
use crate::libs::sync::SyncError;
use crate::libs::task::RecurrenceKind;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

/// Task form fields that can be given on the command line.
#[derive(Debug, Default, Args)]
pub struct TaskFields {
    /// Task title
    #[arg(long)]
    pub title: Option<String>,
    /// Task description
    #[arg(short, long)]
    pub description: Option<String>,
    /// Time of day, HH:MM
    #[arg(short, long)]
    pub time: Option<String>,
    /// Day of the week for weekly tasks
    #[arg(long)]
    pub day: Option<String>,
    /// Day of the month for monthly tasks
    #[arg(long)]
    pub date: Option<String>,
}

impl TaskFields {
    /// Copies the given fields into `form`, leaving the others as they are.
    pub fn apply(&self, form: &mut TaskForm) {
        let fields = [
            ("title", &self.title),
            ("description", &self.description),
            ("execution_time", &self.time),
            ("execution_day", &self.day),
            ("execution_date", &self.date),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                form.set(name, value.as_str());
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Recurrence of the new task
    #[arg(short, long, value_enum)]
    kind: Kind,
    #[command(flatten)]
    fields: TaskFields,
    /// Prompt for the fields not given as options
    #[arg(short, long)]
    interactive: bool,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let table_args = TableArgs::of_kind(args.kind);
    let mut sync = controller(&table_args, false, false).await?;
    let kind = RecurrenceKind::from(args.kind);

    let form = sync.add_form_mut();
    form.set_kind(kind);
    args.fields.apply(form);
    if args.interactive {
        prompt_missing(form, kind)?;
    }

    if let Err(err) = sync.create().await {
        if matches!(err, SyncError::Api(ApiError::Validation(_))) {
            View::form(Message::AddFormHeader, sync.add_form());
        }
        return reported(Err(err));
    }

    let badge = sync.badge();
    View::tasks(table_header(table_args.kind()), sync.table_mut(), badge);
    Ok(())
}

/// Asks for every field the recurrence needs that is still empty.
fn prompt_missing(form: &mut TaskForm, kind: RecurrenceKind) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut wanted = vec![
        ("title", Message::PromptTitle),
        ("description", Message::PromptDescription),
        ("execution_time", Message::PromptExecutionTime),
    ];
    match kind {
        RecurrenceKind::Daily => {}
        RecurrenceKind::Weekly => wanted.push(("execution_day", Message::PromptExecutionDay)),
        RecurrenceKind::Monthly => wanted.push(("execution_date", Message::PromptExecutionDate)),
    }

    for (name, prompt) in wanted {
        if form.value(name).map_or(true, |value| value.trim().is_empty()) {
            let value: String = Input::with_theme(&theme)
                .with_prompt(prompt.to_string())
                .allow_empty(true)
                .interact_text()?;
            form.set(name, value);
        }
    }
    Ok(())
}
