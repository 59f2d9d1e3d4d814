use super::badge::Badge;
use super::form::{TaskForm, TASK_FIELDS};
use super::messages::Message;
use super::table::TaskTable;
use crate::{msg_print, msg_warning};
use prettytable::{row, Table};

/// Terminal rendering of the task table and forms.
pub struct View {}

impl View {
    /// Prints the current page of the table with its badge and pager.
    pub fn tasks<T: TaskTable>(header: &str, table: &mut T, badge: Badge) {
        msg_print!(format!("{} {}", Message::TasksHeader(header.to_string()), badge), true);

        let info = table.page_info();
        if info.records == 0 {
            msg_print!(Message::NoTasks);
            return;
        }

        let mut grid = Table::new();
        grid.add_row(row!["#", "ID", "TITLE", "SCHEDULE", "DESCRIPTION", "STATUS"]);
        for task in table.page_rows_mut().iter() {
            let status = if task.completed { "✔ done" } else { "" };
            grid.add_row(row![
                task.number,
                task.id,
                task.title,
                task.schedule,
                task.description.visible(),
                status
            ]);
        }
        grid.printstd();

        msg_print!(Message::PageFooter {
            page: info.page + 1,
            pages: info.pages,
            records: info.records,
        });
    }

    /// Prints a form's values, with the inline error under each invalid field.
    pub fn form(header: Message, form: &TaskForm) {
        msg_print!(header, true);

        let mut grid = Table::new();
        for name in TASK_FIELDS {
            if let Some(field) = form.field(name) {
                let feedback = field.feedback.clone().unwrap_or_default();
                grid.add_row(row![name, field.value, feedback]);
            }
        }
        grid.printstd();

        for message in form.form_errors() {
            msg_warning!(message);
        }
    }
}
