use super::current_task::format_timestamp;
use super::formatter::format_seconds;
use super::task::{CompletedTask, DailyTagTotal};
use prettytable::{format, row, Table};

/// Table rendering for completed task reports.
pub struct View {}

impl View {
    pub fn completed_tasks_table(tasks: &[CompletedTask]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row!["ID", "TAG", "STARTED", "DURATION", "SECONDS"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.tag,
                format_timestamp(&task.date_started),
                format_seconds(task.duration),
                format!("{:.0}", task.duration)
            ]);
        }

        table
    }

    pub fn daily_totals_table(totals: &[DailyTagTotal]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row!["DATE", "TAG", "DURATION", "SECONDS"]);
        let mut previous_date = None;
        for total in totals {
            // Print each date once, on the first row of its group
            let date = if previous_date == Some(total.date) {
                String::new()
            } else {
                total.date.format("%Y-%m-%d").to_string()
            };
            previous_date = Some(total.date);

            table.add_row(row![date, total.tag, format_seconds(total.duration), format!("{:.0}", total.duration)]);
        }

        table
    }

    pub fn completed_tasks(tasks: &[CompletedTask]) {
        Self::completed_tasks_table(tasks).printstd();
    }

    pub fn daily_totals(totals: &[DailyTagTotal]) {
        Self::daily_totals_table(totals).printstd();
    }
}
