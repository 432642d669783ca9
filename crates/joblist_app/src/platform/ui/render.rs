use chrono::{DateTime, Utc};
use joblist_core::{JobListViewModel, JobRecord, SortDirection};

const NAME_WIDTH: usize = 28;

pub fn render(view: &JobListViewModel) -> String {
    let title = view.title.as_deref().unwrap_or(if view.completed {
        "Completed Jobs"
    } else {
        "Running Jobs"
    });
    let direction = match view.sort_direction {
        SortDirection::Ascend => "asc",
        SortDirection::Descend => "desc",
    };

    let mut out = format!(
        "== {} ({} jobs, sorted by {} {}) ==\n",
        title,
        view.total,
        view.sort_column.as_str(),
        direction
    );

    if view.is_loading {
        out.push_str("Loading jobs...\n");
        return out;
    }
    if view.rows.is_empty() {
        out.push_str("No jobs\n");
        return out;
    }

    out.push_str(&format!(
        "{:>3}  {:<NAME_WIDTH$}  {:<19}  {:>12}  {:<19}  {:>14}  {}\n",
        "#", "Job Name", "Start Time", "Duration", "End Time", "Tasks r/f/t", "Status"
    ));
    for (index, row) in view.rows.iter().enumerate() {
        out.push_str(&render_row(index + 1, &row.record));
        out.push('\n');
    }
    if view.rows.len() < view.total {
        out.push_str(&format!("... {} more\n", view.total - view.rows.len()));
    }
    out
}

fn render_row(number: usize, job: &JobRecord) -> String {
    let tasks = format!(
        "{}/{}/{}",
        job.tasks.running, job.tasks.finished, job.tasks.total
    );
    format!(
        "{:>3}  {:<NAME_WIDTH$}  {:<19}  {:>12}  {:<19}  {:>14}  {}",
        number,
        truncate(&job.name, NAME_WIDTH),
        format_timestamp(Some(job.start_time)),
        format_duration(job.duration),
        format_timestamp(job.end_time),
        tasks,
        job.state
    )
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width - 1).collect();
    short.push('~');
    short
}

fn format_timestamp(millis: Option<i64>) -> String {
    millis
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_duration(millis: i64) -> String {
    if millis < 1_000 {
        return format!("{}ms", millis.max(0));
    }
    let total_secs = millis / 1_000;
    let units = [
        (total_secs / 86_400, "d"),
        (total_secs % 86_400 / 3_600, "h"),
        (total_secs % 3_600 / 60, "m"),
        (total_secs % 60, "s"),
    ];
    units
        .iter()
        .skip_while(|(value, _)| *value == 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect::<Vec<_>>()
        .join(" ")
}
