/*
[INPUT]:  Synchronizer snapshots and single tasks
[OUTPUT]: Plain-text views for the terminal
[POS]:    CLI presentation layer - rendering only, no state logic
[UPDATE]: When the task list layout changes
*/

use console::style;
use minitasks_adapter::Task;
use minitasks_sync::SyncSnapshot;

pub fn render_task(task: &Task) -> String {
    let mark = if task.done { "[x]" } else { "[ ]" };
    let line = format!("{} {:>4}  {}", mark, task.id, task.title);
    if task.done {
        style(line).dim().to_string()
    } else {
        line
    }
}

/// Error banner, task list (or loading/empty notice) and stats footer
pub fn render_snapshot(snapshot: &SyncSnapshot) -> String {
    let mut lines = Vec::new();

    if let Some(message) = snapshot.error_message() {
        lines.push(style(format!("error: {message}")).red().bold().to_string());
    }

    if snapshot.loading() {
        lines.push("Loading tasks...".to_string());
    } else if snapshot.tasks.is_empty() {
        lines.push("No tasks yet! Add one to get started.".to_string());
    } else {
        lines.extend(snapshot.tasks.iter().map(render_task));
    }

    let stats = snapshot.stats();
    lines.push(
        style(format!(
            "{} active • {} completed • {} total",
            stats.active, stats.completed, stats.total
        ))
        .dim()
        .to_string(),
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use minitasks_adapter::TaskId;
    use minitasks_sync::{Activity, Operation, OperationFailed};

    fn snapshot(tasks: Vec<Task>) -> SyncSnapshot {
        SyncSnapshot {
            tasks,
            list: Activity::Idle,
            create: Activity::Idle,
            error: None,
            draft: String::new(),
        }
    }

    fn task(id: i64, title: &str, done: bool) -> Task {
        Task {
            id: TaskId(id),
            title: title.to_string(),
            done,
        }
    }

    #[test]
    fn test_render_list_and_footer() {
        console::set_colors_enabled(false);
        let view = render_snapshot(&snapshot(vec![task(1, "A", false), task(12, "B", true)]));
        assert_eq!(
            view,
            "[ ]    1  A\n[x]   12  B\n1 active • 1 completed • 2 total"
        );
    }

    #[test]
    fn test_render_empty() {
        console::set_colors_enabled(false);
        let view = render_snapshot(&snapshot(Vec::new()));
        assert_eq!(
            view,
            "No tasks yet! Add one to get started.\n0 active • 0 completed • 0 total"
        );
    }

    #[test]
    fn test_render_loading_and_error() {
        console::set_colors_enabled(false);
        let mut current = snapshot(vec![task(1, "A", false)]);
        current.list = Activity::Pending;
        current.error = Some(OperationFailed {
            operation: Operation::List,
            message: "503 Service Unavailable: down".to_string(),
        });

        let view = render_snapshot(&current);
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(
            lines,
            vec![
                "error: Failed to fetch tasks: 503 Service Unavailable: down",
                "Loading tasks...",
                "1 active • 0 completed • 1 total",
            ]
        );
    }
}
