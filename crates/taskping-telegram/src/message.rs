//! Reminder message formatting

use taskping_core::Issue;

/// Format a reminder for the given issues.
///
/// One bullet per issue with its key, summary, due date when known, and a
/// browse link on the configured Jira instance.
pub fn format_reminder(issues: &[Issue], jira_base_url: &str) -> String {
    let mut message = String::from("\u{26a0}\u{fe0f} Jira tasks need attention:\n\n");

    for issue in issues {
        message.push_str(&format!("\u{2022} {}: {}", issue.key, issue.summary));
        if let Some(due) = issue.due_date {
            message.push_str(&format!(" (due {})", due.format("%Y-%m-%d")));
        }
        message.push('\n');
        message.push_str(&issue.browse_url(jira_base_url));
        message.push_str("\n\n");
    }

    message.trim_end().to_string()
}
