//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::api::attendance::AttendanceRecord;
use crate::api::blogs::BlogPost;
use crate::api::employees::Employee;
use crate::api::notifications::Notification;
use crate::api::projects::Project;
use crate::api::tasks::Task;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

fn header(titles: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(titles.iter().map(|t| Cell::new(t).fg(Color::Cyan)));
    table
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

pub fn print_employee_table(employees: &[Employee]) {
    if employees.is_empty() {
        info("No employees found");
        return;
    }

    let mut table = header(&["ID", "Username", "Name", "Department", "Role", "Active"]);
    for e in employees {
        table.add_row(vec![
            e.id.to_string(),
            e.username.clone(),
            opt(&e.full_name),
            opt(&e.department),
            e.role.to_string(),
            if e.is_active { "yes".to_string() } else { "no".to_string() },
        ]);
    }
    println!("{}", table);
}

pub fn print_project_table(projects: &[Project]) {
    if projects.is_empty() {
        info("No projects found");
        return;
    }

    let mut table = header(&["ID", "Name", "Status", "Start", "End"]);
    for p in projects {
        table.add_row(vec![
            p.id.to_string(),
            p.name.clone(),
            p.status.to_string(),
            p.start_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
            p.end_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{}", table);
}

pub fn print_task_table(tasks: &[Task]) {
    if tasks.is_empty() {
        info("No tasks found");
        return;
    }

    let mut table = header(&["ID", "Title", "Status", "Project", "Due"]);
    for t in tasks {
        table.add_row(vec![
            t.id.to_string(),
            t.title.clone(),
            format_task_status(&t.status.to_string()),
            t.project_id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
            t.due_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{}", table);
}

/// Format a task status as a colored string
pub fn format_task_status(status: &str) -> String {
    match status {
        "done" => status.green().to_string(),
        "in_progress" => status.yellow().to_string(),
        "review" => status.blue().to_string(),
        _ => status.to_string(),
    }
}

pub fn print_blog_table(blogs: &[BlogPost]) {
    if blogs.is_empty() {
        info("No blog posts found");
        return;
    }

    let mut table = header(&["ID", "Title", "Status", "Created"]);
    for b in blogs {
        table.add_row(vec![
            b.id.to_string(),
            b.title.clone(),
            b.status.to_string(),
            b.created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{}", table);
}

pub fn print_attendance_table(records: &[AttendanceRecord]) {
    if records.is_empty() {
        info("No attendance records found");
        return;
    }

    let mut table = header(&["Date", "Employee", "Check-in", "Check-out", "Hours"]);
    for r in records {
        table.add_row(vec![
            r.date.to_string(),
            opt(&r.employee_name),
            r.check_in
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "-".to_string()),
            r.check_out
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "-".to_string()),
            r.hours_worked()
                .map(|h| format!("{:.1}", h))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{}", table);
}

pub fn print_notification_table(notifications: &[Notification]) {
    if notifications.is_empty() {
        info("No notifications");
        return;
    }

    let mut table = header(&["ID", "Message", "Read", "When"]);
    for n in notifications {
        table.add_row(vec![
            n.id.to_string(),
            n.message.clone(),
            if n.is_read { "yes".to_string() } else { "no".yellow().to_string() },
            n.created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{}", table);
}
