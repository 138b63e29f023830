//! CLI interface for Crewdesk

pub mod commands;
mod output;

pub use output::*;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "crewdesk")]
#[command(author = "Krakaw")]
#[command(version = "1.0.0")]
#[command(about = "Employee management from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a crewdesk.toml configuration file
    Init,

    /// Log in to the backend
    Login {
        /// Username (prompted for when omitted)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Log out and clear the stored session
    Logout,

    /// Show the currently logged-in user
    Whoami,

    /// Request a password reset code by email
    ForgotPassword {
        /// Account email address
        email: String,
    },

    /// Reset a password using an emailed reset code
    ResetPassword {
        /// Account email address
        email: String,
    },

    /// Attendance check-in/out and history
    Attendance {
        #[command(subcommand)]
        action: AttendanceAction,
    },

    /// Employee records
    Employees {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Tasks (kanban-style)
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Blog posts
    Blogs {
        #[command(subcommand)]
        action: BlogAction,
    },

    /// Notifications
    Notifications {
        #[command(subcommand)]
        action: NotificationAction,
    },

    /// Dashboard statistics for your role
    Dashboard,

    /// Application settings
    Settings {
        #[command(subcommand)]
        action: SettingAction,
    },
}

#[derive(Subcommand)]
pub enum AttendanceAction {
    /// Mark the start of your work day
    CheckIn,
    /// Mark the end of your work day
    CheckOut,
    /// Show today's attendance record
    Today,
    /// Show your attendance history
    History {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Show everyone's attendance for today
    AllToday,
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// List all employees
    List,
    /// Show one employee
    Show { id: i64 },
    /// Show your own profile
    Me,
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// List all projects
    List,
    /// Show one project
    Show { id: i64 },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks, optionally filtered
    List {
        /// Only tasks in this project
        #[arg(long)]
        project: Option<i64>,
        /// Only tasks with this status (todo, in_progress, review, done)
        #[arg(long)]
        status: Option<String>,
    },
    /// List tasks assigned to you
    Mine,
    /// Move a task to another status column
    SetStatus {
        id: i64,
        /// todo, in_progress, review or done
        status: String,
    },
}

#[derive(Subcommand)]
pub enum BlogAction {
    /// List blog posts
    List {
        /// Only posts with this status (draft, published, archived)
        #[arg(long)]
        status: Option<String>,
    },
    /// Change a post's status
    SetStatus {
        id: i64,
        /// draft, published or archived
        status: String,
    },
}

#[derive(Subcommand)]
pub enum NotificationAction {
    /// List notifications
    List,
    /// Mark one notification as read
    Read { id: i64 },
    /// Mark every notification as read
    ReadAll,
}

#[derive(Subcommand)]
pub enum SettingAction {
    /// Show a setting
    Get { key: String },
    /// Update a setting (value is parsed as JSON, falling back to a string)
    Set { key: String, value: String },
}
