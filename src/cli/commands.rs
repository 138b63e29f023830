//! CLI command implementations

use anyhow::Result;
use std::fs;
use std::sync::Arc;

use crate::api::navigator::{RouteLog, DASHBOARD_ROUTE};
use crate::api::tasks::TaskFilter;
use crate::api::Gateway;
use crate::auth::permissions::Permission;
use crate::auth::AuthService;
use crate::cli::{
    error, info, print_attendance_table, print_blog_table, print_employee_table,
    print_notification_table, print_project_table, print_task_table, success, warn,
    AttendanceAction, BlogAction, EmployeeAction, NotificationAction, ProjectAction,
    SettingAction, TaskAction,
};
use crate::config;
use crate::error::Error;
use crate::session::{FileStorage, SessionStore};

/// Everything a command handler needs
pub struct Context {
    pub gateway: Arc<Gateway>,
    pub auth: AuthService,
}

/// Load config, open the persisted session and wire up the gateway
pub fn build_context() -> Result<Context> {
    let config = config::load_config()?;
    let session = Arc::new(SessionStore::open(Box::new(FileStorage::new(
        &config.session.dir,
    ))));

    // A fresh CLI invocation is "on" the dashboard when a session was
    // restored, so a 401 mid-command still triggers the entry redirect
    let start = if session.current().is_authenticated() {
        DASHBOARD_ROUTE
    } else {
        crate::api::ENTRY_ROUTE
    };
    let navigator = Arc::new(RouteLog::starting_at(start));

    let gateway = Arc::new(Gateway::new(&config, session, navigator));
    let auth = AuthService::new(Arc::clone(&gateway));
    Ok(Context { gateway, auth })
}

fn require_login(ctx: &Context) -> Result<()> {
    if !ctx.gateway.session().current().is_authenticated() {
        return Err(Error::NotLoggedIn.into());
    }
    Ok(())
}

fn require_permission(ctx: &Context, permission: Permission) -> Result<()> {
    require_login(ctx)?;
    if !ctx.gateway.session().has_permission(permission) {
        return Err(Error::Validation(format!(
            "Your role does not have the '{}' permission",
            permission
        ))
        .into());
    }
    Ok(())
}

/// Initialize a crewdesk.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new("crewdesk.toml");

    if config_path.exists() {
        warn("crewdesk.toml already exists");
        return Ok(());
    }

    fs::write(config_path, config::loader::default_config_content())?;

    success("Created crewdesk.toml");
    info("Edit the configuration file and run 'crewdesk login' to get started");

    Ok(())
}

/// Log in and persist the session
pub async fn login(username: Option<String>) -> Result<()> {
    let ctx = build_context()?;

    let username = match username {
        Some(username) => username,
        None => dialoguer::Input::<String>::new()
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = dialoguer::Password::new()
        .with_prompt("Password")
        .interact()?;

    let outcome = ctx.auth.login(&username, &password).await;
    match outcome.error_message() {
        None => {
            if let Some(user) = ctx.gateway.session().user() {
                success(&format!("Logged in as {} ({})", user.username, user.role));
            }
            Ok(())
        }
        Some(message) => {
            error(message);
            std::process::exit(1);
        }
    }
}

/// Log out and clear the persisted session
pub async fn logout() -> Result<()> {
    let ctx = build_context()?;
    ctx.auth.logout();
    success("Logged out");
    Ok(())
}

/// Show the currently logged-in user
pub async fn whoami() -> Result<()> {
    let ctx = build_context()?;
    match ctx.gateway.session().user() {
        Some(user) => {
            println!("{} ({})", user.username, user.role);
            if let Some(email) = user.email {
                println!("{}", email);
            }
            Ok(())
        }
        None => {
            info("Not logged in");
            Ok(())
        }
    }
}

/// Request a password reset code
pub async fn forgot_password(email: &str) -> Result<()> {
    let ctx = build_context()?;
    ctx.auth.forgot_password(email).await?;
    success("Reset code sent. Check your email.");
    Ok(())
}

/// Reset a password using an emailed code
pub async fn reset_password(email: &str) -> Result<()> {
    let ctx = build_context()?;

    let code = dialoguer::Input::<String>::new()
        .with_prompt("Reset code")
        .interact_text()?;
    let new_password = dialoguer::Password::new()
        .with_prompt("New password")
        .with_confirmation("Confirm new password", "Passwords do not match")
        .interact()?;

    ctx.auth.reset_password(email, &code, &new_password).await?;
    success("Password reset. Log in with your new password.");
    Ok(())
}

pub async fn attendance(action: AttendanceAction) -> Result<()> {
    let ctx = build_context()?;

    match action {
        AttendanceAction::CheckIn => {
            require_permission(&ctx, Permission::MarkAttendance)?;
            let record = ctx.gateway.attendance().check_in().await?;
            let at = record
                .check_in
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_default();
            success(&format!("Checked in at {}", at));
        }
        AttendanceAction::CheckOut => {
            require_permission(&ctx, Permission::MarkAttendance)?;
            let record = ctx.gateway.attendance().check_out().await?;
            match record.hours_worked() {
                Some(hours) => success(&format!("Checked out ({:.1} hours today)", hours)),
                None => success("Checked out"),
            }
        }
        AttendanceAction::Today => {
            require_login(&ctx)?;
            match ctx.gateway.attendance().today().await? {
                Some(record) => print_attendance_table(&[record]),
                None => info("Not checked in today"),
            }
        }
        AttendanceAction::History { from, to } => {
            require_login(&ctx)?;
            let records = ctx
                .gateway
                .attendance()
                .history(&crate::api::attendance::HistoryQuery { from, to })
                .await?;
            print_attendance_table(&records);
        }
        AttendanceAction::AllToday => {
            require_permission(&ctx, Permission::ViewAllAttendance)?;
            let records = ctx.gateway.attendance().all_today().await?;
            print_attendance_table(&records);
        }
    }
    Ok(())
}

pub async fn employees(action: EmployeeAction) -> Result<()> {
    let ctx = build_context()?;

    match action {
        EmployeeAction::List => {
            require_permission(&ctx, Permission::ManageEmployees)?;
            let employees = ctx.gateway.employees().list().await?;
            print_employee_table(&employees);
        }
        EmployeeAction::Show { id } => {
            require_permission(&ctx, Permission::ManageEmployees)?;
            let employee = ctx.gateway.employees().get(id).await?;
            print_employee_table(&[employee]);
        }
        EmployeeAction::Me => {
            require_login(&ctx)?;
            let me = ctx.gateway.employees().me().await?;
            print_employee_table(&[me]);
        }
    }
    Ok(())
}

pub async fn projects(action: ProjectAction) -> Result<()> {
    let ctx = build_context()?;
    require_login(&ctx)?;

    match action {
        ProjectAction::List => {
            let projects = ctx.gateway.projects().list().await?;
            print_project_table(&projects);
        }
        ProjectAction::Show { id } => {
            let project = ctx.gateway.projects().get(id).await?;
            if let Some(description) = &project.description {
                info(description);
            }
            print_project_table(&[project]);
        }
    }
    Ok(())
}

pub async fn tasks(action: TaskAction) -> Result<()> {
    let ctx = build_context()?;
    require_login(&ctx)?;

    match action {
        TaskAction::List { project, status } => {
            let filter = TaskFilter {
                project_id: project,
                status: status.as_deref().map(str::parse).transpose()?,
            };
            let tasks = ctx.gateway.tasks().list(&filter).await?;
            print_task_table(&tasks);
        }
        TaskAction::Mine => {
            let tasks = ctx.gateway.tasks().my_tasks().await?;
            print_task_table(&tasks);
        }
        TaskAction::SetStatus { id, status } => {
            let status = status.parse()?;
            let task = ctx.gateway.tasks().update_status(id, status).await?;
            success(&format!("Task {} moved to {}", task.id, task.status));
        }
    }
    Ok(())
}

pub async fn blogs(action: BlogAction) -> Result<()> {
    let ctx = build_context()?;
    require_login(&ctx)?;

    match action {
        BlogAction::List { status } => {
            let status = status.as_deref().map(str::parse).transpose()?;
            let blogs = ctx.gateway.blogs().list(status).await?;
            print_blog_table(&blogs);
        }
        BlogAction::SetStatus { id, status } => {
            require_permission(&ctx, Permission::ManageBlogs)?;
            let status = status.parse()?;
            let blog = ctx.gateway.blogs().update_status(id, status).await?;
            success(&format!("'{}' is now {}", blog.title, blog.status));
        }
    }
    Ok(())
}

pub async fn notifications(action: NotificationAction) -> Result<()> {
    let ctx = build_context()?;
    require_login(&ctx)?;

    match action {
        NotificationAction::List => {
            let notifications = ctx.gateway.notifications().list().await?;
            print_notification_table(&notifications);
        }
        NotificationAction::Read { id } => {
            ctx.gateway.notifications().mark_read(id).await?;
            success("Marked as read");
        }
        NotificationAction::ReadAll => {
            ctx.gateway.notifications().mark_all_read().await?;
            success("All notifications marked as read");
        }
    }
    Ok(())
}

/// Stats appropriate to the current role
pub async fn dashboard() -> Result<()> {
    let ctx = build_context()?;
    require_login(&ctx)?;

    if ctx.gateway.session().has_permission(Permission::ManageEmployees) {
        let stats = ctx.gateway.dashboard().stats().await?;
        println!("Employees:       {}", stats.total_employees);
        println!("Active projects: {}", stats.active_projects);
        println!("Pending tasks:   {}", stats.pending_tasks);
        println!("Present today:   {}", stats.present_today);
    } else {
        let stats = ctx.gateway.dashboard().employee_stats().await?;
        println!("Assigned tasks:  {}", stats.assigned_tasks);
        println!("Completed tasks: {}", stats.completed_tasks);
        println!("Days present:    {}", stats.days_present);
    }
    Ok(())
}

pub async fn settings(action: SettingAction) -> Result<()> {
    let ctx = build_context()?;
    require_login(&ctx)?;

    match action {
        SettingAction::Get { key } => {
            let setting = ctx.gateway.settings().get(&key).await?;
            println!("{} = {}", setting.key, setting.value);
        }
        SettingAction::Set { key, value } => {
            // Accept JSON values; anything that doesn't parse is a plain string
            let value = serde_json::from_str(&value)
                .unwrap_or_else(|_| serde_json::Value::String(value));
            let setting = ctx.gateway.settings().update(&key, value).await?;
            success(&format!("{} = {}", setting.key, setting.value));
        }
    }
    Ok(())
}
