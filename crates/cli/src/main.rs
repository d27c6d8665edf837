//! Taskdesk console - terminal front-end for the admin API.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (session persists under $TASKDESK_STATE_DIR, default ~/.taskdesk)
//! taskdesk login -e admin@example.com -p secret
//!
//! # Dashboard summary
//! taskdesk dashboard
//!
//! # Resource tables
//! taskdesk users list
//! taskdesk users update <id> --full-name "New Name"
//! taskdesk todos --user <id>
//!
//! # Sign out
//! taskdesk logout
//! ```
//!
//! # Environment Variables
//!
//! - `TASKDESK_API_URL` - Base URL of the admin API (default: `http://localhost:3003`)
//! - `TASKDESK_STATE_DIR` - Session state directory (default: `$HOME/.taskdesk`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use taskdesk_client::ApiError;

mod commands;

#[derive(Parser)]
#[command(name = "taskdesk")]
#[command(author, version, about = "Taskdesk admin console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password
    Login {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password
        #[arg(short, long)]
        password: String,
    },
    /// Register a new admin account (signs you in on success)
    Signup {
        /// First name
        #[arg(long)]
        firstname: String,

        /// Last name
        #[arg(long)]
        lastname: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Display username
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Role (`ADMIN` or `SUPER_ADMIN`)
        #[arg(short, long, default_value = "ADMIN")]
        role: String,
    },
    /// Sign out and clear the persisted session
    Logout,
    /// Show the signed-in identity
    Whoami,
    /// Show the dashboard summary
    Dashboard,
    /// Manage users
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
    /// Manage admin accounts
    Admins {
        #[command(subcommand)]
        action: AdminsAction,
    },
    /// List todos, optionally for a single user
    Todos {
        /// Only the todos belonging to this user
        #[arg(long)]
        user: Option<String>,
    },
}

#[derive(Subcommand)]
enum UsersAction {
    /// List all users
    List,
    /// Show one user by id
    Get { id: String },
    /// Show the user count
    Count,
    /// Show the most recently created users
    Recent,
    /// Update a user's name and/or email
    Update {
        id: String,

        /// New display name
        #[arg(long)]
        full_name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a user
    Delete { id: String },
}

#[derive(Subcommand)]
enum AdminsAction {
    /// List all admin accounts
    List,
    /// Show the admin count
    Count,
    /// Update an admin account
    Update {
        id: String,

        /// New first name
        #[arg(long)]
        firstname: Option<String>,

        /// New last name
        #[arg(long)]
        lastname: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New role (`ADMIN` or `SUPER_ADMIN`)
        #[arg(long)]
        role: Option<String>,
    },
    /// Delete an admin account
    Delete { id: String },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        // The two failure channels get distinct treatment: a body-level
        // rejection carries a message meant for the operator, a transport
        // failure gets a generic retryable message.
        match e.downcast_ref::<ApiError>() {
            Some(api_err) if api_err.is_rejection() => {
                tracing::error!(
                    "{}",
                    api_err.rejection_message().unwrap_or("Request failed")
                );
            }
            Some(api_err) => {
                tracing::error!("Request failed: {api_err}. Please try again.");
            }
            None => {
                tracing::error!("Command failed: {e}");
            }
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&email, password).await?,
        Commands::Signup {
            firstname,
            lastname,
            email,
            username,
            password,
            role,
        } => {
            commands::auth::signup(firstname, lastname, email, username, password, role).await?;
        }
        Commands::Logout => commands::auth::logout().await?,
        Commands::Whoami => commands::auth::whoami().await?,
        Commands::Dashboard => commands::dashboard::show().await?,
        Commands::Users { action } => match action {
            UsersAction::List => commands::users::list().await?,
            UsersAction::Get { id } => commands::users::get(&id).await?,
            UsersAction::Count => commands::users::count().await?,
            UsersAction::Recent => commands::users::recent().await?,
            UsersAction::Update {
                id,
                full_name,
                email,
            } => commands::users::update(&id, full_name, email).await?,
            UsersAction::Delete { id } => commands::users::delete(&id).await?,
        },
        Commands::Admins { action } => match action {
            AdminsAction::List => commands::admins::list().await?,
            AdminsAction::Count => commands::admins::count().await?,
            AdminsAction::Update {
                id,
                firstname,
                lastname,
                email,
                role,
            } => commands::admins::update(&id, firstname, lastname, email, role).await?,
            AdminsAction::Delete { id } => commands::admins::delete(&id).await?,
        },
        Commands::Todos { user } => commands::todos::list(user.as_deref()).await?,
    }
    Ok(())
}
