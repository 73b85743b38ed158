//! Postboard - browse and edit posts from a JSONPlaceholder-style API
//!
//! # Usage
//!
//! ```bash
//! # Run the GUI application
//! postboard
//!
//! # CLI commands
//! postboard list                                 # First page of posts
//! postboard list --search qui --user 2 --sort title --desc --limit 10
//! postboard show 7                               # One post with its author
//! postboard create --user 1 --title "Hello" --body "A body of text"
//! postboard update 7 --title "New title"         # Unspecified fields are kept
//! postboard delete 7
//! postboard users
//! postboard --base-url http://localhost:3000 list
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use iced::Size;
use postboard::config::{self, AppConfig};
use postboard::core::api::{ApiClient, INITIAL_LOAD_LIMIT};
use postboard::core::pagination::DEFAULT_PAGE_SIZE;
use postboard::core::post::{NewPost, Post};
use postboard::core::query::{self, FilterParams, SortColumn, SortSpec, ViewQuery};
use postboard::utils::{single_line, truncate_string};
use postboard::{Error, app, utils, validators};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "postboard", version)]
#[command(about = "Browse and edit posts from a JSONPlaceholder-style API", long_about = None)]
struct Cli {
    /// API base URL (overrides POSTBOARD_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Id,
    User,
    Title,
    Body,
}

impl From<SortArg> for SortColumn {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Id => Self::Id,
            SortArg::User => Self::UserId,
            SortArg::Title => Self::Title,
            SortArg::Body => Self::Body,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List posts through the filter, sort and paginate pipeline
    List {
        /// Case-insensitive match on title or body
        #[arg(short, long)]
        search: Option<String>,
        /// Only posts by this user id
        #[arg(short, long)]
        user: Option<i64>,
        /// Column to sort by
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Posts per page
        #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: usize,
    },
    /// Show a single post
    Show { id: i64 },
    /// Create a post
    Create {
        #[arg(long)]
        user: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
    /// Replace a post; fields that are not given keep their current value
    Update {
        id: i64,
        #[arg(long)]
        user: Option<i64>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
    /// Delete a post
    Delete { id: i64 },
    /// List users
    Users,
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn init_cli_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .init();
}

/// GUI logs go to `postboard.log` in the state directory
fn init_gui_logging() {
    let log_file = utils::get_state_dir()
        .map(|dir| dir.join("postboard.log"))
        .and_then(|path| std::fs::File::create(path).ok());

    match log_file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(env_filter("info"))
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(env_filter("info"))
            .init(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.command.is_some() {
        init_cli_logging();
    } else {
        init_gui_logging();
    }

    if let Err(e) = utils::ensure_dirs() {
        tracing::warn!("Could not create application directories: {}", e);
    }

    let config = config::load_config_blocking();
    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.effective_base_url());

    let api = match ApiClient::new(&base_url) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Error: failed to initialise HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(command) = cli.command {
        // Create Tokio runtime only for CLI commands
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("Error: failed to start Tokio runtime: {e}");
                return ExitCode::FAILURE;
            }
        };
        match runtime.block_on(handle_cli(command, &api)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::debug!("{e:?}");
                let translation = e.translate();
                eprintln!("Error: {}", translation.user_message);
                for suggestion in translation.suggestions {
                    eprintln!("  hint: {suggestion}");
                }
                ExitCode::FAILURE
            }
        }
    } else {
        // GUI runs in normal sync context (Iced has its own async runtime)
        launch_gui(config, api)
    }
}

fn validate(payload: &NewPost) -> postboard::Result<()> {
    let checks = [
        ("title", validators::validate_title(&payload.title)),
        ("body", validators::validate_body(&payload.body)),
        ("user", validators::validate_user_id(payload.user_id)),
    ];
    for (field, check) in checks {
        if let Err(message) = check {
            return Err(Error::Validation {
                field: field.to_string(),
                message,
            });
        }
    }
    Ok(())
}

fn sanitized(user_id: i64, title: &str, body: &str) -> NewPost {
    NewPost {
        user_id,
        title: validators::sanitize_text(title.trim()),
        body: validators::sanitize_text(body.trim()),
    }
}

fn print_post(post: &Post, author: Option<&str>) {
    println!("Post #{}", post.id);
    match author {
        Some(name) => println!("  User:  {} ({})", post.user_id, name),
        None => println!("  User:  {}", post.user_id),
    }
    println!("  Title: {}", post.title);
    println!("  Body:");
    for line in post.body.lines() {
        println!("    {line}");
    }
}

fn print_table(posts: &[Post]) {
    println!("{:>5}  {:>4}  {:<40}  {}", "ID", "User", "Title", "Body");
    for post in posts {
        println!(
            "{:>5}  {:>4}  {:<40}  {}",
            post.id,
            post.user_id,
            truncate_string(&single_line(&post.title), 40),
            truncate_string(&single_line(&post.body), 60),
        );
    }
}

async fn handle_cli(command: Commands, api: &ApiClient) -> postboard::Result<()> {
    match command {
        Commands::List {
            search,
            user,
            sort,
            desc,
            page,
            limit,
        } => {
            let posts = api.list_posts(Some(INITIAL_LOAD_LIMIT)).await?;
            let query = ViewQuery {
                filters: FilterParams::new(search.as_deref(), user),
                sort: sort.map(|column| {
                    if desc {
                        SortSpec::desc(column.into())
                    } else {
                        SortSpec::asc(column.into())
                    }
                }),
                page: page.max(1),
                limit: limit.max(1),
            };
            let result = query::run(&posts, &query);
            if result.posts.is_empty() {
                println!("No posts found.");
            } else {
                print_table(&result.posts);
            }
            let meta = result.pagination;
            println!(
                "\nPage {}/{} (total {})",
                meta.page,
                meta.total_pages.max(1),
                meta.total
            );
        }
        Commands::Show { id } => {
            let post = api.get_post(id).await?;
            let author = match api.get_user(post.user_id).await {
                Ok(user) => Some(user.name),
                Err(e) => {
                    tracing::warn!("Could not load author {}: {}", post.user_id, e);
                    None
                }
            };
            print_post(&post, author.as_deref());
        }
        Commands::Create { user, title, body } => {
            let payload = sanitized(user, &title, &body);
            validate(&payload)?;
            let post = api.create_post(&payload).await?;
            println!("Created post #{}", post.id);
            print_post(&post, None);
        }
        Commands::Update {
            id,
            user,
            title,
            body,
        } => {
            let current = api.get_post(id).await?;
            let payload = sanitized(
                user.unwrap_or(current.user_id),
                title.as_deref().unwrap_or(&current.title),
                body.as_deref().unwrap_or(&current.body),
            );
            validate(&payload)?;
            let post = api.update_post(id, &payload).await?;
            println!("Updated post #{}", post.id);
            print_post(&post, None);
        }
        Commands::Delete { id } => {
            api.delete_post(id).await?;
            println!("Deleted post #{id}");
        }
        Commands::Users => {
            let users = api.list_users().await?;
            println!("{:>4}  {:<28}  {:<18}  {}", "ID", "Name", "Username", "Email");
            for user in users {
                println!(
                    "{:>4}  {:<28}  {:<18}  {}",
                    user.id,
                    user.name,
                    user.username,
                    user.email
                );
            }
        }
    }
    Ok(())
}

fn launch_gui(config: AppConfig, api: ApiClient) -> ExitCode {
    tracing::info!("Starting GUI against {}", api.base_url());

    let result = iced::application(
        move || app::State::new(config.clone(), api.clone()),
        app::State::update,
        app::State::view,
    )
    .subscription(app::State::subscription)
    .window(iced::window::Settings {
        size: Size::new(1100.0, 720.0),
        ..Default::default()
    })
    .title("Postboard")
    .theme(|state: &app::State| state.iced_theme())
    .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("GUI exited with error: {}", e);
            ExitCode::FAILURE
        }
    }
}
