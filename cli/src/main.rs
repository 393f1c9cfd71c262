mod error;
mod output;
mod store;
mod transport;
mod upload;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use todo_api::{AuthClient, Todo};
use tracing::Level;

use crate::error::CliError;
use crate::store::FileSessionStore;
use crate::transport::ReqwestTransport;

type Client = AuthClient<ReqwestTransport, FileSessionStore>;

#[derive(Parser, Debug)]
#[command(name = "todo-cli", about = "Todo list REST client")]
struct Cli {
    #[arg(long, env = "TODO_BASE_URL", default_value = "http://127.0.0.1:8000/api")]
    base_url: String,

    #[arg(long, env = "TODO_SESSION_FILE", default_value = ".todo-session.json")]
    session_file: PathBuf,

    /// Log requests, refreshes and replays to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a token pair and store the session.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "TODO_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Print the logged-in username.
    Whoami,
    List {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    Add {
        title: String,
    },
    /// Flip a todo between complete and not complete.
    Toggle {
        id: i64,
    },
    Delete {
        id: i64,
    },
    /// Print the profile image URL.
    Profile,
    UploadPhoto {
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let transport = ReqwestTransport::new(&cli.base_url)?;
    let store = FileSessionStore::open(&cli.session_file)?;
    tracing::debug!(path = %store.path().display(), "session store opened");
    let client = AuthClient::new(transport, store);

    match cli.command {
        Command::Login { username, password } => run_login(&client, &username, &password).await,
        Command::Logout => {
            client.logout();
            println!("logged out");
            Ok(())
        }
        Command::Whoami => {
            require_session(&client)?;
            println!("{}", client.username().unwrap_or_default());
            Ok(())
        }
        Command::List { json } => {
            require_session(&client)?;
            let todos = client.list_todos().await?;
            print_todos(&todos, json)
        }
        Command::Add { title } => {
            require_session(&client)?;
            let todos = client.add_and_reload(&title).await?;
            print_todos(&todos, false)
        }
        Command::Toggle { id } => run_toggle(&client, id).await,
        Command::Delete { id } => {
            require_session(&client)?;
            let todos = client.delete_and_reload(id).await?;
            print_todos(&todos, false)
        }
        Command::Profile => run_profile(&client).await,
        Command::UploadPhoto { path } => run_upload(&client, path).await,
    }
}

fn require_session(client: &Client) -> Result<(), CliError> {
    if client.is_authenticated() { Ok(()) } else { Err(CliError::NotLoggedIn) }
}

async fn run_login(client: &Client, username: &str, password: &str) -> Result<(), CliError> {
    client.login(username, password).await?;
    println!("logged in as {username}");
    Ok(())
}

async fn run_toggle(client: &Client, id: i64) -> Result<(), CliError> {
    require_session(client)?;
    let current = client
        .list_todos()
        .await?
        .into_iter()
        .find(|todo| todo.id == id)
        .ok_or(todo_api::ApiError::TodoNotFound(id))?;
    let todos = client.toggle_and_reload(id, current.complete).await?;
    print_todos(&todos, false)
}

async fn run_profile(client: &Client) -> Result<(), CliError> {
    require_session(client)?;
    let profile = client.fetch_profile().await?;
    match profile.profile_image {
        Some(url) => println!("{}", todo_api::resolve_image_url(client.transport().origin(), &url)),
        None => println!("no profile image"),
    }
    Ok(())
}

async fn run_upload(client: &Client, path: PathBuf) -> Result<(), CliError> {
    require_session(client)?;
    let upload = upload::profile_upload(&path)?;
    let profile = client.upload_profile_image(upload).await?;
    match profile.profile_image {
        Some(url) => println!("uploaded: {}", todo_api::resolve_image_url(client.transport().origin(), &url)),
        None => println!("uploaded"),
    }
    Ok(())
}

fn print_todos(todos: &[Todo], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(todos)?);
    } else {
        println!("{}", output::render_todos(todos));
    }
    Ok(())
}
