//! Command-line front end for the timeline wiki API.
//!
//! Each invocation restores the session from the storage file, runs one
//! command with the session's client, and exits non-zero on failure.


mod storage;
mod transport;

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use timeline::config::{API_BASE_URL_ENV, DEFAULT_API_BASE_URL};
use timeline::types::{EventUpdate, NewEvent, NewRealm, RealmUpdate};
use timeline::{
    AUTH_TOKEN_KEY, ApiConfig, ApiError, Credentials, EventKind, Route, RouteTable, SessionError, SessionStore, TokenStorage,
};
use tracing_subscriber::EnvFilter;

use crate::storage::FileStorage;
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("no config directory found; pass --storage or set TIMELINE_STORAGE")]
    MissingStoragePath,
    #[error("signed in, but the token could not be saved to {}; the next run will be signed out", .0.display())]
    NotPersisted(PathBuf),
    #[error("no route matches {0:?}")]
    NoRoute(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "timeline-cli", about = "Timeline wiki API CLI")]
struct Cli {
    #[arg(long, env = API_BASE_URL_ENV, default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    /// Token storage file [default: <config dir>/timeline/storage.json]
    #[arg(long, env = "TIMELINE_STORAGE")]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Session(SessionCommand),
    /// Resolve an application path against the route table.
    Route { path: String },
}

/// Commands that run against the restored session.
#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Sign in and persist the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "TIMELINE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the persisted session token.
    Logout,
    /// Show the restored session.
    Status,
    Realm(RealmCommand),
    Event(EventCommand),
}

#[derive(Args, Debug)]
struct RealmCommand {
    #[command(subcommand)]
    command: RealmSubcommand,
}

#[derive(Subcommand, Debug)]
enum RealmSubcommand {
    List,
    Show {
        uri: String,
    },
    Create {
        #[arg(long)]
        uri: String,
        #[arg(long)]
        name: String,
    },
    Update {
        uri: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        new_uri: Option<String>,
    },
    Delete {
        uri: String,
    },
}

#[derive(Args, Debug)]
struct EventCommand {
    #[command(subcommand)]
    command: EventSubcommand,
}

#[derive(Subcommand, Debug)]
enum EventSubcommand {
    List {
        realm: String,
        #[arg(long = "type", value_parser = EventKind::from_str)]
        kind: Option<EventKind>,
    },
    Headers {
        realm: String,
    },
    Show {
        id: String,
    },
    Create {
        realm: String,
        #[arg(long = "type", value_parser = EventKind::from_str, default_value = "text")]
        kind: EventKind,
        #[arg(long)]
        value: String,
        #[arg(long)]
        order: Option<f64>,
    },
    Update {
        id: String,
        #[arg(long = "type", value_parser = EventKind::from_str)]
        kind: Option<EventKind>,
        #[arg(long)]
        value: Option<String>,
        #[arg(long)]
        order: Option<f64>,
    },
    Delete {
        id: String,
    },
}

struct CliContext {
    store: SessionStore<FileStorage>,
    transport: ReqwestTransport,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Route { path } => run_route(&path),
        Command::Session(command) => {
            let mut ctx = open_context(&cli.base_url, cli.storage)?;
            run_session_command(&mut ctx, command).await
        }
    }
}

fn open_context(base_url: &str, storage_path: Option<PathBuf>) -> Result<CliContext, CliError> {
    let storage_path = storage_path.or_else(storage::default_path).ok_or(CliError::MissingStoragePath)?;
    let config = ApiConfig::from_override(Some(base_url));
    let storage = FileStorage::open(storage_path);
    tracing::debug!(path = %storage.path().display(), base_url = %config.base_url, "restoring session");
    Ok(CliContext { store: SessionStore::restore(&config, storage), transport: ReqwestTransport::new() })
}

async fn run_session_command(ctx: &mut CliContext, command: SessionCommand) -> Result<(), CliError> {
    match command {
        SessionCommand::Login { email, password } => run_login(ctx, Credentials::new(email, password)).await,
        SessionCommand::Logout => {
            ctx.store.logout();
            println!("logged out");
            Ok(())
        }
        SessionCommand::Status => print_json(&session_summary(&ctx.store)),
        SessionCommand::Realm(realm) => run_realm(ctx, realm).await,
        SessionCommand::Event(event) => run_event(ctx, event).await,
    }
}

async fn run_login(ctx: &mut CliContext, credentials: Credentials) -> Result<(), CliError> {
    ctx.store.login(&ctx.transport, &credentials).await?;
    ensure_persisted(&ctx.store)?;
    print_json(&session_summary(&ctx.store))
}

/// The storage file is the only thing carrying a login to the next run.
fn ensure_persisted(store: &SessionStore<FileStorage>) -> Result<(), CliError> {
    let storage = store.storage();
    if storage.get_item(AUTH_TOKEN_KEY).as_deref() == Some(store.token()) {
        return Ok(());
    }
    Err(CliError::NotPersisted(storage.path().to_path_buf()))
}

async fn run_realm(ctx: &CliContext, realm: RealmCommand) -> Result<(), CliError> {
    let transport = &ctx.transport;
    let client = ctx.store.client();
    match realm.command {
        RealmSubcommand::List => print_json(&timeline::api::list_realms(transport, client).await?),
        RealmSubcommand::Show { uri } => print_json(&timeline::api::get_realm(transport, client, &uri).await?),
        RealmSubcommand::Create { uri, name } => {
            let realm = NewRealm { uri, name };
            print_json(&timeline::api::create_realm(transport, client, &realm).await?)
        }
        RealmSubcommand::Update { uri, name, new_uri } => {
            let update = RealmUpdate { name, uri: new_uri };
            print_json(&timeline::api::update_realm(transport, client, &uri, &update).await?)
        }
        RealmSubcommand::Delete { uri } => {
            timeline::api::delete_realm(transport, client, &uri).await?;
            println!("deleted realm {uri}");
            Ok(())
        }
    }
}

async fn run_event(ctx: &CliContext, event: EventCommand) -> Result<(), CliError> {
    let transport = &ctx.transport;
    let client = ctx.store.client();
    match event.command {
        EventSubcommand::List { realm, kind } => {
            print_json(&timeline::api::list_events(transport, client, &realm, kind).await?)
        }
        EventSubcommand::Headers { realm } => {
            print_json(&timeline::api::list_headers(transport, client, &realm).await?)
        }
        EventSubcommand::Show { id } => print_json(&timeline::api::get_event(transport, client, &id).await?),
        EventSubcommand::Create { realm, kind, value, order } => {
            let event = NewEvent { kind, value, order };
            print_json(&timeline::api::create_event(transport, client, &realm, &event).await?)
        }
        EventSubcommand::Update { id, kind, value, order } => {
            let update = EventUpdate { kind, value, order };
            print_json(&timeline::api::update_event(transport, client, &id, &update).await?)
        }
        EventSubcommand::Delete { id } => {
            timeline::api::delete_event(transport, client, &id).await?;
            println!("deleted event {id}");
            Ok(())
        }
    }
}

fn run_route(path: &str) -> Result<(), CliError> {
    let route = RouteTable::new().resolve(path).ok_or_else(|| CliError::NoRoute(path.to_owned()))?;
    print_json(&route_summary(&route))
}

fn session_summary<S: TokenStorage>(store: &SessionStore<S>) -> serde_json::Value {
    json!({
        "status": store.status().as_str(),
        "base_url": store.client().base_url(),
        "user": store.user(),
        "admin": store.is_admin(),
    })
}

fn route_summary(route: &Route) -> serde_json::Value {
    match route {
        Route::Main => json!({ "route": route.name(), "href": route.href() }),
        Route::Realm { uri } => json!({ "route": route.name(), "href": route.href(), "uri": uri }),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
