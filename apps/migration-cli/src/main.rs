use std::path::PathBuf;

use bingo::config::DbSettings;
use bingo::connect_db;
use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Db {
    /// Same selection as the server: DATABASE_URL, else BINGO_SQLITE_PATH
    Env,
    /// SQLite file at --path (or the default development file)
    SqliteFile,
    /// Throwaway in-memory database; only useful to check that migrations apply
    SqliteMemory,
}

#[derive(Parser)]
#[command(name = "migration")]
#[command(about = "Bingo database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Database to run against
    #[arg(short, long, value_enum, default_value = "env")]
    db: Db,

    /// SQLite file used with `--db sqlite-file`
    #[arg(long)]
    path: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let settings = match args.db {
        Db::Env => match DbSettings::from_env() {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Invalid database configuration: {e}");
                std::process::exit(2);
            }
        },
        Db::SqliteFile => DbSettings::sqlite_file(
            args.path
                .unwrap_or_else(|| PathBuf::from(bingo::config::db::DEFAULT_SQLITE_PATH)),
        ),
        Db::SqliteMemory => DbSettings::sqlite_memory(),
    };

    tracing::info!(db_kind = ?settings.kind, url = %settings.redacted_url(), "connecting");

    let conn = match connect_db(&settings).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Connection failed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, args.command.into()).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
