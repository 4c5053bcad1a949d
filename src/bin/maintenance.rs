//! Offline maintenance tool: migrations, schema checks, database reset, and
//! the one-off backup import that seeds participants and events from a
//! `;`-separated file.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use cremaet_bot::config::Config;
use cremaet_bot::database::connection::DatabaseManager;
use cremaet_bot::database::models::{Event, Participant};
use std::env;
use std::io;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize basic logging for the tool
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("migrate");

    match command {
        "migrate" | "up" => run_migrations().await,
        "check" => check_database().await,
        "reset" => reset_database().await,
        "import" => {
            let Some(file) = args.get(2) else {
                eprintln!("import requires a file argument");
                print_help();
                std::process::exit(1);
            };
            import_backup(file).await
        }
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

async fn run_migrations() -> Result<()> {
    println!("🔧 Cremaet Bot - Database Maintenance Tool");
    println!("==========================================");

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    println!("📊 Database URL: {}", mask_url(&config.database_url));

    // Ensure data directory exists for SQLite
    if config.database_url.starts_with("sqlite:") {
        let db_path = config
            .database_url
            .strip_prefix("sqlite:")
            .unwrap_or(&config.database_url);
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.exists() {
                println!("📁 Creating directory: {}", parent.display());
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    println!("🚀 Running database migrations...");

    let db_manager = DatabaseManager::new(&config.database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    match db_manager.run_migrations().await {
        Ok(_) => {
            println!("✅ Migrations completed successfully!");
        }
        Err(e) => {
            eprintln!("❌ Migration failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn check_database() -> Result<()> {
    println!("🔍 Checking database connection and schema...");

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    println!("📊 Database URL: {}", mask_url(&config.database_url));

    let db_manager = DatabaseManager::new(&config.database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    match check_tables(&db_manager).await {
        Ok(tables) => {
            println!("✅ Database connection successful!");
            println!("📋 Found tables:");
            for table in tables {
                println!("  • {table}");
            }
        }
        Err(e) => {
            println!("⚠️  Database check failed: {e}");
            println!("💡 Try running 'maintenance migrate' to create the schema");
        }
    }

    Ok(())
}

async fn reset_database() -> Result<()> {
    println!("⚠️  WARNING: This will delete ALL data in the database!");
    println!("🤔 Are you sure you want to continue? (yes/no)");

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    if input.trim().to_lowercase() != "yes" {
        println!("❌ Reset cancelled.");
        return Ok(());
    }

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // For SQLite, we can just delete the file
    if config.database_url.starts_with("sqlite:") {
        let db_path = config
            .database_url
            .strip_prefix("sqlite:")
            .unwrap_or(&config.database_url);
        if Path::new(db_path).exists() {
            std::fs::remove_file(db_path)?;
            println!("🗑️  Deleted database file: {db_path}");
        }
    } else {
        return Err(anyhow!("Reset is only supported for SQLite databases"));
    }

    println!("🔄 Recreating database schema...");
    run_migrations().await?;

    println!("✅ Database reset completed!");

    Ok(())
}

/// Seeds participants and events from a `;`-separated backup: one
/// `date;display_name` row per line, oldest first, empty name for a holiday
/// week. Participants are created the first time their name appears, with
/// that row's date as their join date.
async fn import_backup(file: &str) -> Result<()> {
    println!("📥 Importing backup from {file}...");

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let content = std::fs::read_to_string(file)
        .map_err(|e| anyhow!("Failed to read {}: {}", file, e))?;

    let db_manager = DatabaseManager::new(&config.database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;
    db_manager.run_migrations().await?;

    let mut imported = 0usize;
    let mut skipped = 0usize;

    for (lineno, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (date, name) = match parse_backup_line(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("⚠️  line {}: {}", lineno + 1, e);
                skipped += 1;
                continue;
            }
        };

        let result = match &name {
            Some(name) => {
                let participant =
                    match Participant::find_by_display_name(&db_manager.pool, name).await? {
                        Some(participant) => participant,
                        None => Participant::create(&db_manager.pool, name, date).await?,
                    };
                Event::create(&db_manager.pool, participant.participant_id, date).await
            }
            None => Event::create_holiday(&db_manager.pool, date).await,
        };

        match result {
            Ok(_) => imported += 1,
            Err(e) if e.is_constraint() => {
                eprintln!(
                    "⚠️  line {}: {} already has an event, skipping",
                    lineno + 1,
                    date
                );
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!("✅ Imported {imported} events ({skipped} skipped)");

    Ok(())
}

fn parse_backup_line(line: &str) -> Result<(NaiveDate, Option<String>)> {
    let mut fields = line.splitn(2, ';');
    let date_str = fields.next().unwrap_or("").trim();
    let name = fields.next().map(str::trim).unwrap_or("");

    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_str, "%d/%m/%Y"))
        .map_err(|_| anyhow!("Unparseable date '{date_str}'"))?;

    let name = if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    };

    Ok((date, name))
}

async fn check_tables(db_manager: &DatabaseManager) -> Result<Vec<String>> {
    let rows = sqlx::query_as::<_, (String,)>(
        "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name",
    )
    .fetch_all(&db_manager.pool)
    .await?;

    Ok(rows.into_iter().map(|(name,)| name).collect())
}

fn mask_url(url: &str) -> String {
    // Don't show full paths in production logs
    if url.starts_with("sqlite:") {
        let path = url.strip_prefix("sqlite:").unwrap_or(url);
        if let Some(filename) = Path::new(path).file_name() {
            format!("sqlite:.../{}", filename.to_string_lossy())
        } else {
            url.to_string()
        }
    } else {
        url.to_string()
    }
}

fn print_help() {
    println!("☕ Cremaet Bot - Database Maintenance Tool");
    println!();
    println!("USAGE:");
    println!("    maintenance [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    migrate, up    Run database migrations (default)");
    println!("    check          Check database connection and schema");
    println!("    reset          Reset database (SQLite only) - DESTRUCTIVE!");
    println!("    import FILE    Seed participants and events from a ';'-separated backup");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    DATABASE_URL   Database connection string (default: sqlite:./data/cremaet.db)");
    println!();
    println!("EXAMPLES:");
    println!("    maintenance                    # Run migrations");
    println!("    maintenance check              # Check database status");
    println!("    maintenance import backup.csv  # Seed from a backup file");
    println!();
}
