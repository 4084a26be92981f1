use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_PLATFORMS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS platforms (
        platform_id TEXT PRIMARY KEY NOT NULL,
        platform TEXT NOT NULL,
        platform_name TEXT NOT NULL,
        standardized_name TEXT NOT NULL
    );
"#;

const CREATE_FORMAT_MAPPINGS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS format_mappings (
        standardized_name TEXT PRIMARY KEY NOT NULL,
        content_box TEXT NOT NULL,
        marke TEXT NOT NULL
    );
"#;

/// Opens the sqlite database from config and bootstraps the schema.
pub async fn initialize_database() -> anyhow::Result<()> {
    let config = crate::shared::config::load_config()?;
    let db_file = crate::shared::config::get_database_path(&config)?;

    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Normalize path separators and ensure proper URL form on Windows
    let normalized = db_file.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    let conn = Database::connect(&db_url).await?;

    for ddl in [CREATE_PLATFORMS_SQL, CREATE_FORMAT_MAPPINGS_SQL] {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database already initialized"))?;
    tracing::info!("Database ready at {}", db_file.display());
    Ok(())
}

/// Connection handle. Valid only after `initialize_database`.
pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN.get().expect("database not initialized")
}
