//! One-shot database provisioning tool.
//!
//! Reads PostgreSQL connection parameters from a JSON config file, creates the
//! database via `psql` when it does not exist, then applies the schema and seed
//! SQL scripts. Schema failure is fatal; seed failure is only a warning. Shares
//! no runtime state with the route service.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::env;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output};

const DEFAULT_CONFIG_PATH: &str = "config/db_config.json";
const SCHEMA_SCRIPT: &str = "db/schema.sql";
const SEED_SCRIPT: &str = "db/seed.sql";

#[derive(Debug, Deserialize)]
struct DbConfig {
    #[serde(rename = "PGHOST")]
    host: String,
    #[serde(rename = "PGPORT")]
    port: u16,
    #[serde(rename = "PGUSER")]
    user: String,
    #[serde(rename = "PGPASSWORD")]
    password: String,
    #[serde(rename = "PGDATABASE")]
    database: String,
    #[serde(rename = "SCHEMA", default)]
    schema: Option<String>,
}

impl DbConfig {
    fn from_file(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Configuration file '{path}' not found"))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Configuration file '{path}' is not valid JSON"))
    }

    fn log_startup(&self) {
        tracing::info!("Database configuration:");
        tracing::info!("  Host: {}", self.host);
        tracing::info!("  Port: {}", self.port);
        tracing::info!("  Database: {}", self.database);
        tracing::info!("  User: {}", self.user);
        tracing::info!("  Schema: {}", self.schema.as_deref().unwrap_or("public"));
    }

    /// Base `psql` invocation with connection flags and PGPASSWORD set
    fn psql(&self) -> Command {
        let mut cmd = Command::new("psql");
        cmd.arg("-h")
            .arg(&self.host)
            .arg("-p")
            .arg(self.port.to_string())
            .arg("-U")
            .arg(&self.user)
            .env("PGPASSWORD", &self.password);
        cmd
    }
}

fn run_psql(mut cmd: Command) -> Result<Output> {
    let output = cmd.output().map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            anyhow::anyhow!("psql not found; install PostgreSQL client tools")
        } else {
            anyhow::Error::new(err).context("Failed to invoke psql")
        }
    })?;
    Ok(output)
}

/// Create the database when it does not already exist
fn ensure_database(config: &DbConfig) -> Result<()> {
    let mut check = config.psql();
    check.arg("-tc").arg(format!(
        "SELECT 1 FROM pg_database WHERE datname = '{}';",
        config.database
    ));

    let output = run_psql(check)?;
    if !output.status.success() {
        bail!(
            "Could not query database catalog: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    if !String::from_utf8_lossy(&output.stdout).trim().is_empty() {
        tracing::info!("Database '{}' already exists", config.database);
        return Ok(());
    }

    tracing::info!("Creating database '{}'...", config.database);
    let mut create = config.psql();
    create
        .arg("-c")
        .arg(format!("CREATE DATABASE {};", config.database));

    let output = run_psql(create)?;
    if !output.status.success() {
        bail!(
            "Error creating database: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    tracing::info!("Database '{}' created", config.database);
    Ok(())
}

/// Apply one SQL script against the configured database with ON_ERROR_STOP
fn apply_script(config: &DbConfig, script_path: &str) -> Result<()> {
    if !Path::new(script_path).exists() {
        bail!("SQL script '{script_path}' not found");
    }

    tracing::info!("Executing: {}", script_path);

    let mut cmd = config.psql();
    cmd.arg("-d")
        .arg(&config.database)
        .arg("-f")
        .arg(script_path)
        .arg("-v")
        .arg("ON_ERROR_STOP=1");

    let output = run_psql(cmd)?;
    if !output.status.success() {
        bail!(
            "Error executing '{}': {}",
            script_path,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        tracing::debug!("{}", stdout.trim());
    }
    tracing::info!("{} completed successfully", script_path);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = DbConfig::from_file(&config_path)?;
    config.log_startup();

    ensure_database(&config).context("Could not create/access database")?;

    apply_script(&config, SCHEMA_SCRIPT).context("Schema creation failed")?;

    if let Err(err) = apply_script(&config, SEED_SCRIPT) {
        tracing::warn!(
            "Seed data loading had issues (may be OK if data already exists): {:#}",
            err
        );
    }

    tracing::info!("Database initialization completed successfully");
    tracing::info!(
        "Connect with: psql -h {} -U {} -d {}",
        config.host,
        config.user,
        config.database
    );
    Ok(())
}
