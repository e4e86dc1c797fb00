//! Load a course catalog once and report what was loaded.
//!
//! Acts as the startup check for deployments: the catalog is read, validated
//! against the course schema, and summarized on stdout. `--emit` prints the
//! canonical JSON instead, which rewrites legacy `name` keys as `courseName`.

use anyhow::{Context, Result, anyhow, bail};
use course_catalog::{
    CATALOG_PATH_ENV, CatalogConfig, CatalogError, CatalogErrorKind, CourseCatalog,
    SCHEMA_PATH_ENV, resolve_catalog_path, resolve_schema_path,
};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "COURSE_CATALOG_LOG";

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(exit_code(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;
    let config = cli.config();
    let catalog = config
        .load()
        .with_context(|| format!("loading {}", config.catalog_path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.emit {
        let json = catalog
            .to_json_pretty()
            .context("serializing course catalog")?;
        writeln!(out, "{json}")?;
    } else {
        writeln!(out, "{}", summary(&config, &catalog))?;
    }
    Ok(())
}

fn summary(config: &CatalogConfig, catalog: &CourseCatalog) -> String {
    let path = catalog.source().unwrap_or(config.catalog_path.as_path());
    format!(
        "{}: {} courses, {} topics",
        path.display(),
        catalog.len(),
        catalog.topic_count()
    )
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<CatalogError>().map(CatalogError::kind) {
        Some(CatalogErrorKind::ResourceNotFound) => 2,
        Some(CatalogErrorKind::MalformedData) => 3,
        Some(CatalogErrorKind::Schema) | None => 1,
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

struct Cli {
    catalog_path: Option<PathBuf>,
    schema_path: Option<PathBuf>,
    emit: bool,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args_os();
        let _program = args.next();

        let mut catalog_path = None;
        let mut schema_path = None;
        let mut emit = false;

        while let Some(arg) = args.next() {
            let arg_str = arg
                .to_str()
                .ok_or_else(|| anyhow!("invalid UTF-8 in argument"))?;
            match arg_str {
                "--catalog" => {
                    let value = next_value("--catalog", &mut args)?;
                    catalog_path = Some(PathBuf::from(value));
                }
                "--schema" => {
                    let value = next_value("--schema", &mut args)?;
                    schema_path = Some(PathBuf::from(value));
                }
                "--emit" => emit = true,
                "--help" | "-h" => usage(0),
                other => {
                    bail!("unknown argument: {other}");
                }
            }
        }

        Ok(Self {
            catalog_path,
            schema_path,
            emit,
        })
    }

    fn config(&self) -> CatalogConfig {
        let catalog_path = resolve_catalog_path(
            self.catalog_path.as_deref(),
            env::var_os(CATALOG_PATH_ENV),
        );
        CatalogConfig {
            catalog_path,
            schema_path: resolve_schema_path(
                self.schema_path.as_deref(),
                env::var_os(SCHEMA_PATH_ENV),
            ),
        }
    }
}

fn next_value(flag: &str, args: &mut env::ArgsOs) -> Result<String> {
    let value = args
        .next()
        .ok_or_else(|| anyhow!("{flag} requires a value"))?;
    let value = value
        .into_string()
        .map_err(|_| anyhow!("{flag} value must be valid UTF-8"))?;
    if value.trim().is_empty() {
        bail!("{flag} value must not be empty");
    }
    Ok(value)
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: catalog-check [--catalog PATH] [--schema PATH] [--emit]\n\nOptions:\n  --catalog PATH   Catalog to load (default: $COURSE_CATALOG_PATH, then the build-time default).\n  --schema PATH    Validate against this schema instead of the bundled one ($COURSE_CATALOG_SCHEMA).\n  --emit           Print the canonical catalog JSON instead of a summary.\n\nExit codes: 0 ok, 2 catalog missing or unreadable, 3 catalog malformed, 1 other errors.\nLogging: set COURSE_CATALOG_LOG (e.g. debug) to see load events on stderr."
    );
    std::process::exit(code);
}
