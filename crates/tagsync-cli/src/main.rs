//! `tagsync` — register proximity cards against the user registry.
//!
//! Continuously polls the card reader, resolves each UID to a user
//! identity (directory lookup, QR capture, manual entry — in that order,
//! each individually togglable), and submits the pairing to the registry,
//! suppressing repeat submissions in-process. Runs until Ctrl-C or an
//! operator abort at any prompt.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;
use tagsync_client::{
    AnyDirectory, DirectoryClient, DirectoryConfig, RegistryClient,
};
use tagsync_core::constants::{
    DEFAULT_AUDIT_LOG_PATH, DEFAULT_CAMERA_LOCATOR, DEFAULT_READER_LOCATOR, TOKEN_ENV_VAR,
};
use tagsync_engine::{AuditLog, SyncEngine};
use tagsync_hardware::{
    HardwarePoller,
    devices::{AnyCamera, AnyNfcReader},
};
use tagsync_resolve::{
    AnyResolver, DirectoryResolver, ManualResolver, QrResolver, ResolverChain, TermConsole,
    Utf8Decoder,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Register proximity cards, fast and cheap.
#[derive(Debug, Parser)]
#[command(name = "tagsync", version)]
struct Cli {
    /// Disable the remote directory resolver
    #[arg(short = 'E', long)]
    no_directory: bool,

    /// Disable reading identities from QR codes
    #[arg(short = 'Q', long)]
    no_qr: bool,

    /// Never prompt the operator for identities
    #[arg(short = 'M', long)]
    no_manual: bool,

    /// Disable submission deduplication
    #[arg(short = 'D', long)]
    no_dedup: bool,

    /// Camera locator for QR capture
    #[arg(short = 'c', long, value_name = "LOCATOR", default_value = DEFAULT_CAMERA_LOCATOR)]
    camera: String,

    /// Card reader locator
    #[arg(short = 'r', long, value_name = "LOCATOR", default_value = DEFAULT_READER_LOCATOR)]
    reader: String,

    /// Audit log path (one `login,card_uid` line per submission attempt)
    #[arg(short = 'o', long, value_name = "PATH", default_value = DEFAULT_AUDIT_LOG_PATH)]
    audit_log: PathBuf,

    /// Card registry base URL
    #[arg(long, value_name = "URL", default_value = "https://registry.example.org")]
    registry_url: String,

    /// Directory service base URL
    #[arg(long, value_name = "URL", default_value = "https://directory.example.org")]
    directory_url: String,

    /// Hardware poll timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 2)]
    timeout: u64,
}

/// Authenticate against the registry: stored token when available,
/// interactive credential exchange otherwise.
async fn acquire_registry(cli: &Cli) -> anyhow::Result<RegistryClient> {
    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
        info!("using registry token from {TOKEN_ENV_VAR}");
        return Ok(RegistryClient::with_token(&cli.registry_url, token));
    }

    println!("{}", "Please log in to the card registry".bold());
    let username: String = dialoguer::Input::new()
        .with_prompt("Username")
        .interact_text()
        .context("username prompt failed")?;
    let password = dialoguer::Password::new()
        .with_prompt("Password")
        .interact()
        .context("password prompt failed")?;

    let client = RegistryClient::login(&cli.registry_url, &username, &password)
        .await
        .context("registry login failed")?;
    println!("{}", "Login successful".green());

    Ok(client)
}

/// Assemble the resolver chain in priority order from the CLI toggles.
fn build_chain(cli: &Cli) -> anyhow::Result<ResolverChain> {
    let mut resolvers = Vec::new();

    if !cli.no_directory {
        let directory = DirectoryClient::new(DirectoryConfig {
            base_url: cli.directory_url.clone(),
        });
        resolvers.push(AnyResolver::Directory(DirectoryResolver::new(
            AnyDirectory::Http(directory),
        )));
    }

    if !cli.no_qr {
        let camera = AnyCamera::open(&cli.camera)
            .with_context(|| format!("cannot open camera '{}'", cli.camera))?;
        resolvers.push(AnyResolver::QrCode(QrResolver::new(
            camera,
            Box::new(Utf8Decoder::new()),
            Box::new(TermConsole::new()),
        )));
    }

    if !cli.no_manual {
        resolvers.push(AnyResolver::Manual(ManualResolver::new(Box::new(
            TermConsole::new(),
        ))));
    }

    ResolverChain::new(resolvers).context("no resolvers enabled, cannot operate")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let registry = acquire_registry(&cli).await?;
    let chain = build_chain(&cli)?;

    let reader = AnyNfcReader::open(&cli.reader)
        .with_context(|| format!("cannot open reader '{}'", cli.reader))?;
    let poller = HardwarePoller::with_timeout(reader, Duration::from_secs(cli.timeout));
    if let Ok(reader_info) = poller.reader_info().await {
        info!(reader = %reader_info.name, locator = %reader_info.locator, "reader ready");
    }

    let audit = AuditLog::new(&cli.audit_log);
    info!(path = %audit.path().display(), "audit log ready");

    let mut engine = SyncEngine::new(poller, chain, registry, audit, !cli.no_dedup);

    tokio::select! {
        result = engine.run() => result?,
        _ = tokio::signal::ctrl_c() => {}
    }

    println!("{}", "Exiting...".bold());
    Ok(())
}
