//! propdesk - browse and edit local properties configuration caches
//!
//! This is the binary entry point. All logic lives in the workspace crates.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use propdesk_app::config;

/// propdesk - browse and edit local properties configuration caches
#[derive(Parser, Debug)]
#[command(name = "propdesk")]
#[command(about = "Browse and edit the properties files under an opt/data tree", long_about = None)]
struct Args {
    /// Root directory to open; pre-fills the directory prompt
    #[arg(long, value_name = "PATH")]
    root: Option<PathBuf>,

    /// Print JSON lines instead of starting the TUI (requires --root)
    #[arg(long, requires = "root")]
    headless: bool,

    /// In headless mode, also print the entries of PROJECT/FILE
    #[arg(long, value_name = "PROJECT/FILE", requires = "headless")]
    show: Option<String>,

    /// Write the effective settings to the user config file and exit
    #[arg(long)]
    write_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    propdesk_core::logging::init()?;

    let mut settings = config::load_user_settings();
    if let Some(root) = &args.root {
        settings.root.start_hint = root.display().to_string();
    }

    if args.write_config {
        let dir = config::config_dir()
            .ok_or_else(|| eyre!("No config directory on this platform"))?;
        config::save_settings(&dir, &settings)?;
        eprintln!("Wrote {}", dir.join(config::CONFIG_FILENAME).display());
        return Ok(());
    }

    match (args.headless, args.root) {
        (true, Some(root)) => headless::run_headless(&root, args.show.as_deref(), settings).await?,
        _ => propdesk_tui::run(settings).await?,
    }

    Ok(())
}
