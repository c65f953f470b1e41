//! User Registry - ユーザー登録CLI

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use user_registry::adapter::config::Config;
use user_registry::driver::{Args, UserRegistryApp};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (missing file means defaults)
    let config = Config::load_or_default(&args.config)?.with_store_path(args.store.clone());

    // Create the application with injected dependencies
    let app = UserRegistryApp::new(&config);

    let mut stdout = std::io::stdout();
    app.execute(args.command, &mut stdout).await
}
