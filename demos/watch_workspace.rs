//! Watch a trainer workspace and log every change.
//!
//! Usage:
//! ```bash
//! RUST_LOG=info cargo run --example watch_workspace -- /path/to/workspace
//! ```
//!
//! Expects `<workspace>/problems` and `<workspace>/templates` to exist;
//! missing directories are skipped with a warning.

use std::time::Duration;

use katawatch::{Channel, WatchOptions, handler_fn, workspace_watcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    katawatch::logging::init_with_filter("info");

    let workspace = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    println!("Watching workspace: {workspace}");
    println!("Edit files under problems/ or templates/; Ctrl-C to exit.\n");

    let watcher = workspace_watcher(&workspace, WatchOptions::default());
    watcher.on(
        Channel::All,
        handler_fn(|event| async move {
            println!("[{}] {}", event.category, event.path.display());
            Ok(())
        }),
    );

    watcher.start().await?;
    tokio::signal::ctrl_c().await?;

    watcher.stop().await;
    // Give in-flight handler tasks a moment to finish printing.
    tokio::time::sleep(Duration::from_millis(100)).await;
    Ok(())
}
