use crate::commands::inspect::{parse_focus, print_text};
use crate::commands::read_optional;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use situ_render::EditViewer;
use situ_store::{EditLogStore, LogWatcher};
use std::path::PathBuf;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Element id to watch
    pub element_id: String,

    /// Edit log file (defaults to the configured logPath)
    #[arg(short, long)]
    pub log: Option<PathBuf>,

    /// Baseline snapshot file for this element
    #[arg(short, long)]
    pub baseline: Option<PathBuf>,

    /// Category focus (all, fill, appearance, typography, border, layout)
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Polling fallback interval in milliseconds
    #[arg(long, default_value = "2000")]
    pub poll_ms: u64,
}

pub fn watch(args: WatchArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let log_path = args.log.clone().unwrap_or_else(|| config.log_file(cwd));
    let baseline_path = args.baseline.clone().or_else(|| config.baseline_file(cwd));

    let baseline_raw = match &baseline_path {
        Some(path) => read_optional(path)?,
        None => None,
    };

    let store = Arc::new(EditLogStore::open(&log_path));
    let events = store.subscribe();
    let _watcher = LogWatcher::spawn(store.clone())?;

    let viewer = EditViewer::new(parse_focus(&args.category)?);

    println!(
        "👀 {} {} ({})",
        "Watching".green().bold(),
        args.element_id,
        log_path.display()
    );
    println!("   Press Ctrl-C to stop");
    println!();

    let mut last_rendered: Option<Option<String>> = None;
    render_if_changed(
        &store,
        &viewer,
        &args.element_id,
        baseline_raw.as_deref(),
        &mut last_rendered,
    )?;

    // Subscription is the primary wakeup; the timeout below is only a
    // polling fallback for writes the watcher platform misses.
    loop {
        match events.recv_timeout(Duration::from_millis(args.poll_ms)) {
            Ok(_) | Err(RecvTimeoutError::Timeout) => {
                render_if_changed(
                    &store,
                    &viewer,
                    &args.element_id,
                    baseline_raw.as_deref(),
                    &mut last_rendered,
                )?;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

fn render_if_changed(
    store: &EditLogStore,
    viewer: &EditViewer,
    element_id: &str,
    baseline_raw: Option<&str>,
    last_rendered: &mut Option<Option<String>>,
) -> Result<()> {
    let raw = store.load_raw()?;
    if last_rendered.as_ref() == Some(&raw) {
        return Ok(());
    }

    let output = viewer.view(raw.as_deref(), element_id, baseline_raw);
    print_text(element_id, &output);
    println!("{}", "────────────────────────────────".dimmed());

    *last_rendered = Some(raw);
    Ok(())
}
