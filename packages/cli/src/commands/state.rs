use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use situ_reconciler::{border_changed, style_state};
use situ_store::EditLogStore;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct StateArgs {
    /// Element id to query
    pub element_id: String,

    /// Edit log file (defaults to the configured logPath)
    #[arg(short, long)]
    pub log: Option<PathBuf>,
}

pub fn state(args: StateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let log_path = args.log.unwrap_or_else(|| config.log_file(cwd));

    let store = EditLogStore::open(log_path);
    let log = store.load()?;
    let state = style_state(&log, &args.element_id);

    println!("🔍 {} {}", "Element state".green().bold(), args.element_id);
    println!();

    if state.edited {
        println!("   {} edited", "✓".green());
    } else {
        println!("   {} no edits", "✗".dimmed());
    }

    if !state.categories.is_empty() {
        let names: Vec<&str> = state
            .categories
            .iter()
            .map(|category| category.as_str())
            .collect();
        println!("   Categories: {}", names.join(", ").cyan());
    }

    if border_changed(&log, &args.element_id) {
        println!("   Border: {}", "changed".yellow());
    }

    if let Some(millis) = state.last_timestamp {
        if let Some(moment) = chrono::DateTime::from_timestamp_millis(millis) {
            println!(
                "   Last edit: {}",
                moment.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed()
            );
        }
    }

    Ok(())
}
