use crate::commands::read_optional;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use situ_reconciler::{Category, CategoryFocus};
use situ_render::{EditViewer, ViewerOutput};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Element id to inspect (matches data-id / elementId)
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

    /// Output format (text, json, html)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn inspect(args: InspectArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let log_path = args.log.unwrap_or_else(|| config.log_file(cwd));
    let baseline_path = args.baseline.or_else(|| config.baseline_file(cwd));

    let log_raw = read_optional(&log_path)?;
    let baseline_raw = match &baseline_path {
        Some(path) => read_optional(path)?,
        None => None,
    };

    let viewer = EditViewer::new(parse_focus(&args.category)?);
    let output = viewer.view(log_raw.as_deref(), &args.element_id, baseline_raw.as_deref());

    match args.format.as_str() {
        "text" => print_text(&args.element_id, &output),
        "json" => println!("{}", serde_json::to_string_pretty(&output)?),
        "html" => println!("{}", output.html),
        other => {
            return Err(anyhow::anyhow!(
                "Unknown format: {}. Use: text, json, or html",
                other
            ));
        }
    }

    Ok(())
}

pub(crate) fn parse_focus(name: &str) -> Result<CategoryFocus> {
    if name == "all" {
        return Ok(CategoryFocus::unified());
    }
    match Category::parse(name) {
        Some(category) => Ok(CategoryFocus::single(category)),
        None => Err(anyhow::anyhow!(
            "Unknown category: {}. Use: all, fill, appearance, typography, border, or layout",
            name
        )),
    }
}

pub(crate) fn print_text(element_id: &str, output: &ViewerOutput) {
    println!("🔍 {} {}", "Inspecting".green().bold(), element_id);
    if let Some(timestamp) = &output.timestamp {
        println!("   Last edit: {}", timestamp.dimmed());
    }
    println!();

    if let Some(notice) = &output.notice {
        println!("   {}", notice.yellow());
        return;
    }

    println!("{}", "Original".red().bold());
    for line in output.original_json.lines() {
        println!("  {}", line.red());
    }
    println!();
    println!("{}", "Updated".green().bold());
    for line in output.updated_json.lines() {
        println!("  {}", line.green());
    }
}
