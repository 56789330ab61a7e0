use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use situ_mcp::{McpClient, DEFAULT_MCP_ENDPOINT};

#[derive(Args, Debug)]
pub struct McpArgs {
    /// Only show edits targeting this element id
    pub element_id: Option<String>,

    /// MCP endpoint base URL (defaults to the configured mcpEndpoint)
    #[arg(short, long)]
    pub endpoint: Option<String>,
}

pub fn mcp(args: McpArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let endpoint = args.endpoint.or(config.mcp_endpoint);

    println!(
        "🔌 {} {}",
        "Fetching edits from".green().bold(),
        endpoint.as_deref().unwrap_or(DEFAULT_MCP_ENDPOINT)
    );

    let client = McpClient::new(endpoint.as_deref());
    let edits = match &args.element_id {
        Some(element_id) => client.edits_for(element_id)?,
        None => client.fetch_edits()?,
    };

    if edits.is_empty() {
        match &args.element_id {
            Some(element_id) => {
                println!("{} for {}", "No edits found".dimmed(), element_id.cyan())
            }
            None => println!("{}", "No edits found".dimmed()),
        }
        return Ok(());
    }

    match &args.element_id {
        Some(element_id) => println!(
            "✨ {} edit(s) for {}",
            edits.len().to_string().green(),
            element_id.cyan()
        ),
        None => println!("✨ {} edit(s)", edits.len().to_string().green()),
    }
    println!();

    for edit in &edits {
        println!("{}", serde_json::to_string_pretty(edit)?);
        println!();
    }

    Ok(())
}
