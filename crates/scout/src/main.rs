// SPDX-FileCopyrightText: 2026 Scout Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scout - memory editing and web search tools for an LLM agent.
//!
//! This binary is a manual front end for the tool set: it lists the
//! registered tools and invokes them by name, the same way an orchestrating
//! agent would through the registry.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use scout_config::ScoutConfig;
use scout_core::{ScoutError, ToolRegistry};
use scout_memory::{AgentMemory, MemoryInsertTool, MemoryReplaceTool};
use scout_tavily::{InternetSearchTool, ReadWebsiteTool, TavilyClient};

/// Scout - memory editing and web search tools for an LLM agent.
#[derive(Parser, Debug)]
#[command(name = "scout", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the registered tools.
    Tools,
    /// Invoke a tool by name with a JSON input payload.
    Invoke {
        /// Tool name (e.g. internet_search).
        name: String,
        /// JSON object with the tool's parameters.
        input: String,
    },
    /// Search the internet for a query.
    Search {
        /// The query to search for.
        query: String,
    },
    /// Read the contents of one or more websites.
    Read {
        /// The URLs to read from.
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match scout_config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("scout: failed to load config: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    if let Err(e) = run(cli, config).await {
        eprintln!("scout: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: ScoutConfig) -> Result<(), ScoutError> {
    let Some(command) = cli.command else {
        println!("scout: use --help for available commands");
        return Ok(());
    };

    // Only commands that dispatch web requests need the Tavily API key.
    let dispatches = !matches!(command, Commands::Tools);
    let registry = build_registry(&config, dispatches)?;

    match command {
        Commands::Tools => {
            for (name, description) in registry.list() {
                println!("{name:<16} {description}");
            }
            Ok(())
        }
        Commands::Invoke { name, input } => {
            let input: serde_json::Value =
                serde_json::from_str(&input).map_err(|e| ScoutError::Tool {
                    message: format!("input is not valid JSON: {e}"),
                    source: Some(Box::new(e)),
                })?;
            invoke(&registry, &name, input).await
        }
        Commands::Search { query } => {
            invoke(
                &registry,
                "internet_search",
                serde_json::json!({ "query": query }),
            )
            .await
        }
        Commands::Read { urls } => {
            invoke(
                &registry,
                "read_website",
                serde_json::json!({ "urls": urls }),
            )
            .await
        }
    }
}

/// Builds the registry with all four tools over a fresh in-process store.
///
/// When `dispatches` is false the command only lists names and schemas, so a
/// missing API key is fine and the client stays unauthenticated.
fn build_registry(config: &ScoutConfig, dispatches: bool) -> Result<ToolRegistry, ScoutError> {
    let memory = scout_memory::shared(AgentMemory::new());
    let client = if dispatches {
        TavilyClient::from_config(&config.tavily)?
    } else {
        TavilyClient::new(config.tavily.api_key.as_deref().unwrap_or(""))?
    };
    let client = Arc::new(client);

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(MemoryInsertTool::new(memory.clone())));
    registry.register(Arc::new(MemoryReplaceTool::new(memory)));
    registry.register(Arc::new(InternetSearchTool::new(client.clone())));
    registry.register(Arc::new(ReadWebsiteTool::new(client)));
    Ok(registry)
}

async fn invoke(
    registry: &ToolRegistry,
    name: &str,
    input: serde_json::Value,
) -> Result<(), ScoutError> {
    let tool = registry.get(name).ok_or_else(|| ScoutError::Tool {
        message: format!("unknown tool '{name}'"),
        source: None,
    })?;

    let output = tool.invoke(input).await?;
    println!("{}", output.content);
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("scout={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
