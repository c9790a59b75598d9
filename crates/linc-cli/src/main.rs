use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing_subscriber::EnvFilter;

use linc_core::agent::{AgentRegistry, AgentStatus, RegistryConfig, default_agents};
use linc_core::health::SystemMetrics;
use linc_core::routing;
use linc_core::session::ChatMessage;
use linc_interaction::{ChatEngine, EngineConfig, IgnoreReason, InteractionResult};
use linc_monitor::{HealthMonitor, MonitorConfig};

/// LINC interactive console.
#[derive(Parser, Debug)]
#[command(name = "linc", version, about = "LINC multi-agent assistant console")]
struct Cli {
    /// Path to a TOML registry file; built-in agents are used when omitted.
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Seconds between health sweeps.
    #[arg(long, default_value_t = 30)]
    health_interval: u64,
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/agents".to_string(),
                "/select".to_string(),
                "/route".to_string(),
                "/health".to_string(),
                "/status".to_string(),
                "/help".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

fn load_registry(cli: &Cli) -> Result<AgentRegistry> {
    let profiles = match &cli.registry {
        Some(path) => RegistryConfig::load(path)?.into_profiles(),
        None => default_agents(),
    };
    Ok(AgentRegistry::new(profiles))
}

async fn print_agent_message(registry: &AgentRegistry, message: &ChatMessage) {
    let name = match &message.agent_id {
        Some(id) => registry
            .get(id)
            .await
            .map(|a| a.name)
            .unwrap_or_else(|| id.clone()),
        None => "agent".to_string(),
    };
    println!("{}", format!("[{}]", name).bright_magenta());
    for line in message.content.lines() {
        println!("{}", line.bright_blue());
    }
    println!();
}

async fn print_agent_list(registry: &AgentRegistry) {
    for agent in registry.all().await {
        let marker = match agent.status {
            AgentStatus::Online => "●".green(),
            AgentStatus::Offline => "●".red(),
        };
        println!(
            "{} {} {} {}",
            marker,
            agent.name.bold(),
            format!("({})", agent.id).bright_black(),
            format!("[{}] {}", agent.category, agent.capabilities.join(", ")).bright_black(),
        );
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_yellow());
    println!("  /agents          list all agents and their status");
    println!("  /select <id>     start a conversation with an agent");
    println!("  /route <text>    suggest which agent should handle a request");
    println!("  /health          show the latest health snapshot");
    println!("  /status          show system metrics");
    println!("  /help            show this help");
    println!("  quit             exit");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let started_at = Instant::now();

    let registry = Arc::new(load_registry(&cli)?);
    tracing::info!(agents = registry.len().await, "registry loaded");
    let engine = ChatEngine::new(Arc::clone(&registry), EngineConfig::default());

    let monitor_config = MonitorConfig {
        interval: Duration::from_secs(cli.health_interval),
        ..MonitorConfig::default()
    };
    let monitor = HealthMonitor::new(Arc::clone(&registry), monitor_config).spawn();

    // Channel for receiving agent replies from background submissions.
    let (response_tx, mut response_rx) = mpsc::channel::<InteractionResult>(32);

    // Response handler: renders replies as they arrive.
    let handler_registry = Arc::clone(&registry);
    let response_handler = tokio::spawn(async move {
        while let Some(result) = response_rx.recv().await {
            match result {
                InteractionResult::Reply(message) | InteractionResult::Greeting(message) => {
                    print_agent_message(&handler_registry, &message).await;
                }
                InteractionResult::Ignored(IgnoreReason::NoAgentSelected) => {
                    println!(
                        "{}",
                        "No agent selected. Use /select <id> to start.".bright_black()
                    );
                }
                InteractionResult::Ignored(IgnoreReason::Busy) => {
                    println!(
                        "{}",
                        "Still composing a reply - give it a moment.".bright_black()
                    );
                }
                InteractionResult::Ignored(_) => {}
            }
        }
    });

    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== LINC Console ===".bright_magenta().bold());
    println!(
        "{}",
        "Type /agents to see the fleet, /select <id> to start chatting, or 'quit' to exit."
            .bright_black()
    );
    println!();

    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Some(rest) = trimmed.strip_prefix('/') {
                    let (command, arg) = match rest.split_once(' ') {
                        Some((command, arg)) => (command, arg.trim()),
                        None => (rest, ""),
                    };
                    match command {
                        "agents" => print_agent_list(&registry).await,
                        "select" => {
                            if arg.is_empty() {
                                println!("{}", "Usage: /select <id>".bright_black());
                                continue;
                            }
                            match engine.select_agent(arg).await {
                                Ok(InteractionResult::Greeting(message)) => {
                                    print_agent_message(&registry, &message).await;
                                }
                                Ok(_) => {}
                                Err(err) => {
                                    println!("{}", err.to_string().red());
                                }
                            }
                        }
                        "route" => {
                            if arg.is_empty() {
                                println!("{}", "Usage: /route <text>".bright_black());
                                continue;
                            }
                            let decision = routing::route(arg);
                            let supporting = if decision.supporting.is_empty() {
                                "none".to_string()
                            } else {
                                decision.supporting.join(", ")
                            };
                            println!(
                                "{} {}",
                                decision.agent_id.bold(),
                                format!(
                                    "(confidence {:.2}, supporting: {})",
                                    decision.confidence, supporting
                                )
                                .bright_black()
                            );
                        }
                        "health" => match monitor.latest().await {
                            Some(snapshot) => {
                                let verdict = if snapshot.healthy {
                                    "healthy".green()
                                } else {
                                    "degraded".red()
                                };
                                println!(
                                    "{} {}",
                                    verdict,
                                    format!(
                                        "({}/{} agents online, checked {})",
                                        snapshot.online, snapshot.total, snapshot.checked_at
                                    )
                                    .bright_black()
                                );
                            }
                            None => {
                                println!("{}", "No health sweep has completed yet.".bright_black())
                            }
                        },
                        "status" => {
                            let snapshot = monitor.latest().await;
                            let metrics = SystemMetrics {
                                session_id: engine.session_id().await,
                                uptime_secs: started_at.elapsed().as_secs(),
                                agents_total: registry.len().await,
                                agents_online: registry.online_count().await,
                                healthy: snapshot.map(|s| s.healthy).unwrap_or(false),
                                transcript_len: engine.transcript().await.len(),
                            };
                            println!("{}", serde_json::to_string_pretty(&metrics)?);
                        }
                        "help" => print_help(),
                        other => {
                            println!(
                                "{}",
                                format!("Unknown command: /{other} (try /help)").bright_black()
                            );
                        }
                    }
                    continue;
                }

                println!("{}", format!("> {}", trimmed).green());

                // Submit in the background so the prompt stays responsive;
                // the busy flag makes overlapping submissions no-ops.
                let tx = response_tx.clone();
                let input = trimmed.to_string();
                let background = engine.clone();
                tokio::spawn(async move {
                    let result = match timeout(Duration::from_secs(30), background.submit(&input))
                        .await
                    {
                        Ok(result) => result,
                        Err(_) => InteractionResult::Ignored(IgnoreReason::SessionReset),
                    };
                    let _ = tx.send(result).await;
                });
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    // Stop the health sweeps before tearing down the channels.
    monitor.shutdown().await;

    drop(response_tx);
    let _ = response_handler.await;

    Ok(())
}
