//! CLI binary for printing tool invocation status badges.

mod transcript;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use toolbadge_label::{describe_with, BadgeStatus, InvocationState, LabelConfig, ToolInvocation};

#[derive(Parser)]
#[command(name = "toolbadge", version, about = "Status labels for tool invocations in a chat transcript")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON label config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Maximum display width of each filename (overrides the config file)
    #[arg(long, global = true)]
    max_length: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a single tool invocation
    Label {
        /// Tool name, e.g. str_replace_editor or file_manager
        #[arg(short, long)]
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long)]
        args: Option<String>,

        /// Invocation state: pending, completed, call or result
        #[arg(short, long, default_value = "pending")]
        state: InvocationState,

        /// Result payload as JSON (marks a completed invocation as finished)
        #[arg(short, long)]
        result: Option<String>,

        /// Print the badge as JSON
        #[arg(long)]
        json: bool,
    },

    /// Describe every invocation in a transcript (JSON array or JSON Lines)
    Render {
        /// Transcript file; reads stdin when omitted or `-`
        input: Option<PathBuf>,

        /// Print one JSON badge per line
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup tracing; stdout is reserved for badges
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref(), cli.max_length)?;

    match cli.command {
        Commands::Label {
            tool,
            args,
            state,
            result,
            json,
        } => cmd_label(&config, tool, args.as_deref(), state, result.as_deref(), json)?,
        Commands::Render { input, json } => cmd_render(&config, input.as_deref(), json)?,
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>, max_length: Option<usize>) -> anyhow::Result<LabelConfig> {
    let mut config = match path {
        Some(p) => {
            tracing::debug!(path = %p.display(), "Loading label config");
            LabelConfig::from_json_file(p)?
        }
        None => LabelConfig::default(),
    };
    if let Some(max) = max_length {
        config.max_filename_len = max;
    }
    config.validate()?;
    Ok(config)
}

fn cmd_label(
    config: &LabelConfig,
    tool: String,
    args: Option<&str>,
    state: InvocationState,
    result: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let invocation = ToolInvocation {
        tool_call_id: None,
        tool_name: tool,
        args: args.map(serde_json::from_str::<serde_json::Value>).transpose()?,
        state,
        result: result.map(serde_json::from_str::<serde_json::Value>).transpose()?,
    };

    let status = describe_with(&invocation, config);
    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{}", format_badge(&status));
        println!("{}", status.accessibility_label);
    }
    Ok(())
}

fn cmd_render(config: &LabelConfig, input: Option<&std::path::Path>, json: bool) -> anyhow::Result<()> {
    let invocations = transcript::load_transcript(input)?;
    tracing::info!(count = invocations.len(), "Rendering transcript");

    for invocation in &invocations {
        let status = describe_with(invocation, config);
        if json {
            println!("{}", serde_json::to_string(&status)?);
        } else {
            println!("{}", format_badge(&status));
        }
    }
    Ok(())
}

/// One-line text badge: a dot once the call has its result, a spinner glyph otherwise.
fn format_badge(status: &BadgeStatus) -> String {
    let indicator = if status.is_completed { '●' } else { '◌' };
    format!("{} {}", indicator, status.message)
}
