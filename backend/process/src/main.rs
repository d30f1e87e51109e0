use anyhow::Context;
use clap::Parser;
use process::{
    Report,
    config::Config,
    execute,
    models::Command,
    state::State,
    utils::{render_dashboard, render_vault},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "finance", author, version, about)]
struct Args {
    /// Print the dashboard as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    info!("Loading config...");
    let config = Config::load();
    let mut state = State::new(config).context("Failed to open the finance store")?;

    let report = execute(&mut state, args.command.unwrap_or(Command::Summary))?;

    match report {
        Report::Dashboard { notice, snapshot } => {
            if let Some(notice) = notice {
                eprintln!("{notice}");
            }
            if args.json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print!("{}", render_dashboard(&snapshot));
            }
        }
        Report::Vault(entries) => print!("{}", render_vault(&entries)),
        Report::Credential { title, credential } => println!("{title}: {credential}"),
        Report::Theme(theme) => println!("Theme set to {}", theme.as_str()),
    }

    Ok(())
}
