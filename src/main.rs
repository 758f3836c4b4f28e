use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use grow::form::event::HELP;
use grow::form::{Command, Configurator, SideEffect};
use grow::{ConfiguratorConfig, Resolver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    // 2. Config (optional JSON file as first argument)
    let config = match std::env::args().nth(1) {
        Some(path) => ConfiguratorConfig::load(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => ConfiguratorConfig::default(),
    };
    tracing::info!(?config, "GROW configurator booting");

    let resolver = Resolver::from_config(&config).context("building resolver")?;

    // 3. Setup Configurator + Channel
    let (tx, rx) = mpsc::channel(100);
    let mut configurator = Configurator::new(rx, resolver);

    // 4. Spawn Input Reader (Stdin). Dropping `tx` ends the session.
    tokio::spawn(async move {
        let reader = BufReader::new(tokio::io::stdin());
        let mut lines = reader.lines();

        println!("Do you want to know how much CO₂ you could save? Type 'help' for commands.");

        while let Ok(Some(line)) = lines.next_line().await {
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Event(event)) => {
                    tracing::debug!(?event, "console input dispatched");
                    if let Err(e) = tx.send(event).await {
                        tracing::error!("Failed to send input: {}", e);
                        break;
                    }
                }
                Ok(Command::Help) => println!("{HELP}"),
                Ok(Command::Quit) => break,
                Err(e) => println!("{e}"),
            }
        }
    });

    // 5. Run until input closes
    configurator.run(|effect| render(&effect)).await;
    Ok(())
}

fn render(effect: &SideEffect) {
    match effect {
        SideEffect::Log(msg) => println!("{msg}"),
        SideEffect::RenderError(msg) => println!("[error] {msg}"),
        SideEffect::RenderSuggestion(msg) => {
            println!("Your tailored suggestion:");
            println!("  {msg}");
        }
        SideEffect::ClearResult => println!("(previous result cleared)"),
        SideEffect::ListOptions {
            category,
            enabled,
            options,
        } => {
            let state = if *enabled { "" } else { " (locked)" };
            println!("{category}{state}:");
            for option in options {
                println!("  {:<18} {}", option.value, option.label);
            }
        }
    }
}
