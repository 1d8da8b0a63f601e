use std::{io::Write, path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Parser;
use reading_core::{InterpretationClient, ReadingController};
use shared::domain::Position;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod command;
mod config;
mod render;

use command::{parse_command, Command, HELP};
use render::{render_drawn, render_snapshot};

#[derive(Parser, Debug)]
#[command(name = "tarot", about = "Celtic Cross tarot reading with an AI interpretation")]
struct Args {
    /// Flat TOML settings file; missing files are ignored.
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[arg(long)]
    model: Option<String>,
    /// Seed the shuffle for a reproducible spread.
    #[arg(long)]
    seed: Option<u64>,
    /// Draw all ten cards, ask this question, print the reading and exit.
    #[arg(long)]
    question: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings(&args.config);
    if let Some(model) = args.model {
        settings.model = model;
    }
    if !settings.has_api_key() {
        warn!("config: API_KEY is not set; card drawing works but interpretations will fail");
    }

    let client = InterpretationClient::new(settings.interpretation_config()?)?;
    let mut controller = ReadingController::new(Arc::new(client));
    if let Some(seed) = args.seed {
        controller = controller.with_seed(seed);
    }

    match args.question {
        Some(question) => run_once(&controller, &question).await,
        None => run_interactive(&controller).await,
    }
}

async fn run_once(controller: &ReadingController, question: &str) -> Result<()> {
    controller.start().await?;
    for _ in 0..Position::COUNT {
        let drawn = controller.draw_next().await?;
        println!("{}", render_drawn(&drawn));
    }
    controller.set_question(question).await;
    println!("Consulting the cards...");
    controller.request_interpretation().await?;
    print!("{}", render_snapshot(&controller.snapshot().await));
    Ok(())
}

async fn run_interactive(controller: &ReadingController) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print!("{}", render_snapshot(&controller.snapshot().await));

    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line, controller.stage().await) {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Unknown(text) => {
                println!("unknown command '{text}'; type `help` for the list");
                continue;
            }
            command => dispatch(controller, command).await,
        }
        print!("{}", render_snapshot(&controller.snapshot().await));
    }
    Ok(())
}

async fn dispatch(controller: &ReadingController, command: Command) {
    let outcome = match command {
        Command::Start => controller.start().await,
        Command::Reshuffle => controller.reshuffle().await,
        Command::Draw => controller.draw_next().await.map(|drawn| {
            println!("You drew {}", render_drawn(&drawn));
        }),
        Command::Question(text) => {
            controller.set_question(text).await;
            Ok(())
        }
        Command::Read => {
            println!("Consulting the cards...");
            controller.request_interpretation().await.map(|_| ())
        }
        Command::Reset => {
            controller.reset().await;
            Ok(())
        }
        Command::Status | Command::Help | Command::Quit | Command::Unknown(_) => Ok(()),
    };
    // the error slot of the snapshot carries the message shown to the user
    if let Err(err) = outcome {
        debug!(code = ?err.code(), "tarot: command rejected");
    }
}
