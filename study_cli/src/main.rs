//! `study` - terminal front end for the economics tutor.
//!
//! Owns everything the engine leaves to its caller: the chat history, the
//! pacing of the dialogue replay, and printing.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use econ_content::resources::QUICK_QUESTIONS;
use econ_content::{dialogue, KnowledgeBase, TopicKey};
use std::io::{self, BufRead, Write};
use std::thread;
use study_tutor::responder::render;
use study_tutor::{resources, transcript, ChatLog, DialoguePlayer, Responder, TutorConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = TutorConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    debug!(?config, "Configuration ready");

    let responder = Responder::global();

    match cli.command {
        Commands::Ask { question } => {
            println!("{}", responder.respond(&question.join(" ")));
        }
        Commands::Chat { json } => run_chat(&responder, &config, json)?,
        Commands::Dialogue { pace_ms } => {
            let mut config = config;
            if let Some(ms) = pace_ms {
                config.dialogue_pace_ms = ms;
            }
            play_dialogue(&config)?;
        }
        Commands::Transcript => println!("{}", transcript(dialogue())),
        Commands::Topic { name } => {
            let record = KnowledgeBase::global()
                .get_by_name(&name)
                .map_err(study_tutor::TutorError::from)
                .with_context(|| format!("No explanation available for '{}'", name))?;
            println!("{}", render::render_topic(record));
        }
        Commands::Topics => {
            for key in TopicKey::ALL {
                println!("{:<18} {}", key.as_str(), key.title());
            }
        }
        Commands::Resources => println!("{}", resources::resources_page()),
        Commands::Overview => println!("{}", resources::overview()),
    }

    Ok(())
}

fn print_suggestions() {
    println!("Try one of these:");
    for question in QUICK_QUESTIONS {
        println!("  {}", question);
    }
}

/// Read questions line by line until `/quit` or end of input.
fn run_chat(responder: &Responder<'_>, config: &TutorConfig, json: bool) -> Result<()> {
    let mut log = ChatLog::new();
    info!(session = %log.session_id(), "Chat session started");

    println!("Ask your economics questions. Commands: /history, /clear, /suggest, /quit");
    print_suggestions();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            break;
        }

        match line.trim() {
            "/quit" | "/exit" => break,
            "/clear" => {
                log.clear();
                println!("Chat cleared.");
            }
            "/history" => {
                if log.is_empty() {
                    println!("No questions yet. Start by asking one!");
                } else {
                    let format = config
                        .show_timestamps
                        .then_some(config.timestamp_format.as_str());
                    print!("{}", log.render(format));
                }
            }
            "/suggest" => print_suggestions(),
            question => {
                if let Some(answer) = log.ask(responder, question) {
                    println!("\n{}\n", answer);
                }
            }
        }
    }

    info!(session = %log.session_id(), entries = log.len(), "Chat session ended");

    if json {
        println!("{}", log.to_json().context("Failed to export chat history")?);
    }

    Ok(())
}

/// Print each dialogue line, pausing after it.
fn play_dialogue(config: &TutorConfig) -> Result<()> {
    let player = DialoguePlayer::from_config(config);
    info!(lines = player.len(), pace_ms = config.dialogue_pace_ms, "Playing dialogue");

    let mut stdout = io::stdout();
    for step in player.steps() {
        println!("{}:\n{}\n", step.line.speaker, step.line.text);
        stdout.flush().context("Failed to flush stdout")?;
        thread::sleep(step.pause);
    }

    println!("Dialogue complete!");
    Ok(())
}
