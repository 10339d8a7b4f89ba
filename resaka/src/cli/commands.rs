//! CLI command execution.

use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::api::ConversationClient;
use crate::config::ClientConfig;
use crate::render::{format_message, header, status_badge, TYPING_INDICATOR};
use crate::view::{ConversationView, InputEvent};

use super::args::{Cli, Commands};

/// Typed at the prompt to leave the chat loop.
const QUIT_COMMAND: &str = "/quit";

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "resaka=warn",
        1 => "resaka=debug",
        _ => "resaka=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be set when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn execute(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let config = ClientConfig::from(cli.mode);
    info!(mode = ?cli.mode, base_url = %config.base_url, "backend selected");
    let client = ConversationClient::new(config);

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => chat(client).await,
        Commands::Send {
            conversation_id,
            message,
        } => send_once(&client, &message.join(" "), conversation_id.as_deref()).await,
        Commands::Health => {
            let online = client.health_check().await;
            println!("{} {}", client.config().base_url, status_badge(Some(online)));
            Ok(())
        }
    }
}

async fn send_once(
    client: &ConversationClient,
    message: &str,
    conversation_id: Option<&str>,
) -> Result<()> {
    let reply = client.send_message(message, conversation_id).await;
    println!("{}", reply.response);
    if let Some(id) = reply.conversation_id {
        println!("conversation_id: {id}");
    }
    Ok(())
}

/// What woke the chat loop.
enum ChatInput {
    Line(Option<String>),
    Probe(bool),
}

/// Interactive loop: each stdin line is typed into the view and submitted.
///
/// The health probe runs on its own task; the badge shows "..." until it
/// answers and is redrawn whenever it does, even between sends.
async fn chat(client: ConversationClient) -> Result<()> {
    let mut view = ConversationView::new(client);
    let mut probe = tokio::spawn(view.backend().health_probe());
    let mut probe_pending = true;

    println!("{}", header(view.is_online()));
    for message in view.messages() {
        println!("{}", format_message(message));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let input = tokio::select! {
            joined = &mut probe, if probe_pending => {
                ChatInput::Probe(joined.unwrap_or_else(|err| {
                    warn!(error = %err, "health probe task failed");
                    false
                }))
            }
            line = lines.next_line() => ChatInput::Line(line.context("Failed to read stdin")?),
        };

        let line = match input {
            ChatInput::Probe(online) => {
                probe_pending = false;
                view.set_connectivity(online);
                println!();
                println!("{}", header(view.is_online()));
                continue;
            }
            ChatInput::Line(None) => break,
            ChatInput::Line(Some(line)) => line,
        };
        if line.trim() == QUIT_COMMAND {
            break;
        }

        view.dispatch(InputEvent::Changed(line)).await;
        if !view.can_send() {
            continue;
        }

        let seen = view.messages().len();
        println!("{TYPING_INDICATOR}");
        view.dispatch(InputEvent::Submit).await;

        // The user's own line is already on screen.
        for message in view.messages().iter().skip(seen).filter(|m| !m.is_user()) {
            println!("{}", format_message(message));
        }
    }

    if probe_pending {
        probe.abort();
    }

    Ok(())
}
