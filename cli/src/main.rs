//! CLI entrypoint for shopchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use shopchat_application::{
    ChatLog, NoChatLog, ResetChatUseCase, SendMessageUseCase, TurnOutcome, ViewHistoryUseCase,
};
use shopchat_domain::SessionId;
use shopchat_infrastructure::{
    BlobConversationStore, ConfigLoader, InMemorySessionBackend, InferenceClient, JsonlChatLog,
};
use shopchat_presentation::{ChatRepl, Cli};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting shopchat");

    // Load configuration, then apply CLI overrides
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if let Some(endpoint) = &cli.endpoint {
        config.inference.endpoint = Some(endpoint.clone());
    }
    if let Some(model) = &cli.model {
        config.inference.model = Some(model.clone());
    }

    // === Dependency Injection ===
    let gateway = Arc::new(InferenceClient::new(config.inference.inference_config()));
    let store = Arc::new(BlobConversationStore::new(InMemorySessionBackend::new()));

    let chat_log: Arc<dyn ChatLog> = match &cli.log_file {
        Some(path) => match JsonlChatLog::new(path) {
            Some(log) => Arc::new(log),
            None => Arc::new(NoChatLog),
        },
        None => Arc::new(NoChatLog),
    };

    let mut send_message =
        SendMessageUseCase::new(store.clone(), gateway).with_chat_log(chat_log.clone());
    if let Some(preamble) = config.chat.preamble.clone() {
        send_message = send_message.with_preamble(preamble);
    }

    let session = SessionId::new(cli.session.clone());

    // Single-message mode
    if let Some(message) = cli.message {
        match send_message.execute(&session, &message).await? {
            TurnOutcome::Replied { conversation } => {
                if let Some(reply) = conversation.last() {
                    println!("{}", reply.content);
                }
            }
            TurnOutcome::Ignored => {}
        }
        return Ok(());
    }

    // Interactive chat
    let view_history = ViewHistoryUseCase::new(store.clone());
    let reset_chat = ResetChatUseCase::new(store).with_chat_log(chat_log);

    let repl = ChatRepl::new(send_message, view_history, reset_chat, session);
    repl.run().await?;

    Ok(())
}
