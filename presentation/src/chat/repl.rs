//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::transcript::TranscriptFormatter;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use shopchat_application::{ResetChatUseCase, SendMessageUseCase, TurnOutcome, ViewHistoryUseCase};
use shopchat_domain::SessionId;

/// Interactive chat REPL.
///
/// Plain input runs a chat turn; `/history` and `/reset` expose the view
/// and reset triggers.
pub struct ChatRepl {
    send_message: SendMessageUseCase,
    view_history: ViewHistoryUseCase,
    reset_chat: ResetChatUseCase,
    session: SessionId,
}

impl ChatRepl {
    pub fn new(
        send_message: SendMessageUseCase,
        view_history: ViewHistoryUseCase,
        reset_chat: ResetChatUseCase,
        session: SessionId,
    ) -> Self {
        Self {
            send_message,
            view_history,
            reset_chat,
            session,
        }
    }

    /// Run the interactive REPL until `/quit` or EOF.
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load input history
        let history_path = dirs::data_dir().map(|p| p.join("shopchat").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline("you> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    // Add to input history
                    let _ = rl.add_history_entry(line);

                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save input history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("Storefront shopping assistant. Ask about products, orders, anything.");
        println!();
        println!("Commands:");
        println!("  /history  - Show the conversation so far");
        println!("  /reset    - Start a fresh conversation");
        println!("  /help     - Show this help");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    async fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /history         - Show the conversation so far");
                println!("  /reset           - Start a fresh conversation");
                println!("  /help, /h, /?    - Show this help");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/history" => {
                let conversation = self.view_history.execute(&self.session).await;
                println!();
                println!("{}", TranscriptFormatter::format(&conversation));
                println!();
                false
            }
            "/reset" => {
                match self.reset_chat.execute(&self.session).await {
                    Ok(()) => println!("Conversation cleared."),
                    Err(e) => eprintln!("Error: {}", e),
                }
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&self, text: &str) {
        match self.send_message.execute(&self.session, text).await {
            Ok(TurnOutcome::Replied { conversation }) => {
                if let Some(reply) = conversation.last() {
                    println!();
                    println!("{}", TranscriptFormatter::format_reply(&reply.content));
                    println!();
                }
            }
            Ok(TurnOutcome::Ignored) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
    }
}
