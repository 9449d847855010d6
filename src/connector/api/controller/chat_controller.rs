use std::io::{BufRead, Write};

use anyhow::Result;

use crate::domain::ConversationTurn;

use super::super::Container;

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Interactive terminal chat against the same pipeline the widget uses.
    ///
    /// The loop owns the history and appends the user/assistant pair only
    /// after a successful exchange, like the browser widget does.
    pub async fn run(&self) -> Result<()> {
        let use_case = self.container.respond_use_case();
        let mut history: Vec<ConversationTurn> = Vec::new();

        println!(
            "Chat with Alan Turing ({}). Empty line to quit.",
            self.container.model_name()
        );

        let stdin = std::io::stdin();
        loop {
            print!("you> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let text = line.trim();
            if text.is_empty() {
                break;
            }

            match use_case.execute(text, &history).await {
                Ok(reply) => {
                    println!("alan> {reply}\n");
                    history.push(ConversationTurn::user(text));
                    history.push(ConversationTurn::assistant(reply));
                }
                Err(e) => {
                    eprintln!("error: {e}\n");
                }
            }
        }

        Ok(())
    }
}
