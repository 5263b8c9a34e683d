use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::ThreadRng;
use tracing::info;

use stroop_chat::{ChatClient, ChatMessage};
use stroop_core::{BlockingOverlay, OverlayInput, StroopTrial, TrialResponse};
use stroop_experiment::{
    config::INTERVAL_SECRET_KEY, IntervalSources, SchedulerConfig, SchedulerEvent,
    StroopScheduler,
};
use stroop_timing::SystemClock;

use crate::overlay::TerminalOverlay;
use crate::secrets::{Secrets, SECRETS_FILE};

const SYSTEM_PROMPT: &str = "You are an AI agent";

/// One participant session: the chat loop plus the interrupt scheduler.
pub struct App {
    chat: ChatClient,
    scheduler: StroopScheduler<SystemClock, ThreadRng>,
    overlay: TerminalOverlay,
    history: Vec<ChatMessage>,
}

impl App {
    pub fn from_environment() -> Result<Self> {
        let secrets = Secrets::load(Path::new(SECRETS_FILE))?;
        let api_key = secrets
            .get("OPENAI_API_KEY")
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .context("OPENAI_API_KEY not found in secrets.toml or the environment")?;
        let model = secrets
            .get("OPENAI_MODEL")
            .or_else(|| std::env::var("OPENAI_MODEL").ok())
            .unwrap_or_else(|| "gpt-4o-mini".to_string());

        let mut sources = IntervalSources::from_env();
        sources.secret = secrets.get(INTERVAL_SECRET_KEY);
        let config = SchedulerConfig::from_sources(&sources);
        info!(
            interval_seconds = config.interval_seconds,
            model = %model,
            "session configured"
        );

        Ok(Self {
            chat: ChatClient::new(api_key, model),
            scheduler: StroopScheduler::new(config, SystemClock, rand::rng()),
            overlay: TerminalOverlay::new(),
            history: vec![ChatMessage::system(SYSTEM_PROMPT)],
        })
    }

    /// Baseline condition: streaming chat, no interruptions.
    pub async fn run_plain_chat(mut self) -> Result<()> {
        println!("How can I help?");
        while let Some(prompt) = read_prompt()? {
            self.history.push(ChatMessage::user(prompt));
            let reply = self
                .chat
                .complete_streaming(&self.history, |fragment| {
                    print!("{fragment}");
                    let _ = io::stdout().flush();
                })
                .await?;
            println!();
            self.history.push(reply);
        }
        Ok(())
    }

    /// Cognitive-load condition: the scheduler gates every conversational
    /// turn behind the periodic color-naming task.
    pub async fn run_stroop_chat(mut self) -> Result<()> {
        println!("How can I help?");
        loop {
            if let Some(trial) = self.scheduler.poll() {
                println!("\n[stroop] color naming task ready");
                let response = self.block_on_trial(&trial)?;
                println!(
                    "{}",
                    if response.was_correct {
                        "Correct!"
                    } else {
                        "Incorrect."
                    }
                );
            }

            let Some(prompt) = read_prompt()? else { break };
            self.history.push(ChatMessage::user(prompt));
            let reply = self.chat.complete(&self.history).await?;
            println!("{}", reply.content);
            self.history.push(reply);
        }
        self.dump_responses()
    }

    /// Suspends the conversation until the trial is answered. Invalid input
    /// re-prompts; there is no other way out.
    fn block_on_trial(&mut self, trial: &StroopTrial) -> Result<TrialResponse> {
        self.overlay.show(trial)?;
        loop {
            let event = match self.overlay.next_input()? {
                OverlayInput::Keystroke(ch) => SchedulerEvent::Keystroke(ch),
                OverlayInput::Choice(color) => SchedulerEvent::ColorChosen(color),
            };
            if let Some(response) = self.scheduler.handle_event(event) {
                return Ok(response);
            }
            print!("Press 1-6: ");
            io::stdout().flush()?;
        }
    }

    /// Emits the collected trial records for the external research-data
    /// collector; nothing persists in-process.
    fn dump_responses(&self) -> Result<()> {
        let responses = self.scheduler.responses();
        if responses.is_empty() {
            return Ok(());
        }
        println!("\n--- stroop responses ---");
        println!("{}", serde_json::to_string_pretty(responses)?);
        Ok(())
    }
}

/// Reads the next non-empty chat prompt; `None` on EOF or an exit command.
fn read_prompt() -> io::Result<Option<String>> {
    loop {
        print!("\n> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        match line {
            "" => continue,
            "exit" | "quit" => return Ok(None),
            prompt => return Ok(Some(prompt.to_string())),
        }
    }
}
