//! The read-match-execute loop the operator drives.
//!
//! Each iteration asks for a command keyword, looks it up in the
//! [`Command::TABLE`], runs the matching operation against the machine actor and
//! prints either the resulting state or an `[Error]` line. The loop ends on
//! `exit` or when input runs out; neither prints anything.

mod command;
mod error;
mod prompt;

pub use command::*;
pub use error::*;
pub use prompt::*;

use crate::clients::MachineClient;
use crate::model::{CoffeeType, Supplies};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info, warn};

/// Where the loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    Running,
    Terminated,
}

/// Drives the machine from a line-oriented reader/writer pair.
pub struct Dispatcher<R, W> {
    client: MachineClient,
    prompter: Prompter<R, W>,
    state: DispatcherState,
}

impl<R, W> Dispatcher<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(client: MachineClient, reader: R, writer: W) -> Self {
        Self {
            client,
            prompter: Prompter::new(reader, writer),
            state: DispatcherState::Running,
        }
    }

    pub fn state(&self) -> DispatcherState {
        self.state
    }

    /// Runs commands until `exit` or end of input.
    ///
    /// Operator mistakes and refused purchases are printed and the loop goes on.
    /// Only a broken terminal or a lost machine actor ends it with an error.
    pub async fn run(&mut self) -> Result<(), DispatchError> {
        info!("Dispatcher started");
        while self.state == DispatcherState::Running {
            match self.step().await {
                Ok(state) => self.state = state,
                Err(DispatchError::InputClosed) => {
                    info!("Input closed");
                    self.state = DispatcherState::Terminated;
                }
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, detail = ?e, "Command failed");
                    self.prompter.say(&format!("{} {}\n", ERROR_PREFIX, e)).await?;
                }
                Err(e) => return Err(e),
            }
        }
        info!("Dispatcher stopped");
        Ok(())
    }

    /// Reads and executes one command, returning the state the loop moves to.
    pub async fn step(&mut self) -> Result<DispatcherState, DispatchError> {
        let prompt = format!("Write action ({}):", Command::listing());
        let command: Command = self.prompter.ask(&prompt).await?.parse()?;
        debug!(?command, "Command");

        match command {
            Command::Buy => self.buy().await?,
            Command::Fill => self.fill().await?,
            Command::Take => self.take().await?,
            Command::Remaining => self.remaining().await?,
            Command::Exit => return Ok(DispatcherState::Terminated),
        }
        Ok(DispatcherState::Running)
    }

    async fn buy(&mut self) -> Result<(), DispatchError> {
        let prompt = format!("What do you want to buy? {}:", CoffeeType::menu());
        let coffee = parse_selector(&self.prompter.ask(&prompt).await?)?;

        let state = self.client.buy(coffee).await?;
        self.prompter.say(&state.to_string()).await
    }

    /// Nothing reaches the machine unless all four answers parse.
    async fn fill(&mut self) -> Result<(), DispatchError> {
        let supplies = Supplies {
            water: self.prompter.ask_number(WATER_PROMPT).await?,
            milk: self.prompter.ask_number(MILK_PROMPT).await?,
            beans: self.prompter.ask_number(BEANS_PROMPT).await?,
            cups: self.prompter.ask_number(CUPS_PROMPT).await?,
        };

        let state = self.client.fill(supplies).await?;
        self.prompter.say(&state.to_string()).await
    }

    async fn take(&mut self) -> Result<(), DispatchError> {
        let money = self.client.take().await?;
        self.prompter.say(&format!("I gave you ${}\n", money)).await
    }

    async fn remaining(&mut self) -> Result<(), DispatchError> {
        let state = self.client.snapshot().await?;
        self.prompter.say(&state.to_string()).await
    }

    /// Hands back the reader and writer, e.g. to inspect a transcript.
    pub fn into_inner(self) -> (R, W) {
        self.prompter.into_inner()
    }
}

/// Resolves a buy menu answer.
///
/// Any whole number outside the menu, however large, is `InvalidCoffeeType`;
/// anything that is not a whole number is `InvalidInput`.
fn parse_selector(token: &str) -> Result<CoffeeType, DispatchError> {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DispatchError::InvalidInput);
    }
    token
        .parse::<i64>()
        .ok()
        .and_then(CoffeeType::from_selector)
        .ok_or_else(|| DispatchError::InvalidCoffeeType(token.to_string()))
}
