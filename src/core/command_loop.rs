use crate::core::{Command, RecordStore, SessionState, Terminal};
use crate::utils::error::Result;

pub const WELCOME_BANNER: &str = "Welcome to the Pet Shelter System";
pub const GOODBYE_MESSAGE: &str = "Goodbye!";
pub const ACTION_PROMPT: &str = "Choose an action: 'add', 'fee', or 'exit': ";
pub const NAME_PROMPT: &str = "Enter the animal's name: ";
pub const BLANK_NAME_MESSAGE: &str = "Animal name cannot be blank. Please enter a valid name.";
pub const FEE_PROMPT: &str = "Enter the adoption fee: ";
pub const LOOKUP_PROMPT: &str = "Enter the animal's name to find its adoption fee: ";
pub const INVALID_ACTION_MESSAGE: &str = "Invalid action. Please choose 'add', 'fee', or 'exit'.";
pub const ADD_ERROR_PREFIX: &str = "Error adding animal: ";
pub const LOOKUP_ERROR_PREFIX: &str = "Error accessing animal: ";

/// Drives one operator session against a [`RecordStore`].
///
/// Store failures are reported through the terminal and the loop carries on.
/// Only terminal failures (closed input, broken pipe) end `run` early.
pub struct CommandLoop<T: Terminal> {
    store: RecordStore,
    terminal: T,
    state: SessionState,
    show_banner: bool,
    started: bool,
}

impl<T: Terminal> CommandLoop<T> {
    pub fn new(store: RecordStore, terminal: T) -> Self {
        Self {
            store,
            terminal,
            state: SessionState::AwaitingCommand,
            show_banner: true,
            started: false,
        }
    }

    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    /// Runs until the operator enters `exit`.
    pub fn run(&mut self) -> Result<()> {
        if !self.started {
            self.started = true;
            tracing::info!("Session started");
            if self.show_banner {
                self.terminal.print(WELCOME_BANNER)?;
            }
        }

        while self.state != SessionState::Exited {
            self.state = self.step()?;
        }

        tracing::info!("Session ended with {} record(s)", self.store.len());
        Ok(())
    }

    /// Performs one transition and returns the next state.
    pub fn step(&mut self) -> Result<SessionState> {
        match self.state {
            SessionState::AwaitingCommand => self.await_command(),
            SessionState::CollectingAddInput => self.collect_add_input(),
            SessionState::CollectingLookupInput => self.collect_lookup_input(),
            SessionState::Exited => Ok(SessionState::Exited),
        }
    }

    fn await_command(&mut self) -> Result<SessionState> {
        let input = self.terminal.prompt_line(ACTION_PROMPT)?;
        let command = Command::parse(&input);
        tracing::debug!("Dispatching {:?}", command);

        match command {
            Command::Exit => {
                self.terminal.print(GOODBYE_MESSAGE)?;
                Ok(SessionState::Exited)
            }
            Command::Add => Ok(SessionState::CollectingAddInput),
            Command::Fee => Ok(SessionState::CollectingLookupInput),
            Command::Unknown(input) => {
                tracing::debug!("Unrecognized action {:?}", input);
                self.terminal.print(INVALID_ACTION_MESSAGE)?;
                Ok(SessionState::AwaitingCommand)
            }
        }
    }

    fn collect_add_input(&mut self) -> Result<SessionState> {
        let name = loop {
            let entered = self.terminal.prompt_line(NAME_PROMPT)?;
            let trimmed = entered.trim();
            if !trimmed.is_empty() {
                break trimmed.to_string();
            }
            self.terminal.print(BLANK_NAME_MESSAGE)?;
        };

        let fee = self.terminal.prompt_integer(FEE_PROMPT)?;

        match self.store.add(&name, fee) {
            Ok(()) => {
                self.terminal
                    .print(&format!("{} added with a fee of ${}.", name, fee))?;
            }
            Err(e) if e.is_recoverable() => {
                tracing::debug!("Add failed: {} ({})", e, e.recovery_suggestion());
                self.terminal
                    .print_error(&format!("{}{}", ADD_ERROR_PREFIX, e))?;
            }
            Err(e) => return Err(e),
        }

        Ok(SessionState::AwaitingCommand)
    }

    fn collect_lookup_input(&mut self) -> Result<SessionState> {
        let name = self.terminal.prompt_line(LOOKUP_PROMPT)?;

        match self.store.lookup(&name) {
            Ok(fee) => {
                self.terminal
                    .print(&format!("{}'s adoption fee is ${}.", name, fee))?;
            }
            Err(e) if e.is_recoverable() => {
                tracing::debug!("Lookup failed: {} ({})", e, e.recovery_suggestion());
                self.terminal
                    .print(&format!("{}{}", LOOKUP_ERROR_PREFIX, e))?;
            }
            Err(e) => return Err(e),
        }

        Ok(SessionState::AwaitingCommand)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn into_parts(self) -> (RecordStore, T) {
        (self.store, self.terminal)
    }
}
