/// A single adoption listing: trimmed, non-blank animal name and a fee of zero or more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdoptionRecord {
    pub animal_name: String,
    pub fee: i64,
}

/// Where the command loop currently is within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingCommand,
    CollectingAddInput,
    CollectingLookupInput,
    Exited,
}

/// Operator command word, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Fee,
    Exit,
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "add" => Command::Add,
            "fee" => Command::Fee,
            "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}
