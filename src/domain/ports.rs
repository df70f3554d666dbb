use crate::utils::error::Result;

/// Line-oriented operator terminal the command loop talks through.
pub trait Terminal {
    /// Shows `message` and returns the raw line entered, without its line terminator.
    fn prompt_line(&mut self, message: &str) -> Result<String>;

    /// Shows `message` and returns an integer. Re-prompting on non-numeric
    /// text is the implementor's job.
    fn prompt_integer(&mut self, message: &str) -> Result<i64>;

    fn print(&mut self, message: &str) -> Result<()>;

    fn print_error(&mut self, message: &str) -> Result<()>;
}
