use crate::domain::ports::Terminal;
use crate::utils::error::{Result, ShelterError};
use std::io::{self, BufRead, Write};

pub const INVALID_NUMBER_MESSAGE: &str = "Input valid number, please.";

/// Line-based terminal over any reader/writer pair. Prompts and normal output
/// go to `out`, error lines to `err`.
pub struct ConsoleTerminal<R: BufRead, W: Write, E: Write> {
    input: R,
    out: W,
    err: E,
}

impl ConsoleTerminal<io::StdinLock<'static>, io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> ConsoleTerminal<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }

    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ShelterError::InputClosed);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write, E: Write> Terminal for ConsoleTerminal<R, W, E> {
    fn prompt_line(&mut self, message: &str) -> Result<String> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;
        self.read_line()
    }

    fn prompt_integer(&mut self, message: &str) -> Result<i64> {
        loop {
            let line = self.prompt_line(message)?;
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!("Rejected integer input {:?}: {}", line, e);
                    writeln!(self.out, "{}", INVALID_NUMBER_MESSAGE)?;
                }
            }
        }
    }

    fn print(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    fn print_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.err, "{}", message)?;
        self.err.flush()?;
        Ok(())
    }
}
