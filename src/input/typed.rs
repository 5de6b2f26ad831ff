//! Typed input
//!
//! Line-based prompts over any reader/writer pair, stdin/stdout in the binary.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Prompts the learner and reads typed lines
pub struct TypedInput<R, W> {
    reader: R,
    writer: W,
}

impl TypedInput<StdinLock<'static>, Stdout> {
    /// Prompt on stdout, read from stdin
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TypedInput<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writer used for prompts and status lines
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Print a prompt and read one line
    ///
    /// Returns `None` at end of input. The trailing newline is stripped.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the line fails.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for the code-words of a word
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure.
    pub fn read_response(&mut self, word: &str) -> io::Result<Option<String>> {
        self.prompt_line(&format!("{word}\n> "))
    }

    /// Ask a yes/no question defaulting to yes
    ///
    /// Empty input, `y` and `yes` accept; end of input also accepts.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.prompt_line(&format!("{prompt} [y]/n "))?;

        Ok(answer.is_none_or(|answer| {
            matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
        }))
    }
}
