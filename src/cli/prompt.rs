//! Line-oriented prompting
//!
//! Every prompt in the shell goes through [`Prompter`], which reads from any
//! `BufRead` so the shell can be driven from stdin or from a test buffer.

use std::io::{BufRead, Write};

use pcshop::output::OutputMode;

/// Token that abandons the current command at any prompt
pub const EXIT_TOKEN: &str = "exit";

/// Whether an answer is the exit token, in any letter case
pub fn is_exit(answer: &str) -> bool {
    answer.eq_ignore_ascii_case(EXIT_TOKEN)
}

/// Reads answers to prompts
pub struct Prompter<R> {
    reader: R,
    mode: OutputMode,
}

impl<R: BufRead> Prompter<R> {
    /// Create a prompter over a reader
    pub const fn new(reader: R, mode: OutputMode) -> Self {
        Self { reader, mode }
    }

    /// Show a prompt and read one line
    ///
    /// Returns `None` at end of input. In JSON mode prompts go to stderr so
    /// stdout stays machine-readable.
    pub fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        if self.mode == OutputMode::Json {
            eprint!("{prompt}");
            std::io::stderr().flush()?;
        } else {
            print!("{prompt}");
            std::io::stdout().flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`ask`](Self::ask), but `exit` also yields `None`
    pub fn field(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        Ok(self.ask(prompt)?.filter(|answer| !is_exit(answer)))
    }
}
