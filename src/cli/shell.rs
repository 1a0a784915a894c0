//! Interactive shell
//!
//! Reads commands line by line and dispatches them to the command handlers.
//! Errors from the core are reported and the loop carries on; only I/O
//! failures end the session early.

use std::io::BufRead;

use pcshop::core::models::{Catalog, Computer, Customer, RemovalPolicy};
use pcshop::output::{OperationResult, OutputMode, Render};

use super::commands;
use super::prompt::{Prompter, is_exit};

/// State of one shopping session
pub struct Session<'c, R> {
    /// The catalog, read-only for the whole session
    pub catalog: &'c Catalog,
    /// The shopper
    pub customer: Customer<'c>,
    /// Most recently built computer
    pub current: Option<Computer<'c>>,
    /// How results are printed
    pub mode: OutputMode,
    /// How multi-id removal handles failures
    pub removal: RemovalPolicy,
    /// Source of user input
    pub input: Prompter<R>,
}

impl<'c, R: BufRead> Session<'c, R> {
    /// Start a session for a customer
    pub const fn new(
        catalog: &'c Catalog,
        customer: Customer<'c>,
        mode: OutputMode,
        removal: RemovalPolicy,
        input: Prompter<R>,
    ) -> Self {
        Self {
            catalog,
            customer,
            current: None,
            mode,
            removal,
            input,
        }
    }

    /// Run the command loop until `exit` or end of input
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut prompt = format!(
            "Hello {}, how can I help you today? Enter 'help' to see all commands: ",
            self.customer.name()
        );

        while let Some(line) = self.input.ask(&prompt)? {
            prompt = "Enter a command: ".to_string();

            let mut words = line.split_whitespace();
            let Some(command) = words.next() else {
                continue;
            };
            let args: Vec<&str> = words.collect();
            log::debug!("command '{command}' with {} argument(s)", args.len());

            if is_exit(command) {
                break;
            }

            match command {
                "help" => commands::help(self.mode),
                "list" => commands::list(self, &args)?,
                "details" => commands::details(self, &args)?,
                "compatibility" => commands::compatibility(self, &args)?,
                "build" => commands::build(self)?,
                "remove" => commands::remove(self, &args)?,
                "compatibility-build" => commands::compatibility_build(self),
                "budget" => commands::budget(self, &args)?,
                "purchase" => commands::purchase(self, &args)?,
                "cart" => commands::cart(self),
                "checkout" => commands::checkout(self),
                other => OperationResult::failed(format!(
                    "Unknown command '{other}'. Enter 'help' to see all commands."
                ))
                .render(self.mode),
            }
        }

        Ok(())
    }

    /// Resolve one argument, either given inline or prompted for
    ///
    /// An inline value is checked once. A prompted value is asked for again
    /// after each rejection until it is accepted or the user types `exit`.
    /// The rejection message is printed each time.
    pub fn resolve<T>(
        &mut self,
        inline: Option<&str>,
        prompt: &str,
        mut accept: impl FnMut(&Self, &str) -> Result<T, String>,
    ) -> anyhow::Result<Option<T>> {
        if let Some(value) = inline {
            return Ok(match accept(&*self, value) {
                Ok(v) => Some(v),
                Err(msg) => {
                    OperationResult::failed(msg).render(self.mode);
                    None
                },
            });
        }

        while let Some(answer) = self.input.field(prompt)? {
            match accept(&*self, &answer) {
                Ok(v) => return Ok(Some(v)),
                Err(msg) => OperationResult::failed(msg).render(self.mode),
            }
        }
        Ok(None)
    }
}
