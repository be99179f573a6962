use crate::core::catalog::Catalog;
use crate::domain::model::Item;
use crate::utils::error::{Result, ShopError};
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const DEFAULT_PROMPT: &str = "What would you like to do? ";

/// Every verb the command loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SearchByName,
    SearchByHashtag,
    AddItem,
    RemoveItem,
    Checkout,
    Exit,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::SearchByName,
        Action::SearchByHashtag,
        Action::AddItem,
        Action::RemoveItem,
        Action::Checkout,
        Action::Exit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::SearchByName => "search_by_name",
            Action::SearchByHashtag => "search_by_hashtag",
            Action::AddItem => "add_item",
            Action::RemoveItem => "remove_item",
            Action::Checkout => "checkout",
            Action::Exit => "exit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ShopError;

    fn from_str(verb: &str) -> Result<Self> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == verb)
            .ok_or_else(|| ShopError::UnknownAction {
                verb: verb.to_string(),
            })
    }
}

/// Splits a console line into verb and argument at the first space.
///
/// Only the line terminator is stripped; the argument is passed on verbatim.
pub fn parse_line(line: &str) -> (&str, &str) {
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);

    line.split_once(' ').unwrap_or((line, ""))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    CheckedOut { total: u64 },
    Exited,
}

enum Step {
    Continue,
    Finish(SessionOutcome),
}

/// Interactive shopping session over any line reader and output sink.
pub struct Session<R: BufRead, W: Write> {
    catalog: Catalog,
    input: R,
    output: W,
    prompt: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_parts(self) -> (Catalog, W) {
        (self.catalog, self.output)
    }

    /// Runs until `checkout`, `exit` or end of input.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        tracing::info!("🛒 Session started with {} catalog items", self.catalog.items().len());

        loop {
            write!(self.output, "{}", self.prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("End of input, leaving session");
                writeln!(self.output)?;
                return self.finish_exit();
            }

            let (verb, rest) = parse_line(&line);
            let action = match verb.parse::<Action>() {
                Ok(action) => action,
                Err(e) => {
                    tracing::debug!("{}", e);
                    writeln!(self.output, "{}", e.user_friendly_message())?;
                    continue;
                }
            };

            tracing::debug!("Dispatching {} with argument '{}'", action, rest);
            if let Step::Finish(outcome) = self.dispatch(action, rest)? {
                tracing::info!("Session finished: {:?}", outcome);
                return Ok(outcome);
            }
        }
    }

    fn dispatch(&mut self, action: Action, arg: &str) -> Result<Step> {
        match action {
            Action::SearchByName => {
                let found = self.catalog.search_by_name(arg);
                self.print_items(&found)?;
            }
            Action::SearchByHashtag => {
                let found = self.catalog.search_by_hashtag(arg);
                self.print_items(&found)?;
            }
            Action::AddItem => match self.catalog.add_item(arg) {
                Ok(item) => writeln!(self.output, "Added '{}' to the cart.", item.name())?,
                Err(e) => self.report(e)?,
            },
            Action::RemoveItem => match self.catalog.remove_item(arg) {
                Ok(item) => writeln!(self.output, "Removed '{}' from the cart.", item.name())?,
                Err(e) => self.report(e)?,
            },
            Action::Checkout => {
                let total = self.catalog.checkout();
                writeln!(self.output, "The total of the purchase is {}.", total)?;
                writeln!(self.output, "Thank you for shopping with us!")?;
                return Ok(Step::Finish(SessionOutcome::CheckedOut { total }));
            }
            Action::Exit => return self.finish_exit().map(Step::Finish),
        }
        Ok(Step::Continue)
    }

    fn finish_exit(&mut self) -> Result<SessionOutcome> {
        writeln!(self.output, "Goodbye!")?;
        Ok(SessionOutcome::Exited)
    }

    fn print_items(&mut self, items: &[Item]) -> Result<()> {
        if items.is_empty() {
            writeln!(self.output, "No matching items.")?;
        }
        for item in items {
            writeln!(self.output, "{}", item)?;
        }
        Ok(())
    }

    /// Cart errors are shown to the user; the session carries on.
    fn report(&mut self, error: ShopError) -> Result<()> {
        tracing::warn!("⚠️ {} ({:?})", error, error.category());
        writeln!(self.output, "Error: {}", error.user_friendly_message())?;
        Ok(())
    }
}
