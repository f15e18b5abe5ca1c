//! The interactive menu loop.
//!
//! The shell is a two-state machine: it sits in `AwaitingChoice`, reads one menu line,
//! runs the chosen action and comes back, until the user picks Exit (or input ends),
//! which moves it to `Exited`. Anything the user gets wrong (unknown id, non-numeric
//! text, wrong kind of item) is reported and the loop carries on; only failures of the
//! terminal itself end the session with an error.

use super::render::{
    render_banner, render_error, render_items, render_menu, render_messages, render_prompt,
    render_receipt,
};
use libranet::api::LibraApi;
use libranet::commands::CmdResult;
use libranet::config::LibraConfig;
use libranet::error::{LibraError, Result};
use libranet::model::ItemId;
use libranet::store::ItemStore;
use std::io::{BufRead, Write};

const MENU: [(u8, &str); 6] = [
    (1, "View all items"),
    (2, "Borrow item"),
    (3, "Return item"),
    (4, "Play audiobook"),
    (5, "Archive magazine issue"),
    (6, "Exit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ShellState {
    AwaitingChoice,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    ViewAll,
    Borrow,
    Return,
    Play,
    Archive,
    Exit,
}

impl MenuChoice {
    fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::ViewAll),
            2 => Some(MenuChoice::Borrow),
            3 => Some(MenuChoice::Return),
            4 => Some(MenuChoice::Play),
            5 => Some(MenuChoice::Archive),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum ChoiceInput {
    Choice(MenuChoice),
    NotANumber,
    OutOfRange(i64),
}

fn parse_choice(line: &str) -> ChoiceInput {
    match line.trim().parse::<i64>() {
        Ok(n) => MenuChoice::from_number(n)
            .map(ChoiceInput::Choice)
            .unwrap_or(ChoiceInput::OutOfRange(n)),
        Err(_) => ChoiceInput::NotANumber,
    }
}

fn parse_days(line: &str) -> Result<i64> {
    line.trim().parse().map_err(|_| {
        LibraError::InvalidInput(format!("'{}' is not a valid number of days", line.trim()))
    })
}

pub(super) struct Shell<S: ItemStore, R: BufRead, W: Write> {
    api: LibraApi<S>,
    input: R,
    output: W,
    config: LibraConfig,
    state: ShellState,
}

impl<S: ItemStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: LibraApi<S>, input: R, output: W, config: LibraConfig) -> Self {
        Self {
            api,
            input,
            output,
            config,
            state: ShellState::AwaitingChoice,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ShellState {
        self.state
    }

    #[cfg(test)]
    pub fn into_api(self) -> LibraApi<S> {
        self.api
    }

    pub fn run(&mut self) -> Result<()> {
        render_banner(&mut self.output)?;
        while self.state == ShellState::AwaitingChoice {
            self.step()?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// One loop iteration: show the menu, read a choice, act on it.
    fn step(&mut self) -> Result<()> {
        render_menu(&mut self.output, &MENU)?;
        let Some(line) = self.prompt_line("Enter choice")? else {
            return self.exit();
        };

        let choice = match parse_choice(&line) {
            ChoiceInput::Choice(choice) => choice,
            ChoiceInput::NotANumber => {
                writeln!(self.output, "Invalid input. Try again.")?;
                return Ok(());
            }
            ChoiceInput::OutOfRange(n) => {
                tracing::debug!(choice = n, "menu choice out of range");
                writeln!(self.output, "Invalid choice. Try again.")?;
                return Ok(());
            }
        };

        tracing::debug!(?choice, "dispatching menu choice");
        match self.dispatch(choice) {
            Err(e) if e.is_user_facing() => {
                tracing::debug!(error = %e, "action rejected");
                render_error(&mut self.output, &e)?;
                Ok(())
            }
            other => other,
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::ViewAll => {
                let result = self.api.list_items()?;
                self.show(&result)
            }
            MenuChoice::Borrow => {
                let Some(id) = self.prompt_id("Enter item ID to borrow")? else {
                    return self.exit();
                };
                let result = self.api.borrow_item(id)?;
                self.show(&result)
            }
            MenuChoice::Return => {
                let Some(id) = self.prompt_id("Enter item ID to return")? else {
                    return self.exit();
                };
                // Unknown ids are reported before asking for the day count.
                self.api.item(id)?;
                let Some(line) = self.prompt_line("Enter actual borrowed days")? else {
                    return self.exit();
                };
                let days = parse_days(&line)?;
                let result = self.api.return_item(id, days)?;
                self.show(&result)
            }
            MenuChoice::Play => {
                let Some(id) = self.prompt_id("Enter audiobook ID")? else {
                    return self.exit();
                };
                let result = self.api.play_audiobook(id)?;
                self.show(&result)
            }
            MenuChoice::Archive => {
                let Some(id) = self.prompt_id("Enter magazine ID")? else {
                    return self.exit();
                };
                let result = self.api.archive_issue(id)?;
                self.show(&result)
            }
            MenuChoice::Exit => self.exit(),
        }
    }

    fn exit(&mut self) -> Result<()> {
        writeln!(self.output, "Exiting LibraNet. Goodbye!")?;
        self.state = ShellState::Exited;
        Ok(())
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        if result.total_fines.is_some() {
            render_items(
                &mut self.output,
                &result.listed_items,
                result.total_fines,
                &self.config,
            )?;
        }
        if let Some(receipt) = &result.receipt {
            render_receipt(&mut self.output, receipt, &self.config)?;
        }
        render_messages(&mut self.output, &result.messages)?;
        Ok(())
    }

    /// Prints `prompt` and reads one line. `None` means input has ended.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        render_prompt(&mut self.output, prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            tracing::debug!("input closed");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_id(&mut self, prompt: &str) -> Result<Option<ItemId>> {
        match self.prompt_line(prompt)? {
            Some(line) => line.parse().map(Some),
            None => Ok(None),
        }
    }
}
