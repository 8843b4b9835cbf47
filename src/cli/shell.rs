//! Interactive form loop.
//!
//! Mirrors a form-based front end: pick an action, then fill in its fields
//! one per line. Each field is read whole, so names may contain spaces.
//! End of input behaves like closing the window.

use std::io::{self, BufRead, Write};

use tracing::{debug, instrument};

use crate::application::Session;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::expand_path;

const HELP: &[(&str, &str)] = &[
    ("add", "add a family member under a parent"),
    ("delete", "delete a family member and everyone below"),
    ("show", "visualize the family tree"),
    ("save [path]", "save the displayed tree to a file"),
    ("restart", "start over with a new root member"),
    ("help", "show this list"),
    ("quit", "leave"),
];

/// A parsed menu line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add,
    Delete,
    Show,
    Save(Option<String>),
    Restart,
    Help,
    Quit,
    Unknown(String),
}

impl Action {
    /// Parse one menu line; `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let action = match verb.to_ascii_lowercase().as_str() {
            "add" | "a" => Action::Add,
            "delete" | "del" | "d" => Action::Delete,
            "show" | "s" | "visualize" => Action::Show,
            "save" => Action::Save((!rest.is_empty()).then(|| rest.to_string())),
            "restart" => Action::Restart,
            "help" | "h" | "?" => Action::Help,
            "quit" | "exit" | "q" => Action::Quit,
            _ => Action::Unknown(line.to_string()),
        };
        Some(action)
    }
}

pub struct Shell<R, W> {
    input: R,
    out: W,
    session: Session,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, session: Session) -> Self {
        Self {
            input,
            out,
            session,
        }
    }

    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.out)
    }

    /// Run until `quit` or end of input.
    ///
    /// With `root` given the welcome form is skipped; invalid root arguments
    /// are a usage error. A welcome form left empty ends the run without a tree.
    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self, root: Option<(&str, &str)>) -> CliResult<()> {
        match root {
            Some((name, birthdate)) => {
                self.session
                    .start(name, birthdate)
                    .map_err(|e| CliError::Usage(e.to_string()))?;
            }
            None => {
                if !self.welcome().map_err(terminal_err)? {
                    return Ok(());
                }
            }
        }
        self.menu_loop().map_err(terminal_err)
    }

    /// Ask for the root member; false if the form was left incomplete.
    fn welcome(&mut self) -> io::Result<bool> {
        output::header(&mut self.out, "Welcome to the family tree generator!")?;
        output::detail(
            &mut self.out,
            "Please enter your name and birthdate to generate your family tree:",
        )?;
        if self.root_form()? {
            return Ok(true);
        }
        output::info(&mut self.out, "No family tree started.\n")?;
        Ok(false)
    }

    fn root_form(&mut self) -> io::Result<bool> {
        let Some(name) = self.read_field("Your Name:")? else {
            return Ok(false);
        };
        let Some(birthdate) = self.read_field("Your Birthdate:")? else {
            return Ok(false);
        };
        Ok(self.session.start(&name, &birthdate).is_ok())
    }

    fn menu_loop(&mut self) -> io::Result<()> {
        output::detail(&mut self.out, "Type `help` for the list of actions.")?;
        loop {
            let Some(line) = self.read_field("famtree>")? else {
                break;
            };
            let Some(action) = Action::parse(&line) else {
                continue;
            };
            debug!(?action, "menu");
            match action {
                Action::Add => {
                    if !self.add_form()? {
                        break;
                    }
                }
                Action::Delete => {
                    if !self.delete_form()? {
                        break;
                    }
                }
                Action::Show => self.show()?,
                Action::Save(path) => self.save(path.as_deref())?,
                Action::Restart => self.restart()?,
                Action::Help => self.help()?,
                Action::Quit => break,
                Action::Unknown(line) => output::warning(
                    &mut self.out,
                    &format!("unknown action `{line}`, type `help` for the list"),
                )?,
            }
        }
        Ok(())
    }

    fn add_form(&mut self) -> io::Result<bool> {
        let Some(parent) = self.read_field("Enter parent's name:")? else {
            return Ok(false);
        };
        let Some(child) = self.read_field("Enter child's name:")? else {
            return Ok(false);
        };
        let Some(birthdate) = self.read_field("Enter child's birthdate:")? else {
            return Ok(false);
        };
        match self.session.add_member(&parent, &child, &birthdate) {
            Ok(()) => output::success(&mut self.out, "Family member added successfully.")?,
            Err(e) => output::error(&mut self.out, &e)?,
        }
        Ok(true)
    }

    fn delete_form(&mut self) -> io::Result<bool> {
        let Some(name) = self.read_field("Enter member's name to delete:")? else {
            return Ok(false);
        };
        match self.session.delete_member(&name) {
            Ok(()) => output::success(&mut self.out, "Family member deleted successfully.")?,
            Err(e) => output::error(&mut self.out, &e)?,
        }
        Ok(true)
    }

    fn show(&mut self) -> io::Result<()> {
        match self.session.visualize() {
            Ok(outline) => output::info(&mut self.out, outline),
            Err(e) => output::error(&mut self.out, &e),
        }
    }

    fn save(&mut self, path: Option<&str>) -> io::Result<()> {
        let path = path.map(expand_path);
        match self.session.save_snapshot(path.as_deref()) {
            Ok(saved) => output::success(
                &mut self.out,
                &format!("Family tree saved as {}", saved.display()),
            ),
            Err(e) => output::error(&mut self.out, &e),
        }
    }

    fn restart(&mut self) -> io::Result<()> {
        output::header(&mut self.out, "Start over")?;
        if self.root_form()? {
            output::success(&mut self.out, "Started a new family tree.")
        } else {
            output::warning(&mut self.out, "Start over cancelled, keeping the current tree.")
        }
    }

    fn help(&mut self) -> io::Result<()> {
        output::header(&mut self.out, "Actions")?;
        for (action, description) in HELP {
            output::detail(&mut self.out, &format!("{action:<12} {description}"))?;
        }
        Ok(())
    }

    /// Prompt and read one line without its line break; `None` at end of input.
    fn read_field(&mut self, label: &str) -> io::Result<Option<String>> {
        output::prompt(&mut self.out, label)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        let line = line.trim_end_matches(&['\n', '\r'][..]).to_string();
        Ok(Some(line))
    }
}

fn terminal_err(e: io::Error) -> CliError {
    CliError::io("terminal I/O", e)
}
