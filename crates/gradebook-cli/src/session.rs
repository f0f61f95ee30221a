//! The interactive command layer.
//!
//! A [`Session`] owns the registry plus the current search/sort selection and
//! turns parsed [`Command`]s into registry calls. Handlers never touch the
//! records directly; they react to what the registry returns.

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;

use gradebook_core::config::GradebookConfig;
use gradebook_core::model::{SortKey, StudentId};
use gradebook_core::registry::Registry;
use gradebook_core::report::{build_titled, ReportModel};
use gradebook_core::view::View;
use gradebook_report::create_renderer;

use crate::commands::{parse_sort, student_table, text_chart};

/// One line of shell input, parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { name: String, grades: String },
    Update { id: StudentId, name: String, grades: String },
    Delete(StudentId),
    Show(StudentId),
    List,
    Search(String),
    Sort(Option<SortKey>),
    Report,
    Chart,
    Export { format: String, path: PathBuf },
    Help,
    Quit,
}

/// Split `NAME | GRADES`; a missing `|` means no grades.
fn split_entry(rest: &str) -> (String, String) {
    match rest.split_once('|') {
        Some((name, grades)) => (name.trim().to_string(), grades.trim().to_string()),
        None => (rest.trim().to_string(), String::new()),
    }
}

fn parse_id(arg: &str) -> Result<StudentId> {
    anyhow::ensure!(!arg.is_empty(), "missing student id");
    arg.parse().map_err(|e: String| anyhow::anyhow!("{}", e))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "add" => {
                let (name, grades) = split_entry(rest);
                Command::Add { name, grades }
            }
            "update" | "edit" => {
                let (id, entry) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let (name, grades) = split_entry(entry);
                Command::Update {
                    id: parse_id(id)?,
                    name,
                    grades,
                }
            }
            "delete" | "rm" => Command::Delete(parse_id(rest)?),
            "show" => Command::Show(parse_id(rest)?),
            "list" | "ls" => Command::List,
            "search" | "find" => Command::Search(rest.to_string()),
            "sort" => Command::Sort(parse_sort(Some(rest))?),
            "report" => Command::Report,
            "chart" => Command::Chart,
            "export" => {
                let mut args = rest.split_whitespace();
                let (Some(format), Some(path), None) = (args.next(), args.next(), args.next())
                else {
                    anyhow::bail!("usage: export FORMAT PATH");
                };
                Command::Export {
                    format: format.to_string(),
                    path: PathBuf::from(path),
                }
            }
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => anyhow::bail!("unknown command: {other} (type `help` for a list)"),
        };
        Ok(command)
    }
}

/// Whether the shell loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A registry plus the view state of one interactive session.
pub struct Session {
    registry: Registry,
    view: View,
    config: GradebookConfig,
}

impl Session {
    pub fn new(registry: Registry, config: GradebookConfig) -> Self {
        let view = View::new("", config.default_sort);
        Self {
            registry,
            view,
            config,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Build a report over the current view.
    pub fn report(&self) -> ReportModel {
        build_titled(
            self.view.apply(self.registry.all()),
            &self.config.report_title,
        )
    }

    /// Run one command, writing any output to `out`.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        match command {
            Command::Add { name, grades } => {
                let id = self.registry.add(&name, &grades)?;
                writeln!(out, "Student added: {} (id {id})", name.trim())?;
            }
            Command::Update { id, name, grades } => {
                self.registry.update(id, &name, &grades)?;
                writeln!(out, "Student updated: {} (id {id})", name.trim())?;
            }
            Command::Delete(id) => {
                let removed = self.registry.delete(id)?;
                writeln!(out, "Student deleted: {} (id {id})", removed.name())?;
            }
            Command::Show(id) => {
                let record = self
                    .registry
                    .get(id)
                    .ok_or(gradebook_core::RegistryError::NotFound(id))?;
                writeln!(out, "Name: {}", record.name())?;
                writeln!(out, "Grades: {}", record.grades())?;
                writeln!(out, "Edit with: update {id} {} | {}", record.name(), record.grades())?;
            }
            Command::List => {
                let records = self.view.apply(self.registry.all());
                if records.is_empty() {
                    writeln!(out, "No students to show.")?;
                } else {
                    writeln!(out, "{}", student_table(&records))?;
                }
                writeln!(
                    out,
                    "{} of {} students ({})",
                    records.len(),
                    self.registry.len(),
                    self.view.describe()
                )?;
            }
            Command::Search(term) => {
                self.view.search = term.trim().to_string();
                let matches = self.view.apply(self.registry.all()).len();
                if self.view.search.is_empty() {
                    writeln!(out, "Search cleared.")?;
                } else {
                    writeln!(out, "Search \"{}\": {matches} match(es).", self.view.search)?;
                }
            }
            Command::Sort(key) => {
                self.view.sort = key;
                match key {
                    Some(key) => writeln!(out, "Sorting by {}.", key.label())?,
                    None => writeln!(out, "Sort cleared.")?,
                }
            }
            Command::Report => {
                write!(out, "{}", self.report().to_text())?;
            }
            Command::Chart => {
                let report = self.report();
                write!(out, "{}", text_chart(&report.series, &self.config.chart_title))?;
            }
            Command::Export { format, path } => {
                let renderer = create_renderer(&format, &self.config.chart_title)?;
                renderer.write_to(&self.report(), &path)?;
                writeln!(out, "Exported {} report to {}", renderer.name(), path.display())?;
            }
            Command::Help => {
                out.write_all(HELP.as_bytes())?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

pub const HELP: &str = "\
Commands:
  add NAME | GRADES           add a student, e.g. add Alice | 85, 92, 78
  update ID NAME | GRADES     replace a student's name and grades
  delete ID                   remove a student
  show ID                     print a student's name and grades
  list                        show students in the current view
  search [TERM]               filter by name (no term clears)
  sort [KEY]                  name, average-desc, average-asc, highest-desc, lowest-asc
  report                      print the text report for the current view
  chart                       print a bar chart of averages
  export FORMAT PATH          write text, json, html or svg
  help                        show this list
  quit                        leave the shell
";
