//! Subcommand parsing and dispatch.
//!
//! Usage:
//! ```text
//! csv-filter [options] cut <field>...
//! csv-filter [options] (prefix|match|regex) (<field> <pattern>)...
//! ```
//!
//! Supported commands:
//! - `cut` (`c`) - Emit the listed fields, in order
//! - `prefix` (`p`) - Keep rows where a field starts with a pattern
//! - `match` (`m`) - Keep rows where a field equals a pattern
//! - `regex` (`r`, `re`, `regexp`) - Keep rows where a field contains a regex match
//!
//! Everything is validated here, before the first row is read: argument
//! counts, field indices and regex syntax.

use tracing::debug;

use crate::combinator::MatchMode;
use crate::config::Config;
use crate::error::{FilterError, Result};
use crate::field::parse_field_indices;
use crate::predicate::{FieldFilter, PredicateKind, build_filters};
use crate::transform::{CutTransform, FilterTransform, RowTransform};

/// Parsed subcommand with validated arguments.
#[derive(Debug, Clone)]
pub enum Command {
    /// cut <field>...
    Cut { fields: Vec<usize> },
    /// prefix|match|regex (<field> <pattern>)...
    Filter {
        kind: PredicateKind,
        filters: Vec<FieldFilter>,
    },
}

impl Command {
    /// Get the command name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Cut { .. } => "cut",
            Command::Filter { kind, .. } => kind.name(),
        }
    }

    /// Build the transform this command describes.
    pub fn into_transform(self, config: &Config) -> Box<dyn RowTransform> {
        match self {
            Command::Cut { fields } => Box::new(CutTransform::new(fields)),
            Command::Filter { kind, filters } => {
                let mode = MatchMode::from_match_all(config.match_all);
                Box::new(FilterTransform::new(kind, mode, filters))
            }
        }
    }
}

/// The subcommand families, before their arguments are looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandName {
    Cut,
    Predicate(PredicateKind),
}

/// Resolve a subcommand name or alias.
fn resolve_name(name: &str) -> Result<CommandName> {
    match name {
        "c" | "cut" => Ok(CommandName::Cut),
        "p" | "prefix" => Ok(CommandName::Predicate(PredicateKind::Prefix)),
        "m" | "match" => Ok(CommandName::Predicate(PredicateKind::Exact)),
        "r" | "re" | "regex" | "regexp" => Ok(CommandName::Predicate(PredicateKind::Regex)),
        _ => Err(FilterError::UnknownCommand(name.to_string())),
    }
}

/// Parse a subcommand name and its arguments.
pub fn parse_command<S: AsRef<str>>(name: &str, args: &[S]) -> Result<Command> {
    match resolve_name(name)? {
        CommandName::Cut => {
            if args.is_empty() {
                return Err(FilterError::InvalidArgumentCount {
                    command: "cut",
                    expected: "one or more <field> arguments",
                    count: 0,
                });
            }
            let fields = parse_field_indices(args)?;
            Ok(Command::Cut { fields })
        }
        CommandName::Predicate(kind) => {
            let filters = build_filters(kind, args)?;
            Ok(Command::Filter { kind, filters })
        }
    }
}

/// Parse a subcommand and build its transform in one step.
///
/// Fails fast on anything the command line got wrong, so no input is
/// consumed for a run that cannot succeed.
pub fn build_transform<S: AsRef<str>>(
    name: &str,
    args: &[S],
    config: &Config,
) -> Result<Box<dyn RowTransform>> {
    let command = parse_command(name, args)?;

    if config.single && !matches!(&command, Command::Cut { fields } if fields.len() == 1) {
        return Err(FilterError::Usage(
            "--single only applies to cut with exactly one field".to_string(),
        ));
    }

    match &command {
        Command::Cut { fields } => debug!(command = "cut", ?fields, "built transform"),
        Command::Filter { kind, filters } => debug!(
            command = kind.name(),
            filters = filters.len(),
            mode = MatchMode::from_match_all(config.match_all).name(),
            "built transform"
        ),
    }

    Ok(command.into_transform(config))
}
