/*!
# Argot: Usage Text.

Read-only `Display` adapters for rendering help screens. The parser never
uses these itself; what to show, and when, is up to the caller.
*/

use crate::{
	Command,
	Registry,
};
use std::fmt;



/// # Section Indent.
const INDENT: &str = "    ";

/// # Name/Help Gap.
const GAP: usize = 4;



#[derive(Debug, Clone, Copy)]
/// # Command Usage.
///
/// This renders a usage line for a [`Command`], followed by any options,
/// arguments, and subcommands it has, along with their help text.
///
/// ## Examples
///
/// ```
/// use argot::{Argument, Command, Opt};
///
/// let cmd = Command::new("generate")
///     .with_option(Opt::switch("verbose").with_help("Say more."))
///     .with_argument(Argument::new("name"));
///
/// assert_eq!(
///     cmd.usage().to_string(),
///     "USAGE:\n    generate [--verbose] <name>\n\nOPTIONS:\n    --verbose    Say more.\n\nARGUMENTS:\n    <name>\n",
/// );
/// ```
pub struct Usage<'a>(&'a Command);

impl fmt::Display for Usage<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let cmd = self.0;

		// The synopsis.
		write!(f, "USAGE:\n{INDENT}{}", cmd.name())?;
		for o in cmd.options() { write!(f, " [{}]", OptForm(o))?; }
		for a in cmd.arguments() { write!(f, " <{}>", a.name())?; }
		if cmd.has_subcommands() { f.write_str(" [<subcommand>]")?; }
		f.write_str("\n")?;

		// The details.
		write_section(
			f,
			"OPTIONS",
			cmd.options().iter().map(|o| (OptForm(o).to_string(), o.help())),
		)?;
		write_section(
			f,
			"ARGUMENTS",
			cmd.arguments().iter().map(|a| (format!("<{}>", a.name()), a.help())),
		)?;
		write_section(
			f,
			"SUBCOMMANDS",
			cmd.subcommands().iter().map(|c| (c.name().to_owned(), c.help())),
		)
	}
}

impl<'a> Usage<'a> {
	#[must_use]
	/// # New.
	pub const fn new(cmd: &'a Command) -> Self { Self(cmd) }
}



#[derive(Debug, Clone, Copy)]
/// # Command List.
///
/// This renders a summary of the commands in a [`Registry`]. An empty
/// registry renders as an empty string.
///
/// ## Examples
///
/// ```
/// use argot::{Command, Registry};
///
/// let reg = Registry::default()
///     .with_command(Command::new("run").with_help("Run it."))
///     .unwrap()
///     .with_names(["help"])
///     .unwrap();
///
/// assert_eq!(
///     reg.list().to_string(),
///     "\nCOMMANDS:\n    help\n    run     Run it.\n",
/// );
/// ```
pub struct CommandList<'a>(&'a Registry);

impl fmt::Display for CommandList<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_section(
			f,
			"COMMANDS",
			self.0.iter().map(|c| (c.name().to_owned(), c.help())),
		)
	}
}

impl<'a> CommandList<'a> {
	#[must_use]
	/// # New.
	pub const fn new(reg: &'a Registry) -> Self { Self(reg) }
}



/// # Option Form.
///
/// Long form, plus a value placeholder if the option takes one.
struct OptForm<'a>(&'a crate::Opt);

impl fmt::Display for OptForm<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = self.0.name();
		if self.0.requires_value() { write!(f, "--{name}=<{name}>") }
		else { write!(f, "--{name}") }
	}
}

/// # Write Section.
///
/// Write a titled list of names with their help text, aligned in two
/// columns. Nothing is written if there are no rows.
fn write_section<'a, I>(f: &mut fmt::Formatter<'_>, title: &str, rows: I)
-> fmt::Result
where I: Iterator<Item=(String, &'a str)> {
	let rows: Vec<(String, &str)> = rows.collect();
	if rows.is_empty() { return Ok(()); }

	let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);

	write!(f, "\n{title}:\n")?;
	for (k, help) in rows {
		if help.is_empty() { writeln!(f, "{INDENT}{k}")?; }
		else { writeln!(f, "{INDENT}{k:<width$}{:GAP$}{help}", "")?; }
	}

	Ok(())
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		Argument,
		Opt,
	};

	#[test]
	fn t_usage() {
		let cmd = Command::new("file")
			.with_help("Work with files.")
			.with_options([
				Opt::switch("force").with_help("Overwrite."),
				Opt::with_value("mode").with_help("Permissions."),
			])
			.with_argument(Argument::new("root").with_help("Base directory."))
			.with_subcommands([
				Command::new("new").with_help("Create a file."),
				Command::new("rm"),
			]);

		assert_eq!(
			cmd.usage().to_string(),
			"USAGE:
    file [--force] [--mode=<mode>] <root> [<subcommand>]

OPTIONS:
    --force          Overwrite.
    --mode=<mode>    Permissions.

ARGUMENTS:
    <root>    Base directory.

SUBCOMMANDS:
    new    Create a file.
    rm
",
		);
	}

	#[test]
	fn t_usage_bare() {
		assert_eq!(Command::new("help").usage().to_string(), "USAGE:\n    help\n");
	}

	#[test]
	fn t_list() {
		assert_eq!(Registry::default().list().to_string(), "");

		let reg = Registry::default()
			.with_commands([
				Command::new("generate").with_help("Make something."),
				Command::new("go").with_help("Go."),
			])
			.expect("Registration failed.");
		assert_eq!(
			reg.list().to_string(),
			"\nCOMMANDS:\n    generate    Make something.\n    go          Go.\n",
		);
	}
}
