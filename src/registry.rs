/*!
# Argot: Command Registry.
*/

use crate::{
	parse,
	validate,
	Command,
	CommandList,
	ModelError,
	ParseError,
	ParsedCommand,
};
use std::collections::BTreeSet;



#[derive(Debug, Clone, Default)]
/// # Command Registry.
///
/// This holds the top-level [`Command`]s a parser knows about, and is the
/// entry point for parsing.
///
/// Commands are validated on the way in (see [`validate`]) so problems
/// with the model surface at startup rather than in front of a user.
/// Registration requires `&mut self` (or ownership), so once a registry is
/// shared for parsing, it can no longer change.
///
/// Commands are kept in name order; the order they were registered in has
/// no bearing on anything.
///
/// ## Examples
///
/// ```
/// use argot::{Argument, Command, Opt, ParseError, Registry};
///
/// let reg = Registry::default()
///     .with_command(
///         Command::new("generate")
///             .with_option(Opt::with_value("outdir"))
///             .with_argument(Argument::new("name"))
///     )
///     .unwrap()
///     .with_names(["help", "version"])
///     .unwrap();
///
/// let parsed = reg.parse(&["generate", "--outdir=out", "thing"]).unwrap();
/// assert_eq!(parsed.value("outdir"), Some("out"));
/// assert_eq!(parsed.argument("name"), Some("thing"));
///
/// assert_eq!(
///     reg.parse(&["generate", "thing", "--outdir=out"]),
///     Err(ParseError::OptionNotAllowedHere {
///         command: "generate".to_owned(),
///         token: "--outdir=out".to_owned(),
///     }),
/// );
/// ```
pub struct Registry {
	/// # Commands.
	commands: BTreeSet<Command>,
}

impl Registry {
	/// # With Command.
	///
	/// Register a command, builder-style.
	///
	/// ## Errors
	///
	/// This will return an error if the command is invalid or its name is
	/// already taken.
	pub fn with_command(mut self, cmd: Command) -> Result<Self, ModelError> {
		self.register(cmd)?;
		Ok(self)
	}

	/// # With Commands.
	///
	/// Register one or more commands, builder-style.
	///
	/// ## Errors
	///
	/// This will return an error if any of the commands are invalid or
	/// share a name.
	pub fn with_commands<I: IntoIterator<Item=Command>>(self, cmds: I)
	-> Result<Self, ModelError> {
		cmds.into_iter().try_fold(self, Self::with_command)
	}

	/// # With Names.
	///
	/// Register one or more bare commands (no options, arguments, or
	/// subcommands) by name, builder-style.
	///
	/// ## Errors
	///
	/// This will return an error if any of the names are invalid or taken.
	pub fn with_names<I, S>(self, names: I) -> Result<Self, ModelError>
	where I: IntoIterator<Item=S>, S: Into<String> {
		names.into_iter().try_fold(self, |acc, n| acc.with_command(Command::new(n)))
	}
}

impl Registry {
	/// # Register.
	///
	/// Validate and add a command.
	///
	/// ## Errors
	///
	/// Returns [`ModelError::InvalidCommand`] if the command is malformed, or
	/// [`ModelError::DuplicateCommand`] if a command of the same name has
	/// already been registered. Either way, the registry is unchanged.
	pub fn register(&mut self, cmd: Command) -> Result<(), ModelError> {
		self.register_all(std::iter::once(cmd))
	}

	/// # Register All.
	///
	/// Validate and add any number of commands, all or nothing.
	///
	/// ## Errors
	///
	/// This returns the first [`ModelError`] encountered, in which case none
	/// of the commands are added.
	pub fn register_all<I: IntoIterator<Item=Command>>(&mut self, cmds: I)
	-> Result<(), ModelError> {
		let mut batch = BTreeSet::new();
		for cmd in cmds {
			validate(&cmd)?;
			if self.commands.contains(cmd.name()) || batch.contains(cmd.name()) {
				tracing::debug!(command = cmd.name(), "duplicate command");
				return Err(ModelError::DuplicateCommand(cmd.name().to_owned()));
			}
			batch.insert(cmd);
		}

		self.commands.append(&mut batch);
		Ok(())
	}

	/// # Register Names.
	///
	/// Same as [`Registry::register_all`], but for bare commands.
	///
	/// ## Errors
	///
	/// This returns the first [`ModelError`] encountered, in which case none
	/// of the commands are added.
	pub fn register_names<I, S>(&mut self, names: I) -> Result<(), ModelError>
	where I: IntoIterator<Item=S>, S: Into<String> {
		self.register_all(names.into_iter().map(Command::new))
	}
}

impl Registry {
	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.commands.is_empty() }

	#[must_use]
	/// # Length.
	///
	/// Return the number of registered (top-level) commands.
	pub fn len(&self) -> usize { self.commands.len() }

	#[must_use]
	/// # Lookup.
	///
	/// Find a registered command by exact name.
	pub fn lookup(&self, name: &str) -> Option<&Command> { self.commands.get(name) }

	/// # Iterate.
	///
	/// Return the registered commands in name order.
	pub fn iter(&self) -> impl ExactSizeIterator<Item=&Command> { self.commands.iter() }

	#[must_use]
	/// # Command List.
	///
	/// Return a [`CommandList`] wrapper that renders a summary of the
	/// registered commands via `Display`.
	pub const fn list(&self) -> CommandList<'_> { CommandList::new(self) }
}

impl Registry {
	/// # Parse.
	///
	/// Parse a token list (minus the program name) against the registered
	/// commands.
	///
	/// This never modifies the registry; each call builds its own
	/// [`ParsedCommand`].
	///
	/// ## Errors
	///
	/// Returns the [`ParseError`] describing the first thing wrong with the
	/// input.
	pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParsedCommand, ParseError> {
		parse::parse(&self.commands, tokens)
	}

	/// # Parse Environment.
	///
	/// Same as [`Registry::parse`], but for the arguments the current
	/// process was called with. Invalid UTF-8 is replaced rather than
	/// rejected.
	///
	/// ## Errors
	///
	/// Returns the [`ParseError`] describing the first thing wrong with the
	/// input.
	pub fn parse_env(&self) -> Result<ParsedCommand, ParseError> {
		self.parse(&parse::env_tokens())
	}
}
