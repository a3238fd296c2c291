/*!
# Argot: Errors.

There are two tiers:
* [`ModelError`] is raised at registration time and means a command model was put together wrong. It is a programmer problem.
* [`ParseError`] is raised at parse time and means the user typed something the registered grammar doesn't allow.
*/

use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Model Error.
pub enum ModelError {
	#[error("Invalid command {command:?}: {reason}")]
	/// # Invalid Command.
	///
	/// The (sub)command named `command` failed validation.
	InvalidCommand {
		/// # Offending (Sub)Command.
		command: String,

		/// # What Was Wrong.
		reason: InvalidReason,
	},

	#[error("Duplicate command: {0}")]
	/// # Duplicate Command.
	DuplicateCommand(String),
}

impl ModelError {
	/// # Invalid Command.
	pub(crate) fn invalid(command: &str, reason: InvalidReason) -> Self {
		Self::InvalidCommand { command: command.to_owned(), reason }
	}

	#[must_use]
	/// # Command Name.
	///
	/// Return the name of the command the error concerns.
	pub fn command(&self) -> &str {
		match self {
			Self::InvalidCommand { command, .. } | Self::DuplicateCommand(command) => command,
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Invalid Reason.
///
/// This is the particular rule a command model broke.
pub enum InvalidReason {
	#[error("command names must not be empty")]
	/// # Empty Name.
	EmptyName,

	#[error("command names must not contain whitespace")]
	/// # Whitespace in Name.
	NameWhitespace,

	#[error("options were declared but none were provided")]
	/// # Options Declared but Empty.
	EmptyOptions,

	#[error("invalid option name {0:?}")]
	/// # Bad Option Name.
	///
	/// Option names must be non-empty and may not contain whitespace or
	/// dashes.
	InvalidOptionName(String),

	#[error("duplicate option {0:?}")]
	/// # Duplicate Option Name.
	DuplicateOption(String),

	#[error("arguments were declared but none were provided")]
	/// # Arguments Declared but Empty.
	EmptyArguments,

	#[error("invalid argument name {0:?}")]
	/// # Bad Argument Name.
	///
	/// Same rules as options.
	InvalidArgumentName(String),

	#[error("duplicate argument {0:?}")]
	/// # Duplicate Argument Name.
	DuplicateArgument(String),

	#[error("subcommands were declared but none were provided")]
	/// # Subcommands Declared but Empty.
	EmptySubcommands,

	#[error("duplicate subcommand {0:?}")]
	/// # Duplicate Sibling Subcommand.
	DuplicateSubcommand(String),
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Parse Error.
///
/// Every parse failure is terminal; there is no partial result.
///
/// Command names carried by the variants are the (sub)command being parsed
/// when things went wrong, which is not necessarily the top-level one.
pub enum ParseError {
	#[error("No commands have been registered.")]
	/// # Empty Registry.
	NoCommands,

	#[error("No command was supplied.")]
	/// # Nothing to Parse.
	///
	/// This covers both an empty token list and an empty first token.
	CommandNotSupplied,

	#[error("No such command: {0}")]
	/// # Unknown Command.
	NoSuchCommand(String),

	#[error("Command {0} has no options.")]
	/// # Option Passed to an Option-less Command.
	NoOptions(String),

	#[error("Command {command} has no such option: --{option}")]
	/// # Unknown Option.
	NoSuchOption {
		/// # Command.
		command: String,

		/// # Option Name (no dashes).
		option: String,
	},

	#[error("Command {command} option --{option} requires a value.")]
	/// # Missing Option Value.
	OptionRequiresArgument {
		/// # Command.
		command: String,

		/// # Option Name (no dashes).
		option: String,
	},

	#[error("Command {command} found option {token}, but options must come before any arguments.")]
	/// # Misplaced Option.
	OptionNotAllowedHere {
		/// # Command.
		command: String,

		/// # The Offending Token.
		token: String,
	},

	#[error("Command {0} has required arguments, but none were supplied.")]
	/// # No Arguments.
	///
	/// The command needs positional arguments but ran out of tokens before
	/// binding any of them.
	RequiresArguments(String),

	#[error("Invalid arguments for command {0}.")]
	/// # Too Few Arguments.
	///
	/// Some, but not all, of the command's positional arguments were bound.
	InvalidArguments(String),

	#[error("Command {0} does not take any more arguments or subcommands.")]
	/// # Trailing Tokens.
	InvalidArgumentOrSubCommand(String),

	#[error("Command {command} has no subcommand: {subcommand}")]
	/// # Unknown Subcommand.
	NoSuchSubCommand {
		/// # Command.
		command: String,

		/// # The Unmatched Name.
		subcommand: String,
	},
}

impl ParseError {
	#[must_use]
	/// # Command Name.
	///
	/// Return the name of the (sub)command the error concerns, if any. For
	/// [`ParseError::NoSuchCommand`], this is the unmatched name itself.
	///
	/// This is mainly useful for deciding which usage text to show.
	pub fn command(&self) -> Option<&str> {
		match self {
			Self::NoCommands | Self::CommandNotSupplied => None,
			Self::NoSuchCommand(c)
				| Self::NoOptions(c)
				| Self::RequiresArguments(c)
				| Self::InvalidArguments(c)
				| Self::InvalidArgumentOrSubCommand(c)
				| Self::NoSuchOption { command: c, .. }
				| Self::OptionRequiresArgument { command: c, .. }
				| Self::OptionNotAllowedHere { command: c, .. }
				| Self::NoSuchSubCommand { command: c, .. } => Some(c),
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_display() {
		assert_eq!(
			ModelError::invalid("gener ate", InvalidReason::NameWhitespace).to_string(),
			"Invalid command \"gener ate\": command names must not contain whitespace",
		);
		assert_eq!(
			ModelError::DuplicateCommand("foo".to_owned()).to_string(),
			"Duplicate command: foo",
		);
		assert_eq!(
			ParseError::NoSuchOption {
				command: "make".to_owned(),
				option: "bar".to_owned(),
			}.to_string(),
			"Command make has no such option: --bar",
		);
		assert_eq!(ParseError::CommandNotSupplied.to_string(), "No command was supplied.");
	}

	#[test]
	fn t_command() {
		assert_eq!(ModelError::DuplicateCommand("foo".to_owned()).command(), "foo");
		assert_eq!(
			ModelError::invalid("bar", InvalidReason::EmptyOptions).command(),
			"bar",
		);

		assert_eq!(ParseError::NoCommands.command(), None);
		assert_eq!(ParseError::CommandNotSupplied.command(), None);
		assert_eq!(ParseError::NoSuchCommand("zzz".to_owned()).command(), Some("zzz"));
		assert_eq!(
			ParseError::NoSuchSubCommand {
				command: "file".to_owned(),
				subcommand: "old".to_owned(),
			}.command(),
			Some("file"),
		);
	}
}
