/*!
# Argot: Model Validation.

Commands are checked once, when they're registered, so the parser itself
never has to worry about bad models.
*/

use crate::{
	Command,
	InvalidReason,
	ModelError,
	FLAG_MARKER,
};
use std::collections::BTreeSet;



/// # Validate Command.
///
/// Check that a command (and, recursively, all of its subcommands) is
/// well-formed:
///
/// * The name must be non-empty and free of whitespace;
/// * Declared options, arguments, and subcommands must not be empty;
/// * Option and argument names must be non-empty, free of whitespace and dashes, and unique within their command;
/// * Sibling subcommands must have unique names;
///
/// Checking stops at the first problem.
///
/// ## Examples
///
/// ```
/// use argot::{Command, InvalidReason, ModelError, Opt};
///
/// let cmd = Command::new("build").with_option(Opt::switch("release"));
/// assert!(argot::validate(&cmd).is_ok());
///
/// let cmd = Command::new("build").with_options([
///     Opt::switch("verbose"),
///     Opt::switch("verbose"),
/// ]);
/// assert_eq!(
///     argot::validate(&cmd),
///     Err(ModelError::InvalidCommand {
///         command: "build".to_owned(),
///         reason: InvalidReason::DuplicateOption("verbose".to_owned()),
///     }),
/// );
/// ```
///
/// ## Errors
///
/// Returns [`ModelError::InvalidCommand`] describing the first problem found.
pub fn validate(cmd: &Command) -> Result<(), ModelError> {
	check_command(cmd).map_err(|e| {
		if let ModelError::InvalidCommand { command, reason } = &e {
			tracing::debug!(%command, %reason, "invalid command model");
		}
		e
	})
}

/// # Validate (Recursive).
fn check_command(cmd: &Command) -> Result<(), ModelError> {
	let name = cmd.name();
	if name.is_empty() {
		return Err(ModelError::invalid(name, InvalidReason::EmptyName));
	}
	if name.chars().any(char::is_whitespace) {
		return Err(ModelError::invalid(name, InvalidReason::NameWhitespace));
	}

	if let Some(opts) = cmd.declared_options() {
		check_names(
			opts.iter().map(crate::Opt::name),
			InvalidReason::EmptyOptions,
			InvalidReason::InvalidOptionName,
			InvalidReason::DuplicateOption,
		).map_err(|reason| ModelError::invalid(name, reason))?;
	}

	if let Some(args) = cmd.declared_arguments() {
		check_names(
			args.iter().map(crate::Argument::name),
			InvalidReason::EmptyArguments,
			InvalidReason::InvalidArgumentName,
			InvalidReason::DuplicateArgument,
		).map_err(|reason| ModelError::invalid(name, reason))?;
	}

	if let Some(subs) = cmd.declared_subcommands() {
		if subs.is_empty() {
			return Err(ModelError::invalid(name, InvalidReason::EmptySubcommands));
		}

		// Each must be valid on its own.
		for sub in subs { check_command(sub)?; }

		// And unique among its siblings.
		let mut seen = BTreeSet::new();
		for sub in subs {
			if ! seen.insert(sub.name()) {
				return Err(ModelError::invalid(
					name,
					InvalidReason::DuplicateSubcommand(sub.name().to_owned()),
				));
			}
		}
	}

	Ok(())
}

/// # Check Option/Argument Names.
///
/// Options and arguments share the same rules; only the error reasons
/// differ.
fn check_names<'a, I>(
	names: I,
	empty: InvalidReason,
	invalid: fn(String) -> InvalidReason,
	duplicate: fn(String) -> InvalidReason,
) -> Result<(), InvalidReason>
where I: ExactSizeIterator<Item=&'a str> {
	if names.len() == 0 { return Err(empty); }

	let mut seen = BTreeSet::new();
	for n in names {
		if ! valid_name(n) { return Err(invalid(n.to_owned())); }
		if ! seen.insert(n) { return Err(duplicate(n.to_owned())); }
	}

	Ok(())
}

/// # Valid Option/Argument Name?
fn valid_name(name: &str) -> bool {
	! name.is_empty() &&
	! name.chars().any(|c| c == FLAG_MARKER || c.is_whitespace())
}
