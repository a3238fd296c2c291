/*!
# Argot: Parsing Engine.

The grammar, for each (sub)command level, is:

```text
<name> [--<option>[=<value>] ...] [<argument> ...] [<subcommand> ...]
```

Options come first, then exactly as many positional values as the command
has arguments, then optionally a subcommand name, which starts the
whole thing over one level down. Anything left over is an error.
*/

use crate::{
	token,
	Command,
	ParseError,
	ParsedCommand,
};
use std::collections::BTreeSet;



/// # Parse.
///
/// Resolve the first token against the registered commands, then walk the
/// rest.
pub(crate) fn parse<S: AsRef<str>>(commands: &BTreeSet<Command>, tokens: &[S])
-> Result<ParsedCommand, ParseError> {
	parse_top(commands, tokens).map_err(|e| {
		tracing::debug!(error = %e, "parse failed");
		e
	})
}

/// # Parse (Top Level).
fn parse_top<S: AsRef<str>>(commands: &BTreeSet<Command>, tokens: &[S])
-> Result<ParsedCommand, ParseError> {
	if commands.is_empty() { return Err(ParseError::NoCommands); }

	let [first, rest @ ..] = tokens else { return Err(ParseError::CommandNotSupplied); };
	let first = first.as_ref();
	if first.trim().is_empty() { return Err(ParseError::CommandNotSupplied); }

	let cmd = commands.get(first)
		.ok_or_else(|| ParseError::NoSuchCommand(first.to_owned()))?;

	parse_command(cmd, rest)
}

/// # Parse Command.
///
/// Parse the tokens following `cmd`'s name. Every token must be accounted
/// for, either here or by a subcommand.
fn parse_command<S: AsRef<str>>(cmd: &Command, mut tokens: &[S])
-> Result<ParsedCommand, ParseError> {
	tracing::trace!(command = cmd.name(), "matched command");
	let mut out = ParsedCommand::from(cmd);

	// Nothing else to do?
	if tokens.is_empty() {
		if cmd.has_required_arguments() {
			return Err(ParseError::RequiresArguments(cmd.name().to_owned()));
		}
		return Ok(out);
	}

	// Options.
	while let [next, rest @ ..] = tokens {
		let next = next.as_ref();
		let Some(name) = token::option_name(next) else { break; };
		if ! cmd.has_options() {
			return Err(ParseError::NoOptions(cmd.name().to_owned()));
		}

		let opt = cmd.option(name).ok_or_else(|| ParseError::NoSuchOption {
			command: cmd.name().to_owned(),
			option: name.to_owned(),
		})?;
		tokens = rest;

		// Find the value, if we need one.
		let value =
			if opt.requires_value() {
				match token::split_option(next) {
					(_, Some(v)) => Some(v.to_owned()),
					// Take whatever comes next, verbatim.
					(_, None) => {
						let [v, rest @ ..] = tokens else {
							return Err(ParseError::OptionRequiresArgument {
								command: cmd.name().to_owned(),
								option: opt.name().to_owned(),
							});
						};
						tokens = rest;
						Some(v.as_ref().to_owned())
					},
				}
			}
			else { None };

		tracing::trace!(command = cmd.name(), option = opt.name(), ?value, "set option");
		out.set_option(opt.name(), value);
	}

	// Arguments.
	for (idx, arg) in cmd.arguments().iter().enumerate() {
		let [next, rest @ ..] = tokens else {
			let name = cmd.name().to_owned();
			return Err(
				if idx == 0 { ParseError::RequiresArguments(name) }
				else { ParseError::InvalidArguments(name) }
			);
		};

		let next = next.as_ref();
		misplaced_option(cmd, next)?;

		tracing::trace!(command = cmd.name(), argument = arg.name(), value = next, "bound argument");
		out.push_argument(arg.name(), next.to_owned());
		tokens = rest;
	}

	if let [next, rest @ ..] = tokens {
		let next = next.as_ref();

		// Options can't follow arguments either.
		if cmd.has_required_arguments() { misplaced_option(cmd, next)?; }

		// Subcommand.
		if cmd.has_subcommands() {
			let sub = cmd.subcommand(next).ok_or_else(|| ParseError::NoSuchSubCommand {
				command: cmd.name().to_owned(),
				subcommand: next.to_owned(),
			})?;
			out.set_subcommand(parse_command(sub, rest)?);
			return Ok(out);
		}

		return Err(ParseError::InvalidArgumentOrSubCommand(cmd.name().to_owned()));
	}

	Ok(out)
}

/// # Misplaced Option?
///
/// Reject flag-looking tokens in places where only plain values may go.
fn misplaced_option(cmd: &Command, token: &str) -> Result<(), ParseError> {
	if token::starts_with_marker(token) {
		Err(ParseError::OptionNotAllowedHere {
			command: cmd.name().to_owned(),
			token: token.to_owned(),
		})
	}
	else { Ok(()) }
}

#[must_use]
/// # Environment Tokens.
///
/// Collect the process arguments, minus the program path, as `String`s.
/// Invalid UTF-8 is replaced rather than choked on.
pub(crate) fn env_tokens() -> Vec<String> {
	std::env::args_os()
		.skip(1)
		.map(|a| a.into_string().unwrap_or_else(|a| a.to_string_lossy().into_owned()))
		.collect()
}
