/*!
# Argot: Command Model.

These are the plain data shapes the parser walks. They carry no parse state
of their own; see [`ParsedCommand`](crate::ParsedCommand) for that.
*/

use crate::Usage;
use std::{
	borrow::Borrow,
	cmp::Ordering,
	hash::{
		Hash,
		Hasher,
	},
};



#[derive(Debug, Clone)]
/// # Command.
///
/// A named grammar node: one CLI verb along with its options, positional
/// arguments, and subcommands.
///
/// Each capability is held as an `Option<Vec<_>>`. `None` means the command
/// doesn't have the capability at all; `Some` with an empty list means it
/// was _declared_ but never filled in, which
/// [`validate`](crate::validate) will reject.
///
/// Note that for the purposes of equality, ordering, and hashing, only the
/// name matters. Commands are identifiers in a grammar, not values.
///
/// ## Examples
///
/// ```
/// use argot::{Argument, Command, Opt};
///
/// let cmd = Command::new("generate")
///     .with_help("Generate a project.")
///     .with_option(Opt::switch("verbose"))
///     .with_option(Opt::with_value("outdir"))
///     .with_argument(Argument::new("name"));
///
/// assert_eq!(cmd.option_long_forms(), ["--verbose", "--outdir"]);
/// assert!(cmd.has_required_arguments());
/// assert!(! cmd.has_subcommands());
/// ```
pub struct Command {
	/// # Name.
	name: String,

	/// # Help Text.
	help: String,

	/// # Options.
	options: Option<Vec<Opt>>,

	/// # Positional Arguments.
	arguments: Option<Vec<Argument>>,

	/// # Subcommands.
	subcommands: Option<Vec<Command>>,
}

impl Borrow<str> for Command {
	#[inline]
	fn borrow(&self) -> &str { self.name() }
}

impl Eq for Command {}

impl Hash for Command {
	#[inline]
	fn hash<H: Hasher>(&self, state: &mut H) { self.name.hash(state); }
}

impl Ord for Command {
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering { self.name.cmp(&other.name) }
}

impl PartialEq for Command {
	#[inline]
	fn eq(&self, other: &Self) -> bool { self.name == other.name }
}

impl PartialOrd for Command {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Command {
	#[must_use]
	/// # New.
	///
	/// Create a bare command with nothing but a name.
	pub fn new<S: Into<String>>(name: S) -> Self {
		Self {
			name: name.into(),
			help: String::new(),
			options: None,
			arguments: None,
			subcommands: None,
		}
	}

	#[must_use]
	/// # With Help Text.
	pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
		self.help = help.into();
		self
	}

	#[must_use]
	/// # With Option.
	///
	/// Append an option, declaring the capability if need be.
	pub fn with_option(mut self, opt: Opt) -> Self {
		self.options.get_or_insert_with(Vec::new).push(opt);
		self
	}

	#[must_use]
	/// # With Options.
	///
	/// Append zero or more options. The capability is declared even if the
	/// iterator turns out to be empty.
	pub fn with_options<I: IntoIterator<Item=Opt>>(mut self, opts: I) -> Self {
		self.options.get_or_insert_with(Vec::new).extend(opts);
		self
	}

	#[must_use]
	/// # With Argument.
	///
	/// Append a positional argument. Order matters!
	pub fn with_argument(mut self, arg: Argument) -> Self {
		self.arguments.get_or_insert_with(Vec::new).push(arg);
		self
	}

	#[must_use]
	/// # With Arguments.
	///
	/// Append zero or more positional arguments, in order. The capability is
	/// declared even if the iterator turns out to be empty.
	pub fn with_arguments<I: IntoIterator<Item=Argument>>(mut self, args: I) -> Self {
		self.arguments.get_or_insert_with(Vec::new).extend(args);
		self
	}

	#[must_use]
	/// # With Subcommand.
	pub fn with_subcommand(mut self, cmd: Self) -> Self {
		self.subcommands.get_or_insert_with(Vec::new).push(cmd);
		self
	}

	#[must_use]
	/// # With Subcommands.
	///
	/// Append zero or more subcommands. The capability is declared even if
	/// the iterator turns out to be empty.
	pub fn with_subcommands<I: IntoIterator<Item=Self>>(mut self, cmds: I) -> Self {
		self.subcommands.get_or_insert_with(Vec::new).extend(cmds);
		self
	}
}

impl Command {
	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Help Text.
	pub fn help(&self) -> &str { &self.help }

	#[must_use]
	/// # Options.
	pub fn options(&self) -> &[Opt] { self.options.as_deref().unwrap_or_default() }

	/// # Option Names.
	///
	/// In declaration order.
	pub fn option_names(&self) -> impl Iterator<Item=&str> {
		self.options().iter().map(Opt::name)
	}

	#[must_use]
	/// # Option Long Forms.
	///
	/// Same as [`Command::option_names`], but with `--` prefixes.
	pub fn option_long_forms(&self) -> Vec<String> {
		self.options().iter().map(Opt::long_form).collect()
	}

	#[must_use]
	/// # Find Option.
	///
	/// Look up an option by its bare name (no dashes).
	pub fn option(&self, name: &str) -> Option<&Opt> {
		self.options().iter().find(|o| o.name == name)
	}

	#[must_use]
	/// # Arguments.
	///
	/// In binding order.
	pub fn arguments(&self) -> &[Argument] { self.arguments.as_deref().unwrap_or_default() }

	/// # Argument Names.
	///
	/// In binding order.
	pub fn argument_names(&self) -> impl Iterator<Item=&str> {
		self.arguments().iter().map(Argument::name)
	}

	#[must_use]
	/// # Subcommands.
	pub fn subcommands(&self) -> &[Self] { self.subcommands.as_deref().unwrap_or_default() }

	#[must_use]
	/// # Find Subcommand.
	///
	/// Exact name match only.
	pub fn subcommand(&self, name: &str) -> Option<&Self> {
		self.subcommands().iter().find(|c| c.name == name)
	}

	#[must_use]
	/// # Has Options?
	pub fn has_options(&self) -> bool { ! self.options().is_empty() }

	#[must_use]
	/// # Has Required Arguments?
	///
	/// All arguments are required, so this is really just "has arguments".
	pub fn has_required_arguments(&self) -> bool { ! self.arguments().is_empty() }

	#[must_use]
	/// # Has Subcommands?
	pub fn has_subcommands(&self) -> bool { ! self.subcommands().is_empty() }

	#[must_use]
	/// # Usage.
	///
	/// Return a [`Usage`] wrapper that renders this command's help screen
	/// via `Display`.
	pub const fn usage(&self) -> Usage<'_> { Usage::new(self) }
}

impl Command {
	/// # Declared Options.
	///
	/// Unlike [`Command::options`], this distinguishes "never declared" from
	/// "declared empty".
	pub(crate) fn declared_options(&self) -> Option<&[Opt]> { self.options.as_deref() }

	/// # Declared Arguments.
	pub(crate) fn declared_arguments(&self) -> Option<&[Argument]> { self.arguments.as_deref() }

	/// # Declared Subcommands.
	pub(crate) fn declared_subcommands(&self) -> Option<&[Self]> { self.subcommands.as_deref() }
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Option Kind.
pub enum OptKind {
	/// # Boolean Switch.
	Switch,

	/// # Expects a Value.
	Value,
}



#[derive(Debug, Clone, Eq, Hash, PartialEq)]
/// # Option.
///
/// A named, optional switch, possibly expecting a value.
///
/// Names are stored _without_ the `--` prefix; that is a presentation
/// detail. See [`Opt::long_form`].
pub struct Opt {
	/// # Name.
	name: String,

	/// # Help Text.
	help: String,

	/// # Kind.
	kind: OptKind,
}

impl Opt {
	#[must_use]
	/// # New Switch.
	///
	/// Create a boolean option that stands on its own.
	pub fn switch<S: Into<String>>(name: S) -> Self {
		Self { name: name.into(), help: String::new(), kind: OptKind::Switch }
	}

	#[must_use]
	/// # New Option With Value.
	///
	/// Create an option that requires a value, passed either as
	/// `--name=value` or `--name value`.
	pub fn with_value<S: Into<String>>(name: S) -> Self {
		Self { name: name.into(), help: String::new(), kind: OptKind::Value }
	}

	#[must_use]
	/// # With Help Text.
	pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
		self.help = help.into();
		self
	}

	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Help Text.
	pub fn help(&self) -> &str { &self.help }

	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> OptKind { self.kind }

	#[must_use]
	/// # Requires Value?
	pub const fn requires_value(&self) -> bool { matches!(self.kind, OptKind::Value) }

	#[must_use]
	/// # Long Form.
	///
	/// The name with its `--` prefix.
	pub fn long_form(&self) -> String { format!("--{}", self.name) }
}



#[derive(Debug, Clone, Eq, Hash, PartialEq)]
/// # Positional Argument.
///
/// A required, named value slot. The definition never holds a value; bound
/// values live in the [`ParsedCommand`](crate::ParsedCommand).
pub struct Argument {
	/// # Name.
	name: String,

	/// # Help Text.
	help: String,
}

impl Argument {
	#[must_use]
	/// # New.
	pub fn new<S: Into<String>>(name: S) -> Self {
		Self { name: name.into(), help: String::new() }
	}

	#[must_use]
	/// # With Help Text.
	pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
		self.help = help.into();
		self
	}

	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Help Text.
	pub fn help(&self) -> &str { &self.help }
}
