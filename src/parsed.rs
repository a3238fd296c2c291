/*!
# Argot: Parsed Command.
*/

use crate::{
	Command,
	Opt,
	OptKind,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Parsed Command.
///
/// This is what a successful parse hands back: a fresh snapshot of the
/// matched command with its option states and argument values filled in,
/// and (if one was used) the parsed subcommand, recursively.
///
/// The registered [`Command`] definitions are never touched, so the same
/// registry can be parsed against any number of times.
///
/// ## Examples
///
/// ```
/// use argot::{Argument, Command, Opt, Registry};
///
/// let reg = Registry::default()
///     .with_command(
///         Command::new("file").with_subcommand(
///             Command::new("new")
///                 .with_option(Opt::switch("force"))
///                 .with_argument(Argument::new("name"))
///         )
///     )
///     .unwrap();
///
/// let parsed = reg.parse(&["file", "new", "--force", "report.txt"]).unwrap();
/// assert_eq!(parsed.name(), "file");
///
/// let sub = parsed.subcommand().unwrap();
/// assert_eq!(sub.name(), "new");
/// assert!(sub.is_used("force"));
/// assert_eq!(sub.argument("name"), Some("report.txt"));
/// ```
pub struct ParsedCommand {
	/// # Name.
	name: String,

	/// # Options.
	///
	/// Every declared option, used or not, in declaration order.
	options: Vec<ParsedOpt>,

	/// # Arguments (Name, Value).
	///
	/// In binding order.
	arguments: Vec<(String, String)>,

	/// # Used Subcommand.
	subcommand: Option<Box<ParsedCommand>>,
}

impl From<&Command> for ParsedCommand {
	fn from(src: &Command) -> Self {
		Self {
			name: src.name().to_owned(),
			options: src.options().iter().map(ParsedOpt::from).collect(),
			arguments: Vec::with_capacity(src.arguments().len()),
			subcommand: None,
		}
	}
}

impl ParsedCommand {
	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Options.
	///
	/// All of the command's options, used or not.
	pub fn options(&self) -> &[ParsedOpt] { &self.options }

	#[must_use]
	/// # Option.
	pub fn option(&self, name: &str) -> Option<&ParsedOpt> {
		self.options.iter().find(|o| o.name == name)
	}

	/// # Used Options.
	///
	/// Return the names of the options that were actually passed.
	pub fn used_options(&self) -> impl Iterator<Item=&str> {
		self.options.iter().filter(|o| o.used).map(ParsedOpt::name)
	}

	#[must_use]
	/// # Option Used?
	///
	/// Returns `false` for options that weren't used _or_ don't exist.
	pub fn is_used(&self, name: &str) -> bool {
		self.option(name).is_some_and(ParsedOpt::is_used)
	}

	#[must_use]
	/// # Option Value.
	///
	/// Return the value passed to a value-bearing option, if it was used.
	/// Note that `Some("")` is a legitimate, distinct result.
	pub fn value(&self, name: &str) -> Option<&str> {
		self.option(name).and_then(ParsedOpt::value)
	}

	/// # Arguments.
	///
	/// Return the bound `(name, value)` pairs in positional order.
	pub fn arguments(&self) -> impl ExactSizeIterator<Item=(&str, &str)> {
		self.arguments.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	#[must_use]
	/// # Argument Value.
	pub fn argument(&self, name: &str) -> Option<&str> {
		self.arguments.iter()
			.find_map(|(k, v)| if k == name { Some(v.as_str()) } else { None })
	}

	#[must_use]
	/// # Used Subcommand.
	pub fn subcommand(&self) -> Option<&Self> { self.subcommand.as_deref() }
}

impl ParsedCommand {
	/// # Mark Option Used.
	///
	/// Returns `false` if there is no such option.
	pub(crate) fn set_option(&mut self, name: &str, value: Option<String>) -> bool {
		if let Some(opt) = self.options.iter_mut().find(|o| o.name == name) {
			opt.used = true;
			if matches!(opt.kind, OptKind::Value) { opt.value = value; }
			true
		}
		else { false }
	}

	/// # Bind Argument.
	pub(crate) fn push_argument(&mut self, name: &str, value: String) {
		self.arguments.push((name.to_owned(), value));
	}

	/// # Attach Subcommand.
	pub(crate) fn set_subcommand(&mut self, sub: Self) {
		self.subcommand = Some(Box::new(sub));
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Parsed Option.
pub struct ParsedOpt {
	/// # Name.
	name: String,

	/// # Kind.
	kind: OptKind,

	/// # Used?
	used: bool,

	/// # Value.
	value: Option<String>,
}

impl From<&Opt> for ParsedOpt {
	fn from(src: &Opt) -> Self {
		Self {
			name: src.name().to_owned(),
			kind: src.kind(),
			used: false,
			value: None,
		}
	}
}

impl ParsedOpt {
	#[must_use]
	/// # Name.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> OptKind { self.kind }

	#[must_use]
	/// # Used?
	pub const fn is_used(&self) -> bool { self.used }

	#[must_use]
	/// # Value.
	///
	/// This is only ever `Some` for value-bearing options that were used.
	pub fn value(&self) -> Option<&str> { self.value.as_deref() }
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::Argument;

	#[test]
	fn t_from_command() {
		let cmd = Command::new("generate")
			.with_options([Opt::switch("verbose"), Opt::with_value("outdir")])
			.with_argument(Argument::new("name"));

		let parsed = ParsedCommand::from(&cmd);
		assert_eq!(parsed.name(), "generate");
		assert_eq!(parsed.options().len(), 2);
		assert_eq!(parsed.used_options().count(), 0);
		assert_eq!(parsed.arguments().len(), 0);
		assert!(parsed.subcommand().is_none());
		assert_eq!(parsed.option("outdir").map(ParsedOpt::kind), Some(OptKind::Value));
	}

	#[test]
	fn t_set_option() {
		let cmd = Command::new("generate")
			.with_options([Opt::switch("verbose"), Opt::with_value("outdir")]);
		let mut parsed = ParsedCommand::from(&cmd);

		assert!(parsed.set_option("outdir", Some(String::new())));
		assert!(parsed.is_used("outdir"));
		assert_eq!(parsed.value("outdir"), Some(""));

		// Switches never hold values.
		assert!(parsed.set_option("verbose", Some("yes".to_owned())));
		assert!(parsed.is_used("verbose"));
		assert_eq!(parsed.value("verbose"), None);

		// Unknown options are a no-op.
		assert!(! parsed.set_option("nope", None));
		assert!(! parsed.is_used("nope"));

		assert_eq!(parsed.used_options().collect::<Vec<_>>(), ["verbose", "outdir"]);
	}

	#[test]
	fn t_arguments() {
		let cmd = Command::new("cp")
			.with_arguments([Argument::new("from"), Argument::new("to")]);
		let mut parsed = ParsedCommand::from(&cmd);
		parsed.push_argument("from", "a.txt".to_owned());
		parsed.push_argument("to", "b.txt".to_owned());

		assert_eq!(
			parsed.arguments().collect::<Vec<_>>(),
			[("from", "a.txt"), ("to", "b.txt")],
		);
		assert_eq!(parsed.argument("to"), Some("b.txt"));
		assert_eq!(parsed.argument("nope"), None);
	}
}
