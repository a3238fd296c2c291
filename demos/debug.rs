/*!
# Argot: Debug

This example parses whatever arguments are fed to it against a small
sample grammar and displays the results. Set `RUST_LOG=trace` to watch the
parser work.

```text
cargo run --example debug -- file --verbose new --mode=644 report.txt
```
*/

use argot::{
	Argument,
	Command,
	Opt,
	ParseError,
	ParsedCommand,
	Registry,
};
use tracing_subscriber::{
	layer::SubscriberExt,
	util::SubscriberInitExt,
	EnvFilter,
};



fn main() {
	// Logging is opt-in via RUST_LOG.
	let _res = tracing_subscriber::registry()
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(false)
				.with_level(true)
				.compact()
		)
		.with(EnvFilter::from_default_env())
		.try_init();

	let reg = match registry() {
		Ok(reg) => reg,
		Err(e) => {
			eprintln!("Bug: {e}");
			std::process::exit(1);
		},
	};

	match reg.parse_env() {
		Ok(parsed) => {
			println!("\x1b[2mRAW:\x1b[0m");
			println!("{parsed:?}");
			println!();
			println!("\x1b[2mPRETTY:\x1b[0m");
			print_parsed(&parsed, 0);
		},
		Err(ParseError::CommandNotSupplied) => {
			println!("{}", reg.list());
		},
		Err(e) => {
			eprintln!("\x1b[91;1mError:\x1b[0m {e}");
			if let Some(cmd) = e.command().and_then(|name| find(&reg, name)) {
				eprintln!("\n{}", cmd.usage());
			}
			else { eprintln!("{}", reg.list()); }
			std::process::exit(1);
		},
	}
}

/// # Sample Grammar.
fn registry() -> Result<Registry, argot::ModelError> {
	Registry::default()
		.with_command(
			Command::new("file")
				.with_help("Work with files.")
				.with_option(Opt::switch("verbose").with_help("Say more."))
				.with_subcommands([
					Command::new("new")
						.with_help("Create a file.")
						.with_option(Opt::with_value("mode").with_help("Permissions."))
						.with_argument(Argument::new("name").with_help("File name.")),
					Command::new("rm")
						.with_help("Delete a file.")
						.with_argument(Argument::new("name").with_help("File name.")),
				])
		)?
		.with_command(
			Command::new("generate")
				.with_help("Generate a project.")
				.with_option(Opt::with_value("outdir").with_help("Output directory."))
		)?
		.with_names(["help", "version"])
}

/// # Find (Sub)Command by Name.
///
/// Errors only name the command they're about, so search the whole tree.
fn find<'a>(reg: &'a Registry, name: &str) -> Option<&'a Command> {
	/// # Search.
	fn search<'a>(cmd: &'a Command, name: &str) -> Option<&'a Command> {
		if cmd.name() == name { Some(cmd) }
		else { cmd.subcommands().iter().find_map(|c| search(c, name)) }
	}

	reg.iter().find_map(|c| search(c, name))
}

/// # Print Parsed Command.
fn print_parsed(parsed: &ParsedCommand, depth: usize) {
	let pad = "  ".repeat(depth);
	println!("{pad}\x1b[1m{}\x1b[0m", parsed.name());
	for o in parsed.options().iter().filter(|o| o.is_used()) {
		match o.value() {
			Some(v) => println!("{pad}  --{}={v:?}", o.name()),
			None => println!("{pad}  --{}", o.name()),
		}
	}
	for (k, v) in parsed.arguments() {
		println!("{pad}  <{k}> {v:?}");
	}
	if let Some(sub) = parsed.subcommand() { print_parsed(sub, depth + 1); }
}
