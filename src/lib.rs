/*!
# Argot

This crate provides a small, strict, declarative command-line parser.

You describe your program's grammar up front as a tree of [`Command`]s,
each with optional [`Opt`]ions, positional [`Argument`]s, and nested
subcommands, and hand them to a [`Registry`]. The registry validates each
model as it comes in, then parses token lists against them, returning
either a [`ParsedCommand`] or a [`ParseError`] saying exactly what was wrong.

The grammar it understands is deliberately narrow:

```text
<command> [--<option>[=<value>] ...] [<argument> ...] [<subcommand> [...]]
```

* Options are long-form only, and must come before any positional arguments.
* Option values can be attached (`--key=val`) or passed as the next token (`--key val`). `--key=` is a legitimate empty value.
* Arguments are all required, and bind strictly in declaration order.
* A subcommand, if any, follows the arguments and is parsed the same way, recursively.
* Anything left over is an error.

Parsing never touches the registered definitions, so a registry can be
built once and shared freely, across threads even.

What happens _after_ a successful parse is entirely up to you. The
[`Usage`] and [`CommandList`] wrappers can help with the obligatory help
screens.



## Example

```
use argot::{Argument, Command, Opt, ParseError, Registry};

let reg = Registry::default()
    .with_command(
        Command::new("file")
            .with_help("Work with files.")
            .with_option(Opt::switch("verbose"))
            .with_subcommand(
                Command::new("new")
                    .with_option(Opt::with_value("mode"))
                    .with_argument(Argument::new("name"))
            )
    )
    .unwrap(); // An error will only occur if the model is invalid.

// Parse!
let parsed = reg.parse(&["file", "--verbose", "new", "--mode=644", "report.txt"]).unwrap();
assert!(parsed.is_used("verbose"));

let new = parsed.subcommand().unwrap();
assert_eq!(new.value("mode"), Some("644"));
assert_eq!(new.argument("name"), Some("report.txt"));

// Options go first!
assert_eq!(
    reg.parse(&["file", "new", "report.txt", "--mode=644"]),
    Err(ParseError::OptionNotAllowedHere {
        command: "new".to_owned(),
        token: "--mode=644".to_owned(),
    }),
);

// For real-world use, you'd want to parse the environment instead.
if let Err(e) = reg.parse_env() {
    // Show the user what went wrong…
    let _msg = e.to_string();
}
```



## Logging

Registration and parsing emit [`tracing`](https://crates.io/crates/tracing)
events (`debug` for failures, `trace` for each step) which go nowhere
unless you install a subscriber.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_extern_crates,
	unused_import_braces,
)]



mod error;
mod model;
mod parse;
mod parsed;
mod registry;
mod token;
mod usage;
mod validate;

pub use error::{
	InvalidReason,
	ModelError,
	ParseError,
};
pub use model::{
	Argument,
	Command,
	Opt,
	OptKind,
};
pub use parsed::{
	ParsedCommand,
	ParsedOpt,
};
pub use registry::Registry;
pub use token::{
	is_long_option,
	split_option,
	starts_with_marker,
	TokenKind,
	FLAG_MARKER,
	VALUE_SEPARATOR,
};
pub use usage::{
	CommandList,
	Usage,
};
pub use validate::validate;
