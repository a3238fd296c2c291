/*!
# Benchmark: `argot::Registry`
*/

use brunch::{
	Bench,
	benches,
};
use argot::{
	Argument,
	Command,
	Opt,
	Registry,
};

fn registry() -> Registry {
	Registry::default()
		.with_command(
			Command::new("file")
				.with_options([Opt::switch("quiet"), Opt::with_value("root")])
				.with_subcommands([
					Command::new("new")
						.with_option(Opt::with_value("mode"))
						.with_argument(Argument::new("name")),
					Command::new("rm").with_argument(Argument::new("name")),
				])
		)
		.and_then(|r| r.with_names(["help", "version"]))
		.expect("Registration failed.")
}

benches!(
	Bench::new("argot::Registry::register(file)")
		.run(registry),

	Bench::spacer(),

	Bench::new("argot::Registry::parse(help)")
		.run_seeded_with(registry, |r| r.parse(&["help"]).is_ok()),

	Bench::new("argot::Registry::parse(file --quiet --root=/tmp new --mode 644 report.txt)")
		.run_seeded_with(registry, |r| r.parse(&[
			"file", "--quiet", "--root=/tmp", "new", "--mode", "644", "report.txt",
		]).is_ok()),

	Bench::new("argot::Registry::parse(file new report.txt --mode=644)")
		.run_seeded_with(registry, |r| r.parse(&[
			"file", "new", "report.txt", "--mode=644",
		]).is_err()),
);
