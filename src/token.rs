/*!
# Argot: Token Kind
*/



/// # Flag Marker.
///
/// Long-form options are introduced by two of these.
pub const FLAG_MARKER: char = '-';

/// # Value Separator.
///
/// Splits `--name=value` into its name and value parts.
pub const VALUE_SEPARATOR: char = '=';



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Token Kind.
///
/// The `TokenKind` enum is used to differentiate between the types of raw
/// tokens the parser might encounter.
///
/// The rules are deliberately dumb:
/// * If an entry is at least three characters long and begins with `--`, it is a long-form option.
/// * If a long-form option contains an `=`, everything after the first one is its value.
/// * Everything else is a plain value.
///
/// Lengths are counted in characters rather than bytes, so `--é` is an
/// option even though `é` takes up two bytes.
pub enum TokenKind {
	#[default]
	/// Not an option.
	Value,
	/// A long-form option.
	Long,
	/// A long-form option with a value. The number is the byte position of
	/// the `=`. Everything before is the key; everything after the value.
	LongV(usize),
}

impl From<&str> for TokenKind {
	fn from(txt: &str) -> Self {
		if is_long_option(txt) {
			txt.find(VALUE_SEPARATOR).map_or(Self::Long, Self::LongV)
		}
		else { Self::Value }
	}
}

impl TokenKind {
	#[must_use]
	/// # Is Option?
	pub const fn is_option(self) -> bool { ! matches!(self, Self::Value) }
}



#[must_use]
/// # Is Long-Form Option?
///
/// Returns `true` if the token is at least three characters long and its
/// first two characters are both the [`FLAG_MARKER`].
///
/// ## Examples
///
/// ```
/// assert!(argot::is_long_option("--verbose"));
/// assert!(argot::is_long_option("--オプション"));
///
/// assert!(! argot::is_long_option("--"));
/// assert!(! argot::is_long_option("-v"));
/// assert!(! argot::is_long_option("verbose"));
/// ```
pub fn is_long_option(token: &str) -> bool {
	let mut chars = token.chars();
	chars.next() == Some(FLAG_MARKER) &&
	chars.next() == Some(FLAG_MARKER) &&
	chars.next().is_some()
}

#[must_use]
/// # Split Option Name and Value.
///
/// Split a token on the first [`VALUE_SEPARATOR`], returning the part before
/// it and, if there was a separator, the part after it. The latter may be
/// empty, which is _not_ the same as having no value at all.
///
/// The marker prefix, if any, is left alone.
///
/// ## Examples
///
/// ```
/// assert_eq!(argot::split_option("--out=dir"), ("--out", Some("dir")));
/// assert_eq!(argot::split_option("--out="), ("--out", Some("")));
/// assert_eq!(argot::split_option("--out"), ("--out", None));
/// assert_eq!(argot::split_option("--a=b=c"), ("--a", Some("b=c")));
/// ```
pub fn split_option(token: &str) -> (&str, Option<&str>) {
	match token.split_once(VALUE_SEPARATOR) {
		Some((k, v)) => (k, Some(v)),
		None => (token, None),
	}
}

#[must_use]
/// # Starts With Flag Marker?
///
/// This is used to catch flag-looking tokens in positions where only plain
/// values are allowed.
pub fn starts_with_marker(token: &str) -> bool { token.starts_with(FLAG_MARKER) }

#[must_use]
/// # Option Name.
///
/// Return the bare option name (no leading markers, no value) for a
/// long-form option token, or `None` if the token isn't one.
pub(crate) fn option_name(token: &str) -> Option<&str> {
	let end = match TokenKind::from(token) {
		TokenKind::Value => return None,
		TokenKind::Long => token.len(),
		TokenKind::LongV(pos) => pos,
	};

	// The two leading markers are single-byte.
	token.get(2..end)
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_from() {
		assert_eq!(TokenKind::from("Your Mom"), TokenKind::Value);
		assert_eq!(TokenKind::from(""), TokenKind::Value);
		assert_eq!(TokenKind::from("-"), TokenKind::Value);
		assert_eq!(TokenKind::from("--"), TokenKind::Value);
		assert_eq!(TokenKind::from("-y"), TokenKind::Value);
		assert_eq!(TokenKind::from("-yp"), TokenKind::Value);
		assert_eq!(TokenKind::from("--y"), TokenKind::Long);
		assert_eq!(TokenKind::from("--0"), TokenKind::Long);
		assert_eq!(TokenKind::from("---"), TokenKind::Long);
		assert_eq!(TokenKind::from("--yes"), TokenKind::Long);
		assert_eq!(TokenKind::from("--y-p"), TokenKind::Long);
		assert_eq!(TokenKind::from("--yes=no"), TokenKind::LongV(5));
		assert_eq!(TokenKind::from("--yes="), TokenKind::LongV(5));
		assert_eq!(TokenKind::from("--yes=no=maybe"), TokenKind::LongV(5));
		assert_eq!(TokenKind::from("--="), TokenKind::LongV(2));

		// Does this work?
		assert_eq!(
			TokenKind::from("--BjörkGuðmundsdóttir"),
			TokenKind::Long
		);
		assert_eq!(
			TokenKind::from("--BjörkGuðmunds=dóttir"),
			TokenKind::LongV(17)
		);

		// Characters, not bytes.
		assert_eq!(TokenKind::from("--é"), TokenKind::Long);
		assert_eq!(TokenKind::from("—é"), TokenKind::Value);
	}

	#[test]
	fn t_is_option() {
		assert!(! TokenKind::Value.is_option());
		assert!(TokenKind::Long.is_option());
		assert!(TokenKind::LongV(3).is_option());
	}

	#[test]
	fn t_split_option() {
		assert_eq!(split_option(""), ("", None));
		assert_eq!(split_option("plain"), ("plain", None));
		assert_eq!(split_option("="), ("", Some("")));
		assert_eq!(split_option("--outdir=/tmp/out"), ("--outdir", Some("/tmp/out")));
		assert_eq!(split_option("--outdir=--weird"), ("--outdir", Some("--weird")));
	}

	#[test]
	fn t_starts_with_marker() {
		assert!(starts_with_marker("-"));
		assert!(starts_with_marker("-5"));
		assert!(starts_with_marker("--flag"));
		assert!(! starts_with_marker(""));
		assert!(! starts_with_marker("file.txt"));
		assert!(! starts_with_marker("a-b"));
	}

	#[test]
	fn t_option_name() {
		assert_eq!(option_name("--verbose"), Some("verbose"));
		assert_eq!(option_name("--outdir=/tmp"), Some("outdir"));
		assert_eq!(option_name("--outdir="), Some("outdir"));
		assert_eq!(option_name("--=x"), Some(""));
		assert_eq!(option_name("--オプション"), Some("オプション"));
		assert_eq!(option_name("-v"), None);
		assert_eq!(option_name("verbose"), None);
	}
}
