//! Regular-expression collaborator for vega.
//!
//! `RegExp` wraps a compiled pattern and speaks the shared vocabulary of
//! the value model: compilation failure is an [`Error`] value, matches
//! come back as a [`List`] of captures, and a compiled pattern implements
//! [`Callable`], so it is invocable uniformly alongside native functions.
//!
//! Capture policy: the result of [`RegExp::exec`] always has exactly one
//! element per capture group of the compiled pattern (group 0 is the whole
//! match), with `Null` holes for groups that did not participate.

use std::fmt;

use regex::{Regex, RegexBuilder};

use vega_value::{
    Callable, Error, List, Object, Result, TypeId, TypeRegistry, Value,
};

/// Pattern flags mirroring the JS-style `g` / `i` / `m` trio.
///
/// `global` is carried for the embedding layer (it does not change how a
/// single `exec` behaves); `ignore_case` and `multiline` alter compilation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RegExpFlags {
    pub global: bool,
    pub ignore_case: bool,
    pub multiline: bool,
}

impl RegExpFlags {
    /// No flags set
    pub const fn new() -> Self {
        Self {
            global: false,
            ignore_case: false,
            multiline: false,
        }
    }
}

impl fmt::Display for RegExpFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.global {
            write!(f, "g")?;
        }
        if self.ignore_case {
            write!(f, "i")?;
        }
        if self.multiline {
            write!(f, "m")?;
        }
        Ok(())
    }
}

/// A compiled regular expression.
#[derive(Debug)]
pub struct RegExp {
    source: String,
    flags: RegExpFlags,
    inner: Regex,
}

impl RegExp {
    /// Compile `pattern` with `flags`.
    ///
    /// A malformed pattern is an illegal-argument error, reported as a
    /// value in the shared vocabulary rather than a bespoke error type.
    pub fn new(pattern: &str, flags: RegExpFlags) -> Result<Self> {
        let inner = RegexBuilder::new(pattern)
            .case_insensitive(flags.ignore_case)
            .multi_line(flags.multiline)
            .build()
            .map_err(|e| Error::illegal_argument(format!("invalid pattern: {e}")))?;
        tracing::trace!(pattern, %flags, "compiled pattern");
        Ok(Self {
            source: pattern.to_string(),
            flags,
            inner,
        })
    }

    /// The pattern source text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the `g` flag was set
    pub fn global(&self) -> bool {
        self.flags.global
    }

    /// Whether the `i` flag was set
    pub fn ignore_case(&self) -> bool {
        self.flags.ignore_case
    }

    /// Whether the `m` flag was set
    pub fn multiline(&self) -> bool {
        self.flags.multiline
    }

    /// Number of capture groups, including group 0 (the whole match)
    pub fn group_len(&self) -> usize {
        self.inner.captures_len()
    }

    /// Find the first match at or after byte `offset`.
    ///
    /// Returns a list with exactly [`group_len`](Self::group_len) elements:
    /// the matched text per participating group, `Null` otherwise. `None`
    /// when nothing matches or `offset` is past the end.
    pub fn exec(&self, text: &str, offset: usize) -> Option<List> {
        if offset > text.len() {
            return None;
        }
        let caps = self.inner.captures_at(text, offset)?;
        let mut groups = List::new();
        for i in 0..caps.len() {
            match caps.get(i) {
                Some(m) => groups.push(Value::text(m.as_str())),
                None => groups.push(Value::null()),
            }
        }
        Some(groups)
    }

    /// Whether the pattern matches anywhere in `text`
    pub fn test(&self, text: &str) -> bool {
        self.inner.is_match(text)
    }
}

impl Object for RegExp {
    fn type_of(&self) -> TypeId {
        TypeRegistry::of::<RegExp>()
    }

    fn to_text(&self) -> String {
        format!("/{}/{}", self.source, self.flags)
    }

    fn as_callable(&self) -> Option<&dyn Callable> {
        Some(self)
    }
}

/// Invocation form: `(subject)` or `(subject, offset)`.
///
/// Returns the capture list on a match, `Null` on no match, and an
/// illegal-argument error value for a bad argument shape.
impl Callable for RegExp {
    fn invoke(&self, args: Option<&List>) -> Value {
        let args = args.unwrap_or_else(|| List::empty());
        if args.is_empty() || args.len() > 2 {
            return Value::error(Error::illegal_argument(
                "expected (subject) or (subject, offset)",
            ));
        }

        let Some(subject) = args.get(0).and_then(Value::as_str) else {
            return Value::error(Error::illegal_argument("subject must be text"));
        };

        let offset = match args.get(1) {
            None => 0,
            Some(v) => match v.to::<u64>() {
                Ok(n) => n as usize,
                Err(e) => return Value::error(e),
            },
        };

        match self.exec(subject, offset) {
            Some(groups) => Value::list(groups),
            None => Value::null(),
        }
    }

    fn name(&self) -> &str {
        "exec"
    }
}
