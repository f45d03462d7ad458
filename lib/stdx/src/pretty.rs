use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;

/// Displays a slice as a human readable enumeration: `a, b or c`.
#[derive(Clone, PartialEq, Hash, Eq)]
pub struct List<C> {
    pub data: C,
    pub separator: &'static str,
    pub final_separator: &'static str,
    pub prefix: &'static str,
    pub postfix: &'static str,
}

impl<C> List<C> {
    pub fn new(contents: C) -> Self {
        Self { data: contents, separator: ", ", final_separator: " or ", prefix: "", postfix: "" }
    }

    pub fn surround(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self.postfix = prefix;
        self
    }

    pub fn with_final_separator(mut self, final_separator: &'static str) -> Self {
        self.final_separator = final_separator;
        self
    }

    /// A plain comma separated list as used for parameter lists.
    pub fn params(contents: C) -> Self {
        Self::new(contents).with_final_separator(", ")
    }
}

impl<C: Debug> Debug for List<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.data, f)
    }
}

impl<X: Display, T: Deref<Target = [X]>> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.data.deref() {
            [] => Ok(()),
            [x] => write!(f, "{}{}{}", self.prefix, x, self.postfix),
            [body @ .., second_last, last] => {
                for x in body {
                    write!(f, "{}{}{}{}", self.prefix, x, self.postfix, self.separator)?;
                }
                write!(
                    f,
                    "{}{}{}{}{}{}{}",
                    self.prefix,
                    second_last,
                    self.postfix,
                    self.final_separator,
                    self.prefix,
                    last,
                    self.postfix
                )
            }
        }
    }
}
