//! Insertion-ordered parameter map.
//!
//! A section holds a handful of codes, so entries live in a flat `Vec` with
//! linear lookup.

/// Ordered mapping from parameter code to value.
///
/// A value of `None` marks a standalone flag (e.g. `oil`, `bl`). Composite
/// values are stored already joined with `_` (e.g. `0.3_0.1_0.5`).
///
/// # Ordering
///
/// Iteration follows first insertion. Overwriting an existing code keeps its
/// original position; removing and re-inserting moves it to the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParamMap {
    entries: Vec<(String, Option<String>)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.entries.iter().position(|(c, _)| c == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    /// Value for `code`.
    ///
    /// Returns `None` if the code is absent, `Some(None)` for a standalone
    /// flag, and `Some(Some(value))` otherwise.
    pub fn get(&self, code: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, value)| value.as_deref())
    }

    /// Insert or overwrite `code`, returning the previous value if present.
    pub fn insert(
        &mut self,
        code: impl Into<String>,
        value: Option<String>,
    ) -> Option<Option<String>> {
        let code = code.into();
        match self.position(&code) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((code, value));
                None
            }
        }
    }

    /// Insert a standalone flag.
    pub fn insert_flag(&mut self, code: impl Into<String>) -> Option<Option<String>> {
        self.insert(code, None)
    }

    /// Insert a code with a value.
    pub fn insert_value(
        &mut self,
        code: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<Option<String>> {
        self.insert(code, Some(value.into()))
    }

    /// Remove `code`, returning its value if it was present.
    pub fn remove(&mut self, code: &str) -> Option<Option<String>> {
        self.position(code).map(|i| self.entries.remove(i).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.entries
            .iter()
            .map(|(code, value)| (code.as_str(), value.as_deref()))
    }

    /// Codes in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(code, _)| code.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let mut map = ParamMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>> Extend<(K, Option<String>)> for ParamMap {
    fn extend<I: IntoIterator<Item = (K, Option<String>)>>(&mut self, iter: I) {
        for (code, value) in iter {
            self.insert(code, value);
        }
    }
}
