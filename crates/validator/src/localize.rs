//! Error-code to message translation.
//!
//! A [`Localizer`] is a plain catalog from stable error codes to display
//! text. Codes missing from the catalog fall back to the caller's message,
//! then to the code itself.

use std::borrow::Cow;
use std::collections::HashMap;

/// Catalog of translated messages keyed by error code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Localizer {
    catalog: HashMap<Cow<'static, str>, Cow<'static, str>>,
}

impl Localizer {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the text for `code`.
    #[must_use]
    pub fn with(
        mut self,
        code: impl Into<Cow<'static, str>>,
        text: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.catalog.insert(code.into(), text.into());
        self
    }

    /// Builds a catalog from `(code, text)` pairs. Later pairs win.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        Self {
            catalog: entries
                .into_iter()
                .map(|(code, text)| (code.into(), text.into()))
                .collect(),
        }
    }

    /// Text for `code`.
    ///
    /// A blank code yields the fallback (or nothing). A code outside the
    /// catalog yields the fallback, or the code itself without one.
    ///
    /// ```rust
    /// use lomake_validator::localize::Localizer;
    ///
    /// let fi = Localizer::new().with("name.required", "Nimi on pakollinen.");
    /// assert_eq!(fi.localize("name.required", Some("Name is required")), "Nimi on pakollinen.");
    /// assert_eq!(fi.localize("age.range", Some("Out of range")), "Out of range");
    /// assert_eq!(fi.localize("age.range", None), "age.range");
    /// ```
    pub fn localize(&self, code: &str, fallback: Option<&str>) -> String {
        if code.trim().is_empty() {
            return fallback.unwrap_or_default().to_owned();
        }
        match self.catalog.get(code) {
            Some(text) => text.to_string(),
            None => fallback.unwrap_or(code).to_owned(),
        }
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Localizer {
        Localizer::from_entries([
            ("name.required", "Nimi on pakollinen."),
            ("age.range", "Iän tulee olla välillä 18–120."),
        ])
    }

    #[test]
    fn test_blank_code_uses_fallback() {
        let fi = catalog();
        assert_eq!(fi.localize("", Some("Required")), "Required");
        assert_eq!(fi.localize("  ", None), "");
    }

    #[test]
    fn test_catalog_wins_over_fallback() {
        assert_eq!(
            catalog().localize("age.range", Some("Age out of range")),
            "Iän tulee olla välillä 18–120."
        );
    }

    #[test]
    fn test_later_entries_win() {
        let fi = catalog().with("name.required", "Pakollinen");
        assert_eq!(fi.localize("name.required", None), "Pakollinen");
        assert_eq!(fi.len(), 2);
        assert_eq!(fi.localize("age.range", None), "Iän tulee olla välillä 18–120.");
    }
}
