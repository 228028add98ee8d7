// locale.rs - Language tailoring identifier.
//
// Only the languages that carry conditional case rules are distinguished;
// every other tag resolves to the root rules.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Root,
    Turkish,
    Azerbaijani,
    Lithuanian,
    Greek,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Root => "root",
            Language::Turkish => "tr",
            Language::Azerbaijani => "az",
            Language::Lithuanian => "lt",
            Language::Greek => "el",
        }
    }

    fn from_subtag(subtag: &str) -> Option<Language> {
        let lang = match subtag.to_ascii_lowercase().as_str() {
            "tr" | "tur" => Language::Turkish,
            "az" | "aze" => Language::Azerbaijani,
            "lt" | "lit" => Language::Lithuanian,
            "el" | "ell" | "gre" => Language::Greek,
            "" | "root" | "und" => Language::Root,
            _ => return None,
        };
        Some(lang)
    }
}

/// Locale tailoring selected for a mapping or comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Locale {
    language: Language,
}

impl Locale {
    pub const ROOT: Locale = Locale::new(Language::Root);
    pub const TURKISH: Locale = Locale::new(Language::Turkish);
    pub const AZERBAIJANI: Locale = Locale::new(Language::Azerbaijani);
    pub const LITHUANIAN: Locale = Locale::new(Language::Lithuanian);
    pub const GREEK: Locale = Locale::new(Language::Greek);

    pub const fn new(language: Language) -> Self {
        Locale { language }
    }

    /// Resolve a BCP 47 / POSIX style tag ("tr", "tr-TR", "az_Latn_AZ",
    /// "lt-LT@euro"). Only the language subtag is consulted.
    pub fn from_tag(tag: &str) -> Self {
        let subtag = tag
            .split(|c: char| c == '-' || c == '_' || c == '.' || c == '@')
            .next()
            .unwrap_or("");
        match Language::from_subtag(subtag) {
            Some(language) => Locale { language },
            None => {
                debug!(tag, "no case tailoring for language, using root rules");
                Locale::ROOT
            }
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl From<Language> for Locale {
    fn from(language: Language) -> Self {
        Locale::new(language)
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Locale::from_tag(s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.language.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_subtag() {
        assert_eq!(Locale::from_tag("tr"), Locale::TURKISH);
        assert_eq!(Locale::from_tag("TR-tr"), Locale::TURKISH);
        assert_eq!(Locale::from_tag("az_Latn_AZ"), Locale::AZERBAIJANI);
        assert_eq!(Locale::from_tag("lt-LT@euro"), Locale::LITHUANIAN);
        assert_eq!(Locale::from_tag("ell"), Locale::GREEK);
    }

    #[test]
    fn unknown_tags_fall_back_to_root() {
        assert_eq!(Locale::from_tag("de-DE"), Locale::ROOT);
        assert_eq!(Locale::from_tag(""), Locale::ROOT);
        assert_eq!("nl".parse::<Locale>(), Ok(Locale::ROOT));
    }

    #[test]
    fn language_and_display() {
        assert_eq!(Locale::AZERBAIJANI.language(), Language::Azerbaijani);
        assert_eq!(Locale::from(Language::Greek), Locale::GREEK);
        assert_eq!(Locale::LITHUANIAN.to_string(), "lt");
        assert_eq!(Locale::default().to_string(), "root");
    }
}
