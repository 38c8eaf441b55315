//! Recognition of run-time parameter placeholders (`&Период`)

use once_cell::sync::Lazy;
use regex::Regex;

use super::config::Config;

/// Default placeholder: `&` followed by an identifier
static DEFAULT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^&[\p{L}_][\p{L}\p{N}_]*$").expect("valid placeholder pattern"));

/// Decides whether raw filter text refers to a run-time parameter
pub trait PlaceholderMatcher {
    fn is_placeholder(&self, raw: &str) -> bool;

    /// Parameter name without the sigil, if `raw` is a placeholder
    fn parameter_name<'a>(&self, raw: &'a str) -> Option<&'a str>;
}

/// Placeholder made of a sigil and an identifier (letters, digits, `_`,
/// not starting with a digit)
#[derive(Debug, Clone)]
pub struct SigilPlaceholder {
    sigil: String,
    pattern: Regex,
}

impl SigilPlaceholder {
    pub fn new(sigil: &str) -> anyhow::Result<Self> {
        let pattern = Regex::new(&format!(
            r"^{}[\p{{L}}_][\p{{L}}\p{{N}}_]*$",
            regex::escape(sigil)
        ))?;
        Ok(Self {
            sigil: sigil.to_string(),
            pattern,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(&config.placeholder.sigil)
    }

    pub fn sigil(&self) -> &str {
        &self.sigil
    }
}

impl Default for SigilPlaceholder {
    fn default() -> Self {
        Self {
            sigil: "&".to_string(),
            pattern: DEFAULT_PATTERN.clone(),
        }
    }
}

impl PlaceholderMatcher for SigilPlaceholder {
    fn is_placeholder(&self, raw: &str) -> bool {
        self.pattern.is_match(raw)
    }

    fn parameter_name<'a>(&self, raw: &'a str) -> Option<&'a str> {
        if self.is_placeholder(raw) {
            raw.strip_prefix(self.sigil.as_str())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sigil() {
        let matcher = SigilPlaceholder::default();
        assert!(matcher.is_placeholder("&Period"));
        assert!(matcher.is_placeholder("&НачалоПериода"));
        assert!(matcher.is_placeholder("&_tmp1"));

        assert!(!matcher.is_placeholder("Period"));
        assert!(!matcher.is_placeholder("&"));
        assert!(!matcher.is_placeholder("&1st"));
        assert!(!matcher.is_placeholder("&Period "));
        assert!(!matcher.is_placeholder("A&B"));
        assert!(!matcher.is_placeholder("&Начало Периода"));
    }

    #[test]
    fn test_parameter_name() {
        let matcher = SigilPlaceholder::default();
        assert_eq!(matcher.parameter_name("&Организация"), Some("Организация"));
        assert_eq!(matcher.parameter_name("Организация"), None);
    }

    #[test]
    fn test_custom_sigil_is_escaped() {
        let matcher = SigilPlaceholder::new("$").unwrap();
        assert!(matcher.is_placeholder("$Period"));
        assert!(!matcher.is_placeholder("&Period"));
        assert_eq!(matcher.parameter_name("$Period"), Some("Period"));
        assert_eq!(matcher.sigil(), "$");
    }
}
