//! Commit message tone and format configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::CommitAssistError;

/// Tone of the suggested commit message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Style {
    #[default]
    Descriptive,
    Conversational,
    ListBased,
    ProblemSolution,
}

impl Style {
    pub const ALL: [Style; 4] = [
        Style::Descriptive,
        Style::Conversational,
        Style::ListBased,
        Style::ProblemSolution,
    ];

    /// Identifier accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Descriptive => "descriptive",
            Style::Conversational => "conversational",
            Style::ListBased => "list",
            Style::ProblemSolution => "problem-solution",
        }
    }

    /// Tone description injected into the system prompt.
    pub fn description(&self) -> &'static str {
        match self {
            Style::Descriptive => {
                "Descriptive and neutral: state plainly what changed and why, in a factual tone without opinions."
            }
            Style::Conversational => {
                "Conversational and casual: write as if explaining the change to a teammate, in a relaxed and friendly tone."
            }
            Style::ListBased => {
                "List-based: summarize the changes in the body as a bulleted list, one change per line, each line starting with '- '."
            }
            Style::ProblemSolution => {
                "Problem-solution: first describe the problem being addressed, then explain how this change solves it."
            }
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = CommitAssistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "descriptive" => Ok(Style::Descriptive),
            "conversational" => Ok(Style::Conversational),
            "list" | "list-based" => Ok(Style::ListBased),
            "problem-solution" => Ok(Style::ProblemSolution),
            _ => Err(CommitAssistError::InvalidStyle(s.to_string())),
        }
    }
}

/// How the commit message should be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageConfig {
    pub style: Style,
    /// Follow the Conventional Commits specification (`feat:`, `fix!:`).
    pub conventional_commit: bool,
}

impl MessageConfig {
    pub fn new(style: Style, conventional_commit: bool) -> Self {
        Self {
            style,
            conventional_commit,
        }
    }

    /// Build a config from a textual style identifier.
    pub fn parse(style: &str, conventional_commit: bool) -> Result<Self, CommitAssistError> {
        Ok(Self::new(style.parse()?, conventional_commit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MessageConfig::default();
        assert_eq!(config.style, Style::Descriptive);
        assert!(!config.conventional_commit);
    }

    #[test]
    fn test_identifiers_parse_back() {
        for style in Style::ALL {
            assert_eq!(style.as_str().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Problem-Solution".parse::<Style>().unwrap(), Style::ProblemSolution);
        assert_eq!("list-based".parse::<Style>().unwrap(), Style::ListBased);
    }

    #[test]
    fn test_unknown_style_rejected() {
        for bad in ["", "shouty", "haiku", "descriptive-neutral"] {
            let err = bad.parse::<Style>().unwrap_err();
            assert!(matches!(err, CommitAssistError::InvalidStyle(ref s) if s == bad));
        }
    }

    #[test]
    fn test_message_config_parse() {
        let config = MessageConfig::parse("conversational", true).unwrap();
        assert_eq!(config, MessageConfig::new(Style::Conversational, true));
        assert!(MessageConfig::parse("poetic", false).is_err());
    }

    #[test]
    fn test_descriptions_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for style in Style::ALL {
            assert!(seen.insert(style.description()));
        }
    }
}
