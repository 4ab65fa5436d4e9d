//! YAML front matter parsing.
//!
//! A document may start with a block fenced by `---` lines. Everything
//! between the fences is YAML; everything after is the markdown body.

use serde::Deserialize;

/// Recognised front matter keys. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub(crate) struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub weight: Option<i32>,
    /// Explicit slug, replacing the one derived from the file path.
    pub slug: Option<String>,
    pub draft: bool,
}

const FENCE: &str = "---";

/// Split a file into its front matter block and body.
///
/// Returns `(None, content)` when the file does not open with a fence or the
/// closing fence is missing.
pub(crate) fn split(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let Some(rest) = strip_fence_line(content) else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    (None, content)
}

fn strip_fence_line(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(FENCE)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Parse a front matter block.
///
/// An empty block yields the defaults.
pub(crate) fn parse(yaml: &str) -> Result<FrontMatter, String> {
    let trimmed = yaml.trim();
    if trimmed.is_empty() {
        return Ok(FrontMatter::default());
    }

    serde_yaml::from_str(trimmed).map_err(|e| format!("Invalid YAML: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_with_front_matter() {
        let content = "---\ntitle: Guide\n---\n# Body\n";

        let (yaml, body) = split(content);

        assert_eq!(yaml, Some("title: Guide\n"));
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_crlf_line_endings() {
        let content = "---\r\ntitle: Guide\r\n---\r\nBody";

        let (yaml, body) = split(content);

        assert_eq!(yaml, Some("title: Guide\r\n"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_without_front_matter() {
        let content = "# Just markdown\n";

        assert_eq!(split(content), (None, content));
    }

    #[test]
    fn test_split_unclosed_fence_is_body() {
        let content = "---\ntitle: Guide\n# Body\n";

        assert_eq!(split(content), (None, content));
    }

    #[test]
    fn test_split_horizontal_rule_later_is_not_front_matter() {
        let content = "# Title\n\n---\n\nMore";

        assert_eq!(split(content), (None, content));
    }

    #[test]
    fn test_split_empty_block() {
        let (yaml, body) = split("---\n---\nBody");

        assert_eq!(yaml, Some(""));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_parse_all_keys() {
        let yaml = "title: Install\ndescription: 'How to install'\nweight: 3\nslug: setup\ndraft: true";

        let fm = parse(yaml).unwrap();

        assert_eq!(
            fm,
            FrontMatter {
                title: Some("Install".to_owned()),
                description: Some("How to install".to_owned()),
                weight: Some(3),
                slug: Some("setup".to_owned()),
                draft: true,
            }
        );
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let fm = parse("title: A\ndate: 2024-01-01\ntype: guide").unwrap();

        assert_eq!(fm.title.as_deref(), Some("A"));
        assert!(!fm.draft);
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(parse("  \n").unwrap(), FrontMatter::default());
    }

    #[test]
    fn test_parse_malformed_yaml() {
        let err = parse("title: [unclosed").unwrap_err();

        assert!(err.starts_with("Invalid YAML"));
    }

    #[test]
    fn test_parse_zero_weight_is_kept() {
        assert_eq!(parse("weight: 0").unwrap().weight, Some(0));
    }
}
