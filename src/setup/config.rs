//! Rewriting `config.toml` for a new repository.
//!
//! The file is edited textually so comments and layout survive.

use std::sync::LazyLock;

use regex::Regex;

static BASE_URL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^([ \t]*)base_url[ \t]*=[ \t]*"[^"]*""#).expect("valid config line regex")
});

static DOMAIN_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^([ \t]*)domain[ \t]*=[ \t]*"[^"]*""#).expect("valid config line regex")
});

/// Result of rewriting the config text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRewrite {
    pub content: String,
    /// A `base_url` assignment was found and replaced
    pub base_url_replaced: bool,
}

/// Point `base_url` at `base_url` and clear `domain`
///
/// Project sites on GitHub Pages have no custom domain, so every
/// `domain = "..."` becomes `domain = ""`.
pub fn rewrite_config(content: &str, base_url: &str) -> ConfigRewrite {
    let base_url_replaced = BASE_URL_LINE.is_match(content);
    let content = BASE_URL_LINE.replace_all(content, |caps: &regex::Captures<'_>| {
        format!(r#"{}base_url = "{}""#, &caps[1], base_url)
    });
    let content = DOMAIN_LINE.replace_all(&content, r#"${1}domain = """#);

    ConfigRewrite {
        content: content.into_owned(),
        base_url_replaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"# Static assets template
[repository]
base_url = "https://assets.example.com"
domain   = "assets.example.com"

[build]
  # nested key keeps its indentation
  base_url="https://old.example.com"
my_base_url = "untouched"
"#;

    #[test]
    fn test_rewrite_base_url_and_domain() {
        let rewrite = rewrite_config(TEMPLATE, "https://octo.github.io/assets");
        assert!(rewrite.base_url_replaced);
        assert_eq!(
            rewrite.content,
            r#"# Static assets template
[repository]
base_url = "https://octo.github.io/assets"
domain = ""

[build]
  # nested key keeps its indentation
  base_url = "https://octo.github.io/assets"
my_base_url = "untouched"
"#
        );
    }

    #[test]
    fn test_rewrite_without_base_url() {
        let rewrite = rewrite_config("[repository]\nname = \"x\"\n", "https://octo.github.io/a");
        assert!(!rewrite.base_url_replaced);
        assert_eq!(rewrite.content, "[repository]\nname = \"x\"\n");
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let once = rewrite_config(TEMPLATE, "https://octo.github.io/assets");
        let twice = rewrite_config(&once.content, "https://octo.github.io/assets");
        assert_eq!(once.content, twice.content);
    }
}
