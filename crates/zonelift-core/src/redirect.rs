//! Redirect-rule matching.
//!
//! A record is the subject of a redirect when its hostname equals the host
//! component of a rule's `from` pattern. `from` is parsed as a URL; scheme,
//! path, and query take no part in the comparison. A rule whose `from` fails
//! to parse never matches — best-effort matching with graceful fallback, not
//! an error.

use tracing::debug;
use url::Url;

use crate::model::RedirectRule;

/// Find the first rule (in list order) whose `from` host equals `hostname`.
pub fn first_match<'a>(hostname: &str, rules: &'a [RedirectRule]) -> Option<&'a RedirectRule> {
    rules.iter().find(|rule| host_matches(hostname, &rule.from))
}

/// Whether `hostname` equals the host component of the rule's `from` URL.
pub fn host_matches(hostname: &str, from: &str) -> bool {
    match Url::parse(from) {
        Ok(url) => url.host_str() == Some(hostname),
        Err(err) => {
            debug!(%from, %err, "skipping unparseable redirect source");
            false
        }
    }
}

/// Clean a redirect destination for use as a record value: remove every
/// `:splat` placeholder (handled at the application layer, not in DNS), then
/// trim the trailing slashes that stripping leaves behind.
pub fn destination(to: &str) -> String {
    to.replace(":splat", "").trim_end_matches('/').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(from: &str, to: &str) -> RedirectRule {
        RedirectRule {
            from: from.into(),
            to: to.into(),
            status: 301,
            force: false,
        }
    }

    #[test]
    fn matches_on_host_only() {
        assert!(host_matches(
            "old.example.com",
            "https://old.example.com/some/path?q=1"
        ));
        assert!(!host_matches("old.example.com", "https://new.example.com/"));
    }

    #[test]
    fn unparseable_from_never_matches() {
        // Path-only patterns have no host and no scheme.
        assert!(!host_matches("old.example.com", "/legacy/*"));
        assert!(!host_matches("old.example.com", "old.example.com/page"));
    }

    #[test]
    fn first_rule_wins() {
        let rules = vec![
            rule("https://a.example.com", "https://first.example.com"),
            rule("https://a.example.com", "https://second.example.com"),
        ];
        let matched = first_match("a.example.com", &rules);
        assert_eq!(
            matched.map(|r| r.to.as_str()),
            Some("https://first.example.com")
        );
    }

    #[test]
    fn no_match_returns_none() {
        let rules = vec![rule("https://a.example.com", "https://b.example.com")];
        assert!(first_match("c.example.com", &rules).is_none());
    }

    #[test]
    fn destination_strips_splat_and_trailing_slashes() {
        assert_eq!(
            destination("https://new.example.com/:splat"),
            "https://new.example.com"
        );
        assert_eq!(
            destination("https://new.example.com/docs/:splat/"),
            "https://new.example.com/docs"
        );
        assert_eq!(
            destination("https://new.example.com/page"),
            "https://new.example.com/page"
        );
    }
}
