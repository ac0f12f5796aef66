//! Robots.txt rule evaluation
//!
//! This module wraps the robotstxt crate's matcher behind an immutable policy
//! bound to one origin.

use robotstxt::DefaultMatcher;

/// Agent token used for every rule lookup
pub const WILDCARD_AGENT: &str = "*";

/// Parsed robots.txt rules for one origin
///
/// Immutable after construction and queried once per dequeued URL.
#[derive(Debug, Clone)]
pub struct RobotsPolicy {
    /// Raw robots.txt content
    content: String,
    /// Short-circuits evaluation when the origin has no robots.txt
    allow_all: bool,
}

impl RobotsPolicy {
    /// Creates a policy from raw robots.txt content
    ///
    /// Unknown directives and garbage lines are ignored by the matcher, so this
    /// never fails.
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            allow_all: false,
        }
    }

    /// Creates a permissive policy, used when the origin has no robots.txt
    pub fn allow_all() -> Self {
        Self {
            content: String::new(),
            allow_all: true,
        }
    }

    /// Creates a policy that refuses every URL
    ///
    /// Used when robots.txt access is refused (401/403).
    pub fn disallow_all() -> Self {
        Self::from_content("User-agent: *\nDisallow: /\n")
    }

    /// Checks if `url` may be fetched by `user_agent`
    ///
    /// # Arguments
    ///
    /// * `user_agent` - The agent token to match groups against (the crawler
    ///   always passes [`WILDCARD_AGENT`])
    /// * `url` - The absolute URL to check
    ///
    /// # Returns
    ///
    /// * `true` - If the URL is allowed
    /// * `false` - If the URL is disallowed
    pub fn is_allowed(&self, user_agent: &str, url: &str) -> bool {
        if self.allow_all || self.content.is_empty() {
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, user_agent, url)
    }
}
