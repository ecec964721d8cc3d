/// One reason to keep a path out of the sitemap.
///
/// Matching runs against the canonical forward-slash relative path. `Substring`
/// is a plain containment test, so `tools` also drops `mytools.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionRule {
    /// Anything under a `.git` directory.
    GitMetadata,
    Substring(String),
}

impl ExclusionRule {
    pub fn matches(&self, canonical: &str) -> bool {
        match self {
            ExclusionRule::GitMetadata => {
                canonical.contains("/.git/") || canonical.starts_with(".git/")
            }
            ExclusionRule::Substring(needle) => canonical.contains(needle.as_str()),
        }
    }
}

pub fn should_skip(canonical: &str, rules: &[ExclusionRule]) -> bool {
    rules.iter().any(|rule| rule.matches(canonical))
}
