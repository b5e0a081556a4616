/// Decides which directory entries are candidates for archiving.
pub trait NamingPolicy {
    fn matches(&self, name: &str) -> bool;
}

/// Case-sensitive substring match on the file name.
#[derive(Debug, Clone)]
pub struct ContainsPattern {
    pattern: String,
}

impl ContainsPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Default for ContainsPattern {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PATTERN)
    }
}

impl NamingPolicy for ContainsPattern {
    fn matches(&self, name: &str) -> bool {
        name.contains(&self.pattern)
    }
}

impl<F> NamingPolicy for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, name: &str) -> bool {
        self(name)
    }
}
