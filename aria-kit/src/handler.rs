/// Handler identifier (used to reference handler methods)
///
/// Widgets never store closures. Selection effects carry the id of the
/// handler the host should call, and the host owns the dispatch table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerId(pub String);

impl HandlerId {
    /// Create a new handler ID
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HandlerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
