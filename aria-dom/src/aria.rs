/// An ordered bag of accessibility (and related data) attributes.
///
/// Widgets build one of these for every element they describe; hosts copy
/// the pairs onto the rendered element verbatim. Setting a name twice
/// replaces the earlier value in place so ordering stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AriaAttributes {
    attrs: Vec<(&'static str, String)>,
}

impl AriaAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Set the attribute only when a value is present.
    pub fn set_opt<V: Into<String>>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    /// Boolean attribute rendered as `"true"` / `"false"`.
    pub fn flag(self, name: &'static str, value: bool) -> Self {
        self.set(name, if value { "true" } else { "false" })
    }

    /// Boolean attribute present only when `true`.
    pub fn flag_if(self, name: &'static str, value: bool) -> Self {
        if value { self.set(name, "true") } else { self }
    }

    pub fn role(self, role: &'static str) -> Self {
        self.set("role", role)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.attrs.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    fn insert(&mut self, name: &'static str, value: String) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }
}
