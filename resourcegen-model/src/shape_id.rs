use std::fmt;
use std::str::FromStr;

/// A namespaced shape identifier: `namespace#name`, optionally with a
/// `$member` suffix identifying a member of that shape.
///
/// Equality and hashing are structural over the three parts; `ShapeId`s
/// are the stable keys by which every other query in this crate is indexed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId {
    namespace: String,
    name: String,
    member: Option<String>,
}

impl ShapeId {
    /// Constructs a new, member-less `ShapeId`.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            member: None,
        }
    }

    /// Returns a new `ShapeId` identifying `member` on this shape.
    #[must_use]
    pub fn with_member(&self, member: impl Into<String>) -> Self {
        Self {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            member: Some(member.into()),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// The containing shape id, stripped of any `$member` suffix.
    #[must_use]
    pub fn root(&self) -> ShapeId {
        Self {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            member: None,
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.namespace, self.name)?;
        if let Some(member) = &self.member {
            write!(f, "${member}")?;
        }
        Ok(())
    }
}

/// Malformed `ShapeId` string, e.g. missing the `#` separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseShapeIdError(pub String);

impl fmt::Display for ParseShapeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed shape id: \"{}\"", self.0)
    }
}
impl std::error::Error for ParseShapeIdError {}

impl FromStr for ShapeId {
    type Err = ParseShapeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, rest) = s.split_once('#').ok_or_else(|| ParseShapeIdError(s.to_string()))?;
        if namespace.is_empty() || rest.is_empty() {
            return Err(ParseShapeIdError(s.to_string()));
        }
        let (name, member) = match rest.split_once('$') {
            Some((name, member)) => (name, Some(member.to_string())),
            None => (rest, None),
        };
        if name.is_empty() || member.as_deref() == Some("") {
            return Err(ParseShapeIdError(s.to_string()));
        }
        Ok(Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            member,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_without_member() {
        let id: ShapeId = "example.foo#FooResource".parse().unwrap();
        assert_eq!(id.namespace(), "example.foo");
        assert_eq!(id.name(), "FooResource");
        assert_eq!(id.member(), None);
        assert_eq!(id.to_string(), "example.foo#FooResource");
    }

    #[test]
    fn round_trips_with_member() {
        let id: ShapeId = "example.foo#FooStructure$fooId".parse().unwrap();
        assert_eq!(id.member(), Some("fooId"));
        assert_eq!(id.to_string(), "example.foo#FooStructure$fooId");
        assert_eq!(id.root().to_string(), "example.foo#FooStructure");
    }

    #[test]
    fn rejects_malformed() {
        assert!("no-hash-here".parse::<ShapeId>().is_err());
        assert!("ns#".parse::<ShapeId>().is_err());
        assert!("#name".parse::<ShapeId>().is_err());
    }

    #[test]
    fn with_member_constructs_member_id() {
        let root = ShapeId::new("ns", "Struct");
        let member = root.with_member("field");
        assert_eq!(member.to_string(), "ns#Struct$field");
        assert_eq!(member.root(), root);
    }
}
