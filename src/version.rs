use std::fmt;

/// Version text reported by the database engine. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString(String);

impl VersionString {
    /// Returns `None` for an empty value.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the leading `MAJOR.MINOR.PATCH` triple. Anything after the
    /// patch number (a fourth component, a suffix) is ignored.
    pub fn semver(&self) -> Option<(u32, u32, u32)> {
        let mut parts = self.0.split('.');
        let major = leading_number(parts.next()?)?;
        let minor = leading_number(parts.next()?)?;
        let patch = leading_number(parts.next()?)?;
        Some((major, minor, patch))
    }
}

fn leading_number(part: &str) -> Option<u32> {
    let end = part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len());
    part[..end].parse().ok()
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_rejected() {
        assert!(VersionString::new("").is_none());
    }

    #[test]
    fn parses_sqlite_style_versions() {
        let v = VersionString::new("3.41.2").unwrap();
        assert_eq!(v.semver(), Some((3, 41, 2)));
        assert_eq!(v.as_str(), "3.41.2");
        assert_eq!(v.to_string(), "3.41.2");

        // Point releases sometimes carry a fourth component.
        let v = VersionString::new("3.8.11.1").unwrap();
        assert_eq!(v.semver(), Some((3, 8, 11)));
    }

    #[test]
    fn non_version_text_has_no_semver() {
        assert_eq!(VersionString::new("hello").unwrap().semver(), None);
        assert_eq!(VersionString::new("3.41").unwrap().semver(), None);
        assert_eq!(VersionString::new("3..2").unwrap().semver(), None);
    }
}
