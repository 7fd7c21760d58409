//! Game versions as used for data folder names

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// A game version, `major.minor.revision.build` with an optional `_ptr` suffix.
///
/// Versions order numerically; a PTR build sorts after the live build of the
/// same number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HeroesDataVersion {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
    pub build: u32,
    pub is_ptr: bool,
}

impl HeroesDataVersion {
    #[must_use]
    pub fn new(major: u32, minor: u32, revision: u32, build: u32, is_ptr: bool) -> Self {
        Self {
            major,
            minor,
            revision,
            build,
            is_ptr,
        }
    }
}

impl fmt::Display for HeroesDataVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.revision, self.build)?;
        if self.is_ptr {
            f.write_str("_ptr")?;
        }
        Ok(())
    }
}

impl FromStr for HeroesDataVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidVersion(s.to_string());

        let trimmed = s.trim();
        let (numbers, is_ptr) = match trimmed.len().checked_sub(4) {
            Some(split) if trimmed.is_char_boundary(split) && trimmed[split..].eq_ignore_ascii_case("_ptr") => {
                (&trimmed[..split], true)
            }
            _ => (trimmed, false),
        };

        let parts = numbers
            .split('.')
            .map(|p| p.parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        let [major, minor, revision, build] = parts[..] else {
            return Err(invalid());
        };

        Ok(Self::new(major, minor, revision, build, is_ptr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let live: HeroesDataVersion = "2.49.0.77525".parse().unwrap();
        assert_eq!(live, HeroesDataVersion::new(2, 49, 0, 77525, false));
        assert_eq!(live.to_string(), "2.49.0.77525");

        let ptr: HeroesDataVersion = "2.49.0.77548_ptr".parse().unwrap();
        assert!(ptr.is_ptr);
        assert_eq!(ptr.to_string(), "2.49.0.77548_ptr");
        assert_eq!("2.49.0.77548_PTR".parse::<HeroesDataVersion>().unwrap(), ptr);
    }

    #[test]
    fn test_invalid_versions() {
        for bad in ["", "2.49.0", "2.49.0.77525.1", "2.x.0.1", "latest", "_ptr", "2.49.0.-1"] {
            let err = bad.parse::<HeroesDataVersion>().unwrap_err();
            assert!(matches!(err, Error::InvalidVersion(_)), "{bad}");
        }
    }

    #[test]
    fn test_ordering() {
        let mut versions: Vec<HeroesDataVersion> = ["2.49.0.77525_ptr", "2.50.0.78000", "2.49.0.77525", "2.9.1.70000"]
            .iter()
            .map(|v| v.parse().unwrap())
            .collect();
        versions.sort();
        let sorted: Vec<String> = versions.iter().map(ToString::to_string).collect();
        assert_eq!(
            sorted,
            vec!["2.9.1.70000", "2.49.0.77525", "2.49.0.77525_ptr", "2.50.0.78000"]
        );
    }
}
