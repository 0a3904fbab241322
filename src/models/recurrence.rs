//! Repeat interval for recurring transactions

use std::fmt;
use std::str::FromStr;

/// How often a transaction repeats, in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Recurrence {
    /// Single transaction, no expansion
    #[default]
    None,
    /// Repeat every N days
    Every(u32),
}

impl Recurrence {
    pub fn daily() -> Self {
        Self::Every(1)
    }

    pub fn weekly() -> Self {
        Self::Every(7)
    }

    pub fn biweekly() -> Self {
        Self::Every(14)
    }

    pub fn monthly() -> Self {
        Self::Every(30)
    }

    pub fn yearly() -> Self {
        Self::Every(365)
    }

    /// Interval in days, if this recurrence can be expanded
    pub fn days(&self) -> Option<u32> {
        match self {
            Self::Every(days) if *days > 0 => Some(*days),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.days().is_none()
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Every(1) => write!(f, "daily"),
            Self::Every(7) => write!(f, "weekly"),
            Self::Every(14) => write!(f, "biweekly"),
            Self::Every(30) => write!(f, "monthly"),
            Self::Every(365) => write!(f, "yearly"),
            Self::Every(days) => write!(f, "every {} days", days),
        }
    }
}

impl FromStr for Recurrence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "none" | "" => Ok(Self::None),
            "daily" => Ok(Self::daily()),
            "weekly" => Ok(Self::weekly()),
            "biweekly" => Ok(Self::biweekly()),
            "monthly" => Ok(Self::monthly()),
            "yearly" => Ok(Self::yearly()),
            other => {
                let digits = other.strip_suffix('d').unwrap_or(other);
                digits
                    .parse::<u32>()
                    .map(Self::Every)
                    .map_err(|_| format!("invalid recurrence '{}'", other))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_intervals() {
        assert_eq!(Recurrence::daily().days(), Some(1));
        assert_eq!(Recurrence::weekly().days(), Some(7));
        assert_eq!(Recurrence::monthly().days(), Some(30));
        assert_eq!(Recurrence::None.days(), None);
    }

    #[test]
    fn test_zero_days_not_expandable() {
        assert!(Recurrence::Every(0).is_none());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Weekly".parse::<Recurrence>(), Ok(Recurrence::Every(7)));
        assert_eq!("5".parse::<Recurrence>(), Ok(Recurrence::Every(5)));
        assert_eq!("10d".parse::<Recurrence>(), Ok(Recurrence::Every(10)));
        assert_eq!("none".parse::<Recurrence>(), Ok(Recurrence::None));
        assert!("fortnightly".parse::<Recurrence>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Recurrence::weekly().to_string(), "weekly");
        assert_eq!(Recurrence::Every(5).to_string(), "every 5 days");
    }
}
