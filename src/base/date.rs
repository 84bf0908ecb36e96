/// A calendar date without time or timezone information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(time::Date);

const ISO8601: &[time::format_description::BorrowedFormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

impl Date {
    /// Zero-based month of year, so January is 0 and December is 11.
    pub fn month_index(self) -> usize {
        usize::from(u8::from(self.0.month())) - 1
    }
}

#[cfg(test)]
impl Date {
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = self.0.format(ISO8601).map_err(|_| std::fmt::Error)?;
        f.pad(&s)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error(transparent)]
    BadFormat(#[from] time::error::Parse),
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a `yyyy-mm-dd` date. A trailing time of day, separated by `T` or
    /// a space, is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        let day = s.split(['T', ' ']).next().unwrap_or(s);
        Ok(Self(time::Date::parse(day, ISO8601)?))
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
