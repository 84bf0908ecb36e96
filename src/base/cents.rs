use crate::base;

/// Integral representation of monetary quantities up to two decimal places.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Add,
    derive_more::Sum,
)]
pub struct Cents(pub i64);

impl Cents {
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Price of `qty` units. Saturates instead of overflowing.
    pub fn times(self, qty: u64) -> Self {
        let qty = i64::try_from(qty).unwrap_or(i64::MAX);
        Self(self.0.saturating_mul(qty))
    }
}

impl base::Accumulate for Cents {
    fn accumulate(&mut self, rhs: Self) {
        base::Accumulate::accumulate(&mut self.0, rhs.0)
    }
}

impl std::fmt::Display for Cents {
    /// Formats with two decimal places and thousands separators. Negative
    /// quantities are wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cents = self.abs().0;
        let mut bytes = Vec::<u8>::new();
        macro_rules! pop_digit {
            () => {
                bytes.push(b'0' + (cents % 10) as u8);
                cents /= 10
            };
        }

        pop_digit!();
        pop_digit!();
        bytes.push(b'.');
        pop_digit!();
        let mut i = 1;
        while cents > 0 {
            if i % 3 == 0 {
                bytes.push(b',');
            }
            i += 1;
            pop_digit!();
        }
        bytes.reverse();
        if self.0 < 0 {
            bytes.insert(0, b'(');
            bytes.push(b')');
        }
        let s = std::str::from_utf8(&bytes).map_err(|_| std::fmt::Error)?;
        f.pad(s)
    }
}

impl std::str::FromStr for Cents {
    type Err = std::num::ParseIntError;

    /// Parses a cents quantity from a human-readable string, which may contain
    /// comma thousands separators and any number of decimal places. Decimal
    /// places beyond the second are discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut s = s.replace(',', "");
        if !["", "+", "-", ".", "+.", "-."].contains(&s.as_str()) {
            let mut chars = s.chars().collect::<Vec<_>>();
            chars.push('0');
            chars.push('0');
            if let Some(i) = chars.iter().copied().position(|c| c == '.') {
                chars.swap(i, i + 1);
                chars.swap(i + 1, i + 2);
                chars.truncate(i + 2);
            };
            s = chars.into_iter().collect::<String>();
        }
        s.parse::<i64>().map(Self)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("price '{0}' is not a decimal number")]
    NotANumber(String),
    #[error("price '{0}' is negative")]
    Negative(String),
    #[error("price '{0}' has more than two decimal places")]
    TooPrecise(String),
}

/// Deserializes a non-negative price given either as a JSON number or as a
/// numeric string.
pub fn deserialize_price<'de, D>(deserializer: D) -> Result<Cents, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(serde_json::Number),
        String(String),
    }

    let s = match <Raw as serde::Deserialize>::deserialize(deserializer)? {
        Raw::Number(n) => n.to_string(),
        Raw::String(s) => s,
    };
    parse_price(&s).map_err(serde::de::Error::custom)
}

/// Parses a non-negative price. Prices that cannot be represented in whole
/// cents are rejected rather than rounded.
fn parse_price(s: &str) -> Result<Cents, PriceError> {
    let s = s.trim();
    let not_a_number = || PriceError::NotANumber(s.to_string());
    let too_precise = || PriceError::TooPrecise(s.to_string());

    // Exponent notation is how serde_json prints very small and very large
    // floats.
    let cents = if s.contains(['e', 'E']) {
        let x = s.parse::<f64>().map_err(|_| not_a_number())? * 100.0;
        if !x.is_finite() {
            return Err(not_a_number());
        }
        if (x - x.round()).abs() > 1e-6 {
            return Err(too_precise());
        }
        Cents(x.round() as i64)
    } else {
        if let Some((_, frac)) = s.split_once('.') {
            if frac.chars().skip(2).any(|c| ('1'..='9').contains(&c)) {
                return Err(too_precise());
            }
        }
        s.parse::<Cents>().map_err(|_| not_a_number())?
    };
    if cents < Cents(0) {
        return Err(PriceError::Negative(s.to_string()));
    }
    Ok(cents)
}
