use crate::base;

/// Value of one filter control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    /// No constraint on this dimension.
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub const ALL: &'static str = "all";

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(s) => s == value,
        }
    }
}

impl std::str::FromStr for Selection {
    type Err = std::convert::Infallible;

    /// `"all"` is the sentinel for no constraint. Anything else is matched
    /// exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == Self::ALL {
            Self::All
        } else {
            Self::Only(s.to_string())
        })
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(sel) => sel,
            Err(e) => match e {},
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL),
            Self::Only(s) => f.write_str(s),
        }
    }
}

/// Conjunction of a store location and a product category constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub location: Selection,
    pub category: Selection,
}

impl Filter {
    pub fn new(location: Selection, category: Selection) -> Self {
        Self { location, category }
    }

    pub fn matches(&self, t: &base::Transaction) -> bool {
        self.location.matches(t.location()) && self.category.matches(t.category())
    }

    /// Returns the transactions that pass both constraints, in their original
    /// order.
    pub fn apply(&self, transactions: &base::Transactionlist) -> base::Transactionlist {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Distinct values of `key` in first-seen order.
fn distinct<'a, F>(transactions: &'a base::Transactionlist, key: F) -> Vec<String>
where
    F: Fn(&'a base::Transaction) -> &'a str,
{
    let mut seen = std::collections::HashSet::new();
    transactions
        .iter()
        .map(key)
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

pub fn distinct_locations(transactions: &base::Transactionlist) -> Vec<String> {
    distinct(transactions, base::Transaction::location)
}

pub fn distinct_categories(transactions: &base::Transactionlist) -> Vec<String> {
    distinct(transactions, base::Transaction::category)
}

/// Choices offered by the two filter controls. Each starts with
/// [`Selection::All`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub locations: Vec<Selection>,
    pub categories: Vec<Selection>,
}

impl Options {
    pub fn from_transactions(transactions: &base::Transactionlist) -> Self {
        fn with_all(values: Vec<String>) -> Vec<Selection> {
            std::iter::once(Selection::All)
                .chain(values.into_iter().map(Selection::Only))
                .collect()
        }

        Self {
            locations: with_all(distinct_locations(transactions)),
            categories: with_all(distinct_categories(transactions)),
        }
    }
}

impl std::fmt::Display for Options {
    /// Lists both controls' choices, one per line. Writes a terminating
    /// newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Locations:")?;
        for sel in &self.locations {
            writeln!(f, "  {}", sel)?;
        }
        writeln!(f, "Categories:")?;
        for sel in &self.categories {
            writeln!(f, "  {}", sel)?;
        }
        Ok(())
    }
}
