use crate::base;

/// Transactions in the order they were read. Never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transactionlist(Vec<base::Transaction>);

impl Transactionlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Transaction> {
        self.0.iter()
    }
}

#[cfg(test)]
impl Transactionlist {
    pub fn as_slice(&self) -> &[base::Transaction] {
        &self.0
    }
}

impl IntoIterator for Transactionlist {
    type Item = base::Transaction;
    type IntoIter = std::vec::IntoIter<base::Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<base::Transaction> for Transactionlist {
    fn from_iter<T: IntoIterator<Item = base::Transaction>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Transaction> for Transactionlist {
    fn from_iter<T: IntoIterator<Item = &'a base::Transaction>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::str::FromStr for Transactionlist {
    type Err = serde_json::Error;

    /// Parses a JSON array of transactions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str::<Vec<base::Transaction>>(s).map(Self)
    }
}
