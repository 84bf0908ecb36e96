use crate::base;
use crate::base::Accumulate;

pub const MONTHS: usize = 12;

/// Quantities per month of year. Index 0 is January.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthlyQty(pub [u64; MONTHS]);

impl MonthlyQty {
    /// `qty` in the month at `index`, zero elsewhere.
    pub fn single(index: usize, qty: u64) -> Self {
        let mut months = [0; MONTHS];
        months[index] = qty;
        Self(months)
    }

    /// Sum over all months. Saturates at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.0.iter().fold(0, |acc, &qty| acc.saturating_add(qty))
    }
}

impl Accumulate for MonthlyQty {
    fn accumulate(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            a.accumulate(b);
        }
    }
}

impl std::ops::Index<usize> for MonthlyQty {
    type Output = u64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Purchased quantity per product. A product's name is the detail of the
/// first transaction seen for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCounts {
    qty: base::Aggregate<base::ProductId, u64>,
    names: std::collections::HashMap<base::ProductId, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCount<'a> {
    pub name: &'a str,
    pub qty: u64,
}

impl ProductCounts {
    fn add(&mut self, t: &base::Transaction) {
        if self.qty.add(t.product_id(), t.qty()) {
            self.names.insert(t.product_id().clone(), t.detail().to_string());
        }
    }

    /// Sum of all quantities.
    pub fn total(&self) -> u64 {
        self.qty.sum()
    }

    /// Iterates in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = ProductCount<'_>> + '_ {
        self.qty.iter().map(|(id, qty)| ProductCount {
            name: self.names.get(id).map(String::as_str).unwrap_or_default(),
            qty,
        })
    }

    /// Most purchased first. Ties keep first-seen order.
    pub fn ranked(&self) -> Vec<ProductCount<'_>> {
        let mut ranked = self.iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.qty.cmp(&a.qty));
        ranked
    }
}

#[cfg(test)]
impl ProductCounts {
    pub fn is_empty(&self) -> bool {
        self.qty.is_empty()
    }

    pub fn len(&self) -> usize {
        self.qty.len()
    }

    pub fn get(&self, id: &str) -> Option<ProductCount<'_>> {
        let name = self.names.get(id)?;
        let qty = self.qty.get(id)?;
        Some(ProductCount { name, qty })
    }
}

/// Everything the dashboard shows, derived from one list of transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Quantity per category.
    pub category_totals: base::Aggregate<String, u64>,
    pub product_counts: ProductCounts,
    /// Quantity per category per month.
    pub monthly_series: base::Aggregate<String, MonthlyQty>,
    pub total_revenue: base::Cents,
    /// The input, unchanged.
    pub transactions: base::Transactionlist,
}

/// Reduces `transactions` in a single pass. Maps are ordered by the first
/// appearance of their keys.
pub fn summarize(transactions: &base::Transactionlist) -> Summary {
    let mut summary = Summary {
        transactions: transactions.clone(),
        ..Default::default()
    };
    for t in transactions.iter() {
        let category = t.category().to_string();
        summary.total_revenue.accumulate(t.revenue());
        summary.category_totals.add(&category, t.qty());
        summary.product_counts.add(t);
        summary
            .monthly_series
            .add(&category, MonthlyQty::single(t.date().month_index(), t.qty()));
    }
    summary
}
