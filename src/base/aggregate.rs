/// Values an [`Aggregate`] can sum. Accumulating saturates at the type's
/// bounds instead of overflowing.
pub trait Accumulate: Copy + Default {
    fn accumulate(&mut self, rhs: Self);
}

macro_rules! impl_saturating_accumulate {
    ($($t:ty),+) => {
        $(
            impl Accumulate for $t {
                fn accumulate(&mut self, rhs: Self) {
                    *self = self.saturating_add(rhs);
                }
            }
        )+
    };
}

impl_saturating_accumulate!(u64, i64);

/// Keyed accumulator that remembers the order in which keys were first added.
#[derive(Debug, Clone)]
pub struct Aggregate<K, V> {
    index: std::collections::HashMap<K, usize>,
    entries: Vec<(K, V)>,
    sum: V,
}

impl<K, V> Default for Aggregate<K, V>
where
    V: Default,
{
    fn default() -> Self {
        Self {
            index: Default::default(),
            entries: Default::default(),
            sum: Default::default(),
        }
    }
}

// Order is part of equality: two aggregates with the same entries added in a
// different order are not equal.
impl<K, V> PartialEq for Aggregate<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.sum == other.sum
    }
}

impl<K, V> Eq for Aggregate<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V> Aggregate<K, V> {
    pub fn sum(&self) -> V
    where
        V: Copy,
    {
        self.sum
    }

    /// Adds `value` to the entry for `key`. Returns true if `key` was not
    /// present before.
    pub fn add(&mut self, key: &K, value: V) -> bool
    where
        K: Clone + Eq + std::hash::Hash,
        V: Accumulate,
    {
        let inserted = match self.index.get(key) {
            Some(&i) => {
                self.entries[i].1.accumulate(value);
                false
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key.clone(), value));
                true
            }
        };
        self.sum.accumulate(value);
        inserted
    }

    /// Iterates in first-added order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, V)> + '_
    where
        V: Copy,
    {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    /// Keys in first-added order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }
}

#[cfg(test)]
impl<K, V> Aggregate<K, V> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: std::borrow::Borrow<Q> + Eq + std::hash::Hash,
        Q: Eq + std::hash::Hash + ?Sized,
        V: Copy,
    {
        self.index.get(key).map(|&i| self.entries[i].1)
    }
}

impl<K, V> FromIterator<(K, V)> for Aggregate<K, V>
where
    K: Clone + Eq + std::hash::Hash,
    V: Accumulate,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut agg = Aggregate::<K, V>::default();
        for (k, v) in iter {
            agg.add(&k, v);
        }
        agg
    }
}
