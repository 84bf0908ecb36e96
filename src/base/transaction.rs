use crate::base;

/// Identifier of a product. Sources write it either as a number or as a
/// string; both are kept in their string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub struct ProductId(String);

#[cfg(test)]
impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(serde_json::Number),
            String(String),
        }

        Ok(match <Raw as serde::Deserialize>::deserialize(deserializer)? {
            Raw::Number(n) => Self(n.to_string()),
            Raw::String(s) => Self(s),
        })
    }
}

/// One purchase line item. Fields not listed here are ignored when reading.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Transaction {
    product_id: ProductId,
    product_category: String,
    product_detail: String,
    #[serde(deserialize_with = "base::cents::deserialize_price")]
    unit_price: base::Cents,
    transaction_qty: u64,
    transaction_date: base::Date,
    store_location: String,
}

impl Transaction {
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn category(&self) -> &str {
        &self.product_category
    }

    pub fn detail(&self) -> &str {
        &self.product_detail
    }

    pub fn unit_price(&self) -> base::Cents {
        self.unit_price
    }

    pub fn qty(&self) -> u64 {
        self.transaction_qty
    }

    pub fn date(&self) -> base::Date {
        self.transaction_date
    }

    pub fn location(&self) -> &str {
        &self.store_location
    }

    /// `unit_price * transaction_qty`.
    pub fn revenue(&self) -> base::Cents {
        self.unit_price.times(self.transaction_qty)
    }
}

impl std::str::FromStr for Transaction {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
