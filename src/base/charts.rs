use strum::IntoEnumIterator;

use crate::base;

/// Column labels of the monthly chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

/// Horizontal bar chart of quantity per category.
pub struct CategoryChart<'a> {
    charset: &'a base::Charset,
    rows: Vec<(&'a str, u64)>,
    label_charlen: usize,
    max_val: u64,
    max_barlen: usize,
}

impl<'a> CategoryChart<'a> {
    pub fn new(
        charset: &'a base::Charset,
        totals: &'a base::Aggregate<String, u64>,
        term_width: usize,
    ) -> Self {
        let rows = totals
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect::<Vec<_>>();
        let label_charlen = rows
            .iter()
            .map(|(k, _)| base::util::charlen(k))
            .max()
            .unwrap_or_default();
        let max_val = rows.iter().map(|&(_, v)| v).max().unwrap_or_default();
        let max_barlen = term_width
            .max(base::util::MIN_TERM_WIDTH)
            .saturating_sub(label_charlen)
            .saturating_sub(base::util::BOUNDING_SPACES_COUNT)
            .saturating_sub(1) // space between bar and value
            .saturating_sub(base::util::count_digits(max_val));
        Self {
            charset,
            rows,
            label_charlen,
            max_val,
            max_barlen,
        }
    }

    fn barlen(&self, val: u64) -> usize {
        if self.max_val == 0 {
            return 0;
        }
        let x = (val as f64) / (self.max_val as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }
}

impl std::fmt::Display for CategoryChart<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &(label, val) in &self.rows {
            let pad = self.label_charlen - base::util::charlen(label);
            write!(f, "{}{} {}", label, " ".repeat(pad), self.charset.chart_axis)?;
            let barlen = self.barlen(val);
            if barlen > 0 {
                let mut bars = self.charset.chart_bar.to_string().repeat(barlen);
                if self.charset.color {
                    bars = colored::Colorize::cyan(bars.as_str()).to_string();
                }
                write!(f, "{} ", bars)?;
            }
            writeln!(f, "{}", val)?;
        }
        Ok(())
    }
}

/// Products ranked by purchased quantity, with each one's share of the total.
pub struct ProductRanking<'a> {
    ranked: Vec<base::ProductCount<'a>>,
    total: u64,
}

impl<'a> ProductRanking<'a> {
    pub fn new(counts: &'a base::ProductCounts) -> Self {
        Self {
            ranked: counts.ranked(),
            total: counts.total(),
        }
    }

    /// Percentage of the total, or zero when nothing was purchased.
    fn share(&self, qty: u64) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            qty as f64 * 100.0 / self.total as f64
        }
    }
}

impl std::fmt::Display for ProductRanking<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank_len = base::util::count_digits(self.ranked.len() as u64);
        let name_len = self
            .ranked
            .iter()
            .map(|p| base::util::charlen(p.name))
            .max()
            .unwrap_or_default();
        let qty_len = self
            .ranked
            .iter()
            .map(|p| base::util::count_digits(p.qty))
            .max()
            .unwrap_or_default();
        for (i, p) in self.ranked.iter().enumerate() {
            let pad = name_len - base::util::charlen(p.name);
            writeln!(
                f,
                "{:>rank_len$}. {}{}  {:>qty_len$}  {:>5.1}%",
                i + 1,
                p.name,
                " ".repeat(pad),
                p.qty,
                self.share(p.qty),
            )?;
        }
        Ok(())
    }
}

/// Quantity per category per month, one row per category.
pub struct MonthlyChart<'a> {
    series: &'a base::Aggregate<String, base::MonthlyQty>,
}

impl<'a> MonthlyChart<'a> {
    pub fn new(series: &'a base::Aggregate<String, base::MonthlyQty>) -> Self {
        Self { series }
    }
}

impl std::fmt::Display for MonthlyChart<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const HEADER: &str = "Category";
        const TOTAL: &str = "Total";

        let label_len = self
            .series
            .keys()
            .map(|k| base::util::charlen(k))
            .chain([HEADER.len()])
            .max()
            .unwrap_or_default();
        let max_val = self
            .series
            .iter()
            .flat_map(|(_, m)| m.0)
            .max()
            .unwrap_or_default();
        let col = base::util::count_digits(max_val).max(3);
        let total_col = base::util::count_digits(self.series.sum().total()).max(TOTAL.len());

        write!(f, "{:<label_len$}", HEADER)?;
        for m in Month::iter() {
            write!(f, " {:>col$}", m.to_string())?;
        }
        writeln!(f, " {:>total_col$}", TOTAL)?;

        for (category, months) in self.series.iter() {
            let pad = label_len - base::util::charlen(category);
            write!(f, "{}{}", category, " ".repeat(pad))?;
            for qty in months.0 {
                write!(f, " {:>col$}", qty)?;
            }
            writeln!(f, " {:>total_col$}", months.total())?;
        }
        Ok(())
    }
}

pub fn revenue_line(revenue: base::Cents) -> String {
    format!("Total Revenue: ${}", revenue)
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::fixture;
    use rstest::rstest;

    use super::*;

    #[fixture]
    fn summary() -> base::Summary {
        let tl = r#"[
            {"product_id":1,"product_category":"Coffee","product_detail":"Latte","unit_price":4.25,"transaction_qty":8,"transaction_date":"2023-01-02","store_location":"X"},
            {"product_id":2,"product_category":"Tea","product_detail":"Earl Grey","unit_price":2.5,"transaction_qty":4,"transaction_date":"2023-03-01","store_location":"X"},
            {"product_id":3,"product_category":"Coffee","product_detail":"Espresso","unit_price":2.0,"transaction_qty":4,"transaction_date":"2023-12-20","store_location":"Y"},
            {"product_id":4,"product_category":"Bakery","product_detail":"Scone","unit_price":3.0,"transaction_qty":0,"transaction_date":"2023-06-01","store_location":"Y"}
        ]"#
        .parse::<base::Transactionlist>()
        .unwrap();
        base::summarize(&tl)
    }

    #[rstest]
    fn test_category_chart(summary: base::Summary) {
        // width 60: 60 - 6 (label) - 2 (" |") - 1 - 2 (digits of 12) = 49
        let charset = base::Charset::default();
        let chart = CategoryChart::new(&charset, &summary.category_totals, 0);
        let want = format!(
            "Coffee |{} 12\nTea    |{} 4\nBakery |0\n",
            "+".repeat(49),
            "+".repeat(16),
        );
        assert_eq!(chart.to_string(), want);
    }

    #[rstest]
    fn test_category_chart_unicode(summary: base::Summary) {
        let charset = base::Charset::default().with_unicode();
        let chart = CategoryChart::new(&charset, &summary.category_totals, 70);
        let got = chart.to_string();
        let first = got.lines().next().unwrap();
        assert_eq!(base::util::charlen(first), 70);
        assert!(first.starts_with("Coffee \u{2502}\u{2588}"));
    }

    #[test]
    fn test_category_chart_empty() {
        let charset = base::Charset::default();
        let totals = base::Aggregate::default();
        assert_eq!(CategoryChart::new(&charset, &totals, 80).to_string(), "");
    }

    #[test]
    fn test_category_chart_all_zero() {
        let charset = base::Charset::default();
        let totals = [("A".to_string(), 0)]
            .into_iter()
            .collect::<base::Aggregate<_, u64>>();
        assert_eq!(CategoryChart::new(&charset, &totals, 80).to_string(), "A |0\n");
    }

    #[rstest]
    fn test_product_ranking(summary: base::Summary) {
        let ranking = ProductRanking::new(&summary.product_counts);
        assert_eq!(
            ranking.to_string(),
            indoc! {"
                1. Latte      8   50.0%
                2. Earl Grey  4   25.0%
                3. Espresso   4   25.0%
                4. Scone      0    0.0%
            "}
        );
    }

    #[test]
    fn test_product_ranking_zero_total() {
        let tl = r#"[
            {"product_id":1,"product_category":"A","product_detail":"a","unit_price":1,"transaction_qty":0,"transaction_date":"2023-01-02","store_location":"X"}
        ]"#
        .parse::<base::Transactionlist>()
        .unwrap();
        let summary = base::summarize(&tl);
        assert_eq!(
            ProductRanking::new(&summary.product_counts).to_string(),
            "1. a  0    0.0%\n"
        );
    }

    #[rstest]
    fn test_monthly_chart(summary: base::Summary) {
        assert_eq!(
            MonthlyChart::new(&summary.monthly_series).to_string(),
            indoc! {"
                Category Jan Feb Mar Apr May Jun Jul Aug Sep Oct Nov Dec Total
                Coffee     8   0   0   0   0   0   0   0   0   0   0   4    12
                Tea        0   0   4   0   0   0   0   0   0   0   0   0     4
                Bakery     0   0   0   0   0   0   0   0   0   0   0   0     0
            "}
        );
    }

    #[rstest]
    #[case(base::Cents(0), "Total Revenue: $0.00")]
    #[case(base::Cents(1500), "Total Revenue: $15.00")]
    #[case(base::Cents(123456789), "Total Revenue: $1,234,567.89")]
    fn test_revenue_line(#[case] revenue: base::Cents, #[case] want: &str) {
        assert_eq!(revenue_line(revenue), want)
    }
}
