use crate::base;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub charset: base::Charset,
    pub term_width: usize,
    pub page_length: usize,
    /// 1-based page of the transaction table.
    pub page: usize,
}

/// Terminal render target. Holds the frame currently on display; presenting a
/// new summary disposes of it first.
pub struct Screen {
    layout: Layout,
    frame: Option<String>,
    disposed: usize,
}

impl Screen {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            frame: None,
            disposed: 0,
        }
    }

    /// The frame currently on display, if anything has been presented.
    pub fn frame(&self) -> Option<&str> {
        self.frame.as_deref()
    }

    fn render(&self, summary: &base::Summary) -> String {
        if summary.transactions.is_empty() {
            return "No transactions.\n".to_string();
        }
        let charset = &self.layout.charset;
        let title = |s: &str| {
            let dashes = charset.dash.to_string().repeat(base::util::charlen(s));
            format!("{}\n{}\n", s, dashes)
        };
        let mut frame = String::new();
        frame.push_str(&base::charts::revenue_line(summary.total_revenue));
        frame.push_str("\n\n");
        frame.push_str(&title("Product categories"));
        frame.push_str(
            &base::charts::CategoryChart::new(
                charset,
                &summary.category_totals,
                self.layout.term_width,
            )
            .to_string(),
        );
        frame.push('\n');
        frame.push_str(&title("Most purchased products"));
        frame.push_str(&base::charts::ProductRanking::new(&summary.product_counts).to_string());
        frame.push('\n');
        frame.push_str(&title("Monthly quantity by category"));
        frame.push_str(&base::charts::MonthlyChart::new(&summary.monthly_series).to_string());
        frame.push('\n');
        frame.push_str(&title("Transactions"));
        frame.push_str(
            &base::Table::new(
                charset,
                &summary.transactions,
                self.layout.page_length,
                self.layout.page,
            )
            .to_string(),
        );
        frame
    }
}

#[cfg(test)]
impl Screen {
    /// Number of frames replaced so far.
    pub fn disposed(&self) -> usize {
        self.disposed
    }
}

impl base::Presenter for Screen {
    fn present(&mut self, summary: &base::Summary) {
        if self.frame.take().is_some() {
            self.disposed += 1;
            tracing::trace!(disposed = self.disposed, "replacing frame");
        }
        self.frame = Some(self.render(summary));
    }
}
