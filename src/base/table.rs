use crate::base;

const HEADERS: [&str; 6] = ["#", "Product", "Price", "Qty", "Date", "Location"];

/// One page of the transaction table.
pub struct Table<'a> {
    charset: &'a base::Charset,
    /// Cells of the rows on this page, already formatted.
    rows: Vec<[String; 6]>,
    widths: [usize; 6],
    first: usize,
    total: usize,
    page: usize,
    pages: usize,
}

impl<'a> Table<'a> {
    /// `page` is 1-based. Out of range pages are clamped to the first or last
    /// page. A `page_length` of zero is treated as one.
    pub fn new(
        charset: &'a base::Charset,
        transactions: &'a base::Transactionlist,
        page_length: usize,
        page: usize,
    ) -> Self {
        let page_length = page_length.max(1);
        let total = transactions.len();
        let pages = total.div_ceil(page_length).max(1);
        let page = page.clamp(1, pages);
        let first = (page - 1) * page_length;

        let rows = transactions
            .iter()
            .enumerate()
            .skip(first)
            .take(page_length)
            .map(|(i, t)| {
                [
                    (i + 1).to_string(),
                    t.detail().to_string(),
                    format!("${}", t.unit_price()),
                    t.qty().to_string(),
                    t.date().to_string(),
                    t.location().to_string(),
                ]
            })
            .collect::<Vec<_>>();

        let mut widths = HEADERS.map(base::util::charlen);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(base::util::charlen(cell));
            }
        }

        Self {
            charset,
            rows,
            widths,
            first,
            total,
            page,
            pages,
        }
    }

    fn draw_row(&self, f: &mut std::fmt::Formatter<'_>, cells: &[&str; 6]) -> std::fmt::Result {
        for (i, (cell, &width)) in cells.iter().zip(&self.widths).enumerate() {
            if i > 0 {
                write!(f, " {} ", self.charset.chart_axis)?;
            }
            let pad = " ".repeat(width - base::util::charlen(cell));
            // Numbers are right aligned.
            if matches!(i, 0 | 2 | 3) {
                write!(f, "{}{}", pad, cell)?;
            } else if i == cells.len() - 1 {
                write!(f, "{}", cell)?;
            } else {
                write!(f, "{}{}", cell, pad)?;
            }
        }
        writeln!(f)
    }
}

impl std::fmt::Display for Table<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.total == 0 {
            return writeln!(f, "No transactions.");
        }
        self.draw_row(f, &HEADERS)?;
        for (i, &width) in self.widths.iter().enumerate() {
            if i > 0 {
                write!(f, "{}{}{}", self.charset.dash, self.charset.cross, self.charset.dash)?;
            }
            write!(f, "{}", self.charset.dash.to_string().repeat(width))?;
        }
        writeln!(f)?;
        for row in &self.rows {
            let cells = [
                row[0].as_str(),
                row[1].as_str(),
                row[2].as_str(),
                row[3].as_str(),
                row[4].as_str(),
                row[5].as_str(),
            ];
            self.draw_row(f, &cells)?;
        }
        writeln!(
            f,
            "Showing {} to {} of {} entries (page {} of {})",
            self.first + 1,
            self.first + self.rows.len(),
            self.total,
            self.page,
            self.pages,
        )
    }
}
