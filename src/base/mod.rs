pub mod aggregate;
pub mod cents;
pub mod charset;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod date;
pub mod filter;
pub mod fs;
pub mod screen;
pub mod source;
pub mod summary;
pub mod table;
pub mod transaction;
pub mod transactionlist;
pub mod util;

pub use aggregate::Accumulate;
pub use aggregate::Aggregate;
pub use cents::Cents;
pub use charset::Charset;
pub use config::Config;
pub use dashboard::Dashboard;
pub use dashboard::FilterEvent;
pub use dashboard::Presenter;
pub use date::Date;
pub use filter::Filter;
pub use filter::Options;
pub use filter::Selection;
pub use fs::Fs;
pub use screen::Layout;
pub use screen::Screen;
pub use source::FileSource;
pub use source::Source;
pub use summary::MonthlyQty;
pub use summary::ProductCount;
pub use summary::ProductCounts;
pub use summary::Summary;
pub use summary::summarize;
pub use table::Table;
pub use transaction::ProductId;
pub use transaction::Transaction;
pub use transactionlist::Transactionlist;
