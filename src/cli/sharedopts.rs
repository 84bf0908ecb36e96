#[derive(clap::Args)]
pub struct DataOpts {
    /// Transactions file to read instead of the configured one
    ///
    /// Must contain a JSON array of transaction records. If the file cannot be
    /// read or parsed, the dashboard shows no transactions.
    #[arg(long, value_name = "PATH")]
    pub data: Option<std::path::PathBuf>,
}

#[derive(clap::Args)]
pub struct FilterOpts {
    /// Store location to show, or 'all'
    ///
    /// Matching is exact and case-sensitive.
    #[arg(short, long, value_name = "LOCATION", default_value = "all")]
    pub location: crate::base::Selection,

    /// Product category to show, or 'all'
    ///
    /// Matching is exact and case-sensitive.
    #[arg(short, long, value_name = "CATEGORY", default_value = "all")]
    pub category: crate::base::Selection,
}
