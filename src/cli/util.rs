use anyhow::Context;

use crate::base;
use crate::cli;

/// Reads config, falling back to defaults if the working directory has none.
pub fn read_config(fs: &base::Fs) -> anyhow::Result<base::Config> {
    fs.read::<base::Config>()
        .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))
}

/// Loads the dataset from `--data` or from the configured file. Never fails;
/// unreadable data yields no transactions.
pub fn load_dataset(
    fs: &base::Fs,
    config: &base::Config,
    opts: &cli::sharedopts::DataOpts,
) -> base::Transactionlist {
    let path = match &opts.data {
        Some(p) => fs.resolve(p),
        None => fs.resolve(&config.data_file),
    };
    base::Source::load(&base::FileSource::new(path))
}

/// Terminal width, or 0 if unknown.
#[cfg(not(test))]
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

/// Terminal width, or 0 if unknown.
#[cfg(test)]
pub fn term_width() -> usize {
    0
}

pub fn layout(config: &base::Config, page: usize) -> base::Layout {
    base::Layout {
        charset: base::Charset::from_config(config),
        term_width: term_width(),
        page_length: config.page_length,
        page,
    }
}

pub fn filter_line(filter: &base::Filter) -> String {
    format!(
        "Location: {} | Category: {}",
        filter.location, filter.category
    )
}
