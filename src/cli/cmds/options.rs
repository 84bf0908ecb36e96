use crate::base;
use crate::cli;

/// List the values offered by the location and category filters
#[derive(clap::Parser)]
pub struct Options {
    #[command(flatten)]
    data_opts: cli::sharedopts::DataOpts,
}

impl Options {
    pub fn run(&self, fs: &base::Fs, config: &base::Config) -> anyhow::Result<cli::Output> {
        let dataset = cli::util::load_dataset(fs, config, &self.data_opts);
        let options = base::Options::from_transactions(&dataset);
        Ok(cli::Output::Str(options.to_string()))
    }
}
