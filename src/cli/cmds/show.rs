use crate::base;
use crate::cli;

/// Render the dashboard once
#[derive(clap::Parser)]
pub struct Show {
    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,

    /// Page of the transaction table to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    #[command(flatten)]
    data_opts: cli::sharedopts::DataOpts,
}

impl Show {
    pub fn run(&self, fs: &base::Fs, config: &base::Config) -> anyhow::Result<cli::Output> {
        let dataset = cli::util::load_dataset(fs, config, &self.data_opts);
        let filter = base::Filter::new(
            self.filter_opts.location.clone(),
            self.filter_opts.category.clone(),
        );
        let summary = base::summarize(&filter.apply(&dataset));

        let mut screen = base::Screen::new(cli::util::layout(config, self.page));
        base::Presenter::present(&mut screen, &summary);
        Ok(cli::Output::Frame {
            filter: cli::util::filter_line(&filter),
            frame: screen.frame().unwrap_or_default().to_string(),
        })
    }
}
