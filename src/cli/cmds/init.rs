use anyhow::Context;

use crate::base;
use crate::cli;

/// Write a default config file in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing config to defaults
    #[arg(long)]
    reset_config: bool,
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let already_initialized = fs.is_repo();

        let path = fs.path::<base::Config>();
        let config = if self.reset_config || !already_initialized {
            base::Config::default()
        } else {
            cli::util::read_config(fs)?
        };
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;

        Ok(if !already_initialized {
            cli::Output::Str(format!("Dashboard initialized in '{}'", fs.dir().display()))
        } else if self.reset_config {
            cli::Output::Str("Dashboard configuration reset to defaults.".to_string())
        } else {
            cli::Output::Str(format!(
                "Dashboard reinitialized in '{}'",
                fs.dir().display()
            ))
        })
    }
}
