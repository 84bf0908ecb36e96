pub mod init;
pub mod options;
pub mod show;
pub mod watch;

use crate::base;
use crate::cli;

/// Sales analytics dashboard
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(init::Init),
    Show(show::Show),
    Options(options::Options),
    Watch(watch::Watch),
}

impl Root {
    /// Runs the command. `input` is only read by commands that take events
    /// from stdin.
    pub fn run<R, W>(self, fs: &base::Fs, input: R, out: &mut W) -> anyhow::Result<()>
    where
        R: std::io::BufRead,
        W: std::io::Write,
    {
        // Every command except init needs a readable config.
        let output = match self.command {
            Commands::Init(cmd) => cmd.run(fs)?,
            Commands::Show(cmd) => cmd.run(fs, &cli::util::read_config(fs)?)?,
            Commands::Options(cmd) => cmd.run(fs, &cli::util::read_config(fs)?)?,
            Commands::Watch(cmd) => {
                return cmd.run(fs, &cli::util::read_config(fs)?, input, out);
            }
        };
        write_output(out, &output)
    }
}

fn write_output<W>(out: &mut W, output: &cli::Output) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    write!(out, "{}", output)?;
    Ok(())
}
