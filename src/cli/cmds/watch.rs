use anyhow::Context;

use crate::base;
use crate::cli;

/// Render the dashboard, then re-render on filter changes read from stdin
///
/// The available locations and categories are listed first. Each input line is one of:
///   location <LOCATION>   set the location filter ('all' clears it)
///   category <CATEGORY>   set the category filter ('all' clears it)
///   quit                  stop
///
/// Every change is applied to the full dataset together with the current
/// value of the other filter. Blank lines are ignored. Invalid lines print
/// a usage hint and the available options again.
#[derive(clap::Parser)]
#[command(verbatim_doc_comment)]
pub struct Watch {
    /// Page of the transaction table to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    #[command(flatten)]
    data_opts: cli::sharedopts::DataOpts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
enum Control {
    Location,
    Category,
    Quit,
}

const USAGE: &str = "expected 'location <LOCATION>', 'category <CATEGORY>' or 'quit'";

#[derive(Debug, PartialEq, Eq)]
enum Line {
    Blank,
    Event(base::FilterEvent),
    Quit,
    Invalid,
}

fn parse_line(line: &str) -> Line {
    let line = line.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match (word.parse::<Control>(), rest) {
        (Ok(Control::Quit), "") => Line::Quit,
        (Ok(Control::Location), value) if !value.is_empty() => {
            Line::Event(base::FilterEvent::LocationChanged(value.into()))
        }
        (Ok(Control::Category), value) if !value.is_empty() => {
            Line::Event(base::FilterEvent::CategoryChanged(value.into()))
        }
        _ => Line::Invalid,
    }
}

impl Watch {
    pub fn run<R, W>(
        &self,
        fs: &base::Fs,
        config: &base::Config,
        input: R,
        out: &mut W,
    ) -> anyhow::Result<()>
    where
        R: std::io::BufRead,
        W: std::io::Write,
    {
        let dataset = cli::util::load_dataset(fs, config, &self.data_opts);
        let mut dashboard = base::Dashboard::new(dataset);
        let mut screen = base::Screen::new(cli::util::layout(config, self.page));

        writeln!(out, "{}", dashboard.options())?;
        dashboard.start(&mut screen);
        write_frame(out, &dashboard, &screen)?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            match parse_line(&line) {
                Line::Blank => continue,
                Line::Quit => break,
                Line::Invalid => {
                    writeln!(out, "{}", USAGE)?;
                    write!(out, "{}", dashboard.options())?;
                }
                Line::Event(event) => {
                    dashboard.handle(event, &mut screen);
                    write_frame(out, &dashboard, &screen)?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }
}

fn write_frame<W>(
    out: &mut W,
    dashboard: &base::Dashboard,
    screen: &base::Screen,
) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    let output = cli::Output::Frame {
        filter: cli::util::filter_line(dashboard.filter()),
        frame: screen.frame().unwrap_or_default().to_string(),
    };
    write!(out, "{}", output)?;
    writeln!(out)?;
    Ok(())
}
