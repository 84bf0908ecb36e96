mod cmds;
mod output;
mod sharedopts;
mod util;

#[cfg(test)]
mod testing;

pub use cmds::Root;
use output::Output;
