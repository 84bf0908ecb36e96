/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    /// A rendered dashboard frame, preceded by the filter values it was
    /// computed with.
    Frame { filter: String, frame: String },
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Frame { filter, frame } => {
                writeln!(f, "{}", filter)?;
                writeln!(f)?;
                write!(f, "{}", frame)
            }
        }
    }
}
