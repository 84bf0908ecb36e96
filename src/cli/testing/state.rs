use crate::base;

/// Name of the transactions file written by [`StrState::with_data`]. Matches
/// the default `dataFile` config value.
const DATA_FILE: &str = "transactions.json";

/// File contents of a working directory, as read back after commands ran.
/// Unset fields correspond to nonexistent files.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<String>,
    files: std::collections::BTreeMap<String, String>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`].
    pub fn with_config(mut self, config: base::Config) -> Self {
        self.config = Some(config.to_string());
        self
    }

    /// Reads the config file from `fs`, along with the files named in
    /// `expected`. Other files under `fs` are ignored.
    pub fn from_fs(fs: &base::Fs, expected: &State) -> Self {
        let read = |p: std::path::PathBuf| std::fs::read_to_string(p).ok();
        Self {
            config: read(fs.path::<base::Config>()),
            files: expected
                .files
                .keys()
                .filter_map(|name| Some((name.clone(), read(fs.resolve(name))?)))
                .collect(),
        }
    }
}

/// Representation of a working directory's file contents. Unset fields
/// correspond to nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    files: Vec<(&'a str, &'a str)>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`] file contents. The contents need
    /// not be valid.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Sets the contents of the default transactions file.
    pub fn with_data(self, s: &'a str) -> Self {
        self.with_file(DATA_FILE, s)
    }

    /// Sets the contents of a file at `path`, relative to the directory.
    pub fn with_file(mut self, path: &'a str, s: &'a str) -> Self {
        self.files.push((path, s));
        self
    }

    /// Writes string contents verbatim to `fs`.
    pub fn to_fs(&self, fs: &base::Fs) {
        if let Some(s) = self.config {
            std::fs::write(fs.path::<base::Config>(), s).unwrap();
        }
        for (path, s) in &self.files {
            let p = fs.resolve(path);
            if let Some(parent) = p.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(p, s).unwrap();
        }
    }

    pub fn to_state(&self) -> State {
        State {
            config: self.config.map(str::to_string),
            files: self
                .files
                .iter()
                .map(|&(p, s)| (p.to_string(), s.to_string()))
                .collect(),
        }
    }
}
