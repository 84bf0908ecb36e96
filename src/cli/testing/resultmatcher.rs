/// Helps check if a command printed the expected output.
pub enum ResultMatcher<'a> {
    /// Asserts result is `Ok` and its output equals the given value.
    Ok(&'a str),

    /// Asserts result is `Ok` and its output matches the given glob pattern.
    /// Matching is case-insensitive.
    OkGlob(&'a str),

    /// Asserts result is `Err` and that the error chain, formatted as
    /// `cause: cause: ...`, matches the given glob pattern. Matching is
    /// case-insensitive.
    ErrGlob(&'a str),
}

impl ResultMatcher<'_> {
    pub fn assert_matches(&self, result: anyhow::Result<String>) {
        match self {
            ResultMatcher::Ok(want) => {
                if let Ok(got) = &result {
                    if got == want {
                        return;
                    }
                    text_diff::print_diff(want, got, "\n");
                    panic!("diff between want (red) and got (green), see above");
                }
                panic!("\n\twant: Ok({:?})\n\tgot: {:?}\n", want, result);
            }
            ResultMatcher::OkGlob(pattern) => {
                let pattern_obj = wildmatch::WildMatch::new(pattern.to_lowercase().as_str());
                let matches = matches!(
                    result,
                    Ok(ref got) if pattern_obj.matches(got.to_lowercase().as_str()),
                );
                assert!(
                    matches,
                    "\n\twant matches: Ok({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
            ResultMatcher::ErrGlob(pattern) => {
                let pattern_obj = wildmatch::WildMatch::new(pattern.to_lowercase().as_str());
                let matches = matches!(
                    result,
                    Err(ref got_err) if pattern_obj.matches(format!("{:#}", got_err).to_lowercase().as_str()),
                );
                assert!(
                    matches,
                    "\n\twant matches: Err({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
        }
    }
}
