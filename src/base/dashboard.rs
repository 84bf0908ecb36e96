use crate::base;

/// A change made to one of the two filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    LocationChanged(base::Selection),
    CategoryChanged(base::Selection),
}

/// Receives every recomputed summary.
pub trait Presenter {
    fn present(&mut self, summary: &base::Summary);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing has been filtered since the dashboard started.
    Unfiltered,
    /// At least one filter control has changed.
    Filtered,
}

/// Drives filter -> summarize -> present over a dataset that never changes.
pub struct Dashboard {
    dataset: base::Transactionlist,
    options: base::Options,
    filter: base::Filter,
    state: State,
}

impl Dashboard {
    pub fn new(dataset: base::Transactionlist) -> Self {
        let options = base::Options::from_transactions(&dataset);
        Self {
            dataset,
            options,
            filter: base::Filter::default(),
            state: State::Unfiltered,
        }
    }

    pub fn options(&self) -> &base::Options {
        &self.options
    }

    pub fn filter(&self) -> &base::Filter {
        &self.filter
    }

    /// Presents the summary of the whole dataset.
    pub fn start<P>(&self, presenter: &mut P)
    where
        P: Presenter + ?Sized,
    {
        presenter.present(&base::summarize(&self.dataset));
    }

    /// Applies one control change and presents the result. The current values
    /// of both controls are always applied to the full dataset, never to the
    /// previous result.
    pub fn handle<P>(&mut self, event: FilterEvent, presenter: &mut P)
    where
        P: Presenter + ?Sized,
    {
        match event {
            FilterEvent::LocationChanged(sel) => self.filter.location = sel,
            FilterEvent::CategoryChanged(sel) => self.filter.category = sel,
        }
        tracing::debug!(
            from = ?self.state,
            location = %self.filter.location,
            category = %self.filter.category,
            "filter changed"
        );
        self.state = State::Filtered;
        let filtered = self.filter.apply(&self.dataset);
        presenter.present(&base::summarize(&filtered));
    }
}

#[cfg(test)]
impl Dashboard {
    pub fn state(&self) -> State {
        self.state
    }

    pub fn dataset(&self) -> &base::Transactionlist {
        &self.dataset
    }
}
