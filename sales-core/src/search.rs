//! Debounced incremental city search and the dropdown's local UI state.
//!
//! `SearchSession` holds no timers itself. The caller schedules a timer per
//! keystroke and hands the returned [`ScheduledSearch`] back when it fires;
//! a monotonic generation decides whether the fire is still current and
//! whether a completed response may be applied. Anything older than the
//! latest keystroke is dropped, so responses land in request-issue order.

/// Where the search currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Searching,
    Results,
    Empty,
    Error,
}

/// Handle for a pending debounce timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledSearch {
    generation: u64,
    term: String,
}

/// A query that should be issued now. `seq` must be passed back to
/// [`SearchSession::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub term: String,
}

#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    generation: u64,
    status: SearchStatus,
    cities: Vec<String>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Searching
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Record a keystroke. Supersedes every earlier scheduled or in-flight
    /// search.
    pub fn input(&mut self, term: impl Into<String>) -> ScheduledSearch {
        self.generation += 1;
        self.status = SearchStatus::Idle;
        ScheduledSearch {
            generation: self.generation,
            term: term.into(),
        }
    }

    /// The debounce timer for `scheduled` elapsed. Returns the request to
    /// issue, or `None` if a newer keystroke superseded it.
    pub fn fire(&mut self, scheduled: &ScheduledSearch) -> Option<SearchRequest> {
        if scheduled.generation != self.generation {
            log::debug!(
                "[Sales] search: dropping superseded search for {:?}",
                scheduled.term
            );
            return None;
        }
        self.status = SearchStatus::Searching;
        Some(SearchRequest {
            seq: scheduled.generation,
            term: scheduled.term.clone(),
        })
    }

    /// Apply a finished request. Returns `false` (and changes nothing) if
    /// the request is stale.
    pub fn complete(&mut self, seq: u64, result: anyhow::Result<Vec<String>>) -> bool {
        if seq != self.generation {
            log::debug!("[Sales] search: ignoring stale response #{seq}");
            return false;
        }
        match result {
            Ok(cities) => {
                self.status = if cities.is_empty() {
                    SearchStatus::Empty
                } else {
                    SearchStatus::Results
                };
                self.cities = cities;
            }
            Err(e) => {
                log::error!("[Sales] search: error fetching cities: {e:#}");
                self.cities.clear();
                self.status = SearchStatus::Error;
            }
        }
        true
    }

    /// Invalidate everything pending, e.g. when the dropdown unmounts.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if self.status == SearchStatus::Searching {
            self.status = SearchStatus::Idle;
        }
    }
}

/// Text and expansion state of the dropdown input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub text: String,
    pub expanded: bool,
}

impl DropdownState {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Pick a candidate: show it in the input and collapse the list.
    pub fn select(&mut self, city: &str) {
        self.text = city.to_string();
        self.expanded = false;
    }

    /// Reset the text. Expansion is left alone: the clear control must not
    /// also act as a toggle.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn shows_clear(&self) -> bool {
        !self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_keystrokes_collapse_into_one_query() {
        let mut session = SearchSession::new();
        let timers: Vec<ScheduledSearch> = ["B", "Bo", "Bos"]
            .into_iter()
            .map(|t| session.input(t))
            .collect();

        let issued: Vec<SearchRequest> = timers.iter().filter_map(|t| session.fire(t)).collect();
        assert_eq!(issued.len(), 1);
        assert_eq!(issued[0].term, "Bos");
        assert!(session.is_loading());
    }

    #[test]
    fn completion_sets_results_or_empty() {
        let mut session = SearchSession::new();
        let timer = session.input("Bo");
        let request = session.fire(&timer).unwrap();
        assert!(session.complete(request.seq, Ok(vec!["Boston".to_string()])));
        assert_eq!(session.status(), SearchStatus::Results);
        assert_eq!(session.cities(), ["Boston".to_string()]);

        let timer = session.input("zzz");
        let request = session.fire(&timer).unwrap();
        session.complete(request.seq, Ok(Vec::new()));
        assert_eq!(session.status(), SearchStatus::Empty);
        assert!(session.cities().is_empty());
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut session = SearchSession::new();
        let first = session.input("B");
        let first_req = session.fire(&first).unwrap();

        let second = session.input("Bos");
        let second_req = session.fire(&second).unwrap();

        // the newer request answers first, then the old one arrives
        assert!(session.complete(second_req.seq, Ok(vec!["Boston".into()])));
        assert!(!session.complete(first_req.seq, Ok(vec!["Baltimore".into(), "Boston".into()])));
        assert_eq!(session.cities(), ["Boston".to_string()]);
        assert_eq!(session.status(), SearchStatus::Results);
    }

    #[test]
    fn keystroke_during_flight_clears_loading() {
        let mut session = SearchSession::new();
        let timer = session.input("B");
        let request = session.fire(&timer).unwrap();
        assert!(session.is_loading());

        let _pending = session.input("Bo");
        assert!(!session.is_loading());
        assert!(!session.complete(request.seq, Ok(vec!["Boston".into()])));
        assert!(!session.is_loading());
    }

    #[test]
    fn failure_clears_candidates() {
        let mut session = SearchSession::new();
        let timer = session.input("");
        let request = session.fire(&timer).unwrap();
        session.complete(request.seq, Ok(vec!["Boston".into(), "NYC".into()]));

        let timer = session.input("N");
        let request = session.fire(&timer).unwrap();
        session.complete(request.seq, Err(anyhow::anyhow!("timeout")));
        assert_eq!(session.status(), SearchStatus::Error);
        assert!(session.cities().is_empty());
        assert!(!session.is_loading());
    }

    #[test]
    fn cancel_drops_in_flight_response() {
        let mut session = SearchSession::new();
        let timer = session.input("Bo");
        let request = session.fire(&timer).unwrap();
        session.cancel();
        assert!(!session.is_loading());
        assert!(!session.complete(request.seq, Ok(vec!["Boston".into()])));
        assert!(session.cities().is_empty());
    }

    #[test]
    fn cancel_invalidates_pending_timer() {
        let mut session = SearchSession::new();
        let timer = session.input("Bos");
        session.cancel();
        assert_eq!(session.fire(&timer), None);
    }

    #[test]
    fn clear_leaves_expansion_untouched() {
        let mut dropdown = DropdownState::default();
        dropdown.toggle();
        dropdown.set_text("Bos");
        assert!(dropdown.shows_clear());

        // the component also stops the click from reaching the toggle
        dropdown.clear();
        assert!(dropdown.expanded, "clear must not collapse the list");
        assert!(dropdown.text.is_empty());
        assert!(!dropdown.shows_clear());
    }

    #[test]
    fn select_fills_text_and_collapses() {
        let mut dropdown = DropdownState::default();
        dropdown.toggle();
        dropdown.select("Boston");
        assert_eq!(dropdown.text, "Boston");
        assert!(!dropdown.expanded);
    }
}
