//! Debug events emitted after each accepted guess

use super::schedule::Selection;
use crate::core::Pattern;

/// What happened on one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEvent {
    pub letter: char,
    pub selection: Selection,
    pub pattern: Pattern,
    pub pool_size: usize,
    pub family_count: usize,
}

/// Consumer of guess events
pub trait GuessObserver {
    fn observe(&mut self, event: &GuessEvent);
}

/// Writes guess events to the `log` facade at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl LogObserver {
    /// The two debug lines written for `event`: the family choice, then the outcome
    fn describe(event: &GuessEvent) -> (&'static str, String) {
        let choice = match event.selection {
            Selection::Hardest => "picking hardest family",
            Selection::Mercy => "picking second hardest family",
            Selection::MercyUnavailable => {
                "should pick second hardest family this turn, but only one family available; \
                 picking hardest"
            }
        };
        let outcome = format!(
            "guess '{}': new pattern is {}, new family has {} words ({} families considered)",
            event.letter, event.pattern, event.pool_size, event.family_count
        );
        (choice, outcome)
    }
}

impl GuessObserver for LogObserver {
    fn observe(&mut self, event: &GuessEvent) {
        let (choice, outcome) = Self::describe(event);
        log::debug!("{choice}");
        log::debug!("{outcome}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(selection: Selection) -> GuessEvent {
        GuessEvent {
            letter: 'a',
            selection,
            pattern: Pattern::from("-e--"),
            pool_size: 2,
            family_count: 2,
        }
    }

    #[test]
    fn describes_each_selection() {
        assert_eq!(
            LogObserver::describe(&event(Selection::Hardest)).0,
            "picking hardest family"
        );
        assert_eq!(
            LogObserver::describe(&event(Selection::Mercy)).0,
            "picking second hardest family"
        );
        assert_eq!(
            LogObserver::describe(&event(Selection::MercyUnavailable)).0,
            "should pick second hardest family this turn, but only one family available; \
             picking hardest"
        );
    }

    #[test]
    fn outcome_line_reports_new_state() {
        let (_, outcome) = LogObserver::describe(&event(Selection::Hardest));
        assert_eq!(
            outcome,
            "guess 'a': new pattern is -e--, new family has 2 words (2 families considered)"
        );
    }

    #[test]
    fn observing_without_a_logger_is_harmless() {
        let mut observer = LogObserver;
        observer.observe(&event(Selection::MercyUnavailable));
    }
}
