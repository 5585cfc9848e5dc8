//! View state owned by the forecast controller.
//!
//! State changes only through [`ForecastController::complete`], which either
//! replaces the whole view model or merges in an error message. Each fetch is
//! tagged with a [`Ticket`]; a completion whose ticket is not the latest one
//! issued is discarded, so a slow response for an earlier selection can never
//! overwrite the current one.

use crate::constants::FETCH_FAILED_MESSAGE;
use crate::fetcher::FetchError;
use crate::models::ViewModel;
use crate::region::Region;

/// Identifies one in-flight fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub region: Region,
    seq: u64,
}

#[derive(Debug, Default)]
pub struct ForecastController {
    view: ViewModel,
    region: Region,
    latest_seq: u64,
}

impl ForecastController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Records a new selection and issues the ticket for its fetch
    pub fn begin(&mut self, region: Region) -> Ticket {
        self.region = region;
        self.latest_seq += 1;
        Ticket {
            region,
            seq: self.latest_seq,
        }
    }

    /// Applies a finished fetch. Returns `false` if the ticket was stale.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<ViewModel, FetchError>) -> bool {
        if ticket.seq != self.latest_seq {
            tracing::debug!(
                "Discarding stale forecast for {} (request {}, latest {})",
                ticket.region,
                ticket.seq,
                self.latest_seq
            );
            return false;
        }

        self.view = match outcome {
            Ok(view) => ViewModel { error: None, ..view },
            Err(e) => {
                tracing::error!("Failed to fetch forecast for {}: {}", ticket.region, e);
                std::mem::take(&mut self.view).with_error(FETCH_FAILED_MESSAGE)
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn loaded(weather: &str) -> ViewModel {
        ViewModel {
            date: vec!["6月1日".into()],
            weather: vec![weather.into()],
            temps: vec!["25".into()],
            temps_future: [vec!["30".into()], vec!["20".into()]],
            error: None,
        }
    }

    fn http_error() -> FetchError {
        FetchError::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[test]
    fn test_success_replaces_view() {
        let mut controller = ForecastController::new();
        let ticket = controller.begin(Region::Osaka);

        assert!(controller.complete(ticket, Ok(loaded("晴れ"))));
        assert_eq!(controller.view(), &loaded("晴れ"));
        assert_eq!(controller.region(), Region::Osaka);
    }

    #[test]
    fn test_failure_keeps_stale_fields_and_sets_error() {
        let mut controller = ForecastController::new();
        let ticket = controller.begin(Region::Tokyo);
        controller.complete(ticket, Ok(loaded("晴れ")));

        let ticket = controller.begin(Region::Sapporo);
        assert!(controller.complete(ticket, Err(http_error())));

        let view = controller.view();
        assert_eq!(view.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(view.weather, vec!["晴れ"]);
        assert_eq!(view.temps, vec!["25"]);
        assert_eq!(view.date, vec!["6月1日"]);
    }

    #[test]
    fn test_success_after_failure_clears_error() {
        let mut controller = ForecastController::new();
        let ticket = controller.begin(Region::Tokyo);
        controller.complete(ticket, Err(http_error()));

        let ticket = controller.begin(Region::Tokyo);
        controller.complete(ticket, Ok(loaded("くもり")));

        assert_eq!(controller.view().error, None);
        assert_eq!(controller.view().weather, vec!["くもり"]);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut controller = ForecastController::new();
        let slow = controller.begin(Region::Tokyo);
        let fast = controller.begin(Region::Osaka);

        assert!(controller.complete(fast, Ok(loaded("雨"))));
        assert!(!controller.complete(slow, Ok(loaded("晴れ"))));
        assert!(!controller.complete(slow, Err(http_error())));

        assert_eq!(controller.view(), &loaded("雨"));
        assert_eq!(controller.region(), Region::Osaka);
    }

    #[test]
    fn test_reselecting_same_region_supersedes_earlier_request() {
        let mut controller = ForecastController::new();
        let first = controller.begin(Region::Tokyo);
        let second = controller.begin(Region::Tokyo);

        assert!(!controller.complete(first, Ok(loaded("晴れ"))));
        assert!(controller.complete(second, Ok(loaded("くもり"))));
        assert_eq!(controller.view().weather, vec!["くもり"]);
    }
}
