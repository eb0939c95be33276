//! The app's state machine.
//!
//! Every user event and every completed network call is an [`Action`].
//! [`Session::apply`] updates the state and returns the [`Effect`]s the UI
//! must carry out: issue a search, move the map marker, issue a fetch, or
//! redraw the chart. Keeping this pure lets the event contract be tested
//! without a browser.

use crate::coordinate::Coordinate;
use crate::dataset::{project, ChartFrame, DisplayFilter, DisplayFilters};
use crate::date_range::DateRange;
use crate::error::ServiceError;
use crate::geocoding::{GeocodingResult, MAX_RESULTS};
use crate::timeseries::{FetchRequest, TimeSeries};
use log::{debug, error, info};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Page mounted: place the first marker and load the initial range.
    Start,
    SubmitSearch(String),
    SearchCompleted(Result<Vec<GeocodingResult>, ServiceError>),
    SelectResult(usize),
    MapClicked(Coordinate),
    SetStartDate(String),
    SetEndDate(String),
    SetFilter(DisplayFilter, bool),
    FetchCompleted(Result<TimeSeries, ServiceError>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Search(String),
    /// Remove the current marker and place one at the coordinate.
    PlaceMarker(Coordinate),
    Fetch(FetchRequest),
    Render,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub coordinate: Coordinate,
    pub date_range: DateRange,
    pub filters: DisplayFilters,
    pub results: Vec<GeocodingResult>,
    pub series: Option<TimeSeries>,
    pub loading: bool,
    pub error: Option<&'static str>,
}

impl Session {
    pub fn new(coordinate: Coordinate, date_range: DateRange) -> Self {
        Self {
            coordinate,
            date_range,
            filters: DisplayFilters::default(),
            results: Vec::new(),
            series: None,
            loading: false,
            error: None,
        }
    }

    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Start => {
                let mut effects = vec![Effect::PlaceMarker(self.coordinate)];
                effects.extend(self.reload());
                effects
            }
            Action::SubmitSearch(query) => {
                let query = query.trim();
                if query.is_empty() {
                    return Vec::new();
                }
                vec![Effect::Search(query.to_string())]
            }
            Action::SearchCompleted(Ok(mut results)) => {
                results.truncate(MAX_RESULTS);
                info!("Geocoding returned {} result(s)", results.len());
                self.results = results;
                self.error = None;
                Vec::new()
            }
            Action::SearchCompleted(Err(e)) => {
                self.fail("Geocoding search", &e);
                self.results.clear();
                Vec::new()
            }
            Action::SelectResult(index) => {
                let Some(result) = self.results.get(index) else {
                    debug!("Ignoring selection of missing result {}", index);
                    return Vec::new();
                };
                match result.coordinate() {
                    Ok(coordinate) => {
                        self.results.clear();
                        self.move_to(coordinate)
                    }
                    Err(e) => {
                        self.fail("Geocoding selection", &e);
                        Vec::new()
                    }
                }
            }
            Action::MapClicked(coordinate) => self.move_to(coordinate),
            Action::SetStartDate(start) => {
                self.date_range.start = start;
                self.reload().into_iter().collect()
            }
            Action::SetEndDate(end) => {
                self.date_range.end = end;
                self.reload().into_iter().collect()
            }
            Action::SetFilter(filter, enabled) => {
                self.filters.set(filter, enabled);
                if self.series.is_some() {
                    vec![Effect::Render]
                } else {
                    Vec::new()
                }
            }
            Action::FetchCompleted(result) => {
                self.loading = false;
                match result {
                    Ok(series) => {
                        info!("Loaded {} daily observations", series.len());
                        self.series = Some(series);
                        self.error = None;
                        vec![Effect::Render]
                    }
                    Err(e) => {
                        self.fail("Timeseries fetch", &e);
                        Vec::new()
                    }
                }
            }
        }
    }

    /// The frame to draw for the current series and filters.
    pub fn chart_frame(&self) -> Option<ChartFrame> {
        self.series
            .as_ref()
            .map(|series| project(series, &self.filters))
    }

    fn move_to(&mut self, coordinate: Coordinate) -> Vec<Effect> {
        if !coordinate.is_finite() {
            self.fail(
                "Location change",
                &ServiceError::InvalidCoordinate(format!("{:?}", coordinate)),
            );
            return Vec::new();
        }
        self.coordinate = coordinate;
        self.error = None;
        let mut effects = vec![Effect::PlaceMarker(coordinate)];
        effects.extend(self.reload());
        effects
    }

    fn reload(&mut self) -> Option<Effect> {
        let request = FetchRequest::from_inputs(self.coordinate, &self.date_range)?;
        self.loading = true;
        Some(Effect::Fetch(request))
    }

    fn fail(&mut self, what: &str, e: &ServiceError) {
        error!("{} failed: {}", what, e);
        self.error = Some(e.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_ERROR_MESSAGE;
    use crate::timeseries::Timestamp;

    fn session() -> Session {
        Session::new(
            Coordinate::new(52.1, 5.18),
            DateRange::new("2020-01-01", "2021-12-31"),
        )
    }

    fn small_series() -> TimeSeries {
        let timestamps = ["2020-01-01T00:00:00Z", "2020-01-02T00:00:00Z"]
            .iter()
            .map(|raw| Timestamp::parse(raw).unwrap())
            .collect();
        TimeSeries::new(timestamps, vec![Some(1.0), None], vec![Some(5.0), Some(6.0)]).unwrap()
    }

    fn result(lat: &str, lon: &str, name: &str) -> GeocodingResult {
        GeocodingResult {
            lat: lat.into(),
            lon: lon.into(),
            display_name: name.into(),
        }
    }

    fn fetches(effects: &[Effect]) -> Vec<FetchRequest> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Fetch(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn start_places_marker_and_loads() {
        let mut s = session();
        let effects = s.apply(Action::Start);
        assert_eq!(effects[0], Effect::PlaceMarker(Coordinate::new(52.1, 5.18)));
        assert_eq!(fetches(&effects).len(), 1);
        assert!(s.loading);
    }

    #[test]
    fn toggling_filters_never_fetches() {
        let mut s = session();
        s.apply(Action::FetchCompleted(Ok(small_series())));
        for filter in [
            DisplayFilter::StackYears,
            DisplayFilter::FirstLastOnly,
            DisplayFilter::ShowMin,
            DisplayFilter::ShowMax,
        ] {
            for enabled in [true, false] {
                let effects = s.apply(Action::SetFilter(filter, enabled));
                assert_eq!(effects, vec![Effect::Render]);
            }
        }
        assert!(!s.loading);
    }

    #[test]
    fn toggling_before_any_data_does_nothing() {
        let mut s = session();
        assert!(s.apply(Action::SetFilter(DisplayFilter::StackYears, true)).is_empty());
        assert!(s.filters.stack_years);
    }

    #[test]
    fn date_change_fetches() {
        let mut s = session();
        let effects = s.apply(Action::SetEndDate("2022-06-30".into()));
        let requests = fetches(&effects);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].end.to_string(), "2022-06-30");
        assert!(s.loading);
    }

    #[test]
    fn start_date_change_fetches_new_range() {
        let mut s = session();
        let effects = s.apply(Action::SetStartDate("2019-03-01".into()));
        let requests = fetches(&effects);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].start.to_string(), "2019-03-01");
        assert_eq!(requests[0].coordinate, s.coordinate);
        assert!(s.loading);
    }

    #[test]
    fn empty_start_date_skips_fetch_without_error() {
        let mut s = session();
        let effects = s.apply(Action::SetStartDate(String::new()));
        assert!(effects.is_empty());
        assert!(!s.loading);
        assert_eq!(s.error, None);
    }

    #[test]
    fn failed_fetch_keeps_previous_series() {
        let mut s = session();
        s.apply(Action::FetchCompleted(Ok(small_series())));
        s.apply(Action::SetStartDate("2019-01-01".into()));
        assert!(s.loading);

        let effects = s.apply(Action::FetchCompleted(Err(ServiceError::Status(500))));
        assert!(effects.is_empty());
        assert!(!s.loading);
        assert_eq!(s.error, Some(GENERIC_ERROR_MESSAGE));
        assert_eq!(s.series, Some(small_series()));
    }

    #[test]
    fn successful_fetch_clears_loading_and_renders() {
        let mut s = session();
        s.apply(Action::Start);
        let effects = s.apply(Action::FetchCompleted(Ok(small_series())));
        assert_eq!(effects, vec![Effect::Render]);
        assert!(!s.loading);
        assert_eq!(s.chart_frame().unwrap().datasets.len(), 2);
    }

    #[test]
    fn selecting_result_moves_marker_and_fetches_once() {
        let mut s = session();
        s.apply(Action::SearchCompleted(Ok(vec![
            result("48.8566", "2.3522", "Paris"),
            result("51.5072", "-0.1276", "London"),
        ])));
        let effects = s.apply(Action::SelectResult(1));
        let london = Coordinate::new(51.5072, -0.1276);
        assert_eq!(effects[0], Effect::PlaceMarker(london));
        let requests = fetches(&effects);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].coordinate, london);
        assert_eq!(s.coordinate, london);
        assert!(s.results.is_empty());
    }

    #[test]
    fn map_click_clears_error_and_fetches() {
        let mut s = session();
        s.apply(Action::SearchCompleted(Err(ServiceError::Network("offline".into()))));
        assert_eq!(s.error, Some(GENERIC_ERROR_MESSAGE));

        let spot = Coordinate::new(40.0, -3.7);
        let effects = s.apply(Action::MapClicked(spot));
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], Effect::PlaceMarker(spot));
        assert_eq!(fetches(&effects)[0].coordinate, spot);
        assert_eq!(s.error, None);
    }

    #[test]
    fn location_change_with_incomplete_range_only_moves_marker() {
        let mut s = session();
        s.apply(Action::SetEndDate(String::new()));
        let effects = s.apply(Action::MapClicked(Coordinate::new(1.0, 2.0)));
        assert_eq!(effects, vec![Effect::PlaceMarker(Coordinate::new(1.0, 2.0))]);
    }

    #[test]
    fn search_results_truncated_and_failure_clears_them() {
        let mut s = session();
        let many = (0..5)
            .map(|i| result("1", "2", &format!("place {}", i)))
            .collect();
        s.apply(Action::SearchCompleted(Ok(many)));
        assert_eq!(s.results.len(), 3);

        s.apply(Action::SearchCompleted(Err(ServiceError::Status(502))));
        assert!(s.results.is_empty());
        assert_eq!(s.error, Some(GENERIC_ERROR_MESSAGE));
    }

    #[test]
    fn blank_search_is_ignored() {
        let mut s = session();
        assert!(s.apply(Action::SubmitSearch("   ".into())).is_empty());
        assert_eq!(
            s.apply(Action::SubmitSearch(" Utrecht ".into())),
            vec![Effect::Search("Utrecht".into())]
        );
    }

    #[test]
    fn unparseable_result_keeps_coordinate() {
        let mut s = session();
        s.apply(Action::SearchCompleted(Ok(vec![result("x", "y", "broken")])));
        let effects = s.apply(Action::SelectResult(0));
        assert!(effects.is_empty());
        assert_eq!(s.coordinate, Coordinate::new(52.1, 5.18));
        assert_eq!(s.error, Some(GENERIC_ERROR_MESSAGE));
    }
}
