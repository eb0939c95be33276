//! Native HTTP client for the geocoding and timeseries services.
//!
//! Shares URL building and response parsing with the browser path; only the
//! transport differs.

use crate::config::ServiceConfig;
use crate::error::{Result, ServiceError};
use crate::geocoding::{parse_results, search_url, GeocodingResult};
use crate::timeseries::{FetchRequest, TimeSeries};
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 60;
const USER_AGENT: &str = concat!("wxh/", env!("CARGO_PKG_VERSION"));

pub struct WeatherClient {
    http: Client,
    config: ServiceConfig,
}

impl WeatherClient {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Search for a place name; at most three matches.
    pub async fn search(&self, query: &str) -> Result<Vec<GeocodingResult>> {
        let body = self.get(&search_url(&self.config.geocoding_url, query)).await?;
        parse_results(&body)
    }

    /// Fetch daily min/max temperature for one location and date range.
    pub async fn fetch_series(&self, request: &FetchRequest) -> Result<TimeSeries> {
        let url = request.url(&self.config.timeseries_url, &self.config.dataset_id);
        let body = self.get(&url).await?;
        TimeSeries::from_geojson(&body)
    }

    async fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            warn!("Bad response status for {}: {}", url, response.status());
            return Err(ServiceError::Status(response.status().as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::date_range::DateRange;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WeatherClient {
        WeatherClient::new(ServiceConfig {
            geocoding_url: server.uri(),
            timeseries_url: server.uri(),
            dataset_id: "obs".to_string(),
            ..ServiceConfig::default()
        })
        .unwrap()
    }

    fn request() -> FetchRequest {
        FetchRequest::from_inputs(
            Coordinate::new(52.1, 5.18),
            &DateRange::new("2020-01-01", "2020-01-02"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn search_truncates_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "De Bilt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"lat": "52.1", "lon": "5.18", "display_name": "De Bilt, Utrecht"},
                {"lat": "52.2", "lon": "5.19", "display_name": "Bilthoven"},
                {"lat": "52.3", "lon": "5.20", "display_name": "Zeist"},
                {"lat": "52.4", "lon": "5.21", "display_name": "Utrecht"}
            ])))
            .mount(&server)
            .await;

        let results = client_for(&server).search("De Bilt").await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].display_name, "De Bilt, Utrecht");
    }

    #[tokio::test]
    async fn fetch_series_sends_both_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/timeseries/historical/obs"))
            .and(query_param("output_format", "geojson"))
            .and(query_param("start", "2020-01-01T00:00:00.000Z"))
            .and(query_param("end", "2020-01-02T00:00:00.000Z"))
            .and(query_param("lat_lon", "52.1,5.18"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "timestamps": ["2020-01-01T00:00:00Z", "2020-01-02T00:00:00Z"],
                "features": [{"properties": {"parameters": {
                    "TN": {"data": [-1.0, null]},
                    "TX": {"data": [4.5, 3.0]}
                }}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let series = client_for(&server).fetch_series(&request()).await.unwrap();
        assert_eq!(series.min, vec![Some(-1.0), None]);
        assert_eq!(series.max, vec![Some(4.5), Some(3.0)]);
    }

    #[tokio::test]
    async fn server_error_maps_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_series(&request()).await.unwrap_err();
        assert_eq!(err, ServiceError::Status(500));
    }

    #[tokio::test]
    async fn unexpected_shape_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "timestamps": ["2020-01-01T00:00:00Z"],
                "features": [{"properties": {"parameters": {"TN": {"data": [1.0]}}}}]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_series(&request()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Malformed(_)));
    }
}
