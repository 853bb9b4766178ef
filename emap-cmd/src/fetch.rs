//! Download zone details snapshots from the electricity map API.

use emap_chart::TimeAverage;
use emap_types::ZoneDetails;
use log::{info, warn};
use reqwest::{Client, StatusCode};

pub const DEFAULT_API_URL: &str = "https://app-backend.electricitymap.org";

/// Endpoint serving the states of `zone` for one aggregation window.
pub fn details_url(api_url: &str, zone: &str, time_average: TimeAverage) -> String {
    format!(
        "{}/v8/details/{}/{}",
        api_url.trim_end_matches('/'),
        time_average.as_str(),
        zone
    )
}

/// Fetch a snapshot, retrying with exponential backoff.
///
/// The body is only returned once it parses as zone details.
pub async fn fetch_zone_details(
    client: &Client,
    api_url: &str,
    zone: &str,
    time_average: TimeAverage,
) -> anyhow::Result<String> {
    let max_tries = 3;
    let mut sleep_millis: u64 = 1000;
    let url = details_url(api_url, zone, time_average);

    for attempt in 1..=max_tries {
        match client.get(&url).send().await {
            Ok(response) => {
                if response.status() != StatusCode::OK {
                    warn!(
                        "Attempt {}/{}: Bad response status for {}: {}",
                        attempt,
                        max_tries,
                        zone,
                        response.status()
                    );
                } else {
                    match response.text().await {
                        Ok(body) => match ZoneDetails::from_json(&body) {
                            Ok(details) => {
                                info!(
                                    "Fetched {} states for {}",
                                    details.zone_states.len(),
                                    zone
                                );
                                return Ok(body);
                            }
                            Err(e) => {
                                warn!(
                                    "Attempt {}/{}: Unexpected body for {}: {}",
                                    attempt, max_tries, zone, e
                                );
                            }
                        },
                        Err(e) => {
                            warn!(
                                "Attempt {}/{}: Failed to read response body for {}: {}",
                                attempt, max_tries, zone, e
                            );
                        }
                    }
                }
            }
            Err(e) => {
                warn!(
                    "Attempt {}/{}: Request failed for {}: {}",
                    attempt, max_tries, zone, e
                );
            }
        }

        if attempt < max_tries {
            info!(
                "Sleeping for {} milliseconds before retry for {}",
                sleep_millis, zone
            );
            tokio::time::sleep(std::time::Duration::from_millis(sleep_millis)).await;
            sleep_millis *= 2;
        }
    }

    anyhow::bail!("Giving up on {} after {} attempts", url, max_tries)
}

pub async fn run_fetch(
    api_url: &str,
    zone: &str,
    time_average: TimeAverage,
    output: &str,
) -> anyhow::Result<()> {
    let client = Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;
    let body = fetch_zone_details(&client, api_url, zone, time_average).await?;
    std::fs::write(output, &body)?;
    info!("Fetch complete. Output: {}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_follows_time_average() {
        assert_eq!(
            details_url("https://example.org/", "DE", TimeAverage::Daily),
            "https://example.org/v8/details/daily/DE"
        );
        assert_eq!(
            details_url(DEFAULT_API_URL, "US-CAL-CISO", TimeAverage::Hourly),
            "https://app-backend.electricitymap.org/v8/details/hourly/US-CAL-CISO"
        );
    }
}
