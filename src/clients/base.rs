use futures::future::join_all;
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    clients::fetcher::{FetchError, Fetcher},
    models::RequestResult,
};

pub const BURST_SIZE: usize = 20;

/// One request on its own task, so a panicking request settles as a failure
/// the same way a burst member does.
pub async fn fetch_single<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> RequestResult {
    let request = tokio::spawn(fetcher.fetch_json(url.to_string()));

    let outcome = match request.await {
        Err(join_err) => Err(FetchError::TaskFailed(join_err.to_string())),
        Ok(api_result) => api_result,
    };

    match outcome {
        Ok(body) => RequestResult::Single(body),
        Err(err) => {
            warn!(url = url, error = %err, "Single request failed");
            RequestResult::failed()
        }
    }
}

/// Fires `count` identical requests at once and waits for every one of them.
///
/// All requests are spawned before any is awaited. The join never short
/// circuits: a failure that arrives early still waits for the slowest request
/// before the burst settles.
pub async fn fetch_burst<F: Fetcher + ?Sized>(fetcher: &F, url: &str, count: usize) -> RequestResult {
    let tasks = (0..count).map(|index| {
        let request = fetcher.fetch_json(url.to_string());
        tokio::spawn(async move { (index, request.await) })
    });

    let results = join_all(tasks).await;

    let outcomes = results
        .into_iter()
        .map(|join_result| match join_result {
            Err(join_err) => Err(FetchError::TaskFailed(join_err.to_string())),
            Ok((index, api_result)) => {
                if let Err(err) = &api_result {
                    warn!(url = url, index = index, error = %err, "Burst request failed");
                }
                api_result
            }
        })
        .collect();

    aggregate_burst(outcomes)
}

/// Positional results if everything succeeded, otherwise the single marker.
pub fn aggregate_burst(outcomes: Vec<Result<Value, FetchError>>) -> RequestResult {
    let failures = outcomes.iter().filter(|outcome| outcome.is_err()).count();
    if failures > 0 {
        info!(
            total = outcomes.len(),
            failures = failures,
            "Burst discarded partial results"
        );
        return RequestResult::failed();
    }

    RequestResult::Burst(outcomes.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn aggregate_keeps_submission_order() {
        let outcomes = (0..BURST_SIZE).map(|i| Ok(json!({ "i": i }))).collect();
        let RequestResult::Burst(values) = aggregate_burst(outcomes) else {
            panic!("expected burst");
        };
        assert_eq!(values.len(), BURST_SIZE);
        for (i, value) in values.iter().enumerate() {
            assert_eq!(value["i"], json!(i));
        }
    }

    #[test]
    fn aggregate_one_failure_discards_everything() {
        let mut outcomes: Vec<Result<Value, FetchError>> =
            (0..BURST_SIZE).map(|i| Ok(json!(i))).collect();
        outcomes[7] = Err(FetchError::Decode("expected value".into()));
        assert_eq!(aggregate_burst(outcomes), RequestResult::failed());
    }

    #[test]
    fn aggregate_many_failures_still_one_marker() {
        let outcomes = (0..BURST_SIZE)
            .map(|_| Err(FetchError::TaskFailed("boom".into())))
            .collect();
        assert_eq!(aggregate_burst(outcomes), RequestResult::failed());
    }
}
