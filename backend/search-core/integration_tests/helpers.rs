// Shared fixtures for the integration tests

use search_core::config::ApiConfig;
use search_core::messages::Messages;
use search_core::pipeline::{SearchOutcome, SearchPipeline, SearchUpdate};

use common::RedactedApiKey;

use std::time::Duration;

use tokio::sync::watch;

pub const TEST_KEY: &str = "test-api-key";

pub const VOLUMES_PATH: &str = "/books/v1/volumes";

pub const FREAKONOMICS_BODY: &str = r#"{
    "totalItems": 1,
    "items": [{
        "volumeInfo": {
            "title": "Freakonomics",
            "authors": ["Steven D. Levitt", "Stephen J. Dubner"],
            "previewLink": "http://example.com/book"
        }
    }]
}"#;

/// Pipeline pointed at a wiremock server, with short timeouts so the
/// timeout test finishes quickly.
pub fn test_pipeline(server_uri: &str) -> SearchPipeline {
    let api = ApiConfig {
        base_url: format!("{server_uri}{VOLUMES_PATH}"),
        max_results: 10,
        lang_restrict: String::from("en"),
        connect_timeout_secs: 5,
        read_timeout_secs: 1,
    };

    SearchPipeline::new(
        api,
        RedactedApiKey::new(String::from(TEST_KEY)),
        Messages::default(),
    )
    .expect("pipeline construction should succeed")
}

/// Block until the watch channel reports the target generation finished.
pub async fn wait_for_finish(
    rx: &mut watch::Receiver<SearchUpdate>,
    target: u64,
) -> SearchOutcome {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            {
                let update = rx.borrow_and_update();
                if let SearchUpdate::Finished {
                    generation,
                    outcome,
                } = &*update
                {
                    if *generation == target {
                        return outcome.clone();
                    }
                }
            }
            rx.changed().await.expect("session dropped mid-test");
        }
    })
    .await
    .expect("search generation did not finish in time")
}
