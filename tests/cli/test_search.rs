// Search command against a fake Solr

use crate::common::{error_body, test_config, FakeSolr};
use docsync::cli::commands::search::{self, SearchArgs};
use docsync::cli::OutputFormat;
use docsync::core::services::Services;
use std::path::Path;
use std::sync::Arc;

fn services_for(fake: &FakeSolr) -> Arc<Services> {
    Arc::new(Services::new(test_config(&fake.url(), Path::new("."))).unwrap())
}

#[tokio::test]
async fn test_search_clamps_limit() {
    let fake = FakeSolr::start(|_| {
        (
            200,
            r#"{"response":{"numFound":0,"start":0,"docs":[]}}"#.to_string(),
        )
    })
    .await;
    let services = services_for(&fake);

    let args = SearchArgs {
        query: "*:*".to_string(),
        limit: 50_000,
    };
    search::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap();

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].query().contains("rows=1000"));
}

#[tokio::test]
async fn test_search_rejects_empty_query() {
    let fake = FakeSolr::start(|_| (200, "{}".to_string())).await;
    let services = services_for(&fake);

    let args = SearchArgs {
        query: "   ".to_string(),
        limit: 10,
    };
    let err = search::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("empty"));
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn test_search_reports_solr_error() {
    let fake = FakeSolr::start(|_| (400, error_body(400, "undefined field nope"))).await;
    let services = services_for(&fake);

    let args = SearchArgs {
        query: "nope:1".to_string(),
        limit: 10,
    };
    let err = search::execute(args, &services, OutputFormat::Json)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("undefined field nope"));
}
