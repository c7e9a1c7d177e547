// Discover command on real trees

use crate::common::{create_doc_tree, test_config};
use docsync::cli::commands::discover::{self, DiscoverArgs};
use docsync::cli::OutputFormat;
use docsync::core::services::Services;
use std::sync::Arc;

// Unroutable; discover never contacts Solr
const NO_SOLR: &str = "http://127.0.0.1:9/solr";

#[tokio::test]
async fn test_discover_configured_root() {
    let tree = create_doc_tree(&[("a.pdf", "x"), ("nested/B.DOC", "x"), ("c.txt", "x")]);
    let services = Arc::new(Services::new(test_config(NO_SOLR, tree.path())).unwrap());

    let result = discover::execute(DiscoverArgs { path: None }, &services, OutputFormat::Json).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_discover_explicit_path_overrides_config() {
    let tree = create_doc_tree(&[("docs/a.pdf", "x")]);
    let config = test_config(NO_SOLR, &tree.path().join("missing"));
    let services = Arc::new(Services::new(config).unwrap());

    let args = DiscoverArgs {
        path: Some(tree.path().join("docs")),
    };
    let result = discover::execute(args, &services, OutputFormat::Human).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_discover_missing_root_errors() {
    let tree = create_doc_tree(&[]);
    let services = Arc::new(Services::new(test_config(NO_SOLR, tree.path())).unwrap());

    let args = DiscoverArgs {
        path: Some(tree.path().join("nope")),
    };
    let err = discover::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("nope"));
}
