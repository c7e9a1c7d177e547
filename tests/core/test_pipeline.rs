// Reindex pipeline tests against an in-memory index

use crate::common::{create_doc_tree, IndexCall, RecordingIndex};
use docsync::core::config::Config;
use docsync::core::indexer::ReindexPipeline;
use docsync::core::types::{FileOutcome, IndexDocument};

fn default_pipeline() -> ReindexPipeline {
    ReindexPipeline::from_config(&Config::default())
}

#[tokio::test]
async fn test_one_good_one_damaged() {
    let tree = create_doc_tree(&[("a.pdf", "%PDF-1.4"), ("b.doc", "\u{d0}\u{cf}")]);
    let index = RecordingIndex::new()
        .with_markup("a.pdf", "<p>Hello   World.</p>")
        .with_damaged("b.doc");

    let summary = default_pipeline().run(tree.path(), &index).await.unwrap();

    // Exactly one add with the normalized text
    assert_eq!(
        index.added(),
        vec![IndexDocument {
            id: "a.pdf".to_string(),
            text: "Hello World".to_string(),
        }]
    );

    // Delete-all exactly once, before anything else
    assert_eq!(index.delete_count(), 1);
    assert_eq!(index.calls()[0], IndexCall::DeleteAll);

    // One skip naming b.doc
    let skipped: Vec<_> = summary.skipped_files().collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].id(), "b.doc");
    assert!(skipped[0].path().ends_with("b.doc"));
    match skipped[0] {
        FileOutcome::Skipped { reason, .. } => assert!(reason.contains("corrupt")),
        other => panic!("expected skip, got {other:?}"),
    }
}

#[tokio::test]
async fn test_call_order_is_sequential() {
    let tree = create_doc_tree(&[("b.pdf", "<p>b</p>"), ("a.doc", "<p>a</p>")]);
    let index = RecordingIndex::new();

    default_pipeline().run(tree.path(), &index).await.unwrap();

    assert_eq!(
        index.calls(),
        vec![
            IndexCall::DeleteAll,
            IndexCall::Extract("a.doc".to_string()),
            IndexCall::Add(IndexDocument {
                id: "a.doc".to_string(),
                text: "a".to_string(),
            }),
            IndexCall::Extract("b.pdf".to_string()),
            IndexCall::Add(IndexDocument {
                id: "b.pdf".to_string(),
                text: "b".to_string(),
            }),
        ]
    );
}

#[tokio::test]
async fn test_ids_are_lowercased_file_names() {
    let tree = create_doc_tree(&[("Sub/Annual REPORT.PDF", "<h1>U.S.A.</h1>")]);
    let index = RecordingIndex::new();

    default_pipeline().run(tree.path(), &index).await.unwrap();

    assert_eq!(
        index.added(),
        vec![IndexDocument {
            id: "annual report.pdf".to_string(),
            text: "USA".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_collision_indexes_one_document() {
    let tree = create_doc_tree(&[
        ("x/Report.pdf", "<p>older</p>"),
        ("y/report.PDF", "<p>newer</p>"),
    ]);
    let index = RecordingIndex::new();

    let summary = default_pipeline().run(tree.path(), &index).await.unwrap();

    assert_eq!(summary.discovered, 1);
    assert_eq!(
        index.added(),
        vec![IndexDocument {
            id: "report.pdf".to_string(),
            text: "newer".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_non_documents_never_reach_the_index() {
    let tree = create_doc_tree(&[("notes.txt", "x"), ("slides.pptx", "x")]);
    let index = RecordingIndex::new();

    let summary = default_pipeline().run(tree.path(), &index).await.unwrap();

    assert_eq!(summary.discovered, 0);
    assert_eq!(index.calls(), vec![IndexCall::DeleteAll]);
}

#[tokio::test]
async fn test_keep_existing_skips_wipe() {
    let tree = create_doc_tree(&[("a.pdf", "<p>a</p>")]);
    let index = RecordingIndex::new();

    let mut config = Config::default();
    config.index.wipe_before_reindex = false;
    let summary = ReindexPipeline::from_config(&config)
        .run(tree.path(), &index)
        .await
        .unwrap();

    assert!(!summary.wiped);
    assert_eq!(index.delete_count(), 0);
    assert_eq!(index.added().len(), 1);
}

#[tokio::test]
async fn test_all_damaged_still_succeeds() {
    let tree = create_doc_tree(&[("a.pdf", "x"), ("b.doc", "x")]);
    let index = RecordingIndex::new()
        .with_damaged("a.pdf")
        .with_damaged("b.doc");

    let summary = default_pipeline().run(tree.path(), &index).await.unwrap();

    assert_eq!(summary.indexed(), 0);
    assert_eq!(summary.skipped(), 2);
    assert!(index.added().is_empty());
}
