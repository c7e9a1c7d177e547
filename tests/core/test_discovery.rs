// Discovery tests on real directory trees

use crate::common::create_doc_tree;
use docsync::core::error::DocSyncError;
use docsync::core::indexer::DocumentWalker;

#[test]
fn test_suffix_matching_inclusive_and_exclusive() {
    let tree = create_doc_tree(&[
        ("report.PDF", "x"),
        ("report.pdf.txt", "x"),
        ("report.docx", "x"),
        ("letter.Doc", "x"),
        ("image.png", "x"),
    ]);

    let found = DocumentWalker::default().discover(tree.path()).unwrap();

    let keys: Vec<_> = found.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["letter.doc", "report.pdf"]);
}

#[test]
fn test_case_collision_keeps_last_visited() {
    let tree = create_doc_tree(&[("first/Report.pdf", "one"), ("second/report.PDF", "two")]);

    let found = DocumentWalker::default().discover(tree.path()).unwrap();

    assert_eq!(found.len(), 1);
    let path = &found["report.pdf"];
    assert_eq!(std::fs::read_to_string(path).unwrap(), "two");
}

#[test]
fn test_values_are_full_paths() {
    let tree = create_doc_tree(&[("deep/er/doc.pdf", "x")]);

    let docs = DocumentWalker::default()
        .discover_documents(tree.path())
        .unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, "doc.pdf");
    assert_eq!(docs[0].path, tree.path().join("deep/er/doc.pdf"));
}

#[test]
fn test_file_as_root_is_invalid() {
    let tree = create_doc_tree(&[("a.pdf", "x")]);

    let err = DocumentWalker::default()
        .discover(&tree.path().join("a.pdf"))
        .unwrap_err();

    assert!(matches!(err, DocSyncError::InvalidPath(_)));
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_fatal() {
    use std::os::unix::fs::PermissionsExt;

    let tree = create_doc_tree(&[("ok/a.pdf", "x"), ("locked/b.pdf", "x")]);
    let locked = tree.path().join("locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores permission bits; nothing to assert in that case
    let readable_anyway = std::fs::read_dir(&locked).is_ok();
    let result = DocumentWalker::default().discover(tree.path());

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    if !readable_anyway {
        assert!(matches!(result, Err(DocSyncError::Walk(_))));
    }
}
