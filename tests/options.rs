mod common;

use common::{relative, setup_tree};
use diriter::{
    DirIterBuilder, DirIterOptions, DirectoryIterator, SimpleRecursiveIterator, Traversal, Walk,
    collect_entries, walk,
};
use std::path::PathBuf;

#[test]
fn builder_defaults() {
    let options = DirIterBuilder::new("/data").build();
    assert_eq!(options.root, PathBuf::from("/data"));
    assert_eq!(options.traversal, Traversal::DepthFirst);
    assert!(!options.sorted);
    assert_eq!(options.max_depth, None);
    assert!(!options.follow_links);
    assert!(options.ignore_patterns.is_empty());
    let unlimited = DirIterBuilder::new("/data").max_depth(2).no_limit_depth().build();
    assert_eq!(unlimited.max_depth, None);
}

#[test]
fn partial_json_config_fills_defaults() {
    let options: DirIterOptions =
        serde_json::from_str(r#"{"root": "/srv", "traversal": "siblings-first", "sorted": true}"#)
            .unwrap();
    assert_eq!(options.root, PathBuf::from("/srv"));
    assert_eq!(options.traversal, Traversal::SiblingsFirst);
    assert!(options.sorted);
    assert_eq!(options.max_depth, None);
    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains(r#""traversal":"siblings-first""#));
}

#[test]
fn walk_selects_iterator_by_traversal() {
    let (_dir, root) = setup_tree();
    let cases = [
        (Traversal::Flat, 7),
        (Traversal::Sorted, 7),
        (Traversal::DepthFirst, 20),
        (Traversal::SiblingsFirst, 20),
    ];
    for (traversal, expected) in cases {
        let options = DirIterBuilder::new(&root).traversal(traversal).build();
        let entries = collect_entries(&options).unwrap();
        assert_eq!(entries.len(), expected, "{:?}", traversal);
    }
    let options = DirIterBuilder::new(&root).traversal(Traversal::Sorted).build();
    let walk = walk(&options).unwrap();
    assert!(matches!(walk, Walk::Sorted(_)));
    assert_eq!(walk.current().unwrap().path, root.join("first"));
}

#[test]
fn walk_can_be_driven_by_hand() {
    let (_dir, root) = setup_tree();
    for traversal in [
        Traversal::Flat,
        Traversal::Sorted,
        Traversal::DepthFirst,
        Traversal::SiblingsFirst,
    ] {
        let options = DirIterBuilder::new(&root).traversal(traversal).build();
        let mut by_hand = walk(&options).unwrap();
        let mut paths = Vec::new();
        while !by_hand.is_end() {
            paths.push(by_hand.current().unwrap().path.clone());
            by_hand.advance().unwrap();
        }
        assert!(by_hand.current().is_none());
        by_hand.advance().unwrap();
        let collected: Vec<_> = collect_entries(&options)
            .unwrap()
            .into_iter()
            .map(|e| e.path)
            .collect();
        assert_eq!(paths, collected, "{:?}", traversal);
    }
}

#[test]
fn max_depth_limits_recursion() {
    let (_dir, root) = setup_tree();
    for (depth, expected) in [(0, 0), (1, 7), (2, 14), (3, 20), (10, 20)] {
        for traversal in [Traversal::DepthFirst, Traversal::SiblingsFirst] {
            let options = DirIterBuilder::new(&root)
                .traversal(traversal)
                .max_depth(depth)
                .build();
            let entries = collect_entries(&options).unwrap();
            assert_eq!(entries.len(), expected, "{:?} depth {}", traversal, depth);
            assert!(entries.iter().all(|e| e.depth <= depth));
        }
    }
}

#[test]
fn zero_depth_still_validates_root() {
    let dir = tempfile::tempdir().unwrap();
    let options = DirIterBuilder::new(dir.path().join("missing")).max_depth(0).build();
    assert!(SimpleRecursiveIterator::from_options(&options).is_err());
}

#[test]
fn ignore_patterns_prune_entries_and_subtrees() {
    let (_dir, root) = setup_tree();
    let options = DirIterBuilder::new(&root)
        .sorted(true)
        .ignore_patterns(vec!["**/first".into()])
        .build();
    let entries = collect_entries(&options).unwrap();
    assert_eq!(relative(&root, &entries), ["1", "2", "A", "B", "a", "b"]);

    let options = DirIterBuilder::new(&root)
        .ignore_patterns(vec!["**/second/*".into(), "**/[ab]".into()])
        .build();
    let entries: Vec<_> = DirectoryIterator::from_options(&options).unwrap().collect();
    assert_eq!(entries.len(), 5);
    let entries = collect_entries(&options).unwrap();
    // Per level: 1 2 A B survive; plus "first" and "second" themselves.
    assert_eq!(entries.len(), 4 + 1 + 4 + 1);
}

#[cfg(unix)]
#[test]
fn follow_links_descends_into_linked_directories() {
    let (_dir, root) = setup_tree();
    std::os::unix::fs::symlink(root.join("first"), root.join("link")).unwrap();

    let options = DirIterBuilder::new(&root).build();
    let entries = collect_entries(&options).unwrap();
    assert_eq!(entries.len(), 21);
    let link = entries.iter().find(|e| e.path == root.join("link")).unwrap();
    assert!(!link.is_dir);

    let options = DirIterBuilder::new(&root).follow_links(true).build();
    let entries = collect_entries(&options).unwrap();
    assert_eq!(entries.len(), 21 + 13);
}
