//! Structural guarantees of the navigation tree across the public API.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use wiki_nav::{
    Document, NavError, NavNode, build_navigation_tree, find_adjacent_pages, flatten, is_active,
    is_ancestor_of_active,
};

/// A mixed collection: folders, landing pages, missing parents, ties.
fn sample_docs() -> Vec<Document> {
    vec![
        Document::new("index", "Home"),
        Document::new("guide", "Guide").with_weight(2),
        Document::new("guide/install", "Install").with_weight(1),
        Document::new("guide/faq", "FAQ").with_weight(2),
        Document::new("guide/index", "Guide Overview"),
        Document::new("guide/install/linux", "Linux"),
        Document::new("guide/install/macos", "macOS"),
        Document::new("reference/index", "Reference").with_weight(9),
        Document::new("reference/cli", "CLI").with_weight(3),
        Document::new("reference/config", "Config").with_weight(3),
        Document::new("reference/api/index", "API"),
        Document::new("reference/api/auth", "Auth"),
        Document::new("reference/api/users", "Users"),
        Document::new("rules/rule-a1", "Rule A1"),
        Document::new("rules/rule-a2", "Rule A2"),
        Document::new("about", "About").with_weight(1),
        Document::new("changelog", "Changelog"),
    ]
}

fn visit<'a>(nodes: &'a [NavNode], out: &mut Vec<&'a [NavNode]>) {
    out.push(nodes);
    for node in nodes {
        visit(&node.children, out);
    }
}

fn sibling_lists(nodes: &[NavNode]) -> Vec<&[NavNode]> {
    let mut out = Vec::new();
    visit(nodes, &mut out);
    out
}

#[test]
fn test_slugs_are_unique_within_tree() {
    let tree = build_navigation_tree(&sample_docs()).unwrap();

    let mut seen = HashSet::new();
    for node in tree.iter() {
        assert!(seen.insert(node.slug.as_str()), "duplicate {}", node.slug);
    }
    assert!(!seen.is_empty());
}

#[test]
fn test_path_segments_match_slug() {
    let tree = build_navigation_tree(&sample_docs()).unwrap();

    for node in tree.iter() {
        assert_eq!(node.path_segments.join("/"), node.slug);
    }
}

#[test]
fn test_index_nodes_precede_non_index_siblings() {
    let tree = build_navigation_tree(&sample_docs()).unwrap();

    for siblings in sibling_lists(tree.roots()) {
        let first_page = siblings.iter().position(|n| !n.is_index());
        let last_index = siblings.iter().rposition(NavNode::is_index);
        if let (Some(first_page), Some(last_index)) = (first_page, last_index) {
            assert!(last_index < first_page, "index after page in {siblings:?}");
        }
    }
}

#[test]
fn test_weights_ascend_within_index_class() {
    let tree = build_navigation_tree(&sample_docs()).unwrap();

    for siblings in sibling_lists(tree.roots()) {
        for pair in siblings.windows(2) {
            if pair[0].is_index() == pair[1].is_index() {
                assert!(pair[0].weight <= pair[1].weight);
            }
        }
    }
}

#[test]
fn test_equal_weight_ties_follow_input_order() {
    let docs = sample_docs();
    let input_pos = |slug: &str| docs.iter().position(|d| d.slug == slug).unwrap();
    let tree = build_navigation_tree(&docs).unwrap();

    for siblings in sibling_lists(tree.roots()) {
        for pair in siblings.windows(2) {
            if pair[0].weight == pair[1].weight && pair[0].is_index() == pair[1].is_index() {
                assert!(input_pos(&pair[0].slug) < input_pos(&pair[1].slug));
            }
        }
    }
}

#[test]
fn test_sample_tree_shape() {
    let tree = build_navigation_tree(&sample_docs()).unwrap();

    let roots: Vec<_> = tree.roots().iter().map(|n| n.slug.as_str()).collect();
    assert_eq!(
        roots,
        vec![
            "reference/index",
            "about",
            "guide",
            "rules/rule-a1",
            "rules/rule-a2",
            "changelog",
        ]
    );
    let reference: Vec<_> = tree.roots()[0]
        .children
        .iter()
        .map(|n| n.slug.as_str())
        .collect();
    assert_eq!(
        reference,
        vec!["reference/api/index", "reference/cli", "reference/config"]
    );
    assert!(tree.warnings().is_empty());
}

#[test]
fn test_adjacency_is_symmetric() {
    let tree = build_navigation_tree(&sample_docs()).unwrap();
    let flat = flatten(&tree);

    for pair in flat.windows(2) {
        let forward = find_adjacent_pages(&tree, &pair[0].slug);
        let backward = find_adjacent_pages(&tree, &pair[1].slug);
        assert_eq!(forward.next.as_ref(), Some(&pair[1]));
        assert_eq!(backward.prev.as_ref(), Some(&pair[0]));
    }
}

#[test]
fn test_flatten_never_contains_index_nodes() {
    let tree = build_navigation_tree(&sample_docs()).unwrap();

    let flat = flatten(&tree);

    assert!(flat.iter().all(|entry| !entry.slug.ends_with("/index")));
    assert!(flat.iter().any(|entry| entry.slug == "reference/api/auth"));
}

#[test]
fn test_active_and_ancestor_never_both_true() {
    let tree = build_navigation_tree(&sample_docs()).unwrap();
    let mut paths: Vec<String> = tree.iter().map(|n| n.slug.clone()).collect();
    paths.extend(["", "guide", "reference", "reference/api"].map(str::to_owned));

    for current in &paths {
        for node in tree.iter() {
            assert!(!(is_active(current, &node.slug) && is_ancestor_of_active(current, &node.slug)));
        }
    }
}

#[test]
fn test_scenario_guide_tree_and_adjacency() {
    let docs = vec![
        Document::new("guide", "Guide").with_weight(1),
        Document::new("guide/install", "Install").with_weight(1),
        Document::new("guide/faq", "FAQ").with_weight(2),
    ];

    let tree = build_navigation_tree(&docs).unwrap();
    let flat: Vec<_> = flatten(&tree).into_iter().map(|e| e.slug).collect();
    let adjacent = find_adjacent_pages(&tree, "guide/install");

    assert_eq!(flat, vec!["guide", "guide/install", "guide/faq"]);
    assert_eq!(adjacent.prev.unwrap().title, "Guide");
    assert_eq!(adjacent.next.unwrap().title, "FAQ");
}

#[test]
fn test_scenario_duplicate_slug_returns_no_tree() {
    let docs = vec![Document::new("a/b", "One"), Document::new("a/b", "Two")];

    let result = build_navigation_tree(&docs);

    assert!(matches!(result, Err(NavError::DuplicateSlug { .. })));
}

#[test]
fn test_scenario_ancestor_classification() {
    assert!(is_ancestor_of_active("guide/install/step1", "guide"));
    assert!(!is_active("guide/install/step1", "guide"));
}
