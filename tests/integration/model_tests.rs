//! Model and parser integration tests
//!
//! These tests parse the shared fixture and verify tree structure,
//! label styling and separator pruning end to end.

use std::path::PathBuf;

use menutree::{MenuStyle, MenuTree, MenuTreeBuilder, NodeId};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/menudata.xml")
}

fn parse_fixture(style: MenuStyle) -> MenuTreeBuilder {
    MenuTreeBuilder::from_path(&fixture_path(), style).expect("fixture should parse")
}

fn labels(tree: &MenuTree, id: NodeId) -> Vec<String> {
    tree.node(id)
        .children()
        .iter()
        .map(|&child| tree.node(child).label.clone())
        .collect()
}

#[test]
fn fixture_parses_into_expected_shape() {
    let builder = parse_fixture(MenuStyle::Labels);
    let tree = builder.tree();

    assert_eq!(labels(tree, tree.root()), vec!["&File", "&Raster"]);

    let file = tree.node(tree.root()).children()[0];
    assert_eq!(
        labels(tree, file),
        vec![
            "New workspace",
            "Open workspace",
            "",
            "Import raster data",
            "",
            "Quit"
        ]
    );

    let import = tree.node(file).children()[3];
    assert_eq!(
        labels(tree, import),
        vec!["Common formats import", "ASCII grid import"]
    );
}

#[test]
fn separators_have_no_data() {
    let builder = parse_fixture(MenuStyle::Labels);
    let tree = builder.tree();
    let file = tree.node(tree.root()).children()[0];
    let sep = tree.node(file).children()[2];

    assert!(tree.node(sep).is_separator());
    assert!(tree.node(sep).data.is_none());
    assert!(tree.node(sep).children().is_empty());
}

#[test]
fn pruned_model_removes_all_separators() {
    let builder = parse_fixture(MenuStyle::Labels);
    let pruned = builder.model(false);

    let file = pruned.node(pruned.root()).children()[0];
    assert_eq!(
        labels(&pruned, file),
        vec![
            "New workspace",
            "Open workspace",
            "Import raster data",
            "Quit"
        ]
    );

    // Submenu contents survive the prune
    let import = pruned.node(file).children()[2];
    assert_eq!(pruned.node(import).children().len(), 2);
}

#[test]
fn full_model_is_an_independent_copy() {
    let builder = parse_fixture(MenuStyle::Labels);
    let full = builder.model(true);
    assert_eq!(full.len(), builder.tree().len());
}

#[test]
fn styled_labels_keep_original_in_data() {
    let builder = parse_fixture(MenuStyle::LabelsCommands);
    let tree = builder.tree();
    let file = tree.node(tree.root()).children()[0];
    let import = tree.node(file).children()[3];
    let gdal = tree.node(import).children()[0];

    assert_eq!(tree.node(gdal).label, "Common formats import   [r.in.gdal]");
    assert_eq!(
        tree.node(gdal).data.as_ref().unwrap().label,
        "Common formats import"
    );
}

#[test]
fn parent_back_references_are_consistent() {
    let builder = parse_fixture(MenuStyle::Labels);
    let tree = builder.tree();

    let file = tree.node(tree.root()).children()[0];
    for &child in tree.node(file).children() {
        assert_eq!(tree.node(child).parent(), Some(file));
    }
    assert_eq!(tree.node(tree.root()).parent(), None);
}
