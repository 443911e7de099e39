use gridcanvas::column::{ColumnSpec, ColumnTree};
use gridcanvas::types::{FontWeight, TableStyle};

// ============================================================================
// Width resolution
// ============================================================================

#[test]
fn test_default_column_width() {
    let style = TableStyle::default();
    let tree = ColumnTree::build(
        vec![
            ColumnSpec::new("Name").data_index("name"),
            ColumnSpec::new("Age").data_index("age"),
        ],
        &style,
    );
    assert_eq!(tree.table_width(), 300.0);
    assert_eq!(tree.node(tree.leaves()[0]).width, 150.0);
}

#[test]
fn test_group_width_is_leaf_sum() {
    let style = TableStyle::default();
    let tree = ColumnTree::build(
        vec![ColumnSpec::new("Name")
            .child(ColumnSpec::new("First").data_index("first").width(100.0))
            .child(ColumnSpec::new("Last").data_index("last").width(200.0))],
        &style,
    );
    let root = tree.roots()[0];
    assert_eq!(tree.node(root).width, 300.0);
    // text box excludes horizontal padding
    assert_eq!(tree.node(root).text_width, 300.0 - 16.0);
}

#[test]
fn test_leaf_order_is_preorder() {
    let style = TableStyle::default();
    let tree = ColumnTree::build(
        vec![
            ColumnSpec::new("Name")
                .child(ColumnSpec::new("First").data_index("first"))
                .child(ColumnSpec::new("Last").data_index("last")),
            ColumnSpec::new("Age").data_index("age"),
        ],
        &style,
    );
    let titles: Vec<&str> = tree
        .leaves()
        .iter()
        .map(|&leaf| tree.node(leaf).title.as_str())
        .collect();
    assert_eq!(titles, ["First", "Last", "Age"]);
}

#[test]
fn test_spec_without_children_is_leaf() {
    let style = TableStyle::default();
    let tree = ColumnTree::build(vec![ColumnSpec::new("Age").data_index("age")], &style);
    assert!(tree.node(tree.roots()[0]).is_leaf());
    assert_eq!(tree.max_leaf_depth(), 1);
}

// ============================================================================
// Header height normalization
// ============================================================================

#[test]
fn test_flat_header_keeps_base_height() {
    let style = TableStyle::default().header_row_height(40.0);
    let tree = ColumnTree::build(
        vec![
            ColumnSpec::new("Name").data_index("name"),
            ColumnSpec::new("Age").data_index("age"),
        ],
        &style,
    );
    for &leaf in tree.leaves() {
        assert_eq!(tree.node(leaf).height, 40.0);
    }
    assert_eq!(tree.header_height(40.0), 40.0);
}

#[test]
fn test_two_level_header_heights() {
    let style = TableStyle::default().header_row_height(55.0);
    let tree = ColumnTree::build(
        vec![
            ColumnSpec::new("Name")
                .child(ColumnSpec::new("First").data_index("first"))
                .child(ColumnSpec::new("Last").data_index("last")),
            ColumnSpec::new("Age").data_index("age"),
        ],
        &style,
    );
    let name = tree.roots()[0];
    let age = tree.roots()[1];
    // the group splits the 110px band evenly; the top-level leaf spans it all
    assert_eq!(tree.node(name).height, 55.0);
    assert_eq!(tree.node(tree.node(name).children[0]).height, 55.0);
    assert_eq!(tree.node(tree.node(name).children[1]).height, 55.0);
    assert_eq!(tree.node(age).height, 110.0);
    assert_eq!(tree.header_height(55.0), 110.0);
}

#[test]
fn test_three_level_paths_sum_to_band() {
    let style = TableStyle::default().header_row_height(40.0);
    let tree = ColumnTree::build(
        vec![
            ColumnSpec::new("A").child(
                ColumnSpec::new("B").child(ColumnSpec::new("C").data_index("c")),
            ),
            ColumnSpec::new("D").data_index("d"),
        ],
        &style,
    );
    let band = tree.header_height(40.0);
    assert_eq!(band, 120.0);

    // every root-to-leaf path of cell heights covers the whole band
    for &leaf in tree.leaves() {
        let mut sum = 0.0;
        let mut cursor = Some(leaf);
        while let Some(index) = cursor {
            sum += tree.node(index).height;
            cursor = tree.node(index).parent;
        }
        assert_eq!(sum, band);
    }
}

#[test]
fn test_uneven_depths_leaf_absorbs_remaining_levels() {
    let style = TableStyle::default().header_row_height(40.0);
    // group with one shallow leaf and one nested group
    let tree = ColumnTree::build(
        vec![ColumnSpec::new("Other")
            .child(ColumnSpec::new("Shallow").data_index("s"))
            .child(
                ColumnSpec::new("Deep").child(ColumnSpec::new("Leaf").data_index("l")),
            )],
        &style,
    );
    let other = tree.roots()[0];
    let shallow = tree.node(other).children[0];
    let deep = tree.node(other).children[1];
    // three levels total: the group takes one, the shallow leaf the other two
    assert_eq!(tree.node(other).height, 40.0);
    assert_eq!(tree.node(shallow).height, 80.0);
    assert_eq!(tree.node(deep).height, 40.0);
    assert_eq!(tree.node(tree.node(deep).children[0]).height, 40.0);
}

#[test]
fn test_four_level_uneven_paths_sum_to_band() {
    let style = TableStyle::default().header_row_height(30.0);
    // leaves at depths 4, 3, and 1 in one tree
    let tree = ColumnTree::build(
        vec![
            ColumnSpec::new("A")
                .child(
                    ColumnSpec::new("B")
                        .child(
                            ColumnSpec::new("C").child(ColumnSpec::new("Deep").data_index("deep")),
                        )
                        .child(ColumnSpec::new("Mid").data_index("mid")),
                ),
            ColumnSpec::new("Top").data_index("top"),
        ],
        &style,
    );
    let band = tree.header_height(30.0);
    assert_eq!(band, 120.0);
    for &leaf in tree.leaves() {
        let mut sum = 0.0;
        let mut cursor = Some(leaf);
        while let Some(index) = cursor {
            sum += tree.node(index).height;
            cursor = tree.node(index).parent;
        }
        assert_eq!(sum, band);
    }
}

// ============================================================================
// Style overrides
// ============================================================================

#[test]
fn test_title_font_defaults_bold() {
    let style = TableStyle::default();
    let tree = ColumnTree::build(vec![ColumnSpec::new("Name").data_index("name")], &style);
    let node = tree.node(tree.roots()[0]);
    assert_eq!(node.style.title_font.weight, FontWeight::Bold);
    assert_eq!(node.style.text_font.weight, FontWeight::Normal);
}

#[test]
fn test_column_override_beats_table_default() {
    let style = TableStyle::default().font_size(14.0);
    let tree = ColumnTree::build(
        vec![ColumnSpec::new("Name")
            .data_index("name")
            .text_font_size(18.0)
            .title_font_weight(FontWeight::Normal)],
        &style,
    );
    let node = tree.node(tree.roots()[0]);
    assert_eq!(node.style.text_font.size, 18.0);
    assert_eq!(node.style.title_font.size, 14.0);
    assert_eq!(node.style.title_font.weight, FontWeight::Normal);
}

#[test]
fn test_empty_tree() {
    let style = TableStyle::default();
    let tree = ColumnTree::build(Vec::new(), &style);
    assert!(tree.is_empty());
    assert_eq!(tree.table_width(), 0.0);
    assert_eq!(tree.max_leaf_depth(), 0);
    assert_eq!(tree.header_height(40.0), 0.0);
}
