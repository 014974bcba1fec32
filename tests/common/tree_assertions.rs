/// Asserts that the plain text of a render tree contains `needle`.
#[macro_export]
macro_rules! assert_tree_contains_text {
    ($tree:expr, $needle:expr) => {{
        let text = $tree.text_content();
        assert!(
            text.contains($needle),
            "Expected text {:?} in tree, got:\n{}",
            $needle,
            text
        );
    }};
}

/// Asserts that the plain text of a render tree does not contain `needle`.
#[macro_export]
macro_rules! assert_tree_lacks_text {
    ($tree:expr, $needle:expr) => {{
        let text = $tree.text_content();
        assert!(
            !text.contains($needle),
            "Did not expect text {:?} in tree, got:\n{}",
            $needle,
            text
        );
    }};
}
