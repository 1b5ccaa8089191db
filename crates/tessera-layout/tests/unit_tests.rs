//! Tests for unit resolution: px, %, vw, vh and malformed input.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use tessera_common::warning::was_warned;
use tessera_layout::{
    Arrangement, Axis, LayoutTree, ParentSize, PercentBasis, ResolveContext, Size, Style,
    UnitError, Viewport, resolve, try_resolve,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= f32::EPSILON * a.abs().max(b.abs()).max(1.0)
}

fn with_parent(width: f32, height: f32) -> ResolveContext {
    ResolveContext::root(Viewport::new(1000.0, 500.0)).with_parent(ParentSize { width, height })
}

// ========== pixels ==========

#[quickcheck]
fn prop_px_is_identity_on_any_axis(n: i32, horizontal: bool) -> bool {
    #[allow(clippy::cast_precision_loss)]
    let expected = n as f32;
    let axis = if horizontal { Axis::Horizontal } else { Axis::Vertical };
    let ctx = with_parent(37.0, 91.0);
    resolve(&format!("{n}px"), axis, &ctx) == expected
        && resolve(&format!("{n}"), axis, &ResolveContext::default()) == expected
}

#[quickcheck]
fn prop_finite_px_round_trips(value: f32) -> TestResult {
    if !value.is_finite() {
        return TestResult::discard();
    }
    let ctx = ResolveContext::default();
    TestResult::from_bool(resolve(&format!("{value}px"), Axis::Horizontal, &ctx) == value)
}

#[test]
fn test_empty_string_is_zero() {
    let ctx = with_parent(100.0, 100.0);
    assert_eq!(try_resolve("", Axis::Horizontal, &ctx), Ok(0.0));
    assert_eq!(try_resolve("   ", Axis::Vertical, &ctx), Ok(0.0));
}

// ========== percentages ==========

#[quickcheck]
fn prop_percent_scales_cross_axis_parent(n: u16, width: u16, height: u16) -> bool {
    let ctx = with_parent(f32::from(width), f32::from(height));
    let value = f32::from(n);
    approx(
        resolve(&format!("{n}%"), Axis::Horizontal, &ctx),
        f32::from(height) * value / 100.0,
    ) && approx(
        resolve(&format!("{n}%"), Axis::Vertical, &ctx),
        f32::from(width) * value / 100.0,
    )
}

#[quickcheck]
fn prop_percent_without_parent_is_zero(n: i16) -> bool {
    let ctx = ResolveContext::root(Viewport::new(640.0, 480.0));
    resolve(&format!("{n}%"), Axis::Horizontal, &ctx) == 0.0
        && resolve(&format!("{n}%"), Axis::Vertical, &ctx) == 0.0
}

#[test]
fn test_same_axis_basis() {
    let ctx = with_parent(400.0, 100.0).with_percent_basis(PercentBasis::SameAxis);
    assert!(approx(resolve("25%", Axis::Horizontal, &ctx), 100.0));
    assert!(approx(resolve("25%", Axis::Vertical, &ctx), 25.0));
}

#[test]
fn test_malformed_percent_without_parent_still_errors() {
    let ctx = ResolveContext::default();
    assert_eq!(
        try_resolve("abc%", Axis::Horizontal, &ctx),
        Err(UnitError::InvalidNumber("abc%".to_string()))
    );
}

// ========== viewport units ==========

#[test]
fn test_viewport_units_ignore_axis() {
    let ctx = with_parent(1.0, 1.0);
    for axis in [Axis::Horizontal, Axis::Vertical] {
        assert!(approx(resolve("10vw", axis, &ctx), 100.0));
        assert!(approx(resolve("10vh", axis, &ctx), 50.0));
    }
}

#[test]
fn test_viewport_resize_is_seen_by_later_resolutions() {
    let mut tree = LayoutTree::new(Viewport::new(200.0, 100.0));
    let node = tree.create_node(Style::sized("50vw", "50vh"), Arrangement::None);
    assert!(approx(tree.content_size(node).width, 100.0));

    tree.set_viewport(Viewport::new(1000.0, 800.0));
    let size = tree.content_size(node);
    assert!(approx(size.width, 500.0));
    assert!(approx(size.height, 400.0));
}

// ========== recursive percentages ==========

#[test]
fn test_percent_resolves_against_resolved_parent() {
    let mut tree = LayoutTree::new(Viewport::new(1000.0, 500.0));
    // Root is 40vw x 20vh = 400 x 100.
    let root = tree.create_node(Style::sized("40vw", "20vh"), Arrangement::None);
    let middle = tree.create_node(Style::sized("50%", "50%"), Arrangement::None);
    let leaf = tree.create_node(Style::sized("10%", "10%"), Arrangement::None);
    tree.add_child(root, middle).unwrap();
    tree.add_child(middle, leaf).unwrap();

    // Cross axis: middle width = 50% of root height, height = 50% of root width.
    let middle_size = tree.content_size(middle);
    assert!(approx(middle_size.width, 50.0));
    assert!(approx(middle_size.height, 200.0));

    let leaf_size = tree.content_size(leaf);
    assert!(approx(leaf_size.width, 20.0));
    assert!(approx(leaf_size.height, 5.0));
}

#[test]
fn test_negative_parent_size_is_a_zero_basis() {
    let mut tree = LayoutTree::new(Viewport::new(1000.0, 500.0));
    let root = tree.create_node(Style::sized("-200px", "-40px"), Arrangement::None);
    let child = tree.create_node(Style::sized("50%", "50%"), Arrangement::None);
    tree.add_child(root, child).unwrap();

    assert_eq!(tree.content_size(root), Size::default());
    assert_eq!(tree.content_size(child), Size::default());
    assert_eq!(tree.compute_box_model(root).content, Size::default());
}

// ========== malformed input ==========

#[test]
fn test_malformed_strings_resolve_to_zero_and_warn() {
    let ctx = with_parent(100.0, 100.0);
    for text in ["abc%", "12xx", "px", "--3px"] {
        assert_eq!(resolve(text, Axis::Horizontal, &ctx), 0.0, "{text}");
        assert!(was_warned(
            "Units",
            &format!("invalid number format in unit string '{text}'")
        ));
    }
}

#[test]
fn test_out_of_range_resolves_to_zero() {
    let ctx = ResolveContext::default();
    assert_eq!(
        try_resolve("1e39", Axis::Vertical, &ctx),
        Err(UnitError::OutOfRange("1e39".to_string()))
    );
    assert_eq!(resolve("1e39", Axis::Vertical, &ctx), 0.0);
}

#[test]
fn test_resolution_is_deterministic() {
    let ctx = with_parent(123.0, 456.0);
    let first = resolve("33.3%", Axis::Vertical, &ctx);
    assert!((0..10).all(|_| resolve("33.3%", Axis::Vertical, &ctx) == first));
}
