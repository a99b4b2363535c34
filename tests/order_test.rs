//! Order aggregation and listing

use orderbox::application::sample_order;
use orderbox::domain::{Component, Order, Package, Product, INDENT_WIDTH};
use orderbox::util::testing::init_test_setup;
use rstest::rstest;
use rust_decimal_macros::dec;

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

// ============================================================
// Totals
// ============================================================

#[rstest]
fn given_package_and_product_when_totalling_then_sum_of_both() {
    let mut order = Order::new();
    let package = Package::new("Box", dec!(100)).with_child(Product::new("Lamp", dec!(900)));
    order.add_item(package);
    order.add_item(Product::new("Bulb", dec!(75)));

    assert_eq!(order.total_price(), dec!(1000) + dec!(75));
    assert_eq!(order.len(), 2);
}

#[rstest]
fn given_sample_order_when_totalling_then_80550() {
    init_test_setup();
    let order = sample_order();
    assert_eq!(order.total_price(), dec!(80550));

    let direct: rust_decimal::Decimal = order.items().iter().map(Component::total_price).sum();
    assert_eq!(order.total_price(), direct);
}

#[rstest]
fn given_empty_order_when_querying_then_zero_everything() {
    let order = Order::new();
    assert!(order.is_empty());
    assert_eq!(order.total_price(), dec!(0));
    assert_eq!(order.depth(), 0);
    assert!(order.products().is_empty());
    assert_eq!(order.render().count(), 0);
}

#[rstest]
fn given_item_removed_when_totalling_then_excluded() {
    let mut order = Order::new();
    let keep = order.add_item(Product::new("Keep", dec!(10)));
    let drop = order.add_item(Product::new("Drop", dec!(5)));

    let removed = order.remove_item(drop).unwrap();
    assert_eq!(removed.name(), "Drop");
    assert_eq!(order.total_price(), dec!(10));
    assert_eq!(order.items()[0].id(), keep);

    // absent id: no-op
    assert!(order.remove_item(drop).is_none());
    assert_eq!(order.len(), 1);
}

#[rstest]
fn given_nested_item_id_when_removing_from_order_then_not_found() {
    let mut package = Package::unpriced("Box");
    let nested = package.add_child(Product::new("Inside", dec!(1)));
    let mut order = Order::new();
    order.add_item(package);

    assert!(order.remove_item(nested).is_none());
    assert_eq!(order.total_price(), dec!(1));
}

#[rstest]
fn given_products_when_collecting_into_order_then_kept_in_sequence() {
    let order: Order = vec![Product::new("A", dec!(1)), Product::new("B", dec!(2))]
        .into_iter()
        .collect();
    let names: Vec<_> = order.items().iter().map(|i| i.name().to_string()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(order.depth(), 1);
}

// ============================================================
// Structure queries
// ============================================================

#[rstest]
fn given_sample_order_when_querying_structure_then_depth_and_products() {
    let order = sample_order();
    assert_eq!(order.depth(), 5);

    let products = order.products();
    let names: Vec<_> = products.iter().map(|p| p.name()).collect();
    assert_eq!(
        names,
        vec![
            "Smartphone",
            "Case",
            "Headphones",
            "Charger",
            "Smartwatch",
            "Extended warranty"
        ]
    );
}

// ============================================================
// Rendering
// ============================================================

#[rstest]
fn given_sample_order_when_rendering_then_exact_listing() {
    let order = sample_order();
    let lines: Vec<String> = order.render().collect();
    assert_eq!(
        lines,
        vec![
            "Gift wrap (packaging: 500, contents: 77050, total: 77550)",
            "  Large box (packaging: 200, contents: 76850, total: 77050)",
            "    Medium box (packaging: 100, contents: 61750, total: 61850)",
            "      Small box (packaging: 50, contents: 51200, total: 51250)",
            "        Smartphone: 50000",
            "        Case: 1200",
            "      Headphones: 8000",
            "      Charger: 2500",
            "    Smartwatch: 15000",
            "Extended warranty: 3000",
        ]
    );
}

#[rstest]
fn given_sample_order_when_rendering_then_one_line_per_node_indent_by_depth() {
    let order = sample_order();
    let lines: Vec<String> = order.render().collect();
    let entries: Vec<_> = order.walk().collect();

    assert_eq!(lines.len(), entries.len());
    for (line, entry) in lines.iter().zip(&entries) {
        assert_eq!(leading_spaces(line), entry.depth * INDENT_WIDTH);
        assert!(line.trim_start().starts_with(entry.item.name()));
    }
    // depth only ever grows by one level per step
    for pair in entries.windows(2) {
        assert!(pair[1].depth <= pair[0].depth + 1);
    }
}

#[rstest]
fn given_render_iterator_when_restarted_or_cloned_then_same_lines() {
    let order = sample_order();
    let mut lines = order.render();
    lines.next();
    let rest: Vec<_> = lines.clone().collect();
    let again: Vec<_> = lines.collect();
    assert_eq!(rest, again);
    assert_eq!(rest.len(), 9);

    assert_eq!(order.render().count(), 10);
    assert_eq!(order.render().count(), 10);
}

#[rstest]
fn given_mutation_between_renders_when_rendering_then_reflects_change() {
    let mut order = Order::new();
    let id = order.add_item(Package::new("Box", dec!(1)));
    assert_eq!(
        order.render().next().unwrap(),
        "Box (packaging: 1, contents: 0, total: 1)"
    );

    let mut package = order.remove_item(id).unwrap();
    package
        .as_package_mut()
        .unwrap()
        .add_child(Product::new("Ball", dec!(9)));
    order.add_item(package);

    let lines: Vec<_> = order.render().collect();
    assert_eq!(
        lines,
        vec!["Box (packaging: 1, contents: 9, total: 10)", "  Ball: 9"]
    );
}
