//! Built-in sample order: a gadget set packed in nested boxes.

use rust_decimal::Decimal;
use tracing::instrument;

use crate::domain::{Order, Package, Product};

fn rub(amount: i64) -> Decimal {
    Decimal::new(amount, 0)
}

/// Gift wrap > large box > medium box > small box, plus a warranty.
///
/// Total price is 80550.
#[instrument(level = "debug")]
pub fn sample_order() -> Order {
    let small_box = Package::new("Small box", rub(50))
        .with_child(Product::new("Smartphone", rub(50_000)))
        .with_child(Product::new("Case", rub(1_200)));

    let medium_box = Package::new("Medium box", rub(100))
        .with_child(small_box)
        .with_child(Product::new("Headphones", rub(8_000)))
        .with_child(Product::new("Charger", rub(2_500)));

    let large_box = Package::new("Large box", rub(200))
        .with_child(medium_box)
        .with_child(Product::new("Smartwatch", rub(15_000)));

    let gift_wrap = Package::new("Gift wrap", rub(500)).with_child(large_box);

    let mut order = Order::new();
    order.add_item(gift_wrap);
    order.add_item(Product::new("Extended warranty", rub(3_000)));
    order
}
