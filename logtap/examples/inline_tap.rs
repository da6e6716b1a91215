use logtap::{Channel, LogTap, StdioHost, TapOptions, console_config, tap, tap_with};

#[derive(Debug)]
struct Order {
    id: u32,
    quantity: u32,
    unit_price: f64,
}

fn main() {
    let previous = console_config()
        .with_host(
            StdioHost::new()
                .with_name("orders")
                .with_channel(Channel::other("audit")),
        )
        .init_global();
    assert!(previous.is_none());

    let orders = vec![
        Order {
            id: 1,
            quantity: 2,
            unit_price: 9.5,
        },
        Order {
            id: 2,
            quantity: 0,
            unit_price: 120.0,
        },
        Order {
            id: 3,
            quantity: 5,
            unit_price: 1.25,
        },
    ];
    let quantity_options = TapOptions::new().with_label("qty").no_location();

    let total: f64 = orders
        .iter()
        .filter(|order| tap_with(order.quantity, quantity_options.clone()) > 0)
        .map(|order| order.quantity as f64 * order.unit_price)
        .sum::<f64>()
        .log_tap_with("total");

    let console = logtap::installed().unwrap();
    if tap(total) > 20.0 {
        console.warn().tap_with(&orders[0], "large basket, first order");
    }
    console
        .channel("audit")
        .unwrap()
        .log(format_args!("{} orders checked", orders.len()));
    console.error().tap_with(orders.iter().map(|o| o.id).collect::<Vec<_>>(), "ids");
}
