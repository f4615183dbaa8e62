//! Canned sample queries served by the API.
//!
//! Three fixed categories: basic lookups, analytics joins, and write
//! statements that exist to demonstrate the safe-mode gate blocking them.

use serde::Serialize;

/// A named sample query.
#[derive(Debug, Clone, Serialize)]
pub struct SampleQuery {
    pub name: &'static str,
    pub sql: &'static str,
}

/// The full catalog, serialized with fixed category order.
#[derive(Debug, Clone, Serialize)]
pub struct SampleCatalog {
    pub basic: &'static [SampleQuery],
    pub analytics: &'static [SampleQuery],
    pub dangerous: &'static [SampleQuery],
}

pub const CATALOG: SampleCatalog = SampleCatalog {
    basic: &[
        SampleQuery {
            name: "All Customers",
            sql: "SELECT * FROM customers",
        },
        SampleQuery {
            name: "All Products",
            sql: "SELECT * FROM products",
        },
        SampleQuery {
            name: "Recent Orders",
            sql: "SELECT * FROM orders ORDER BY order_date DESC",
        },
    ],
    analytics: &[
        SampleQuery {
            name: "Customer Revenue",
            sql: "SELECT c.name, SUM(oi.quantity * oi.unit_price_cents)/100.0 as revenue \
                  FROM customers c JOIN orders o ON c.id = o.customer_id \
                  JOIN order_items oi ON o.id = oi.order_id GROUP BY c.id",
        },
        SampleQuery {
            name: "Product Sales",
            sql: "SELECT p.name, COUNT(*) as orders, SUM(oi.quantity) as units \
                  FROM products p JOIN order_items oi ON p.id = oi.product_id GROUP BY p.id",
        },
    ],
    dangerous: &[
        SampleQuery {
            name: "Delete Customer (Blocked)",
            sql: "DELETE FROM customers WHERE id = 1",
        },
        SampleQuery {
            name: "Drop Table (Blocked)",
            sql: "DROP TABLE products",
        },
    ],
};
