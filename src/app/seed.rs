// ==========================================
// 订单管理看板 - 静态示例数据
// ==========================================
// 职责: 提供看板启动时加载的固定订单集合
// 红线: 只读数据,运行期不可变
// ==========================================

use crate::domain::{Category, Currency, Order, OrderItem, OrderStatus, Price};

fn item(name: &str, amount: f64, quantity: u32, category: Category) -> OrderItem {
    OrderItem::new(name, Price::new(amount, Currency::Pln), quantity, category)
}

/// 示例订单集合（固定12单,插入顺序即默认展示顺序）
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order::new(
            "o1",
            "c1",
            OrderStatus::Completed,
            vec![
                item("Laptop Dell XPS", 2500.0, 1, Category::Electronics),
                item("Mouse Logitech MX", 50.0, 2, Category::Electronics),
            ],
            None,
        ),
        Order::new(
            "o2",
            "c2",
            OrderStatus::Cancelled,
            vec![item("T-Shirt Premium", 40.0, 3, Category::Clothing)],
            None,
        ),
        Order::new(
            "o3",
            "c1",
            OrderStatus::Completed,
            vec![
                item("Book: Functional Programming in TypeScript", 80.0, 1, Category::Books),
                item("Book: Clean Code", 65.0, 1, Category::Books),
            ],
            Some(0.1),
        ),
        Order::new(
            "o4",
            "c3",
            OrderStatus::Pending,
            vec![item("Monitor 4K Samsung", 800.0, 2, Category::Electronics)],
            None,
        ),
        Order::new(
            "o5",
            "c2",
            OrderStatus::Completed,
            vec![
                item("Jeans Levi's", 250.0, 2, Category::Clothing),
                item("Sneakers Nike", 350.0, 1, Category::Clothing),
            ],
            Some(0.15),
        ),
        Order::new(
            "o6",
            "c4",
            OrderStatus::Refunded,
            vec![item("Mechanical Keyboard", 400.0, 1, Category::Electronics)],
            None,
        ),
        Order::new(
            "o7",
            "c1",
            OrderStatus::Completed,
            vec![
                item("Book: Design Patterns", 90.0, 1, Category::Books),
                item("Book: Refactoring", 75.0, 1, Category::Books),
                item("Book: Domain-Driven Design", 95.0, 1, Category::Books),
            ],
            Some(0.2),
        ),
        Order::new(
            "o8",
            "c5",
            OrderStatus::Pending,
            vec![
                item("Gaming Headset", 280.0, 1, Category::Electronics),
                item("Webcam HD", 150.0, 1, Category::Electronics),
            ],
            None,
        ),
        Order::new(
            "o9",
            "c3",
            OrderStatus::Completed,
            vec![item("Hoodie Supreme", 420.0, 1, Category::Clothing)],
            None,
        ),
        Order::new(
            "o10",
            "c6",
            OrderStatus::Cancelled,
            vec![item("Book: JavaScript: The Good Parts", 55.0, 2, Category::Books)],
            None,
        ),
        Order::new(
            "o11",
            "c4",
            OrderStatus::Completed,
            vec![
                item("MacBook Pro 16", 8500.0, 1, Category::Electronics),
                item("USB-C Hub", 180.0, 1, Category::Electronics),
                item("Laptop Sleeve", 80.0, 1, Category::Electronics),
            ],
            Some(0.05),
        ),
        Order::new(
            "o12",
            "c2",
            OrderStatus::Pending,
            vec![item("Winter Jacket", 680.0, 1, Category::Clothing)],
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderPricing;

    #[test]
    fn test_sample_orders_固定12单() {
        let orders = sample_orders();
        assert_eq!(orders.len(), 12);

        // 订单ID唯一
        let mut ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn test_sample_orders_金额恒非负() {
        for order in sample_orders() {
            assert!(order.total() >= 0.0);
            assert!(!order.items.is_empty());
            assert!(order.items.iter().all(|item| item.quantity > 0));
        }
    }
}
