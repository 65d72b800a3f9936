// ==========================================
// StatisticsEngine 集成测试
// ==========================================
// 测试范围:
// 1. 聚合指标: 数量/收入/均值/极值/件数/客户数/类目
// 2. 空集合零值默认
// 3. 按状态分组的划分完整性
// ==========================================

mod test_helpers;

use order_dashboard::domain::{Category, OrderPricing, OrderStatus};
use order_dashboard::engine::StatisticsEngine;
use test_helpers::{simple_order, OrderBuilder};

fn sample_orders() -> Vec<order_dashboard::domain::Order> {
    vec![
        OrderBuilder::new("o1")
            .customer("c1")
            .status(OrderStatus::Completed)
            .item("Laptop", 1000.0, 1, Category::Electronics)
            .build(),
        OrderBuilder::new("o2")
            .customer("c2")
            .status(OrderStatus::Pending)
            .item("Book", 50.0, 2, Category::Books)
            .discount(0.1)
            .build(),
        OrderBuilder::new("o3")
            .customer("c1")
            .status(OrderStatus::Completed)
            .item("Jacket", 400.0, 1, Category::Clothing)
            .build(),
        simple_order("o4", "c3", OrderStatus::Cancelled, 30.0),
    ]
}

#[test]
fn test_calculate_聚合指标() {
    let engine = StatisticsEngine::new();
    let stats = engine.calculate(&sample_orders());

    // 金额: o1=1000, o2=90, o3=400, o4=30 → 合计1520
    assert_eq!(stats.total_orders, 4);
    assert!((stats.total_revenue - 1520.0).abs() < 1e-9);
    assert!((stats.average_order_value - 380.0).abs() < 1e-9);
    assert!((stats.min_order_value - 30.0).abs() < 1e-9);
    assert!((stats.max_order_value - 1000.0).abs() < 1e-9);
    assert_eq!(stats.total_items, 5);
    assert_eq!(stats.unique_customers, 3);
    assert_eq!(
        stats.categories,
        vec![Category::Electronics, Category::Books, Category::Clothing]
    );
}

#[test]
fn test_calculate_空集合全零() {
    let engine = StatisticsEngine::new();
    let stats = engine.calculate(&[]);

    assert_eq!(stats.total_orders, 0);
    assert_eq!(stats.total_revenue, 0.0);
    assert_eq!(stats.average_order_value, 0.0);
    assert_eq!(stats.min_order_value, 0.0);
    assert_eq!(stats.max_order_value, 0.0);
    assert_eq!(stats.total_items, 0);
    assert_eq!(stats.unique_customers, 0);
    assert!(stats.categories.is_empty());
    assert!(stats.orders_by_status.is_empty());
}

#[test]
fn test_group_by_status_不丢单不重复() {
    let engine = StatisticsEngine::new();
    let orders = sample_orders();
    let grouped = engine.group_by_status(&orders);

    // 划分完整性: 组内订单数之和等于输入数
    let total: usize = grouped.values().map(|group| group.len()).sum();
    assert_eq!(total, orders.len());

    // 每个输入订单恰好出现在其状态组中一次
    for order in &orders {
        let group = grouped.get(&order.status).expect("状态组缺失");
        let occurrences = group.iter().filter(|o| o.id == order.id).count();
        assert_eq!(occurrences, 1, "订单 {} 出现 {} 次", order.id, occurrences);
    }
}

#[test]
fn test_group_by_status_组内保持原顺序() {
    let engine = StatisticsEngine::new();
    let orders = sample_orders();
    let grouped = engine.group_by_status(&orders);

    let completed_ids: Vec<&str> = grouped[&OrderStatus::Completed]
        .iter()
        .map(|o| o.id.as_str())
        .collect();
    assert_eq!(completed_ids, vec!["o1", "o3"]);
}

#[test]
fn test_group_revenue_与订单折后金额一致() {
    let engine = StatisticsEngine::new();
    let orders = sample_orders();
    let grouped = engine.group_by_status(&orders);

    let pending_group = &grouped[&OrderStatus::Pending];
    let expected: f64 = pending_group.iter().map(|o| o.total()).sum();
    assert!((engine.group_revenue(pending_group) - expected).abs() < 1e-9);
}

#[test]
fn test_单订单统计() {
    let engine = StatisticsEngine::new();
    let orders = vec![simple_order("only", "c1", OrderStatus::Completed, 120.0)];
    let stats = engine.calculate(&orders);

    assert_eq!(stats.total_orders, 1);
    assert!((stats.average_order_value - 120.0).abs() < 1e-9);
    assert!((stats.min_order_value - stats.max_order_value).abs() < 1e-9);
}
