// ==========================================
// 订单管理看板 - 统计引擎
// ==========================================
// 职责: 对(已筛选的)订单集合计算聚合指标
// 红线: 空集合输出零值默认,不报错
// ==========================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Category, Order, OrderPricing, OrderStatus};
use crate::engine::pricing::total_revenue;

// ==========================================
// OrderStatistics - 聚合统计结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatistics {
    pub total_orders: usize,        // 订单数
    pub total_revenue: f64,         // 总收入（折后）
    pub average_order_value: f64,   // 平均订单金额（空集为0）
    pub min_order_value: f64,       // 最小订单金额（空集为0）
    pub max_order_value: f64,       // 最大订单金额（空集为0）
    pub total_items: u32,           // 行项目总件数
    pub unique_customers: usize,    // 去重客户数
    pub categories: Vec<Category>,  // 出现过的类目（去重,固定顺序）
    // 按状态分组（恰好划分输入: 不丢单,不重复）
    pub orders_by_status: BTreeMap<OrderStatus, Vec<Order>>,
}

// ==========================================
// StatisticsEngine - 统计引擎
// ==========================================
pub struct StatisticsEngine {
    // 无状态引擎,不需要注入依赖
}

impl StatisticsEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算聚合统计
    pub fn calculate(&self, orders: &[Order]) -> OrderStatistics {
        let totals: Vec<f64> = orders.iter().map(|order| order.total()).collect();

        let total_revenue: f64 = totals.iter().sum();
        let total_orders = orders.len();
        let average_order_value = if total_orders == 0 {
            0.0
        } else {
            total_revenue / total_orders as f64
        };
        let min_order_value = totals.iter().copied().fold(f64::INFINITY, f64::min);
        let max_order_value = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        OrderStatistics {
            total_orders,
            total_revenue,
            average_order_value,
            min_order_value: if totals.is_empty() { 0.0 } else { min_order_value },
            max_order_value: if totals.is_empty() { 0.0 } else { max_order_value },
            total_items: orders.iter().map(|order| order.item_quantity()).sum(),
            unique_customers: self.unique_customer_ids(orders).len(),
            categories: self.all_categories(orders),
            orders_by_status: self.group_by_status(orders),
        }
    }

    /// 按状态分组
    ///
    /// # 返回
    /// BTreeMap<状态, 订单列表>（仅含出现过的状态,组内保持原顺序）
    pub fn group_by_status(&self, orders: &[Order]) -> BTreeMap<OrderStatus, Vec<Order>> {
        let mut grouped: BTreeMap<OrderStatus, Vec<Order>> = BTreeMap::new();
        for order in orders {
            grouped
                .entry(order.status)
                .or_insert_with(Vec::new)
                .push(order.clone());
        }
        grouped
    }

    /// 去重客户ID（按首次出现顺序）
    pub fn unique_customer_ids(&self, orders: &[Order]) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for order in orders {
            if !seen.contains(&order.customer_id) {
                seen.push(order.customer_id.clone());
            }
        }
        seen
    }

    /// 出现过的类目（去重,按类目固定顺序）
    pub fn all_categories(&self, orders: &[Order]) -> Vec<Category> {
        let mut present: Vec<Category> = orders
            .iter()
            .flat_map(|order| order.items.iter().map(|item| item.category))
            .collect();
        present.sort();
        present.dedup();
        present
    }

    /// 组收入（供按状态汇总行使用）
    pub fn group_revenue(&self, orders: &[Order]) -> f64 {
        total_revenue(orders)
    }
}

impl Default for StatisticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Currency, OrderItem, Price};

    fn item(price: f64, quantity: u32, category: Category) -> OrderItem {
        OrderItem::new("测试商品", Price::new(price, Currency::Pln), quantity, category)
    }

    fn sample_orders() -> Vec<Order> {
        vec![
            Order::new(
                "o1",
                "c1",
                OrderStatus::Completed,
                vec![item(100.0, 1, Category::Electronics), item(50.0, 2, Category::Books)],
                None,
            ),
            Order::new(
                "o2",
                "c2",
                OrderStatus::Pending,
                vec![item(80.0, 1, Category::Books)],
                Some(0.5),
            ),
            Order::new(
                "o3",
                "c1",
                OrderStatus::Completed,
                vec![item(300.0, 1, Category::Clothing)],
                None,
            ),
        ]
    }

    #[test]
    fn test_calculate_基础指标() {
        let engine = StatisticsEngine::new();
        let stats = engine.calculate(&sample_orders());

        // 金额: o1=200, o2=40, o3=300
        assert_eq!(stats.total_orders, 3);
        assert!((stats.total_revenue - 540.0).abs() < 1e-9);
        assert!((stats.average_order_value - 180.0).abs() < 1e-9);
        assert!((stats.min_order_value - 40.0).abs() < 1e-9);
        assert!((stats.max_order_value - 300.0).abs() < 1e-9);
        assert_eq!(stats.total_items, 4);
        assert_eq!(stats.unique_customers, 2);
        assert_eq!(
            stats.categories,
            vec![Category::Electronics, Category::Books, Category::Clothing]
        );
    }

    #[test]
    fn test_calculate_空集合零值() {
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
    fn test_group_by_status_恰好划分() {
        let engine = StatisticsEngine::new();
        let orders = sample_orders();
        let grouped = engine.group_by_status(&orders);

        // 不丢单,不重复
        let total: usize = grouped.values().map(|group| group.len()).sum();
        assert_eq!(total, orders.len());

        for (status, group) in &grouped {
            for order in group {
                assert_eq!(order.status, *status);
            }
        }

        assert_eq!(grouped[&OrderStatus::Completed].len(), 2);
        assert_eq!(grouped[&OrderStatus::Pending].len(), 1);
        assert!(!grouped.contains_key(&OrderStatus::Refunded));
    }

    #[test]
    fn test_group_revenue() {
        let engine = StatisticsEngine::new();
        let orders = sample_orders();
        let grouped = engine.group_by_status(&orders);

        let completed_revenue = engine.group_revenue(&grouped[&OrderStatus::Completed]);
        assert!((completed_revenue - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_unique_customer_ids_首现顺序() {
        let engine = StatisticsEngine::new();
        let ids = engine.unique_customer_ids(&sample_orders());
        assert_eq!(ids, vec!["c1".to_string(), "c2".to_string()]);
    }
}
