// ==========================================
// 订单管理看板 - 排序引擎
// ==========================================
// 职责: 按折后订单金额稳定排序
// 红线: SortOrder::None 保持插入顺序不变
// ==========================================

use crate::domain::{Order, OrderPricing, SortOrder};

// ==========================================
// ValueSorter - 金额排序引擎
// ==========================================
pub struct ValueSorter {
    // 无状态引擎,不需要注入依赖
}

impl ValueSorter {
    pub fn new() -> Self {
        Self {}
    }

    /// 按订单金额稳定排序
    ///
    /// # 参数
    /// - `orders`: 待排序订单（取得所有权,返回新顺序）
    /// - `sort_order`: 排序方向（None 时原样返回）
    pub fn sort(&self, mut orders: Vec<Order>, sort_order: SortOrder) -> Vec<Order> {
        if sort_order == SortOrder::None {
            return orders;
        }

        // 预计算金额,避免 sort_by 中重复计算
        let mut keyed: Vec<(f64, Order)> = orders
            .drain(..)
            .map(|order| (order.total(), order))
            .collect();

        match sort_order {
            SortOrder::Asc => keyed.sort_by(|a, b| a.0.total_cmp(&b.0)),
            SortOrder::Desc => keyed.sort_by(|a, b| b.0.total_cmp(&a.0)),
            SortOrder::None => unreachable!(),
        }

        keyed.into_iter().map(|(_, order)| order).collect()
    }
}

impl Default for ValueSorter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Currency, OrderItem, OrderStatus, Price};

    fn order(id: &str, amount: f64) -> Order {
        Order::new(
            id,
            "c1",
            OrderStatus::Completed,
            vec![OrderItem::new(
                "测试商品",
                Price::new(amount, Currency::Pln),
                1,
                Category::Books,
            )],
            None,
        )
    }

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_sort_asc_desc() {
        let sorter = ValueSorter::new();
        let orders = vec![order("o1", 300.0), order("o2", 100.0), order("o3", 200.0)];

        let asc = sorter.sort(orders.clone(), SortOrder::Asc);
        assert_eq!(ids(&asc), vec!["o2", "o3", "o1"]);

        let desc = sorter.sort(orders, SortOrder::Desc);
        assert_eq!(ids(&desc), vec!["o1", "o3", "o2"]);
    }

    #[test]
    fn test_sort_none_保持原序() {
        let sorter = ValueSorter::new();
        let orders = vec![order("o1", 300.0), order("o2", 100.0)];
        let result = sorter.sort(orders.clone(), SortOrder::None);
        assert_eq!(result, orders);
    }

    #[test]
    fn test_desc_与asc互逆() {
        // 金额互不相同时,降序结果为升序结果的倒序
        let sorter = ValueSorter::new();
        let orders = vec![
            order("o1", 50.0),
            order("o2", 400.0),
            order("o3", 120.0),
            order("o4", 9.5),
        ];

        let asc = sorter.sort(orders.clone(), SortOrder::Asc);
        let desc = sorter.sort(orders, SortOrder::Desc);
        let mut reversed = desc;
        reversed.reverse();
        assert_eq!(asc, reversed);
    }

    #[test]
    fn test_sort_稳定性() {
        // 金额相同的订单保持相对顺序
        let sorter = ValueSorter::new();
        let orders = vec![order("o1", 100.0), order("o2", 100.0), order("o3", 50.0)];

        let asc = sorter.sort(orders, SortOrder::Asc);
        assert_eq!(ids(&asc), vec!["o3", "o1", "o2"]);
    }
}
