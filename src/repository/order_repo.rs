// ==========================================
// 订单管理看板 - 订单仓储
// ==========================================
// 职责: 持有只读订单集合,提供查询访问
// 红线: 集合构造后不可变,无持久化
// ==========================================

use crate::domain::Order;
use crate::repository::error::{RepositoryError, RepositoryResult};

// ==========================================
// OrderRepository - 只读订单仓储
// ==========================================
pub struct OrderRepository {
    orders: Vec<Order>,
}

impl OrderRepository {
    /// 以给定订单集合构造仓储
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// 返回全部订单（保持插入顺序）
    pub fn list_all(&self) -> &[Order] {
        &self.orders
    }

    /// 按订单ID查询
    ///
    /// # 返回
    /// - Ok(&Order): 命中的订单
    /// - Err(RepositoryError::NotFound): 订单不存在
    pub fn find_by_id(&self, order_id: &str) -> RepositoryResult<&Order> {
        self.orders
            .iter()
            .find(|order| order.id == order_id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "Order".to_string(),
                id: order_id.to_string(),
            })
    }

    /// 是否存在指定客户的订单
    pub fn customer_exists(&self, customer_id: &str) -> bool {
        self.orders.iter().any(|order| order.customer_id == customer_id)
    }

    /// 订单总数
    pub fn count(&self) -> usize {
        self.orders.len()
    }
}
