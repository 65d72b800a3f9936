// ==========================================
// 订单管理看板 - 筛选引擎
// ==========================================
// 职责: 提供可组合的订单筛选谓词
// 红线: 纯函数,不修改输入集合
// 组合规则: 各条件顺序应用(逻辑 AND),
//           "all" 哨兵为直通
// ==========================================

use crate::domain::{
    Category, CategoryFilter, CustomerFilter, FilterState, Order, OrderPricing, OrderStatus,
    StatusFilter,
};
use crate::engine::sorting::ValueSorter;

// ==========================================
// FilterEngine - 筛选引擎
// ==========================================
pub struct FilterEngine {
    // 无状态引擎,不需要注入依赖
}

impl FilterEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 单项筛选谓词
    // ==========================================

    /// 按状态精确匹配
    pub fn by_status(&self, orders: &[Order], status: OrderStatus) -> Vec<Order> {
        orders
            .iter()
            .filter(|order| order.status == status)
            .cloned()
            .collect()
    }

    /// 按折后金额下限筛选（订单金额 >= threshold）
    pub fn high_value(&self, orders: &[Order], threshold: f64) -> Vec<Order> {
        orders
            .iter()
            .filter(|order| order.total() >= threshold)
            .cloned()
            .collect()
    }

    /// 按类目筛选（至少一个行项目属于该类目）
    pub fn by_category(&self, orders: &[Order], category: Category) -> Vec<Order> {
        orders
            .iter()
            .filter(|order| order.contains_category(category))
            .cloned()
            .collect()
    }

    /// 按客户精确匹配
    pub fn by_customer(&self, orders: &[Order], customer_id: &str) -> Vec<Order> {
        orders
            .iter()
            .filter(|order| order.customer_id == customer_id)
            .cloned()
            .collect()
    }

    /// 仅保留带折扣的订单（折扣率 > 0）
    pub fn with_discount(&self, orders: &[Order]) -> Vec<Order> {
        orders
            .iter()
            .filter(|order| order.has_discount())
            .cloned()
            .collect()
    }

    // ==========================================
    // 组合应用
    // ==========================================

    /// 按筛选状态顺序应用全部条件并排序
    ///
    /// 应用顺序: 状态 → 金额下限 → 类目 → 客户 → 折扣 → 排序
    /// （与各条件逻辑 AND 等价,顺序仅影响中间集合大小）
    pub fn apply(&self, orders: &[Order], filters: &FilterState) -> Vec<Order> {
        let mut result: Vec<Order> = orders.to_vec();

        if let StatusFilter::Only(status) = filters.status {
            result = self.by_status(&result, status);
        }

        // 阈值为0时恒通过（订单金额恒非负）
        result = self.high_value(&result, filters.min_price);

        if let CategoryFilter::Only(category) = filters.category {
            result = self.by_category(&result, category);
        }

        if let CustomerFilter::Only(ref customer_id) = filters.customer {
            result = self.by_customer(&result, customer_id);
        }

        if filters.only_discount {
            result = self.with_discount(&result);
        }

        ValueSorter::new().sort(result, filters.sort_order)
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}
