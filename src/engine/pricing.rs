// ==========================================
// 订单管理看板 - 定价引擎
// ==========================================
// 职责: 计算行项目价值与折后订单金额
// 折扣语义: 折扣字段为 [0,1) 区间的小数折扣率,
//           乘法作用于行项目小计 (total = subtotal * (1 - rate));
//           越界值收敛到 [0,1],保证订单金额恒非负
// ==========================================

use crate::domain::{Order, OrderItem, OrderPricing};

/// 单个行项目价值 = 单价 × 数量
pub fn item_value(item: &OrderItem) -> f64 {
    item.unit_price.amount * item.quantity as f64
}

impl OrderPricing for Order {
    fn subtotal(&self) -> f64 {
        self.items.iter().map(item_value).sum()
    }

    fn total(&self) -> f64 {
        let rate = self.discount.unwrap_or(0.0).clamp(0.0, 1.0);
        self.subtotal() * (1.0 - rate)
    }
}

/// 订单集合总收入 = 各订单折后金额之和
pub fn total_revenue(orders: &[Order]) -> f64 {
    orders.iter().map(|order| order.total()).sum()
}
