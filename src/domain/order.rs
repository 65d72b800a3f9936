// ==========================================
// 订单管理看板 - 订单领域模型
// ==========================================
// 职责: 定义订单实体与值对象
// 红线: 订单数据一经构造不可变,引擎层只读
// ==========================================

use crate::domain::types::{Category, Currency, OrderStatus};
use serde::{Deserialize, Serialize};

// ==========================================
// Price - 单价值对象
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,        // 金额
    pub currency: Currency, // 币种
}

impl Price {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

// ==========================================
// OrderItem - 订单行项目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,        // 商品名称
    pub unit_price: Price,   // 单价
    pub quantity: u32,       // 数量（正整数）
    pub category: Category,  // 商品类目
}

impl OrderItem {
    pub fn new(name: impl Into<String>, unit_price: Price, quantity: u32, category: Category) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
            category,
        }
    }
}

// ==========================================
// Order - 订单实体
// ==========================================
// discount: 折扣率 (区间 [0,1) 的小数,乘法语义,见 OrderPricing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,               // 订单唯一标识
    pub customer_id: String,      // 客户标识
    pub status: OrderStatus,      // 订单状态
    pub items: Vec<OrderItem>,    // 行项目（有序）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,    // 折扣率（可选）
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        status: OrderStatus,
        items: Vec<OrderItem>,
        discount: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            status,
            items,
            discount,
        }
    }

    /// 是否带有效折扣（折扣率 > 0）
    pub fn has_discount(&self) -> bool {
        matches!(self.discount, Some(rate) if rate > 0.0)
    }

    /// 行项目总件数
    pub fn item_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// 订单是否包含指定类目的商品
    pub fn contains_category(&self, category: Category) -> bool {
        self.items.iter().any(|item| item.category == category)
    }
}

// ==========================================
// Trait: OrderPricing
// ==========================================
// 用途: 定价引擎计算接口（实现见 engine::pricing）
pub trait OrderPricing {
    /// 行项目小计之和（未折扣）
    fn subtotal(&self) -> f64;

    /// 折后订单金额（恒 >= 0）
    fn total(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: u32, category: Category) -> OrderItem {
        OrderItem::new("测试商品", Price::new(price, Currency::Pln), quantity, category)
    }

    #[test]
    fn test_has_discount() {
        let order = Order::new("o1", "c1", OrderStatus::Completed, vec![], Some(0.1));
        assert!(order.has_discount());

        // 折扣率为0视为无折扣
        let order = Order::new("o2", "c1", OrderStatus::Completed, vec![], Some(0.0));
        assert!(!order.has_discount());

        let order = Order::new("o3", "c1", OrderStatus::Completed, vec![], None);
        assert!(!order.has_discount());
    }

    #[test]
    fn test_item_quantity() {
        let order = Order::new(
            "o1",
            "c1",
            OrderStatus::Pending,
            vec![item(10.0, 2, Category::Books), item(5.0, 3, Category::Clothing)],
            None,
        );
        assert_eq!(order.item_quantity(), 5);
    }

    #[test]
    fn test_contains_category() {
        let order = Order::new(
            "o1",
            "c1",
            OrderStatus::Pending,
            vec![item(10.0, 1, Category::Books)],
            None,
        );
        assert!(order.contains_category(Category::Books));
        assert!(!order.contains_category(Category::Electronics));
    }
}
