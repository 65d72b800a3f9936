// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供集成测试所需的订单构造器
// ==========================================

#![allow(dead_code)]

use order_dashboard::domain::{Category, Currency, Order, OrderItem, OrderStatus, Price};

// ==========================================
// OrderBuilder - 订单构造器
// ==========================================
pub struct OrderBuilder {
    id: String,
    customer_id: String,
    status: OrderStatus,
    items: Vec<OrderItem>,
    discount: Option<f64>,
}

impl OrderBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            customer_id: "c1".to_string(),
            status: OrderStatus::Completed,
            items: Vec::new(),
            discount: None,
        }
    }

    pub fn customer(mut self, customer_id: &str) -> Self {
        self.customer_id = customer_id.to_string();
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn item(mut self, name: &str, amount: f64, quantity: u32, category: Category) -> Self {
        self.items.push(OrderItem::new(
            name,
            Price::new(amount, Currency::Pln),
            quantity,
            category,
        ));
        self
    }

    pub fn discount(mut self, rate: f64) -> Self {
        self.discount = Some(rate);
        self
    }

    pub fn build(self) -> Order {
        Order::new(self.id, self.customer_id, self.status, self.items, self.discount)
    }
}

/// 单行项目订单的简便构造
pub fn simple_order(id: &str, customer_id: &str, status: OrderStatus, amount: f64) -> Order {
    OrderBuilder::new(id)
        .customer(customer_id)
        .status(status)
        .item("测试商品", amount, 1, Category::Books)
        .build()
}
