// ==========================================
// 订单管理看板 - 领域类型定义
// ==========================================
// 职责: 定义订单领域的枚举类型
// 序列化格式与源数据一致 (状态小写/币种大写)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 订单状态 (Order Status)
// ==========================================
// 排序顺序固定: Pending < Completed < Cancelled < Refunded
// (用于按状态分组时的稳定展示顺序)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,   // 待处理
    Completed, // 已完成
    Cancelled, // 已取消
    Refunded,  // 已退款
}

impl OrderStatus {
    /// 全部状态（按展示顺序）
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
        OrderStatus::Refunded,
    ];

    /// 从字符串解析状态（大小写不敏感）
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            "refunded" => Some(OrderStatus::Refunded),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
            OrderStatus::Refunded => write!(f, "refunded"),
        }
    }
}

// ==========================================
// 商品类目 (Category)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics, // 电子产品
    Books,       // 图书
    Clothing,    // 服装
}

impl Category {
    /// 从字符串解析类目（大小写不敏感）
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "electronics" => Some(Category::Electronics),
            "books" => Some(Category::Books),
            "clothing" => Some(Category::Clothing),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Electronics => write!(f, "Electronics"),
            Category::Books => write!(f, "Books"),
            Category::Clothing => write!(f, "Clothing"),
        }
    }
}

// ==========================================
// 币种 (Currency)
// ==========================================
// 注意: 看板聚合统计按单一展示币种计算,不做汇率换算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Pln,
    Eur,
    Usd,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Pln => write!(f, "PLN"),
            Currency::Eur => write!(f, "EUR"),
            Currency::Usd => write!(f, "USD"),
        }
    }
}

// ==========================================
// 排序方向 (Sort Order)
// ==========================================
// None 表示保持插入顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    None, // 默认顺序
    Asc,  // 按订单金额升序
    Desc, // 按订单金额降序
}

impl SortOrder {
    /// 从字符串解析排序方向
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(SortOrder::None),
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::None => write!(f, "none"),
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}
