// ==========================================
// 订单管理看板 - 筛选状态模型
// ==========================================
// 职责: 定义视图筛选条件记录
// 红线: 仅展示层可变更,无并发写入者
// ==========================================

use crate::domain::types::{Category, OrderStatus, SortOrder};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// StatusFilter - 状态筛选
// ==========================================
// All 为空筛选（直通）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    Only(OrderStatus),
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

// ==========================================
// CategoryFilter - 类目筛选
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

// ==========================================
// CustomerFilter - 客户筛选
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerFilter {
    All,
    Only(String),
}

impl fmt::Display for CustomerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerFilter::All => write!(f, "all"),
            CustomerFilter::Only(customer_id) => write!(f, "{}", customer_id),
        }
    }
}

// ==========================================
// FilterState - 筛选状态
// ==========================================
// 视图生命周期内驻留内存,由展示层响应用户输入变更
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub status: StatusFilter,     // 状态筛选
    pub min_price: f64,           // 最低订单金额（非负）
    pub category: CategoryFilter, // 类目筛选
    pub customer: CustomerFilter, // 客户筛选
    pub only_discount: bool,      // 仅看折扣单
    pub sort_order: SortOrder,    // 按金额排序方向
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            min_price: 0.0,
            category: CategoryFilter::All,
            customer: CustomerFilter::All,
            only_discount: false,
            sort_order: SortOrder::None,
        }
    }
}

impl FilterState {
    /// 是否为默认（全直通）状态
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }
}
