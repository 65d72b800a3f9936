// ==========================================
// 订单管理看板 - 操作日志领域模型
// ==========================================
// 职责: 记录展示层的筛选操作,用于审计追踪
// 红线: 所有筛选变更必须记录
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// FilterAction - 筛选操作日志
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterAction {
    pub action_id: String,        // 日志ID (UUID)
    pub action_type: ActionType,  // 操作类型
    pub action_ts: NaiveDateTime, // 操作时间戳
    pub detail: String,           // 详细描述（新筛选值）
}

impl FilterAction {
    /// 创建一条新的操作日志（时间戳取当前本地时间）
    pub fn new(action_type: ActionType, detail: impl Into<String>) -> Self {
        Self {
            action_id: uuid::Uuid::new_v4().to_string(),
            action_type,
            action_ts: chrono::Local::now().naive_local(),
            detail: detail.into(),
        }
    }
}

// ==========================================
// ActionType - 操作类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    SetStatus,       // 设置状态筛选
    SetMinPrice,     // 设置最低金额
    SetCategory,     // 设置类目筛选
    SetCustomer,     // 设置客户筛选
    SetOnlyDiscount, // 设置仅看折扣单
    SetSortOrder,    // 设置排序方向
    ResetFilters,    // 重置全部筛选
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionType::SetStatus => write!(f, "SET_STATUS"),
            ActionType::SetMinPrice => write!(f, "SET_MIN_PRICE"),
            ActionType::SetCategory => write!(f, "SET_CATEGORY"),
            ActionType::SetCustomer => write!(f, "SET_CUSTOMER"),
            ActionType::SetOnlyDiscount => write!(f, "SET_ONLY_DISCOUNT"),
            ActionType::SetSortOrder => write!(f, "SET_SORT_ORDER"),
            ActionType::ResetFilters => write!(f, "RESET_FILTERS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_action_has_unique_id() {
        let a = FilterAction::new(ActionType::SetStatus, "completed");
        let b = FilterAction::new(ActionType::SetStatus, "completed");
        assert_ne!(a.action_id, b.action_id);
        assert_eq!(a.detail, "completed");
    }

    #[test]
    fn test_action_type_display() {
        assert_eq!(ActionType::ResetFilters.to_string(), "RESET_FILTERS");
        assert_eq!(ActionType::SetMinPrice.to_string(), "SET_MIN_PRICE");
    }
}
