// ==========================================
// 订单管理看板 - 配置层
// ==========================================
// 职责: 看板运行配置（默认值 + 环境变量覆盖）
// ==========================================

use serde::{Deserialize, Serialize};

/// 最近操作日志默认查询条数
pub const DEFAULT_RECENT_ACTIONS_LIMIT: i32 = 20;

/// 订单表默认渲染行数上限
pub const DEFAULT_MAX_TABLE_ROWS: usize = 50;

// ==========================================
// DashboardConfig - 看板配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// 最近操作日志查询条数（1-1000）
    pub recent_actions_limit: i32,
    /// 订单表渲染行数上限
    pub max_table_rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_actions_limit: DEFAULT_RECENT_ACTIONS_LIMIT,
            max_table_rows: DEFAULT_MAX_TABLE_ROWS,
        }
    }
}

impl DashboardConfig {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    /// - ORDER_DASHBOARD_RECENT_ACTIONS_LIMIT: 最近操作条数
    /// - ORDER_DASHBOARD_MAX_TABLE_ROWS: 订单表行数上限
    ///
    /// 解析失败时保留默认值并记录警告
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("ORDER_DASHBOARD_RECENT_ACTIONS_LIMIT") {
            match value.parse::<i32>() {
                Ok(limit) if (1..=1000).contains(&limit) => {
                    config.recent_actions_limit = limit;
                }
                _ => {
                    tracing::warn!("配置解析失败,保留默认值: RECENT_ACTIONS_LIMIT={}", value);
                }
            }
        }

        if let Ok(value) = std::env::var("ORDER_DASHBOARD_MAX_TABLE_ROWS") {
            match value.parse::<usize>() {
                Ok(rows) if rows > 0 => {
                    config.max_table_rows = rows;
                }
                _ => {
                    tracing::warn!("配置解析失败,保留默认值: MAX_TABLE_ROWS={}", value);
                }
            }
        }

        config
    }
}
