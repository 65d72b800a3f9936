// ==========================================
// 订单管理看板 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::DashboardApi;
use crate::app::seed;
use crate::config::DashboardConfig;
use crate::domain::Order;
use crate::repository::{ActionLogRepository, OrderRepository};

/// 应用状态
///
/// 包含API实例和共享资源,在展示层生命周期内驻留
pub struct AppState {
    /// 看板配置
    pub config: DashboardConfig,

    /// 看板API
    pub dashboard_api: Arc<DashboardApi>,

    /// 操作日志仓储（用于审计追踪）
    pub action_log_repo: Arc<ActionLogRepository>,
}

impl AppState {
    /// 以示例数据创建AppState实例
    pub fn new() -> Self {
        Self::with_orders(seed::sample_orders(), DashboardConfig::from_env())
    }

    /// 以给定订单集合创建AppState实例
    ///
    /// # 参数
    /// - orders: 只读订单集合
    /// - config: 看板配置
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 初始化仓储层（订单仓储、操作日志仓储）
    /// 2. 创建看板API实例
    pub fn with_orders(orders: Vec<Order>, config: DashboardConfig) -> Self {
        tracing::info!("初始化AppState,订单数: {}", orders.len());

        let order_repo = Arc::new(OrderRepository::new(orders));
        let action_log_repo = Arc::new(ActionLogRepository::new());

        let dashboard_api = Arc::new(DashboardApi::new(
            order_repo,
            action_log_repo.clone(),
        ));

        tracing::info!("AppState初始化完成");

        Self {
            config,
            dashboard_api,
            action_log_repo,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_wiring() {
        let state = AppState::with_orders(seed::sample_orders(), DashboardConfig::default());
        let view = state.dashboard_api.get_dashboard_view().expect("查询失败");
        assert_eq!(view.total_order_count, 12);
        assert_eq!(view.orders.len(), 12);
    }
}
