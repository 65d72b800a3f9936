// ==========================================
// 订单管理看板 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供展示层调用
// ==========================================

pub mod dashboard_api;
pub mod error;

// 重导出核心类型
pub use dashboard_api::{
    DashboardApi, DashboardView, OrderItemView, OrderView, StatisticsView, StatusSummaryRow,
};
pub use error::{ApiError, ApiResult};
