// ==========================================
// 订单管理看板 - 仓储层
// ==========================================
// 职责: 内存数据访问,订单集合只读
// ==========================================

pub mod action_log_repo;
pub mod error;
pub mod order_repo;

// 重导出核心类型
pub use action_log_repo::ActionLogRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use order_repo::OrderRepository;
