// ==========================================
// 订单管理看板 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、业务规则接口
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod action_log;
pub mod filter;
pub mod order;
pub mod types;

// 重导出核心类型
pub use action_log::{ActionType, FilterAction};
pub use filter::{CategoryFilter, CustomerFilter, FilterState, StatusFilter};
pub use order::{Order, OrderItem, OrderPricing, Price};
pub use types::{Category, Currency, OrderStatus, SortOrder};
