// ==========================================
// 订单管理看板 - 引擎层
// ==========================================
// 职责: 实现订单派生计算的业务规则
// 红线: 引擎为纯函数式,不修改输入集合
// ==========================================

pub mod filtering;
pub mod pricing;
pub mod sorting;
pub mod statistics;

// 重导出核心引擎
pub use filtering::FilterEngine;
pub use pricing::{item_value, total_revenue};
pub use sorting::ValueSorter;
pub use statistics::{OrderStatistics, StatisticsEngine};
