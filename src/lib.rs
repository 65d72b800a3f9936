// ==========================================
// 订单管理看板 - 核心库
// ==========================================
// 技术栈: Rust + 内存数据
// 系统定位: 只读订单集合的筛选/统计决策看板
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 内存数据访问
pub mod repository;

// 引擎层 - 派生计算规则
pub mod engine;

// 配置层 - 看板配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态装配与终端展示
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Category, Currency, OrderStatus, SortOrder};

// 领域实体
pub use domain::{
    ActionType, FilterAction, FilterState, Order, OrderItem, OrderPricing, Price,
};

// 筛选哨兵
pub use domain::{CategoryFilter, CustomerFilter, StatusFilter};

// 引擎
pub use engine::{FilterEngine, OrderStatistics, StatisticsEngine, ValueSorter};

// API
pub use api::{ApiError, ApiResult, DashboardApi, DashboardView};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "订单管理看板";
