// ==========================================
// 订单管理看板 - 看板 API
// ==========================================
// 职责: 封装筛选状态变更与看板视图聚合查询
// 架构: API 层 → 引擎层 (Filter/Sorter/Statistics) → 仓储层
// 红线: 订单集合只读;筛选状态仅经本层变更;全部变更记录操作日志
// ==========================================

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{
    ActionType, Category, CategoryFilter, Currency, CustomerFilter, FilterAction, FilterState,
    Order, OrderPricing, OrderStatus, SortOrder, StatusFilter,
};
use crate::engine::{item_value, FilterEngine, OrderStatistics, StatisticsEngine};
use crate::repository::{ActionLogRepository, OrderRepository};

// ==========================================
// DashboardApi - 看板 API
// ==========================================

/// 看板API
///
/// 职责：
/// 1. 持有筛选状态,提供经校验的变更入口
/// 2. 聚合查询: 筛选+排序后的订单视图、统计面板、状态汇总
/// 3. 操作日志查询
pub struct DashboardApi {
    /// 订单仓储（只读集合）
    order_repo: Arc<OrderRepository>,
    /// 操作日志仓储
    action_log_repo: Arc<ActionLogRepository>,
    /// 当前筛选状态（单写入者: 展示层）
    filters: Mutex<FilterState>,
    /// 筛选引擎
    filter_engine: FilterEngine,
    /// 统计引擎
    statistics_engine: StatisticsEngine,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    ///
    /// # 参数
    /// - order_repo: 订单仓储
    /// - action_log_repo: 操作日志仓储
    pub fn new(order_repo: Arc<OrderRepository>, action_log_repo: Arc<ActionLogRepository>) -> Self {
        Self {
            order_repo,
            action_log_repo,
            filters: Mutex::new(FilterState::default()),
            filter_engine: FilterEngine::new(),
            statistics_engine: StatisticsEngine::new(),
        }
    }

    // ==========================================
    // 聚合查询接口
    // ==========================================

    /// 查询看板视图
    ///
    /// 每次调用按当前筛选状态重新执行全部派生计算
    ///
    /// # 返回
    /// - Ok(DashboardView): 筛选后订单、统计面板、状态汇总
    /// - Err(ApiError): API错误
    pub fn get_dashboard_view(&self) -> ApiResult<DashboardView> {
        let filters = self.current_filters()?;

        let processed = self
            .filter_engine
            .apply(self.order_repo.list_all(), &filters);
        let stats = self.statistics_engine.calculate(&processed);

        let status_summary = stats
            .orders_by_status
            .iter()
            .map(|(status, group)| StatusSummaryRow {
                status: *status,
                count: group.len(),
                revenue: self.statistics_engine.group_revenue(group),
            })
            .collect();

        Ok(DashboardView {
            filters,
            orders: processed.iter().map(OrderView::from_order).collect(),
            stats: StatisticsView::from_statistics(&stats),
            status_summary,
            total_order_count: self.order_repo.count(),
        })
    }

    /// 查询当前筛选状态
    pub fn current_filters(&self) -> ApiResult<FilterState> {
        let filters = self
            .filters
            .lock()
            .map_err(|e| ApiError::InternalError(format!("筛选状态锁获取失败: {}", e)))?;
        Ok(filters.clone())
    }

    /// 查询订单明细
    ///
    /// # 参数
    /// - order_id: 订单ID
    pub fn get_order_detail(&self, order_id: &str) -> ApiResult<OrderView> {
        if order_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("订单ID不能为空".to_string()));
        }
        let order = self.order_repo.find_by_id(order_id)?;
        Ok(OrderView::from_order(order))
    }

    /// 去重客户ID列表（供客户筛选控件使用）
    pub fn list_customers(&self) -> Vec<String> {
        self.statistics_engine
            .unique_customer_ids(self.order_repo.list_all())
    }

    /// 出现过的类目列表（供类目筛选控件使用）
    pub fn list_categories(&self) -> Vec<Category> {
        self.statistics_engine
            .all_categories(self.order_repo.list_all())
    }

    // ==========================================
    // 筛选状态变更接口
    // ==========================================

    /// 设置状态筛选
    pub fn set_status_filter(&self, status: StatusFilter) -> ApiResult<()> {
        self.mutate_filters(ActionType::SetStatus, status.to_string(), |filters| {
            filters.status = status;
            Ok(())
        })
    }

    /// 设置最低订单金额
    ///
    /// # 参数
    /// - min_price: 非负有限数
    pub fn set_min_price(&self, min_price: f64) -> ApiResult<()> {
        if !min_price.is_finite() {
            return Err(ApiError::InvalidInput(
                "最低金额必须为有限数值".to_string(),
            ));
        }
        if min_price < 0.0 {
            return Err(ApiError::InvalidInput("最低金额不能为负数".to_string()));
        }
        self.mutate_filters(ActionType::SetMinPrice, format!("{:.2}", min_price), |filters| {
            filters.min_price = min_price;
            Ok(())
        })
    }

    /// 设置类目筛选
    pub fn set_category_filter(&self, category: CategoryFilter) -> ApiResult<()> {
        self.mutate_filters(ActionType::SetCategory, category.to_string(), |filters| {
            filters.category = category;
            Ok(())
        })
    }

    /// 设置客户筛选
    ///
    /// 指定具体客户时校验其在订单集合中存在
    pub fn set_customer_filter(&self, customer: CustomerFilter) -> ApiResult<()> {
        if let CustomerFilter::Only(ref customer_id) = customer {
            if customer_id.trim().is_empty() {
                return Err(ApiError::InvalidInput("客户ID不能为空".to_string()));
            }
            if !self.order_repo.customer_exists(customer_id) {
                return Err(ApiError::NotFound(format!(
                    "Customer(id={})不存在",
                    customer_id
                )));
            }
        }
        self.mutate_filters(ActionType::SetCustomer, customer.to_string(), |filters| {
            filters.customer = customer.clone();
            Ok(())
        })
    }

    /// 设置仅看折扣单
    pub fn set_only_discount(&self, only_discount: bool) -> ApiResult<()> {
        self.mutate_filters(
            ActionType::SetOnlyDiscount,
            only_discount.to_string(),
            |filters| {
                filters.only_discount = only_discount;
                Ok(())
            },
        )
    }

    /// 设置排序方向
    pub fn set_sort_order(&self, sort_order: SortOrder) -> ApiResult<()> {
        self.mutate_filters(ActionType::SetSortOrder, sort_order.to_string(), |filters| {
            filters.sort_order = sort_order;
            Ok(())
        })
    }

    /// 重置全部筛选为默认值
    pub fn reset_filters(&self) -> ApiResult<()> {
        self.mutate_filters(ActionType::ResetFilters, "默认值", |filters| {
            *filters = FilterState::default();
            Ok(())
        })
    }

    // ==========================================
    // 操作日志查询接口
    // ==========================================

    /// 查询最近操作
    ///
    /// # 参数
    /// - limit: 返回记录数上限（1-1000）
    pub fn get_recent_actions(&self, limit: i32) -> ApiResult<Vec<FilterAction>> {
        if limit <= 0 || limit > 1000 {
            return Err(ApiError::InvalidInput("limit必须在1-1000之间".to_string()));
        }
        self.action_log_repo
            .find_recent(limit as usize)
            .map_err(ApiError::from)
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    /// 变更筛选状态并记录操作日志
    fn mutate_filters<F>(
        &self,
        action_type: ActionType,
        detail: impl Into<String>,
        mutate: F,
    ) -> ApiResult<()>
    where
        F: FnOnce(&mut FilterState) -> ApiResult<()>,
    {
        {
            let mut filters = self
                .filters
                .lock()
                .map_err(|e| ApiError::InternalError(format!("筛选状态锁获取失败: {}", e)))?;
            mutate(&mut filters)?;
        }

        let detail = detail.into();
        tracing::debug!("筛选变更: type={}, detail={}", action_type, detail);
        self.action_log_repo
            .append(FilterAction::new(action_type, detail))
            .map_err(ApiError::from)
    }
}

// ==========================================
// DTO 类型定义
// ==========================================

/// 行项目视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemView {
    pub name: String,       // 商品名称
    pub unit_price: f64,    // 单价
    pub currency: Currency, // 币种
    pub quantity: u32,      // 数量
    pub category: Category, // 类目
    pub value: f64,         // 行项目价值（单价×数量）
}

/// 订单视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderView {
    pub id: String,                   // 订单ID
    pub customer_id: String,          // 客户ID
    pub status: OrderStatus,          // 订单状态
    pub total: f64,                   // 折后金额
    pub item_count: u32,              // 行项目总件数
    pub discount: Option<f64>,        // 折扣率
    pub items: Vec<OrderItemView>,    // 行项目明细
}

impl OrderView {
    /// 由领域订单构造视图（含派生金额）
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            customer_id: order.customer_id.clone(),
            status: order.status,
            total: order.total(),
            item_count: order.item_quantity(),
            discount: order.discount,
            items: order
                .items
                .iter()
                .map(|item| OrderItemView {
                    name: item.name.clone(),
                    unit_price: item.unit_price.amount,
                    currency: item.unit_price.currency,
                    quantity: item.quantity,
                    category: item.category,
                    value: item_value(item),
                })
                .collect(),
        }
    }
}

/// 统计面板视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsView {
    pub total_orders: usize,       // 可见订单数
    pub total_revenue: f64,        // 总收入
    pub average_order_value: f64,  // 平均订单金额
    pub min_order_value: f64,      // 最小订单金额
    pub max_order_value: f64,      // 最大订单金额
    pub total_items: u32,          // 商品总件数
    pub unique_customers: usize,   // 去重客户数
    pub categories: Vec<Category>, // 出现过的类目
}

impl StatisticsView {
    pub fn from_statistics(stats: &OrderStatistics) -> Self {
        Self {
            total_orders: stats.total_orders,
            total_revenue: stats.total_revenue,
            average_order_value: stats.average_order_value,
            min_order_value: stats.min_order_value,
            max_order_value: stats.max_order_value,
            total_items: stats.total_items,
            unique_customers: stats.unique_customers,
            categories: stats.categories.clone(),
        }
    }
}

/// 状态汇总行（按状态分组的数量与收入）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSummaryRow {
    pub status: OrderStatus, // 状态
    pub count: usize,        // 订单数
    pub revenue: f64,        // 组收入
}

/// 看板视图（聚合根 DTO）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub filters: FilterState,                 // 当前筛选状态
    pub orders: Vec<OrderView>,               // 筛选+排序后的订单
    pub stats: StatisticsView,                // 统计面板
    pub status_summary: Vec<StatusSummaryRow>, // 状态汇总
    pub total_order_count: usize,             // 未筛选订单总数
}
