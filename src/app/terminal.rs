// ==========================================
// 订单管理看板 - 终端展示层
// ==========================================
// 职责: 渲染看板视图,解析用户筛选命令
// 红线: 渲染为纯函数(视图 → 文本),便于测试
// ==========================================

use std::fmt::Write as _;

use crate::api::DashboardView;
use crate::domain::{
    Category, CategoryFilter, CustomerFilter, FilterAction, OrderStatus, SortOrder, StatusFilter,
};

// ==========================================
// Command - 用户命令
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Status(StatusFilter),     // 状态筛选
    MinPrice(f64),            // 最低金额
    Category(CategoryFilter), // 类目筛选
    Customer(CustomerFilter), // 客户筛选
    Discount(bool),           // 仅看折扣单
    Sort(SortOrder),          // 排序方向
    Reset,                    // 重置筛选
    Log,                      // 查看最近操作
    Help,                     // 帮助
    Quit,                     // 退出
}

/// 解析一行用户输入
///
/// # 返回
/// - Ok(Command): 解析成功
/// - Err(String): 错误提示（含帮助指引）
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let keyword = match parts.next() {
        Some(word) => word.to_lowercase(),
        None => return Err("请输入命令（help 查看帮助）".to_string()),
    };
    let arg = parts.next();

    match keyword.as_str() {
        "status" => {
            let arg = arg.ok_or("用法: status <pending|completed|cancelled|refunded|all>")?;
            if arg.eq_ignore_ascii_case("all") {
                return Ok(Command::Status(StatusFilter::All));
            }
            OrderStatus::parse(arg)
                .map(|status| Command::Status(StatusFilter::Only(status)))
                .ok_or_else(|| format!("未知状态: {}", arg))
        }
        "min" => {
            let arg = arg.ok_or("用法: min <金额>")?;
            arg.parse::<f64>()
                .map(Command::MinPrice)
                .map_err(|_| format!("金额解析失败: {}", arg))
        }
        "category" => {
            let arg = arg.ok_or("用法: category <Electronics|Books|Clothing|all>")?;
            if arg.eq_ignore_ascii_case("all") {
                return Ok(Command::Category(CategoryFilter::All));
            }
            Category::parse(arg)
                .map(|category| Command::Category(CategoryFilter::Only(category)))
                .ok_or_else(|| format!("未知类目: {}", arg))
        }
        "customer" => {
            let arg = arg.ok_or("用法: customer <客户ID|all>")?;
            if arg.eq_ignore_ascii_case("all") {
                Ok(Command::Customer(CustomerFilter::All))
            } else {
                Ok(Command::Customer(CustomerFilter::Only(arg.to_string())))
            }
        }
        "discount" => {
            let arg = arg.ok_or("用法: discount <on|off>")?;
            match arg.to_lowercase().as_str() {
                "on" => Ok(Command::Discount(true)),
                "off" => Ok(Command::Discount(false)),
                other => Err(format!("未知开关: {}", other)),
            }
        }
        "sort" => {
            let arg = arg.ok_or("用法: sort <asc|desc|none>")?;
            SortOrder::parse(arg)
                .map(Command::Sort)
                .ok_or_else(|| format!("未知排序方向: {}", arg))
        }
        "reset" => Ok(Command::Reset),
        "log" => Ok(Command::Log),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("未知命令: {}（help 查看帮助）", other)),
    }
}

/// 帮助文本
pub fn help_text() -> &'static str {
    "命令列表:\n\
     \x20 status <pending|completed|cancelled|refunded|all>  状态筛选\n\
     \x20 min <金额>                                         最低订单金额\n\
     \x20 category <Electronics|Books|Clothing|all>          类目筛选\n\
     \x20 customer <客户ID|all>                              客户筛选\n\
     \x20 discount <on|off>                                  仅看折扣单\n\
     \x20 sort <asc|desc|none>                               按金额排序\n\
     \x20 reset                                              重置全部筛选\n\
     \x20 log                                                查看最近操作\n\
     \x20 quit                                               退出"
}

// ==========================================
// 渲染
// ==========================================

/// 渲染看板视图为终端文本
///
/// # 参数
/// - view: 看板视图
/// - max_rows: 订单表渲染行数上限
pub fn render_dashboard(view: &DashboardView, max_rows: usize) -> String {
    let mut out = String::new();

    // 统计面板
    let stats = &view.stats;
    let _ = writeln!(out, "统计面板");
    let _ = writeln!(
        out,
        "  可见订单: {:>3} / {}    总收入: {:>10.2} PLN    平均: {:>8.2} PLN",
        stats.total_orders, view.total_order_count, stats.total_revenue, stats.average_order_value
    );
    let _ = writeln!(
        out,
        "  金额区间: {:.2} ~ {:.2} PLN    商品件数: {}    客户数: {}",
        stats.min_order_value, stats.max_order_value, stats.total_items, stats.unique_customers
    );

    // 状态汇总
    let _ = writeln!(out, "\n状态汇总");
    let _ = writeln!(out, "   status   | count |   revenue");
    let _ = writeln!(out, "  --------- | ----- | ----------");
    for row in &view.status_summary {
        let _ = writeln!(
            out,
            "  {:>9} | {:>5} | {:>10.2}",
            row.status.to_string(),
            row.count,
            row.revenue
        );
    }

    // 订单表
    let _ = writeln!(out, "\n订单列表");
    let _ = writeln!(out, "   id  | customer |  status   | items |    total   | discount");
    let _ = writeln!(out, "  ---- | -------- | --------- | ----- | ---------- | --------");
    for order in view.orders.iter().take(max_rows) {
        let discount = order
            .discount
            .map(|rate| format!("{:.0}%", rate * 100.0))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "  {:>4} | {:>8} | {:>9} | {:>5} | {:>10.2} | {:>8}",
            order.id,
            order.customer_id,
            order.status.to_string(),
            order.item_count,
            order.total,
            discount
        );
    }
    if view.orders.len() > max_rows {
        let _ = writeln!(out, "  ... 其余 {} 单未显示", view.orders.len() - max_rows);
    }
    if view.orders.is_empty() {
        let _ = writeln!(out, "  (无匹配订单,reset 可重置筛选)");
    }

    // 当前筛选
    let filters = &view.filters;
    let _ = writeln!(
        out,
        "\n当前筛选: status={} min={:.2} category={} customer={} discount={} sort={}",
        filters.status,
        filters.min_price,
        filters.category,
        filters.customer,
        if filters.only_discount { "on" } else { "off" },
        filters.sort_order
    );

    out
}

/// 渲染最近操作日志
pub fn render_actions(actions: &[FilterAction]) -> String {
    if actions.is_empty() {
        return "暂无操作记录".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "最近操作（新→旧）");
    for action in actions {
        let _ = writeln!(
            out,
            "  {} | {:<17} | {}",
            action.action_ts.format("%Y-%m-%d %H:%M:%S"),
            action.action_type.to_string(),
            action.detail
        );
    }
    out
}
