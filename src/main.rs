// ==========================================
// 订单管理看板 - 终端主入口
// ==========================================
// 技术栈: Rust + 内存数据
// 系统定位: 只读订单集合的筛选/统计决策看板
// ==========================================

use std::io::{self, BufRead, Write};

use order_dashboard::app::{help_text, parse_command, render_actions, render_dashboard, AppState, Command};

fn main() {
    // 初始化日志系统
    order_dashboard::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", order_dashboard::APP_NAME);
    tracing::info!("系统版本: {}", order_dashboard::VERSION);
    tracing::info!("==================================================");

    // 创建AppState（加载示例订单集合）
    let state = AppState::new();

    println!("{} v{}", order_dashboard::APP_NAME, order_dashboard::VERSION);
    println!("{}", help_text());
    println!();

    // 首次渲染
    render(&state);

    // 命令循环: 每次筛选变更后同步重算并重绘
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                tracing::error!("读取输入失败: {}", e);
                break;
            }
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        let api = &state.dashboard_api;
        let result = match command {
            Command::Status(status) => api.set_status_filter(status),
            Command::MinPrice(min_price) => api.set_min_price(min_price),
            Command::Category(category) => api.set_category_filter(category),
            Command::Customer(customer) => api.set_customer_filter(customer),
            Command::Discount(only_discount) => api.set_only_discount(only_discount),
            Command::Sort(sort_order) => api.set_sort_order(sort_order),
            Command::Reset => api.reset_filters(),
            Command::Log => {
                match api.get_recent_actions(state.config.recent_actions_limit) {
                    Ok(actions) => println!("{}", render_actions(&actions)),
                    Err(e) => println!("查询失败: {}", e),
                }
                continue;
            }
            Command::Help => {
                println!("{}", help_text());
                continue;
            }
            Command::Quit => break,
        };

        match result {
            Ok(()) => render(&state),
            Err(e) => println!("操作失败: {}", e),
        }
    }

    tracing::info!("看板已退出");
}

/// 渲染当前看板视图
fn render(state: &AppState) {
    // 光标移到左上并清屏
    print!("\x1B[H\x1B[0J");

    match state.dashboard_api.get_dashboard_view() {
        Ok(view) => print!("{}", render_dashboard(&view, state.config.max_table_rows)),
        Err(e) => println!("视图计算失败: {}", e),
    }

    let _ = io::stdout().flush();
}
