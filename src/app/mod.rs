// ==========================================
// 订单管理看板 - 应用层
// ==========================================
// 职责: 状态装配与终端展示,连接用户与API层
// ==========================================

pub mod seed;
pub mod state;
pub mod terminal;

// 重导出
pub use state::AppState;
pub use terminal::{help_text, parse_command, render_actions, render_dashboard, Command};
