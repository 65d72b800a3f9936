// ==========================================
// 订单管理看板 - 操作日志仓储
// ==========================================
// 职责: 追加与查询筛选操作日志（内存存储）
// 红线: 只追加,不修改历史记录
// ==========================================

use std::sync::Mutex;

use crate::domain::{ActionType, FilterAction};
use crate::repository::error::{RepositoryError, RepositoryResult};

// ==========================================
// ActionLogRepository - 内存操作日志仓储
// ==========================================
pub struct ActionLogRepository {
    entries: Mutex<Vec<FilterAction>>,
}

impl ActionLogRepository {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// 追加一条操作日志
    pub fn append(&self, action: FilterAction) -> RepositoryResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        entries.push(action);
        Ok(())
    }

    /// 查询最近操作（按时间倒序）
    ///
    /// # 参数
    /// - limit: 返回记录数上限
    pub fn find_recent(&self, limit: usize) -> RepositoryResult<Vec<FilterAction>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(entries.iter().rev().take(limit).cloned().collect())
    }

    /// 按操作类型查询
    pub fn find_by_type(&self, action_type: ActionType) -> RepositoryResult<Vec<FilterAction>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(entries
            .iter()
            .filter(|action| action.action_type == action_type)
            .cloned()
            .collect())
    }

    /// 日志总条数
    pub fn count(&self) -> RepositoryResult<usize> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(entries.len())
    }
}

impl Default for ActionLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_count() {
        let repo = ActionLogRepository::new();
        assert_eq!(repo.count().unwrap(), 0);

        repo.append(FilterAction::new(ActionType::SetStatus, "completed"))
            .unwrap();
        repo.append(FilterAction::new(ActionType::ResetFilters, "默认值"))
            .unwrap();
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_find_recent_倒序() {
        let repo = ActionLogRepository::new();
        repo.append(FilterAction::new(ActionType::SetStatus, "第一条"))
            .unwrap();
        repo.append(FilterAction::new(ActionType::SetMinPrice, "第二条"))
            .unwrap();
        repo.append(FilterAction::new(ActionType::SetSortOrder, "第三条"))
            .unwrap();

        let recent = repo.find_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].detail, "第三条");
        assert_eq!(recent[1].detail, "第二条");
    }

    #[test]
    fn test_find_by_type() {
        let repo = ActionLogRepository::new();
        repo.append(FilterAction::new(ActionType::SetStatus, "pending"))
            .unwrap();
        repo.append(FilterAction::new(ActionType::SetStatus, "completed"))
            .unwrap();
        repo.append(FilterAction::new(ActionType::SetMinPrice, "100"))
            .unwrap();

        let by_status = repo.find_by_type(ActionType::SetStatus).unwrap();
        assert_eq!(by_status.len(), 2);
    }
}
