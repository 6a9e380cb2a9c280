//! 会话内任务列表
//!
//! 任务只存活于一次会话，不落盘。新增走校验路径，表格编辑走
//! `replace_all` 直写路径（不重新校验，见方法注释）。

use super::task::{normalize_member, normalize_task_id, Task};

/// `add` 的结果
///
/// 校验失败是表单层面的拒绝，不是错误路径，所以用状态枚举而非 Result。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// 已追加
    Added,
    /// 成员名规范化后为空
    EmptyMember,
    /// 任务 ID 规范化后为空
    EmptyTaskId,
    /// 工时不为正数
    NonPositiveHours,
}

/// 任务列表，插入序即唯一顺序
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 校验并追加一条记录
    ///
    /// 输入先规范化（成员名 trim+title-case，任务 ID trim+大写）。
    /// 规范化后成员或任务 ID 为空、或工时 <= 0 时拒绝，不改动列表。
    /// 不去重：同成员同任务 ID 的记录可以并存。
    pub fn add(&mut self, member: &str, task_id: &str, hours: f64) -> AddOutcome {
        let member = normalize_member(member);
        let task_id = normalize_task_id(task_id);

        if member.is_empty() {
            return AddOutcome::EmptyMember;
        }
        if task_id.is_empty() {
            return AddOutcome::EmptyTaskId;
        }
        if hours <= 0.0 {
            return AddOutcome::NonPositiveHours;
        }

        self.tasks.push(Task::new(member, task_id, hours));
        AddOutcome::Added
    }

    /// 用给定序列整体覆盖列表
    ///
    /// 不做任何规范化或校验：表格编辑器会在编辑中途持有空行、半成品行，
    /// 这里按原样接受（与 `add` 路径不一致，是有意保留的参考行为）。
    pub fn replace_all(&mut self, records: Vec<Task>) {
        self.tasks = records;
    }

    /// 只读视图，顺序即插入/编辑顺序
    pub fn snapshot(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 不同成员数（用于头部统计行）
    pub fn member_count(&self) -> usize {
        let mut seen: Vec<&str> = Vec::new();
        for task in &self.tasks {
            if !seen.contains(&task.member.as_str()) {
                seen.push(&task.member);
            }
        }
        seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_normalized_record() {
        let mut store = TaskStore::new();
        let outcome = store.add("  alice ", " proj-1 ", 3.5);

        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(
            store.snapshot().last(),
            Some(&Task::new("Alice", "PROJ-1", 3.5))
        );
    }

    #[test]
    fn test_add_rejections_leave_store_unchanged() {
        let mut store = TaskStore::new();
        store.add("Alice", "T1", 2.0);

        assert_eq!(store.add("   ", "T2", 1.0), AddOutcome::EmptyMember);
        assert_eq!(store.add("Bob", "  ", 1.0), AddOutcome::EmptyTaskId);
        assert_eq!(store.add("Bob", "T2", 0.0), AddOutcome::NonPositiveHours);
        assert_eq!(store.add("Bob", "T2", -1.5), AddOutcome::NonPositiveHours);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_keeps_duplicates() {
        let mut store = TaskStore::new();
        store.add("Alice", "T1", 1.0);
        store.add("Alice", "T1", 2.0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_replace_all_round_trips_without_validation() {
        let mut store = TaskStore::new();
        store.add("Alice", "T1", 1.0);

        // 空成员、零工时都原样接受
        let records = vec![
            Task::new("", "t-raw", 0.0),
            Task::new("bob", "", -2.0),
        ];
        store.replace_all(records.clone());

        assert_eq!(store.snapshot(), records.as_slice());
    }

    #[test]
    fn test_member_count() {
        let mut store = TaskStore::new();
        assert_eq!(store.member_count(), 0);

        store.add("Alice", "T1", 1.0);
        store.add("Bob", "T2", 2.0);
        store.add("Alice", "T3", 3.0);
        assert_eq!(store.member_count(), 2);
    }
}
