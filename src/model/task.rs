//! 任务记录与字段规范化

/// 任务记录
///
/// 一条 (成员, 任务 ID, 工时) 三元组。经由 [`crate::model::TaskStore::add`]
/// 入库的记录已规范化；经由 `replace_all` 入库的记录按原样保存。
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// 成员显示名（如 "Alice Chen"）
    pub member: String,
    /// 任务标识（如 "PROJ-142"）
    pub task_id: String,
    /// 工时（小时）
    pub hours: f64,
}

impl Task {
    pub fn new(member: impl Into<String>, task_id: impl Into<String>, hours: f64) -> Self {
        Self {
            member: member.into(),
            task_id: task_id.into(),
            hours,
        }
    }
}

/// 规范化成员名：去除首尾空白，按词首字母大写
///
/// "  alice chen " → "Alice Chen"
pub fn normalize_member(raw: &str) -> String {
    title_case(raw.trim())
}

/// 规范化任务 ID：去除首尾空白，转大写
///
/// " proj-142 " → "PROJ-142"
pub fn normalize_task_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// 词首字母大写，其余小写（跟随字母边界，内部空白原样保留）
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_alpha = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_member() {
        assert_eq!(normalize_member("  alice  "), "Alice");
        assert_eq!(normalize_member("alice chen"), "Alice Chen");
        assert_eq!(normalize_member("BOB O'NEIL"), "Bob O'Neil");
        assert_eq!(normalize_member("jean-luc"), "Jean-Luc");
        assert_eq!(normalize_member("   "), "");
    }

    #[test]
    fn test_normalize_member_keeps_inner_whitespace() {
        // 只去首尾空白，内部空白不合并
        assert_eq!(normalize_member(" alice   chen "), "Alice   Chen");
    }

    #[test]
    fn test_normalize_task_id() {
        assert_eq!(normalize_task_id(" proj-142 "), "PROJ-142");
        assert_eq!(normalize_task_id("jira-9"), "JIRA-9");
        assert_eq!(normalize_task_id(""), "");
    }
}
