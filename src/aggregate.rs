//! 工时聚合
//!
//! 纯函数，不持有状态：输入任务切片，输出汇总数据。渲染层只消费
//! 这里的结果，自己不做任何计算。

use std::cmp::Ordering;

use crate::model::Task;

/// 单个成员的工时合计
#[derive(Debug, Clone, PartialEq)]
pub struct MemberEffort {
    pub member: String,
    pub total_hours: f64,
}

/// 单个成员的工时占比（百分数）
#[derive(Debug, Clone, PartialEq)]
pub struct MemberShare {
    pub member: String,
    pub percent: f64,
}

/// 仪表盘一次性拉取的全部聚合结果
///
/// 在用户显式请求时计算，编辑后不保留旧值（拉取模型，不做缓存）。
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// 按合计工时降序的成员汇总
    pub summary: Vec<MemberEffort>,
    /// 团队总工时
    pub total: f64,
    /// 成员平均工时
    pub average: f64,
    /// 低于平均的成员（保持汇总顺序）
    pub underloaded: Vec<MemberEffort>,
    /// 占比视图数据（总工时为 0 时为空）
    pub shares: Vec<MemberShare>,
}

impl DashboardData {
    /// 从当前任务列表计算仪表盘数据，空列表返回 None
    pub fn compute(tasks: &[Task]) -> Option<Self> {
        if tasks.is_empty() {
            return None;
        }

        let summary = per_member_summary(tasks);
        let total = total_effort(tasks);
        let average = average_effort(&summary)?;
        let underloaded = underloaded(&summary, average);
        let shares = percentage_shares(&summary, total);

        Some(Self {
            summary,
            total,
            average,
            underloaded,
            shares,
        })
    }
}

/// 全部记录的工时总和，空输入为 0
pub fn total_effort(tasks: &[Task]) -> f64 {
    tasks.iter().map(|t| t.hours).sum()
}

/// 按成员分组求和，按合计降序排序
///
/// 分组按成员首次出现的顺序建立；排序是稳定排序，因此合计相同的成员
/// 保持首次出现的相对顺序。
pub fn per_member_summary(tasks: &[Task]) -> Vec<MemberEffort> {
    let mut summary: Vec<MemberEffort> = Vec::new();

    for task in tasks {
        match summary.iter_mut().find(|row| row.member == task.member) {
            Some(row) => row.total_hours += task.hours,
            None => summary.push(MemberEffort {
                member: task.member.clone(),
                total_hours: task.hours,
            }),
        }
    }

    summary.sort_by(|a, b| {
        b.total_hours
            .partial_cmp(&a.total_hours)
            .unwrap_or(Ordering::Equal)
    });

    summary
}

/// 成员平均工时，空汇总返回 None（调用方必须先判空）
pub fn average_effort(summary: &[MemberEffort]) -> Option<f64> {
    if summary.is_empty() {
        return None;
    }

    let sum: f64 = summary.iter().map(|row| row.total_hours).sum();
    Some(sum / summary.len() as f64)
}

/// 合计严格低于平均值的成员，保持汇总顺序
///
/// 空结果表示负载均衡，是正常终态而不是异常。
pub fn underloaded(summary: &[MemberEffort], average: f64) -> Vec<MemberEffort> {
    summary
        .iter()
        .filter(|row| row.total_hours < average)
        .cloned()
        .collect()
}

/// 各成员工时占总工时的百分比，保持汇总顺序
///
/// 总工时 <= 0 时占比无定义，返回空（`replace_all` 直写路径可能让
/// 列表里只剩零工时行，这个分支在实际数据下可达）。
pub fn percentage_shares(summary: &[MemberEffort], total: f64) -> Vec<MemberShare> {
    if total <= 0.0 {
        return Vec::new();
    }

    summary
        .iter()
        .map(|row| MemberShare {
            member: row.member.clone(),
            percent: row.total_hours / total * 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(member: &str, task_id: &str, hours: f64) -> Task {
        Task::new(member, task_id, hours)
    }

    #[test]
    fn test_total_effort_empty_is_zero() {
        assert_eq!(total_effort(&[]), 0.0);
    }

    #[test]
    fn test_total_effort_ignores_grouping() {
        let tasks = vec![
            task("Alice", "T1", 3.0),
            task("Bob", "T2", 5.0),
            task("Alice", "T3", 2.0),
        ];
        assert_eq!(total_effort(&tasks), 10.0);
    }

    #[test]
    fn test_summary_groups_and_sorts_descending() {
        let tasks = vec![
            task("Carol", "T1", 1.0),
            task("Dave", "T2", 9.0),
        ];
        let summary = per_member_summary(&tasks);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].member, "Dave");
        assert_eq!(summary[0].total_hours, 9.0);
        assert_eq!(summary[1].member, "Carol");
        assert_eq!(summary[1].total_hours, 1.0);
    }

    #[test]
    fn test_summary_is_sorted_for_adjacent_pairs() {
        let tasks = vec![
            task("A", "T1", 2.0),
            task("B", "T2", 7.0),
            task("C", "T3", 4.0),
            task("B", "T4", 1.0),
        ];
        let summary = per_member_summary(&tasks);

        for pair in summary.windows(2) {
            assert!(pair[0].total_hours >= pair[1].total_hours);
        }
    }

    #[test]
    fn test_summary_rows_sum_to_total_effort() {
        let tasks = vec![
            task("Alice", "T1", 3.25),
            task("Bob", "T2", 5.5),
            task("Alice", "T3", 2.75),
            task("Carol", "T4", 0.5),
        ];
        let summary = per_member_summary(&tasks);
        let sum: f64 = summary.iter().map(|r| r.total_hours).sum();

        assert_eq!(sum, total_effort(&tasks));
    }

    #[test]
    fn test_summary_tie_keeps_first_seen_order() {
        // Alice 先出现，与 Bob 同为 5.0 时排在前面
        let tasks = vec![
            task("Alice", "T1", 3.0),
            task("Bob", "T2", 5.0),
            task("Alice", "T3", 2.0),
        ];
        let summary = per_member_summary(&tasks);

        assert_eq!(summary[0].member, "Alice");
        assert_eq!(summary[0].total_hours, 5.0);
        assert_eq!(summary[1].member, "Bob");
        assert_eq!(summary[1].total_hours, 5.0);
    }

    #[test]
    fn test_summary_empty_input() {
        assert!(per_member_summary(&[]).is_empty());
    }

    #[test]
    fn test_average_effort_empty_is_none() {
        assert_eq!(average_effort(&[]), None);
    }

    #[test]
    fn test_underloaded_balanced_is_empty() {
        // 平均 5.0，无人严格低于
        let tasks = vec![
            task("Alice", "T1", 3.0),
            task("Bob", "T2", 5.0),
            task("Alice", "T3", 2.0),
        ];
        let summary = per_member_summary(&tasks);
        let average = average_effort(&summary).unwrap();

        assert_eq!(average, 5.0);
        assert!(underloaded(&summary, average).is_empty());
    }

    #[test]
    fn test_underloaded_returns_rows_below_average() {
        let tasks = vec![
            task("Carol", "T1", 1.0),
            task("Dave", "T2", 9.0),
        ];
        let summary = per_member_summary(&tasks);
        let average = average_effort(&summary).unwrap();

        assert_eq!(average, 5.0);
        let below = underloaded(&summary, average);
        assert_eq!(below.len(), 1);
        assert_eq!(below[0].member, "Carol");
        assert_eq!(below[0].total_hours, 1.0);
    }

    #[test]
    fn test_percentage_shares() {
        let tasks = vec![
            task("Carol", "T1", 1.0),
            task("Dave", "T2", 9.0),
        ];
        let summary = per_member_summary(&tasks);
        let shares = percentage_shares(&summary, total_effort(&tasks));

        assert_eq!(shares[0].member, "Dave");
        assert_eq!(shares[0].percent, 90.0);
        assert_eq!(shares[1].member, "Carol");
        assert_eq!(shares[1].percent, 10.0);
    }

    #[test]
    fn test_percentage_shares_zero_total_is_empty() {
        let summary = vec![MemberEffort {
            member: "Alice".to_string(),
            total_hours: 0.0,
        }];
        assert!(percentage_shares(&summary, 0.0).is_empty());
    }

    #[test]
    fn test_dashboard_compute_empty_is_none() {
        assert!(DashboardData::compute(&[]).is_none());
    }

    #[test]
    fn test_dashboard_compute_bundles_everything() {
        let tasks = vec![
            task("Carol", "T1", 1.0),
            task("Dave", "T2", 9.0),
        ];
        let data = DashboardData::compute(&tasks).unwrap();

        assert_eq!(data.total, 10.0);
        assert_eq!(data.average, 5.0);
        assert_eq!(data.summary[0].member, "Dave");
        assert_eq!(data.underloaded.len(), 1);
        assert_eq!(data.underloaded[0].member, "Carol");
        assert_eq!(data.shares.len(), 2);
    }

    #[test]
    fn test_dashboard_compute_zero_total_has_no_shares() {
        // replace_all 直写路径可能留下全零行
        let tasks = vec![task("Alice", "T1", 0.0)];
        let data = DashboardData::compute(&tasks).unwrap();

        assert_eq!(data.total, 0.0);
        assert!(data.shares.is_empty());
    }
}
