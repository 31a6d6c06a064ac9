//! Views Module
//!
//! Pure, stateless computations over an employee snapshot.
//!
//! Nothing here is cached; callers recompute whenever the snapshot or the
//! criteria change. Grouped outputs list keys in order of first occurrence
//! in the input, and only keys that occur at all.

mod aggregate;
mod filter;
mod summary;

pub use aggregate::{
    average_salary_by_department, compute_aggregates, count_by_department, count_by_status,
    Aggregates, DepartmentCount, DepartmentSalary, StatusCount,
};
pub use filter::{filter_employees, EmployeeFilter, Selector};
pub use summary::{
    recent_employees, summarize, top_positions, Dashboard, DashboardSummary, PositionCount,
};

/// Group `items` by `key`, keeping first-occurrence order of the keys
pub(crate) fn group_in_order<'a, T, K, V>(
    items: &'a [T],
    key: impl Fn(&'a T) -> K,
    init: impl Fn() -> V,
    mut fold: impl FnMut(&mut V, &'a T),
) -> Vec<(K, V)>
where
    K: PartialEq,
{
    let mut groups: Vec<(K, V)> = Vec::new();
    for item in items {
        let k = key(item);
        let slot = match groups.iter().position(|(existing, _)| *existing == k) {
            Some(i) => i,
            None => {
                groups.push((k, init()));
                groups.len() - 1
            }
        };
        fold(&mut groups[slot].1, item);
    }
    groups
}
