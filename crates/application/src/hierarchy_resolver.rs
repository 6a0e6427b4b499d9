use std::collections::HashSet;
use std::sync::Arc;

use roster_core::{AppError, AppResult};
use roster_domain::{DirectReport, Employee, EmployeeId};
use tracing::debug;

use crate::EmployeeRepository;

/// Materializes an employee's full reporting tree from stored stub references.
#[derive(Clone)]
pub struct HierarchyResolver {
    repository: Arc<dyn EmployeeRepository>,
}

/// A fetched record plus the arena positions of its manager and direct reports.
struct ExpandedNode {
    employee: Employee,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl HierarchyResolver {
    /// Creates a resolver over an employee repository.
    #[must_use]
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Returns the employee with every descendant resolved down to the leaves.
    ///
    /// Expansion is breadth-first with one lookup per node. Reaching one of
    /// the current manager's own ancestors fails with [`AppError::CyclicGraph`].
    /// Reaching an identifier a second time through a different manager, or
    /// a reference to a missing record, fails with
    /// [`AppError::InconsistentGraph`]. Either way no partial tree is returned.
    pub async fn resolve(&self, root_id: EmployeeId) -> AppResult<Employee> {
        let root = self
            .repository
            .find_by_id(root_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("employee '{root_id}' does not exist")))?;

        if root.has_no_direct_reports() {
            return Ok(root);
        }

        let nodes = self.expand(root).await?;
        debug!(employee_id = %root_id, nodes = nodes.len(), "expanded reporting hierarchy");

        assemble(nodes)
    }

    /// Fetches every descendant in breadth-first order. The arena doubles as
    /// the queue: `cursor` is the next record whose reports get fetched.
    async fn expand(&self, root: Employee) -> AppResult<Vec<ExpandedNode>> {
        let root_id = root.id();
        let mut visited = HashSet::from([root_id]);
        let mut nodes = vec![ExpandedNode {
            employee: root,
            parent: None,
            children: Vec::new(),
        }];

        let mut cursor = 0;
        while cursor < nodes.len() {
            let manager_id = nodes[cursor].employee.id();
            let report_ids = nodes[cursor].employee.direct_report_ids();
            let mut children = Vec::with_capacity(report_ids.len());

            for report_id in report_ids {
                if !visited.insert(report_id) {
                    if is_ancestor(&nodes, cursor, report_id) {
                        return Err(AppError::CyclicGraph(format!(
                            "employee '{report_id}' is its own indirect report below '{root_id}' \
                             (via manager '{manager_id}')"
                        )));
                    }

                    return Err(AppError::InconsistentGraph(format!(
                        "employee '{report_id}' reports to more than one manager below \
                         '{root_id}' (again via manager '{manager_id}')"
                    )));
                }

                let report = self.repository.find_by_id(report_id).await?.ok_or_else(|| {
                    AppError::InconsistentGraph(format!(
                        "manager '{manager_id}' lists direct report '{report_id}' which does not exist"
                    ))
                })?;

                children.push(nodes.len());
                nodes.push(ExpandedNode {
                    employee: report,
                    parent: Some(cursor),
                    children: Vec::new(),
                });
            }

            nodes[cursor].children = children;
            cursor += 1;
        }

        Ok(nodes)
    }
}

/// Returns whether `employee_id` sits on the manager chain from `position` up
/// to the root, `position` itself included.
fn is_ancestor(nodes: &[ExpandedNode], position: usize, employee_id: EmployeeId) -> bool {
    let mut current = Some(position);
    while let Some(index) = current {
        let Some(node) = nodes.get(index) else {
            return false;
        };
        if node.employee.id() == employee_id {
            return true;
        }
        current = node.parent;
    }

    false
}

/// Builds the tree bottom-up. Children always sit later in the arena than
/// their manager, so walking it in reverse finds them already assembled.
fn assemble(mut nodes: Vec<ExpandedNode>) -> AppResult<Employee> {
    let mut assembled: Vec<Option<Employee>> = Vec::new();
    assembled.resize_with(nodes.len(), || None);

    while let Some(ExpandedNode {
        mut employee,
        children,
        ..
    }) = nodes.pop()
    {
        let index = nodes.len();
        let mut reports = Vec::with_capacity(children.len());
        for child in children {
            let report = assembled
                .get_mut(child)
                .and_then(Option::take)
                .ok_or_else(|| {
                    AppError::Internal(format!(
                        "hierarchy assembly lost direct report at position {child}"
                    ))
                })?;
            reports.push(DirectReport::Resolved(Box::new(report)));
        }

        employee.set_direct_reports(reports);
        assembled[index] = Some(employee);
    }

    assembled
        .into_iter()
        .next()
        .flatten()
        .ok_or_else(|| AppError::Internal("hierarchy assembly produced no root".to_owned()))
}
