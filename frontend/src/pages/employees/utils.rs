use crate::api::EmployeeSummary;

/// Case-insensitive substring match on name, employee id and email. A blank
/// query keeps everything.
pub fn filter_employees(employees: &[EmployeeSummary], query: &str) -> Vec<EmployeeSummary> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|emp| {
            [&emp.full_name, &emp.employee_id, &emp.email]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

pub fn deactivate_prompt(employee: &EmployeeSummary) -> String {
    format!("Are you sure you want to deactivate {}?", employee.full_name)
}
