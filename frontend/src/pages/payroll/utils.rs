use crate::{
    api::{Deductions, PayrollAttendance, SalaryDetails},
    utils::format::currency,
};

fn row(label: &str, value: String) -> (String, String) {
    (label.to_string(), value)
}

pub fn earnings_rows(salary: &SalaryDetails) -> Vec<(String, String)> {
    vec![
        row("Monthly Wage", currency(salary.monthly_wage)),
        row("Basic Salary", currency(salary.basic_salary)),
        row("HRA", currency(salary.hra)),
        row("Standard Allowance", currency(salary.standard_allowance)),
        row("Performance Bonus", currency(salary.performance_bonus)),
        row("LTA", currency(salary.lta)),
        row("Fixed Allowance", currency(salary.fixed_allowance)),
        row("Gross Salary", currency(salary.gross_salary)),
    ]
}

pub fn deduction_rows(deductions: &Deductions) -> Vec<(String, String)> {
    vec![
        row("Professional Tax", currency(deductions.professional_tax)),
        row("PF (Employee)", currency(deductions.pf_employee)),
        row("Total Deductions", currency(deductions.total_deductions)),
    ]
}

pub fn attendance_rows(attendance: &PayrollAttendance) -> Vec<(String, String)> {
    vec![
        row("Present Days", attendance.present_days.to_string()),
        row("Leave Days", attendance.leave_days.to_string()),
        row("Absent Days", attendance.absent_days.to_string()),
        row("Working Days", attendance.working_days.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earnings_are_formatted_as_currency() {
        let salary = SalaryDetails {
            monthly_wage: Some(50000.0),
            basic_salary: Some(25000.0),
            gross_salary: Some(50000.0),
            ..SalaryDetails::default()
        };
        let rows = earnings_rows(&salary);
        assert_eq!(rows[0], ("Monthly Wage".to_string(), "₹ 50,000.00".to_string()));
        assert_eq!(rows[2], ("HRA".to_string(), "-".to_string()));
        assert_eq!(rows.len(), 8);
    }

    #[test]
    fn deductions_end_with_total() {
        let rows = deduction_rows(&Deductions {
            pf_employee: Some(3000.0),
            professional_tax: Some(200.0),
            total_deductions: Some(3200.0),
        });
        assert_eq!(rows.last().map(|r| r.1.as_str()), Some("₹ 3,200.00"));
    }
}
