//! Resource snapshots for the HR server.

use serde_json::{json, Map, Value};

use super::data::HrData;
use crate::query::aggregate::mean;
use crate::registry::Registry;

pub fn register(registry: Registry<HrData>) -> Registry<HrData> {
    registry
        .resource(
            "hrm://company-overview",
            "Company Overview",
            "High-level company metrics and statistics",
            company_overview,
        )
        .resource(
            "hrm://org-chart",
            "Organization Chart",
            "Company organizational structure",
            org_chart,
        )
        .resource(
            "hrm://payroll-summary",
            "Payroll Summary",
            "Current payroll statistics and trends",
            payroll_summary,
        )
        .resource(
            "engineering://team-structure",
            "Engineering Team Structure",
            "Engineering organization and team breakdown",
            team_structure,
        )
        .resource(
            "engineering://tech-stack",
            "Technology Stack",
            "Technologies and tools used across engineering",
            tech_stack,
        )
}

fn company_overview(data: &HrData) -> Value {
    let active = data
        .employees
        .iter()
        .filter(|e| e.status == "active")
        .count();
    let total_payroll: u64 = data.employees.iter().map(|e| e.salary).sum();
    let average_salary = mean(data.employees.iter().map(|e| e.salary as f64));

    let mut departments: Map<String, Value> = Map::new();
    for e in &data.employees {
        let count = departments
            .entry(e.department.to_string())
            .or_insert(json!(0));
        *count = json!(count.as_u64().unwrap_or(0) + 1);
    }

    json!({
        "totalEmployees": data.employees.len(),
        "activeEmployees": active,
        "departmentBreakdown": departments,
        "averageSalary": average_salary,
        "totalPayroll": total_payroll,
    })
}

fn org_chart(data: &HrData) -> Value {
    let mut departments: Map<String, Value> = Map::new();
    for e in &data.employees {
        let members = departments
            .entry(e.department.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(members) = members {
            members.push(json!({
                "id": e.id,
                "name": e.full_name(),
                "position": e.position,
                "manager": e.manager,
            }));
        }
    }
    Value::Object(departments)
}

fn payroll_summary(data: &HrData) -> Value {
    let total_payroll: u64 = data.employees.iter().map(|e| e.salary).sum();
    let average_salary = mean(data.employees.iter().map(|e| e.salary as f64));

    let mut by_department: Map<String, Value> = Map::new();
    for e in &data.employees {
        let entry = by_department
            .entry(e.department.to_string())
            .or_insert_with(|| json!({"employees": 0, "totalSalary": 0}));
        entry["employees"] = json!(entry["employees"].as_u64().unwrap_or(0) + 1);
        entry["totalSalary"] = json!(entry["totalSalary"].as_u64().unwrap_or(0) + e.salary);
    }

    json!({
        "totalEmployees": data.employees.len(),
        "totalAnnualPayroll": total_payroll,
        "averageSalary": average_salary,
        "salaryByDepartment": by_department,
    })
}

fn team_structure(data: &HrData) -> Value {
    let engineers: Vec<_> = data.employees.iter().filter(|e| e.is_engineer()).collect();

    let mut levels: Map<String, Value> = Map::new();
    let mut roles: Map<String, Value> = Map::new();
    for e in &engineers {
        let level = levels
            .entry(e.engineering_level.unwrap_or("Unknown").to_string())
            .or_insert(json!(0));
        *level = json!(level.as_u64().unwrap_or(0) + 1);
        let role = roles
            .entry(e.role.unwrap_or("Unknown").to_string())
            .or_insert(json!(0));
        *role = json!(role.as_u64().unwrap_or(0) + 1);
    }

    json!({
        "totalEngineers": engineers.len(),
        "levelBreakdown": levels,
        "roleBreakdown": roles,
        "oncallEngineers": engineers.iter().filter(|e| e.is_oncall).count(),
    })
}

fn tech_stack(data: &HrData) -> Value {
    let mut skills: Map<String, Value> = Map::new();
    for e in &data.employees {
        for skill in e.skills {
            let count = skills.entry((*skill).to_string()).or_insert(json!(0));
            *count = json!(count.as_u64().unwrap_or(0) + 1);
        }
    }

    let mut languages: Vec<&str> = Vec::new();
    for r in &data.repositories {
        if !languages.contains(&r.language) {
            languages.push(r.language);
        }
    }

    json!({
        "totalSkills": skills.len(),
        "skillFrequency": skills,
        "repositories": data.repositories.len(),
        "languages": languages,
    })
}
