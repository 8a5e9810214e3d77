//! Tool handlers for the HR server.
//!
//! Unlike the engineering server, person references in these reports
//! resolve employee ids to display names, with "Unknown" for ids that
//! match nothing.

use serde_json::json;
use serde_json::{Map, Value};

use super::data::{Employee, HrData, PerformanceReview, TimeOffRequest};
use crate::error::{QueryError, QueryResult};
use crate::query::aggregate::mean;
use crate::query::report::money;
use crate::query::{opt_bool, opt_str, req_str, FilterPipeline, Report};
use crate::records::{CodeReview, Deployment, Incident, Project, Repository};
use crate::registry::Registry;

pub fn register(registry: Registry<HrData>) -> Registry<HrData> {
    registry
        .tool(
            "search_employees",
            "Search employees by various criteria (name, department, position, status)",
            json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "Search query (employee name, email, or ID)"},
                    "department": {"type": "string", "description": "Filter by department"},
                    "position": {"type": "string", "description": "Filter by position"},
                    "status": {"type": "string", "enum": ["active", "inactive", "on_leave"], "description": "Filter by employment status"}
                }
            }),
            search_employees,
        )
        .tool(
            "get_employee_details",
            "Get detailed information about a specific employee",
            json!({
                "type": "object",
                "properties": {
                    "employeeId": {"type": "string", "description": "Employee ID"}
                },
                "required": ["employeeId"]
            }),
            get_employee_details,
        )
        .tool(
            "get_salary_analysis",
            "Analyze salary data across different dimensions",
            json!({
                "type": "object",
                "properties": {
                    "groupBy": {"type": "string", "enum": ["department", "position", "location"], "description": "Group salary analysis by dimension", "default": "department"}
                }
            }),
            get_salary_analysis,
        )
        .tool(
            "get_time_off_summary",
            "Get time off requests and vacation balance summary",
            json!({
                "type": "object",
                "properties": {
                    "employeeId": {"type": "string", "description": "Filter by specific employee ID"},
                    "status": {"type": "string", "enum": ["pending", "approved", "denied"], "description": "Filter by request status"},
                    "type": {"type": "string", "enum": ["vacation", "sick", "personal", "maternity", "paternity"], "description": "Filter by time off type"}
                }
            }),
            get_time_off_summary,
        )
        .tool(
            "get_performance_reviews",
            "Get performance review data and ratings",
            json!({
                "type": "object",
                "properties": {
                    "employeeId": {"type": "string", "description": "Filter by specific employee ID"},
                    "period": {"type": "string", "description": "Filter by review period (e.g., '2024-Q2')"},
                    "status": {"type": "string", "enum": ["scheduled", "completed", "overdue"], "description": "Filter by review status"}
                }
            }),
            get_performance_reviews,
        )
        .tool(
            "search_engineers",
            "Search engineering team members by skills, level, projects, or oncall status",
            json!({
                "type": "object",
                "properties": {
                    "skill": {"type": "string", "description": "Filter by specific skill or technology"},
                    "level": {"type": "string", "description": "Filter by engineering level (L3-L10)"},
                    "role": {"type": "string", "enum": ["SWE", "SRE", "Data", "ML", "Security", "Manager", "Director", "VP"], "description": "Filter by engineering role"},
                    "isOncall": {"type": "boolean", "description": "Filter by oncall status"}
                }
            }),
            search_engineers,
        )
        .tool(
            "get_project_status",
            "Get status of engineering projects including progress and blockers",
            json!({
                "type": "object",
                "properties": {
                    "status": {"type": "string", "enum": ["Active", "Planning", "Blocked", "Completed"], "description": "Filter by project status"},
                    "priority": {"type": "string", "enum": ["P0", "P1", "P2", "P3"], "description": "Filter by priority level"},
                    "owner": {"type": "string", "description": "Filter by project owner ID"}
                }
            }),
            get_project_status,
        )
        .tool(
            "repository_metrics",
            "Get repository health metrics including security, test coverage, and tech debt",
            json!({
                "type": "object",
                "properties": {
                    "team": {"type": "string", "description": "Filter by team name"},
                    "language": {"type": "string", "description": "Filter by programming language"},
                    "showVulnerabilities": {"type": "boolean", "description": "Include security vulnerability details", "default": false}
                }
            }),
            repository_metrics,
        )
        .tool(
            "deployment_dashboard",
            "Get deployment frequency and success rates across services",
            json!({
                "type": "object",
                "properties": {
                    "environment": {"type": "string", "enum": ["production", "staging", "development"], "description": "Filter by deployment environment"},
                    "repository": {"type": "string", "description": "Filter by specific repository"},
                    "days": {"type": "number", "description": "Look back period in days", "default": 30}
                }
            }),
            deployment_dashboard,
        )
        .tool(
            "incident_analysis",
            "Analyze incidents, MTTR, and service reliability metrics",
            json!({
                "type": "object",
                "properties": {
                    "severity": {"type": "string", "enum": ["SEV1", "SEV2", "SEV3", "SEV4"], "description": "Filter by incident severity"},
                    "service": {"type": "string", "description": "Filter by affected service"},
                    "status": {"type": "string", "enum": ["Open", "Investigating", "Resolved"], "description": "Filter by incident status"}
                }
            }),
            incident_analysis,
        )
        .tool(
            "code_review_metrics",
            "Get code review velocity and quality metrics",
            json!({
                "type": "object",
                "properties": {
                    "repository": {"type": "string", "description": "Filter by repository name"},
                    "author": {"type": "string", "description": "Filter by PR author"},
                    "status": {"type": "string", "enum": ["Open", "Merged", "Closed"], "description": "Filter by review status"}
                }
            }),
            code_review_metrics,
        )
}

/// Uppercase the first letter: "vacation" → "Vacation".
fn titlecase(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn search_employees(data: &HrData, args: &Map<String, Value>) -> QueryResult<String> {
    let hits = FilterPipeline::new(args)
        .substring("query", |e: &Employee| {
            vec![e.first_name, e.last_name, e.email, e.id]
        })
        .exact("department", |e| e.department)
        .exact("position", |e| e.position)
        .exact("status", |e| e.status)
        .apply(&data.employees)?;

    let listing = hits
        .iter()
        .map(|e| {
            format!(
                "• {} - {} ({}) - {}",
                e.full_name(),
                e.position,
                e.department,
                money(e.salary)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!("Found {} employees:\n\n{listing}", hits.len()))
}

fn get_employee_details(data: &HrData, args: &Map<String, Value>) -> QueryResult<String> {
    let employee_id = req_str(args, "employeeId")?;
    let e = data
        .employees
        .iter()
        .find(|e| e.id == employee_id)
        .ok_or_else(|| QueryError::not_found("Employee", employee_id))?;

    let mut out = Report::new();
    out.title(format!("Employee Details: {}", e.full_name()));
    out.metric("Employee ID", e.id);
    out.metric("Email", e.email);
    out.metric("Department", e.department);
    out.metric("Position", e.position);
    out.metric("Salary", money(e.salary));
    out.metric("Hire Date", e.hire_date);
    out.metric("Status", e.status);
    out.metric("Location", e.location);
    out.metric("Manager", e.manager.unwrap_or("None"));

    if e.is_engineer() {
        out.blank().heading("Engineering Details");
        out.metric("Level", e.engineering_level.unwrap_or("Unknown"));
        out.metric("Role", e.role.unwrap_or("Unknown"));
        out.metric("Skills", e.skills.join(", "));
        out.metric("Current Projects", e.current_projects.join(", "));
        out.metric("On-call", if e.is_oncall { "Yes" } else { "No" });
    }
    Ok(out.finish())
}

fn get_salary_analysis(data: &HrData, args: &Map<String, Value>) -> QueryResult<String> {
    let group_by = opt_str(args, "groupBy")?.unwrap_or("department");
    let key = |e: &Employee| match group_by {
        "position" => e.position,
        "location" => e.location,
        _ => e.department,
    };
    let label = match group_by {
        "position" => "Position",
        "location" => "Location",
        _ => "Department",
    };

    // Group in first-seen order, then rank by average salary.
    let mut groups: Vec<(&str, Vec<&Employee>)> = Vec::new();
    for e in &data.employees {
        match groups.iter_mut().find(|(k, _)| *k == key(e)) {
            Some((_, members)) => members.push(e),
            None => groups.push((key(e), vec![e])),
        }
    }

    struct Row<'a> {
        group: &'a str,
        count: usize,
        average: u64,
        min: u64,
        max: u64,
        total: u64,
    }

    let mut rows: Vec<Row> = groups
        .iter()
        .map(|(group, members)| {
            let salaries: Vec<u64> = members.iter().map(|e| e.salary).collect();
            Row {
                group,
                count: members.len(),
                average: mean(salaries.iter().map(|&s| s as f64)).round() as u64,
                min: salaries.iter().copied().min().unwrap_or(0),
                max: salaries.iter().copied().max().unwrap_or(0),
                total: salaries.iter().sum(),
            }
        })
        .collect();
    rows.sort_by(|a, b| b.average.cmp(&a.average));

    let mut out = Report::new();
    out.title(format!("Salary Analysis by {label}"));
    for row in &rows {
        out.heading(row.group);
        out.metric("Employees", row.count);
        out.metric("Average Salary", money(row.average));
        out.metric(
            "Salary Range",
            format!("{} - {}", money(row.min), money(row.max)),
        );
        out.metric("Total Payroll", money(row.total));
        out.blank();
    }

    let total_payroll: u64 = data.employees.iter().map(|e| e.salary).sum();
    let company_avg = mean(data.employees.iter().map(|e| e.salary as f64)).round() as u64;
    out.heading("Overall Statistics");
    out.metric("Total Employees", data.employees.len());
    out.metric("Company Average", money(company_avg));
    out.metric("Total Company Payroll", money(total_payroll));
    Ok(out.finish())
}

fn get_time_off_summary(data: &HrData, args: &Map<String, Value>) -> QueryResult<String> {
    let hits = FilterPipeline::new(args)
        .exact("employeeId", |r: &TimeOffRequest| r.employee_id)
        .exact("status", |r| r.status)
        .exact("type", |r| r.kind)
        .apply(&data.time_off_requests)?;

    let mut out = Report::new();
    out.title("Time Off Summary");
    out.heading(format!("Requests ({} total)", hits.len()));
    for r in &hits {
        out.metric(
            &titlecase(r.kind),
            format!(
                "{} to {} ({} days) - {}",
                r.start_date, r.end_date, r.days, r.status
            ),
        );
    }

    // Per-type totals, first-seen order.
    let mut totals: Vec<(&str, usize, u32)> = Vec::new();
    for r in &hits {
        match totals.iter_mut().find(|(kind, _, _)| *kind == r.kind) {
            Some((_, count, days)) => {
                *count += 1;
                *days += r.days;
            }
            None => totals.push((r.kind, 1, r.days)),
        }
    }

    out.blank().heading("Summary by Type");
    for (kind, count, days) in totals {
        out.metric(
            &titlecase(kind),
            format!("{count} requests, {days} total days"),
        );
    }
    Ok(out.finish())
}

fn get_performance_reviews(data: &HrData, args: &Map<String, Value>) -> QueryResult<String> {
    let hits = FilterPipeline::new(args)
        .exact("employeeId", |r: &PerformanceReview| r.employee_id)
        .exact("period", |r| r.period)
        .exact("status", |r| r.status)
        .apply(&data.performance_reviews)?;

    let mut out = Report::new();
    out.title(format!("Performance Reviews ({} total)", hits.len()));
    for r in &hits {
        out.heading(format!(
            "{} - {}",
            data.employee_name(r.employee_id),
            r.period
        ));
        out.metric("Overall Rating", format!("{:.1}/5.0", r.overall_rating));
        out.metric("Status", r.status);
        out.metric("Goals", r.goals.join(", "));
        out.metric("Feedback", r.feedback);
        out.metric("Next Review", r.next_review_date);
        out.blank();
    }

    if !hits.is_empty() {
        let avg = mean(hits.iter().map(|r| r.overall_rating));
        out.heading("Summary");
        out.metric("Average Rating", format!("{avg:.1}/5.0"));
    }
    Ok(out.finish())
}

fn search_engineers(data: &HrData, args: &Map<String, Value>) -> QueryResult<String> {
    let engineers: Vec<Employee> = data
        .employees
        .iter()
        .filter(|e| e.is_engineer())
        .cloned()
        .collect();

    let hits = FilterPipeline::new(args)
        .substring("skill", |e: &Employee| e.skills.to_vec())
        .exact_opt("level", |e| e.engineering_level)
        .exact_opt("role", |e| e.role)
        .flag("isOncall", |e| e.is_oncall)
        .apply(&engineers)?;

    let listing = hits
        .iter()
        .map(|e| {
            format!(
                "• {} - {} {} - {}",
                e.full_name(),
                e.engineering_level.unwrap_or("Unknown"),
                e.role.unwrap_or("Unknown"),
                e.skills.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!("Found {} engineers:\n\n{listing}", hits.len()))
}

fn get_project_status(data: &HrData, args: &Map<String, Value>) -> QueryResult<String> {
    let hits = FilterPipeline::new(args)
        .exact("status", |p: &Project| p.status)
        .exact("priority", |p| p.priority)
        .exact("owner", |p| p.owner)
        .apply(&data.projects)?;

    let mut out = Report::new();
    out.title(format!("Project Status ({} projects)", hits.len()));
    for p in &hits {
        out.heading(format!("{} ({})", p.name, p.priority));
        out.metric("Status", p.status);
        out.metric("Progress", format!("{}%", p.progress));
        out.metric("Owner", data.employee_name(p.owner));
        out.metric("Team", p.team);
        out.metric("Target Date", p.target_date);
        out.metric("Budget", money(p.budget));
        if !p.risks.is_empty() {
            out.metric("Risks", p.risks.join(", "));
        }
        out.metric("Description", p.description);
        out.blank();
    }
    Ok(out.finish())
}

fn repository_metrics(data: &HrData, args: &Map<String, Value>) -> QueryResult<String> {
    let show_vulns = opt_bool(args, "showVulnerabilities")?.unwrap_or(false);
    let hits = FilterPipeline::new(args)
        .exact("team", |r: &Repository| r.team)
        .exact("language", |r| r.language)
        .apply(&data.repositories)?;

    let mut out = Report::new();
    out.title(format!("Repository Metrics ({} repositories)", hits.len()));
    for r in &hits {
        out.heading(format!("{} ({})", r.name, r.language));
        out.metric("Team", r.team);
        out.metric(
            "Lines of Code",
            crate::query::report::thousands(r.lines_of_code),
        );
        out.metric("Contributors", r.contributors);
        out.metric("Test Coverage", format!("{}%", r.test_coverage));
        out.metric("Tech Debt Score", format!("{}/10", r.tech_debt_score));
        out.metric("Deployment Frequency", format!("{}/week", r.deployment_freq));
        out.metric("Uptime", format!("{}%", r.uptime));
        if show_vulns {
            let v = &r.security_vulns;
            out.metric(
                "Security Vulnerabilities",
                format!(
                    "{} critical, {} high, {} medium, {} low",
                    v.critical, v.high, v.medium, v.low
                ),
            );
        }
        out.blank();
    }
    Ok(out.finish())
}

fn deployment_dashboard(data: &HrData, args: &Map<String, Value>) -> QueryResult<String> {
    let hits = FilterPipeline::new(args)
        .exact("environment", |d: &Deployment| d.environment)
        .exact("repository", |d| d.repository)
        .apply(&data.deployments)?;

    let successful = hits.iter().filter(|d| d.status == "success").count();
    let success_rate = crate::query::aggregate::percentage(successful, hits.len());
    let avg_duration = mean(hits.iter().map(|d| f64::from(d.duration)));

    let mut out = Report::new();
    out.title(format!("Deployment Dashboard ({} deployments)", hits.len()));
    out.heading("Overall Metrics");
    out.metric("Success Rate", format!("{success_rate:.1}%"));
    out.metric("Average Duration", format!("{avg_duration:.1} minutes"));
    out.metric("Total Deployments", hits.len());
    out.blank().heading("Recent Deployments");
    for d in &hits {
        out.line(format!(
            "• {} {} to {}",
            d.repository, d.version, d.environment
        ));
        out.line(format!(
            "  Status: {} | Duration: {}min | Deployer: {}",
            d.status,
            d.duration,
            data.employee_name(d.deployer)
        ));
        out.field_if("Rollback Reason", d.rollback_reason);
        out.blank();
    }
    Ok(out.finish())
}

fn incident_analysis(data: &HrData, args: &Map<String, Value>) -> QueryResult<String> {
    let hits = FilterPipeline::new(args)
        .exact("severity", |i: &Incident| i.severity)
        .exact("service", |i| i.service)
        .exact("status", |i| i.status)
        .apply(&data.incidents)?;

    let resolved: Vec<_> = hits.iter().filter(|i| i.status == "Resolved").collect();
    let avg_mttr = mean(resolved.iter().map(|i| f64::from(i.mttr)));

    let mut out = Report::new();
    out.title(format!("Incident Analysis ({} incidents)", hits.len()));
    out.heading("Summary");
    out.metric("Total Incidents", hits.len());
    out.metric("Resolved", resolved.len());
    out.metric("Average MTTR", format!("{avg_mttr:.0} minutes"));
    out.blank().heading("Incident Details");
    for i in &hits {
        out.heading(format!("{} ({})", i.title, i.severity));
        out.metric("Service", i.service);
        out.metric("Status", i.status);
        out.metric("Assignee", data.employee_name(i.assignee));
        out.metric("Impact", i.impact);
        if let Some(root_cause) = i.root_cause {
            out.metric("Root Cause", root_cause);
        }
        if i.status == "Resolved" {
            out.metric("MTTR", format!("{} minutes", i.mttr));
        }
        out.blank();
    }
    Ok(out.finish())
}

fn code_review_metrics(data: &HrData, args: &Map<String, Value>) -> QueryResult<String> {
    let hits = FilterPipeline::new(args)
        .exact("repository", |cr: &CodeReview| cr.repository)
        .exact("author", |cr| cr.author)
        .exact("status", |cr| cr.status)
        .apply(&data.code_reviews)?;

    let merged: Vec<_> = hits.iter().filter(|cr| cr.status == "Merged").collect();
    let avg_review_time = mean(merged.iter().map(|cr| cr.review_time));
    let avg_lines = mean(hits.iter().map(|cr| f64::from(cr.lines_changed)));

    let mut out = Report::new();
    out.title(format!("Code Review Metrics ({} reviews)", hits.len()));
    out.heading("Summary");
    out.metric("Total Reviews", hits.len());
    out.metric("Merged", merged.len());
    out.metric("Average Review Time", format!("{avg_review_time:.1} hours"));
    out.metric("Average Lines Changed", format!("{avg_lines:.0}"));
    out.blank().heading("Review Details");
    for cr in &hits {
        out.heading(cr.title);
        out.metric("Repository", cr.repository);
        out.metric("Author", data.employee_name(cr.author));
        out.metric("Status", cr.status);
        out.metric("Lines Changed", cr.lines_changed);
        if cr.status == "Merged" {
            out.metric("Review Time", format!("{} hours", cr.review_time));
        }
        out.blank();
    }
    Ok(out.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hr::data::seed;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn employee_search_lists_compact_rows() {
        let data = seed();
        let text = search_employees(&data, &args(json!({}))).unwrap();
        assert!(text.starts_with("Found 10 employees:\n\n"));
        assert!(text.contains("• John Smith - Senior Software Engineer (Engineering) - $140,000"));
    }

    #[test]
    fn employee_search_matches_ids_too() {
        let data = seed();
        let text = search_employees(&data, &args(json!({"query": "emp_006"}))).unwrap();
        assert!(text.starts_with("Found 1 employees:"));
        assert!(text.contains("Lisa Garcia"));
    }

    #[test]
    fn employee_details_require_an_id() {
        let data = seed();
        let err = get_employee_details(&data, &args(json!({}))).unwrap_err();
        assert!(err.to_string().contains("employeeId"));
    }

    #[test]
    fn missing_employee_is_a_lookup_failure() {
        let data = seed();
        let err =
            get_employee_details(&data, &args(json!({"employeeId": "emp_999"}))).unwrap_err();
        assert_eq!(err.to_string(), "Employee not found: emp_999");
    }

    #[test]
    fn engineer_details_include_the_engineering_block() {
        let data = seed();
        let text =
            get_employee_details(&data, &args(json!({"employeeId": "emp_006"}))).unwrap();
        assert!(text.starts_with("**Employee Details: Lisa Garcia**"));
        assert!(text.contains("**Engineering Details:**"));
        assert!(text.contains("• On-call: Yes\n"));
        assert!(text.contains("• Current Projects: proj_001, proj_004\n"));
    }

    #[test]
    fn non_engineer_details_omit_the_engineering_block() {
        let data = seed();
        let text =
            get_employee_details(&data, &args(json!({"employeeId": "emp_003"}))).unwrap();
        assert!(!text.contains("Engineering Details"));
    }

    #[test]
    fn salary_analysis_ranks_groups_by_average() {
        let data = seed();
        let text = get_salary_analysis(&data, &args(json!({}))).unwrap();
        assert!(text.starts_with("**Salary Analysis by Department**"));
        let executive = text.find("**Executive:**").unwrap();
        let engineering = text.find("**Engineering:**").unwrap();
        let sales = text.find("**Sales:**").unwrap();
        assert!(executive < engineering && engineering < sales);
        assert!(text.contains("• Company Average: $134,500\n"));
        assert!(text.contains("• Total Company Payroll: $1,345,000\n"));
        assert!(text.contains("• Salary Range: $125,000 - $180,000\n"));
    }

    #[test]
    fn salary_analysis_groups_by_location_on_request() {
        let data = seed();
        let text =
            get_salary_analysis(&data, &args(json!({"groupBy": "location"}))).unwrap();
        assert!(text.starts_with("**Salary Analysis by Location**"));
        assert!(text.contains("**San Francisco:**"));
    }

    #[test]
    fn time_off_summary_totals_by_type() {
        let data = seed();
        let text = get_time_off_summary(&data, &args(json!({}))).unwrap();
        assert!(text.contains("**Requests (3 total):**"));
        assert!(text.contains("• Vacation: 2024-07-15 to 2024-07-19 (5 days) - approved\n"));
        assert!(text.contains("• Sick: 1 requests, 2 total days\n"));
    }

    #[test]
    fn performance_reviews_average_the_filtered_set() {
        let data = seed();
        let text = get_performance_reviews(&data, &args(json!({}))).unwrap();
        assert!(text.starts_with("**Performance Reviews (3 total)**"));
        assert!(text.contains("**John Smith - 2024-Q2:**"));
        assert!(text.contains("• Average Rating: 4.1/5.0\n"));
    }

    #[test]
    fn empty_review_set_has_no_summary() {
        let data = seed();
        let text =
            get_performance_reviews(&data, &args(json!({"period": "2023-Q1"}))).unwrap();
        assert!(text.starts_with("**Performance Reviews (0 total)**"));
        assert!(!text.contains("Average Rating"));
    }

    #[test]
    fn engineer_search_excludes_non_engineers() {
        let data = seed();
        let text = search_engineers(&data, &args(json!({}))).unwrap();
        assert!(text.starts_with("Found 5 engineers:\n\n"));
        assert!(!text.contains("Emily Johnson"));
    }

    #[test]
    fn oncall_flag_filters_booleans() {
        let data = seed();
        let text = search_engineers(&data, &args(json!({"isOncall": true}))).unwrap();
        assert!(text.starts_with("Found 1 engineers:"));
        assert!(text.contains("Lisa Garcia - L5 SRE"));
    }

    #[test]
    fn project_owners_resolve_to_names() {
        let data = seed();
        let text = get_project_status(&data, &args(json!({"status": "Active"}))).unwrap();
        assert!(text.starts_with("**Project Status (2 projects)**"));
        assert!(text.contains("• Owner: John Smith\n"));
        assert!(text.contains("• Budget: $750,000\n"));
    }

    #[test]
    fn vulnerabilities_render_only_on_request() {
        let data = seed();
        let plain = repository_metrics(&data, &args(json!({}))).unwrap();
        assert!(!plain.contains("Security Vulnerabilities"));

        let detailed = repository_metrics(
            &data,
            &args(json!({"team": "Marketing", "showVulnerabilities": true})),
        )
        .unwrap();
        assert!(detailed
            .contains("• Security Vulnerabilities: 1 critical, 3 high, 12 medium, 20 low\n"));
    }

    #[test]
    fn deployment_dashboard_resolves_deployer_names() {
        let data = seed();
        let text = deployment_dashboard(&data, &args(json!({}))).unwrap();
        assert!(text.contains("• Success Rate: 66.7%\n"));
        assert!(text.contains("Deployer: Sarah Davis\n"));
        assert!(text.contains("  Rollback Reason: Database migration issues\n"));
    }

    #[test]
    fn incident_mttr_averages_resolved_only() {
        let data = seed();
        let text = incident_analysis(&data, &args(json!({}))).unwrap();
        assert!(text.contains("• Average MTTR: 135 minutes\n"));
        assert!(text.contains("• Assignee: Emily Johnson\n"));
        // Open incidents never print an MTTR line.
        assert!(!text.contains("• MTTR: 0 minutes\n"));
    }

    #[test]
    fn review_metrics_average_merged_reviews() {
        let data = seed();
        let text = code_review_metrics(&data, &args(json!({}))).unwrap();
        assert!(text.contains("• Average Review Time: 6.5 hours\n"));
        // 278.5 rounds to even under {:.0}, matching the report's formatter.
        assert!(text.contains("• Average Lines Changed: 278\n"));
        assert!(text.contains("• Author: Emily Johnson\n"));
    }
}
