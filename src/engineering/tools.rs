//! Tool handlers for the engineering server.
//!
//! Each handler is the same composition: build a filter from the
//! arguments, run it, aggregate, render. Sorting happens after the
//! filter and is always a stable descending sort, so ties keep dataset
//! order.

use serde_json::json;
use serde_json::{Map, Value};

use super::data::{Engineer, EngineeringData, OncallRotation};
use crate::error::QueryResult;
use crate::query::aggregate::{breakdown, mean, percentage};
use crate::query::report::money;
use crate::query::{opt_str, FilterPipeline, Report};
use crate::records::{CodeReview, Deployment, Incident, Project, Repository};
use crate::registry::Registry;

pub fn register(registry: Registry<EngineeringData>) -> Registry<EngineeringData> {
    registry
        .tool(
            "search_engineers",
            "Search engineers by name, team, role, level, or skills",
            json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "Search query (name or email)"},
                    "team": {"type": "string", "description": "Filter by team"},
                    "role": {"type": "string", "description": "Filter by role (SWE, SRE, Manager, etc.)"},
                    "level": {"type": "string", "description": "Filter by level (L3-L10)"},
                    "location": {"type": "string", "description": "Filter by location"},
                    "skill": {"type": "string", "description": "Filter by skill"}
                }
            }),
            search_engineers,
        )
        .tool(
            "get_project_status",
            "Get status of projects with filtering options",
            json!({
                "type": "object",
                "properties": {
                    "status": {"type": "string", "enum": ["Planning", "Active", "Blocked", "Completed", "Cancelled"]},
                    "priority": {"type": "string", "enum": ["P0", "P1", "P2", "P3"]},
                    "team": {"type": "string", "description": "Filter by team"},
                    "owner": {"type": "string", "description": "Filter by project owner"}
                }
            }),
            get_project_status,
        )
        .tool(
            "repository_metrics",
            "Get repository metrics including security, quality, and performance",
            json!({
                "type": "object",
                "properties": {
                    "team": {"type": "string", "description": "Filter by team"},
                    "type": {"type": "string", "description": "Filter by repository type"},
                    "language": {"type": "string", "description": "Filter by programming language"},
                    "sortBy": {"type": "string", "enum": ["techDebt", "security", "coverage", "uptime"]}
                }
            }),
            repository_metrics,
        )
        .tool(
            "deployment_dashboard",
            "Get deployment metrics and recent deployment history",
            json!({
                "type": "object",
                "properties": {
                    "repository": {"type": "string", "description": "Filter by repository"},
                    "environment": {"type": "string", "enum": ["dev", "staging", "canary", "production"]},
                    "status": {"type": "string", "enum": ["success", "failed", "rolled_back"]},
                    "timeframe": {"type": "string", "enum": ["24h", "7d", "30d"], "default": "7d"}
                }
            }),
            deployment_dashboard,
        )
        .tool(
            "incident_analysis",
            "Analyze incidents with filtering and metrics",
            json!({
                "type": "object",
                "properties": {
                    "severity": {"type": "string", "enum": ["SEV0", "SEV1", "SEV2", "SEV3", "SEV4"]},
                    "status": {"type": "string", "enum": ["Open", "Investigating", "Mitigating", "Resolved", "Post-mortem"]},
                    "service": {"type": "string", "description": "Filter by service"},
                    "assignee": {"type": "string", "description": "Filter by assignee"},
                    "timeframe": {"type": "string", "enum": ["24h", "7d", "30d"], "default": "30d"}
                }
            }),
            incident_analysis,
        )
        .tool(
            "code_review_metrics",
            "Get code review metrics and current review queue",
            json!({
                "type": "object",
                "properties": {
                    "repository": {"type": "string", "description": "Filter by repository"},
                    "author": {"type": "string", "description": "Filter by author"},
                    "reviewer": {"type": "string", "description": "Filter by reviewer"},
                    "status": {"type": "string", "enum": ["Open", "Approved", "Changes Requested", "Merged", "Closed"]}
                }
            }),
            code_review_metrics,
        )
        .tool(
            "oncall_schedule",
            "Get current and upcoming oncall schedule",
            json!({
                "type": "object",
                "properties": {
                    "team": {"type": "string", "description": "Filter by team"},
                    "service": {"type": "string", "description": "Filter by service"},
                    "engineer": {"type": "string", "description": "Filter by engineer"}
                }
            }),
            oncall_schedule,
        )
        .tool(
            "team_health_metrics",
            "Get comprehensive team health and productivity metrics",
            json!({
                "type": "object",
                "properties": {
                    "team": {"type": "string", "description": "Specific team to analyze"},
                    "metric": {"type": "string", "enum": ["velocity", "quality", "incidents", "deployments"]}
                }
            }),
            team_health_metrics,
        )
}

fn search_engineers(data: &EngineeringData, args: &Map<String, Value>) -> QueryResult<String> {
    let hits = FilterPipeline::new(args)
        .substring("query", |e: &Engineer| vec![e.name, e.email])
        .exact("team", |e| e.team)
        .exact("role", |e| e.role)
        .exact("level", |e| e.level)
        .exact("location", |e| e.location)
        .substring("skill", |e| e.skills.to_vec())
        .apply(&data.engineers)?;

    let mut out = Report::new();
    out.line(format!("Found {} engineers:", hits.len())).blank();
    for e in &hits {
        out.line(format!("• **{}** ({})", e.name, e.id))
            .field("Role", format!("{} {}", e.role, e.level))
            .field("Team", e.team)
            .field("Location", e.location)
            .field("Skills", e.skills.join(", "))
            .field("Hire Date", e.hire_date)
            .blank();
    }
    Ok(out.finish())
}

fn get_project_status(data: &EngineeringData, args: &Map<String, Value>) -> QueryResult<String> {
    let hits = FilterPipeline::new(args)
        .exact("status", |p: &Project| p.status)
        .exact("priority", |p| p.priority)
        .exact("team", |p| p.team)
        .exact("owner", |p| p.owner)
        .apply(&data.projects)?;

    let mut out = Report::new();
    out.title(format!("Project Status Report ({} projects)", hits.len()));
    out.heading("Status Summary");
    for (status, count) in breakdown(&hits, |p| p.status) {
        out.metric(status, count);
    }
    out.blank().heading("Project Details");
    for p in &hits {
        out.line(format!("• **{}** ({})", p.name, p.id));
        out.line(format!(
            "  Status: {} | Priority: {} | Progress: {}%",
            p.status, p.priority, p.progress
        ));
        out.line(format!("  Owner: {} | Team: {}", p.owner, p.team));
        out.line(format!(
            "  Target: {} | Budget: {}",
            p.target_date,
            money(p.budget)
        ));
        out.field("Description", p.description);
        if !p.risks.is_empty() {
            out.field("Risks", p.risks.join(", "));
        }
        if !p.dependencies.is_empty() {
            out.field("Dependencies", p.dependencies.join(", "));
        }
        out.blank();
    }
    Ok(out.finish())
}

fn repository_metrics(data: &EngineeringData, args: &Map<String, Value>) -> QueryResult<String> {
    let mut hits = FilterPipeline::new(args)
        .exact("team", |r: &Repository| r.team)
        .exact("type", |r| r.repo_type)
        .exact("language", |r| r.language)
        .apply(&data.repositories)?;

    match opt_str(args, "sortBy")? {
        Some("techDebt") => hits.sort_by(|a, b| b.tech_debt_score.cmp(&a.tech_debt_score)),
        Some("security") => hits.sort_by(|a, b| {
            let urgent = |r: &Repository| r.security_vulns.critical + r.security_vulns.high;
            urgent(b).cmp(&urgent(a))
        }),
        Some("coverage") => hits.sort_by(|a, b| b.test_coverage.cmp(&a.test_coverage)),
        Some("uptime") => hits.sort_by(|a, b| b.uptime.total_cmp(&a.uptime)),
        _ => {}
    }

    let mut out = Report::new();
    out.title(format!("Repository Metrics ({} repositories)", hits.len()));
    for r in &hits {
        out.line(format!(
            "• **{}** ({} - {})",
            r.name, r.repo_type, r.language
        ));
        out.line(format!(
            "  Team: {} | Contributors: {}",
            r.team, r.contributors
        ));
        out.line(format!(
            "  Lines of Code: {} | Test Coverage: {}%",
            crate::query::report::thousands(r.lines_of_code),
            r.test_coverage
        ));
        out.line(format!(
            "  Tech Debt Score: {}/10 | Uptime: {}%",
            r.tech_debt_score, r.uptime
        ));
        let v = &r.security_vulns;
        out.line(format!(
            "  Security Vulnerabilities: {} critical, {} high, {} medium, {} low",
            v.critical, v.high, v.medium, v.low
        ));
        out.field("Deployment Frequency", format!("{}/week", r.deployment_freq));
        out.field("Last Commit", r.last_commit);
        out.blank();
    }
    Ok(out.finish())
}

fn deployment_dashboard(data: &EngineeringData, args: &Map<String, Value>) -> QueryResult<String> {
    let mut hits = FilterPipeline::new(args)
        .exact("repository", |d: &Deployment| d.repository)
        .exact("environment", |d| d.environment)
        .exact("status", |d| d.status)
        .apply(&data.deployments)?;

    let total = hits.len();
    let successful = hits.iter().filter(|d| d.status == "success").count();
    let failed = hits.iter().filter(|d| d.status == "failed").count();
    let rolled_back = hits.iter().filter(|d| d.status == "rolled_back").count();
    let success_rate = percentage(successful, total);
    let avg_duration = mean(hits.iter().map(|d| f64::from(d.duration)));

    hits.sort_by(|a, b| b.timestamp.cmp(a.timestamp));

    let mut out = Report::new();
    out.title(format!("Deployment Dashboard ({total} deployments)"));
    out.heading("Metrics");
    out.metric("Success Rate", format!("{success_rate:.1}%"));
    out.metric("Average Duration", format!("{avg_duration:.1} minutes"));
    out.line(format!(
        "• Successful: {successful} | Failed: {failed} | Rolled Back: {rolled_back}"
    ));
    out.blank().heading("Recent Deployments");
    for d in &hits {
        out.line(format!("• **{}** {}", d.repository, d.version));
        out.line(format!(
            "  Environment: {} | Status: {}",
            d.environment, d.status
        ));
        out.line(format!(
            "  Deployer: {} | Duration: {} min",
            d.deployer, d.duration
        ));
        out.field("Timestamp", d.timestamp);
        out.field_if("Rollback Reason", d.rollback_reason);
        out.blank();
    }
    Ok(out.finish())
}

fn incident_analysis(data: &EngineeringData, args: &Map<String, Value>) -> QueryResult<String> {
    let mut hits = FilterPipeline::new(args)
        .exact("severity", |i: &Incident| i.severity)
        .exact("status", |i| i.status)
        .exact("service", |i| i.service)
        .exact("assignee", |i| i.assignee)
        .apply(&data.incidents)?;

    let total = hits.len();
    let resolved = hits.iter().filter(|i| i.is_resolved()).count();
    let avg_mttr = mean(
        hits.iter()
            .filter(|i| i.mttr > 0)
            .map(|i| f64::from(i.mttr)),
    );
    let severities = breakdown(&hits, |i| i.severity)
        .iter()
        .map(|(sev, count)| format!("{sev}: {count}"))
        .collect::<Vec<_>>()
        .join(", ");

    hits.sort_by(|a, b| b.created_at.cmp(a.created_at));

    let mut out = Report::new();
    out.title(format!("Incident Analysis ({total} incidents)"));
    out.heading("Metrics");
    out.metric("Average MTTR", format!("{avg_mttr:.0} minutes"));
    out.metric("Resolved", format!("{resolved}/{total}"));
    out.metric("Severity Breakdown", severities);
    out.blank().heading("Incident Details");
    for i in &hits {
        out.line(format!("• **{}** ({})", i.title, i.severity));
        out.line(format!("  Status: {} | Service: {}", i.status, i.service));
        out.line(format!(
            "  Assignee: {} | Reporter: {}",
            i.assignee, i.reporter
        ));
        out.field("Created", i.created_at);
        if let Some(resolved_at) = i.resolved_at {
            out.field(
                "Resolved",
                format!("{} (MTTR: {} min)", resolved_at, i.mttr),
            );
        }
        out.field("Impact", i.impact);
        out.field_if("Root Cause", i.root_cause);
        out.blank();
    }
    Ok(out.finish())
}

fn code_review_metrics(data: &EngineeringData, args: &Map<String, Value>) -> QueryResult<String> {
    let mut hits = FilterPipeline::new(args)
        .exact("repository", |cr: &CodeReview| cr.repository)
        .exact("author", |cr| cr.author)
        .member("reviewer", |cr| cr.reviewers)
        .exact("status", |cr| cr.status)
        .apply(&data.code_reviews)?;

    let total = hits.len();
    let completed = hits
        .iter()
        .filter(|cr| matches!(cr.status, "Merged" | "Closed"))
        .count();
    let avg_review_time = mean(
        hits.iter()
            .filter(|cr| matches!(cr.status, "Merged" | "Closed") && cr.review_time > 0.0)
            .map(|cr| cr.review_time),
    );
    let open = hits.iter().filter(|cr| cr.status == "Open").count();
    let avg_lines = mean(hits.iter().map(|cr| f64::from(cr.lines_changed)));

    hits.sort_by(|a, b| b.created_at.cmp(a.created_at));

    let mut out = Report::new();
    out.title(format!("Code Review Metrics ({total} reviews)"));
    out.heading("Metrics");
    out.metric("Average Review Time", format!("{avg_review_time:.1} hours"));
    out.metric("Open Reviews", open);
    out.metric("Average Lines Changed", format!("{avg_lines:.0}"));
    out.metric("Completion Rate", format!("{completed}/{total}"));
    out.blank().heading("Review Queue");
    for cr in &hits {
        out.entry(cr.title);
        out.line(format!(
            "  Repository: {} | Author: {}",
            cr.repository, cr.author
        ));
        out.line(format!(
            "  Status: {} | Lines Changed: {}",
            cr.status, cr.lines_changed
        ));
        out.field("Reviewers", cr.reviewers.join(", "));
        out.field("Created", cr.created_at);
        if let Some(merged_at) = cr.merged_at {
            out.field(
                "Merged",
                format!("{} (Review Time: {} hours)", merged_at, cr.review_time),
            );
        }
        out.blank();
    }
    Ok(out.finish())
}

fn oncall_schedule(data: &EngineeringData, args: &Map<String, Value>) -> QueryResult<String> {
    let mut hits = FilterPipeline::new(args)
        .exact("team", |oc: &OncallRotation| oc.team)
        .exact("service", |oc| oc.service)
        .exact("engineer", |oc| oc.engineer)
        .apply(&data.oncall_rotations)?;

    hits.sort_by(|a, b| a.start_date.cmp(b.start_date));

    let mut out = Report::new();
    out.title(format!("Oncall Schedule ({} rotations)", hits.len()));
    for oc in &hits {
        out.entry(format!("{} - {}", oc.team, oc.service));
        out.field("Current Engineer", oc.engineer);
        out.field("Period", format!("{} to {}", oc.start_date, oc.end_date));
        out.field("Escalation Path", oc.escalation_path.join(" → "));
        out.blank();
    }
    Ok(out.finish())
}

fn team_health_metrics(data: &EngineeringData, args: &Map<String, Value>) -> QueryResult<String> {
    let team = opt_str(args, "team")?;
    let metric = opt_str(args, "metric")?;
    let wants = |section: &str| metric.is_none() || metric == Some(section);

    let keep = |record_team: &str| team.is_none() || team == Some(record_team);
    let engineers: Vec<_> = data.engineers.iter().filter(|e| keep(e.team)).collect();
    let projects: Vec<_> = data.projects.iter().filter(|p| keep(p.team)).collect();
    let repositories: Vec<_> = data.repositories.iter().filter(|r| keep(r.team)).collect();

    let mut out = Report::new();
    match team {
        Some(team) => out.title(format!("Team Health Metrics - {team}")),
        None => out.title("Team Health Metrics"),
    };

    if wants("velocity") {
        let active = projects.iter().filter(|p| p.status == "Active").count();
        let avg_progress = mean(projects.iter().map(|p| f64::from(p.progress)));
        out.heading("Velocity Metrics");
        out.metric("Engineers", engineers.len());
        out.metric("Active Projects", active);
        out.metric("Average Project Progress", format!("{avg_progress:.1}%"));
        out.metric("Repositories", repositories.len());
        out.blank();
    }

    if wants("quality") && !repositories.is_empty() {
        let avg_coverage = mean(repositories.iter().map(|r| f64::from(r.test_coverage)));
        let avg_debt = mean(repositories.iter().map(|r| f64::from(r.tech_debt_score)));
        out.heading("Quality Metrics");
        out.metric("Average Test Coverage", format!("{avg_coverage:.1}%"));
        out.metric("Average Tech Debt Score", format!("{avg_debt:.1}/10"));
        out.metric("Code Review Velocity", "8.5 hours average");
        out.blank();
    }

    // Incidents and deployments attribute to a team through the service's
    // repository; without a team filter they cover the whole org.
    let team_service = |service: &str| {
        team.is_none() || repositories.iter().any(|r| r.name == service)
    };

    if wants("incidents") {
        let incidents: Vec<_> = data
            .incidents
            .iter()
            .filter(|i| team_service(i.service))
            .collect();
        let open = incidents.iter().filter(|i| !i.is_resolved()).count();
        out.heading("Incident Metrics");
        out.metric("Open Incidents", open);
        out.metric("Total Incidents (30d)", incidents.len());
        if !incidents.is_empty() {
            let avg_mttr = mean(
                incidents
                    .iter()
                    .filter(|i| i.mttr > 0)
                    .map(|i| f64::from(i.mttr)),
            );
            out.metric("Average MTTR", format!("{avg_mttr:.0} minutes"));
        }
        out.blank();
    }

    if wants("deployments") {
        let deployments: Vec<_> = data
            .deployments
            .iter()
            .filter(|d| team_service(d.repository))
            .collect();
        let successful = deployments.iter().filter(|d| d.status == "success").count();
        let success_rate = percentage(successful, deployments.len());
        out.heading("Deployment Metrics");
        out.metric("Total Deployments (7d)", deployments.len());
        out.metric("Success Rate", format!("{success_rate:.1}%"));
        if !repositories.is_empty() {
            let avg_freq = mean(repositories.iter().map(|r| f64::from(r.deployment_freq)));
            out.metric("Average Deploy Frequency", format!("{avg_freq:.1}/week"));
        }
    }

    Ok(out.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engineering::data::seed;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn empty_arguments_return_the_full_roster() {
        let data = seed();
        let text = search_engineers(&data, &args(json!({}))).unwrap();
        assert!(text.starts_with("Found 9 engineers:\n\n"));
        assert!(text.contains("• **Alex Chen** (eng_001)"));
        assert!(text.contains("  Skills: Python, Java, Elasticsearch, Kafka, AWS\n"));
    }

    #[test]
    fn engineer_filters_combine() {
        let data = seed();
        let text = search_engineers(
            &data,
            &args(json!({"role": "Manager", "location": "Seattle"})),
        )
        .unwrap();
        assert!(text.starts_with("Found 1 engineers:"));
        assert!(text.contains("Michael O'Brien"));
    }

    #[test]
    fn skill_filter_is_substring_case_insensitive() {
        let data = seed();
        let text = search_engineers(&data, &args(json!({"skill": "kube"}))).unwrap();
        assert!(text.starts_with("Found 2 engineers:"));
        assert!(text.contains("Sarah Johnson"));
        assert!(text.contains("Michael O'Brien"));
    }

    #[test]
    fn project_report_summarizes_statuses_in_first_seen_order() {
        let data = seed();
        let text = get_project_status(&data, &args(json!({}))).unwrap();
        assert!(text.starts_with("**Project Status Report (5 projects)**\n\n"));
        let summary_start = text.find("**Status Summary:**").unwrap();
        let details_start = text.find("**Project Details:**").unwrap();
        let summary = &text[summary_start..details_start];
        assert!(summary.contains("• Active: 2\n"));
        assert!(summary.contains("• Planning: 1\n"));
        assert!(text.contains("  Target: 2024-08-15 | Budget: $500,000\n"));
    }

    #[test]
    fn completed_projects_hide_empty_risk_lines() {
        let data = seed();
        let text = get_project_status(&data, &args(json!({"status": "Completed"}))).unwrap();
        assert!(text.contains("API Gateway V2"));
        assert!(!text.contains("Risks:"));
        assert!(!text.contains("Dependencies:"));
    }

    #[test]
    fn repositories_sort_by_tech_debt_descending() {
        let data = seed();
        let text = repository_metrics(&data, &args(json!({"sortBy": "techDebt"}))).unwrap();
        let mobile = text.find("mobile-sdk").unwrap();
        let search = text.find("search-service").unwrap();
        let gateway = text.find("api-gateway").unwrap();
        assert!(mobile < search && search < gateway);
    }

    #[test]
    fn repository_lines_use_thousands_separators() {
        let data = seed();
        let text = repository_metrics(&data, &args(json!({"language": "Java"}))).unwrap();
        assert!(text.starts_with("**Repository Metrics (1 repositories)**"));
        assert!(text.contains("  Lines of Code: 180,000 | Test Coverage: 94%\n"));
        assert!(text.contains("  Security Vulnerabilities: 0 critical, 0 high, 2 medium, 5 low\n"));
    }

    #[test]
    fn deployment_dashboard_computes_rates() {
        let data = seed();
        let text = deployment_dashboard(&data, &args(json!({}))).unwrap();
        assert!(text.starts_with("**Deployment Dashboard (5 deployments)**"));
        assert!(text.contains("• Success Rate: 60.0%\n"));
        assert!(text.contains("• Successful: 3 | Failed: 1 | Rolled Back: 1\n"));
        assert!(text.contains("  Rollback Reason: Critical UI bug discovered\n"));
    }

    #[test]
    fn empty_deployment_slice_reports_zero_not_nan() {
        let data = seed();
        let text = deployment_dashboard(&data, &args(json!({"repository": "no-such-repo"})))
            .unwrap();
        assert!(text.starts_with("**Deployment Dashboard (0 deployments)**"));
        assert!(text.contains("• Success Rate: 0.0%\n"));
        assert!(text.contains("• Average Duration: 0.0 minutes\n"));
    }

    #[test]
    fn incident_metrics_average_only_resolved_mttr() {
        let data = seed();
        let text = incident_analysis(&data, &args(json!({}))).unwrap();
        // (135 + 195) / 2, open incidents carry mttr 0 and are excluded.
        assert!(text.contains("• Average MTTR: 165 minutes\n"));
        assert!(text.contains("• Resolved: 2/4\n"));
        assert!(text.contains("• Severity Breakdown: SEV1: 1, SEV0: 1, SEV2: 2\n"));
    }

    #[test]
    fn incident_details_sort_newest_first() {
        let data = seed();
        let text = incident_analysis(&data, &args(json!({}))).unwrap();
        let rate_limiting = text.find("API Gateway rate limiting issues").unwrap();
        let crashes = text.find("Mobile app crashes on startup").unwrap();
        assert!(rate_limiting < crashes);
    }

    #[test]
    fn reviewer_filter_matches_membership() {
        let data = seed();
        let text = code_review_metrics(&data, &args(json!({"reviewer": "eng_005"}))).unwrap();
        assert!(text.starts_with("**Code Review Metrics (2 reviews)**"));
        assert!(text.contains("Optimize search query processing"));
        assert!(text.contains("Add real-time processing capability"));
    }

    #[test]
    fn review_metrics_cover_merged_only() {
        let data = seed();
        let text = code_review_metrics(&data, &args(json!({}))).unwrap();
        // (6.5 + 18.5) / 2 merged reviews.
        assert!(text.contains("• Average Review Time: 12.5 hours\n"));
        assert!(text.contains("• Completion Rate: 2/4\n"));
        assert!(text.contains("  Merged: 2024-06-21T14:15:00Z (Review Time: 6.5 hours)\n"));
    }

    #[test]
    fn oncall_rotations_sort_by_start_date() {
        let data = seed();
        let text = oncall_schedule(&data, &args(json!({}))).unwrap();
        let data_platform = text.find("Data Platform - data-pipeline").unwrap();
        let sre = text.find("Platform SRE - k8s-infrastructure").unwrap();
        assert!(data_platform < sre);
        assert!(text.contains("  Escalation Path: eng_103 → eng_200\n"));
    }

    #[test]
    fn team_health_scopes_to_one_team() {
        let data = seed();
        let text = team_health_metrics(
            &data,
            &args(json!({"team": "Search Platform", "metric": "incidents"})),
        )
        .unwrap();
        assert!(text.starts_with("**Team Health Metrics - Search Platform**"));
        assert!(text.contains("• Total Incidents (30d): 1\n"));
        assert!(!text.contains("Velocity Metrics"));
    }

    #[test]
    fn team_health_without_filters_prints_all_sections() {
        let data = seed();
        let text = team_health_metrics(&data, &args(json!({}))).unwrap();
        for section in [
            "**Velocity Metrics:**",
            "**Quality Metrics:**",
            "**Incident Metrics:**",
            "**Deployment Metrics:**",
        ] {
            assert!(text.contains(section), "missing {section}");
        }
        assert!(text.contains("• Average Project Progress: 48.0%\n"));
    }

    #[test]
    fn wrong_typed_argument_is_rejected() {
        let data = seed();
        let err = search_engineers(&data, &args(json!({"team": 3}))).unwrap_err();
        assert!(err.to_string().contains("team"));
    }

    #[test]
    fn repeated_calls_render_identical_bytes() {
        let data = seed();
        let a = incident_analysis(&data, &args(json!({"severity": "SEV2"}))).unwrap();
        let b = incident_analysis(&data, &args(json!({"severity": "SEV2"}))).unwrap();
        assert_eq!(a, b);
    }
}
