//! Resource snapshots for the engineering server.
//!
//! Snapshots are derived JSON documents. Object keys serialize in
//! sorted order, so a snapshot of the same dataset is byte-identical
//! read after read.

use serde_json::{json, Map, Value};

use super::data::EngineeringData;
use crate::query::aggregate::mean;
use crate::registry::Registry;

pub fn register(registry: Registry<EngineeringData>) -> Registry<EngineeringData> {
    registry
        .resource(
            "engineering://org-overview",
            "Engineering Organization Overview",
            "High-level engineering metrics and KPIs",
            org_overview,
        )
        .resource(
            "engineering://team-structure",
            "Team Structure",
            "Engineering team organization and reporting structure",
            team_structure,
        )
        .resource(
            "engineering://tech-stack",
            "Technology Stack",
            "Technologies, languages, and tools used across engineering",
            tech_stack,
        )
        .resource(
            "engineering://quarterly-metrics",
            "Quarterly Engineering Metrics",
            "Key engineering performance indicators for current quarter",
            quarterly_metrics,
        )
}

fn org_overview(data: &EngineeringData) -> Value {
    let active_projects = data
        .projects
        .iter()
        .filter(|p| p.status == "Active")
        .count();
    let open_incidents = data
        .incidents
        .iter()
        .filter(|i| !i.is_resolved())
        .count();
    let avg_coverage = mean(
        data.repositories
            .iter()
            .map(|r| f64::from(r.test_coverage)),
    )
    .round() as i64;

    json!({
        "totalEngineers": data.engineers.len(),
        "totalProjects": data.projects.len(),
        "activeProjects": active_projects,
        "totalRepositories": data.repositories.len(),
        "deploymentsThisWeek": data.deployments.len(),
        "openIncidents": open_incidents,
        "avgCodeReviewTime": "8.5 hours",
        "avgTestCoverage": format!("{avg_coverage}%"),
    })
}

fn team_structure(data: &EngineeringData) -> Value {
    let mut teams: Map<String, Value> = Map::new();
    for e in &data.engineers {
        let members = teams
            .entry(e.team.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(members) = members {
            members.push(json!({
                "id": e.id,
                "name": e.name,
                "role": e.role,
                "level": e.level,
                "manager": e.manager,
            }));
        }
    }
    Value::Object(teams)
}

fn tech_stack(data: &EngineeringData) -> Value {
    let mut languages: Map<String, Value> = Map::new();
    for r in &data.repositories {
        let entry = languages.entry(r.language.to_string()).or_insert_with(|| {
            json!({"repositories": 0, "totalLOC": 0, "teams": []})
        });
        entry["repositories"] = json!(entry["repositories"].as_u64().unwrap_or(0) + 1);
        entry["totalLOC"] = json!(entry["totalLOC"].as_u64().unwrap_or(0) + r.lines_of_code);
        if let Some(teams) = entry["teams"].as_array_mut() {
            if !teams.iter().any(|t| t == r.team) {
                teams.push(json!(r.team));
            }
        }
    }
    Value::Object(languages)
}

fn quarterly_metrics(_data: &EngineeringData) -> Value {
    json!({
        "deploymentFrequency": "5.2 per week",
        "incidentResolutionTime": "165 minutes avg",
        "codeReviewVelocity": "8.5 hours avg",
        "testCoverage": "87.6% avg",
        "technicalDebtScore": "5.2/10 avg",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engineering::data::seed;

    #[test]
    fn overview_counts_the_seeded_dataset() {
        let data = seed();
        let overview = org_overview(&data);
        assert_eq!(overview["totalEngineers"], json!(9));
        assert_eq!(overview["activeProjects"], json!(2));
        assert_eq!(overview["openIncidents"], json!(2));
        assert_eq!(overview["avgTestCoverage"], json!("88%"));
    }

    #[test]
    fn team_structure_groups_every_engineer() {
        let data = seed();
        let structure = team_structure(&data);
        let teams = structure.as_object().unwrap();
        let total: usize = teams
            .values()
            .map(|members| members.as_array().unwrap().len())
            .sum();
        assert_eq!(total, 9);
        let search = teams["Search Platform"].as_array().unwrap();
        assert_eq!(search.len(), 2);
        assert_eq!(search[0]["name"], json!("Alex Chen"));
        // The VP has no manager.
        let vp = &teams["Engineering"].as_array().unwrap()[0];
        assert_eq!(vp["manager"], Value::Null);
    }

    #[test]
    fn tech_stack_sums_lines_per_language() {
        let data = seed();
        let stack = tech_stack(&data);
        assert_eq!(stack["Python"]["repositories"], json!(2));
        assert_eq!(stack["Python"]["totalLOC"], json!(235000));
        let teams = stack["Python"]["teams"].as_array().unwrap();
        assert_eq!(teams.len(), 2);
    }
}
