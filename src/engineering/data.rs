//! The engineering organization dataset.
//!
//! Seeded once at startup and shared immutably for the life of the
//! process. Dates and timestamps stay as strings; the tools only ever
//! compare and display them, and ISO-8601 sorts lexicographically.

use crate::records::{CodeReview, Deployment, Incident, Project, Repository, Vulnerabilities};

/// One member of the engineering org.
#[derive(Debug, Clone)]
pub struct Engineer {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub level: &'static str,
    pub role: &'static str,
    pub team: &'static str,
    pub location: &'static str,
    pub hire_date: &'static str,
    pub skills: &'static [&'static str],
    pub manager: Option<&'static str>,
}

/// One week of oncall for a service.
#[derive(Debug, Clone)]
pub struct OncallRotation {
    pub id: &'static str,
    pub team: &'static str,
    pub service: &'static str,
    pub engineer: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub escalation_path: &'static [&'static str],
}

/// The full dataset served by the engineering server.
pub struct EngineeringData {
    pub engineers: Vec<Engineer>,
    pub projects: Vec<Project>,
    pub repositories: Vec<Repository>,
    pub deployments: Vec<Deployment>,
    pub incidents: Vec<Incident>,
    pub code_reviews: Vec<CodeReview>,
    pub oncall_rotations: Vec<OncallRotation>,
}

/// Build the seeded dataset.
pub fn seed() -> EngineeringData {
    EngineeringData {
        engineers: vec![
            Engineer {
                id: "eng_001",
                name: "Alex Chen",
                email: "alex.chen@company.com",
                level: "L6",
                role: "SWE",
                team: "Search Platform",
                location: "San Francisco",
                hire_date: "2019-03-15",
                skills: &["Python", "Java", "Elasticsearch", "Kafka", "AWS"],
                manager: Some("eng_100"),
            },
            Engineer {
                id: "eng_002",
                name: "Sarah Johnson",
                email: "sarah.johnson@company.com",
                level: "L7",
                role: "SRE",
                team: "Platform SRE",
                location: "Seattle",
                hire_date: "2018-08-20",
                skills: &["Go", "Kubernetes", "Prometheus", "Terraform", "GCP"],
                manager: Some("eng_101"),
            },
            Engineer {
                id: "eng_003",
                name: "Marcus Rodriguez",
                email: "marcus.rodriguez@company.com",
                level: "L5",
                role: "SWE",
                team: "Mobile Platform",
                location: "Austin",
                hire_date: "2021-01-10",
                skills: &["Swift", "Kotlin", "React Native", "GraphQL", "Apollo"],
                manager: Some("eng_102"),
            },
            Engineer {
                id: "eng_004",
                name: "Priya Patel",
                email: "priya.patel@company.com",
                level: "L6",
                role: "Data",
                team: "Data Platform",
                location: "New York",
                hire_date: "2020-06-15",
                skills: &["Python", "Spark", "Airflow", "BigQuery", "dbt"],
                manager: Some("eng_103"),
            },
            Engineer {
                id: "eng_005",
                name: "David Kim",
                email: "david.kim@company.com",
                level: "L8",
                role: "Architect",
                team: "Core Platform",
                location: "San Francisco",
                hire_date: "2016-02-01",
                skills: &["Java", "Spring", "Microservices", "PostgreSQL", "Redis"],
                manager: Some("eng_200"),
            },
            Engineer {
                id: "eng_100",
                name: "Jennifer Wu",
                email: "jennifer.wu@company.com",
                level: "L7",
                role: "Manager",
                team: "Search Platform",
                location: "San Francisco",
                hire_date: "2017-09-12",
                skills: &["Python", "Leadership", "System Design", "Elasticsearch"],
                manager: Some("eng_200"),
            },
            Engineer {
                id: "eng_101",
                name: "Michael O'Brien",
                email: "michael.obrien@company.com",
                level: "L8",
                role: "Manager",
                team: "Platform SRE",
                location: "Seattle",
                hire_date: "2016-11-05",
                skills: &["Go", "Kubernetes", "Leadership", "Incident Management"],
                manager: Some("eng_200"),
            },
            Engineer {
                id: "eng_200",
                name: "Lisa Anderson",
                email: "lisa.anderson@company.com",
                level: "L9",
                role: "Director",
                team: "Platform Engineering",
                location: "San Francisco",
                hire_date: "2015-04-20",
                skills: &["Leadership", "Strategy", "System Architecture", "Team Building"],
                manager: Some("eng_300"),
            },
            Engineer {
                id: "eng_300",
                name: "Robert Chang",
                email: "robert.chang@company.com",
                level: "L10",
                role: "VP",
                team: "Engineering",
                location: "San Francisco",
                hire_date: "2014-01-15",
                skills: &["Leadership", "Strategy", "Product", "Scaling"],
                manager: None,
            },
        ],

        projects: vec![
            Project {
                id: "proj_001",
                name: "Search Relevance V3",
                description: "Next generation search ranking algorithm",
                status: "Active",
                priority: "P0",
                owner: "eng_001",
                team: "Search Platform",
                start_date: "2024-04-01",
                target_date: "2024-08-15",
                actual_date: None,
                progress: 65,
                budget: 500000,
                risks: &["ML model performance", "Data pipeline complexity"],
                dependencies: &["proj_005"],
            },
            Project {
                id: "proj_002",
                name: "Kubernetes Migration",
                description: "Migrate all services to Kubernetes",
                status: "Active",
                priority: "P1",
                owner: "eng_002",
                team: "Platform SRE",
                start_date: "2024-01-15",
                target_date: "2024-12-31",
                actual_date: None,
                progress: 40,
                budget: 800000,
                risks: &["Service disruption", "Team training"],
                dependencies: &[],
            },
            Project {
                id: "proj_003",
                name: "Mobile SDK Rewrite",
                description: "Modernize mobile SDK with new architecture",
                status: "Planning",
                priority: "P2",
                owner: "eng_003",
                team: "Mobile Platform",
                start_date: "2024-07-01",
                target_date: "2024-11-30",
                actual_date: None,
                progress: 10,
                budget: 300000,
                risks: &["Breaking changes", "Developer adoption"],
                dependencies: &["proj_001"],
            },
            Project {
                id: "proj_004",
                name: "Real-time Analytics",
                description: "Build real-time data processing pipeline",
                status: "Blocked",
                priority: "P1",
                owner: "eng_004",
                team: "Data Platform",
                start_date: "2024-03-01",
                target_date: "2024-09-15",
                actual_date: None,
                progress: 25,
                budget: 450000,
                risks: &["Data consistency", "Performance requirements"],
                dependencies: &["proj_002"],
            },
            Project {
                id: "proj_005",
                name: "API Gateway V2",
                description: "Next-gen API gateway with enhanced security",
                status: "Completed",
                priority: "P0",
                owner: "eng_005",
                team: "Core Platform",
                start_date: "2023-10-01",
                target_date: "2024-03-31",
                actual_date: Some("2024-03-28"),
                progress: 100,
                budget: 600000,
                risks: &[],
                dependencies: &[],
            },
        ],

        repositories: vec![
            Repository {
                id: "repo_001",
                name: "search-service",
                repo_type: "Service",
                language: "Python",
                team: "Search Platform",
                lines_of_code: 125000,
                contributors: 15,
                last_commit: "2024-06-20T14:30:00Z",
                deployment_freq: 5,
                tech_debt_score: 6,
                security_vulns: Vulnerabilities {
                    critical: 0,
                    high: 2,
                    medium: 8,
                    low: 15,
                },
                test_coverage: 87,
                uptime: 99.95,
            },
            Repository {
                id: "repo_002",
                name: "k8s-infrastructure",
                repo_type: "Infrastructure",
                language: "Go",
                team: "Platform SRE",
                lines_of_code: 85000,
                contributors: 8,
                last_commit: "2024-06-21T09:15:00Z",
                deployment_freq: 3,
                tech_debt_score: 4,
                security_vulns: Vulnerabilities {
                    critical: 0,
                    high: 0,
                    medium: 3,
                    low: 7,
                },
                test_coverage: 92,
                uptime: 99.99,
            },
            Repository {
                id: "repo_003",
                name: "mobile-sdk",
                repo_type: "Mobile",
                language: "Swift",
                team: "Mobile Platform",
                lines_of_code: 95000,
                contributors: 12,
                last_commit: "2024-06-19T16:45:00Z",
                deployment_freq: 2,
                tech_debt_score: 8,
                security_vulns: Vulnerabilities {
                    critical: 1,
                    high: 3,
                    medium: 12,
                    low: 20,
                },
                test_coverage: 76,
                uptime: 99.9,
            },
            Repository {
                id: "repo_004",
                name: "data-pipeline",
                repo_type: "Data",
                language: "Python",
                team: "Data Platform",
                lines_of_code: 110000,
                contributors: 18,
                last_commit: "2024-06-21T11:20:00Z",
                deployment_freq: 4,
                tech_debt_score: 5,
                security_vulns: Vulnerabilities {
                    critical: 0,
                    high: 1,
                    medium: 6,
                    low: 11,
                },
                test_coverage: 89,
                uptime: 99.8,
            },
            Repository {
                id: "repo_005",
                name: "api-gateway",
                repo_type: "Service",
                language: "Java",
                team: "Core Platform",
                lines_of_code: 180000,
                contributors: 25,
                last_commit: "2024-06-21T13:10:00Z",
                deployment_freq: 8,
                tech_debt_score: 3,
                security_vulns: Vulnerabilities {
                    critical: 0,
                    high: 0,
                    medium: 2,
                    low: 5,
                },
                test_coverage: 94,
                uptime: 99.99,
            },
        ],

        deployments: vec![
            Deployment {
                id: "deploy_001",
                repository: "search-service",
                version: "v2.4.1",
                environment: "production",
                deployer: "eng_001",
                timestamp: "2024-06-21T10:30:00Z",
                duration: 12,
                status: "success",
                rollback_reason: None,
            },
            Deployment {
                id: "deploy_002",
                repository: "api-gateway",
                version: "v3.1.0",
                environment: "production",
                deployer: "eng_005",
                timestamp: "2024-06-20T15:45:00Z",
                duration: 8,
                status: "success",
                rollback_reason: None,
            },
            Deployment {
                id: "deploy_003",
                repository: "mobile-sdk",
                version: "v2.0.0-beta",
                environment: "staging",
                deployer: "eng_003",
                timestamp: "2024-06-19T14:20:00Z",
                duration: 25,
                status: "failed",
                rollback_reason: Some("Critical UI bug discovered"),
            },
            Deployment {
                id: "deploy_004",
                repository: "data-pipeline",
                version: "v1.8.3",
                environment: "production",
                deployer: "eng_004",
                timestamp: "2024-06-21T09:15:00Z",
                duration: 18,
                status: "success",
                rollback_reason: None,
            },
            Deployment {
                id: "deploy_005",
                repository: "k8s-infrastructure",
                version: "v0.9.2",
                environment: "canary",
                deployer: "eng_002",
                timestamp: "2024-06-21T11:00:00Z",
                duration: 35,
                status: "rolled_back",
                rollback_reason: Some("Increased latency in dependent services"),
            },
        ],

        incidents: vec![
            Incident {
                id: "inc_001",
                title: "Search API high latency",
                severity: "SEV1",
                status: "Resolved",
                service: "search-service",
                assignee: "eng_001",
                reporter: "eng_002",
                created_at: "2024-06-20T14:30:00Z",
                resolved_at: Some("2024-06-20T16:45:00Z"),
                mttr: 135,
                impact: "Search response time increased by 300%",
                root_cause: Some("Database connection pool exhaustion"),
            },
            Incident {
                id: "inc_002",
                title: "Mobile app crashes on startup",
                severity: "SEV0",
                status: "Post-mortem",
                service: "mobile-sdk",
                assignee: "eng_003",
                reporter: "eng_100",
                created_at: "2024-06-19T09:15:00Z",
                resolved_at: Some("2024-06-19T12:30:00Z"),
                mttr: 195,
                impact: "100% of iOS users unable to open app",
                root_cause: Some("Memory leak in authentication module"),
            },
            Incident {
                id: "inc_003",
                title: "Data pipeline processing delays",
                severity: "SEV2",
                status: "Investigating",
                service: "data-pipeline",
                assignee: "eng_004",
                reporter: "eng_103",
                created_at: "2024-06-21T08:00:00Z",
                resolved_at: None,
                mttr: 0,
                impact: "Analytics reports delayed by 2+ hours",
                root_cause: None,
            },
            Incident {
                id: "inc_004",
                title: "API Gateway rate limiting issues",
                severity: "SEV2",
                status: "Mitigating",
                service: "api-gateway",
                assignee: "eng_005",
                reporter: "eng_001",
                created_at: "2024-06-21T13:45:00Z",
                resolved_at: None,
                mttr: 0,
                impact: "Some API calls being incorrectly rate limited",
                root_cause: None,
            },
        ],

        code_reviews: vec![
            CodeReview {
                id: "cr_001",
                repository: "search-service",
                author: "eng_001",
                reviewers: &["eng_100", "eng_005"],
                title: "Optimize search query processing",
                lines_changed: 245,
                created_at: "2024-06-20T09:30:00Z",
                merged_at: Some("2024-06-21T14:15:00Z"),
                status: "Merged",
                review_time: 6.5,
            },
            CodeReview {
                id: "cr_002",
                repository: "mobile-sdk",
                author: "eng_003",
                reviewers: &["eng_102", "eng_001"],
                title: "Fix memory leak in auth module",
                lines_changed: 89,
                created_at: "2024-06-19T16:00:00Z",
                merged_at: Some("2024-06-20T10:30:00Z"),
                status: "Merged",
                review_time: 18.5,
            },
            CodeReview {
                id: "cr_003",
                repository: "data-pipeline",
                author: "eng_004",
                reviewers: &["eng_103", "eng_005"],
                title: "Add real-time processing capability",
                lines_changed: 512,
                created_at: "2024-06-21T11:00:00Z",
                merged_at: None,
                status: "Open",
                review_time: 0.0,
            },
            CodeReview {
                id: "cr_004",
                repository: "k8s-infrastructure",
                author: "eng_002",
                reviewers: &["eng_101", "eng_200"],
                title: "Update cluster autoscaling configuration",
                lines_changed: 34,
                created_at: "2024-06-21T08:45:00Z",
                merged_at: None,
                status: "Changes Requested",
                review_time: 4.2,
            },
        ],

        oncall_rotations: vec![
            OncallRotation {
                id: "oncall_001",
                team: "Search Platform",
                service: "search-service",
                engineer: "eng_001",
                start_date: "2024-06-17",
                end_date: "2024-06-24",
                escalation_path: &["eng_100", "eng_200"],
            },
            OncallRotation {
                id: "oncall_002",
                team: "Platform SRE",
                service: "k8s-infrastructure",
                engineer: "eng_002",
                start_date: "2024-06-20",
                end_date: "2024-06-27",
                escalation_path: &["eng_101", "eng_200"],
            },
            OncallRotation {
                id: "oncall_003",
                team: "Data Platform",
                service: "data-pipeline",
                engineer: "eng_004",
                start_date: "2024-06-15",
                end_date: "2024-06-22",
                escalation_path: &["eng_103", "eng_200"],
            },
        ],
    }
}
