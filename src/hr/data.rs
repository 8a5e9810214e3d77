//! The unified HR & engineering dataset.
//!
//! People records here are HR employees rather than the engineering
//! roster: engineering attributes (level, role, oncall) are optional
//! and only set for engineering staff. Delivery records reuse the
//! shared shapes.

use crate::records::{CodeReview, Deployment, Incident, Project, Repository, Vulnerabilities};

#[derive(Debug, Clone)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub phone: &'static str,
    pub relationship: &'static str,
}

/// One employee. Engineering fields are `None` outside engineering.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub department: &'static str,
    pub position: &'static str,
    pub manager: Option<&'static str>,
    pub hire_date: &'static str,
    pub salary: u64,
    pub status: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub emergency_contact: EmergencyContact,
    pub engineering_level: Option<&'static str>,
    pub role: Option<&'static str>,
    pub skills: &'static [&'static str],
    pub current_projects: &'static [&'static str],
    pub is_oncall: bool,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_engineer(&self) -> bool {
        self.engineering_level.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Department {
    pub id: &'static str,
    pub name: &'static str,
    pub manager: &'static str,
    pub budget: u64,
    pub headcount: u32,
    pub location: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Deductions {
    pub tax: f64,
    pub health: f64,
    pub retirement: f64,
}

#[derive(Debug, Clone)]
pub struct PayrollRecord {
    pub id: &'static str,
    pub employee_id: &'static str,
    pub pay_period: &'static str,
    pub gross_pay: f64,
    pub net_pay: f64,
    pub deductions: Deductions,
    pub overtime: u32,
}

#[derive(Debug, Clone)]
pub struct TimeOffRequest {
    pub id: &'static str,
    pub employee_id: &'static str,
    pub kind: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub days: u32,
    pub status: &'static str,
    pub reason: &'static str,
}

#[derive(Debug, Clone)]
pub struct PerformanceReview {
    pub id: &'static str,
    pub employee_id: &'static str,
    pub reviewer_id: &'static str,
    pub period: &'static str,
    pub overall_rating: f64,
    pub goals: &'static [&'static str],
    pub feedback: &'static str,
    pub next_review_date: &'static str,
    pub status: &'static str,
}

/// The full dataset served by the HR server.
pub struct HrData {
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
    pub payroll_records: Vec<PayrollRecord>,
    pub time_off_requests: Vec<TimeOffRequest>,
    pub performance_reviews: Vec<PerformanceReview>,
    pub projects: Vec<Project>,
    pub repositories: Vec<Repository>,
    pub deployments: Vec<Deployment>,
    pub incidents: Vec<Incident>,
    pub code_reviews: Vec<CodeReview>,
}

impl HrData {
    /// Resolve an employee id to "First Last"; ids that match nothing
    /// render as "Unknown" rather than failing the whole report.
    pub fn employee_name(&self, id: &str) -> String {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .map(Employee::full_name)
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Build the seeded dataset.
pub fn seed() -> HrData {
    HrData {
        employees: vec![
            Employee {
                id: "emp_001",
                first_name: "John",
                last_name: "Smith",
                email: "john.smith@company.com",
                department: "Engineering",
                position: "Senior Software Engineer",
                manager: Some("emp_010"),
                hire_date: "2022-03-15",
                salary: 140000,
                status: "active",
                location: "San Francisco",
                phone: "+1-555-0101",
                emergency_contact: EmergencyContact {
                    name: "Jane Smith",
                    phone: "+1-555-0102",
                    relationship: "spouse",
                },
                engineering_level: Some("L6"),
                role: Some("SWE"),
                skills: &["Python", "Java", "Kubernetes", "AWS"],
                current_projects: &["proj_001"],
                is_oncall: false,
            },
            Employee {
                id: "emp_002",
                first_name: "Emily",
                last_name: "Johnson",
                email: "emily.johnson@company.com",
                department: "Marketing",
                position: "Marketing Manager",
                manager: Some("emp_011"),
                hire_date: "2021-08-20",
                salary: 95000,
                status: "active",
                location: "New York",
                phone: "+1-555-0201",
                emergency_contact: EmergencyContact {
                    name: "Michael Johnson",
                    phone: "+1-555-0202",
                    relationship: "brother",
                },
                engineering_level: None,
                role: None,
                skills: &["Digital Marketing", "Analytics", "Content Strategy"],
                current_projects: &["proj_002"],
                is_oncall: false,
            },
            Employee {
                id: "emp_003",
                first_name: "Michael",
                last_name: "Brown",
                email: "michael.brown@company.com",
                department: "Sales",
                position: "Sales Representative",
                manager: Some("emp_012"),
                hire_date: "2023-01-10",
                salary: 75000,
                status: "active",
                location: "Chicago",
                phone: "+1-555-0301",
                emergency_contact: EmergencyContact {
                    name: "Sarah Brown",
                    phone: "+1-555-0302",
                    relationship: "wife",
                },
                engineering_level: None,
                role: None,
                skills: &["Sales Strategy", "CRM", "Negotiation"],
                current_projects: &[],
                is_oncall: false,
            },
            Employee {
                id: "emp_004",
                first_name: "Sarah",
                last_name: "Davis",
                email: "sarah.davis@company.com",
                department: "HR",
                position: "HR Business Partner",
                manager: Some("emp_013"),
                hire_date: "2020-06-15",
                salary: 85000,
                status: "active",
                location: "Austin",
                phone: "+1-555-0401",
                emergency_contact: EmergencyContact {
                    name: "David Davis",
                    phone: "+1-555-0402",
                    relationship: "husband",
                },
                engineering_level: None,
                role: None,
                skills: &["HR Strategy", "Employee Relations", "Recruiting"],
                current_projects: &["proj_003"],
                is_oncall: false,
            },
            Employee {
                id: "emp_005",
                first_name: "David",
                last_name: "Wilson",
                email: "david.wilson@company.com",
                department: "Finance",
                position: "Senior Financial Analyst",
                manager: Some("emp_014"),
                hire_date: "2022-11-01",
                salary: 105000,
                status: "active",
                location: "Seattle",
                phone: "+1-555-0501",
                emergency_contact: EmergencyContact {
                    name: "Lisa Wilson",
                    phone: "+1-555-0502",
                    relationship: "mother",
                },
                engineering_level: None,
                role: None,
                skills: &["Financial Modeling", "Excel", "SQL"],
                current_projects: &[],
                is_oncall: false,
            },
            Employee {
                id: "emp_006",
                first_name: "Lisa",
                last_name: "Garcia",
                email: "lisa.garcia@company.com",
                department: "Engineering",
                position: "DevOps Engineer",
                manager: Some("emp_010"),
                hire_date: "2021-04-12",
                salary: 125000,
                status: "active",
                location: "San Francisco",
                phone: "+1-555-0601",
                emergency_contact: EmergencyContact {
                    name: "Carlos Garcia",
                    phone: "+1-555-0602",
                    relationship: "brother",
                },
                engineering_level: Some("L5"),
                role: Some("SRE"),
                skills: &["Kubernetes", "Terraform", "Monitoring", "Go"],
                current_projects: &["proj_001", "proj_004"],
                is_oncall: true,
            },
            Employee {
                id: "emp_007",
                first_name: "Robert",
                last_name: "Martinez",
                email: "robert.martinez@company.com",
                department: "Engineering",
                position: "Data Engineer",
                manager: Some("emp_010"),
                hire_date: "2022-09-05",
                salary: 130000,
                status: "active",
                location: "Austin",
                phone: "+1-555-0701",
                emergency_contact: EmergencyContact {
                    name: "Maria Martinez",
                    phone: "+1-555-0702",
                    relationship: "wife",
                },
                engineering_level: Some("L5"),
                role: Some("Data"),
                skills: &["Python", "Spark", "Airflow", "BigQuery"],
                current_projects: &["proj_003"],
                is_oncall: false,
            },
            Employee {
                id: "emp_010",
                first_name: "Jennifer",
                last_name: "Lee",
                email: "jennifer.lee@company.com",
                department: "Engineering",
                position: "Engineering Manager",
                manager: Some("emp_015"),
                hire_date: "2019-02-20",
                salary: 180000,
                status: "active",
                location: "San Francisco",
                phone: "+1-555-1001",
                emergency_contact: EmergencyContact {
                    name: "Kevin Lee",
                    phone: "+1-555-1002",
                    relationship: "husband",
                },
                engineering_level: Some("L7"),
                role: Some("Manager"),
                skills: &["Leadership", "System Design", "Python", "Team Management"],
                current_projects: &["proj_001"],
                is_oncall: false,
            },
            Employee {
                id: "emp_011",
                first_name: "Mark",
                last_name: "Thompson",
                email: "mark.thompson@company.com",
                department: "Marketing",
                position: "Marketing Director",
                manager: Some("emp_015"),
                hire_date: "2018-07-15",
                salary: 160000,
                status: "active",
                location: "New York",
                phone: "+1-555-1101",
                emergency_contact: EmergencyContact {
                    name: "Anna Thompson",
                    phone: "+1-555-1102",
                    relationship: "wife",
                },
                engineering_level: None,
                role: None,
                skills: &["Marketing Strategy", "Brand Management", "Leadership"],
                current_projects: &["proj_002"],
                is_oncall: false,
            },
            Employee {
                id: "emp_015",
                first_name: "Amanda",
                last_name: "White",
                email: "amanda.white@company.com",
                department: "Executive",
                position: "VP Engineering",
                manager: None,
                hire_date: "2017-01-10",
                salary: 250000,
                status: "active",
                location: "San Francisco",
                phone: "+1-555-1501",
                emergency_contact: EmergencyContact {
                    name: "James White",
                    phone: "+1-555-1502",
                    relationship: "spouse",
                },
                engineering_level: Some("L9"),
                role: Some("VP"),
                skills: &["Leadership", "Strategy", "Scaling", "Technical Vision"],
                current_projects: &[],
                is_oncall: false,
            },
        ],

        departments: vec![
            Department {
                id: "dept_001",
                name: "Engineering",
                manager: "emp_015",
                budget: 5000000,
                headcount: 4,
                location: "San Francisco",
            },
            Department {
                id: "dept_002",
                name: "Marketing",
                manager: "emp_011",
                budget: 2000000,
                headcount: 2,
                location: "New York",
            },
            Department {
                id: "dept_003",
                name: "Sales",
                manager: "emp_012",
                budget: 1500000,
                headcount: 1,
                location: "Chicago",
            },
            Department {
                id: "dept_004",
                name: "HR",
                manager: "emp_013",
                budget: 800000,
                headcount: 1,
                location: "Austin",
            },
            Department {
                id: "dept_005",
                name: "Finance",
                manager: "emp_014",
                budget: 1000000,
                headcount: 1,
                location: "Seattle",
            },
        ],

        payroll_records: vec![
            PayrollRecord {
                id: "pay_001",
                employee_id: "emp_001",
                pay_period: "2024-06-01",
                gross_pay: 5384.62,
                net_pay: 3845.72,
                deductions: Deductions {
                    tax: 1076.92,
                    health: 250.00,
                    retirement: 211.98,
                },
                overtime: 0,
            },
            PayrollRecord {
                id: "pay_002",
                employee_id: "emp_002",
                pay_period: "2024-06-01",
                gross_pay: 3653.85,
                net_pay: 2745.15,
                deductions: Deductions {
                    tax: 730.77,
                    health: 178.00,
                    retirement: 0.0,
                },
                overtime: 0,
            },
        ],

        time_off_requests: vec![
            TimeOffRequest {
                id: "to_001",
                employee_id: "emp_001",
                kind: "vacation",
                start_date: "2024-07-15",
                end_date: "2024-07-19",
                days: 5,
                status: "approved",
                reason: "Family vacation",
            },
            TimeOffRequest {
                id: "to_002",
                employee_id: "emp_002",
                kind: "sick",
                start_date: "2024-06-20",
                end_date: "2024-06-21",
                days: 2,
                status: "approved",
                reason: "Flu symptoms",
            },
            TimeOffRequest {
                id: "to_003",
                employee_id: "emp_003",
                kind: "personal",
                start_date: "2024-07-01",
                end_date: "2024-07-01",
                days: 1,
                status: "pending",
                reason: "Personal appointment",
            },
        ],

        performance_reviews: vec![
            PerformanceReview {
                id: "pr_001",
                employee_id: "emp_001",
                reviewer_id: "emp_010",
                period: "2024-Q2",
                overall_rating: 4.5,
                goals: &["Complete microservices migration", "Mentor junior developers"],
                feedback: "Excellent technical leadership and delivery",
                next_review_date: "2024-09-15",
                status: "completed",
            },
            PerformanceReview {
                id: "pr_002",
                employee_id: "emp_002",
                reviewer_id: "emp_011",
                period: "2024-Q2",
                overall_rating: 4.0,
                goals: &["Launch new product campaign", "Improve conversion rates"],
                feedback: "Strong campaign execution, room for analytics improvement",
                next_review_date: "2024-09-20",
                status: "completed",
            },
            PerformanceReview {
                id: "pr_003",
                employee_id: "emp_003",
                reviewer_id: "emp_012",
                period: "2024-Q2",
                overall_rating: 3.8,
                goals: &["Exceed sales quota", "Improve client relationships"],
                feedback: "Good performance, focus on relationship building",
                next_review_date: "2024-09-25",
                status: "scheduled",
            },
        ],

        projects: vec![
            Project {
                id: "proj_001",
                name: "Search Relevance V3",
                description: "Next generation search ranking algorithm",
                status: "Active",
                priority: "P0",
                owner: "emp_001",
                team: "Engineering",
                start_date: "2024-01-15",
                target_date: "2024-08-15",
                actual_date: None,
                progress: 65,
                budget: 500000,
                risks: &["ML model performance", "Data pipeline complexity"],
                dependencies: &[],
            },
            Project {
                id: "proj_002",
                name: "Mobile App Redesign",
                description: "Complete mobile app UI/UX overhaul",
                status: "Planning",
                priority: "P1",
                owner: "emp_002",
                team: "Marketing",
                start_date: "2024-07-01",
                target_date: "2024-12-31",
                actual_date: None,
                progress: 10,
                budget: 300000,
                risks: &["User adoption", "Development timeline"],
                dependencies: &["proj_001"],
            },
            Project {
                id: "proj_003",
                name: "Customer Analytics Platform",
                description: "Real-time customer behavior analytics",
                status: "Blocked",
                priority: "P2",
                owner: "emp_004",
                team: "HR",
                start_date: "2024-03-01",
                target_date: "2024-10-15",
                actual_date: None,
                progress: 35,
                budget: 450000,
                risks: &["Data privacy compliance", "Integration complexity"],
                dependencies: &[],
            },
            Project {
                id: "proj_004",
                name: "Infrastructure Modernization",
                description: "Migrate legacy systems to cloud-native architecture",
                status: "Active",
                priority: "P1",
                owner: "emp_006",
                team: "Engineering",
                start_date: "2024-02-01",
                target_date: "2024-09-30",
                actual_date: None,
                progress: 45,
                budget: 750000,
                risks: &["Migration complexity", "Downtime risk"],
                dependencies: &[],
            },
        ],

        repositories: vec![
            Repository {
                id: "repo_001",
                name: "search-service",
                repo_type: "Service",
                language: "Python",
                team: "Engineering",
                lines_of_code: 125000,
                contributors: 8,
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
                name: "mobile-app",
                repo_type: "Mobile",
                language: "React Native",
                team: "Marketing",
                lines_of_code: 95000,
                contributors: 6,
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
                id: "repo_003",
                name: "analytics-platform",
                repo_type: "Data",
                language: "Python",
                team: "HR",
                lines_of_code: 85000,
                contributors: 4,
                last_commit: "2024-06-18T11:20:00Z",
                deployment_freq: 3,
                tech_debt_score: 5,
                security_vulns: Vulnerabilities {
                    critical: 0,
                    high: 1,
                    medium: 6,
                    low: 11,
                },
                test_coverage: 82,
                uptime: 99.8,
            },
        ],

        deployments: vec![
            Deployment {
                id: "deploy_001",
                repository: "search-service",
                version: "v2.4.1",
                environment: "production",
                deployer: "emp_001",
                timestamp: "2024-06-21T10:30:00Z",
                duration: 12,
                status: "success",
                rollback_reason: None,
            },
            Deployment {
                id: "deploy_002",
                repository: "mobile-app",
                version: "v1.8.0",
                environment: "staging",
                deployer: "emp_002",
                timestamp: "2024-06-20T15:45:00Z",
                duration: 18,
                status: "success",
                rollback_reason: None,
            },
            Deployment {
                id: "deploy_003",
                repository: "analytics-platform",
                version: "v1.2.3",
                environment: "production",
                deployer: "emp_004",
                timestamp: "2024-06-19T14:20:00Z",
                duration: 25,
                status: "failed",
                rollback_reason: Some("Database migration issues"),
            },
        ],

        incidents: vec![
            Incident {
                id: "inc_001",
                title: "Search API high latency",
                severity: "SEV1",
                status: "Resolved",
                service: "search-service",
                assignee: "emp_001",
                reporter: "emp_002",
                created_at: "2024-06-20T14:30:00Z",
                resolved_at: Some("2024-06-20T16:45:00Z"),
                mttr: 135,
                impact: "Search response time increased by 300%",
                root_cause: Some("Database connection pool exhaustion"),
            },
            Incident {
                id: "inc_002",
                title: "Mobile app login failures",
                severity: "SEV2",
                status: "Investigating",
                service: "mobile-app",
                assignee: "emp_002",
                reporter: "emp_001",
                created_at: "2024-06-21T09:15:00Z",
                resolved_at: None,
                mttr: 0,
                impact: "15% of users unable to login",
                root_cause: None,
            },
        ],

        code_reviews: vec![
            CodeReview {
                id: "cr_001",
                repository: "search-service",
                author: "emp_001",
                reviewers: &["emp_002"],
                title: "Optimize search query processing",
                lines_changed: 245,
                created_at: "2024-06-20T09:30:00Z",
                merged_at: Some("2024-06-21T14:15:00Z"),
                status: "Merged",
                review_time: 6.5,
            },
            CodeReview {
                id: "cr_002",
                repository: "mobile-app",
                author: "emp_002",
                reviewers: &["emp_001", "emp_004"],
                title: "Add biometric authentication",
                lines_changed: 312,
                created_at: "2024-06-19T16:00:00Z",
                merged_at: None,
                status: "Open",
                review_time: 0.0,
            },
        ],
    }
}
