//! Record types shared by both servers.
//!
//! Engineering delivery data (projects, repositories, deployments,
//! incidents, code reviews) has the same shape in either dataset; only
//! the people records differ, and those live with their server. All
//! string data is `&'static str` — datasets are compiled in and never
//! mutated after seeding.

/// A tracked engineering project.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub status: &'static str,
    pub priority: &'static str,
    pub owner: &'static str,
    pub team: &'static str,
    pub start_date: &'static str,
    pub target_date: &'static str,
    pub actual_date: Option<&'static str>,
    pub progress: u32,
    pub budget: u64,
    pub risks: &'static [&'static str],
    pub dependencies: &'static [&'static str],
}

/// Open vulnerability counts by severity.
#[derive(Debug, Clone, Copy)]
pub struct Vulnerabilities {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

/// A source repository with its health metrics.
#[derive(Debug, Clone)]
pub struct Repository {
    pub id: &'static str,
    pub name: &'static str,
    pub repo_type: &'static str,
    pub language: &'static str,
    pub team: &'static str,
    pub lines_of_code: u64,
    pub contributors: u32,
    pub last_commit: &'static str,
    pub deployment_freq: u32,
    pub tech_debt_score: u32,
    pub security_vulns: Vulnerabilities,
    pub test_coverage: u32,
    pub uptime: f64,
}

/// One deployment event.
#[derive(Debug, Clone)]
pub struct Deployment {
    pub id: &'static str,
    pub repository: &'static str,
    pub version: &'static str,
    pub environment: &'static str,
    pub deployer: &'static str,
    pub timestamp: &'static str,
    pub duration: u32,
    pub status: &'static str,
    pub rollback_reason: Option<&'static str>,
}

/// A production incident. `mttr` is minutes-to-resolution, 0 while the
/// incident is still open.
#[derive(Debug, Clone)]
pub struct Incident {
    pub id: &'static str,
    pub title: &'static str,
    pub severity: &'static str,
    pub status: &'static str,
    pub service: &'static str,
    pub assignee: &'static str,
    pub reporter: &'static str,
    pub created_at: &'static str,
    pub resolved_at: Option<&'static str>,
    pub mttr: u32,
    pub impact: &'static str,
    pub root_cause: Option<&'static str>,
}

/// A code review. `review_time` is hours from open to merge, 0 while
/// the review is open.
#[derive(Debug, Clone)]
pub struct CodeReview {
    pub id: &'static str,
    pub repository: &'static str,
    pub author: &'static str,
    pub reviewers: &'static [&'static str],
    pub title: &'static str,
    pub lines_changed: u32,
    pub created_at: &'static str,
    pub merged_at: Option<&'static str>,
    pub status: &'static str,
    pub review_time: f64,
}

impl Incident {
    /// Resolved incidents are those that reached "Resolved" or went on
    /// to a post-mortem.
    pub fn is_resolved(&self) -> bool {
        matches!(self.status, "Resolved" | "Post-mortem")
    }
}
