//! The read-only, in-memory collections of listings and organizations.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::error::CoreError;
use super::table::{CellValue, TableRow};
use super::{Compensation, Listing, ListingKind, WorkType};

/// An employer or university department shown in the admin back-office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub city: String,
    pub employees: u32,
    pub open_positions: u32,
}

/// Every listing collection the application knows about.
///
/// A catalog is loaded once at startup and never refreshed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub theses: Vec<Listing>,
    #[serde(default)]
    pub internships: Vec<Listing>,
    #[serde(default)]
    pub ideas: Vec<Listing>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

impl Catalog {
    /// Parses and validates a catalog document.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content =
            fs::read_to_string(path).map_err(|e| CoreError::Io(e, path.to_path_buf()))?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded catalog from {:?}: {} theses, {} internships, {} ideas, {} organizations",
            path,
            catalog.theses.len(),
            catalog.internships.len(),
            catalog.ideas.len(),
            catalog.organizations.len()
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CoreError> {
        for kind in ListingKind::ALL {
            let mut seen = HashSet::new();
            for listing in self.listings(kind) {
                if listing.kind != kind {
                    return Err(CoreError::KindMismatch {
                        id: listing.id.clone(),
                        expected: kind,
                        found: listing.kind,
                    });
                }
                if !seen.insert(listing.id.as_str()) {
                    return Err(CoreError::DuplicateId {
                        kind,
                        id: listing.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn listings(&self, kind: ListingKind) -> &[Listing] {
        match kind {
            ListingKind::Thesis => &self.theses,
            ListingKind::Internship => &self.internships,
            ListingKind::Idea => &self.ideas,
        }
    }

    pub fn find(&self, kind: ListingKind, id: &str) -> Option<&Listing> {
        self.listings(kind).iter().find(|l| l.id == id)
    }

    /// The built-in mock dataset used when no catalog file is configured.
    pub fn sample() -> Self {
        use Compensation::*;
        use WorkType::*;

        let theses = vec![
            Listing {
                compensation: Some(Paid),
                work_type: Some(Hybrid),
                ..entry(
                    ListingKind::Thesis,
                    "t-001",
                    "5G Network Slicing for Industrial IoT",
                    "Evaluate slicing strategies for low-latency factory traffic.",
                    "Ericsson AB",
                    "Computer Science",
                    "Stockholm",
                    "6+ months",
                    &["5G", "networking", "IoT"],
                    (2024, 9, 2),
                )
            },
            Listing {
                compensation: Some(Stipend),
                work_type: Some(Onsite),
                ..entry(
                    ListingKind::Thesis,
                    "t-002",
                    "Battery Degradation Modelling",
                    "Predict cell ageing from fleet telemetry.",
                    "Volvo Cars",
                    "Data Science",
                    "Gothenburg",
                    "3-6 months",
                    &["machine learning", "batteries"],
                    (2024, 9, 5),
                )
            },
            Listing {
                compensation: Some(Paid),
                work_type: Some(Remote),
                ..entry(
                    ListingKind::Thesis,
                    "t-003",
                    "Compiler Passes for Embedded Rust",
                    "Explore size-oriented optimisation passes.",
                    "Axis Communications",
                    "Computer Science",
                    "Lund",
                    "3-6 months",
                    &["compilers", "embedded"],
                    (2024, 9, 11),
                )
            },
            Listing {
                compensation: Some(Unpaid),
                work_type: Some(Onsite),
                ..entry(
                    ListingKind::Thesis,
                    "t-004",
                    "Supply Chain Resilience Metrics",
                    "Define indicators for supplier risk.",
                    "Scania",
                    "Industrial Economics",
                    "Södertälje",
                    "3-6 months",
                    &["logistics", "risk"],
                    (2024, 9, 14),
                )
            },
            Listing {
                compensation: Some(Paid),
                work_type: Some(Hybrid),
                ..entry(
                    ListingKind::Thesis,
                    "t-005",
                    "Power Electronics for Wind Turbines",
                    "Design a converter control loop for grid faults.",
                    "ABB",
                    "Electrical Engineering",
                    "Västerås",
                    "6+ months",
                    &["power", "control"],
                    (2024, 9, 20),
                )
            },
            Listing {
                compensation: Some(Stipend),
                work_type: Some(Remote),
                ..entry(
                    ListingKind::Thesis,
                    "t-006",
                    "Accessible Design Systems",
                    "Audit and extend a component library for WCAG 2.2.",
                    "Spotify",
                    "Design",
                    "Remote",
                    "1-3 months",
                    &["UX", "accessibility"],
                    (2024, 10, 1),
                )
            },
            Listing {
                compensation: Some(Paid),
                work_type: Some(Onsite),
                ..entry(
                    ListingKind::Thesis,
                    "t-007",
                    "Protein Folding Surrogates",
                    "Train lightweight surrogates for structure prediction.",
                    "AstraZeneca",
                    "Biotechnology",
                    "Gothenburg",
                    "6+ months",
                    &["machine learning", "biology"],
                    (2024, 10, 3),
                )
            },
            Listing {
                compensation: Some(Paid),
                work_type: Some(Hybrid),
                ..entry(
                    ListingKind::Thesis,
                    "t-008",
                    "Radio Resource Scheduling with RL",
                    "Apply reinforcement learning to uplink scheduling.",
                    "Ericsson AB",
                    "Electrical Engineering",
                    "Linköping",
                    "3-6 months",
                    &["5G", "reinforcement learning"],
                    (2024, 10, 8),
                )
            },
        ];

        let internships = vec![
            entry(
                ListingKind::Internship,
                "in-001",
                "Backend Engineering Intern",
                "Work on payment APIs in a product team.",
                "Klarna",
                "Computer Science",
                "Stockholm",
                "3-6 months",
                &["backend", "payments"],
                (2024, 8, 20),
            ),
            entry(
                ListingKind::Internship,
                "in-002",
                "Test Automation Intern",
                "Build hardware-in-the-loop test rigs.",
                "Saab",
                "Electrical Engineering",
                "Linköping",
                "1-3 months",
                &["testing", "embedded"],
                (2024, 8, 28),
            ),
            entry(
                ListingKind::Internship,
                "in-003",
                "Data Analyst Intern",
                "Analyse listener behaviour across markets.",
                "Spotify",
                "Data Science",
                "Stockholm",
                "3-6 months",
                &["analytics", "SQL"],
                (2024, 9, 3),
            ),
            entry(
                ListingKind::Internship,
                "in-004",
                "Production Engineering Intern",
                "Improve line balancing at the truck plant.",
                "Scania",
                "Mechanical Engineering",
                "Södertälje",
                "1-3 months",
                &["lean", "manufacturing"],
                (2024, 9, 9),
            ),
            entry(
                ListingKind::Internship,
                "in-005",
                "Camera Firmware Intern",
                "Port image pipeline drivers to a new SoC.",
                "Axis Communications",
                "Computer Science",
                "Lund",
                "6+ months",
                &["firmware", "embedded"],
                (2024, 9, 17),
            ),
        ];

        let ideas = vec![
            entry(
                ListingKind::Idea,
                "i-001",
                "Explainable Credit Scoring",
                "Make consumer credit decisions interpretable.",
                "KTH Royal Institute of Technology",
                "Data Science",
                "Stockholm",
                "6+ months",
                &["XAI", "finance"],
                (2024, 7, 1),
            ),
            entry(
                ListingKind::Idea,
                "i-002",
                "Digital Twins for District Heating",
                "Simulate heat networks to cut peak load.",
                "Chalmers University of Technology",
                "Mechanical Engineering",
                "Gothenburg",
                "3-6 months",
                &["simulation", "energy"],
                (2024, 7, 15),
            ),
            entry(
                ListingKind::Idea,
                "i-003",
                "Quantum Error Mitigation Benchmarks",
                "Compare mitigation schemes on noisy hardware.",
                "Lund University",
                "Physics",
                "Lund",
                "6+ months",
                &["quantum", "benchmarking"],
                (2024, 8, 2),
            ),
            entry(
                ListingKind::Idea,
                "i-004",
                "Carbon-aware CI Pipelines",
                "Schedule builds when the grid is greenest.",
                "Linköping University",
                "Computer Science",
                "Remote",
                "1-3 months",
                &["sustainability", "devops"],
                (2024, 8, 19),
            ),
        ];

        let organizations = [
            ("o-01", "Ericsson AB", "Telecom", "Stockholm", 99_000, 14),
            ("o-02", "Volvo Cars", "Automotive", "Gothenburg", 43_000, 9),
            ("o-03", "Axis Communications", "Electronics", "Lund", 4_700, 6),
            ("o-04", "Scania", "Automotive", "Södertälje", 58_000, 11),
            ("o-05", "ABB", "Industrial", "Västerås", 105_000, 7),
            ("o-06", "Spotify", "Media", "Stockholm", 9_200, 5),
            ("o-07", "AstraZeneca", "Pharma", "Gothenburg", 83_000, 8),
            ("o-08", "Klarna", "Fintech", "Stockholm", 5_000, 4),
            ("o-09", "Saab", "Defence", "Linköping", 21_000, 10),
            ("o-10", "Northvolt", "Energy", "Skellefteå", 6_000, 3),
            ("o-11", "Epidemic Sound", "Media", "Stockholm", 500, 2),
            ("o-12", "Husqvarna", "Manufacturing", "Jönköping", 14_000, 3),
        ]
        .into_iter()
        .map(
            |(id, name, industry, city, employees, open_positions)| Organization {
                id: id.to_string(),
                name: name.to_string(),
                industry: industry.to_string(),
                city: city.to_string(),
                employees,
                open_positions,
            },
        )
        .collect();

        Self {
            theses,
            internships,
            ideas,
            organizations,
        }
    }
}

impl TableRow for Organization {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.as_str().into(),
            "industry" => self.industry.as_str().into(),
            "city" => self.city.as_str().into(),
            "employees" => self.employees.into(),
            "openPositions" => self.open_positions.into(),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for Listing {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "title" => self.title.as_str().into(),
            "kind" => self.kind.as_str().into(),
            "organization" => self.organization.as_str().into(),
            "field" => self.field.as_str().into(),
            "location" => self.location.as_str().into(),
            "postedAt" => CellValue::Number(self.posted_at.timestamp() as f64),
            _ => CellValue::Empty,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    kind: ListingKind,
    id: &str,
    title: &str,
    short_description: &str,
    organization: &str,
    field: &str,
    location: &str,
    duration: &str,
    tags: &[&str],
    (year, month, day): (i32, u32, u32),
) -> Listing {
    Listing {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        short_description: short_description.to_string(),
        description: format!("{short_description} Hosted by {organization} in {location}."),
        organization: organization.to_string(),
        field: field.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        location: location.to_string(),
        duration: duration.to_string(),
        compensation: None,
        work_type: None,
        posted_at: posted(year, month, day),
        apply_url: format!("https://jobs.example.com/{}/{id}", kind.as_str()),
    }
}

fn posted(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}
