//! Domain types shared by the catalog, filter state and search engine.

pub mod bookmarks;
pub mod catalog;
pub mod debounce;
pub mod error;
pub mod filters;
pub mod location;
pub mod search;
pub mod store;
pub mod table;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three feeds a listing can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ListingKind {
    #[default]
    Thesis,
    Internship,
    Idea,
}

impl ListingKind {
    pub const ALL: [ListingKind; 3] = [Self::Thesis, Self::Internship, Self::Idea];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Thesis => "thesis",
            Self::Internship => "internship",
            Self::Idea => "idea",
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compensation {
    Paid,
    Unpaid,
    Stipend,
}

impl Compensation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
            Self::Stipend => "stipend",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    Onsite,
    Remote,
    Hybrid,
}

impl WorkType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Onsite => "onsite",
            Self::Remote => "remote",
            Self::Hybrid => "hybrid",
        }
    }
}

/// A thesis project, internship or thesis idea as shown in a feed.
///
/// Listings are immutable once the catalog has been loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub kind: ListingKind,
    pub title: String,
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    pub organization: String,
    pub field: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub location: String,
    pub duration: String,
    /// Only theses carry a compensation category.
    #[serde(default)]
    pub compensation: Option<Compensation>,
    /// Only theses carry a work mode.
    #[serde(default)]
    pub work_type: Option<WorkType>,
    pub posted_at: DateTime<Utc>,
    pub apply_url: String,
}

/// One named, multi-select filter category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Field,
    Location,
    Duration,
    Compensation,
    WorkType,
}

pub const FIELDS: &[&str] = &[
    "Computer Science",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Industrial Economics",
    "Data Science",
    "Design",
    "Biotechnology",
    "Physics",
];

pub const DURATIONS: &[&str] = &["1-3 months", "3-6 months", "6+ months"];

impl Facet {
    /// Display order of the facets, also the order chips are rendered in.
    pub const ALL: [Facet; 5] = [
        Self::Field,
        Self::Location,
        Self::Duration,
        Self::Compensation,
        Self::WorkType,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Field => "Field",
            Self::Location => "Location",
            Self::Duration => "Duration",
            Self::Compensation => "Compensation",
            Self::WorkType => "Work type",
        }
    }

    /// The listing attribute this facet matches against.
    ///
    /// Returns `None` when the listing does not carry the attribute, in which
    /// case a non-empty selection for this facet never matches.
    pub fn value_of(self, listing: &Listing) -> Option<&str> {
        match self {
            Self::Field => Some(listing.field.as_str()),
            Self::Location => Some(listing.location.as_str()),
            Self::Duration => Some(listing.duration.as_str()),
            Self::Compensation => listing.compensation.map(Compensation::as_str),
            Self::WorkType => listing.work_type.map(WorkType::as_str),
        }
    }

    /// The set of values that are meaningful for this facet.
    pub fn domain(self) -> Vec<&'static str> {
        match self {
            Self::Field => FIELDS.to_vec(),
            Self::Location => location::all_location_values(),
            Self::Duration => DURATIONS.to_vec(),
            Self::Compensation => vec![
                Compensation::Paid.as_str(),
                Compensation::Unpaid.as_str(),
                Compensation::Stipend.as_str(),
            ],
            Self::WorkType => vec![
                WorkType::Onsite.as_str(),
                WorkType::Remote.as_str(),
                WorkType::Hybrid.as_str(),
            ],
        }
    }

    pub fn in_domain(self, value: &str) -> bool {
        self.domain().contains(&value)
    }
}

pub use bookmarks::{BookmarkState, BookmarkStore};
pub use catalog::{Catalog, Organization};
pub use debounce::Debouncer;
pub use error::CoreError;
pub use filters::{FacetSelection, FilterChip, FilterState, FilterStore};
pub use location::{LocationNodeView, LocationTree};
pub use search::SearchEngine;
pub use store::{Store, SubscriptionId};
pub use table::{CellValue, Column, DataTable, SortDirection, TablePage, TableRow};
