//! Wire types for the catalog backend's JSON payloads.
//!
//! All types match the backend responses 1:1; field names use camelCase
//! via `#[serde(rename_all = "camelCase")]`. Cross-entity references are
//! `Option<T>` -- a category without a compartment deserializes to
//! `None` and callers must handle both branches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Impact methods ───────────────────────────────────────────────────

/// LCIA perspective attached to an impact method (e.g. Hierarchist).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perspective {
    pub id: Uuid,
    pub name: String,
    pub abbr: Option<String>,
}

/// Impact assessment method -- from `GET /api/impact-methods`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMethod {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub reference: Option<String>,
    pub perspective: Option<Perspective>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMethodInput {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub reference: Option<String>,
    pub perspective_id: Option<Uuid>,
}

// ── Impact categories ────────────────────────────────────────────────

/// Shallow unit reference embedded in other entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRef {
    pub id: Uuid,
    pub name: String,
}

/// Shallow midpoint reference embedded in impact categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MidpointRef {
    pub id: Uuid,
    pub name: String,
    pub abbr: Option<String>,
}

/// Impact category -- from `GET /api/impact-categories`.
///
/// `emission_compartment` is absent for categories that aggregate over
/// all compartments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactCategory {
    pub id: Uuid,
    pub name: String,
    pub indicator_name: String,
    pub indicator_description: Option<String>,
    pub unit: Option<UnitRef>,
    pub midpoint_category: Option<MidpointRef>,
    pub emission_compartment: Option<EmissionCompartment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactCategoryInput {
    pub name: String,
    pub indicator_name: String,
    pub indicator_description: Option<String>,
    pub unit_id: Option<Uuid>,
    pub midpoint_category_id: Option<Uuid>,
    pub emission_compartment_id: Option<Uuid>,
}

// ── Midpoint categories ──────────────────────────────────────────────

/// Midpoint impact category -- from `GET /api/midpoint-categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MidpointCategory {
    pub id: Uuid,
    pub name: String,
    pub abbr: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MidpointCategoryInput {
    pub name: String,
    pub abbr: Option<String>,
    pub description: Option<String>,
}

// ── Emission compartments ────────────────────────────────────────────

/// Emission compartment (air, freshwater, soil, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionCompartment {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionCompartmentInput {
    pub name: String,
    pub description: Option<String>,
}

// ── Units ────────────────────────────────────────────────────────────

/// Shallow unit-group reference embedded in units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitGroupRef {
    pub id: Uuid,
    pub name: String,
}

/// Measurement unit -- from `GET /api/units`.
///
/// `conversion_factor` converts a value in this unit to the group's
/// default unit; the default unit itself has factor 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: Uuid,
    pub name: String,
    pub conversion_factor: f64,
    pub is_default: bool,
    pub unit_group: Option<UnitGroupRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitInput {
    pub name: String,
    pub conversion_factor: f64,
    pub is_default: bool,
    pub unit_group_id: Option<Uuid>,
}

/// Unit group -- from `GET /api/unit-groups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitGroup {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitGroupInput {
    pub name: String,
}

// ── Organizations ────────────────────────────────────────────────────

/// Organization -- from `GET /api/organizations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub tax_code: Option<String>,
    #[serde(default)]
    pub industry_codes: Vec<IndustryCode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationInput {
    pub name: String,
    pub description: Option<String>,
    pub tax_code: Option<String>,
    #[serde(default)]
    pub industry_code_ids: Vec<Uuid>,
}

// ── Industry codes ───────────────────────────────────────────────────

/// ISIC industry code -- from `GET /api/industry-codes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryCode {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryCodeInput {
    pub code: String,
    pub name: String,
}

// ── Users ────────────────────────────────────────────────────────────

/// Console role. Admins manage users; managers manage reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Manager,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Manager => write!(f, "manager"),
        }
    }
}

/// Console user account -- from `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub role: UserRole,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub user_name: String,
    pub email: String,
    pub role: UserRole,
    pub active: bool,
    /// Only sent on create; updates never change passwords here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

// ── Session ──────────────────────────────────────────────────────────

/// Payload of a successful `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

// ── Dashboard ────────────────────────────────────────────────────────

/// Per-entity record counts -- from `GET /api/dashboard/summary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub impact_methods: u64,
    pub impact_categories: u64,
    pub midpoint_categories: u64,
    pub units: u64,
    pub unit_groups: u64,
    pub organizations: u64,
    pub industry_codes: u64,
    pub emission_compartments: u64,
    pub users: u64,
    pub emission_factors: u64,
}

// ── Emission factors ─────────────────────────────────────────────────

/// Result of a bulk emission-factor import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub imported: u32,
    pub skipped: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}
