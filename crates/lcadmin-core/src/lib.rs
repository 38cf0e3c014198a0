//! Interaction logic between `lcadmin-api` and the UI binaries (CLI / TUI).
//!
//! This crate owns everything both front ends share:
//!
//! - **[`Catalog`]** — facade over the HTTP client: typed per-entity list
//!   and mutation operations, scope-filter routing (a scoped filter set to
//!   "all" switches to the unscoped endpoint), query caching, and the
//!   explicit session lifecycle (login → bearer client swap → logout).
//!
//! - **[`Pager`]** — the pagination state machine
//!   (first/prev/next/last/typed jump/page size) with bounds clamping.
//!
//! - **[`ListQuery`]** — filter/pagination state with the reset-to-page-1
//!   rules and a query-string form both binaries accept and mirror.
//!
//! - **[`Browser`]** — one generic paginated-resource CRUD controller,
//!   parameterized by an entity's operations; owns the selected row, the
//!   modal lifecycle, and per-operation error slots.
//!
//! - **[`QueryCache`]** — concurrent page cache keyed by every argument
//!   that changes a response.

pub mod browse;
pub mod cache;
pub mod catalog;
pub mod entity;
pub mod error;
pub mod pager;
pub mod query;
pub mod search;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use browse::{Browser, Modal, Nav, ResourceOps, UNKNOWN_ERROR};
pub use cache::{QueryCache, QueryKey};
pub use catalog::{Catalog, CatalogConfig};
pub use entity::EntityKind;
pub use error::CoreError;
pub use pager::{PageSize, Pager};
pub use query::{ListQuery, Scope};
pub use session::Session;

// Re-export the wire model at the crate root for ergonomics.
pub use lcadmin_api::Page;
pub use lcadmin_api::types::{
    DashboardSummary,
    EmissionCompartment,
    EmissionCompartmentInput,
    ImpactCategory,
    ImpactCategoryInput,
    ImpactMethod,
    ImpactMethodInput,
    ImportSummary,
    IndustryCode,
    IndustryCodeInput,
    MidpointCategory,
    MidpointCategoryInput,
    Organization,
    OrganizationInput,
    Perspective,
    Unit,
    UnitGroup,
    UnitGroupInput,
    UnitInput,
    User,
    UserInput,
    UserRole,
};
