//! Actions and view-model types flowing through the app's channel.
//!
//! Screens dispatch [`BrowseOp`]s; the data bridge answers with
//! [`BrowseView`] snapshots. Screens never hold entity types -- they
//! render the snapshot the bridge last sent.

use uuid::Uuid;

use lcadmin_core::{DashboardSummary, EntityKind, Modal, Nav};

use crate::screen::ScreenId;

/// All actions the app loop processes.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ────────────────────────────────────────────────────
    Tick,
    Render,
    Resize(u16, u16),
    Quit,

    // ── Navigation ───────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    GoBack,
    ToggleHelp,

    // ── Session / connection ─────────────────────────────────────────
    Connecting,
    Connected { user: String },
    Disconnected(String),

    // ── Notifications ────────────────────────────────────────────────
    Notify(Notification),
    DismissNotification,

    // ── Browse pipeline ──────────────────────────────────────────────
    /// Screen request, routed to the data bridge.
    Browse(EntityKind, BrowseOp),
    /// Bridge response, routed to the owning screen.
    BrowseView(EntityKind, Box<BrowseView>),

    // ── Dashboard ────────────────────────────────────────────────────
    RequestDashboard,
    DashboardUpdated(DashboardSummary),
}

// ── Browse operations ───────────────────────────────────────────────

/// One interaction against an entity's browse controller.
#[derive(Debug, Clone)]
pub enum BrowseOp {
    Load,
    Search(String),
    CyclePageSize,
    Navigate(Nav),
    TypePageDigit(char),
    ErasePageDigit,
    /// Advance the scope filter (method / unit-group selectors); a
    /// no-op for unscoped entities.
    CycleScope,
    OpenAdd,
    BeginEdit(Uuid),
    BeginDelete(Uuid),
    CloseModal,
    /// Submit the open modal with the edited form fields (ignored for
    /// delete confirmations).
    SubmitModal(Vec<FormField>),
}

/// One editable field of an add/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl FormField {
    pub fn new(key: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            label,
            value: value.into(),
        }
    }
}

// ── Browse view snapshots ───────────────────────────────────────────

/// Render snapshot of one entity's browse state.
#[derive(Debug, Clone, Default)]
pub struct BrowseView {
    pub columns: Vec<&'static str>,
    pub rows: Vec<RowView>,
    pub page: u32,
    pub total_pages: u32,
    pub page_input: String,
    pub page_size: u32,
    pub keyword: String,
    pub scope_label: String,
    /// Query-string form of the current view, mirrored on every change
    /// (replace semantics); paste it into `lcadmin … list --query` to
    /// reopen the same view.
    pub view_state: String,
    pub loading: bool,
    pub list_error: Option<String>,
    pub modal: Option<ModalView>,
}

/// One table row: the entity id plus pre-rendered cells.
#[derive(Debug, Clone)]
pub struct RowView {
    pub id: Uuid,
    pub cells: Vec<String>,
}

/// The open modal, ready to render.
#[derive(Debug, Clone)]
pub struct ModalView {
    pub kind: Modal,
    pub title: String,
    /// Empty for delete confirmations.
    pub fields: Vec<FormField>,
    pub error: Option<String>,
}

// ── Notifications ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Warning,
    Info,
}

/// A transient toast message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
        }
    }
}
