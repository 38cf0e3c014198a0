//! Per-entity browse adapters.
//!
//! Each catalog entity pairs the generic [`Browser`] controller with a
//! small spec (columns, form fields, input conversion) so the data
//! bridge can drive all nine entities through one trait object. Form
//! conversion failures surface in the modal's error slot exactly like
//! server-side failures.

use futures::future::BoxFuture;
use uuid::Uuid;

use lcadmin_core::{
    Browser, Catalog, CoreError, EmissionCompartment, EmissionCompartmentInput, EntityKind,
    ImpactCategory, ImpactCategoryInput, ImpactMethod, ImpactMethodInput, IndustryCode,
    IndustryCodeInput, ListQuery, MidpointCategory, MidpointCategoryInput, Modal, Organization,
    OrganizationInput, PageSize, Scope, Unit, UnitGroup, UnitGroupInput, UnitInput, User,
    UserInput, UserRole,
};

use crate::action::{BrowseOp, BrowseView, FormField, ModalView, Notification, RowView};

/// Result of applying one [`BrowseOp`].
pub struct Outcome {
    pub notice: Option<Notification>,
}

impl Outcome {
    fn none() -> Self {
        Self { notice: None }
    }

    fn notify(notification: Notification) -> Self {
        Self {
            notice: Some(notification),
        }
    }
}

/// Type-erased browse adapter the data bridge drives.
pub trait EntityBrowser: Send {
    fn apply(&mut self, op: BrowseOp) -> BoxFuture<'_, Outcome>;
    fn view(&self, loading: bool) -> BrowseView;
}

// ── Spec ────────────────────────────────────────────────────────────

struct Column<T> {
    label: &'static str,
    cell: fn(&T) -> String,
}

struct EntitySpec<T, In> {
    noun: &'static str,
    columns: Vec<Column<T>>,
    /// Form fields for the add modal (`None`) or edit modal (`Some`).
    form_for: fn(Option<&T>) -> Vec<FormField>,
    to_input: fn(&[FormField]) -> Result<In, String>,
    label_of: fn(&T) -> String,
}

type ScopeLoader = fn(Catalog) -> BoxFuture<'static, Result<Vec<(Scope, String)>, CoreError>>;

struct TypedBrowser<T, In> {
    browser: Browser<T, In>,
    spec: EntitySpec<T, In>,
    catalog: Catalog,
    scope_loader: Option<ScopeLoader>,
    /// Cycle options; index 0 is always the unscoped sentinel.
    scope_options: Vec<(Scope, String)>,
    scope_index: usize,
}

impl<T, In> TypedBrowser<T, In>
where
    T: Clone + Send + Sync + 'static,
    In: Send + 'static,
{
    fn new(
        browser: Browser<T, In>,
        spec: EntitySpec<T, In>,
        catalog: Catalog,
        scope_loader: Option<ScopeLoader>,
    ) -> Self {
        Self {
            browser,
            spec,
            catalog,
            scope_loader,
            scope_options: vec![(Scope::All, "All".to_owned())],
            scope_index: 0,
        }
    }

    fn scope_label(&self) -> String {
        self.scope_options
            .get(self.scope_index)
            .map(|(_, label)| label.clone())
            .unwrap_or_else(|| "All".to_owned())
    }

    async fn cycle_scope(&mut self) -> Outcome {
        let Some(loader) = self.scope_loader else {
            return Outcome::none();
        };

        if self.scope_options.len() == 1 {
            match loader(self.catalog.clone()).await {
                Ok(options) => {
                    self.scope_options.extend(options);
                    if self.scope_options.len() == 1 {
                        return Outcome::notify(Notification::info("No scope options available"));
                    }
                }
                Err(err) => return Outcome::notify(Notification::error(err.to_string())),
            }
        }

        self.scope_index = (self.scope_index + 1) % self.scope_options.len();
        let scope = self.scope_options[self.scope_index].0;
        self.browser.set_scope(scope).await;
        Outcome::none()
    }

    async fn submit(&mut self, fields: Vec<FormField>) -> Outcome {
        match self.browser.modal() {
            Some(Modal::Add) => match (self.spec.to_input)(&fields) {
                Ok(input) => match self.browser.submit_create(input).await {
                    Ok(()) => {
                        Outcome::notify(Notification::success(format!("Created {}", self.spec.noun)))
                    }
                    // The failure message already landed in the slot.
                    Err(_) => Outcome::none(),
                },
                Err(message) => {
                    self.browser.reject_submission(message);
                    Outcome::none()
                }
            },
            Some(Modal::Edit) => match (self.spec.to_input)(&fields) {
                Ok(input) => match self.browser.submit_update(input).await {
                    Ok(()) => {
                        Outcome::notify(Notification::success(format!("Updated {}", self.spec.noun)))
                    }
                    Err(_) => Outcome::none(),
                },
                Err(message) => {
                    self.browser.reject_submission(message);
                    Outcome::none()
                }
            },
            Some(Modal::Delete) => match self.browser.submit_delete().await {
                Ok(()) => {
                    Outcome::notify(Notification::success(format!("Deleted {}", self.spec.noun)))
                }
                Err(_) => Outcome::none(),
            },
            None => Outcome::none(),
        }
    }
}

impl<T, In> EntityBrowser for TypedBrowser<T, In>
where
    T: Clone + Send + Sync + 'static,
    In: Send + 'static,
{
    fn apply(&mut self, op: BrowseOp) -> BoxFuture<'_, Outcome> {
        Box::pin(async move {
            match op {
                BrowseOp::Load => {
                    self.browser.load().await;
                    Outcome::none()
                }
                BrowseOp::Search(keyword) => {
                    self.browser.search(keyword).await;
                    Outcome::none()
                }
                BrowseOp::CyclePageSize => {
                    let next = self.browser.query().page_size().cycle();
                    self.browser.set_page_size(next).await;
                    Outcome::none()
                }
                BrowseOp::Navigate(nav) => {
                    self.browser.navigate(nav).await;
                    Outcome::none()
                }
                BrowseOp::TypePageDigit(c) => {
                    self.browser.type_page_digit(c);
                    Outcome::none()
                }
                BrowseOp::ErasePageDigit => {
                    self.browser.erase_page_digit();
                    Outcome::none()
                }
                BrowseOp::CycleScope => self.cycle_scope().await,
                BrowseOp::OpenAdd => {
                    self.browser.open_add();
                    Outcome::none()
                }
                BrowseOp::BeginEdit(id) => {
                    self.browser.begin_edit(id);
                    Outcome::none()
                }
                BrowseOp::BeginDelete(id) => {
                    self.browser.begin_delete(id);
                    Outcome::none()
                }
                BrowseOp::CloseModal => {
                    self.browser.close_modal();
                    Outcome::none()
                }
                BrowseOp::SubmitModal(fields) => self.submit(fields).await,
            }
        })
    }

    fn view(&self, loading: bool) -> BrowseView {
        let rows = self
            .browser
            .rows()
            .iter()
            .map(|row| RowView {
                id: self.browser.row_id(row),
                cells: self
                    .spec
                    .columns
                    .iter()
                    .map(|column| (column.cell)(row))
                    .collect(),
            })
            .collect();

        let modal = self.browser.modal().map(|kind| {
            let (title, fields) = match kind {
                Modal::Add => (
                    format!("Add {}", self.spec.noun),
                    (self.spec.form_for)(None),
                ),
                Modal::Edit => {
                    let label = self
                        .browser
                        .selected()
                        .map(self.spec.label_of)
                        .unwrap_or_default();
                    (
                        format!("Edit {} '{label}'", self.spec.noun),
                        (self.spec.form_for)(self.browser.selected()),
                    )
                }
                Modal::Delete => {
                    let label = self
                        .browser
                        .selected()
                        .map(self.spec.label_of)
                        .unwrap_or_default();
                    (format!("Delete {} '{label}'?", self.spec.noun), Vec::new())
                }
            };
            ModalView {
                kind,
                title,
                fields,
                error: self.browser.modal_error().map(ToOwned::to_owned),
            }
        });

        BrowseView {
            columns: self.spec.columns.iter().map(|c| c.label).collect(),
            rows,
            page: self.browser.pager().page(),
            total_pages: self.browser.pager().total_pages(),
            page_input: self.browser.pager().input().to_owned(),
            page_size: self.browser.pager().page_size().as_u32(),
            keyword: self.browser.query().keyword().to_owned(),
            scope_label: self.scope_label(),
            view_state: self.browser.query().to_query_string(),
            loading,
            list_error: self.browser.list_error().map(ToOwned::to_owned),
            modal,
        }
    }
}

// ── Form helpers ────────────────────────────────────────────────────

fn value<'a>(fields: &'a [FormField], key: &str) -> &'a str {
    fields
        .iter()
        .find(|f| f.key == key)
        .map(|f| f.value.trim())
        .unwrap_or("")
}

fn required(fields: &[FormField], key: &str, label: &str) -> Result<String, String> {
    let v = value(fields, key);
    if v.is_empty() {
        Err(format!("{label} is required"))
    } else {
        Ok(v.to_owned())
    }
}

fn optional(fields: &[FormField], key: &str) -> Option<String> {
    let v = value(fields, key);
    (!v.is_empty()).then(|| v.to_owned())
}

fn optional_uuid(fields: &[FormField], key: &str, label: &str) -> Result<Option<Uuid>, String> {
    match value(fields, key) {
        "" => Ok(None),
        v => v
            .parse()
            .map(Some)
            .map_err(|_| format!("{label} must be a UUID")),
    }
}

fn required_f64(fields: &[FormField], key: &str, label: &str) -> Result<f64, String> {
    value(fields, key)
        .parse()
        .map_err(|_| format!("{label} must be a number"))
}

fn required_bool(fields: &[FormField], key: &str, label: &str) -> Result<bool, String> {
    match value(fields, key).to_lowercase().as_str() {
        "yes" | "true" | "y" => Ok(true),
        "no" | "false" | "n" | "" => Ok(false),
        _ => Err(format!("{label} must be yes or no")),
    }
}

fn opt_str(v: Option<&str>) -> String {
    v.unwrap_or("").to_owned()
}

fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}

// ── Per-entity specs ────────────────────────────────────────────────

fn method_spec() -> EntitySpec<ImpactMethod, ImpactMethodInput> {
    EntitySpec {
        noun: "impact method",
        columns: vec![
            Column {
                label: "Name",
                cell: |m: &ImpactMethod| m.name.clone(),
            },
            Column {
                label: "Version",
                cell: |m| opt_str(m.version.as_deref()),
            },
            Column {
                label: "Perspective",
                cell: |m| {
                    m.perspective
                        .as_ref()
                        .map(|p| p.name.clone())
                        .unwrap_or_default()
                },
            },
        ],
        form_for: |current| {
            vec![
                FormField::new("name", "Name", opt_str(current.map(|m| m.name.as_str()))),
                FormField::new(
                    "description",
                    "Description",
                    opt_str(current.and_then(|m| m.description.as_deref())),
                ),
                FormField::new(
                    "version",
                    "Version",
                    opt_str(current.and_then(|m| m.version.as_deref())),
                ),
                FormField::new(
                    "reference",
                    "Reference",
                    opt_str(current.and_then(|m| m.reference.as_deref())),
                ),
                FormField::new(
                    "perspectiveId",
                    "Perspective ID",
                    current
                        .and_then(|m| m.perspective.as_ref())
                        .map(|p| p.id.to_string())
                        .unwrap_or_default(),
                ),
            ]
        },
        to_input: |fields| {
            Ok(ImpactMethodInput {
                name: required(fields, "name", "Name")?,
                description: optional(fields, "description"),
                version: optional(fields, "version"),
                reference: optional(fields, "reference"),
                perspective_id: optional_uuid(fields, "perspectiveId", "Perspective ID")?,
            })
        },
        label_of: |m| m.name.clone(),
    }
}

fn category_spec() -> EntitySpec<ImpactCategory, ImpactCategoryInput> {
    EntitySpec {
        noun: "impact category",
        columns: vec![
            Column {
                label: "Name",
                cell: |c: &ImpactCategory| c.name.clone(),
            },
            Column {
                label: "Indicator",
                cell: |c| c.indicator_name.clone(),
            },
            Column {
                label: "Unit",
                cell: |c| c.unit.as_ref().map(|u| u.name.clone()).unwrap_or_default(),
            },
            Column {
                label: "Compartment",
                cell: |c| match &c.emission_compartment {
                    Some(compartment) => compartment.name.clone(),
                    None => String::new(),
                },
            },
        ],
        form_for: |current| {
            vec![
                FormField::new("name", "Name", opt_str(current.map(|c| c.name.as_str()))),
                FormField::new(
                    "indicatorName",
                    "Indicator",
                    opt_str(current.map(|c| c.indicator_name.as_str())),
                ),
                FormField::new(
                    "indicatorDescription",
                    "Indicator description",
                    opt_str(current.and_then(|c| c.indicator_description.as_deref())),
                ),
                FormField::new(
                    "unitId",
                    "Unit ID",
                    current
                        .and_then(|c| c.unit.as_ref())
                        .map(|u| u.id.to_string())
                        .unwrap_or_default(),
                ),
                FormField::new(
                    "midpointCategoryId",
                    "Midpoint ID",
                    current
                        .and_then(|c| c.midpoint_category.as_ref())
                        .map(|m| m.id.to_string())
                        .unwrap_or_default(),
                ),
                FormField::new(
                    "emissionCompartmentId",
                    "Compartment ID",
                    current
                        .and_then(|c| c.emission_compartment.as_ref())
                        .map(|e| e.id.to_string())
                        .unwrap_or_default(),
                ),
            ]
        },
        to_input: |fields| {
            Ok(ImpactCategoryInput {
                name: required(fields, "name", "Name")?,
                indicator_name: required(fields, "indicatorName", "Indicator")?,
                indicator_description: optional(fields, "indicatorDescription"),
                unit_id: optional_uuid(fields, "unitId", "Unit ID")?,
                midpoint_category_id: optional_uuid(fields, "midpointCategoryId", "Midpoint ID")?,
                emission_compartment_id: optional_uuid(
                    fields,
                    "emissionCompartmentId",
                    "Compartment ID",
                )?,
            })
        },
        label_of: |c| c.name.clone(),
    }
}

fn midpoint_spec() -> EntitySpec<MidpointCategory, MidpointCategoryInput> {
    EntitySpec {
        noun: "midpoint category",
        columns: vec![
            Column {
                label: "Name",
                cell: |m: &MidpointCategory| m.name.clone(),
            },
            Column {
                label: "Abbr",
                cell: |m| opt_str(m.abbr.as_deref()),
            },
        ],
        form_for: |current| {
            vec![
                FormField::new("name", "Name", opt_str(current.map(|m| m.name.as_str()))),
                FormField::new(
                    "abbr",
                    "Abbreviation",
                    opt_str(current.and_then(|m| m.abbr.as_deref())),
                ),
                FormField::new(
                    "description",
                    "Description",
                    opt_str(current.and_then(|m| m.description.as_deref())),
                ),
            ]
        },
        to_input: |fields| {
            Ok(MidpointCategoryInput {
                name: required(fields, "name", "Name")?,
                abbr: optional(fields, "abbr"),
                description: optional(fields, "description"),
            })
        },
        label_of: |m| m.name.clone(),
    }
}

fn unit_spec() -> EntitySpec<Unit, UnitInput> {
    EntitySpec {
        noun: "unit",
        columns: vec![
            Column {
                label: "Name",
                cell: |u: &Unit| u.name.clone(),
            },
            Column {
                label: "Factor",
                cell: |u| u.conversion_factor.to_string(),
            },
            Column {
                label: "Default",
                cell: |u| if u.is_default { "yes".into() } else { String::new() },
            },
            Column {
                label: "Group",
                cell: |u| {
                    u.unit_group
                        .as_ref()
                        .map(|g| g.name.clone())
                        .unwrap_or_default()
                },
            },
        ],
        form_for: |current| {
            vec![
                FormField::new("name", "Name", opt_str(current.map(|u| u.name.as_str()))),
                FormField::new(
                    "conversionFactor",
                    "Conversion factor",
                    current
                        .map(|u| u.conversion_factor.to_string())
                        .unwrap_or_else(|| "1".into()),
                ),
                FormField::new(
                    "isDefault",
                    "Default unit (yes/no)",
                    current.map(|u| yes_no(u.is_default)).unwrap_or("no"),
                ),
                FormField::new(
                    "unitGroupId",
                    "Unit group ID",
                    current
                        .and_then(|u| u.unit_group.as_ref())
                        .map(|g| g.id.to_string())
                        .unwrap_or_default(),
                ),
            ]
        },
        to_input: |fields| {
            Ok(UnitInput {
                name: required(fields, "name", "Name")?,
                conversion_factor: required_f64(fields, "conversionFactor", "Conversion factor")?,
                is_default: required_bool(fields, "isDefault", "Default unit")?,
                unit_group_id: optional_uuid(fields, "unitGroupId", "Unit group ID")?,
            })
        },
        label_of: |u| u.name.clone(),
    }
}

fn unit_group_spec() -> EntitySpec<UnitGroup, UnitGroupInput> {
    EntitySpec {
        noun: "unit group",
        columns: vec![Column {
            label: "Name",
            cell: |g: &UnitGroup| g.name.clone(),
        }],
        form_for: |current| {
            vec![FormField::new(
                "name",
                "Name",
                opt_str(current.map(|g| g.name.as_str())),
            )]
        },
        to_input: |fields| {
            Ok(UnitGroupInput {
                name: required(fields, "name", "Name")?,
            })
        },
        label_of: |g| g.name.clone(),
    }
}

fn organization_spec() -> EntitySpec<Organization, OrganizationInput> {
    EntitySpec {
        noun: "organization",
        columns: vec![
            Column {
                label: "Name",
                cell: |o: &Organization| o.name.clone(),
            },
            Column {
                label: "Tax code",
                cell: |o| opt_str(o.tax_code.as_deref()),
            },
            Column {
                label: "Industries",
                cell: |o| {
                    o.industry_codes
                        .iter()
                        .map(|c| c.code.clone())
                        .collect::<Vec<_>>()
                        .join(", ")
                },
            },
        ],
        form_for: |current| {
            vec![
                FormField::new("name", "Name", opt_str(current.map(|o| o.name.as_str()))),
                FormField::new(
                    "description",
                    "Description",
                    opt_str(current.and_then(|o| o.description.as_deref())),
                ),
                FormField::new(
                    "taxCode",
                    "Tax code",
                    opt_str(current.and_then(|o| o.tax_code.as_deref())),
                ),
                FormField::new(
                    "industryCodeIds",
                    "Industry code IDs (comma-separated)",
                    current
                        .map(|o| {
                            o.industry_codes
                                .iter()
                                .map(|c| c.id.to_string())
                                .collect::<Vec<_>>()
                                .join(",")
                        })
                        .unwrap_or_default(),
                ),
            ]
        },
        to_input: |fields| {
            let ids = value(fields, "industryCodeIds");
            let industry_code_ids = if ids.is_empty() {
                Vec::new()
            } else {
                ids.split(',')
                    .map(|s| {
                        s.trim()
                            .parse()
                            .map_err(|_| "Industry code IDs must be UUIDs".to_owned())
                    })
                    .collect::<Result<Vec<Uuid>, String>>()?
            };
            Ok(OrganizationInput {
                name: required(fields, "name", "Name")?,
                description: optional(fields, "description"),
                tax_code: optional(fields, "taxCode"),
                industry_code_ids,
            })
        },
        label_of: |o| o.name.clone(),
    }
}

fn industry_code_spec() -> EntitySpec<IndustryCode, IndustryCodeInput> {
    EntitySpec {
        noun: "industry code",
        columns: vec![
            Column {
                label: "Code",
                cell: |c: &IndustryCode| c.code.clone(),
            },
            Column {
                label: "Name",
                cell: |c| c.name.clone(),
            },
        ],
        form_for: |current| {
            vec![
                FormField::new("code", "Code", opt_str(current.map(|c| c.code.as_str()))),
                FormField::new("name", "Name", opt_str(current.map(|c| c.name.as_str()))),
            ]
        },
        to_input: |fields| {
            Ok(IndustryCodeInput {
                code: required(fields, "code", "Code")?,
                name: required(fields, "name", "Name")?,
            })
        },
        label_of: |c| c.code.clone(),
    }
}

fn compartment_spec() -> EntitySpec<EmissionCompartment, EmissionCompartmentInput> {
    EntitySpec {
        noun: "emission compartment",
        columns: vec![
            Column {
                label: "Name",
                cell: |c: &EmissionCompartment| c.name.clone(),
            },
            Column {
                label: "Description",
                cell: |c| opt_str(c.description.as_deref()),
            },
        ],
        form_for: |current| {
            vec![
                FormField::new("name", "Name", opt_str(current.map(|c| c.name.as_str()))),
                FormField::new(
                    "description",
                    "Description",
                    opt_str(current.and_then(|c| c.description.as_deref())),
                ),
            ]
        },
        to_input: |fields| {
            Ok(EmissionCompartmentInput {
                name: required(fields, "name", "Name")?,
                description: optional(fields, "description"),
            })
        },
        label_of: |c| c.name.clone(),
    }
}

fn user_spec() -> EntitySpec<User, UserInput> {
    EntitySpec {
        noun: "user",
        columns: vec![
            Column {
                label: "Username",
                cell: |u: &User| u.user_name.clone(),
            },
            Column {
                label: "Email",
                cell: |u| u.email.clone(),
            },
            Column {
                label: "Role",
                cell: |u| u.role.to_string(),
            },
            Column {
                label: "Active",
                cell: |u| yes_no(u.active).to_owned(),
            },
        ],
        form_for: |current| {
            let mut fields = vec![
                FormField::new(
                    "userName",
                    "Username",
                    opt_str(current.map(|u| u.user_name.as_str())),
                ),
                FormField::new("email", "Email", opt_str(current.map(|u| u.email.as_str()))),
                FormField::new(
                    "role",
                    "Role (admin/manager)",
                    current
                        .map(|u| u.role.to_string())
                        .unwrap_or_else(|| "manager".into()),
                ),
                FormField::new(
                    "active",
                    "Active (yes/no)",
                    current.map(|u| yes_no(u.active)).unwrap_or("yes"),
                ),
            ];
            // Only new accounts get a password here.
            if current.is_none() {
                fields.push(FormField::new("password", "Initial password", ""));
            }
            fields
        },
        to_input: |fields| {
            let role = match value(fields, "role").to_lowercase().as_str() {
                "admin" => UserRole::Admin,
                "manager" | "" => UserRole::Manager,
                other => return Err(format!("Unknown role '{other}'")),
            };
            Ok(UserInput {
                user_name: required(fields, "userName", "Username")?,
                email: required(fields, "email", "Email")?,
                role,
                active: required_bool(fields, "active", "Active")?,
                password: optional(fields, "password"),
            })
        },
        label_of: |u| u.user_name.clone(),
    }
}

// ── Scope loaders ───────────────────────────────────────────────────

fn method_scope_loader(catalog: Catalog) -> BoxFuture<'static, Result<Vec<(Scope, String)>, CoreError>> {
    Box::pin(async move {
        let mut query = ListQuery::new();
        query.set_page_size(PageSize::Twenty);
        let page = catalog.impact_methods(&query).await?;
        Ok(page
            .items
            .into_iter()
            .map(|m| (Scope::Method(m.id), format!("Method: {}", m.name)))
            .collect())
    })
}

fn unit_group_scope_loader(
    catalog: Catalog,
) -> BoxFuture<'static, Result<Vec<(Scope, String)>, CoreError>> {
    Box::pin(async move {
        let groups = catalog.unit_groups_all().await?;
        Ok(groups
            .into_iter()
            .map(|g| (Scope::UnitGroup(g.id), format!("Group: {}", g.name)))
            .collect())
    })
}

// ── Assembly ────────────────────────────────────────────────────────

/// Build one browse adapter per entity kind.
pub fn build_browsers(catalog: &Catalog) -> Vec<(EntityKind, Box<dyn EntityBrowser>)> {
    vec![
        (
            EntityKind::ImpactMethod,
            Box::new(TypedBrowser::new(
                Browser::new(catalog.impact_method_ops()),
                method_spec(),
                catalog.clone(),
                None,
            )) as Box<dyn EntityBrowser>,
        ),
        (
            EntityKind::ImpactCategory,
            Box::new(TypedBrowser::new(
                Browser::new(catalog.impact_category_ops()),
                category_spec(),
                catalog.clone(),
                Some(method_scope_loader),
            )),
        ),
        (
            EntityKind::MidpointCategory,
            Box::new(TypedBrowser::new(
                Browser::new(catalog.midpoint_category_ops()),
                midpoint_spec(),
                catalog.clone(),
                None,
            )),
        ),
        (
            EntityKind::Unit,
            Box::new(TypedBrowser::new(
                Browser::new(catalog.unit_ops()),
                unit_spec(),
                catalog.clone(),
                Some(unit_group_scope_loader),
            )),
        ),
        (
            EntityKind::UnitGroup,
            Box::new(TypedBrowser::new(
                Browser::new(catalog.unit_group_ops()),
                unit_group_spec(),
                catalog.clone(),
                None,
            )),
        ),
        (
            EntityKind::Organization,
            Box::new(TypedBrowser::new(
                Browser::new(catalog.organization_ops()),
                organization_spec(),
                catalog.clone(),
                None,
            )),
        ),
        (
            EntityKind::IndustryCode,
            Box::new(TypedBrowser::new(
                Browser::new(catalog.industry_code_ops()),
                industry_code_spec(),
                catalog.clone(),
                None,
            )),
        ),
        (
            EntityKind::EmissionCompartment,
            Box::new(TypedBrowser::new(
                Browser::new(catalog.emission_compartment_ops()),
                compartment_spec(),
                catalog.clone(),
                None,
            )),
        ),
        (
            EntityKind::User,
            Box::new(TypedBrowser::new(
                Browser::new(catalog.user_ops()),
                user_spec(),
                catalog.clone(),
                None,
            )),
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&'static str, &str)]) -> Vec<FormField> {
        pairs
            .iter()
            .map(|(key, v)| FormField::new(key, key, *v))
            .collect()
    }

    #[test]
    fn unit_input_parses_factor_and_default() {
        let spec = unit_spec();
        let input = (spec.to_input)(&fields(&[
            ("name", "kg"),
            ("conversionFactor", "1"),
            ("isDefault", "yes"),
            ("unitGroupId", ""),
        ]))
        .expect("valid input");
        assert_eq!(input.name, "kg");
        assert!(input.is_default);
        assert!(input.unit_group_id.is_none());
    }

    #[test]
    fn unit_input_rejects_bad_factor() {
        let spec = unit_spec();
        let err = (spec.to_input)(&fields(&[
            ("name", "kg"),
            ("conversionFactor", "heavy"),
            ("isDefault", "no"),
        ]))
        .unwrap_err();
        assert_eq!(err, "Conversion factor must be a number");
    }

    #[test]
    fn missing_required_field_names_the_label() {
        let spec = compartment_spec();
        let err = (spec.to_input)(&fields(&[("name", ""), ("description", "x")])).unwrap_err();
        assert_eq!(err, "Name is required");
    }

    #[test]
    fn user_form_only_asks_password_on_create() {
        let spec = user_spec();
        let add_fields = (spec.form_for)(None);
        assert!(add_fields.iter().any(|f| f.key == "password"));

        let user = User {
            id: Uuid::from_u128(1),
            user_name: "mara".into(),
            email: "mara@example.com".into(),
            role: UserRole::Admin,
            active: true,
            created_at: None,
        };
        let edit_fields = (spec.form_for)(Some(&user));
        assert!(edit_fields.iter().all(|f| f.key != "password"));
    }

    #[test]
    fn organization_input_splits_industry_ids() {
        let spec = organization_spec();
        let id_a = Uuid::from_u128(0xa).to_string();
        let id_b = Uuid::from_u128(0xb).to_string();
        let joined = format!("{id_a}, {id_b}");
        let input = (spec.to_input)(&fields(&[
            ("name", "Acme"),
            ("industryCodeIds", joined.as_str()),
        ]))
        .expect("valid input");
        assert_eq!(input.industry_code_ids.len(), 2);
    }
}
