// ── Catalog facade ──
//
// Central entry point for both binaries. Owns the HTTP client, the
// query cache, and the session lifecycle; exposes typed per-entity
// list/get/create/update/delete operations with operation context on
// every failure, plus the `ResourceOps` bundles the generic browse
// controller is instantiated with.
//
// Scope routing happens here: a scoped filter set to the `all`
// sentinel calls the unscoped endpoint -- the backends differ, this is
// not a client-side filter. Entities whose endpoints return the full
// set (midpoints, unit groups, compartments) are paginated and
// keyword-filtered client side; industry codes paginate server-side
// but have no server keyword, so the fallback filter runs over the
// loaded page only.

use std::sync::Arc;

use arc_swap::{ArcSwap, ArcSwapOption};
use futures::future::BoxFuture;
use secrecy::SecretString;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::browse::ResourceOps;
use crate::cache::{QueryCache, QueryKey};
use crate::entity::EntityKind;
use crate::error::CoreError;
use crate::query::{ListQuery, Scope, paginate_full};
use crate::search::filter_keyword;
use crate::session::Session;
use lcadmin_api::types::{
    DashboardSummary, EmissionCompartment, EmissionCompartmentInput, ImpactCategory,
    ImpactCategoryInput, ImpactMethod, ImpactMethodInput, ImportSummary, IndustryCode,
    IndustryCodeInput, MidpointCategory, MidpointCategoryInput, Organization, OrganizationInput,
    Perspective, Unit, UnitGroup, UnitGroupInput, UnitInput, User, UserInput,
};
use lcadmin_api::{CatalogClient, Page, TransportConfig};

/// Everything needed to reach one catalog backend.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub transport: TransportConfig,
}

/// The main entry point for consumers. Cheaply cloneable.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    config: CatalogConfig,
    /// Swapped for a bearer-carrying client on login.
    client: ArcSwap<CatalogClient>,
    session: ArcSwapOption<Session>,
    cache: QueryCache,
}

impl Catalog {
    /// Build an unauthenticated catalog handle. No network happens
    /// until the first call.
    pub fn new(config: CatalogConfig) -> Result<Self, CoreError> {
        let client = CatalogClient::anonymous(&config.base_url, &config.transport)
            .map_err(CoreError::ctx("Failed to initialize catalog client"))?;
        Ok(Self {
            inner: Arc::new(CatalogInner {
                config,
                client: ArcSwap::from_pointee(client),
                session: ArcSwapOption::empty(),
                cache: QueryCache::new(),
            }),
        })
    }

    fn client(&self) -> Arc<CatalogClient> {
        self.inner.client.load_full()
    }

    fn cache(&self) -> &QueryCache {
        &self.inner.cache
    }

    // ── Session lifecycle ────────────────────────────────────────────

    /// Exchange credentials for a session and swap in a bearer client.
    pub async fn login(
        &self,
        user_name: &str,
        password: &SecretString,
    ) -> Result<User, CoreError> {
        let login = self
            .client()
            .login(user_name, password)
            .await
            .map_err(CoreError::ctx("Login failed"))?;

        let token: SecretString = login.token.into();
        self.install_session(Session::new(login.user.clone(), token))?;
        debug!("signed in as {}", login.user.user_name);
        Ok(login.user)
    }

    /// Adopt an existing token: build the bearer client, then fetch the
    /// profile behind it (the session's fetch-on-load init).
    pub async fn resume(&self, token: SecretString) -> Result<User, CoreError> {
        let client = CatalogClient::with_token(
            &self.inner.config.base_url,
            &token,
            &self.inner.config.transport,
        )
        .map_err(CoreError::ctx("Failed to initialize catalog client"))?;

        let user = client
            .me()
            .await
            .map_err(CoreError::ctx("Failed to resume session"))?;

        self.inner.client.store(Arc::new(client));
        self.inner
            .session
            .store(Some(Arc::new(Session::new(user.clone(), token))));
        Ok(user)
    }

    /// Tear the session down: best-effort server logout, then drop the
    /// token, revert to the anonymous client, and clear the cache.
    pub async fn logout(&self) -> Result<(), CoreError> {
        if self.inner.session.load().is_some() {
            if let Err(err) = self.client().logout().await {
                warn!("server logout failed: {err}");
            }
        }

        let client =
            CatalogClient::anonymous(&self.inner.config.base_url, &self.inner.config.transport)
                .map_err(CoreError::ctx("Failed to initialize catalog client"))?;
        self.inner.client.store(Arc::new(client));
        self.inner.session.store(None);
        self.cache().clear();
        Ok(())
    }

    fn install_session(&self, session: Session) -> Result<(), CoreError> {
        let client = CatalogClient::with_token(
            &self.inner.config.base_url,
            session.token(),
            &self.inner.config.transport,
        )
        .map_err(CoreError::ctx("Failed to initialize catalog client"))?;
        self.inner.client.store(Arc::new(client));
        self.inner.session.store(Some(Arc::new(session)));
        Ok(())
    }

    pub fn session(&self) -> Option<Arc<Session>> {
        self.inner.session.load_full()
    }

    pub fn current_user(&self) -> Option<User> {
        self.session().map(|s| s.user().clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.session.load().is_some()
    }

    // ── Cached fetch helpers ─────────────────────────────────────────

    async fn cached_page<T, F>(
        &self,
        entity: EntityKind,
        query: &ListQuery,
        fetch: F,
    ) -> Result<Page<T>, CoreError>
    where
        T: Clone + Send + Sync + 'static,
        F: AsyncFnOnce() -> Result<Page<T>, CoreError>,
    {
        let key = QueryKey::new(entity, query);
        if let Some(page) = self.cache().get::<Page<T>>(&key) {
            return Ok(page);
        }
        let page = fetch().await?;
        self.cache().insert(key, page.clone());
        Ok(page)
    }

    async fn cached_full<T, F>(&self, entity: EntityKind, fetch: F) -> Result<Vec<T>, CoreError>
    where
        T: Clone + Send + Sync + 'static,
        F: AsyncFnOnce() -> Result<Vec<T>, CoreError>,
    {
        let key = QueryKey::full_list(entity);
        if let Some(all) = self.cache().get::<Vec<T>>(&key) {
            return Ok(all);
        }
        let all = fetch().await?;
        self.cache().insert(key, all.clone());
        Ok(all)
    }

    // ── Impact methods ───────────────────────────────────────────────

    pub async fn impact_methods(&self, query: &ListQuery) -> Result<Page<ImpactMethod>, CoreError> {
        self.cached_page(EntityKind::ImpactMethod, query, async || {
            self.client()
                .list_impact_methods(query.page(), query.page_size_u32(), query.keyword_opt())
                .await
                .map_err(CoreError::ctx("Failed to fetch impact methods"))
        })
        .await
    }

    pub async fn impact_method(&self, id: Uuid) -> Result<ImpactMethod, CoreError> {
        self.client()
            .get_impact_method(id)
            .await
            .map_err(CoreError::ctx("Failed to fetch impact method"))
    }

    pub async fn create_impact_method(
        &self,
        input: &ImpactMethodInput,
    ) -> Result<ImpactMethod, CoreError> {
        let created = self
            .client()
            .create_impact_method(input)
            .await
            .map_err(CoreError::ctx("Failed to create impact method"))?;
        self.cache().invalidate(EntityKind::ImpactMethod);
        Ok(created)
    }

    pub async fn update_impact_method(
        &self,
        id: Uuid,
        input: &ImpactMethodInput,
    ) -> Result<ImpactMethod, CoreError> {
        let updated = self
            .client()
            .update_impact_method(id, input)
            .await
            .map_err(CoreError::ctx("Failed to update impact method"))?;
        self.cache().invalidate(EntityKind::ImpactMethod);
        self.cache().invalidate(EntityKind::ImpactCategory);
        Ok(updated)
    }

    pub async fn delete_impact_method(&self, id: Uuid) -> Result<(), CoreError> {
        self.client()
            .delete_impact_method(id)
            .await
            .map_err(CoreError::ctx("Failed to delete impact method"))?;
        self.cache().invalidate(EntityKind::ImpactMethod);
        self.cache().invalidate(EntityKind::ImpactCategory);
        Ok(())
    }

    pub async fn perspectives(&self) -> Result<Vec<Perspective>, CoreError> {
        self.client()
            .list_perspectives()
            .await
            .map_err(CoreError::ctx("Failed to fetch perspectives"))
    }

    // ── Impact categories ────────────────────────────────────────────

    /// List categories, routed by scope: by method, by compartment, or
    /// the flat collection for `Scope::All`.
    pub async fn impact_categories(
        &self,
        query: &ListQuery,
    ) -> Result<Page<ImpactCategory>, CoreError> {
        self.cached_page(EntityKind::ImpactCategory, query, async || {
            let (page, size, keyword) =
                (query.page(), query.page_size_u32(), query.keyword_opt());
            let client = self.client();
            match query.scope() {
                Scope::Method(id) => {
                    client
                        .list_impact_categories_by_method(id, page, size, keyword)
                        .await
                }
                Scope::Compartment(id) => {
                    client
                        .list_impact_categories_by_compartment(id, page, size, keyword)
                        .await
                }
                _ => client.list_impact_categories(page, size, keyword).await,
            }
            .map_err(CoreError::ctx("Failed to fetch impact categories"))
        })
        .await
    }

    pub async fn impact_category(&self, id: Uuid) -> Result<ImpactCategory, CoreError> {
        self.client()
            .get_impact_category(id)
            .await
            .map_err(CoreError::ctx("Failed to fetch impact category"))
    }

    pub async fn create_impact_category(
        &self,
        input: &ImpactCategoryInput,
    ) -> Result<ImpactCategory, CoreError> {
        let created = self
            .client()
            .create_impact_category(input)
            .await
            .map_err(CoreError::ctx("Failed to create impact category"))?;
        self.cache().invalidate(EntityKind::ImpactCategory);
        Ok(created)
    }

    pub async fn update_impact_category(
        &self,
        id: Uuid,
        input: &ImpactCategoryInput,
    ) -> Result<ImpactCategory, CoreError> {
        let updated = self
            .client()
            .update_impact_category(id, input)
            .await
            .map_err(CoreError::ctx("Failed to update impact category"))?;
        self.cache().invalidate(EntityKind::ImpactCategory);
        Ok(updated)
    }

    pub async fn delete_impact_category(&self, id: Uuid) -> Result<(), CoreError> {
        self.client()
            .delete_impact_category(id)
            .await
            .map_err(CoreError::ctx("Failed to delete impact category"))?;
        self.cache().invalidate(EntityKind::ImpactCategory);
        Ok(())
    }

    // ── Midpoint categories (full list, client-side paging) ──────────

    pub async fn midpoint_categories(
        &self,
        query: &ListQuery,
    ) -> Result<Page<MidpointCategory>, CoreError> {
        let all = self
            .cached_full(EntityKind::MidpointCategory, async || {
                self.client()
                    .list_midpoint_categories()
                    .await
                    .map_err(CoreError::ctx("Failed to fetch midpoint categories"))
            })
            .await?;
        let matching = filter_keyword(&all, query.keyword());
        Ok(paginate_full(
            &matching,
            query.page(),
            query.page_size_u32(),
        ))
    }

    pub async fn midpoint_category(&self, id: Uuid) -> Result<MidpointCategory, CoreError> {
        self.client()
            .get_midpoint_category(id)
            .await
            .map_err(CoreError::ctx("Failed to fetch midpoint category"))
    }

    pub async fn create_midpoint_category(
        &self,
        input: &MidpointCategoryInput,
    ) -> Result<MidpointCategory, CoreError> {
        let created = self
            .client()
            .create_midpoint_category(input)
            .await
            .map_err(CoreError::ctx("Failed to create midpoint category"))?;
        self.invalidate_midpoints();
        Ok(created)
    }

    pub async fn update_midpoint_category(
        &self,
        id: Uuid,
        input: &MidpointCategoryInput,
    ) -> Result<MidpointCategory, CoreError> {
        let updated = self
            .client()
            .update_midpoint_category(id, input)
            .await
            .map_err(CoreError::ctx("Failed to update midpoint category"))?;
        self.invalidate_midpoints();
        Ok(updated)
    }

    pub async fn delete_midpoint_category(&self, id: Uuid) -> Result<(), CoreError> {
        self.client()
            .delete_midpoint_category(id)
            .await
            .map_err(CoreError::ctx("Failed to delete midpoint category"))?;
        self.invalidate_midpoints();
        Ok(())
    }

    fn invalidate_midpoints(&self) {
        self.cache().invalidate(EntityKind::MidpointCategory);
        // Categories embed midpoint references.
        self.cache().invalidate(EntityKind::ImpactCategory);
    }

    // ── Units ────────────────────────────────────────────────────────

    /// List units, routed by scope: by unit group, or the flat
    /// collection for `Scope::All`.
    pub async fn units(&self, query: &ListQuery) -> Result<Page<Unit>, CoreError> {
        self.cached_page(EntityKind::Unit, query, async || {
            let (page, size, keyword) =
                (query.page(), query.page_size_u32(), query.keyword_opt());
            let client = self.client();
            match query.scope() {
                Scope::UnitGroup(id) => client.list_units_by_group(id, page, size, keyword).await,
                _ => client.list_units(page, size, keyword).await,
            }
            .map_err(CoreError::ctx("Failed to fetch units"))
        })
        .await
    }

    pub async fn unit(&self, id: Uuid) -> Result<Unit, CoreError> {
        self.client()
            .get_unit(id)
            .await
            .map_err(CoreError::ctx("Failed to fetch unit"))
    }

    pub async fn create_unit(&self, input: &UnitInput) -> Result<Unit, CoreError> {
        let created = self
            .client()
            .create_unit(input)
            .await
            .map_err(CoreError::ctx("Failed to create unit"))?;
        self.cache().invalidate(EntityKind::Unit);
        Ok(created)
    }

    pub async fn update_unit(&self, id: Uuid, input: &UnitInput) -> Result<Unit, CoreError> {
        let updated = self
            .client()
            .update_unit(id, input)
            .await
            .map_err(CoreError::ctx("Failed to update unit"))?;
        self.cache().invalidate(EntityKind::Unit);
        Ok(updated)
    }

    pub async fn delete_unit(&self, id: Uuid) -> Result<(), CoreError> {
        self.client()
            .delete_unit(id)
            .await
            .map_err(CoreError::ctx("Failed to delete unit"))?;
        self.cache().invalidate(EntityKind::Unit);
        Ok(())
    }

    // ── Unit groups (full list, client-side paging) ──────────────────

    pub async fn unit_groups(&self, query: &ListQuery) -> Result<Page<UnitGroup>, CoreError> {
        let all = self.unit_groups_all().await?;
        let matching = filter_keyword(&all, query.keyword());
        Ok(paginate_full(
            &matching,
            query.page(),
            query.page_size_u32(),
        ))
    }

    /// The full group list (scope-filter dropdowns want it unpaged).
    pub async fn unit_groups_all(&self) -> Result<Vec<UnitGroup>, CoreError> {
        self.cached_full(EntityKind::UnitGroup, async || {
            self.client()
                .list_unit_groups()
                .await
                .map_err(CoreError::ctx("Failed to fetch unit groups"))
        })
        .await
    }

    pub async fn unit_group(&self, id: Uuid) -> Result<UnitGroup, CoreError> {
        self.client()
            .get_unit_group(id)
            .await
            .map_err(CoreError::ctx("Failed to fetch unit group"))
    }

    pub async fn create_unit_group(&self, input: &UnitGroupInput) -> Result<UnitGroup, CoreError> {
        let created = self
            .client()
            .create_unit_group(input)
            .await
            .map_err(CoreError::ctx("Failed to create unit group"))?;
        self.invalidate_unit_groups();
        Ok(created)
    }

    pub async fn update_unit_group(
        &self,
        id: Uuid,
        input: &UnitGroupInput,
    ) -> Result<UnitGroup, CoreError> {
        let updated = self
            .client()
            .update_unit_group(id, input)
            .await
            .map_err(CoreError::ctx("Failed to update unit group"))?;
        self.invalidate_unit_groups();
        Ok(updated)
    }

    pub async fn delete_unit_group(&self, id: Uuid) -> Result<(), CoreError> {
        self.client()
            .delete_unit_group(id)
            .await
            .map_err(CoreError::ctx("Failed to delete unit group"))?;
        self.invalidate_unit_groups();
        Ok(())
    }

    fn invalidate_unit_groups(&self) {
        self.cache().invalidate(EntityKind::UnitGroup);
        // Units embed their group reference.
        self.cache().invalidate(EntityKind::Unit);
    }

    // ── Organizations ────────────────────────────────────────────────

    pub async fn organizations(&self, query: &ListQuery) -> Result<Page<Organization>, CoreError> {
        self.cached_page(EntityKind::Organization, query, async || {
            self.client()
                .list_organizations(query.page(), query.page_size_u32(), query.keyword_opt())
                .await
                .map_err(CoreError::ctx("Failed to fetch organizations"))
        })
        .await
    }

    pub async fn organization(&self, id: Uuid) -> Result<Organization, CoreError> {
        self.client()
            .get_organization(id)
            .await
            .map_err(CoreError::ctx("Failed to fetch organization"))
    }

    pub async fn create_organization(
        &self,
        input: &OrganizationInput,
    ) -> Result<Organization, CoreError> {
        let created = self
            .client()
            .create_organization(input)
            .await
            .map_err(CoreError::ctx("Failed to create organization"))?;
        self.cache().invalidate(EntityKind::Organization);
        Ok(created)
    }

    pub async fn update_organization(
        &self,
        id: Uuid,
        input: &OrganizationInput,
    ) -> Result<Organization, CoreError> {
        let updated = self
            .client()
            .update_organization(id, input)
            .await
            .map_err(CoreError::ctx("Failed to update organization"))?;
        self.cache().invalidate(EntityKind::Organization);
        Ok(updated)
    }

    pub async fn delete_organization(&self, id: Uuid) -> Result<(), CoreError> {
        self.client()
            .delete_organization(id)
            .await
            .map_err(CoreError::ctx("Failed to delete organization"))?;
        self.cache().invalidate(EntityKind::Organization);
        Ok(())
    }

    // ── Industry codes (server paging, fallback keyword) ─────────────

    /// Industry codes paginate server-side but the endpoint takes no
    /// keyword; the fallback filter runs over the loaded page only.
    pub async fn industry_codes(&self, query: &ListQuery) -> Result<Page<IndustryCode>, CoreError> {
        self.cached_page(EntityKind::IndustryCode, query, async || {
            let mut page = self
                .client()
                .list_industry_codes(query.page(), query.page_size_u32())
                .await
                .map_err(CoreError::ctx("Failed to fetch industry codes"))?;
            if !query.keyword().is_empty() {
                page.items
                    .retain(|code| crate::search::KeywordMatch::matches_keyword(code, query.keyword()));
            }
            Ok(page)
        })
        .await
    }

    pub async fn industry_code(&self, id: Uuid) -> Result<IndustryCode, CoreError> {
        self.client()
            .get_industry_code(id)
            .await
            .map_err(CoreError::ctx("Failed to fetch industry code"))
    }

    pub async fn create_industry_code(
        &self,
        input: &IndustryCodeInput,
    ) -> Result<IndustryCode, CoreError> {
        let created = self
            .client()
            .create_industry_code(input)
            .await
            .map_err(CoreError::ctx("Failed to create industry code"))?;
        self.invalidate_industry_codes();
        Ok(created)
    }

    pub async fn update_industry_code(
        &self,
        id: Uuid,
        input: &IndustryCodeInput,
    ) -> Result<IndustryCode, CoreError> {
        let updated = self
            .client()
            .update_industry_code(id, input)
            .await
            .map_err(CoreError::ctx("Failed to update industry code"))?;
        self.invalidate_industry_codes();
        Ok(updated)
    }

    pub async fn delete_industry_code(&self, id: Uuid) -> Result<(), CoreError> {
        self.client()
            .delete_industry_code(id)
            .await
            .map_err(CoreError::ctx("Failed to delete industry code"))?;
        self.invalidate_industry_codes();
        Ok(())
    }

    fn invalidate_industry_codes(&self) {
        self.cache().invalidate(EntityKind::IndustryCode);
        // Organizations embed their industry codes.
        self.cache().invalidate(EntityKind::Organization);
    }

    // ── Emission compartments (full list, client-side paging) ────────

    pub async fn emission_compartments(
        &self,
        query: &ListQuery,
    ) -> Result<Page<EmissionCompartment>, CoreError> {
        let all = self.emission_compartments_all().await?;
        let matching = filter_keyword(&all, query.keyword());
        Ok(paginate_full(
            &matching,
            query.page(),
            query.page_size_u32(),
        ))
    }

    /// Full compartment list for scope-filter dropdowns.
    pub async fn emission_compartments_all(
        &self,
    ) -> Result<Vec<EmissionCompartment>, CoreError> {
        self.cached_full(EntityKind::EmissionCompartment, async || {
            self.client()
                .list_emission_compartments()
                .await
                .map_err(CoreError::ctx("Failed to fetch emission compartments"))
        })
        .await
    }

    pub async fn emission_compartment(&self, id: Uuid) -> Result<EmissionCompartment, CoreError> {
        self.client()
            .get_emission_compartment(id)
            .await
            .map_err(CoreError::ctx("Failed to fetch emission compartment"))
    }

    pub async fn create_emission_compartment(
        &self,
        input: &EmissionCompartmentInput,
    ) -> Result<EmissionCompartment, CoreError> {
        let created = self
            .client()
            .create_emission_compartment(input)
            .await
            .map_err(CoreError::ctx("Failed to create emission compartment"))?;
        self.invalidate_compartments();
        Ok(created)
    }

    pub async fn update_emission_compartment(
        &self,
        id: Uuid,
        input: &EmissionCompartmentInput,
    ) -> Result<EmissionCompartment, CoreError> {
        let updated = self
            .client()
            .update_emission_compartment(id, input)
            .await
            .map_err(CoreError::ctx("Failed to update emission compartment"))?;
        self.invalidate_compartments();
        Ok(updated)
    }

    pub async fn delete_emission_compartment(&self, id: Uuid) -> Result<(), CoreError> {
        self.client()
            .delete_emission_compartment(id)
            .await
            .map_err(CoreError::ctx("Failed to delete emission compartment"))?;
        self.invalidate_compartments();
        Ok(())
    }

    fn invalidate_compartments(&self) {
        self.cache().invalidate(EntityKind::EmissionCompartment);
        // Categories embed their compartment reference.
        self.cache().invalidate(EntityKind::ImpactCategory);
    }

    // ── Users ────────────────────────────────────────────────────────

    pub async fn users(&self, query: &ListQuery) -> Result<Page<User>, CoreError> {
        self.cached_page(EntityKind::User, query, async || {
            self.client()
                .list_users(query.page(), query.page_size_u32(), query.keyword_opt())
                .await
                .map_err(CoreError::ctx("Failed to fetch users"))
        })
        .await
    }

    pub async fn user(&self, id: Uuid) -> Result<User, CoreError> {
        self.client()
            .get_user(id)
            .await
            .map_err(CoreError::ctx("Failed to fetch user"))
    }

    pub async fn create_user(&self, input: &UserInput) -> Result<User, CoreError> {
        let created = self
            .client()
            .create_user(input)
            .await
            .map_err(CoreError::ctx("Failed to create user"))?;
        self.cache().invalidate(EntityKind::User);
        Ok(created)
    }

    pub async fn update_user(&self, id: Uuid, input: &UserInput) -> Result<User, CoreError> {
        let updated = self
            .client()
            .update_user(id, input)
            .await
            .map_err(CoreError::ctx("Failed to update user"))?;
        self.cache().invalidate(EntityKind::User);
        Ok(updated)
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<(), CoreError> {
        self.client()
            .delete_user(id)
            .await
            .map_err(CoreError::ctx("Failed to delete user"))?;
        self.cache().invalidate(EntityKind::User);
        Ok(())
    }

    // ── Dashboard & bulk transfer ────────────────────────────────────

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, CoreError> {
        self.client()
            .dashboard_summary()
            .await
            .map_err(CoreError::ctx("Failed to fetch dashboard summary"))
    }

    pub async fn export_emission_factors(&self) -> Result<Vec<u8>, CoreError> {
        self.client()
            .export_emission_factors()
            .await
            .map_err(CoreError::ctx("Failed to export emission factors"))
    }

    pub async fn import_emission_factors(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<ImportSummary, CoreError> {
        self.client()
            .import_emission_factors(file_name, contents)
            .await
            .map_err(CoreError::ctx("Failed to import emission factors"))
    }
}

// ── Browse-controller wiring ─────────────────────────────────────────
//
// One `ResourceOps` constructor per entity; the TUI instantiates a
// `Browser` from each. The macro only spells out the clone-per-closure
// plumbing.

macro_rules! resource_ops {
    ($catalog:expr, $list:ident, $create:ident, $update:ident, $delete:ident) => {{
        let (c1, c2, c3, c4) = (
            $catalog.clone(),
            $catalog.clone(),
            $catalog.clone(),
            $catalog.clone(),
        );
        ResourceOps {
            list: Box::new(move |query: ListQuery| {
                let catalog = c1.clone();
                Box::pin(async move { catalog.$list(&query).await }) as BoxFuture<'static, _>
            }),
            create: Box::new(move |input| {
                let catalog = c2.clone();
                Box::pin(async move { catalog.$create(&input).await }) as BoxFuture<'static, _>
            }),
            update: Box::new(move |id: Uuid, input| {
                let catalog = c3.clone();
                Box::pin(async move { catalog.$update(id, &input).await }) as BoxFuture<'static, _>
            }),
            delete: Box::new(move |id: Uuid| {
                let catalog = c4.clone();
                Box::pin(async move { catalog.$delete(id).await }) as BoxFuture<'static, _>
            }),
            id_of: |row| row.id,
        }
    }};
}

impl Catalog {
    pub fn impact_method_ops(&self) -> ResourceOps<ImpactMethod, ImpactMethodInput> {
        resource_ops!(
            self,
            impact_methods,
            create_impact_method,
            update_impact_method,
            delete_impact_method
        )
    }

    pub fn impact_category_ops(&self) -> ResourceOps<ImpactCategory, ImpactCategoryInput> {
        resource_ops!(
            self,
            impact_categories,
            create_impact_category,
            update_impact_category,
            delete_impact_category
        )
    }

    pub fn midpoint_category_ops(&self) -> ResourceOps<MidpointCategory, MidpointCategoryInput> {
        resource_ops!(
            self,
            midpoint_categories,
            create_midpoint_category,
            update_midpoint_category,
            delete_midpoint_category
        )
    }

    pub fn unit_ops(&self) -> ResourceOps<Unit, UnitInput> {
        resource_ops!(self, units, create_unit, update_unit, delete_unit)
    }

    pub fn unit_group_ops(&self) -> ResourceOps<UnitGroup, UnitGroupInput> {
        resource_ops!(
            self,
            unit_groups,
            create_unit_group,
            update_unit_group,
            delete_unit_group
        )
    }

    pub fn organization_ops(&self) -> ResourceOps<Organization, OrganizationInput> {
        resource_ops!(
            self,
            organizations,
            create_organization,
            update_organization,
            delete_organization
        )
    }

    pub fn industry_code_ops(&self) -> ResourceOps<IndustryCode, IndustryCodeInput> {
        resource_ops!(
            self,
            industry_codes,
            create_industry_code,
            update_industry_code,
            delete_industry_code
        )
    }

    pub fn emission_compartment_ops(
        &self,
    ) -> ResourceOps<EmissionCompartment, EmissionCompartmentInput> {
        resource_ops!(
            self,
            emission_compartments,
            create_emission_compartment,
            update_emission_compartment,
            delete_emission_compartment
        )
    }

    pub fn user_ops(&self) -> ResourceOps<User, UserInput> {
        resource_ops!(self, users, create_user, update_user, delete_user)
    }
}
