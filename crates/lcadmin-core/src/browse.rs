// ── Generic paginated-resource CRUD controller ──
//
// Every entity view repeats the same interaction: fetch a page, filter
// and paginate, create/update/delete through a modal, refetch after a
// successful mutation, surface errors inline. This module factors that
// into one controller parameterized by the entity's operations;
// screens and commands instantiate it instead of re-implementing it.

use futures::future::BoxFuture;
use uuid::Uuid;

use crate::error::CoreError;
use crate::pager::{PageSize, Pager};
use crate::query::{ListQuery, Scope};
use lcadmin_api::Page;

/// Fallback shown when a failure carries no usable message.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

type ListFn<T> =
    Box<dyn Fn(ListQuery) -> BoxFuture<'static, Result<Page<T>, CoreError>> + Send + Sync>;
type CreateFn<T, In> = Box<dyn Fn(In) -> BoxFuture<'static, Result<T, CoreError>> + Send + Sync>;
type UpdateFn<T, In> =
    Box<dyn Fn(Uuid, In) -> BoxFuture<'static, Result<T, CoreError>> + Send + Sync>;
type DeleteFn = Box<dyn Fn(Uuid) -> BoxFuture<'static, Result<(), CoreError>> + Send + Sync>;

/// The operation set a [`Browser`] is parameterized by: list, create,
/// update, delete, and the id accessor.
pub struct ResourceOps<T, In> {
    pub list: ListFn<T>,
    pub create: CreateFn<T, In>,
    pub update: UpdateFn<T, In>,
    pub delete: DeleteFn,
    pub id_of: fn(&T) -> Uuid,
}

/// Which modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Add,
    Edit,
    Delete,
}

/// Pagination navigation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    First,
    Prev,
    Next,
    Last,
    /// Commit the typed page-number buffer.
    Jump,
}

#[derive(Debug, Default)]
struct ErrorSlots {
    add: Option<String>,
    edit: Option<String>,
    delete: Option<String>,
}

/// One entity's list view and its create/update/delete lifecycle.
///
/// Owns the filter state, the loaded page, the selected row, the modal
/// state, and the per-operation error slots. The selection is set by a
/// row action and cleared when its modal closes -- success or cancel --
/// and by nothing else.
pub struct Browser<T, In> {
    ops: ResourceOps<T, In>,
    query: ListQuery,
    pager: Pager,
    rows: Vec<T>,
    list_error: Option<String>,
    selected: Option<T>,
    modal: Option<Modal>,
    errors: ErrorSlots,
}

impl<T, In> Browser<T, In>
where
    T: Clone + Send + 'static,
    In: Send + 'static,
{
    pub fn new(ops: ResourceOps<T, In>) -> Self {
        Self::with_query(ops, ListQuery::new())
    }

    /// Start from a pre-populated query (CLI flags, saved view state).
    pub fn with_query(ops: ResourceOps<T, In>, query: ListQuery) -> Self {
        let pager = Pager::restore(query.page(), query.page_size());
        Self {
            ops,
            query,
            pager,
            rows: Vec::new(),
            list_error: None,
            selected: None,
            modal: None,
            errors: ErrorSlots::default(),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Banner error from the last failed list fetch.
    pub fn list_error(&self) -> Option<&str> {
        self.list_error.as_deref()
    }

    /// Inline error for the currently open modal, if any.
    pub fn modal_error(&self) -> Option<&str> {
        match self.modal? {
            Modal::Add => self.errors.add.as_deref(),
            Modal::Edit => self.errors.edit.as_deref(),
            Modal::Delete => self.errors.delete.as_deref(),
        }
    }

    /// The id of a row, through the configured accessor.
    pub fn row_id(&self, row: &T) -> Uuid {
        (self.ops.id_of)(row)
    }

    /// Record a client-side rejection in the active modal's error slot.
    /// Form conversion failures surface exactly like server failures:
    /// the modal stays open with the message inline.
    pub fn reject_submission(&mut self, message: impl Into<String>) {
        let message = message.into();
        match self.modal {
            Some(Modal::Add) => self.errors.add = Some(message),
            Some(Modal::Edit) => self.errors.edit = Some(message),
            Some(Modal::Delete) => self.errors.delete = Some(message),
            None => {}
        }
    }

    // ── List lifecycle ───────────────────────────────────────────────

    /// Fetch the current page. On success the pager adopts the server's
    /// authoritative total (clamping the page into bounds); on failure
    /// the previous rows are kept and the banner error is set.
    pub async fn load(&mut self) {
        self.query.set_page(self.pager.page());

        match (self.ops.list)(self.query.clone()).await {
            Ok(page) => {
                self.pager.set_total_pages(page.total_pages);
                if page.current_page != self.pager.page() {
                    self.pager.jump(page.current_page);
                }
                self.query.set_page(self.pager.page());
                self.rows = page.items;
                self.list_error = None;
            }
            Err(err) => {
                self.list_error = Some(slot_message(&err));
            }
        }
    }

    /// Change the keyword; always lands on page 1 of the new results.
    pub async fn search(&mut self, keyword: impl Into<String> + Send) {
        let keyword = keyword.into();
        if keyword == self.query.keyword() {
            return;
        }
        self.query.set_keyword(keyword);
        self.pager.first();
        self.load().await;
    }

    /// Change the scope filter; always lands on page 1.
    pub async fn set_scope(&mut self, scope: Scope) {
        if scope == self.query.scope() {
            return;
        }
        self.query.set_scope(scope);
        self.pager.first();
        self.load().await;
    }

    /// Change the page size; always lands on page 1.
    pub async fn set_page_size(&mut self, size: PageSize) {
        if size == self.query.page_size() {
            return;
        }
        self.query.set_page_size(size);
        self.pager.set_page_size(size);
        self.load().await;
    }

    /// Apply a navigation request; only refetches if the page moved.
    pub async fn navigate(&mut self, nav: Nav) {
        let before = self.pager.page();
        match nav {
            Nav::First => self.pager.first(),
            Nav::Prev => self.pager.prev(),
            Nav::Next => self.pager.next(),
            Nav::Last => self.pager.last(),
            Nav::Jump => self.pager.submit_input(),
        }
        if self.pager.page() != before {
            self.load().await;
        }
    }

    /// Forward a typed digit to the pager's jump buffer.
    pub fn type_page_digit(&mut self, c: char) {
        self.pager.push_digit(c);
    }

    pub fn erase_page_digit(&mut self) {
        self.pager.backspace();
    }

    // ── Modal lifecycle ──────────────────────────────────────────────

    /// Open the add modal. Reopening clears the previous add error.
    pub fn open_add(&mut self) {
        self.modal = Some(Modal::Add);
        self.errors.add = None;
    }

    /// Resolve a row by id within the loaded page and open the edit
    /// modal. An id outside the visible page silently no-ops -- row
    /// actions only work on visible rows.
    pub fn begin_edit(&mut self, id: Uuid) {
        if let Some(row) = self.rows.iter().find(|r| (self.ops.id_of)(r) == id) {
            self.selected = Some(row.clone());
            self.modal = Some(Modal::Edit);
            self.errors.edit = None;
        }
    }

    /// Same contract as [`begin_edit`](Self::begin_edit), for deletion.
    pub fn begin_delete(&mut self, id: Uuid) {
        if let Some(row) = self.rows.iter().find(|r| (self.ops.id_of)(r) == id) {
            self.selected = Some(row.clone());
            self.modal = Some(Modal::Delete);
            self.errors.delete = None;
        }
    }

    /// Cancel the open modal; the selection goes with it.
    pub fn close_modal(&mut self) {
        self.modal = None;
        self.selected = None;
    }

    // ── Mutations ────────────────────────────────────────────────────
    //
    // Success: close the modal, clear its error slot and the selection,
    // refetch the list exactly once. Failure: record the message in the
    // slot and leave the modal open (and the selection intact) so the
    // user can correct and resubmit.

    pub async fn submit_create(&mut self, input: In) -> Result<(), String> {
        match (self.ops.create)(input).await {
            Ok(_) => {
                self.errors.add = None;
                self.modal = None;
                self.load().await;
                Ok(())
            }
            Err(err) => {
                let message = slot_message(&err);
                self.errors.add = Some(message.clone());
                Err(message)
            }
        }
    }

    pub async fn submit_update(&mut self, input: In) -> Result<(), String> {
        let Some(id) = self.selected.as_ref().map(|row| (self.ops.id_of)(row)) else {
            return Err("no row selected".to_owned());
        };
        match (self.ops.update)(id, input).await {
            Ok(_) => {
                self.errors.edit = None;
                self.modal = None;
                self.selected = None;
                self.load().await;
                Ok(())
            }
            Err(err) => {
                let message = slot_message(&err);
                self.errors.edit = Some(message.clone());
                Err(message)
            }
        }
    }

    pub async fn submit_delete(&mut self) -> Result<(), String> {
        let Some(id) = self.selected.as_ref().map(|row| (self.ops.id_of)(row)) else {
            return Err("no row selected".to_owned());
        };
        match (self.ops.delete)(id).await {
            Ok(()) => {
                self.errors.delete = None;
                self.modal = None;
                self.selected = None;
                self.load().await;
                Ok(())
            }
            Err(err) => {
                let message = slot_message(&err);
                self.errors.delete = Some(message.clone());
                Err(message)
            }
        }
    }
}

/// The message recorded in an error slot: the error's own text, or the
/// fallback when there is none.
fn slot_message(err: &CoreError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_owned()
    } else {
        message
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use std::sync::Mutex;

    use super::*;
    use crate::query::paginate_full;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: Uuid,
        name: String,
    }

    fn item(n: u128, name: &str) -> Item {
        Item {
            id: Uuid::from_u128(n),
            name: name.to_owned(),
        }
    }

    struct Fixture {
        store: Arc<Mutex<Vec<Item>>>,
        list_calls: Arc<AtomicUsize>,
    }

    /// Ops backed by an in-memory store, with an optional scripted
    /// failure per mutation kind.
    fn fixture_ops(
        items: Vec<Item>,
        create_err: Option<CoreError>,
        delete_err: Option<CoreError>,
    ) -> (Fixture, ResourceOps<Item, String>) {
        let store = Arc::new(Mutex::new(items));
        let list_calls = Arc::new(AtomicUsize::new(0));
        let create_err = Arc::new(Mutex::new(create_err));
        let delete_err = Arc::new(Mutex::new(delete_err));

        let ops = ResourceOps {
            list: {
                let store = Arc::clone(&store);
                let calls = Arc::clone(&list_calls);
                Box::new(move |query: ListQuery| {
                    let store = Arc::clone(&store);
                    let calls = Arc::clone(&calls);
                    Box::pin(async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        let items = store.lock().unwrap().clone();
                        let matching: Vec<Item> = items
                            .into_iter()
                            .filter(|i| {
                                i.name
                                    .to_lowercase()
                                    .contains(&query.keyword().to_lowercase())
                            })
                            .collect();
                        Ok(paginate_full(
                            &matching,
                            query.page(),
                            query.page_size_u32(),
                        ))
                    })
                })
            },
            create: {
                let store = Arc::clone(&store);
                let scripted = Arc::clone(&create_err);
                Box::new(move |name: String| {
                    let store = Arc::clone(&store);
                    let scripted = Arc::clone(&scripted);
                    Box::pin(async move {
                        if let Some(err) = scripted.lock().unwrap().take() {
                            return Err(err);
                        }
                        let next = Item {
                            id: Uuid::from_u128(999),
                            name,
                        };
                        store.lock().unwrap().push(next.clone());
                        Ok(next)
                    })
                })
            },
            update: {
                let store = Arc::clone(&store);
                Box::new(move |id: Uuid, name: String| {
                    let store = Arc::clone(&store);
                    Box::pin(async move {
                        let mut items = store.lock().unwrap();
                        let row = items
                            .iter_mut()
                            .find(|i| i.id == id)
                            .ok_or_else(|| CoreError::Other("missing row".into()))?;
                        row.name = name;
                        Ok(row.clone())
                    })
                })
            },
            delete: {
                let store = Arc::clone(&store);
                let scripted = Arc::clone(&delete_err);
                Box::new(move |id: Uuid| {
                    let store = Arc::clone(&store);
                    let scripted = Arc::clone(&scripted);
                    Box::pin(async move {
                        if let Some(err) = scripted.lock().unwrap().take() {
                            return Err(err);
                        }
                        store.lock().unwrap().retain(|i| i.id != id);
                        Ok(())
                    })
                })
            },
            id_of: |i| i.id,
        };

        (Fixture { store, list_calls }, ops)
    }

    fn twelve_items() -> Vec<Item> {
        (1..=12).map(|n| item(n, &format!("item {n:02}"))).collect()
    }

    #[tokio::test]
    async fn load_populates_rows_and_total() {
        let (fx, ops) = fixture_ops(twelve_items(), None, None);
        let mut browser = Browser::new(ops);
        browser.load().await;

        assert_eq!(browser.rows().len(), 10);
        assert_eq!(browser.pager().total_pages(), 2);
        assert_eq!(fx.list_calls.load(Ordering::SeqCst), 1);
        assert!(browser.list_error().is_none());
    }

    #[tokio::test]
    async fn successful_create_closes_modal_and_refetches_once() {
        let (fx, ops) = fixture_ops(twelve_items(), None, None);
        let mut browser = Browser::new(ops);
        browser.load().await;
        let after_load = fx.list_calls.load(Ordering::SeqCst);

        browser.open_add();
        browser.submit_create("item 13".into()).await.unwrap();

        assert_eq!(browser.modal(), None);
        assert!(browser.modal_error().is_none());
        // Exactly one refetch, not two.
        assert_eq!(fx.list_calls.load(Ordering::SeqCst), after_load + 1);
        assert_eq!(fx.store.lock().unwrap().len(), 13);
    }

    #[tokio::test]
    async fn failed_create_keeps_modal_open_with_message() {
        let (fx, ops) = fixture_ops(
            twelve_items(),
            Some(CoreError::Validation {
                message: "Name is required".into(),
            }),
            None,
        );
        let mut browser = Browser::new(ops);
        browser.load().await;
        let after_load = fx.list_calls.load(Ordering::SeqCst);

        browser.open_add();
        let err = browser.submit_create(String::new()).await.unwrap_err();

        assert_eq!(err, "Invalid input: Name is required");
        assert_eq!(browser.modal(), Some(Modal::Add));
        assert_eq!(browser.modal_error(), Some(err.as_str()));
        // No refetch on failure.
        assert_eq!(fx.list_calls.load(Ordering::SeqCst), after_load);

        // Reopening the modal clears the slot.
        browser.close_modal();
        browser.open_add();
        assert!(browser.modal_error().is_none());
    }

    #[tokio::test]
    async fn failed_update_never_clears_the_selection() {
        let (_fx, ops) = fixture_ops(twelve_items(), None, None);
        let mut browser = Browser::new(ops);
        browser.load().await;

        // Point the update at a row, then remove it server-side so the
        // mutation fails.
        let target = Uuid::from_u128(3);
        browser.begin_edit(target);
        assert_eq!(browser.modal(), Some(Modal::Edit));
        _fx.store.lock().unwrap().retain(|i| i.id != target);

        let err = browser.submit_update("renamed".into()).await.unwrap_err();
        assert_eq!(err, "missing row");
        assert_eq!(browser.modal(), Some(Modal::Edit));
        assert!(browser.selected().is_some(), "selection must survive failure");

        // A later success clears everything.
        _fx.store.lock().unwrap().push(item(3, "restored"));
        browser.submit_update("renamed".into()).await.unwrap();
        assert_eq!(browser.modal(), None);
        assert!(browser.selected().is_none());
        assert!(browser.modal_error().is_none());
    }

    #[tokio::test]
    async fn messageless_failure_uses_the_fallback_text() {
        let (_fx, ops) = fixture_ops(
            twelve_items(),
            None,
            Some(CoreError::Other(String::new())),
        );
        let mut browser = Browser::new(ops);
        browser.load().await;

        browser.begin_delete(Uuid::from_u128(5));
        let err = browser.submit_delete().await.unwrap_err();

        assert_eq!(err, UNKNOWN_ERROR);
        assert_eq!(browser.modal_error(), Some(UNKNOWN_ERROR));
        assert_eq!(browser.modal(), Some(Modal::Delete));
    }

    #[tokio::test]
    async fn successful_delete_refetches_and_clamps() {
        let (fx, ops) = fixture_ops((1..=11).map(|n| item(n, "row")).collect(), None, None);
        let mut browser = Browser::new(ops);
        browser.load().await;
        browser.navigate(Nav::Last).await;
        assert_eq!(browser.pager().page(), 2);

        // Deleting the only row of page 2 shrinks the list to one page.
        browser.begin_delete(Uuid::from_u128(11));
        browser.submit_delete().await.unwrap();

        assert_eq!(browser.pager().page(), 1);
        assert_eq!(browser.rows().len(), 10);
        assert_eq!(fx.store.lock().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn row_action_outside_the_visible_page_is_ignored() {
        let (_fx, ops) = fixture_ops(twelve_items(), None, None);
        let mut browser = Browser::new(ops);
        browser.load().await;

        // Item 11 is on page 2, not in the loaded rows.
        browser.begin_edit(Uuid::from_u128(11));
        assert_eq!(browser.modal(), None);
        assert!(browser.selected().is_none());
    }

    #[tokio::test]
    async fn search_resets_to_page_one() {
        let (_fx, ops) = fixture_ops(twelve_items(), None, None);
        let mut browser = Browser::new(ops);
        browser.load().await;
        browser.navigate(Nav::Next).await;
        assert_eq!(browser.pager().page(), 2);

        browser.search("item 0").await;

        assert_eq!(browser.pager().page(), 1);
        assert_eq!(browser.query().page(), 1);
        assert_eq!(browser.rows().len(), 9);
    }

    #[tokio::test]
    async fn boundary_navigation_does_not_refetch() {
        let (fx, ops) = fixture_ops(twelve_items(), None, None);
        let mut browser = Browser::new(ops);
        browser.load().await;
        let after_load = fx.list_calls.load(Ordering::SeqCst);

        browser.navigate(Nav::Prev).await;
        browser.navigate(Nav::First).await;
        assert_eq!(fx.list_calls.load(Ordering::SeqCst), after_load);
    }

    #[tokio::test]
    async fn list_failure_sets_banner_and_keeps_rows() {
        let (fx, ops) = fixture_ops(twelve_items(), None, None);
        // First fetch succeeds, every later one fails.
        let ResourceOps {
            list: original,
            create,
            update,
            delete,
            id_of,
        } = ops;
        let calls = Arc::new(AtomicUsize::new(0));
        let failing: ListFn<Item> = {
            let calls = Arc::clone(&calls);
            Box::new(move |query| {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                if n == 0 {
                    original(query)
                } else {
                    Box::pin(async {
                        Err(CoreError::Other("Failed to fetch items: boom".into()))
                    })
                }
            })
        };
        let ops = ResourceOps {
            list: failing,
            create,
            update,
            delete,
            id_of,
        };

        let mut browser = Browser::new(ops);
        browser.load().await;
        assert_eq!(browser.rows().len(), 10);
        assert_eq!(fx.list_calls.load(Ordering::SeqCst), 1);

        browser.navigate(Nav::Next).await;

        assert_eq!(browser.list_error(), Some("Failed to fetch items: boom"));
        // The previous page stays on screen under the banner.
        assert_eq!(browser.rows().len(), 10);
    }

    #[tokio::test]
    async fn typed_jump_navigates_through_the_buffer() {
        let (_fx, ops) = fixture_ops(twelve_items(), None, None);
        let mut browser = Browser::new(ops);
        browser.load().await;

        browser.type_page_digit('2');
        browser.navigate(Nav::Jump).await;
        assert_eq!(browser.pager().page(), 2);
        assert_eq!(browser.rows().len(), 2);

        // Out-of-range jump: silent, input resets, no movement.
        browser.type_page_digit('9');
        browser.navigate(Nav::Jump).await;
        assert_eq!(browser.pager().page(), 2);
        assert_eq!(browser.pager().input(), "2");
    }
}
