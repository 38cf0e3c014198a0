// ── Filter / pagination query state ──
//
// The state every list view tracks: page, page size, keyword, and an
// optional scope filter. Serializes to a query-string form so a view
// can be handed between the CLI and the TUI; the TUI mirrors it on
// every change (replace semantics -- the previous string is simply
// overwritten).

use uuid::Uuid;

use crate::pager::PageSize;
use lcadmin_api::Page;

/// Secondary selector switching which backend endpoint a list uses.
///
/// `All` is the sentinel: the unscoped endpoint is called instead of a
/// scoped one. This is a dual-source switch, not a client-side filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    #[default]
    All,
    Method(Uuid),
    Compartment(Uuid),
    UnitGroup(Uuid),
}

impl Scope {
    /// Query-string key for this scope's id parameter.
    fn key(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Method(_) => Some("impactMethodId"),
            Self::Compartment(_) => Some("compartmentId"),
            Self::UnitGroup(_) => Some("unitGroupId"),
        }
    }

    fn id(self) -> Option<Uuid> {
        match self {
            Self::All => None,
            Self::Method(id) | Self::Compartment(id) | Self::UnitGroup(id) => Some(id),
        }
    }
}

/// Filter and pagination state for one list view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    page: u32,
    page_size: PageSize,
    keyword: String,
    scope: Scope,
}

impl ListQuery {
    pub fn new() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
            keyword: String::new(),
            scope: Scope::All,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn page(&self) -> u32 {
        self.page.max(1)
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn page_size_u32(&self) -> u32 {
        self.page_size.as_u32()
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Keyword as the API layer wants it: `None` when empty.
    pub fn keyword_opt(&self) -> Option<&str> {
        (!self.keyword.is_empty()).then_some(self.keyword.as_str())
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    // ── Mutators ─────────────────────────────────────────────────────
    //
    // Keyword, page-size, and scope changes all reset to page 1: a
    // stale page is never silently kept past the end of new results.

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        if keyword != self.keyword {
            self.keyword = keyword;
            self.page = 1;
        }
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        if size != self.page_size {
            self.page_size = size;
            self.page = 1;
        }
    }

    pub fn set_scope(&mut self, scope: Scope) {
        if scope != self.scope {
            self.scope = scope;
            self.page = 1;
        }
    }

    // ── Query-string form ────────────────────────────────────────────

    /// Serialize all tracked fields (`page=2&pageSize=10&search=kg&…`).
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("page", &self.page().to_string());
        serializer.append_pair("pageSize", &self.page_size.as_u32().to_string());
        if !self.keyword.is_empty() {
            serializer.append_pair("search", &self.keyword);
        }
        if let (Some(key), Some(id)) = (self.scope.key(), self.scope.id()) {
            serializer.append_pair(key, &id.to_string());
        }
        serializer.finish()
    }

    /// Parse a query string, tolerating unknown keys and bad values
    /// (each falls back to its default). The literal value `all` on a
    /// scope key is the unscoped sentinel.
    pub fn from_query_string(s: &str) -> Self {
        let mut query = Self::new();
        for (key, value) in url::form_urlencoded::parse(s.as_bytes()) {
            match key.as_ref() {
                "page" => {
                    if let Ok(n) = value.parse::<u32>() {
                        query.page = n.max(1);
                    }
                }
                "pageSize" => {
                    if let Some(size) = value.parse().ok().and_then(PageSize::from_u32) {
                        query.page_size = size;
                    }
                }
                "search" | "keyword" => query.keyword = value.into_owned(),
                "impactMethodId" if value != "all" => {
                    if let Ok(id) = value.parse() {
                        query.scope = Scope::Method(id);
                    }
                }
                "compartmentId" if value != "all" => {
                    if let Ok(id) = value.parse() {
                        query.scope = Scope::Compartment(id);
                    }
                }
                "unitGroupId" if value != "all" => {
                    if let Ok(id) = value.parse() {
                        query.scope = Scope::UnitGroup(id);
                    }
                }
                _ => {}
            }
        }
        query
    }
}

// ── Client-side pagination ───────────────────────────────────────────

/// Slice one page out of a fully loaded list.
///
/// Used for the small reference sets whose endpoints return everything
/// at once; the page is clamped into `[1, max(total_pages, 1)]`.
pub fn paginate_full<T: Clone>(items: &[T], page: u32, page_size: u32) -> Page<T> {
    let page_size = page_size.max(1) as usize;
    let total_pages = u32::try_from(items.len().div_ceil(page_size)).unwrap_or(u32::MAX);
    let page = page.clamp(1, total_pages.max(1));
    let start = (page as usize - 1) * page_size;

    Page {
        current_page: page,
        total_pages,
        items: items.iter().skip(start).take(page_size).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keyword_change_resets_page() {
        let mut q = ListQuery::new();
        q.set_page(4);
        q.set_keyword("kg");
        assert_eq!(q.page(), 1);
        assert_eq!(q.keyword(), "kg");
    }

    #[test]
    fn same_keyword_keeps_page() {
        let mut q = ListQuery::new();
        q.set_keyword("kg");
        q.set_page(3);
        q.set_keyword("kg");
        assert_eq!(q.page(), 3);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut q = ListQuery::new();
        q.set_page(7);
        q.set_page_size(PageSize::Twenty);
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn scope_change_resets_page() {
        let mut q = ListQuery::new();
        q.set_page(2);
        q.set_scope(Scope::UnitGroup(Uuid::from_u128(1)));
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn query_string_round_trips() {
        let mut q = ListQuery::new();
        q.set_keyword("carbon");
        q.set_page_size(PageSize::Twenty);
        q.set_scope(Scope::Method(Uuid::from_u128(0xa1)));
        q.set_page(3);

        let s = q.to_query_string();
        assert_eq!(ListQuery::from_query_string(&s), q);
    }

    #[test]
    fn parse_tolerates_junk_and_all_sentinel() {
        let q = ListQuery::from_query_string(
            "page=banana&pageSize=15&search=air&impactMethodId=all&extra=1",
        );
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), PageSize::Ten);
        assert_eq!(q.keyword(), "air");
        assert_eq!(q.scope(), Scope::All);
    }

    #[test]
    fn paginate_full_respects_bounds() {
        let items: Vec<u32> = (0..23).collect();
        let page = paginate_full(&items, 3, 10);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![20, 21, 22]);
        assert!(page.items.len() <= 10);
    }

    #[test]
    fn paginate_full_clamps_past_the_end() {
        let items: Vec<u32> = (0..8).collect();
        let page = paginate_full(&items, 9, 5);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.items, vec![5, 6, 7]);
    }

    #[test]
    fn paginate_full_of_empty_list() {
        let page = paginate_full::<u32>(&[], 1, 10);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }
}
