// ── Query cache ──
//
// Concurrent page cache shared by both binaries. The key contains
// every argument that changes a response, so two queries differing in
// any of page, page size, keyword, or scope never collide. Mutations
// invalidate by entity kind; the next list call refetches server truth.

use std::any::Any;
use std::sync::Arc;

use dashmap::DashMap;

use crate::entity::EntityKind;
use crate::query::{ListQuery, Scope};

/// Cache key: entity kind plus the full list-query fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub entity: EntityKind,
    pub page: u32,
    pub page_size: u32,
    pub keyword: String,
    pub scope: Scope,
}

impl QueryKey {
    pub fn new(entity: EntityKind, query: &ListQuery) -> Self {
        Self {
            entity,
            page: query.page(),
            page_size: query.page_size_u32(),
            keyword: query.keyword().to_owned(),
            scope: query.scope(),
        }
    }

    /// Key for a full (unpaginated) list fetch of an entity.
    pub fn full_list(entity: EntityKind) -> Self {
        Self {
            entity,
            page: 0,
            page_size: 0,
            keyword: String::new(),
            scope: Scope::All,
        }
    }
}

/// Type-erased page cache.
///
/// Values are stored as `Arc<dyn Any>` so one map serves every entity
/// type; `get` downcasts back to the caller's page type.
#[derive(Default)]
pub struct QueryCache {
    entries: DashMap<QueryKey, Arc<dyn Any + Send + Sync>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T>(&self, key: &QueryKey) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let entry = self.entries.get(key)?;
        entry
            .value()
            .clone()
            .downcast::<T>()
            .ok()
            .map(|arc| (*arc).clone())
    }

    pub fn insert<T>(&self, key: QueryKey, value: T)
    where
        T: Clone + Send + Sync + 'static,
    {
        self.entries.insert(key, Arc::new(value));
    }

    /// Drop every cached page of one entity kind.
    pub fn invalidate(&self, entity: EntityKind) {
        self.entries.retain(|key, _| key.entity != entity);
    }

    /// Drop everything (logout, profile switch).
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::pager::PageSize;
    use lcadmin_api::Page;

    fn page(n: u32) -> Page<u32> {
        Page {
            current_page: n,
            total_pages: 9,
            items: vec![n],
        }
    }

    fn key_for(entity: EntityKind, page: u32, keyword: &str) -> QueryKey {
        let mut query = ListQuery::new();
        query.set_keyword(keyword);
        query.set_page(page);
        QueryKey::new(entity, &query)
    }

    #[test]
    fn distinct_arguments_never_collide() {
        let cache = QueryCache::new();
        cache.insert(key_for(EntityKind::Unit, 1, ""), page(1));
        cache.insert(key_for(EntityKind::Unit, 2, ""), page(2));
        cache.insert(key_for(EntityKind::Unit, 1, "kg"), page(3));

        assert_eq!(cache.len(), 3);
        let hit: Page<u32> = cache.get(&key_for(EntityKind::Unit, 2, "")).unwrap();
        assert_eq!(hit.items, vec![2]);
    }

    #[test]
    fn page_size_is_part_of_the_key() {
        let cache = QueryCache::new();
        let mut q5 = ListQuery::new();
        q5.set_page_size(PageSize::Five);
        let mut q20 = ListQuery::new();
        q20.set_page_size(PageSize::Twenty);

        cache.insert(QueryKey::new(EntityKind::User, &q5), page(1));
        assert!(
            cache
                .get::<Page<u32>>(&QueryKey::new(EntityKind::User, &q20))
                .is_none()
        );
    }

    #[test]
    fn invalidate_only_touches_one_entity() {
        let cache = QueryCache::new();
        cache.insert(key_for(EntityKind::Unit, 1, ""), page(1));
        cache.insert(key_for(EntityKind::UnitGroup, 1, ""), page(2));

        cache.invalidate(EntityKind::Unit);

        assert!(
            cache
                .get::<Page<u32>>(&key_for(EntityKind::Unit, 1, ""))
                .is_none()
        );
        assert!(
            cache
                .get::<Page<u32>>(&key_for(EntityKind::UnitGroup, 1, ""))
                .is_some()
        );
    }

    #[test]
    fn clear_empties_everything() {
        let cache = QueryCache::new();
        cache.insert(key_for(EntityKind::User, 1, ""), page(1));
        cache.clear();
        assert!(cache.is_empty());
    }
}
