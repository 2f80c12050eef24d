//! # Container State & Merge Rules
//!
//! [`ResourceState`] is the in-memory mirror every container exposes to its
//! readers: the last successful listing, the currently selected entity,
//! resource-specific denormalized data, and the loading/error flags.
//!
//! The merge rules are deterministic and fixed per operation kind:
//!
//! - list fetch → replace `items` wholesale (server order, no dedup)
//! - create → append the new entity
//! - update → replace in place by id; unknown id is a no-op, never an insert
//! - delete → remove by id; unknown id is a no-op
//! - fetch-one → set `selected`
//! - custom query → the entity's own [`apply_query`](crate::StoreEntity::apply_query)

use crate::entity::StoreEntity;
use crate::message::Outcome;

/// The observable state of one resource container.
///
/// `error` and data are mutually exclusive in meaning but not in storage: a
/// failed operation leaves the previous `items` untouched, and the message
/// stays visible until the next dispatch's pending phase or an explicit
/// clear.
#[derive(Debug, Clone)]
pub struct ResourceState<T: StoreEntity> {
    /// Entities from the last successful list fetch, in server response order.
    pub items: Vec<T>,
    /// The entity currently being viewed/edited, if any.
    pub selected: Option<T>,
    /// Resource-specific denormalized data (pagination, rating summaries, …).
    pub meta: T::Meta,
    /// True exactly while at least one operation is in flight.
    pub is_loading: bool,
    /// Message of the most recent failed operation, until cleared.
    pub error: Option<String>,
}

impl<T: StoreEntity> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            meta: T::Meta::default(),
            is_loading: false,
            error: None,
        }
    }
}

impl<T: StoreEntity> ResourceState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a fulfilled operation's merge rule.
    pub(crate) fn apply(&mut self, outcome: Outcome<T>) {
        match outcome {
            Outcome::List(items) => self.items = items,
            Outcome::One(entity) => self.selected = Some(entity),
            Outcome::Created(entity) => self.items.push(entity),
            Outcome::Updated(entity) => {
                replace_entity(&mut self.items, entity);
            }
            Outcome::Deleted(id) => {
                self.items.retain(|item| *item.id() != id);
            }
            Outcome::Query(result) => T::apply_query(self, result),
        }
    }
}

/// Replace the entity with a matching id in place.
///
/// Returns `false` (and changes nothing) when the id is absent — an update
/// for an unknown entity never inserts.
pub fn replace_entity<T: StoreEntity>(items: &mut Vec<T>, entity: T) -> bool {
    match items.iter_mut().find(|item| item.id() == entity.id()) {
        Some(slot) => {
            *slot = entity;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequestError;
    use async_trait::async_trait;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: String,
        label: String,
    }

    impl Widget {
        fn new(id: &str, label: &str) -> Self {
            Self {
                id: id.to_string(),
                label: label.to_string(),
            }
        }
    }

    #[async_trait]
    impl StoreEntity for Widget {
        type Id = String;
        type Create = ();
        type Update = ();
        type Query = ();
        type QueryResult = ();
        type Meta = ();
        type Context = ();

        fn id(&self) -> &String {
            &self.id
        }

        async fn fetch_list(_ctx: &()) -> Result<Vec<Self>, RequestError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn list_fetch_replaces_items_wholesale() {
        let mut state = ResourceState::<Widget>::new();
        state.items = vec![Widget::new("1", "old")];

        state.apply(Outcome::List(vec![
            Widget::new("3", "c"),
            Widget::new("1", "a"),
            Widget::new("2", "b"),
        ]));

        // Server order preserved, no dedup, no sort.
        let ids: Vec<&str> = state.items.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn create_appends() {
        let mut state = ResourceState::<Widget>::new();
        state.apply(Outcome::Created(Widget::new("1", "a")));
        state.apply(Outcome::Created(Widget::new("2", "b")));
        assert_eq!(state.items.last().unwrap().id, "2");
    }

    #[test]
    fn update_replaces_only_matching_id() {
        let mut state = ResourceState::<Widget>::new();
        state.items = vec![Widget::new("1", "a"), Widget::new("2", "b")];

        state.apply(Outcome::Updated(Widget::new("2", "b2")));

        assert_eq!(state.items[0], Widget::new("1", "a"));
        assert_eq!(state.items[1], Widget::new("2", "b2"));
    }

    #[test]
    fn update_of_unknown_id_is_a_noop() {
        let mut state = ResourceState::<Widget>::new();
        state.items = vec![Widget::new("1", "a")];

        state.apply(Outcome::Updated(Widget::new("9", "ghost")));

        assert_eq!(state.items, vec![Widget::new("1", "a")]);
    }

    #[test]
    fn delete_removes_exactly_the_matching_id() {
        let mut state = ResourceState::<Widget>::new();
        state.items = vec![Widget::new("1", "a"), Widget::new("2", "b")];

        state.apply(Outcome::Deleted("1".to_string()));
        assert_eq!(state.items, vec![Widget::new("2", "b")]);

        state.apply(Outcome::Deleted("missing".to_string()));
        assert_eq!(state.items, vec![Widget::new("2", "b")]);
    }

    #[test]
    fn fetch_one_sets_selected() {
        let mut state = ResourceState::<Widget>::new();
        state.apply(Outcome::One(Widget::new("1", "a")));
        assert_eq!(state.selected, Some(Widget::new("1", "a")));
    }
}
