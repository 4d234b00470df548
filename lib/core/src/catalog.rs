use crate::record::{Item, RatingEvent, User};
use ahash::AHashMap;

/// Immutable owner of the three source tables
///
/// Constructed once by the ingestion collaborator and shared by
/// reference into every scoring call; nothing mutates it afterwards,
/// so concurrent requests need no locking. Item and rating order is
/// preserved exactly as loaded (scoring ties resolve in catalog
/// order, so load order is part of the observable behavior).
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    users: Vec<User>,
    ratings: Vec<RatingEvent>,
    item_index: AHashMap<String, usize>,
    ratings_by_user: AHashMap<String, Vec<usize>>,
}

impl Catalog {
    #[must_use]
    pub fn new(items: Vec<Item>, users: Vec<User>, ratings: Vec<RatingEvent>) -> Self {
        let item_index: AHashMap<String, usize> = items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.id.clone(), idx))
            .collect();

        let mut ratings_by_user: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (idx, rating) in ratings.iter().enumerate() {
            ratings_by_user
                .entry(rating.user_id.clone())
                .or_default()
                .push(idx);
        }

        Self {
            items,
            users,
            ratings,
            item_index,
            ratings_by_user,
        }
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[inline]
    #[must_use]
    pub fn ratings(&self) -> &[RatingEvent] {
        &self.ratings
    }

    /// Look up an item by id
    #[inline]
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.item_index.get(id).map(|&idx| &self.items[idx])
    }

    #[inline]
    #[must_use]
    pub fn contains_item(&self, id: &str) -> bool {
        self.item_index.contains_key(id)
    }

    /// All rating events produced by a user, in dataset order
    #[must_use]
    pub fn user_ratings(&self, user_id: &str) -> Vec<&RatingEvent> {
        self.ratings_by_user
            .get(user_id)
            .map(|indexes| indexes.iter().map(|&idx| &self.ratings[idx]).collect())
            .unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    #[inline]
    #[must_use]
    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }
}
