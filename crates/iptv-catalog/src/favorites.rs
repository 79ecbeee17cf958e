//! Saved channels and titles.

use iptv_types::{Favorite, FavoriteId, UserId};
use tracing::info;

use crate::{Catalog, CatalogError, CatalogResult, contains_ci};

/// Category filter value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

impl Catalog {
    /// A customer's favorites whose name contains `query` and whose category
    /// equals `category` (or any category for `"all"`).
    pub fn favorites_for(&self, user: &UserId, query: &str, category: &str) -> Vec<&Favorite> {
        let query = query.trim();
        self.favorites
            .get(user)
            .map(|items| {
                items
                    .iter()
                    .filter(|f| contains_ci(&f.name, query))
                    .filter(|f| category == ALL_CATEGORIES || category.is_empty() || f.category == category)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn favorite_count(&self, user: &UserId) -> usize {
        self.favorites.get(user).map_or(0, Vec::len)
    }

    pub fn remove_favorite(&mut self, user: &UserId, id: &FavoriteId) -> CatalogResult<Favorite> {
        let items = self
            .favorites
            .get_mut(user)
            .ok_or_else(|| CatalogError::FavoriteNotFound(id.clone()))?;
        let index = items
            .iter()
            .position(|f| &f.id == id)
            .ok_or_else(|| CatalogError::FavoriteNotFound(id.clone()))?;

        info!(user = %user, favorite = %id, "removed favorite");
        Ok(items.remove(index))
    }
}
