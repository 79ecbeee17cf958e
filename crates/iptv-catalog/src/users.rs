//! Customer accounts.

use chrono::NaiveDate;
use iptv_types::{Customer, Price, UserId, UserStatus};
use tracing::info;

use crate::{Catalog, CatalogError, CatalogResult, contains_ci};

/// Editable profile fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
}

impl Catalog {
    pub fn users(&self) -> &[Customer] {
        &self.users
    }

    pub fn user(&self, id: &UserId) -> Option<&Customer> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Looks up a customer by email, ignoring case.
    pub fn find_user_by_email(&self, email: &str) -> Option<&Customer> {
        self.users.iter().find(|u| u.email.eq_ignore_ascii_case(email.trim()))
    }

    /// Customers whose name, email or country contains `query`, optionally
    /// restricted to one status.
    pub fn search_users(&self, query: &str, status: Option<UserStatus>) -> Vec<&Customer> {
        let query = query.trim();
        self.users
            .iter()
            .filter(|u| {
                contains_ci(&u.name, query) || contains_ci(&u.email, query) || contains_ci(&u.country, query)
            })
            .filter(|u| status.is_none_or(|s| u.status == s))
            .collect()
    }

    /// Customers registered most recently first.
    pub fn recent_users(&self, limit: usize) -> Vec<&Customer> {
        let mut users: Vec<&Customer> = self.users.iter().collect();
        users.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        users.truncate(limit);
        users
    }

    /// Creates an active customer registered on `today`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmailTaken`] if another account uses the email.
    pub fn register_user(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        today: NaiveDate,
    ) -> CatalogResult<UserId> {
        let email = email.into();
        if self.find_user_by_email(&email).is_some() {
            return Err(CatalogError::EmailTaken(email));
        }

        let next = self
            .users
            .iter()
            .filter_map(|u| u.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        let id = UserId::new(next.to_string());

        self.users.push(Customer {
            id: id.clone(),
            name: name.into(),
            email,
            country: String::new(),
            phone: None,
            registered_at: today,
            last_login: today,
            status: UserStatus::Active,
            total_spent: Price::ZERO,
            avatar: None,
        });

        info!(user = %id, "registered customer");
        Ok(id)
    }

    /// Applies the non-empty fields of `patch` to a customer's profile.
    pub fn update_profile(&mut self, id: &UserId, patch: ProfilePatch) -> CatalogResult<&Customer> {
        if let Some(email) = &patch.email {
            if self.users.iter().any(|u| &u.id != id && u.email.eq_ignore_ascii_case(email)) {
                return Err(CatalogError::EmailTaken(email.clone()));
            }
        }

        let user = self.user_mut(id)?;
        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(phone) = patch.phone {
            user.phone = if phone.trim().is_empty() { None } else { Some(phone) };
        }
        if let Some(country) = patch.country {
            user.country = country;
        }
        Ok(user)
    }

    pub fn update_user_status(&mut self, id: &UserId, status: UserStatus) -> CatalogResult<()> {
        self.user_mut(id)?.status = status;
        info!(user = %id, status = %status, "updated user status");
        Ok(())
    }

    /// Records a sign-in on `today`.
    pub fn touch_login(&mut self, id: &UserId, today: NaiveDate) -> CatalogResult<()> {
        self.user_mut(id)?.last_login = today;
        Ok(())
    }

    /// Removes a customer together with their subscriptions and favorites.
    ///
    /// Orders are kept as the payment record.
    pub fn delete_user(&mut self, id: &UserId) -> CatalogResult<Customer> {
        let index = self
            .users
            .iter()
            .position(|u| &u.id == id)
            .ok_or_else(|| CatalogError::UserNotFound(id.clone()))?;

        let removed = self.users.remove(index);
        self.subscriptions.retain(|s| &s.user_id != id);
        self.favorites.remove(id);

        info!(user = %id, "deleted user");
        Ok(removed)
    }

    pub(crate) fn user_mut(&mut self, id: &UserId) -> CatalogResult<&mut Customer> {
        self.users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| CatalogError::UserNotFound(id.clone()))
    }
}
