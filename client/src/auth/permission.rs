//! Permissions the drinks backend checks.

/// A permission carried in the access token's `permissions` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// View drinks with full recipes.
    GetDrinksDetail,
    /// Create drinks.
    PostDrinks,
    /// Edit drinks.
    PatchDrinks,
    /// Delete drinks.
    DeleteDrinks,
}

impl Permission {
    pub const ALL: [Self; 4] = [
        Self::GetDrinksDetail,
        Self::PostDrinks,
        Self::PatchDrinks,
        Self::DeleteDrinks,
    ];

    /// Scope string as it appears in the token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetDrinksDetail => "get:drinks-detail",
            Self::PostDrinks => "post:drinks",
            Self::PatchDrinks => "patch:drinks",
            Self::DeleteDrinks => "delete:drinks",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|permission| permission.as_str() == s)
            .ok_or_else(|| format!("unknown permission: {s}"))
    }
}
