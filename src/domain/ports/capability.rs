//! Capability identifiers.

use std::fmt;

/// Capabilities every session must be able to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Authentication.
    Auth,
    /// Customer records.
    Customers,
    /// Transactions.
    Transactions,
    /// Coupons.
    Coupons,
    /// Analytics reports.
    Analytics,
    /// Manager and responsible-party operations.
    Managers,
}

impl Capability {
    /// All capabilities, in registration order.
    pub const ALL: [Self; 6] = [
        Self::Auth,
        Self::Customers,
        Self::Transactions,
        Self::Coupons,
        Self::Analytics,
        Self::Managers,
    ];

    /// Returns the capability name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Customers => "customers",
            Self::Transactions => "transactions",
            Self::Coupons => "coupons",
            Self::Analytics => "analytics",
            Self::Managers => "managers",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
