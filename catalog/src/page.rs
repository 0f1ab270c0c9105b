//! Page identifiers for in-memory view switching.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// One of the five dashboard screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageId {
    #[default]
    Dashboard,
    Forecasting,
    Suppliers,
    Impact,
    Orders,
}

impl PageId {
    /// Navigation order.
    pub const ALL: [Self; 5] = [Self::Dashboard, Self::Forecasting, Self::Suppliers, Self::Impact, Self::Orders];

    /// Stable id used in markup and logs.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Forecasting => "forecasting",
            Self::Suppliers => "suppliers",
            Self::Impact => "impact",
            Self::Orders => "orders",
        }
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Forecasting => "AI Forecasting",
            Self::Suppliers => "Suppliers",
            Self::Impact => "Impact",
            Self::Orders => "Orders",
        }
    }

    /// The page's `<h1>` text. Unique per page.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Dashboard => "Welcome to EcoPack360",
            Self::Forecasting => "AI Demand Forecasting",
            Self::Suppliers => "Biodegradable Packaging Suppliers",
            Self::Impact => "Environmental Impact Dashboard",
            Self::Orders => "Order Management",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Dashboard => {
                "Transform your packaging supply chain with AI-powered demand forecasting and sustainable biodegradable packaging solutions."
            }
            Self::Forecasting => {
                "Upload your sales data and get accurate packaging demand predictions powered by machine learning"
            }
            Self::Suppliers => "Find verified eco-friendly packaging suppliers near you",
            Self::Impact => "Track your positive environmental impact with biodegradable packaging",
            Self::Orders => "Send requests and track orders with biodegradable packaging suppliers",
        }
    }

    /// Resolve a page id, falling back to the dashboard for anything unknown.
    #[must_use]
    pub fn from_id_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for PageId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| ParseError::UnknownPage(s.to_owned()))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
