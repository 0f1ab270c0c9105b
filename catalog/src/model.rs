//! Record types for the fixture tables.
//!
//! DESIGN
//! ======
//! Records borrow `'static` strings so fixture tables can live in `const`
//! slices. Numeric fields keep raw values (dollars, units, percent) and the
//! `format` module produces the display strings.

use crate::page::PageId;

/// Icon vocabulary shared by fixtures and UI chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowRight,
    Award,
    Brain,
    CheckCircle,
    Clock,
    Droplets,
    Filter,
    Leaf,
    Mail,
    MapPin,
    Menu,
    Package,
    Plus,
    Recycle,
    Search,
    Star,
    TreePine,
    TrendingUp,
    Upload,
    Users,
    XCircle,
}

/// Palette role of an accent color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tone {
    #[default]
    Primary,
    PrimaryLight,
    Secondary,
    Accent,
    Success,
    Warning,
    Info,
    Danger,
}

impl Tone {
    /// CSS modifier suffix (`tone--{slug}`).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryLight => "primary-light",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Danger => "danger",
        }
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub tone: Tone,
}

/// Dashboard tile that navigates to another page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub target: PageId,
    pub tone: Tone,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

// =============================================================================
// FORECASTING
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForecastPoint {
    pub month: &'static str,
    pub predicted: u32,
    /// Model confidence, percent.
    pub confidence: u8,
}

/// Backtest point: observed demand next to what the model predicted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistoricalPoint {
    pub month: &'static str,
    pub actual: u32,
    pub predicted: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackageTypeDemand {
    pub kind: &'static str,
    pub demand: u32,
    pub unit: &'static str,
}

// =============================================================================
// IMPACT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactMetric {
    pub title: &'static str,
    pub value: &'static str,
    pub unit: &'static str,
    pub change: &'static str,
    pub icon: Icon,
    pub tone: Tone,
}

/// Monthly CO2 emissions in kg.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarbonPoint {
    pub month: &'static str,
    pub traditional: u32,
    pub biodegradable: u32,
    pub saved: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WasteShare {
    pub name: &'static str,
    pub percent: u8,
    pub tone: Tone,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryReduction {
    pub category: &'static str,
    pub reduction: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Certification {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryFigure {
    pub value: &'static str,
    pub label: &'static str,
}

// =============================================================================
// SUPPLIERS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    pub email: &'static str,
    pub phone: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Supplier {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub distance_miles: u32,
    pub rating: f32,
    pub reviews: u32,
    pub specialties: &'static [&'static str],
    pub certifications: &'static [&'static str],
    /// Minimum order, whole dollars.
    pub min_order: u32,
    pub lead_time: &'static str,
    pub description: &'static str,
    pub contact: Contact,
    /// Sustainability score, percent.
    pub sustainability: u8,
}

// =============================================================================
// ORDERS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Completed,
    Pending,
    InProgress,
    Rejected,
}

impl OrderStatus {
    pub const ALL: [Self; 4] = [Self::Completed, Self::Pending, Self::InProgress, Self::Rejected];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Rejected => "Rejected",
        }
    }

    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Completed => Icon::CheckCircle,
            Self::Pending => Icon::Clock,
            Self::InProgress => Icon::Package,
            Self::Rejected => Icon::XCircle,
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Self::Completed => Tone::Success,
            Self::Pending => Tone::Warning,
            Self::InProgress => Tone::Primary,
            Self::Rejected => Tone::Danger,
        }
    }

    /// Caption for the delivery column: actual for completed orders,
    /// estimated otherwise.
    #[must_use]
    pub fn delivery_label(self) -> &'static str {
        match self {
            Self::Completed => "Delivered",
            _ => "Est. Delivery",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Order {
    pub id: &'static str,
    pub supplier: &'static str,
    pub product: &'static str,
    pub quantity: u32,
    pub quantity_unit: &'static str,
    pub status: OrderStatus,
    /// ISO date.
    pub request_date: &'static str,
    /// Delivered date for completed orders, estimate otherwise; absent for
    /// rejected orders.
    pub delivery_date: Option<&'static str>,
    /// Whole dollars.
    pub total_value: u32,
    pub sustainability: u8,
    pub rejection_reason: Option<&'static str>,
}
