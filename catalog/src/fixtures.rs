//! Static sample data for every view.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use crate::model::*;
use crate::page::PageId;

// =============================================================================
// DASHBOARD
// =============================================================================

pub const DASHBOARD_STATS: &[StatCard] = &[
    StatCard {
        title: "Total Suppliers",
        value: "47",
        description: "Active biodegradable packaging suppliers",
        icon: Icon::Users,
        tone: Tone::Primary,
    },
    StatCard {
        title: "CO₂ Saved",
        value: "2.4k kg",
        description: "This month vs traditional packaging",
        icon: Icon::Leaf,
        tone: Tone::Success,
    },
    StatCard {
        title: "Demand Accuracy",
        value: "94%",
        description: "AI forecasting precision rate",
        icon: Icon::TrendingUp,
        tone: Tone::Warning,
    },
    StatCard {
        title: "Orders Processed",
        value: "156",
        description: "Successfully matched orders",
        icon: Icon::Package,
        tone: Tone::PrimaryLight,
    },
];

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        title: "AI Demand Forecasting",
        description: "Upload sales data and get accurate packaging demand predictions",
        target: PageId::Forecasting,
        tone: Tone::Primary,
    },
    QuickAction {
        title: "Find Suppliers",
        description: "Browse eco-friendly packaging suppliers near you",
        target: PageId::Suppliers,
        tone: Tone::Accent,
    },
    QuickAction {
        title: "Track Impact",
        description: "Monitor your environmental impact and sustainability metrics",
        target: PageId::Impact,
        tone: Tone::Secondary,
    },
    QuickAction {
        title: "Manage Orders",
        description: "Send requests and track orders with suppliers",
        target: PageId::Orders,
        tone: Tone::Success,
    },
];

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Smart Forecasting",
        description: "AI-powered demand prediction reduces waste and optimizes inventory",
        icon: Icon::TrendingUp,
    },
    Benefit {
        title: "Supplier Network",
        description: "Connect with verified eco-friendly packaging suppliers globally",
        icon: Icon::Users,
    },
    Benefit {
        title: "Sustainability",
        description: "Track environmental impact and contribute to a greener future",
        icon: Icon::Leaf,
    },
];

// =============================================================================
// FORECASTING
// =============================================================================

pub const HISTORICAL_DEMAND: &[HistoricalPoint] = &[
    HistoricalPoint { month: "Jan", actual: 120, predicted: 125 },
    HistoricalPoint { month: "Feb", actual: 135, predicted: 132 },
    HistoricalPoint { month: "Mar", actual: 150, predicted: 148 },
    HistoricalPoint { month: "Apr", actual: 165, predicted: 162 },
    HistoricalPoint { month: "May", actual: 180, predicted: 178 },
    HistoricalPoint { month: "Jun", actual: 195, predicted: 192 },
];

pub const DEMAND_FORECAST: &[ForecastPoint] = &[
    ForecastPoint { month: "Jul", predicted: 210, confidence: 94 },
    ForecastPoint { month: "Aug", predicted: 225, confidence: 91 },
    ForecastPoint { month: "Sep", predicted: 240, confidence: 89 },
    ForecastPoint { month: "Oct", predicted: 230, confidence: 86 },
    ForecastPoint { month: "Nov", predicted: 265, confidence: 88 },
    ForecastPoint { month: "Dec", predicted: 280, confidence: 85 },
];

pub const PACKAGE_TYPE_DEMAND: &[PackageTypeDemand] = &[
    PackageTypeDemand { kind: "Food Containers", demand: 45, unit: "thousands" },
    PackageTypeDemand { kind: "Shipping Boxes", demand: 32, unit: "thousands" },
    PackageTypeDemand { kind: "Protective Wrap", demand: 28, unit: "thousands" },
    PackageTypeDemand { kind: "Bags & Pouches", demand: 38, unit: "thousands" },
];

pub const EXPECTED_GROWTH: &str = "+18%";
pub const PEAK_DEMAND: &str = "3.2k";

// =============================================================================
// IMPACT
// =============================================================================

pub const IMPACT_METRICS: &[ImpactMetric] = &[
    ImpactMetric {
        title: "CO₂ Emissions Saved",
        value: "2,440",
        unit: "kg",
        change: "+15%",
        icon: Icon::Leaf,
        tone: Tone::Success,
    },
    ImpactMetric {
        title: "Trees Equivalent",
        value: "112",
        unit: "trees",
        change: "+12%",
        icon: Icon::TreePine,
        tone: Tone::Primary,
    },
    ImpactMetric {
        title: "Water Saved",
        value: "8,520",
        unit: "liters",
        change: "+18%",
        icon: Icon::Droplets,
        tone: Tone::Info,
    },
    ImpactMetric {
        title: "Waste Diverted",
        value: "1,340",
        unit: "kg",
        change: "+22%",
        icon: Icon::Recycle,
        tone: Tone::Warning,
    },
];

pub const CARBON_EMISSIONS: &[CarbonPoint] = &[
    CarbonPoint { month: "Jan", traditional: 450, biodegradable: 180, saved: 270 },
    CarbonPoint { month: "Feb", traditional: 520, biodegradable: 200, saved: 320 },
    CarbonPoint { month: "Mar", traditional: 610, biodegradable: 240, saved: 370 },
    CarbonPoint { month: "Apr", traditional: 580, biodegradable: 230, saved: 350 },
    CarbonPoint { month: "May", traditional: 670, biodegradable: 260, saved: 410 },
    CarbonPoint { month: "Jun", traditional: 720, biodegradable: 280, saved: 440 },
];

pub const WASTE_BREAKDOWN: &[WasteShare] = &[
    WasteShare { name: "Reduced Plastic", percent: 65, tone: Tone::Primary },
    WasteShare { name: "Composted Material", percent: 25, tone: Tone::Success },
    WasteShare { name: "Recycled Content", percent: 10, tone: Tone::Warning },
];

pub const REDUCTION_BY_CATEGORY: &[CategoryReduction] = &[
    CategoryReduction { category: "Food Containers", reduction: 85 },
    CategoryReduction { category: "Shipping Boxes", reduction: 92 },
    CategoryReduction { category: "Protective Wrap", reduction: 78 },
    CategoryReduction { category: "Bags & Pouches", reduction: 88 },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification { name: "Carbon Neutral", description: "Net-zero carbon footprint achieved" },
    Certification { name: "Plastic Free", description: "100% plastic-free packaging solutions" },
    Certification { name: "Compost Ready", description: "Materials break down in 90 days" },
    Certification { name: "Ocean Safe", description: "Marine biodegradable certified" },
];

pub const MONTHLY_SUMMARY: &[SummaryFigure] = &[
    SummaryFigure { value: "94%", label: "Plastic Reduction" },
    SummaryFigure { value: "67%", label: "Carbon Savings" },
    SummaryFigure { value: "156", label: "Orders Processed" },
    SummaryFigure { value: "4.8★", label: "Sustainability Score" },
];

// =============================================================================
// SUPPLIERS
// =============================================================================

pub const SUPPLIERS: &[Supplier] = &[
    Supplier {
        id: 1,
        name: "GreenPack Solutions",
        location: "San Francisco, CA",
        distance_miles: 12,
        rating: 4.8,
        reviews: 156,
        specialties: &["Food Containers", "Compostable"],
        certifications: &["ASTM D6400", "BPI Certified"],
        min_order: 500,
        lead_time: "3-5 days",
        description: "Leading supplier of compostable food packaging made from plant-based materials.",
        contact: Contact { email: "orders@greenpack.com", phone: "+1 (555) 123-4567" },
        sustainability: 95,
    },
    Supplier {
        id: 2,
        name: "EcoBox Manufacturing",
        location: "Portland, OR",
        distance_miles: 45,
        rating: 4.6,
        reviews: 203,
        specialties: &["Shipping Boxes", "Biodegradable"],
        certifications: &["FSC Certified", "Carbon Neutral"],
        min_order: 750,
        lead_time: "2-4 days",
        description: "Specialized in biodegradable shipping materials and protective packaging.",
        contact: Contact { email: "sales@ecobox.com", phone: "+1 (555) 987-6543" },
        sustainability: 92,
    },
    Supplier {
        id: 3,
        name: "BioDegradable Innovations",
        location: "Seattle, WA",
        distance_miles: 28,
        rating: 4.9,
        reviews: 89,
        specialties: &["Custom Solutions", "Marine Biodegradable"],
        certifications: &["OK Compost HOME", "USDA BioPreferred"],
        min_order: 1_000,
        lead_time: "5-7 days",
        description: "Innovative marine-biodegradable packaging solutions for ocean-conscious brands.",
        contact: Contact { email: "info@bioinnovations.com", phone: "+1 (555) 456-7890" },
        sustainability: 98,
    },
    Supplier {
        id: 4,
        name: "Sustainable Wrap Co",
        location: "Oakland, CA",
        distance_miles: 18,
        rating: 4.7,
        reviews: 134,
        specialties: &["Protective Wrap", "Recyclable"],
        certifications: &["Cradle to Cradle", "GREENGUARD"],
        min_order: 300,
        lead_time: "1-3 days",
        description: "Fast delivery of recyclable protective wrapping and void fill materials.",
        contact: Contact { email: "orders@sustainablewrap.com", phone: "+1 (555) 321-0987" },
        sustainability: 88,
    },
];

pub const PLATFORM_SUPPORT: &str = "24/7";
pub const AVG_RESPONSE_TIME: &str = "48h";

// =============================================================================
// ORDERS
// =============================================================================

pub const ORDERS: &[Order] = &[
    Order {
        id: "ORD-001",
        supplier: "GreenPack Solutions",
        product: "Compostable Food Containers",
        quantity: 5_000,
        quantity_unit: "units",
        status: OrderStatus::Completed,
        request_date: "2024-01-15",
        delivery_date: Some("2024-01-20"),
        total_value: 2_450,
        sustainability: 95,
        rejection_reason: None,
    },
    Order {
        id: "ORD-002",
        supplier: "EcoBox Manufacturing",
        product: "Biodegradable Shipping Boxes",
        quantity: 2_500,
        quantity_unit: "units",
        status: OrderStatus::Pending,
        request_date: "2024-01-18",
        delivery_date: Some("2024-01-25"),
        total_value: 1_875,
        sustainability: 92,
        rejection_reason: None,
    },
    Order {
        id: "ORD-003",
        supplier: "BioDegradable Innovations",
        product: "Marine Biodegradable Wrap",
        quantity: 10_000,
        quantity_unit: "meters",
        status: OrderStatus::InProgress,
        request_date: "2024-01-12",
        delivery_date: Some("2024-01-22"),
        total_value: 3_200,
        sustainability: 98,
        rejection_reason: None,
    },
    Order {
        id: "ORD-004",
        supplier: "Sustainable Wrap Co",
        product: "Recyclable Protective Wrap",
        quantity: 7_500,
        quantity_unit: "units",
        status: OrderStatus::Rejected,
        request_date: "2024-01-10",
        delivery_date: None,
        total_value: 890,
        sustainability: 88,
        rejection_reason: Some("Quantity below minimum order"),
    },
];
