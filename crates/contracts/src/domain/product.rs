use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Volume price tier for B2B buyers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkTier {
    pub min_quantity: u32,
    pub price: f64,
}

/// Product as returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub condition: String,
    pub description: String,
    pub base_price: f64,
    pub mrp: f64,
    pub discount_percentage: Option<f64>,
    pub b2b_price: Option<f64>,
    pub bulk_pricing: Vec<BulkTier>,
    pub gst_included: bool,
    pub gst_percentage: Option<f64>,
    pub moq: u32,
    pub stock: u32,
    pub rating: f64,
    /// Free-form spec sheet (ram, storage, processor, display, ...).
    pub specifications: BTreeMap<String, String>,
    pub images: Vec<String>,
    pub warranty: Option<String>,
}

impl Product {
    pub fn spec(&self, key: &str) -> &str {
        self.specifications.get(key).map(String::as_str).unwrap_or("N/A")
    }
}

/// Create/update payload built by the product form.
///
/// Validated by [`crate::validation::validate_product`] before any network
/// call is made.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInput {
    pub name: String,
    pub brand: String,
    pub category: String,
    pub condition: String,
    pub description: String,
    pub base_price: f64,
    pub mrp: f64,
    pub discount_percentage: Option<f64>,
    pub b2b_price: Option<f64>,
    pub bulk_pricing: Vec<BulkTier>,
    pub gst_included: bool,
    pub gst_percentage: Option<f64>,
    pub moq: u32,
    pub stock: u32,
    pub specifications: BTreeMap<String, String>,
    pub images: Vec<String>,
    pub warranty: Option<String>,
}

impl From<Product> for ProductInput {
    fn from(p: Product) -> Self {
        Self {
            name: p.name,
            brand: p.brand,
            category: p.category,
            condition: p.condition,
            description: p.description,
            base_price: p.base_price,
            mrp: p.mrp,
            discount_percentage: p.discount_percentage,
            b2b_price: p.b2b_price,
            bulk_pricing: p.bulk_pricing,
            gst_included: p.gst_included,
            gst_percentage: p.gst_percentage,
            moq: p.moq,
            stock: p.stock,
            specifications: p.specifications,
            images: p.images,
            warranty: p.warranty,
        }
    }
}

pub const PRODUCT_CATEGORIES: &[&str] = &[
    "windows",
    "macbooks",
    "gaming",
    "mini-pcs",
    "workstations",
    "ultrabooks",
    "chromebooks",
];

pub const PRODUCT_CONDITIONS: &[&str] = &["new", "refurbished"];

pub const WARRANTY_OPTIONS: &[&str] =
    &["6 months", "12 months", "18 months", "24 months", "36 months"];
