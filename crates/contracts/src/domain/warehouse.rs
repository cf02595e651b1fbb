use serde::{Deserialize, Serialize};

/// Warehouse record. Created via form and listed; never edited or deleted
/// from this dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Warehouse {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub address: String,
    pub location: String,
    pub manager: String,
    pub contact: String,
    pub capacity: u32,
    pub utilization_percent: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WarehouseInput {
    pub name: String,
    pub address: String,
    pub location: String,
    pub manager: String,
    pub contact: String,
    pub capacity: u32,
}

impl WarehouseInput {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.address.trim().is_empty()
            && !self.manager.trim().is_empty()
    }
}
