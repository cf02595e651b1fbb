use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// Single-line rendering for tables and the invoice bill-to block.
    pub fn one_line(&self) -> String {
        let mut parts: Vec<&str> = vec![&self.address_line1];
        if let Some(line2) = self.address_line2.as_deref() {
            if !line2.is_empty() {
                parts.push(line2);
            }
        }
        for p in [&self.city, &self.state, &self.postal_code, &self.country] {
            if !p.is_empty() {
                parts.push(p);
            }
        }
        parts.join(", ")
    }
}

/// Customer as listed in the dashboard. `customer_type` is derived by the
/// backend from the account role (business accounts are B2B).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub customer_type: String,
    pub total_spent: f64,
    pub verified: bool,
    pub active: bool,
    pub addresses: Vec<Address>,
    pub company_name: Option<String>,
    pub gst_number: Option<String>,
}

impl Customer {
    pub fn is_b2b(&self) -> bool {
        self.customer_type.eq_ignore_ascii_case("B2B")
    }
}
