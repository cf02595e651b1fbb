use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub customer: String,
    pub product_id: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialInput {
    pub customer: String,
    pub product_id: String,
    pub rating: u8,
    pub comment: String,
}

impl Default for TestimonialInput {
    fn default() -> Self {
        Self {
            customer: String::new(),
            product_id: String::new(),
            rating: 5,
            comment: String::new(),
        }
    }
}
