//! Client-side form validation, run before any network call.

use crate::domain::product::ProductInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

/// Validate a product payload. Required: name (>= 2 chars), at least one
/// image, basePrice > 0, stock >= 0, category. Optional percentages must
/// sit in their ranges.
pub fn validate_product(input: &ProductInput) -> ValidationReport {
    let mut report = ValidationReport::default();

    if input.name.trim().len() < 2 {
        report.push("name", "Product name is required and must be at least 2 characters");
    }
    if input.images.is_empty() {
        report.push("images", "At least one product image is required");
    }
    if input.base_price <= 0.0 {
        report.push("basePrice", "Base price is required and must be greater than 0");
    }
    if input.category.trim().len() < 2 {
        report.push("category", "Category is required");
    }
    // stock is u32: "stock >= 0" holds by construction, nothing to check.
    if let Some(pct) = input.discount_percentage {
        if !(0.0..=100.0).contains(&pct) {
            report.push("discountPercentage", "Discount percentage must be between 0 and 100");
        }
    }
    if let Some(pct) = input.gst_percentage {
        if !(0.0..=100.0).contains(&pct) {
            report.push("gstPercentage", "GST percentage must be between 0 and 100");
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ProductInput {
        ProductInput {
            name: "ThinkPad T14 Gen 3".to_string(),
            category: "windows".to_string(),
            base_price: 42999.0,
            stock: 12,
            images: vec!["https://cdn.example.com/t14.jpg".to_string()],
            ..ProductInput::default()
        }
    }

    #[test]
    fn complete_input_passes() {
        assert!(validate_product(&valid_input()).is_valid());
    }

    #[test]
    fn each_missing_required_field_is_named() {
        let mut input = valid_input();
        input.name = "x".to_string();
        assert!(validate_product(&input).has_error_for("name"));

        let mut input = valid_input();
        input.images.clear();
        assert!(validate_product(&input).has_error_for("images"));

        let mut input = valid_input();
        input.base_price = 0.0;
        assert!(validate_product(&input).has_error_for("basePrice"));

        let mut input = valid_input();
        input.category = String::new();
        assert!(validate_product(&input).has_error_for("category"));
    }

    #[test]
    fn only_the_offending_fields_are_listed() {
        let mut input = valid_input();
        input.base_price = -1.0;
        let report = validate_product(&input);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field, "basePrice");
    }

    #[test]
    fn optional_ranges_are_checked_when_present() {
        let mut input = valid_input();
        input.discount_percentage = Some(140.0);
        input.gst_percentage = Some(-1.0);
        let report = validate_product(&input);
        assert!(report.has_error_for("discountPercentage"));
        assert!(report.has_error_for("gstPercentage"));

        let mut input = valid_input();
        input.gst_percentage = Some(18.0);
        assert!(validate_product(&input).is_valid());
    }

    #[test]
    fn zero_stock_is_allowed() {
        let mut input = valid_input();
        input.stock = 0;
        assert!(validate_product(&input).is_valid());
    }
}
