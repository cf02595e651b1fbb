//! Invoice document layout.
//!
//! A fetched invoice payload is laid out into a deterministic sequence of
//! positioned drawing operations (A4, millimetres, y measured from the top
//! edge). The renderer in the frontend turns the ops into PDF bytes; this
//! module stays free of any PDF or browser dependency so the layout is
//! testable natively. Missing fields degrade to blanks, never to an error:
//! this runs inside a user-triggered download, after the fetch.

use serde::{Deserialize, Serialize};

use super::customer::Address;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceItem {
    pub sr_no: u32,
    pub description: String,
    pub warranty: Option<String>,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoicePricing {
    pub subtotal: f64,
    pub gst_percentage: f64,
    pub gst_amount: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoicePayload {
    pub invoice_number: String,
    pub invoice_date: String,
    pub order_number: String,
    pub order_date: String,
    pub customer: InvoiceCustomer,
    pub items: Vec<InvoiceItem>,
    pub pricing: InvoicePricing,
    pub payment_method: String,
    pub payment_status: String,
    pub order_type: String,
}

impl InvoicePayload {
    pub fn filename(&self) -> String {
        format!("Invoice_{}_{}.pdf", self.invoice_number, self.order_number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// One drawing operation. Coordinates in mm, origin top-left of an A4 page.
#[derive(Debug, Clone, PartialEq)]
pub enum DocOp {
    Text {
        x: f64,
        y: f64,
        size: f64,
        bold: bool,
        align: Align,
        text: String,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
}

pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN: f64 = 14.0;
const RIGHT_EDGE: f64 = PAGE_WIDTH_MM - MARGIN;

/// Format an amount with Indian digit grouping: the last three digits form
/// one group, every group above that has two digits (1234567.89 ->
/// "12,34,567.89"). The currency symbol is left to the caller; the PDF
/// builtin fonts cannot encode the rupee sign.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let rupees = cents / 100;
    let paise = cents % 100;

    let digits = rupees.to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<String> = Vec::new();
        let head_chars: Vec<char> = head.chars().rev().collect();
        for chunk in head_chars.chunks(2) {
            groups.push(chunk.iter().rev().collect());
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, paise)
}

fn text(ops: &mut Vec<DocOp>, x: f64, y: f64, size: f64, bold: bool, align: Align, s: impl Into<String>) {
    ops.push(DocOp::Text {
        x,
        y,
        size,
        bold,
        align,
        text: s.into(),
    });
}

fn amount(v: f64) -> String {
    format!("Rs. {}", format_inr(v))
}

/// Lay out the fixed invoice structure: company header, bill-to block,
/// itemized table, pricing summary, payment block, terms, footer.
pub fn layout_invoice(invoice: &InvoicePayload) -> Vec<DocOp> {
    let mut ops = Vec::new();

    // Company block
    text(&mut ops, MARGIN, 20.0, 24.0, true, Align::Left, "Bright Laptop");
    text(&mut ops, MARGIN, 27.0, 10.0, false, Align::Left, "Your Trusted Laptop Partner");
    for (i, line) in [
        "123, Tech Street,",
        "Bangalore - 560001",
        "Karnataka, India",
        "Phone: +91 80 1234 5678",
        "Email: support@brightlaptop.com",
    ]
    .iter()
    .enumerate()
    {
        text(&mut ops, 160.0, 20.0 + i as f64 * 6.0, 9.0, false, Align::Left, *line);
    }

    // Invoice header
    text(&mut ops, MARGIN, 55.0, 20.0, true, Align::Left, "TAX INVOICE");
    text(&mut ops, MARGIN, 63.0, 10.0, false, Align::Left, format!("Invoice Number: {}", invoice.invoice_number));
    text(&mut ops, MARGIN, 69.0, 10.0, false, Align::Left, format!("Invoice Date: {}", invoice.invoice_date));
    text(&mut ops, MARGIN, 75.0, 10.0, false, Align::Left, format!("Order Number: {}", invoice.order_number));
    text(&mut ops, MARGIN, 81.0, 10.0, false, Align::Left, format!("Order Date: {}", invoice.order_date));

    // Bill-to block
    let mut y = 55.0;
    text(&mut ops, 130.0, y, 10.0, true, Align::Left, "Bill To:");
    y += 6.0;
    let customer_name = if invoice.customer.name.is_empty() {
        "Customer"
    } else {
        &invoice.customer.name
    };
    text(&mut ops, 130.0, y, 10.0, false, Align::Left, customer_name);
    if !invoice.customer.email.is_empty() {
        y += 5.0;
        text(&mut ops, 130.0, y, 10.0, false, Align::Left, format!("Email: {}", invoice.customer.email));
    }
    if !invoice.customer.phone.is_empty() {
        y += 5.0;
        text(&mut ops, 130.0, y, 10.0, false, Align::Left, format!("Phone: {}", invoice.customer.phone));
    }
    if let Some(addr) = &invoice.customer.address {
        y += 5.0;
        text(&mut ops, 130.0, y, 10.0, false, Align::Left, addr.address_line1.clone());
        if let Some(line2) = addr.address_line2.as_deref() {
            if !line2.is_empty() {
                y += 5.0;
                text(&mut ops, 130.0, y, 10.0, false, Align::Left, line2);
            }
        }
        y += 5.0;
        text(
            &mut ops,
            130.0,
            y,
            10.0,
            false,
            Align::Left,
            format!("{}, {} {}", addr.city, addr.state, addr.postal_code),
        );
        if !addr.country.is_empty() {
            y += 5.0;
            text(&mut ops, 130.0, y, 10.0, false, Align::Left, addr.country.clone());
        }
    }

    // Separator above the items table
    y += 5.0;
    ops.push(DocOp::Line {
        x1: MARGIN,
        y1: y,
        x2: RIGHT_EDGE,
        y2: y,
    });

    // Itemized table. Column x positions: SrNo, Description, Warranty,
    // Qty, Unit Price (right), Total (right).
    let table_top = y + 7.0;
    let row_height = 7.0;
    let col_sr = MARGIN;
    let col_desc = MARGIN + 14.0;
    let col_warranty = MARGIN + 92.0;
    let col_qty = MARGIN + 118.0;
    let col_unit = MARGIN + 152.0;
    let col_total = RIGHT_EDGE;

    text(&mut ops, col_sr, table_top, 9.0, true, Align::Left, "Sr No");
    text(&mut ops, col_desc, table_top, 9.0, true, Align::Left, "Description");
    text(&mut ops, col_warranty, table_top, 9.0, true, Align::Left, "Warranty");
    text(&mut ops, col_qty, table_top, 9.0, true, Align::Left, "Qty");
    text(&mut ops, col_unit, table_top, 9.0, true, Align::Right, "Unit Price");
    text(&mut ops, col_total, table_top, 9.0, true, Align::Right, "Total");
    ops.push(DocOp::Line {
        x1: MARGIN,
        y1: table_top + 2.0,
        x2: RIGHT_EDGE,
        y2: table_top + 2.0,
    });

    let mut row_y = table_top + row_height;
    for item in &invoice.items {
        text(&mut ops, col_sr, row_y, 8.0, false, Align::Left, item.sr_no.to_string());
        text(&mut ops, col_desc, row_y, 8.0, false, Align::Left, item.description.clone());
        text(
            &mut ops,
            col_warranty,
            row_y,
            8.0,
            false,
            Align::Left,
            item.warranty.clone().unwrap_or_else(|| "-".to_string()),
        );
        text(&mut ops, col_qty, row_y, 8.0, false, Align::Left, item.quantity.to_string());
        text(&mut ops, col_unit, row_y, 8.0, false, Align::Right, amount(item.unit_price));
        text(&mut ops, col_total, row_y, 8.0, false, Align::Right, amount(item.line_total));
        row_y += row_height;
    }

    // Pricing summary, right aligned
    let summary_x = RIGHT_EDGE - 60.0;
    let mut sy = row_y + 5.0;
    text(&mut ops, summary_x, sy, 10.0, false, Align::Left, "Subtotal:");
    text(&mut ops, RIGHT_EDGE, sy, 10.0, false, Align::Right, amount(invoice.pricing.subtotal));
    sy += 6.0;
    text(
        &mut ops,
        summary_x,
        sy,
        10.0,
        false,
        Align::Left,
        format!("GST ({}%):", invoice.pricing.gst_percentage),
    );
    text(&mut ops, RIGHT_EDGE, sy, 10.0, false, Align::Right, amount(invoice.pricing.gst_amount));
    sy += 6.0;
    text(&mut ops, summary_x, sy, 10.0, false, Align::Left, "Shipping:");
    text(&mut ops, RIGHT_EDGE, sy, 10.0, false, Align::Right, "FREE");
    sy += 4.0;
    ops.push(DocOp::Line {
        x1: summary_x,
        y1: sy,
        x2: RIGHT_EDGE,
        y2: sy,
    });
    sy += 8.0;
    text(&mut ops, summary_x, sy, 12.0, true, Align::Left, "Total Amount:");
    text(&mut ops, RIGHT_EDGE, sy, 12.0, true, Align::Right, amount(invoice.pricing.total));

    // Payment block
    sy += 15.0;
    text(&mut ops, MARGIN, sy, 10.0, false, Align::Left, format!("Payment Method: {}", invoice.payment_method));
    sy += 6.0;
    text(&mut ops, MARGIN, sy, 10.0, false, Align::Left, format!("Payment Status: {}", invoice.payment_status));
    sy += 6.0;
    text(&mut ops, MARGIN, sy, 10.0, false, Align::Left, format!("Order Type: {}", invoice.order_type));

    // Terms
    sy += 15.0;
    text(&mut ops, MARGIN, sy, 10.0, true, Align::Left, "Terms & Conditions:");
    for term in [
        "1. Goods once sold will not be taken back or exchanged.",
        "2. Subject to Bangalore jurisdiction only.",
        "3. Warranty terms and conditions apply as per manufacturer guidelines.",
        "4. Invoice generated is computer-generated and does not require signature.",
    ] {
        sy += 5.0;
        text(&mut ops, MARGIN, sy, 8.0, false, Align::Left, term);
    }

    // Footer
    text(
        &mut ops,
        PAGE_WIDTH_MM / 2.0,
        PAGE_HEIGHT_MM - 20.0,
        8.0,
        false,
        Align::Center,
        "Thank you for your business!",
    );
    text(
        &mut ops,
        PAGE_WIDTH_MM / 2.0,
        PAGE_HEIGHT_MM - 15.0,
        8.0,
        false,
        Align::Center,
        "This is a computer-generated invoice.",
    );

    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InvoicePayload {
        InvoicePayload {
            invoice_number: "INV-2024-0042".to_string(),
            invoice_date: "15/03/2024".to_string(),
            order_number: "ORD-1001".to_string(),
            order_date: "12/03/2024".to_string(),
            customer: InvoiceCustomer {
                name: "Asha Rao".to_string(),
                email: "asha@example.com".to_string(),
                phone: "+91 98450 00000".to_string(),
                address: Some(Address {
                    address_line1: "4 MG Road".to_string(),
                    city: "Bangalore".to_string(),
                    state: "Karnataka".to_string(),
                    postal_code: "560001".to_string(),
                    country: "India".to_string(),
                    ..Address::default()
                }),
            },
            items: vec![InvoiceItem {
                sr_no: 1,
                description: "ThinkPad T14 Gen 3 (16GB/512GB)".to_string(),
                warranty: Some("12 months".to_string()),
                quantity: 2,
                unit_price: 42999.0,
                line_total: 85998.0,
            }],
            pricing: InvoicePricing {
                subtotal: 85998.0,
                gst_percentage: 18.0,
                gst_amount: 15479.64,
                total: 101477.64,
            },
            payment_method: "UPI".to_string(),
            payment_status: "PAID".to_string(),
            order_type: "B2C".to_string(),
        }
    }

    fn texts(ops: &[DocOp]) -> Vec<&str> {
        ops.iter()
            .filter_map(|op| match op {
                DocOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(format_inr(0.0), "0.00");
        assert_eq!(format_inr(999.0), "999.00");
        assert_eq!(format_inr(1000.0), "1,000.00");
        assert_eq!(format_inr(123456.78), "1,23,456.78");
        assert_eq!(format_inr(1234567.89), "12,34,567.89");
        assert_eq!(format_inr(10000000.0), "1,00,00,000.00");
        assert_eq!(format_inr(-4500.5), "-4,500.50");
    }

    #[test]
    fn layout_is_deterministic() {
        assert_eq!(layout_invoice(&sample()), layout_invoice(&sample()));
    }

    #[test]
    fn layout_contains_all_blocks_in_order() {
        let ops = layout_invoice(&sample());
        let ts = texts(&ops);
        let idx = |needle: &str| {
            ts.iter()
                .position(|t| t.contains(needle))
                .unwrap_or_else(|| panic!("missing {needle}"))
        };
        assert!(idx("Bright Laptop") < idx("TAX INVOICE"));
        assert!(idx("TAX INVOICE") < idx("Bill To:"));
        assert!(idx("Bill To:") < idx("ThinkPad T14"));
        assert!(idx("ThinkPad T14") < idx("Subtotal:"));
        assert!(idx("Subtotal:") < idx("Total Amount:"));
        assert!(idx("Total Amount:") < idx("Terms & Conditions:"));
        assert!(idx("Terms & Conditions:") < idx("Thank you for your business!"));
        assert!(ts.iter().any(|t| *t == "Rs. 1,01,477.64"));
        assert!(ts.iter().any(|t| t.contains("GST (18%):")));
    }

    #[test]
    fn missing_fields_render_blanks_not_errors() {
        let ops = layout_invoice(&InvoicePayload::default());
        let ts = texts(&ops);
        assert!(ts.iter().any(|t| *t == "Customer"));
        assert!(ts.iter().any(|t| *t == "Invoice Number: "));
        // No bill-to email/phone rows when absent (the single "Email:" line
        // left is the company block's own contact).
        assert_eq!(ts.iter().filter(|t| t.starts_with("Email:")).count(), 1);
        assert!(!ts.iter().any(|t| t.starts_with("Phone: +91 9")));
        assert!(ts.iter().any(|t| *t == "Rs. 0.00"));
    }

    #[test]
    fn warranty_falls_back_to_dash() {
        let mut payload = sample();
        payload.items[0].warranty = None;
        let ops = layout_invoice(&payload);
        assert!(texts(&ops).iter().any(|t| *t == "-"));
    }
}
