//! Dispatch workflow for a single order.
//!
//! Carrier rates depend on the package dimensions, so a quote and its
//! courier selection are only valid for the dimensions they were fetched
//! with. Editing any dimension while a quote is loaded drops both and the
//! rates must be fetched again before dispatch is possible.
//!
//! Phases: Idle -> RatesLoading -> RatesReady -> CourierSelected ->
//! Dispatching -> Dispatched. Failures are recoverable: a rate-lookup
//! failure lands back in Idle with the error surfaced, a dispatch failure
//! keeps the courier selection so the user can retry without re-querying
//! rates.

use super::shipping::{CourierOption, PackageDimensions, RateQuote, ShipmentRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchPhase {
    Idle,
    RatesLoading,
    RatesReady,
    CourierSelected,
    Dispatching,
    Dispatched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Length,
    Breadth,
    Height,
    Weight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispatchMachine {
    order_id: String,
    phase: DispatchPhase,
    dimensions: PackageDimensions,
    quote: Option<RateQuote>,
    /// Dimensions snapshotted when the in-flight lookup started; the quote
    /// is keyed to these, not to whatever the fields hold on arrival.
    quoted_dims: Option<PackageDimensions>,
    selected: Option<CourierOption>,
    /// Soft message ("no courier partners available"), not a failure.
    notice: Option<String>,
    error: Option<String>,
}

impl DispatchMachine {
    pub fn new(order_id: String) -> Self {
        Self {
            order_id,
            phase: DispatchPhase::Idle,
            dimensions: PackageDimensions::default(),
            quote: None,
            quoted_dims: None,
            selected: None,
            notice: None,
            error: None,
        }
    }

    pub fn phase(&self) -> DispatchPhase {
        self.phase
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn dimensions(&self) -> PackageDimensions {
        self.dimensions
    }

    pub fn couriers(&self) -> &[CourierOption] {
        self.quote.as_ref().map(|q| q.couriers.as_slice()).unwrap_or(&[])
    }

    pub fn selected(&self) -> Option<&CourierOption> {
        self.selected.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Update one dimension field. While a quote is on screen (loaded or
    /// with a courier picked) this invalidates it: quote and selection are
    /// dropped and the machine returns to Idle. Ignored once dispatching
    /// has started.
    pub fn edit_dimension(&mut self, field: Dimension, value: f64) {
        match self.phase {
            DispatchPhase::Dispatching | DispatchPhase::Dispatched => return,
            DispatchPhase::RatesReady | DispatchPhase::CourierSelected => {
                self.quote = None;
                self.selected = None;
                self.phase = DispatchPhase::Idle;
            }
            DispatchPhase::Idle | DispatchPhase::RatesLoading => {}
        }
        match field {
            Dimension::Length => self.dimensions.length = value,
            Dimension::Breadth => self.dimensions.breadth = value,
            Dimension::Height => self.dimensions.height = value,
            Dimension::Weight => self.dimensions.weight = value,
        }
        self.notice = None;
        self.error = None;
    }

    pub fn can_check_rates(&self) -> bool {
        matches!(self.phase, DispatchPhase::Idle) && self.dimensions.is_complete()
    }

    /// Begin a rate lookup with the current dimensions. Clears any prior
    /// quote, selection and messages. Returns the request to send, or None
    /// when the machine is not in a state to look up rates.
    pub fn rates_requested(&mut self) -> Option<PackageDimensions> {
        if !self.can_check_rates() {
            return None;
        }
        self.quote = None;
        self.selected = None;
        self.notice = None;
        self.error = None;
        self.quoted_dims = Some(self.dimensions);
        self.phase = DispatchPhase::RatesLoading;
        Some(self.dimensions)
    }

    /// Quote response arrived. Zero couriers is not a failure: the machine
    /// returns to Idle with a user-visible notice.
    pub fn rates_received(&mut self, couriers: Vec<CourierOption>) {
        if self.phase != DispatchPhase::RatesLoading {
            return;
        }
        if couriers.is_empty() {
            self.phase = DispatchPhase::Idle;
            self.notice = Some("No courier partners available for this route".to_string());
            return;
        }
        self.quote = Some(RateQuote {
            order_id: self.order_id.clone(),
            dimensions: self.quoted_dims.take().unwrap_or(self.dimensions),
            couriers,
        });
        self.phase = DispatchPhase::RatesReady;
    }

    pub fn rates_failed(&mut self, message: String) {
        if self.phase != DispatchPhase::RatesLoading {
            return;
        }
        self.phase = DispatchPhase::Idle;
        self.error = Some(message);
    }

    /// Pick a courier from the current quote. Single-select, last click
    /// wins. No-op unless a quote is loaded and the id belongs to it.
    pub fn select_courier(&mut self, courier_company_id: i64) {
        if !matches!(self.phase, DispatchPhase::RatesReady | DispatchPhase::CourierSelected) {
            return;
        }
        let found = self
            .quote
            .as_ref()
            .and_then(|q| q.couriers.iter().find(|c| c.courier_company_id == courier_company_id))
            .cloned();
        if let Some(courier) = found {
            self.selected = Some(courier);
            self.phase = DispatchPhase::CourierSelected;
        }
    }

    pub fn can_dispatch(&self) -> bool {
        self.phase == DispatchPhase::CourierSelected
    }

    /// Start the dispatch call. Returns the shipment request carrying the
    /// selected courier and the dimensions the quote was computed for, or
    /// None when no courier is selected (dispatch is a no-op then).
    pub fn dispatch_started(&mut self) -> Option<ShipmentRequest> {
        if !self.can_dispatch() {
            return None;
        }
        let quote = self.quote.as_ref()?;
        let courier = self.selected.as_ref()?;
        let dims = quote.dimensions;
        let request = ShipmentRequest {
            order_id: self.order_id.clone(),
            length: dims.length,
            breadth: dims.breadth,
            height: dims.height,
            weight: dims.weight,
            courier_company_id: courier.courier_company_id,
            courier_name: courier.courier_name.clone(),
        };
        self.phase = DispatchPhase::Dispatching;
        self.error = None;
        Some(request)
    }

    /// Dispatch call failed. The selection survives so the user can retry
    /// without a fresh rate lookup.
    pub fn dispatch_failed(&mut self, message: String) {
        if self.phase != DispatchPhase::Dispatching {
            return;
        }
        self.phase = DispatchPhase::CourierSelected;
        self.error = Some(message);
    }

    /// Terminal state; the UI closes the modal and refreshes the parent
    /// list.
    pub fn dispatch_succeeded(&mut self) {
        if self.phase == DispatchPhase::Dispatching {
            self.phase = DispatchPhase::Dispatched;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courier(id: i64, name: &str, rate: f64) -> CourierOption {
        CourierOption {
            courier_company_id: id,
            courier_name: name.to_string(),
            rate,
            etd: "3 days".to_string(),
            rating: 4.2,
        }
    }

    fn machine_with_quote() -> DispatchMachine {
        let mut m = DispatchMachine::new("order-1".to_string());
        m.edit_dimension(Dimension::Length, 40.0);
        m.edit_dimension(Dimension::Breadth, 30.0);
        m.edit_dimension(Dimension::Height, 8.0);
        m.edit_dimension(Dimension::Weight, 2.5);
        m.rates_requested().unwrap();
        m.rates_received(vec![courier(1, "BlueDart", 240.0), courier(2, "Delhivery", 198.0)]);
        m
    }

    #[test]
    fn rates_require_complete_dimensions() {
        let mut m = DispatchMachine::new("o".to_string());
        assert!(m.rates_requested().is_none());
        m.edit_dimension(Dimension::Length, 40.0);
        m.edit_dimension(Dimension::Breadth, 30.0);
        m.edit_dimension(Dimension::Height, 8.0);
        assert!(m.rates_requested().is_none());
        m.edit_dimension(Dimension::Weight, 2.5);
        assert!(m.rates_requested().is_some());
        assert_eq!(m.phase(), DispatchPhase::RatesLoading);
    }

    #[test]
    fn dimension_edit_invalidates_quote_and_selection() {
        let mut m = machine_with_quote();
        m.select_courier(2);
        assert_eq!(m.phase(), DispatchPhase::CourierSelected);

        m.edit_dimension(Dimension::Weight, 3.0);
        assert_eq!(m.phase(), DispatchPhase::Idle);
        assert!(m.couriers().is_empty());
        assert!(m.selected().is_none());
        assert!(m.dispatch_started().is_none());
    }

    #[test]
    fn dispatch_is_noop_without_selection() {
        let mut m = machine_with_quote();
        assert!(!m.can_dispatch());
        assert!(m.dispatch_started().is_none());
        assert_eq!(m.phase(), DispatchPhase::RatesReady);
    }

    #[test]
    fn last_courier_click_wins() {
        let mut m = machine_with_quote();
        m.select_courier(1);
        m.select_courier(2);
        assert_eq!(m.selected().unwrap().courier_company_id, 2);
        assert_eq!(m.phase(), DispatchPhase::CourierSelected);
    }

    #[test]
    fn unknown_courier_id_is_ignored() {
        let mut m = machine_with_quote();
        m.select_courier(99);
        assert!(m.selected().is_none());
        assert_eq!(m.phase(), DispatchPhase::RatesReady);
    }

    #[test]
    fn zero_couriers_returns_to_idle_with_notice() {
        let mut m = DispatchMachine::new("o".to_string());
        m.edit_dimension(Dimension::Length, 10.0);
        m.edit_dimension(Dimension::Breadth, 10.0);
        m.edit_dimension(Dimension::Height, 10.0);
        m.edit_dimension(Dimension::Weight, 1.0);
        m.rates_requested().unwrap();
        m.rates_received(vec![]);
        assert_eq!(m.phase(), DispatchPhase::Idle);
        assert!(m.notice().unwrap().contains("No courier partners"));
        assert!(m.error().is_none());
        // No selection is possible in this state.
        m.select_courier(1);
        assert!(m.selected().is_none());
    }

    #[test]
    fn rate_failure_is_recoverable() {
        let mut m = DispatchMachine::new("o".to_string());
        m.edit_dimension(Dimension::Length, 10.0);
        m.edit_dimension(Dimension::Breadth, 10.0);
        m.edit_dimension(Dimension::Height, 10.0);
        m.edit_dimension(Dimension::Weight, 1.0);
        m.rates_requested().unwrap();
        m.rates_failed("gateway timeout".to_string());
        assert_eq!(m.phase(), DispatchPhase::Idle);
        assert_eq!(m.error(), Some("gateway timeout"));
        // The next dimension edit clears the surfaced error.
        m.edit_dimension(Dimension::Weight, 1.2);
        assert!(m.error().is_none());
    }

    #[test]
    fn dispatch_request_carries_quote_dimensions_and_courier() {
        let mut m = machine_with_quote();
        m.select_courier(2);
        let req = m.dispatch_started().unwrap();
        assert_eq!(req.order_id, "order-1");
        assert_eq!(req.length, 40.0);
        assert_eq!(req.breadth, 30.0);
        assert_eq!(req.height, 8.0);
        assert_eq!(req.weight, 2.5);
        assert_eq!(req.courier_company_id, 2);
        assert_eq!(req.courier_name, "Delhivery");
        assert_eq!(m.phase(), DispatchPhase::Dispatching);
    }

    #[test]
    fn dispatch_failure_keeps_selection_for_retry() {
        let mut m = machine_with_quote();
        m.select_courier(1);
        m.dispatch_started().unwrap();
        m.dispatch_failed("courier rejected pickup".to_string());
        assert_eq!(m.phase(), DispatchPhase::CourierSelected);
        assert_eq!(m.selected().unwrap().courier_company_id, 1);
        // Retry works without re-querying rates.
        assert!(m.dispatch_started().is_some());
    }

    #[test]
    fn dispatched_is_terminal() {
        let mut m = machine_with_quote();
        m.select_courier(1);
        m.dispatch_started().unwrap();
        m.dispatch_succeeded();
        assert_eq!(m.phase(), DispatchPhase::Dispatched);
        m.edit_dimension(Dimension::Weight, 9.0);
        assert_eq!(m.phase(), DispatchPhase::Dispatched);
        assert!(m.dispatch_started().is_none());
    }

    #[test]
    fn edits_while_loading_do_not_cancel_the_lookup() {
        let mut m = DispatchMachine::new("o".to_string());
        m.edit_dimension(Dimension::Length, 10.0);
        m.edit_dimension(Dimension::Breadth, 10.0);
        m.edit_dimension(Dimension::Height, 10.0);
        m.edit_dimension(Dimension::Weight, 1.0);
        m.rates_requested().unwrap();
        m.edit_dimension(Dimension::Weight, 2.0);
        assert_eq!(m.phase(), DispatchPhase::RatesLoading);

        // The quote stays keyed to the dimensions the lookup was made with,
        // so a dispatch can never ship at a rate for different dimensions.
        m.rates_received(vec![courier(1, "BlueDart", 120.0)]);
        m.select_courier(1);
        let req = m.dispatch_started().unwrap();
        assert_eq!(req.weight, 1.0);
    }
}
