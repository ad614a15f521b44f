//! The intake engine

use crate::error::IntakeError;
use intake_audit::{run_audit, AuditReport};
use intake_cascade::{update_smart, CascadeItem, CascadeNotice, CascadeOutcome, RemovalProposal, SmartTrigger};
use intake_model::{
    Address, AddressId, Customer, CustomerId, Order, PickupOption, ProcessingOption, RoleKind,
    SelectorValue, SmartValue,
};
use intake_roles::{
    apply_roles, capture_pair, CaptureSource, ContactDirectory, RoleAssignmentProposal,
};
use intake_status::{clear_blocker, recompute_status, set_blocker};
use intake_store::{load_order, save_order, BlobStore};

/// The single mutation route over the shared order document
///
/// Owns the document and the directory; the view layer calls in, and every
/// call either commits one atomic transition (re-deriving dependent state
/// afterwards) or rejects with a typed, user-facing error.
#[derive(Debug)]
pub struct IntakeEngine {
    /// The one shared document
    order: Order,
    /// Known contacts and companies
    directory: ContactDirectory,
    /// Cascade removal awaiting confirm/cancel
    pending_removal: Option<RemovalProposal>,
    /// Role assignment awaiting confirm/decline
    pending_roles: Option<RoleAssignmentProposal>,
    /// Undismissed informational notices
    notices: Vec<CascadeNotice>,
}

impl IntakeEngine {
    /// Engine over a fresh default document
    #[must_use]
    pub fn new(directory: ContactDirectory) -> Self {
        let mut engine = Self {
            order: Order::default_document(),
            directory,
            pending_removal: None,
            pending_roles: None,
            notices: Vec::new(),
        };
        // Derived state is valid from the first read.
        engine.finish_transition();
        engine
    }

    /// Engine over a document loaded (and healed) from the store
    #[must_use]
    pub fn from_store(store: &dyn BlobStore, directory: ContactDirectory) -> Self {
        let order = load_order(store);
        tracing::info!("loaded order \"{}\"", order.order_name);
        Self {
            order,
            directory,
            pending_removal: None,
            pending_roles: None,
            notices: Vec::new(),
        }
    }

    /// Read access to the document
    #[inline]
    #[must_use]
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Read access to the directory
    #[inline]
    #[must_use]
    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    /// Derived state is rebuilt here, strictly after the triggering
    /// mutation has committed.
    fn finish_transition(&mut self) {
        self.order.sync_placeholders();
        recompute_status(&mut self.order.scope_bridge);
    }

    // ---- smart triggers ----

    /// Apply a smart-condition answer
    ///
    /// Additions commit immediately and queue a dismissible notice; a
    /// disable transition may park a removal proposal. An earlier pending
    /// proposal is superseded.
    pub fn update_smart(&mut self, trigger: SmartTrigger, value: SmartValue) {
        // Re-answering yes retires a removal proposal left open for the
        // same trigger.
        if value.is_yes()
            && self
                .pending_removal
                .as_ref()
                .is_some_and(|p| p.trigger == trigger)
        {
            self.pending_removal = None;
        }
        match update_smart(&mut self.order, trigger, value) {
            CascadeOutcome::Added(notice) => {
                tracing::info!("cascade added items: {}", notice.message);
                self.notices.push(notice);
            }
            CascadeOutcome::Proposed(proposal) => {
                tracing::info!("cascade removal proposed: {}", proposal.describe());
                self.pending_removal = Some(proposal);
            }
            CascadeOutcome::FieldOnly => {}
        }
        self.finish_transition();
    }

    /// The removal proposal awaiting a decision, if any
    #[inline]
    #[must_use]
    pub fn pending_removal(&self) -> Option<&RemovalProposal> {
        self.pending_removal.as_ref()
    }

    /// Confirm the pending removal; returns what was actually removed
    ///
    /// Candidates are recomputed against the live document, so anything
    /// re-supplied while the dialog was open survives. Confirming with
    /// nothing pending is a no-op.
    pub fn confirm_cascade_removal(&mut self) -> Vec<CascadeItem> {
        let Some(proposal) = self.pending_removal.take() else {
            return Vec::new();
        };
        let removed = proposal.commit(&mut self.order);
        tracing::info!("cascade removal confirmed, {} item(s) removed", removed.len());
        self.finish_transition();
        removed
    }

    /// Cancel the pending removal with zero document effect
    pub fn cancel_cascade_removal(&mut self) {
        if self.pending_removal.take().is_some() {
            tracing::debug!("cascade removal cancelled");
        }
    }

    /// Undismissed notices, oldest first
    #[inline]
    #[must_use]
    pub fn notices(&self) -> &[CascadeNotice] {
        &self.notices
    }

    /// Dismiss one notice by position
    pub fn dismiss_notice(&mut self, index: usize) {
        if index < self.notices.len() {
            self.notices.remove(index);
        }
    }

    // ---- entities ----

    /// Add a placeholder address row
    pub fn add_address(&mut self) -> AddressId {
        let id = self.order.add_address();
        self.finish_transition();
        id
    }

    /// Add a placeholder customer row
    pub fn add_customer(&mut self) -> CustomerId {
        let id = self.order.add_customer();
        self.finish_transition();
        id
    }

    /// Remove an address
    pub fn remove_address(&mut self, id: AddressId) -> Result<(), IntakeError> {
        self.order.remove_address(id).map_err(|err| {
            tracing::warn!("rejected mutation: {err}");
            err
        })?;
        self.finish_transition();
        Ok(())
    }

    /// Remove a customer; the primary customer is protected
    pub fn remove_customer(&mut self, id: CustomerId) -> Result<(), IntakeError> {
        self.order.remove_customer(id).map_err(|err| {
            tracing::warn!("rejected mutation: {err}");
            err
        })?;
        self.finish_transition();
        Ok(())
    }

    /// Move the primary bit to another customer
    pub fn set_primary_customer(&mut self, id: CustomerId) -> Result<(), IntakeError> {
        self.order.set_primary_customer(id)?;
        self.finish_transition();
        Ok(())
    }

    /// Edit an address, re-deriving dependent state afterwards
    pub fn update_address(
        &mut self,
        id: AddressId,
        edit: impl FnOnce(&mut Address),
    ) -> Result<(), IntakeError> {
        self.order.update_address(id, edit)?;
        self.finish_transition();
        Ok(())
    }

    /// Edit a customer, re-deriving dependent state afterwards
    pub fn update_customer(
        &mut self,
        id: CustomerId,
        edit: impl FnOnce(&mut Customer),
    ) -> Result<(), IntakeError> {
        self.order.update_customer(id, edit)?;
        self.finish_transition();
        Ok(())
    }

    /// Edit the order's flat fields (name, types, coverage, ...)
    pub fn update_order(&mut self, edit: impl FnOnce(&mut Order)) {
        edit(&mut self.order);
        self.finish_transition();
    }

    /// Set the lead source from a selector input
    ///
    /// Accepts a bare string or a full labeled option; the stored value is
    /// the normalized option value either way.
    pub fn set_lead_source(&mut self, category: impl Into<SelectorValue>, detail: &str) {
        let category = category.into();
        self.order.lead_source.category = category.value;
        self.order.lead_source.detail = detail.to_string();
        self.finish_transition();
    }

    /// Add an order type from a selector input
    pub fn add_order_type(&mut self, selection: impl Into<SelectorValue>) -> bool {
        let selection = selection.into();
        let added = self.order.add_order_type(&selection.value);
        self.finish_transition();
        added
    }

    // ---- roles ----

    /// Capture a `(company, contact)` pair from anywhere on the form
    ///
    /// Validates the pair, records brand-new pairs in the directory, and
    /// parks a multi-select role proposal when any role is eligible. The
    /// document itself does not change until confirmation.
    pub fn capture_contact(
        &mut self,
        source: CaptureSource,
        company: &str,
        contact: &str,
    ) -> Result<Option<&RoleAssignmentProposal>, IntakeError> {
        let proposal = capture_pair(&self.order, &mut self.directory, source, company, contact)
            .map_err(|err| {
                tracing::warn!("rejected capture: {err}");
                err
            })?;
        match proposal {
            Some(proposal) => {
                tracing::info!(
                    "role assignment proposed for {} ({} role(s))",
                    proposal.company,
                    proposal.offered.len()
                );
                self.pending_roles = Some(proposal);
                Ok(self.pending_roles.as_ref())
            }
            None => {
                self.pending_roles = None;
                Ok(None)
            }
        }
    }

    /// The role proposal awaiting a decision, if any
    #[inline]
    #[must_use]
    pub fn pending_roles(&self) -> Option<&RoleAssignmentProposal> {
        self.pending_roles.as_ref()
    }

    /// Confirm the pending role proposal with the user's selection
    ///
    /// Eligibility is recomputed live; the return value is what actually
    /// applied. Confirming with nothing pending is a no-op.
    pub fn confirm_role_assignment(&mut self, selected: &[RoleKind]) -> Vec<RoleKind> {
        let Some(proposal) = self.pending_roles.take() else {
            return Vec::new();
        };
        let applied = apply_roles(&mut self.order, &self.directory, &proposal, selected);
        tracing::info!("applied {} role(s) for {}", applied.len(), proposal.company);
        self.finish_transition();
        applied
    }

    /// Drop the pending role proposal with zero document effect
    pub fn decline_role_assignment(&mut self) {
        self.pending_roles = None;
    }

    /// Remove a company role entry (guarded for occupied assignable slots)
    pub fn remove_company_entry(&mut self, kind: &RoleKind) -> Result<(), IntakeError> {
        self.order.remove_company_entry(kind)?;
        self.finish_transition();
        Ok(())
    }

    // ---- scope bridge ----

    /// Add a user-set blocker; auto-managed ids are a no-op
    pub fn set_blocker(&mut self, label: &str) -> bool {
        let changed = set_blocker(&mut self.order.scope_bridge, label);
        self.finish_transition();
        changed
    }

    /// Clear a user-set blocker; auto-managed ids are a no-op
    pub fn clear_blocker(&mut self, label: &str) -> bool {
        let changed = clear_blocker(&mut self.order.scope_bridge, label);
        self.finish_transition();
        changed
    }

    /// Record a milestone (authorization on file, estimate approved, ...)
    pub fn record_milestone(&mut self, key: &str) {
        self.order.scope_bridge.record_milestone(key);
        self.finish_transition();
    }

    /// Remove a recorded milestone
    pub fn clear_milestone(&mut self, key: &str) {
        self.order.scope_bridge.clear_milestone(key);
        self.finish_transition();
    }

    /// Set the processing option
    pub fn set_processing_option(&mut self, option: ProcessingOption) {
        self.order.scope_bridge.processing_option = option;
        self.finish_transition();
    }

    /// Set the pickup option
    pub fn set_pickup_option(&mut self, option: PickupOption) {
        self.order.scope_bridge.pickup_option = option;
        self.finish_transition();
    }

    /// Set or clear the next-step note
    pub fn set_next_step(&mut self, note: &str) {
        self.order.scope_bridge.next_step = note.to_string();
        self.finish_transition();
    }

    /// Record whether the customer asked for an estimate first
    pub fn set_estimate_requested(&mut self, requested: bool) {
        self.order.scope_bridge.estimate_requested = requested;
        self.finish_transition();
    }

    /// Pin the status to red with a reason
    pub fn pin_red(&mut self, reason: &str) {
        let bridge = &mut self.order.scope_bridge;
        bridge.project_status = intake_model::ProjectStatus::Red;
        bridge.status_manual = true;
        bridge.status_reason = reason.to_string();
        tracing::info!("status pinned red: {reason}");
        self.finish_transition();
    }

    /// Release a manual pin and return to derived status
    pub fn unpin_status(&mut self) {
        self.order.scope_bridge.status_manual = false;
        self.finish_transition();
    }

    // ---- peer workspace slices ----

    /// Selected service groups (shared slice)
    #[inline]
    #[must_use]
    pub fn selected_groups(&self) -> &[String] {
        &self.order.scope_bridge.selected_groups
    }

    /// Republish the selected-groups slice, keeping both mirrors in step
    pub fn apply_selected_groups(&mut self, groups: Vec<String>) {
        self.order.scope_bridge.selected_groups = groups.clone();
        self.order.selected_groups = groups;
        self.finish_transition();
    }

    /// Severity slice consumed by the peer workspace
    #[inline]
    #[must_use]
    pub fn severity(&self) -> &str {
        &self.order.severity
    }

    /// Republish the severity slice
    pub fn apply_severity(&mut self, severity: &str) {
        self.order.severity = severity.to_string();
        self.finish_transition();
    }

    // ---- audit & persistence ----

    /// Run the completeness audit over the current document
    #[must_use]
    pub fn audit(&self) -> AuditReport {
        run_audit(&self.order)
    }

    /// Toggle the transient highlight-missing hint
    pub fn set_highlight_missing(&mut self, on: bool) {
        self.order.highlight_missing = on;
    }

    /// Persist the document after running the pre-save audit
    pub fn save_to(&self, store: &mut dyn BlobStore) -> Result<AuditReport, IntakeError> {
        let report = self.audit();
        tracing::info!(
            "saving order \"{}\" at {}% complete ({} missing)",
            self.order.order_name,
            report.percent,
            report.missing.len()
        );
        save_order(store, &self.order)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_status::{AUTHORIZATION_ON_FILE, PRODUCTION_AUTHORIZED};

    #[test]
    fn derived_state_recomputes_after_commit() {
        let mut engine = IntakeEngine::new(ContactDirectory::new());
        // Fresh order: no authorization on file, so yellow.
        engine.update_order(|_| {});
        assert_eq!(
            engine.order().scope_bridge.project_status,
            intake_model::ProjectStatus::Yellow
        );

        engine.record_milestone(AUTHORIZATION_ON_FILE);
        assert_eq!(
            engine.order().scope_bridge.project_status,
            intake_model::ProjectStatus::Green
        );
        assert_eq!(engine.order().scope_bridge.status_reason, PRODUCTION_AUTHORIZED);
    }

    #[test]
    fn notices_queue_and_dismiss() {
        let mut engine = IntakeEngine::new(ContactDirectory::new());
        engine.update_smart(SmartTrigger::MoldMildew, SmartValue::Yes);
        assert_eq!(engine.notices().len(), 1);
        engine.dismiss_notice(0);
        assert!(engine.notices().is_empty());
    }

    #[test]
    fn selector_inputs_normalize_at_the_boundary() {
        let mut engine = IntakeEngine::new(ContactDirectory::new());
        engine.set_lead_source("Adjuster", "Alex Morgan");
        assert_eq!(engine.order().lead_source.category, "Adjuster");

        engine.set_lead_source(SelectorValue::new("Web Search", "web", "marketing"), "");
        assert_eq!(engine.order().lead_source.category, "web");

        assert!(engine.add_order_type(SelectorValue::new("Mold", "Mold", "order_type")));
        assert!(!engine.add_order_type("Mold"));
    }

    #[test]
    fn confirm_without_pending_is_noop() {
        let mut engine = IntakeEngine::new(ContactDirectory::new());
        assert!(engine.confirm_cascade_removal().is_empty());
        assert!(engine.confirm_role_assignment(&[RoleKind::Insurance]).is_empty());
    }
}
