//! Validation rules for the voyage creation form.
//!
//! DESIGN
//! ======
//! Rules mirror a declarative object schema with one refinement:
//! every scalar field is required, the richer form variant needs a minimum
//! unit-type selection, and departure must precede arrival. The ordering
//! refinement runs even when field rules already failed, so an empty
//! departure carries both "Missing input" and the ordering message; the form
//! reports only the first message per field.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::VoyageDraft;
use crate::util::datetime::departs_before;
use crate::util::form_errors::{ErrorNode, ErrorTree};

pub const MISSING_INPUT: &str = "Missing input";
pub const DEPARTURE_BEFORE_ARRIVAL: &str = "Departure must be before arrival";
pub const MIN_UNIT_TYPES: usize = 5;
pub const MIN_UNIT_TYPES_MESSAGE: &str = "At least 5 UnitTypes must be selected";

/// Which version of the creation form is in use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormVariant {
    /// Five scalar fields only, no unit-type selector.
    Basic,
    /// Adds the unit-type multi-select with its minimum-selection rule.
    #[default]
    WithUnitTypes,
}

impl FormVariant {
    pub fn has_unit_types(self) -> bool {
        matches!(self, Self::WithUnitTypes)
    }
}

/// Form fields, in the order errors are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VoyageField {
    ScheduledDeparture,
    ScheduledArrival,
    PortOfLoading,
    PortOfDischarge,
    Vessel,
    UnitTypes,
}

impl VoyageField {
    pub const SCALARS: [Self; 5] = [
        Self::ScheduledDeparture,
        Self::ScheduledArrival,
        Self::PortOfLoading,
        Self::PortOfDischarge,
        Self::Vessel,
    ];

    /// Wire/field path the error is keyed by.
    pub fn path(self) -> &'static str {
        match self {
            Self::ScheduledDeparture => "scheduledDeparture",
            Self::ScheduledArrival => "scheduledArrival",
            Self::PortOfLoading => "portOfLoading",
            Self::PortOfDischarge => "portOfDischarge",
            Self::Vessel => "vessel",
            Self::UnitTypes => "unitTypes",
        }
    }

    /// Value of a scalar field; `UnitTypes` has no scalar value.
    pub fn scalar_value(self, draft: &VoyageDraft) -> Option<&str> {
        match self {
            Self::ScheduledDeparture => Some(&draft.scheduled_departure),
            Self::ScheduledArrival => Some(&draft.scheduled_arrival),
            Self::PortOfLoading => Some(&draft.port_of_loading),
            Self::PortOfDischarge => Some(&draft.port_of_discharge),
            Self::Vessel => Some(&draft.vessel),
            Self::UnitTypes => None,
        }
    }

    /// Overwrite a scalar field; no-op for `UnitTypes`.
    pub fn set_scalar(self, draft: &mut VoyageDraft, value: String) {
        match self {
            Self::ScheduledDeparture => draft.scheduled_departure = value,
            Self::ScheduledArrival => draft.scheduled_arrival = value,
            Self::PortOfLoading => draft.port_of_loading = value,
            Self::PortOfDischarge => draft.port_of_discharge = value,
            Self::Vessel => draft.vessel = value,
            Self::UnitTypes => {}
        }
    }
}

/// One violated rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    pub field: VoyageField,
    pub message: String,
}

/// Every violated rule, in the order the rules ran.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    issues: Vec<Issue>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: VoyageField, message: impl Into<String>) {
        self.issues.push(Issue { field, message: message.into() });
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn messages_for(&self, field: VoyageField) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|i| i.field == field)
            .map(|i| i.message.as_str())
            .collect()
    }

    pub fn first_message(&self, field: VoyageField) -> Option<&str> {
        self.issues.iter().find(|i| i.field == field).map(|i| i.message.as_str())
    }

    /// Fields with at least one issue, in field order.
    pub fn fields(&self) -> Vec<VoyageField> {
        let mut fields: Vec<VoyageField> = self.issues.iter().map(|i| i.field).collect();
        fields.sort_unstable();
        fields.dedup();
        fields
    }

    /// Per-field error nodes under a root. Only the first message of each
    /// field becomes the node message; `types` stays empty.
    pub fn to_error_tree(&self) -> ErrorTree {
        let mut tree = ErrorTree::new();
        let root = tree.root();
        for field in self.fields() {
            let node = ErrorNode {
                message: self.first_message(field).map(str::to_owned),
                types: Vec::new(),
            };
            tree.add_child(root, field.path(), node);
        }
        tree
    }
}

/// Blank draft for a fresh form. The unit-type variant starts with an empty
/// selection rather than none.
pub fn empty_draft(variant: FormVariant) -> VoyageDraft {
    VoyageDraft { unit_types: variant.has_unit_types().then(Vec::new), ..VoyageDraft::default() }
}

/// Check a draft against the rules for `variant`.
///
/// # Errors
///
/// Returns every violated rule; on success the draft is returned unchanged.
pub fn validate(draft: &VoyageDraft, variant: FormVariant) -> Result<VoyageDraft, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for field in VoyageField::SCALARS {
        if field.scalar_value(draft).is_some_and(str::is_empty) {
            errors.push(field, MISSING_INPUT);
        }
    }

    if variant.has_unit_types() {
        let selected = draft.unit_types.as_ref().map_or(0, Vec::len);
        if selected < MIN_UNIT_TYPES {
            errors.push(VoyageField::UnitTypes, MIN_UNIT_TYPES_MESSAGE);
        }
    }

    if !departs_before(&draft.scheduled_departure, &draft.scheduled_arrival) {
        errors.push(VoyageField::ScheduledDeparture, DEPARTURE_BEFORE_ARRIVAL);
    }

    if errors.is_empty() { Ok(draft.clone()) } else { Err(errors) }
}
