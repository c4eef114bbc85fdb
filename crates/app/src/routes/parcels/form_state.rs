use shared_types::{AppError, CreateParcelRequest, CreateParcelResponse, DraftField, ParcelDraft};

/// Shown for every failed submission, whatever the cause.
pub const SUBMIT_ERROR_MESSAGE: &str = "Failed to create shipment. Please try again.";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Shipment created successfully!";

/// Draft values plus the transient flags of the shipment form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParcelFormState {
    pub draft: ParcelDraft,
    /// A create request is in flight.
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
    /// Tracking number returned by the last successful create.
    pub tracking_number: Option<String>,
}

impl ParcelFormState {
    /// Replace one draft field. No validation happens here.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Replace the field bound to the input called `name`. Returns `false`
    /// and leaves the draft untouched when no draft field has that name.
    pub fn handle_change(&mut self, name: &str, value: impl Into<String>) -> bool {
        match name.parse::<DraftField>() {
            Ok(field) => {
                self.set_field(field, value);
                true
            }
            Err(_) => false,
        }
    }

    /// Inputs and the submit control are disabled while a request is in flight.
    pub fn submit_disabled(&self) -> bool {
        self.loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Creating Shipment..."
        } else {
            "Create Shipment"
        }
    }

    /// Start a submission: mark it in flight, clear the previous outcome and
    /// build the payload. Returns `None` while another submission is pending.
    pub fn begin_submission(&mut self) -> Option<CreateParcelRequest> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        self.success = false;
        self.tracking_number = None;
        Some(self.draft.to_request())
    }

    /// Apply the outcome of the create call. Success resets the draft;
    /// failure keeps it for correction. Either way the form is re-enabled.
    pub fn finish_submission(&mut self, outcome: Result<CreateParcelResponse, AppError>) {
        match outcome {
            Ok(created) => {
                self.success = true;
                self.error = None;
                self.tracking_number = Some(created.tracking_number);
                self.draft = ParcelDraft::default();
            }
            Err(_) => {
                self.error = Some(SUBMIT_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }
}
