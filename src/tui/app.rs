//! Application state for the TUI
//!
//! The App struct holds the calculation inputs, the current report, and the
//! editing state. Every input change recomputes the report.

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::CostError;
use crate::export::{export_report_to_file, ExportFormat};
use crate::models::{CustomService, UsageInputs, MAX_CUSTOM_SERVICES};
use crate::rates::{RateProvider, RateService};
use crate::reports::CostReport;
use crate::services::{CalculationRequest, CostCalculator};

use super::widgets::TextInput;

/// An editable row of the input panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Users,
    ApiCalls,
    Storage,
    Emails,
    Revenue,
    Cycle,
    Currency,
    Service(usize),
}

impl Field {
    /// Fields that are always present, in display order
    pub const BASE: [Field; 7] = [
        Field::Users,
        Field::ApiCalls,
        Field::Storage,
        Field::Emails,
        Field::Revenue,
        Field::Cycle,
        Field::Currency,
    ];

    /// Display label
    pub fn label(&self) -> String {
        match self {
            Field::Users => "Users".to_string(),
            Field::ApiCalls => "API Calls".to_string(),
            Field::Storage => "Storage (GB)".to_string(),
            Field::Emails => "Emails Sent".to_string(),
            Field::Revenue => "Revenue (USD)".to_string(),
            Field::Cycle => "Billing Cycle".to_string(),
            Field::Currency => "Currency".to_string(),
            Field::Service(i) => format!("Service {}", i + 1),
        }
    }

    /// Whether the field is a choice toggled with Left/Right
    pub fn is_toggle(&self) -> bool {
        matches!(self, Field::Cycle | Field::Currency)
    }
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Main application state
pub struct App {
    /// Inputs of the current calculation
    pub request: CalculationRequest,

    /// Report for the current inputs
    pub report: CostReport,

    /// Warning from the last rate lookup
    pub rate_warning: Option<String>,

    /// Index of the selected input field
    pub selected: usize,

    /// Current input mode
    pub input_mode: InputMode,

    /// Edit buffer while editing
    pub input: TextInput,

    /// Status message to display
    pub status_message: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    calculator: CostCalculator,
    rate_service: RateService<Box<dyn RateProvider>>,
    exports_dir: PathBuf,
}

impl App {
    /// Create the app with default usage and the configured cycle and currency
    pub fn new(
        settings: &Settings,
        exports_dir: PathBuf,
        mut rate_service: RateService<Box<dyn RateProvider>>,
    ) -> Self {
        let request = CalculationRequest {
            usage: UsageInputs::default(),
            custom_services: Vec::new(),
            cycle: settings.default_cycle,
            currency: settings.default_currency,
        };
        let calculator = CostCalculator::new(settings.pricing);
        let lookup = rate_service.rates();
        let report = calculator.calculate(&request, &lookup.table);

        Self {
            request,
            report,
            rate_warning: lookup.warning,
            selected: 0,
            input_mode: InputMode::default(),
            input: TextInput::default(),
            status_message: None,
            should_quit: false,
            calculator,
            rate_service,
            exports_dir,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Warnings to surface in the status bar
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Some(warning) = &self.rate_warning {
            warnings.push(warning.clone());
        }
        if let Some(notice) = self.report.notice() {
            warnings.push(notice);
        }
        warnings
    }

    /// All input fields in display order
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = Field::BASE.to_vec();
        fields.extend((0..self.request.custom_services.len()).map(Field::Service));
        fields
    }

    /// The selected field
    pub fn selected_field(&self) -> Field {
        self.fields()
            .get(self.selected)
            .copied()
            .unwrap_or(Field::Users)
    }

    /// Current value of a field as text
    pub fn field_value(&self, field: Field) -> String {
        let usage = &self.request.usage;
        match field {
            Field::Users => usage.users.to_string(),
            Field::ApiCalls => usage.api_calls.to_string(),
            Field::Storage => usage.storage_gb.to_string(),
            Field::Emails => usage.emails.to_string(),
            Field::Revenue => usage.revenue.to_string(),
            Field::Cycle => self.request.cycle.to_string(),
            Field::Currency => self.request.currency.code().to_string(),
            Field::Service(i) => self
                .request
                .custom_services
                .get(i)
                .map(|s| format!("{}:{}:{}", s.name, s.fixed_cost, s.per_user_cost))
                .unwrap_or_default(),
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected < self.fields().len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Start editing the selected field; choice fields toggle instead
    pub fn start_editing(&mut self) {
        let field = self.selected_field();
        if field.is_toggle() {
            self.toggle_next();
            return;
        }
        self.input = TextInput::new(field.label(), self.field_value(field));
        self.input_mode = InputMode::Editing;
    }

    /// Leave editing without applying the buffer
    pub fn cancel_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Apply the edit buffer to the selected field
    ///
    /// Invalid input leaves the field unchanged and stays in editing mode.
    pub fn commit_edit(&mut self) {
        let field = self.selected_field();
        match self.apply_value(field, self.input.value().to_string()) {
            Ok(()) => {
                self.input_mode = InputMode::Normal;
                self.clear_status();
                self.recalculate();
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    fn apply_value(&mut self, field: Field, raw: String) -> Result<(), CostError> {
        let raw = raw.trim();
        let usage = &mut self.request.usage;
        match field {
            Field::Users => usage.users = parse_count(raw, "users")?,
            Field::ApiCalls => usage.api_calls = parse_count(raw, "API calls")?,
            Field::Emails => usage.emails = parse_count(raw, "emails")?,
            Field::Storage => usage.storage_gb = parse_amount(raw, "storage")?,
            Field::Revenue => usage.revenue = parse_amount(raw, "revenue")?,
            Field::Service(i) => {
                let service: CustomService = raw.parse()?;
                if let Some(slot) = self.request.custom_services.get_mut(i) {
                    *slot = service;
                }
            }
            Field::Cycle | Field::Currency => {}
        }
        Ok(())
    }

    /// Advance the selected choice field
    pub fn toggle_next(&mut self) {
        match self.selected_field() {
            Field::Cycle => self.request.cycle = self.request.cycle.toggle(),
            Field::Currency => self.request.currency = self.request.currency.next(),
            _ => return,
        }
        self.recalculate();
    }

    /// Step the selected choice field back
    pub fn toggle_prev(&mut self) {
        match self.selected_field() {
            Field::Cycle => self.request.cycle = self.request.cycle.toggle(),
            Field::Currency => self.request.currency = self.request.currency.prev(),
            _ => return,
        }
        self.recalculate();
    }

    /// Append a custom service and start editing it
    pub fn add_service(&mut self) {
        let count = self.request.custom_services.len();
        if count >= MAX_CUSTOM_SERVICES {
            self.set_status(format!(
                "At most {} custom services are allowed",
                MAX_CUSTOM_SERVICES
            ));
            return;
        }

        self.request
            .custom_services
            .push(CustomService::new(format!("Service {}", count + 1), 0.0, 0.0));
        self.selected = Field::BASE.len() + count;
        self.recalculate();
        self.start_editing();
    }

    /// Remove the selected custom service
    pub fn remove_selected_service(&mut self) {
        if let Field::Service(i) = self.selected_field() {
            let removed = self.request.custom_services.remove(i);
            self.selected = self.selected.min(self.fields().len() - 1);
            self.set_status(format!("Removed service '{}'", removed.name));
            self.recalculate();
        }
    }

    /// Drop cached rates and recompute with a fresh fetch
    pub fn refresh_rates(&mut self) {
        self.rate_service.invalidate();
        self.recalculate();
        if self.rate_warning.is_none() {
            self.set_status("Exchange rates refreshed");
        }
    }

    /// Recompute the report from the current inputs
    pub fn recalculate(&mut self) {
        let lookup = self.rate_service.rates();
        self.rate_warning = lookup.warning;
        self.report = self.calculator.calculate(&self.request, &lookup.table);
    }

    /// Export the current report into the exports directory
    pub fn export(&mut self, format: ExportFormat) {
        let path = self.exports_dir.join(format.default_file_name());
        let result = std::fs::create_dir_all(&self.exports_dir)
            .map_err(CostError::from)
            .and_then(|_| export_report_to_file(&self.report, format, &path));

        match result {
            Ok(()) => self.set_status(format!("Exported to {}", path.display())),
            Err(e) => self.set_status(format!("Export failed: {}", e)),
        }
    }
}

fn parse_count(raw: &str, what: &str) -> Result<u64, CostError> {
    raw.replace(',', "").parse::<u64>().map_err(|_| {
        CostError::Validation(format!("{} must be a whole number, got '{}'", what, raw))
    })
}

fn parse_amount(raw: &str, what: &str) -> Result<f64, CostError> {
    let value = raw.replace(',', "").parse::<f64>().map_err(|_| {
        CostError::Validation(format!("{} must be a number, got '{}'", what, raw))
    })?;
    if value.is_nan() || value < 0.0 {
        return Err(CostError::Validation(format!(
            "{} must be zero or greater",
            what
        )));
    }
    Ok(value)
}
