//! Comparison requests: raw form text in, validated inputs and report out
//!
//! This is the gate that runs before any projection. A request is rejected
//! when the duration is missing, a supplied amount is unreadable, both
//! amounts are zero, or the duration is not a positive number of years.

use std::collections::HashMap;
use chrono::{Local, NaiveDate};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use crate::config::RateConfig;
use crate::error::{AmountField, ComparisonError};
use crate::normalize::{
    format_monetary_amount, is_valid_positive_number, months_for_years, parse_duration_years,
    parse_monetary_amount,
};
use crate::scenario::{compare_scenarios, schedule_scenarios, ScenarioComparison, ScenarioSchedules};

/// Raw form fields, exactly as the visitor typed them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRequest {
    /// Initial deposit, e.g. "R$ 10.000,00" (optional)
    #[serde(default)]
    pub initial_investment: Option<String>,

    /// Monthly contribution, e.g. "R$ 1.000,00" (optional)
    #[serde(default)]
    pub monthly_investment: Option<String>,

    /// Horizon in years, e.g. "2 anos" (required)
    #[serde(default)]
    pub time_investment: Option<String>,
}

/// Numbers that passed the gate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidatedInputs {
    pub principal: f64,
    pub monthly_contribution: f64,
    pub years: f64,
    pub months: u32,
}

impl ValidatedInputs {
    /// Principal plus every monthly contribution, without growth
    pub fn total_invested(&self) -> f64 {
        self.principal + self.monthly_contribution * f64::from(self.months)
    }
}

impl ComparisonRequest {
    pub fn new(
        initial_investment: Option<&str>,
        monthly_investment: Option<&str>,
        time_investment: Option<&str>,
    ) -> Self {
        Self {
            initial_investment: initial_investment.map(str::to_string),
            monthly_investment: monthly_investment.map(str::to_string),
            time_investment: time_investment.map(str::to_string),
        }
    }

    /// Build from query-string style parameters (`initialInvestment=...`)
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            initial_investment: params.get("initialInvestment").cloned(),
            monthly_investment: params.get("monthlyInvestment").cloned(),
            time_investment: params.get("timeInvestment").cloned(),
        }
    }

    /// Run the gate
    pub fn validate(&self) -> Result<ValidatedInputs, ComparisonError> {
        let result = self.check();
        if let Err(ref e) = result {
            warn!("rejected comparison request {:?}: {}", self, e);
        }
        result
    }

    fn check(&self) -> Result<ValidatedInputs, ComparisonError> {
        let time_text = match self.time_investment.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => return Err(ComparisonError::MissingDuration),
        };

        let principal = read_amount(self.initial_investment.as_deref(), AmountField::Initial)?;
        let monthly_contribution =
            read_amount(self.monthly_investment.as_deref(), AmountField::Monthly)?;

        if principal == 0.0 && monthly_contribution == 0.0 {
            return Err(ComparisonError::NoInvestmentAmount);
        }

        let years = parse_duration_years(time_text).map_err(|_| ComparisonError::InvalidDuration)?;
        if !is_valid_positive_number(years) {
            return Err(ComparisonError::InvalidDuration);
        }
        let months = months_for_years(years).ok_or(ComparisonError::InvalidDuration)?;

        Ok(ValidatedInputs {
            principal,
            monthly_contribution,
            years,
            months,
        })
    }

    /// Validate and project both scenarios, stamping the report with today's date
    pub fn compare(&self, rates: &RateConfig) -> Result<ComparisonReport, ComparisonError> {
        self.compare_on(rates, Local::now().date_naive())
    }

    /// Validate and project both scenarios, stamping the report with `rates_as_of`
    pub fn compare_on(
        &self,
        rates: &RateConfig,
        rates_as_of: NaiveDate,
    ) -> Result<ComparisonReport, ComparisonError> {
        let inputs = self.validate()?;
        let comparison = compare_scenarios(
            inputs.principal,
            inputs.monthly_contribution,
            inputs.months,
            rates,
        );

        info!(
            "compared {} months: reference {:.2}, fund {:.2}",
            inputs.months, comparison.reference, comparison.fund
        );

        Ok(ComparisonReport::new(&inputs, rates, comparison, rates_as_of))
    }

    /// Validate and build both monthly schedules
    pub fn schedules(&self, rates: &RateConfig) -> Result<ScenarioSchedules, ComparisonError> {
        let inputs = self.validate()?;
        Ok(schedule_scenarios(
            inputs.principal,
            inputs.monthly_contribution,
            inputs.months,
            rates,
        ))
    }
}

/// Absent or blank fields count as zero; unreadable text is rejected
fn read_amount(text: Option<&str>, field: AmountField) -> Result<f64, ComparisonError> {
    match text {
        None => Ok(0.0),
        Some(text) => parse_monetary_amount(text)
            .map_err(|source| ComparisonError::InvalidAmount { field, source }),
    }
}

/// Result of a comparison, ready for display or serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub months: u32,
    pub years: f64,
    pub principal: f64,
    pub monthly_contribution: f64,
    pub total_invested: f64,
    pub reference_rate: f64,
    pub fund_rate: f64,
    pub reference_amount: f64,
    pub fund_amount: f64,
    /// Reference amount formatted as currency
    pub reference_display: String,
    /// Fund amount formatted as currency
    pub fund_display: String,
    /// Date the rates were last updated
    pub rates_as_of: NaiveDate,
}

impl ComparisonReport {
    pub fn new(
        inputs: &ValidatedInputs,
        rates: &RateConfig,
        comparison: ScenarioComparison,
        rates_as_of: NaiveDate,
    ) -> Self {
        Self {
            months: inputs.months,
            years: inputs.years,
            principal: inputs.principal,
            monthly_contribution: inputs.monthly_contribution,
            total_invested: inputs.total_invested(),
            reference_rate: rates.reference_rate,
            fund_rate: rates.fund_rate,
            reference_amount: comparison.reference,
            fund_amount: comparison.fund,
            reference_display: format_monetary_amount(comparison.reference),
            fund_display: format_monetary_amount(comparison.fund),
            rates_as_of,
        }
    }

    /// "Em N meses você teria:"
    pub fn headline(&self) -> String {
        format!("Em {} meses você teria:", self.months)
    }

    /// Rates date in dd/mm/yyyy
    pub fn rates_as_of_display(&self) -> String {
        self.rates_as_of.format("%d/%m/%Y").to_string()
    }
}
