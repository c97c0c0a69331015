//! Form validation for command-line input.
//!
//! # Responsibility
//! - Reject incomplete or malformed input before any use-case call.
//! - Convert raw text fields into core drafts.
//!
//! # Invariants
//! - Required text fields are trimmed and must be non-empty.
//! - Dates are `DD/MM/YYYY` calendar dates (day and month may be unpadded);
//!   an empty end date means open-ended.
//! - Uniqueness and references are left to the core repositories.

use chrono::NaiveDate;
use clap::Args;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use vehireg_core::{
    BrandId, ModelId, Owner, OwnerDraft, OwnerId, Ownership, Vehicle, VehicleDraft, VehicleId,
    VehicleModel,
};

/// Display and input format for dates.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

// Day and month take one or two digits; the year is always four.
static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("valid date regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingField(&'static str),
    InvalidNumber { field: &'static str, value: String },
    InvalidDate { field: &'static str, value: String },
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::InvalidNumber { field, value } => {
                write!(f, "invalid numeric input for {field}: `{value}`")
            }
            Self::InvalidDate { field, value } => write!(
                f,
                "invalid date for {field}: `{value}`; expected DD/MM/YYYY"
            ),
        }
    }
}

impl Error for FormError {}

pub type FormResult<T> = Result<T, FormError>;

#[derive(Debug, Clone, Default, Args)]
pub struct BrandInput {
    #[arg(long)]
    pub name: Option<String>,
}

impl BrandInput {
    pub fn validate(&self) -> FormResult<String> {
        required("name", self.name.as_deref())
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ModelInput {
    #[arg(long)]
    pub name: Option<String>,
    /// Brand id
    #[arg(long)]
    pub brand: Option<String>,
}

impl ModelInput {
    pub fn validate(&self) -> FormResult<(String, BrandId)> {
        let name = required("name", self.name.as_deref())?;
        let brand_id = parse_number("brand", self.brand.as_deref())?;
        Ok((name, brand_id))
    }

    /// Fills fields absent from the command line with the stored values.
    pub fn or_stored(self, stored: &VehicleModel) -> Self {
        Self {
            name: self.name.or_else(|| Some(stored.name.clone())),
            brand: self.brand.or_else(|| Some(stored.brand_id.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct VehicleInput {
    #[arg(long)]
    pub registration: Option<String>,
    #[arg(long)]
    pub year: Option<String>,
    /// Weight in kilograms
    #[arg(long)]
    pub weight: Option<String>,
    #[arg(long)]
    pub horsepower: Option<String>,
    #[arg(long)]
    pub fiscal_power: Option<String>,
    /// Model id
    #[arg(long)]
    pub model: Option<String>,
}

impl VehicleInput {
    pub fn validate(&self) -> FormResult<VehicleDraft> {
        let registration = required("registration", self.registration.as_deref())?;
        let model_id: ModelId = parse_number("model", self.model.as_deref())?;
        Ok(VehicleDraft {
            registration,
            model_year: parse_number("year", self.year.as_deref())?,
            weight: parse_finite("weight", self.weight.as_deref())?,
            horsepower: parse_number("horsepower", self.horsepower.as_deref())?,
            fiscal_power: parse_number("fiscal power", self.fiscal_power.as_deref())?,
            model_id,
        })
    }

    pub fn or_stored(self, stored: &Vehicle) -> Self {
        Self {
            registration: self
                .registration
                .or_else(|| Some(stored.registration.clone())),
            year: self.year.or_else(|| Some(stored.model_year.to_string())),
            weight: self.weight.or_else(|| Some(stored.weight.to_string())),
            horsepower: self
                .horsepower
                .or_else(|| Some(stored.horsepower.to_string())),
            fiscal_power: self
                .fiscal_power
                .or_else(|| Some(stored.fiscal_power.to_string())),
            model: self.model.or_else(|| Some(stored.model_id.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct OwnerInput {
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub postal_code: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
}

impl OwnerInput {
    pub fn validate(&self) -> FormResult<OwnerDraft> {
        Ok(OwnerDraft {
            last_name: required("last name", self.last_name.as_deref())?,
            first_name: required("first name", self.first_name.as_deref())?,
            address: required("address", self.address.as_deref())?,
            postal_code: required("postal code", self.postal_code.as_deref())?,
            city: required("city", self.city.as_deref())?,
        })
    }

    pub fn or_stored(self, stored: &Owner) -> Self {
        Self {
            last_name: self.last_name.or_else(|| Some(stored.last_name.clone())),
            first_name: self.first_name.or_else(|| Some(stored.first_name.clone())),
            address: self.address.or_else(|| Some(stored.address.clone())),
            postal_code: self
                .postal_code
                .or_else(|| Some(stored.postal_code.clone())),
            city: self.city.or_else(|| Some(stored.city.clone())),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct OwnershipKeyInput {
    /// Owner id
    #[arg(long)]
    pub owner: Option<String>,
    /// Vehicle id
    #[arg(long)]
    pub vehicle: Option<String>,
}

impl OwnershipKeyInput {
    pub fn validate(&self) -> FormResult<(OwnerId, VehicleId)> {
        let owner_id = parse_number("owner", self.owner.as_deref())?;
        let vehicle_id = parse_number("vehicle", self.vehicle.as_deref())?;
        Ok((owner_id, vehicle_id))
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct OwnershipInput {
    #[command(flatten)]
    pub key: OwnershipKeyInput,
    /// Start date, DD/MM/YYYY
    #[arg(long)]
    pub start: Option<String>,
    /// End date, DD/MM/YYYY; pass an empty value to clear it
    #[arg(long)]
    pub end: Option<String>,
}

impl OwnershipInput {
    pub fn validate(&self) -> FormResult<Ownership> {
        let (owner_id, vehicle_id) = self.key.validate()?;
        let start = required("start date", self.start.as_deref())?;
        let start_date = parse_date("start date", &start)?;
        let end_date = parse_optional_date("end date", self.end.as_deref())?;
        Ok(Ownership::new(owner_id, vehicle_id, start_date).with_end_date(end_date))
    }

    pub fn or_stored(self, stored: &Ownership) -> Self {
        Self {
            key: self.key,
            start: self
                .start
                .or_else(|| Some(format_date(stored.start_date))),
            end: self
                .end
                .or_else(|| Some(stored.end_date.map(format_date).unwrap_or_default())),
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn required(field: &'static str, value: Option<&str>) -> FormResult<String> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(FormError::MissingField(field)),
    }
}

fn parse_number<T: FromStr>(field: &'static str, value: Option<&str>) -> FormResult<T> {
    let raw = required(field, value)?;
    raw.parse::<T>().map_err(|_| FormError::InvalidNumber {
        field,
        value: raw.clone(),
    })
}

/// Rejects `NaN` and infinities, which `f64::from_str` accepts.
fn parse_finite(field: &'static str, value: Option<&str>) -> FormResult<f64> {
    let number: f64 = parse_number(field, value)?;
    if !number.is_finite() {
        return Err(FormError::InvalidNumber {
            field,
            value: value.map(str::trim).unwrap_or_default().to_string(),
        });
    }
    Ok(number)
}

fn parse_date(field: &'static str, value: &str) -> FormResult<NaiveDate> {
    let invalid = || FormError::InvalidDate {
        field,
        value: value.to_string(),
    };
    if !DATE_SHAPE_RE.is_match(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

fn parse_optional_date(field: &'static str, value: Option<&str>) -> FormResult<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(field, value).map(Some),
    }
}
