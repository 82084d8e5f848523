//! Wire types for the Eloverblik API
//!
//! This module defines the typed records returned by both API surfaces.
//! Field names follow Rust conventions and are mapped to the upstream wire
//! names via `#[serde(rename_all = "camelCase")]` plus explicit renames where
//! the API uses irregular casing (`typeOfMP`, `mRID`, `out_Quantity.quantity`
//! and friends). All optional fields omit their key from JSON when `None`
//! via `#[serde(skip_serializing_if = "Option::is_none")]`, and unknown
//! upstream fields are ignored on decode.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// Generic response envelope wrapping a `result` payload.
///
/// Every JSON endpoint replies with this shape. It also appears nested: the
/// bulk endpoints (`getdetails`, `getcharges`, relation adds) return an outer
/// envelope whose `result` is a list of per-metering-point envelopes.
///
/// # Examples
///
/// ```
/// use eloverblik::models::ApiResponse;
///
/// let json = r#"{"success": true, "errorCode": 0, "result": "Success"}"#;
/// let response: ApiResponse<String> = serde_json::from_str(json).unwrap();
/// assert!(response.success);
/// assert_eq!(response.result.as_deref(), Some("Success"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded.
    #[serde(default)]
    pub success: bool,
    /// Error code; `0` when absent or successful.
    #[serde(default)]
    pub error_code: i32,
    /// Human-readable error description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,
    /// Identifier the error relates to (e.g. a metering point id).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Server-side stack trace, only populated on some failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
    /// Endpoint-specific payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

// ---------------------------------------------------------------------------
// Metering points
// ---------------------------------------------------------------------------

/// Detailed contact address attached to a metering point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAddress {
    /// First contact name.
    #[serde(rename = "contactName1", skip_serializing_if = "Option::is_none")]
    pub contact_name_1: Option<String>,
    /// Second contact name.
    #[serde(rename = "contactName2", skip_serializing_if = "Option::is_none")]
    pub contact_name_2: Option<String>,
    /// Address type: D01 (technical address) or D04 (juridical address).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_code: Option<String>,
    /// Street name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    /// Building number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    /// Floor id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<String>,
    /// Room id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    /// City subdivision name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_sub_division_name: Option<String>,
    /// Postcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    /// City name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    /// Country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone_number: Option<String>,
    /// Contact mobile number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_mobile_number: Option<String>,
    /// Contact e-mail address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email_address: Option<String>,
    /// Person or c/o address to attention.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attention: Option<String>,
    /// Postbox to attention.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_box: Option<String>,
    /// Whether the address is protected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_address: Option<String>,
}

/// A child metering point attached to a parent point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildMeteringPoint {
    /// Id of the related parent metering point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_metering_point_id: Option<String>,
    /// Unique metering point id (18 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metering_point_id: Option<String>,
    /// Metering point type, e.g. D01 (tariff-settled consumption).
    #[serde(rename = "typeOfMP", skip_serializing_if = "Option::is_none")]
    pub type_of_mp: Option<String>,
    /// Meter reading resolution, e.g. PT1H (hourly).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_reading_occurrence: Option<String>,
    /// Meter number identifying the physical meter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_number: Option<String>,
}

/// Master data shared by every metering-point view.
///
/// Flattened into [`MeteringPoint`], [`MeteringPointThirdParty`] and
/// [`MeteringPointDetail`], which add their view-specific fields on top.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeteringPointBase {
    /// Unique metering point id (18 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metering_point_id: Option<String>,
    /// Metering point type: E17 (consumption) or E18 (production).
    #[serde(rename = "typeOfMP", skip_serializing_if = "Option::is_none")]
    pub type_of_mp: Option<String>,
    /// Name of the balance supplier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_supplier_name: Option<String>,
    /// Street code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_code: Option<String>,
    /// Street name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    /// Building number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    /// Floor id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<String>,
    /// Room id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    /// Postcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    /// City name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    /// City subdivision name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_sub_division_name: Option<String>,
    /// Municipality code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality_code: Option<String>,
    /// CVR number of the registered consumer (business only).
    #[serde(rename = "consumerCVR", skip_serializing_if = "Option::is_none")]
    pub consumer_cvr: Option<String>,
    /// Additional CVR number of the registered consumer (business only).
    #[serde(rename = "dataAccessCVR", skip_serializing_if = "Option::is_none")]
    pub data_access_cvr: Option<String>,
    /// Child metering points attached to this point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_metering_points: Option<Vec<ChildMeteringPoint>>,
    /// Description of the location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_description: Option<String>,
    /// Meter reading resolution: ANDET, P1M, PT15M or PT1H.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_reading_occurrence: Option<String>,
    /// Settlement method: D01 (flex), E01 (profiled) or E02 (non-profiled).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_method: Option<String>,
    /// First consumer party name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_consumer_party_name: Option<String>,
    /// Second consumer party name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_consumer_party_name: Option<String>,
    /// Meter number identifying the physical meter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_number: Option<String>,
    /// Date when the current consumer was registered (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_start_date: Option<String>,
}

/// A metering point as listed by the customer surface.
///
/// # Examples
///
/// ```
/// use eloverblik::models::MeteringPoint;
///
/// let json = r#"{
///     "meteringPointId": "571313180000000000",
///     "typeOfMP": "E17",
///     "hasRelation": true
/// }"#;
/// let point: MeteringPoint = serde_json::from_str(json).unwrap();
/// assert_eq!(point.base.type_of_mp.as_deref(), Some("E17"));
/// assert!(point.has_relation);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeteringPoint {
    /// Shared master data.
    #[serde(flatten)]
    pub base: MeteringPointBase,
    /// Whether the point is actively linked to the caller's account.
    #[serde(default)]
    pub has_relation: bool,
}

/// A metering point as listed by the third-party surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeteringPointThirdParty {
    /// Shared master data.
    #[serde(flatten)]
    pub base: MeteringPointBase,
    /// Start date of the access delegation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_from: Option<String>,
    /// End date of the access delegation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_to: Option<String>,
}

/// Extended master data returned by the `getdetails` endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeteringPointDetail {
    /// Shared master data.
    #[serde(flatten)]
    pub base: MeteringPointBase,
    /// Id of the related parent metering point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_metering_point_id: Option<String>,
    /// Name of the grid operator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_operator_name: Option<String>,
    /// Id of the grid operator.
    #[serde(rename = "gridOperatorID", skip_serializing_if = "Option::is_none")]
    pub grid_operator_id: Option<String>,
    /// Whether a production obligation applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_obligation: Option<String>,
    /// Power in kW for the production facility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp_capacity: Option<String>,
    /// Connection type: D01 (direct) or D02 (installation).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp_connection_type: Option<String>,
    /// Disconnection type: D01 (remote) or D02 (manual).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disconnection_type: Option<String>,
    /// Product id, e.g. active or reactive power.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Energy type, e.g. D11 (photovoltaics) or D12 (wind turbines).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    /// Energy measurement unit, e.g. KWH.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_time_series_measure_unit: Option<String>,
    /// Estimated annual consumption or production.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_annual_volume: Option<String>,
    /// Id of the grid area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metering_grid_area_identification: Option<String>,
    /// Net settlement group (0-99).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_settlement_group: Option<String>,
    /// Physical status: D03 (new), E22 (connected) or E23 (disconnected).
    #[serde(rename = "physicalStatusOfMP", skip_serializing_if = "Option::is_none")]
    pub physical_status_of_mp: Option<String>,
    /// Consumer category code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_category: Option<String>,
    /// Max power limit in kW.
    #[serde(rename = "powerLimitKW", skip_serializing_if = "Option::is_none")]
    pub power_limit_kw: Option<String>,
    /// Max power limit in kW as a decimal.
    #[serde(rename = "powerLimitKWDecimal", skip_serializing_if = "Option::is_none")]
    pub power_limit_kw_decimal: Option<f64>,
    /// Max current limit in ampere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_limit_a: Option<String>,
    /// Sub type: D01 (physical), D02 (virtual) or D03 (calculated).
    #[serde(rename = "subTypeOfMP", skip_serializing_if = "Option::is_none")]
    pub sub_type_of_mp: Option<String>,
    /// Address wash instruction: D01 (washable) or D02 (not washable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp_address_wash_instructions: Option<String>,
    /// Reference id to the public Danish Address Register.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dar_reference: Option<String>,
    /// Contact addresses registered for the point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_addresses: Option<Vec<ContactAddress>>,
    /// Id of the balance supplier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_supplier_id: Option<String>,
    /// Start date for the balance supplier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_supplier_start_date: Option<String>,
    /// Scheme agency identifier for the balance supplier id.
    #[serde(
        rename = "balanceSupplierId_SchemeAgencyIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub balance_supplier_id_scheme_agency_identifier: Option<String>,
    /// Whether the consumer name is protected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_name: Option<String>,
    /// Scheme agency identifier for the grid operator id.
    #[serde(
        rename = "gridOperatorID_SchemeAgencyIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub grid_operator_id_scheme_agency_identifier: Option<String>,
    /// Caller-assigned alias for the metering point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metering_point_alias: Option<String>,
    /// Reading type: D01 (automatic) or D02 (manual).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp_reading_characteristics: Option<String>,
    /// Number of digits on the meter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_counter_digits: Option<String>,
    /// Conversion factor for the meter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_counter_multiply_factor: Option<String>,
    /// Unit for the meter counter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_counter_unit: Option<String>,
    /// Counter type: D01 (accumulated) or D02 (balanced).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_counter_type: Option<String>,
    /// Unused upstream field, kept for wire compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp_relation_type: Option<String>,
    /// Date of the data request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrence: Option<String>,
    /// Whether the consumer is entitled to electricity tax reduction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_reduction: Option<String>,
    /// Date for tax reduction commencement or termination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_settlement_date: Option<String>,
}

// ---------------------------------------------------------------------------
// Charges
// ---------------------------------------------------------------------------

/// A subscription or fee linked to a metering point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    /// Name of the charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description of the charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// GLN of the owning grid operator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Date the charge starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from_date: Option<String>,
    /// Date the charge ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to_date: Option<String>,
    /// Period type, "DAY" or "HOUR".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_type: Option<String>,
    /// Price in DKK.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Quantity of the subscription.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

/// Price for a single tariff position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffPrice {
    /// Hour of the tariff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Price in DKK.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// A tariff with its per-position prices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tariff {
    /// Name of the tariff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description of the tariff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// GLN of the owning grid operator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Date the tariff starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from_date: Option<String>,
    /// Date the tariff ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to_date: Option<String>,
    /// Period type, "DAY" or "HOUR".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_type: Option<String>,
    /// Prices per hour/period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<TariffPrice>>,
}

/// Subscriptions, tariffs and fees for one metering point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeteringPointCharges {
    /// Id of the metering point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metering_point_id: Option<String>,
    /// Subscriptions for the metering point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Vec<Charge>>,
    /// Tariffs for the metering point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariffs: Option<Vec<Tariff>>,
    /// Fees for the metering point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<Vec<Charge>>,
}

// ---------------------------------------------------------------------------
// Time series
// ---------------------------------------------------------------------------

/// A single measurement in a period.
///
/// # Examples
///
/// ```
/// use eloverblik::models::TimeSeriesPoint;
///
/// let json = r#"{
///     "position": "1",
///     "out_Quantity.quantity": "1.625",
///     "out_Quantity.quality": "A04"
/// }"#;
/// let point: TimeSeriesPoint = serde_json::from_str(json).unwrap();
/// assert_eq!(point.quantity.as_deref(), Some("1.625"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Position in the period (e.g. 1-24 for hourly resolution).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// The measured quantity (kWh etc.), max 3 decimals.
    #[serde(rename = "out_Quantity.quantity", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Measurement quality: A01 (adjusted), A02 (not available),
    /// A03 (estimated), A04 (measured) or A05 (incomplete).
    #[serde(rename = "out_Quantity.quality", skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

/// Start and end instants for a period (UTC ISO 8601).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Start of the period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// End of the period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// A resolution-sized slice of a time series with its measurements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Period {
    /// Resolution: PT15M, PT1H, P1D, P1M or P1Y.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// The interval covered.
    #[serde(rename = "timeInterval", skip_serializing_if = "Option::is_none")]
    pub time_interval: Option<TimeInterval>,
    /// The measurements inside the interval.
    #[serde(rename = "Point", skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<TimeSeriesPoint>>,
}

/// Identification of the measured metering point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketEvaluationMeteringPoint {
    /// Coding scheme; fixed value A10 for GSRN.
    #[serde(rename = "codingScheme", skip_serializing_if = "Option::is_none")]
    pub coding_scheme: Option<String>,
    /// Unique metering point id (18 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Wrapper for the market evaluation point identification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketEvaluationPoint {
    /// The metering point identification.
    #[serde(rename = "mRID", skip_serializing_if = "Option::is_none")]
    pub mrid: Option<MarketEvaluationMeteringPoint>,
}

/// One time series inside a market document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Unique metering point id.
    #[serde(rename = "mRID", skip_serializing_if = "Option::is_none")]
    pub mrid: Option<String>,
    /// Nature of the series: A01 (production), A04 (consumption) or
    /// A64 (consumption, profiled).
    #[serde(rename = "businessType", skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    /// Curve type; always A01 for valid series.
    #[serde(rename = "curveType", skip_serializing_if = "Option::is_none")]
    pub curve_type: Option<String>,
    /// Unit of measure, e.g. KWH.
    #[serde(rename = "measurement_Unit.name", skip_serializing_if = "Option::is_none")]
    pub measurement_unit_name: Option<String>,
    /// Periods containing the measurements.
    #[serde(rename = "Period", skip_serializing_if = "Option::is_none")]
    pub periods: Option<Vec<Period>>,
    /// Market evaluation point identification.
    #[serde(rename = "MarketEvaluationPoint", skip_serializing_if = "Option::is_none")]
    pub market_evaluation_point: Option<MarketEvaluationPoint>,
}

/// Market document carrying the time series for one request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MyEnergyDataMarketDocument {
    /// Unique id of the market document.
    #[serde(rename = "mRID", skip_serializing_if = "Option::is_none")]
    pub mrid: Option<String>,
    /// Creation instant (UTC ISO 8601).
    #[serde(rename = "createdDateTime", skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    /// Sender name; fixed value Energinet.
    #[serde(
        rename = "sender_MarketParticipant.name",
        skip_serializing_if = "Option::is_none"
    )]
    pub sender_name: Option<String>,
    /// The time series in the document.
    #[serde(rename = "TimeSeries", skip_serializing_if = "Option::is_none")]
    pub time_series: Option<Vec<TimeSeries>>,
}

/// Per-request wrapper around a market document.
///
/// The `gettimeseries` endpoints return a list of these inside the outer
/// envelope's `result`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSeriesResult {
    /// The market document, when the request for this item succeeded.
    #[serde(
        rename = "MyEnergyData_MarketDocument",
        skip_serializing_if = "Option::is_none"
    )]
    pub market_document: Option<MyEnergyDataMarketDocument>,
}

// ---------------------------------------------------------------------------
// Third-party authorizations
// ---------------------------------------------------------------------------

/// A power of attorney granted by a customer to a third party.
///
/// # Examples
///
/// ```
/// use eloverblik::models::Authorization;
///
/// let json = r#"{
///     "id": "0e631e1e-3f93-4a34-bc1e-bf41cdb48b38",
///     "customerCVR": "12345678",
///     "includeFutureMeteringPoints": true
/// }"#;
/// let auth: Authorization = serde_json::from_str(json).unwrap();
/// assert_eq!(auth.customer_cvr.as_deref(), Some("12345678"));
/// assert!(auth.include_future_metering_points);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorization {
    /// Identifier (UUID) of this power of attorney.
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub authorization_id: Option<String>,
    /// Name of the third party owning the power of attorney.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party_name: Option<String>,
    /// Earliest date allowed to request data on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    /// Latest date allowed to request data on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<String>,
    /// Customer name from the signing certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// CVR number of the customer.
    #[serde(rename = "customerCVR", skip_serializing_if = "Option::is_none")]
    pub customer_cvr: Option<String>,
    /// Optional key applied to the authorization by the third party.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_key: Option<String>,
    /// Whether future metering points are automatically included.
    #[serde(default)]
    pub include_future_metering_points: bool,
    /// Registration instant (UTC ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<String>,
}
