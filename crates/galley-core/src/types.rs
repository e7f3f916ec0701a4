//! # Domain Types
//!
//! The records every back-of-house screen reads and writes.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  FLOOR (coordinated)          PROCUREMENT (state machine)              │
//! │  ┌────────────┐               ┌────────────────┐   ┌───────────────┐   │
//! │  │   Table    │◄──tableIds────│ PurchaseOrder  │◄──│ OrderTemplate │   │
//! │  │  status    │      │        │  status        │   │  recurrence   │   │
//! │  └────────────┘      │        │  items         │   └───────────────┘   │
//! │  ┌────────────┐      │        └────────────────┘                       │
//! │  │Reservation │──────┘                                                 │
//! │  │  date+time │               PASSIVE RECORDS                          │
//! │  │  status    │               Customer, Supplier, Feedback, Note,      │
//! │  └────────────┘               Invoice, Event                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! - Fields serialize in camelCase, status enums in kebab-case
//!   (`partially-received`, `no-show`)
//! - Dates are `YYYY-MM-DD`; reservation and event times are `HH:MM`
//! - Money is integer cents

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Time Format
// =============================================================================

/// Serde adapter for 24h `HH:MM` slot times.
///
/// chrono's default `NaiveTime` format carries seconds; booking forms and
/// stored reservations use minutes only.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// The slot time format.
    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (825 = 8.25%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Table
// =============================================================================

/// Floor status of a dining table.
///
/// ## Lifecycle
/// ```text
///   available ──assign──► reserved ──seat──► occupied
///       ▲                    │                   │
///       └──────unassign──────┴──────reset────────┘
///
///   unavailable: manual only, no automatic edges in or out
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
    Unavailable,
}

impl TableStatus {
    /// Every status, in display order.
    pub const ALL: [TableStatus; 4] = [
        TableStatus::Available,
        TableStatus::Occupied,
        TableStatus::Reserved,
        TableStatus::Unavailable,
    ];

    /// Wire name of the status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Available => "available",
            TableStatus::Occupied => "occupied",
            TableStatus::Reserved => "reserved",
            TableStatus::Unavailable => "unavailable",
        }
    }

    /// Whether a table in this status may be offered to a new party.
    ///
    /// Reserved tables count because a reservation may be reassigned.
    pub const fn is_offerable(&self) -> bool {
        matches!(self, TableStatus::Available | TableStatus::Reserved)
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dining table on the floor plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    /// Number painted on the table / shown on the floor plan.
    pub number: u32,
    /// Seats.
    pub capacity: u32,
    pub status: TableStatus,
    /// Service section ("Main", "Bar", "Terrace").
    pub section: String,
    /// Free-form location hint ("window", "patio").
    pub location: String,
}

impl Table {
    /// Returns a copy with a different status (the `{...table, status}`
    /// edit the floor screens make).
    pub fn with_status(&self, status: TableStatus) -> Table {
        Table {
            status,
            ..self.clone()
        }
    }

    /// Whether the table seats at least `party_size` guests.
    #[inline]
    pub fn seats(&self, party_size: u32) -> bool {
        self.capacity >= party_size
    }
}

// =============================================================================
// Reservation
// =============================================================================

/// Lifecycle status of a reservation.
///
/// ## Lifecycle
/// ```text
///   pending ──► confirmed ──► seated ──► completed
///      │            │
///      ├────────────┴──► cancelled
///      └────────────┴──► no-show
///
///   completed / cancelled / no-show ──reopen──► pending
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Seated,
    Completed,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    /// Wire name of the status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Seated => "seated",
            ReservationStatus::Completed => "completed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::NoShow => "no-show",
        }
    }

    /// Statuses reachable from this one through an action button.
    pub const fn next_statuses(&self) -> &'static [ReservationStatus] {
        use ReservationStatus::*;
        match self {
            Pending => &[Confirmed, Cancelled, NoShow],
            Confirmed => &[Seated, Cancelled, NoShow],
            Seated => &[Completed],
            Completed | Cancelled | NoShow => &[Pending],
        }
    }

    /// Whether `next` is a legal edge from this status.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    /// Terminal statuses can only be left by reopening.
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Completed | ReservationStatus::Cancelled | ReservationStatus::NoShow
        )
    }

    /// Reservations still expected to arrive.
    pub const fn is_upcoming(&self) -> bool {
        matches!(self, ReservationStatus::Pending | ReservationStatus::Confirmed)
    }
}

impl Default for ReservationStatus {
    fn default() -> Self {
        ReservationStatus::Pending
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booking for one party at one date+time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    #[ts(as = "String")]
    pub time: NaiveTime,
    pub party_size: u32,
    /// Held tables. Ordered for display, but membership is what matters.
    pub table_ids: Vec<String>,
    pub status: ReservationStatus,
    pub notes: Option<String>,
    pub special_requests: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Whether both reservations are booked for the same date and time.
    #[inline]
    pub fn shares_slot_with(&self, other: &Reservation) -> bool {
        self.is_at(other.date, other.time)
    }

    /// Whether the reservation is booked for exactly this slot.
    #[inline]
    pub fn is_at(&self, date: NaiveDate, time: NaiveTime) -> bool {
        self.date == date && self.time == time
    }

    /// Whether the reservation holds this table.
    #[inline]
    pub fn holds_table(&self, table_id: &str) -> bool {
        self.table_ids.iter().any(|id| id == table_id)
    }

    /// The slot as a single timestamp (for sorting and due-soon checks).
    #[inline]
    pub fn slot(&self) -> chrono::NaiveDateTime {
        self.date.and_time(self.time)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A guest known to the restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub visit_count: u32,
    #[ts(as = "Option<String>")]
    pub last_visit: Option<NaiveDate>,
    /// Seating or dietary preferences ("booth", "gluten-free").
    pub preferences: Vec<String>,
    pub notes: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Feedback & Notes
// =============================================================================

/// What a piece of feedback is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackCategory {
    Food,
    Service,
    Ambience,
    Value,
    Other,
}

/// A guest review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub customer_id: Option<String>,
    pub customer_name: String,
    /// 1..=5 stars.
    pub rating: u8,
    pub comment: String,
    pub category: FeedbackCategory,
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Whether a manager has replied.
    pub responded: bool,
}

/// A staff note pinned to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub pinned: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Supplier
// =============================================================================

/// A vendor the kitchen orders from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub contact_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Product categories supplied ("produce", "dairy").
    pub categories: Vec<String>,
    /// Days from order to delivery.
    pub lead_time_days: u32,
    pub is_active: bool,
}

// =============================================================================
// Purchase Orders
// =============================================================================

/// Status of a purchase order. The legal edges live in
/// [`crate::purchase_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum PurchaseOrderStatus {
    Draft,
    Ordered,
    Shipped,
    PartiallyReceived,
    Received,
    Cancelled,
}

impl PurchaseOrderStatus {
    /// Wire name of the status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "draft",
            PurchaseOrderStatus::Ordered => "ordered",
            PurchaseOrderStatus::Shipped => "shipped",
            PurchaseOrderStatus::PartiallyReceived => "partially-received",
            PurchaseOrderStatus::Received => "received",
            PurchaseOrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Default for PurchaseOrderStatus {
    fn default() -> Self {
        PurchaseOrderStatus::Draft
    }
}

impl fmt::Display for PurchaseOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line on a purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderItem {
    pub inventory_item_id: String,
    pub name: String,
    pub quantity: i64,
    /// Unit of measure ("kg", "case", "L").
    pub unit: String,
    pub unit_price_cents: i64,
    pub received_quantity: i64,
}

impl PurchaseOrderItem {
    /// Line total (unit price × ordered quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }

    /// Quantity still to arrive.
    #[inline]
    pub fn outstanding(&self) -> i64 {
        (self.quantity - self.received_quantity).max(0)
    }

    /// Whether the full ordered quantity has arrived.
    #[inline]
    pub fn is_fully_received(&self) -> bool {
        self.received_quantity >= self.quantity
    }
}

/// An order placed with a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    pub supplier_id: String,
    pub supplier_name: String,
    pub status: PurchaseOrderStatus,
    #[ts(as = "String")]
    pub order_date: NaiveDate,
    #[ts(as = "String")]
    pub expected_delivery_date: NaiveDate,
    pub items: Vec<PurchaseOrderItem>,
    pub total_amount_cents: i64,
    pub notes: Option<String>,
    /// Template this order was stamped from, if any.
    pub template_id: Option<String>,
}

impl PurchaseOrder {
    /// Sum of the line totals.
    pub fn computed_total(&self) -> Money {
        self.items.iter().map(PurchaseOrderItem::line_total).sum()
    }

    /// Stored total as Money.
    #[inline]
    pub fn total_amount(&self) -> Money {
        Money::from_cents(self.total_amount_cents)
    }
}

// =============================================================================
// Order Templates
// =============================================================================

/// How often a template is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum RecurrencePattern {
    Weekly,
    Biweekly,
    Monthly,
}

/// One line on an order template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    pub inventory_item_id: String,
    pub name: String,
    pub quantity: i64,
    pub unit: String,
    pub unit_price_cents: i64,
}

/// Blueprint for a recurring supplier order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTemplate {
    pub id: String,
    pub name: String,
    pub supplier_id: String,
    pub supplier_name: String,
    pub items: Vec<TemplateItem>,
    pub recurrence: RecurrencePattern,
    /// Days between order and expected delivery.
    pub lead_time_days: u32,
    pub notes: Option<String>,
    pub is_active: bool,
    /// Order date of the last purchase order stamped from this template.
    #[ts(as = "Option<String>")]
    pub last_generated: Option<NaiveDate>,
}

// =============================================================================
// Invoices
// =============================================================================

/// Billing status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

/// One billed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

impl InvoiceLine {
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

/// An invoice issued for catering or a private event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub number: String,
    pub customer_name: String,
    #[ts(as = "String")]
    pub issue_date: NaiveDate,
    #[ts(as = "String")]
    pub due_date: NaiveDate,
    pub lines: Vec<InvoiceLine>,
    pub tax_rate_bps: u32,
    pub discount_bps: u32,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
}

impl Invoice {
    /// Sum of lines before discount and tax.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(InvoiceLine::line_total).sum()
    }

    /// Tax on the discounted subtotal.
    pub fn tax(&self) -> Money {
        self.subtotal()
            .apply_percentage_discount(self.discount_bps)
            .calculate_tax(TaxRate::from_bps(self.tax_rate_bps))
    }

    /// Discounted subtotal plus tax.
    pub fn total(&self) -> Money {
        self.subtotal().apply_percentage_discount(self.discount_bps) + self.tax()
    }

    /// Sent but unpaid past the due date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.status {
            InvoiceStatus::Overdue => true,
            InvoiceStatus::Sent => today > self.due_date,
            _ => false,
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// Booking status of a private event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    Inquiry,
    Confirmed,
    Completed,
    Cancelled,
}

/// A private event or buyout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    #[ts(as = "String")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    #[ts(as = "String")]
    pub end_time: NaiveTime,
    pub guest_count: u32,
    pub contact_name: String,
    pub status: EventStatus,
    pub deposit_cents: i64,
    pub notes: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
