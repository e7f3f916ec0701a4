//! # Order Templates
//!
//! Recurring supplier orders ("dairy every Monday") are stored as templates
//! and stamped into fresh `draft` purchase orders when due.
//!
//! ```text
//!   OrderTemplate ──instantiate(order_date)──► PurchaseOrder (draft)
//!        │                                       expected = order_date + lead time
//!        └── last_generated ──next_order_date──► when to stamp the next one
//! ```

use chrono::{Datelike, Days, Months, NaiveDate};
use uuid::Uuid;

use crate::types::{
    OrderTemplate, PurchaseOrder, PurchaseOrderItem, PurchaseOrderStatus, RecurrencePattern,
};

/// First date strictly after `after` on which the template is due.
///
/// Monthly templates keep the day-of-month of `after`, clamped to the
/// last day of shorter months (Jan 31 → Feb 28).
pub fn next_order_date(template: &OrderTemplate, after: NaiveDate) -> NaiveDate {
    let next = match template.recurrence {
        RecurrencePattern::Weekly => after.checked_add_days(Days::new(7)),
        RecurrencePattern::Biweekly => after.checked_add_days(Days::new(14)),
        RecurrencePattern::Monthly => after.checked_add_months(Months::new(1)),
    };
    next.unwrap_or(NaiveDate::MAX)
}

/// Whether a template should be stamped on `today`.
///
/// A template that has never run is due immediately.
pub fn is_due(template: &OrderTemplate, today: NaiveDate) -> bool {
    if !template.is_active {
        return false;
    }
    match template.last_generated {
        None => true,
        Some(last) => next_order_date(template, last) <= today,
    }
}

/// Builds a new draft purchase order from a template.
pub fn instantiate(template: &OrderTemplate, order_date: NaiveDate) -> PurchaseOrder {
    let items: Vec<PurchaseOrderItem> = template
        .items
        .iter()
        .map(|item| PurchaseOrderItem {
            inventory_item_id: item.inventory_item_id.clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            unit: item.unit.clone(),
            unit_price_cents: item.unit_price_cents,
            received_quantity: 0,
        })
        .collect();

    let expected_delivery_date = order_date
        .checked_add_days(Days::new(u64::from(template.lead_time_days)))
        .unwrap_or(order_date);

    let mut order = PurchaseOrder {
        id: Uuid::new_v4().to_string(),
        supplier_id: template.supplier_id.clone(),
        supplier_name: template.supplier_name.clone(),
        status: PurchaseOrderStatus::Draft,
        order_date,
        expected_delivery_date,
        items,
        total_amount_cents: 0,
        notes: template
            .notes
            .clone()
            .or_else(|| Some(format!("Generated from template \"{}\"", template.name))),
        template_id: Some(template.id.clone()),
    };
    order.total_amount_cents = order.computed_total().cents();
    order
}

/// Human summary of a recurrence ("Every Monday", "Monthly on day 15").
pub fn describe_recurrence(template: &OrderTemplate, anchor: NaiveDate) -> String {
    match template.recurrence {
        RecurrencePattern::Weekly => format!("Every {}", anchor.weekday()),
        RecurrencePattern::Biweekly => format!("Every other {}", anchor.weekday()),
        RecurrencePattern::Monthly => format!("Monthly on day {}", anchor.day()),
    }
}
