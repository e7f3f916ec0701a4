//! # Purchase-Order Commands
//!
//! Status menus, status changes, receiving and recurring templates.
//!
//! ## Status Menu Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order row ▸ "Change status" dropdown                                   │
//! │                                                                         │
//! │  order_status_menu(id) ──► [Mark as Partially Received, Mark as Rec..] │
//! │           │                                                             │
//! │           ▼ user picks one                                              │
//! │  update_order_status(id, status)                                        │
//! │           │                                                             │
//! │           ├── legal edge ──► order updated                              │
//! │           └── anything else ► ILLEGAL_TRANSITION, order unchanged       │
//! │                                                                         │
//! │  Bulk: bulk_status_options(ids) offers the intersection of every row;   │
//! │        bulk_update_order_status(ids, status) moves all or none.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use tracing::{debug, info};

use galley_core::purchase_order::{bulk_status_actions, status_actions};
use galley_core::template;
use galley_core::validation::{validate_date, validate_quantity};
use galley_core::{
    ItemReceipt, OrderTemplate, PurchaseOrder, PurchaseOrderStatus, StatusMenu,
};

use crate::error::ApiError;
use crate::state::OrderState;

/// Orders, optionally only those in one status, newest first.
pub fn list_purchase_orders(
    orders: &OrderState,
    status: Option<PurchaseOrderStatus>,
) -> Vec<PurchaseOrder> {
    debug!(?status, "list_purchase_orders command");
    let mut list: Vec<PurchaseOrder> = orders.with_orders(|book| {
        book.orders()
            .iter()
            .filter(|o| status.map_or(true, |s| o.status == s))
            .cloned()
            .collect()
    });
    list.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    list
}

/// Status menu for one order. Final orders get an empty menu.
pub fn order_status_menu(orders: &OrderState, order_id: &str) -> Result<StatusMenu, ApiError> {
    orders.with_orders(|book| {
        book.order(order_id)
            .map(status_actions)
            .ok_or_else(|| ApiError::not_found("Purchase order", order_id))
    })
}

/// Moves one order to a new status.
pub fn update_order_status(
    orders: &OrderState,
    order_id: &str,
    status: PurchaseOrderStatus,
) -> Result<PurchaseOrder, ApiError> {
    debug!(%order_id, %status, "update_order_status command");

    orders.with_orders_mut(|book| {
        book.update_status(order_id, status)?;
        book.order(order_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Purchase order", order_id))
    })
}

/// Statuses offered for a bulk selection.
pub fn bulk_status_options(
    orders: &OrderState,
    order_ids: &[String],
) -> Result<StatusMenu, ApiError> {
    orders.with_orders(|book| {
        let selected = order_ids
            .iter()
            .map(|id| {
                book.order(id)
                    .ok_or_else(|| ApiError::not_found("Purchase order", id))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(bulk_status_actions(selected))
    })
}

/// Moves every selected order to the same status. Returns how many moved.
pub fn bulk_update_order_status(
    orders: &OrderState,
    order_ids: &[String],
    status: PurchaseOrderStatus,
) -> Result<usize, ApiError> {
    debug!(count = order_ids.len(), %status, "bulk_update_order_status command");

    let moved = orders.with_orders_mut(|book| book.bulk_update_status(order_ids, status))?;
    info!(moved, %status, "Bulk order status update");
    Ok(moved)
}

/// Books goods in against a shipped order.
pub fn receive_order_items(
    orders: &OrderState,
    order_id: &str,
    receipts: &[ItemReceipt],
) -> Result<PurchaseOrder, ApiError> {
    debug!(%order_id, lines = receipts.len(), "receive_order_items command");
    for receipt in receipts {
        validate_quantity(receipt.quantity)?;
    }

    orders.with_orders_mut(|book| {
        let status = book.receive_items(order_id, receipts)?;
        info!(%order_id, %status, "Delivery received");
        book.order(order_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Purchase order", order_id))
    })
}

/// Stamps a draft order out of a template for `order_date` (`YYYY-MM-DD`).
pub fn create_order_from_template(
    orders: &OrderState,
    template_id: &str,
    order_date: &str,
) -> Result<PurchaseOrder, ApiError> {
    let order_date = validate_date(order_date)?;
    let order = orders.with_orders_mut(|book| book.create_from_template(template_id, order_date))?;

    info!(order_id = %order.id, %template_id, "Order created from template");
    Ok(order)
}

/// Active templates due on or before `today`.
pub fn due_templates(orders: &OrderState, today: NaiveDate) -> Vec<OrderTemplate> {
    orders.with_orders(|book| {
        book.templates()
            .iter()
            .filter(|t| template::is_due(t, today))
            .cloned()
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use galley_core::{PurchaseOrderBook, PurchaseOrderItem, RecurrencePattern, TemplateItem};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn order(id: &str, status: PurchaseOrderStatus, order_date: &str) -> PurchaseOrder {
        PurchaseOrder {
            id: id.to_string(),
            supplier_id: "sup-1".to_string(),
            supplier_name: "Coastal Produce".to_string(),
            status,
            order_date: date(order_date),
            expected_delivery_date: date(order_date),
            items: vec![PurchaseOrderItem {
                inventory_item_id: "inv-tomato".to_string(),
                name: "Tomatoes".to_string(),
                quantity: 10,
                unit: "kg".to_string(),
                unit_price_cents: 350,
                received_quantity: 0,
            }],
            total_amount_cents: 0,
            notes: None,
            template_id: None,
        }
    }

    fn weekly_template() -> OrderTemplate {
        OrderTemplate {
            id: "tpl-1".to_string(),
            name: "Weekly produce".to_string(),
            supplier_id: "sup-1".to_string(),
            supplier_name: "Coastal Produce".to_string(),
            items: vec![TemplateItem {
                inventory_item_id: "inv-tomato".to_string(),
                name: "Tomatoes".to_string(),
                quantity: 10,
                unit: "kg".to_string(),
                unit_price_cents: 350,
            }],
            recurrence: RecurrencePattern::Weekly,
            lead_time_days: 2,
            notes: None,
            is_active: true,
            last_generated: Some(date("2025-04-28")),
        }
    }

    fn orders() -> OrderState {
        OrderState::new(PurchaseOrderBook::new(
            vec![
                order("po-1", PurchaseOrderStatus::Draft, "2025-05-01"),
                order("po-2", PurchaseOrderStatus::Shipped, "2025-05-02"),
                order("po-3", PurchaseOrderStatus::PartiallyReceived, "2025-04-30"),
                order("po-4", PurchaseOrderStatus::Received, "2025-04-20"),
            ],
            vec![weekly_template()],
        ))
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_list_and_filter() {
        let orders = orders();
        let all = list_purchase_orders(&orders, None);
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].id, "po-2");

        let shipped = list_purchase_orders(&orders, Some(PurchaseOrderStatus::Shipped));
        assert_eq!(shipped.len(), 1);
    }

    #[test]
    fn test_menu_never_offers_illegal_statuses() {
        let orders = orders();
        let draft = order_status_menu(&orders, "po-1").unwrap();
        assert!(!draft.offers(PurchaseOrderStatus::Received));
        assert!(draft.offers(PurchaseOrderStatus::Ordered));

        assert!(order_status_menu(&orders, "po-4").unwrap().is_disabled());
        assert_eq!(
            order_status_menu(&orders, "nope").unwrap_err().code,
            ErrorCode::NotFound
        );
    }

    #[test]
    fn test_update_order_status_is_guarded() {
        let orders = orders();
        let err = update_order_status(&orders, "po-1", PurchaseOrderStatus::Received).unwrap_err();
        assert_eq!(err.code, ErrorCode::IllegalTransition);

        let updated = update_order_status(&orders, "po-1", PurchaseOrderStatus::Ordered).unwrap();
        assert_eq!(updated.status, PurchaseOrderStatus::Ordered);
    }

    #[test]
    fn test_bulk_intersection_and_update() {
        let orders = orders();
        let selection = ids(&["po-2", "po-3"]);

        let menu = bulk_status_options(&orders, &selection).unwrap();
        let offered: Vec<_> = menu.actions.iter().map(|a| a.status).collect();
        assert_eq!(offered, vec![PurchaseOrderStatus::Received]);

        let err = bulk_update_order_status(&orders, &selection, PurchaseOrderStatus::Cancelled)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::IllegalTransition);
        assert_eq!(
            list_purchase_orders(&orders, Some(PurchaseOrderStatus::Shipped)).len(),
            1
        );

        let moved =
            bulk_update_order_status(&orders, &selection, PurchaseOrderStatus::Received).unwrap();
        assert_eq!(moved, 2);
        assert_eq!(
            list_purchase_orders(&orders, Some(PurchaseOrderStatus::Received)).len(),
            3
        );
    }

    #[test]
    fn test_bulk_empty_selection() {
        let orders = orders();
        assert!(bulk_status_options(&orders, &[]).unwrap().is_disabled());
        assert_eq!(
            bulk_update_order_status(&orders, &[], PurchaseOrderStatus::Received)
                .unwrap_err()
                .code,
            ErrorCode::BusinessLogic
        );
    }

    #[test]
    fn test_receive_order_items() {
        let orders = orders();
        let partial = receive_order_items(
            &orders,
            "po-2",
            &[ItemReceipt {
                inventory_item_id: "inv-tomato".to_string(),
                quantity: 4,
            }],
        )
        .unwrap();
        assert_eq!(partial.status, PurchaseOrderStatus::PartiallyReceived);

        let err = receive_order_items(
            &orders,
            "po-2",
            &[ItemReceipt {
                inventory_item_id: "inv-tomato".to_string(),
                quantity: 7,
            }],
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);

        let done = receive_order_items(
            &orders,
            "po-2",
            &[ItemReceipt {
                inventory_item_id: "inv-tomato".to_string(),
                quantity: 6,
            }],
        )
        .unwrap();
        assert_eq!(done.status, PurchaseOrderStatus::Received);
        assert_eq!(done.items[0].received_quantity, 10);

        let zero = receive_order_items(
            &orders,
            "po-3",
            &[ItemReceipt {
                inventory_item_id: "inv-tomato".to_string(),
                quantity: 0,
            }],
        )
        .unwrap_err();
        assert_eq!(zero.code, ErrorCode::ValidationError);

        let nothing = receive_order_items(&orders, "po-3", &[]).unwrap_err();
        assert_eq!(nothing.code, ErrorCode::BusinessLogic);
        assert_eq!(
            list_purchase_orders(&orders, Some(PurchaseOrderStatus::PartiallyReceived)).len(),
            1
        );
    }

    #[test]
    fn test_templates() {
        let orders = orders();
        assert!(due_templates(&orders, date("2025-05-04")).is_empty());
        assert_eq!(due_templates(&orders, date("2025-05-05")).len(), 1);

        let created = create_order_from_template(&orders, "tpl-1", "2025-05-05").unwrap();
        assert_eq!(created.status, PurchaseOrderStatus::Draft);
        assert_eq!(created.template_id.as_deref(), Some("tpl-1"));
        assert_eq!(created.expected_delivery_date, date("2025-05-07"));
        assert_eq!(created.total_amount_cents, 3500);
        assert_eq!(list_purchase_orders(&orders, None).len(), 5);

        // last_generated moved forward
        assert!(due_templates(&orders, date("2025-05-05")).is_empty());

        assert_eq!(
            create_order_from_template(&orders, "tpl-1", "05/05/2025")
                .unwrap_err()
                .code,
            ErrorCode::ValidationError
        );
        assert_eq!(
            create_order_from_template(&orders, "nope", "2025-05-05")
                .unwrap_err()
                .code,
            ErrorCode::NotFound
        );
    }
}
