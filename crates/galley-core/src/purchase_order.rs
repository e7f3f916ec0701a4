//! # Purchase-Order State Machine
//!
//! The transition table for supplier orders, the status menus built from
//! it, and the in-memory order book that applies changes.
//!
//! ## Transition Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  draft ──────────► ordered ──────────► shipped                          │
//! │    │                  │                  │   │                          │
//! │    │                  │                  │   └──────────┐               │
//! │    │                  │                  ▼              ▼               │
//! │    │                  │       partially-received ──► received (final)   │
//! │    │                  │                  │                              │
//! │    ▼                  ▼                  ▼                              │
//! │  cancelled (final) ◄──┴──────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Bulk Updates
//! With several orders selected the menu offers only statuses legal for
//! *every* one of them: the intersection of their rows.
//!
//! ```text
//!   shipped            → {partially-received, received}
//!   partially-received → {received, cancelled}
//!                        ───────────────────────────────
//!   common             → {received}
//! ```

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::notify::{NoOpNotifier, Notification, Notifier};
use crate::template;
use crate::types::{OrderTemplate, PurchaseOrder, PurchaseOrderStatus};

// =============================================================================
// Transition Table
// =============================================================================

impl PurchaseOrderStatus {
    /// Every status, in transition-table order.
    pub const ALL: [PurchaseOrderStatus; 6] = [
        PurchaseOrderStatus::Draft,
        PurchaseOrderStatus::Ordered,
        PurchaseOrderStatus::Shipped,
        PurchaseOrderStatus::PartiallyReceived,
        PurchaseOrderStatus::Received,
        PurchaseOrderStatus::Cancelled,
    ];

    /// Legal successor statuses.
    pub const fn next_statuses(&self) -> &'static [PurchaseOrderStatus] {
        use PurchaseOrderStatus::*;
        match self {
            Draft => &[Ordered, Cancelled],
            Ordered => &[Shipped, Cancelled],
            Shipped => &[PartiallyReceived, Received],
            PartiallyReceived => &[Received, Cancelled],
            Received | Cancelled => &[],
        }
    }

    /// Whether `next` is a legal edge from this status.
    pub fn can_transition_to(&self, next: PurchaseOrderStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    /// Received and cancelled orders never change again.
    pub fn is_terminal(&self) -> bool {
        self.next_statuses().is_empty()
    }

    /// Menu label for moving an order *to* this status.
    pub const fn action_label(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "Revert to Draft",
            PurchaseOrderStatus::Ordered => "Mark as Ordered",
            PurchaseOrderStatus::Shipped => "Mark as Shipped",
            PurchaseOrderStatus::PartiallyReceived => "Mark as Partially Received",
            PurchaseOrderStatus::Received => "Mark as Received",
            PurchaseOrderStatus::Cancelled => "Cancel Order",
        }
    }
}

// =============================================================================
// Menus
// =============================================================================

/// One entry in a status menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StatusAction {
    pub status: PurchaseOrderStatus,
    pub label: String,
}

/// The status menu for one order or a bulk selection.
///
/// An empty menu is rendered disabled; it is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StatusMenu {
    pub actions: Vec<StatusAction>,
}

impl StatusMenu {
    fn from_statuses(statuses: impl IntoIterator<Item = PurchaseOrderStatus>) -> Self {
        StatusMenu {
            actions: statuses
                .into_iter()
                .map(|status| StatusAction {
                    status,
                    label: status.action_label().to_string(),
                })
                .collect(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn offers(&self, status: PurchaseOrderStatus) -> bool {
        self.actions.iter().any(|a| a.status == status)
    }
}

/// Menu for a single order.
pub fn status_actions(order: &PurchaseOrder) -> StatusMenu {
    StatusMenu::from_statuses(order.status.next_statuses().iter().copied())
}

/// Statuses legal for every order in the selection, in transition-table
/// order. Empty selection offers nothing.
pub fn common_next_statuses<'a, I>(orders: I) -> Vec<PurchaseOrderStatus>
where
    I: IntoIterator<Item = &'a PurchaseOrder>,
{
    let mut orders = orders.into_iter();
    let Some(first) = orders.next() else {
        return Vec::new();
    };

    let mut common: Vec<PurchaseOrderStatus> = first.status.next_statuses().to_vec();
    for order in orders {
        common.retain(|s| order.status.can_transition_to(*s));
        if common.is_empty() {
            break;
        }
    }
    common
}

/// Menu for a bulk selection.
pub fn bulk_status_actions<'a, I>(orders: I) -> StatusMenu
where
    I: IntoIterator<Item = &'a PurchaseOrder>,
{
    StatusMenu::from_statuses(common_next_statuses(orders))
}

// =============================================================================
// Receiving
// =============================================================================

/// Goods counted in at the back door for one order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemReceipt {
    pub inventory_item_id: String,
    /// Quantity arriving now (added to what was already received).
    pub quantity: i64,
}

// =============================================================================
// Order Book
// =============================================================================

/// In-memory purchase orders and order templates.
pub struct PurchaseOrderBook {
    orders: Vec<PurchaseOrder>,
    templates: Vec<OrderTemplate>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for PurchaseOrderBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurchaseOrderBook")
            .field("orders", &self.orders.len())
            .field("templates", &self.templates.len())
            .finish()
    }
}

impl Default for PurchaseOrderBook {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl PurchaseOrderBook {
    pub fn new(orders: Vec<PurchaseOrder>, templates: Vec<OrderTemplate>) -> Self {
        Self::with_notifier(orders, templates, Arc::new(NoOpNotifier))
    }

    pub fn with_notifier(
        orders: Vec<PurchaseOrder>,
        templates: Vec<OrderTemplate>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        PurchaseOrderBook {
            orders,
            templates,
            notifier,
        }
    }

    pub fn orders(&self) -> &[PurchaseOrder] {
        &self.orders
    }

    pub fn templates(&self) -> &[OrderTemplate] {
        &self.templates
    }

    pub fn order(&self, id: &str) -> Option<&PurchaseOrder> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn template(&self, id: &str) -> Option<&OrderTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    fn order_mut(&mut self, id: &str) -> CoreResult<&mut PurchaseOrder> {
        self.orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| CoreError::PurchaseOrderNotFound(id.to_string()))
    }

    /// Adds an order, recomputing its total from the lines.
    pub fn add_order(&mut self, mut order: PurchaseOrder) -> CoreResult<()> {
        if self.order(&order.id).is_some() {
            return Err(CoreError::duplicate("Purchase order", order.id));
        }
        order.total_amount_cents = order.computed_total().cents();
        self.notifier.notify(Notification::success(
            "Purchase order created",
            format!(
                "Order {} for {} ({})",
                order.id,
                order.supplier_name,
                order.total_amount()
            ),
        ));
        self.orders.push(order);
        Ok(())
    }

    pub fn add_template(&mut self, template: OrderTemplate) -> CoreResult<()> {
        if self.template(&template.id).is_some() {
            return Err(CoreError::duplicate("Order template", template.id));
        }
        self.templates.push(template);
        Ok(())
    }

    /// Moves one order to `next`, if the transition table allows it.
    pub fn update_status(&mut self, order_id: &str, next: PurchaseOrderStatus) -> CoreResult<()> {
        let order = self.order_mut(order_id)?;
        if !order.status.can_transition_to(next) {
            return Err(CoreError::IllegalOrderTransition {
                order_id: order_id.to_string(),
                from: order.status.to_string(),
                to: next.to_string(),
            });
        }
        order.status = next;

        self.notifier.notify(Notification::success(
            "Order status updated",
            format!("Order {} marked as {}.", order_id, next),
        ));
        Ok(())
    }

    /// Moves every selected order to `next`.
    ///
    /// All-or-nothing: `next` must be in the common set of the selection,
    /// so either every order moves or none does.
    pub fn bulk_update_status(
        &mut self,
        order_ids: &[String],
        next: PurchaseOrderStatus,
    ) -> CoreResult<usize> {
        if order_ids.is_empty() {
            return Err(CoreError::EmptySelection);
        }

        let selected = order_ids
            .iter()
            .map(|id| {
                self.order(id)
                    .ok_or_else(|| CoreError::PurchaseOrderNotFound(id.clone()))
            })
            .collect::<CoreResult<Vec<_>>>()?;

        if !common_next_statuses(selected).contains(&next) {
            return Err(CoreError::NoCommonTransition {
                status: next.to_string(),
            });
        }

        // Each order counts once, however often its id was selected
        let mut moved = 0;
        for order in self.orders.iter_mut().filter(|o| order_ids.contains(&o.id)) {
            order.status = next;
            moved += 1;
        }

        self.notifier.notify(Notification::success(
            "Orders updated",
            format!("{} orders marked as {}.", moved, next),
        ));
        Ok(moved)
    }

    /// Records goods received against a shipped order.
    ///
    /// ## Behavior
    /// - Only `shipped` and `partially-received` orders accept receipts
    /// - At least one receipt must carry a positive quantity
    /// - Receipts add to `received_quantity` and may not exceed the ordered
    ///   quantity
    /// - Every line complete → `received`, otherwise `partially-received`
    pub fn receive_items(
        &mut self,
        order_id: &str,
        receipts: &[ItemReceipt],
    ) -> CoreResult<PurchaseOrderStatus> {
        let order = self.order_mut(order_id)?;
        if !matches!(
            order.status,
            PurchaseOrderStatus::Shipped | PurchaseOrderStatus::PartiallyReceived
        ) {
            return Err(CoreError::IllegalOrderTransition {
                order_id: order_id.to_string(),
                from: order.status.to_string(),
                to: PurchaseOrderStatus::Received.to_string(),
            });
        }

        if receipts.iter().all(|r| r.quantity == 0) {
            return Err(CoreError::EmptyDelivery(order_id.to_string()));
        }

        // Check every receipt before touching the order
        let mut staged = order.items.clone();
        for receipt in receipts {
            let item = staged
                .iter_mut()
                .find(|i| i.inventory_item_id == receipt.inventory_item_id)
                .ok_or_else(|| CoreError::UnknownOrderItem {
                    order_id: order_id.to_string(),
                    item_id: receipt.inventory_item_id.clone(),
                })?;
            let received = item.received_quantity + receipt.quantity;
            if receipt.quantity < 0 || received > item.quantity {
                return Err(CoreError::OverReceipt {
                    item: item.name.clone(),
                    ordered: item.quantity,
                    received,
                });
            }
            item.received_quantity = received;
        }

        let next = if staged.iter().all(|i| i.is_fully_received()) {
            PurchaseOrderStatus::Received
        } else {
            PurchaseOrderStatus::PartiallyReceived
        };
        order.items = staged;
        // partially-received → partially-received is a no-op, not an edge
        if order.status != next {
            order.status = next;
        }

        self.notifier.notify(Notification::success(
            "Delivery received",
            format!("Order {} is {}.", order_id, next),
        ));
        Ok(next)
    }

    /// Stamps a new draft order out of a template and records the run.
    pub fn create_from_template(
        &mut self,
        template_id: &str,
        order_date: chrono::NaiveDate,
    ) -> CoreResult<PurchaseOrder> {
        let template = self
            .templates
            .iter_mut()
            .find(|t| t.id == template_id)
            .ok_or_else(|| CoreError::TemplateNotFound(template_id.to_string()))?;
        if !template.is_active {
            return Err(CoreError::InactiveTemplate(template_id.to_string()));
        }

        let order = template::instantiate(template, order_date);
        template.last_generated = Some(order_date);

        self.add_order(order.clone())?;
        Ok(order)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::types::{PurchaseOrderItem, RecurrencePattern, TemplateItem};
    use chrono::NaiveDate;
    use PurchaseOrderStatus::*;

    fn item(id: &str, quantity: i64, unit_price_cents: i64) -> PurchaseOrderItem {
        PurchaseOrderItem {
            inventory_item_id: id.to_string(),
            name: format!("Item {}", id),
            quantity,
            unit: "case".to_string(),
            unit_price_cents,
            received_quantity: 0,
        }
    }

    fn order(id: &str, status: PurchaseOrderStatus) -> PurchaseOrder {
        PurchaseOrder {
            id: id.to_string(),
            supplier_id: "sup-1".to_string(),
            supplier_name: "Green Valley Produce".to_string(),
            status,
            order_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            expected_delivery_date: NaiveDate::from_ymd_opt(2025, 5, 3).unwrap(),
            items: vec![item("tomatoes", 10, 1200), item("basil", 4, 650)],
            total_amount_cents: 0,
            notes: None,
            template_id: None,
        }
    }

    fn book(orders: Vec<PurchaseOrder>) -> PurchaseOrderBook {
        let mut book = PurchaseOrderBook::default();
        for o in orders {
            book.add_order(o).unwrap();
        }
        book
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(Draft.next_statuses(), &[Ordered, Cancelled]);
        assert_eq!(Ordered.next_statuses(), &[Shipped, Cancelled]);
        assert_eq!(Shipped.next_statuses(), &[PartiallyReceived, Received]);
        assert_eq!(PartiallyReceived.next_statuses(), &[Received, Cancelled]);
        assert!(Received.is_terminal());
        assert!(Cancelled.is_terminal());
    }

    #[test]
    fn test_menus_only_offer_legal_targets() {
        for from in PurchaseOrderStatus::ALL {
            let menu = status_actions(&order("po", from));
            let bulk = bulk_status_actions([&order("a", from), &order("b", from)]);
            for to in PurchaseOrderStatus::ALL {
                let legal = from.can_transition_to(to);
                assert_eq!(menu.offers(to), legal, "{} -> {}", from, to);
                assert_eq!(bulk.offers(to), legal, "bulk {} -> {}", from, to);
            }
        }

        assert!(!status_actions(&order("po", Draft)).offers(Received));
    }

    #[test]
    fn test_terminal_order_menu_is_disabled() {
        assert!(status_actions(&order("po", Received)).is_disabled());
        assert!(status_actions(&order("po", Cancelled)).is_disabled());
        assert!(!status_actions(&order("po", Draft)).is_disabled());
        assert_eq!(
            status_actions(&order("po", Draft)).actions[1].label,
            "Cancel Order"
        );
    }

    #[test]
    fn test_bulk_intersection() {
        let shipped = order("a", Shipped);
        let partial = order("b", PartiallyReceived);
        assert_eq!(common_next_statuses([&shipped, &partial]), vec![Received]);

        let draft = order("c", Draft);
        assert!(common_next_statuses([&shipped, &draft]).is_empty());
        assert_eq!(
            common_next_statuses([&draft, &order("d", Ordered)]),
            vec![Cancelled]
        );

        let none: [&PurchaseOrder; 0] = [];
        assert!(common_next_statuses(none).is_empty());
        assert!(bulk_status_actions(none).is_disabled());
    }

    #[test]
    fn test_add_order_computes_total() {
        let book = book(vec![order("po-1", Draft)]);
        // 10 × 12.00 + 4 × 6.50
        assert_eq!(book.order("po-1").unwrap().total_amount_cents, 14_600);
    }

    #[test]
    fn test_update_status_guards_transitions() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut book = PurchaseOrderBook::with_notifier(vec![], vec![], notifier.clone());
        book.add_order(order("po-1", Draft)).unwrap();

        let err = book.update_status("po-1", Received).unwrap_err();
        assert!(matches!(err, CoreError::IllegalOrderTransition { .. }));
        assert_eq!(book.order("po-1").unwrap().status, Draft);

        book.update_status("po-1", Ordered).unwrap();
        assert_eq!(book.order("po-1").unwrap().status, Ordered);
        assert_eq!(
            notifier.last().unwrap().message,
            "Order po-1 marked as ordered."
        );

        assert!(matches!(
            book.update_status("missing", Ordered),
            Err(CoreError::PurchaseOrderNotFound(_))
        ));
    }

    #[test]
    fn test_bulk_update_is_all_or_nothing() {
        let mut book = book(vec![
            order("a", Shipped),
            order("b", PartiallyReceived),
            order("c", Draft),
        ]);
        let ab = vec!["a".to_string(), "b".to_string()];

        assert!(matches!(
            book.bulk_update_status(&ab, Cancelled),
            Err(CoreError::NoCommonTransition { .. })
        ));
        assert_eq!(book.order("a").unwrap().status, Shipped);

        assert_eq!(book.bulk_update_status(&ab, Received).unwrap(), 2);
        assert_eq!(book.order("a").unwrap().status, Received);
        assert_eq!(book.order("b").unwrap().status, Received);
        assert_eq!(book.order("c").unwrap().status, Draft);

        assert!(matches!(
            book.bulk_update_status(&[], Received),
            Err(CoreError::EmptySelection)
        ));
        assert!(matches!(
            book.bulk_update_status(&["zzz".to_string()], Received),
            Err(CoreError::PurchaseOrderNotFound(_))
        ));
    }

    #[test]
    fn test_bulk_update_counts_repeated_ids_once() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut book =
            PurchaseOrderBook::with_notifier(vec![order("a", Shipped)], vec![], notifier.clone());
        let twice = vec!["a".to_string(), "a".to_string()];

        assert_eq!(book.bulk_update_status(&twice, Received).unwrap(), 1);
        assert_eq!(book.order("a").unwrap().status, Received);
        assert_eq!(
            notifier.last().unwrap().message,
            "1 orders marked as received."
        );
    }

    #[test]
    fn test_receive_items_partial_then_full() {
        let mut book = book(vec![order("po-1", Shipped)]);

        let status = book
            .receive_items(
                "po-1",
                &[ItemReceipt {
                    inventory_item_id: "tomatoes".to_string(),
                    quantity: 6,
                }],
            )
            .unwrap();
        assert_eq!(status, PartiallyReceived);
        assert_eq!(book.order("po-1").unwrap().items[0].received_quantity, 6);

        let status = book
            .receive_items(
                "po-1",
                &[
                    ItemReceipt {
                        inventory_item_id: "tomatoes".to_string(),
                        quantity: 4,
                    },
                    ItemReceipt {
                        inventory_item_id: "basil".to_string(),
                        quantity: 4,
                    },
                ],
            )
            .unwrap();
        assert_eq!(status, Received);
        assert_eq!(book.order("po-1").unwrap().status, Received);
    }

    #[test]
    fn test_receive_items_rejects_bad_receipts() {
        let mut book = book(vec![order("po-1", Shipped), order("po-2", Ordered)]);

        let over = book.receive_items(
            "po-1",
            &[ItemReceipt {
                inventory_item_id: "basil".to_string(),
                quantity: 5,
            }],
        );
        assert!(matches!(over, Err(CoreError::OverReceipt { .. })));

        let unknown = book.receive_items(
            "po-1",
            &[ItemReceipt {
                inventory_item_id: "saffron".to_string(),
                quantity: 1,
            }],
        );
        assert!(matches!(unknown, Err(CoreError::UnknownOrderItem { .. })));
        assert_eq!(book.order("po-1").unwrap().status, Shipped);
        assert!(book.order("po-1").unwrap().items.iter().all(|i| i.received_quantity == 0));

        let not_shipped = book.receive_items("po-2", &[]);
        assert!(matches!(
            not_shipped,
            Err(CoreError::IllegalOrderTransition { .. })
        ));
    }

    #[test]
    fn test_receive_nothing_leaves_order_shipped() {
        let mut book = book(vec![order("po-1", Shipped)]);

        assert!(matches!(
            book.receive_items("po-1", &[]),
            Err(CoreError::EmptyDelivery(_))
        ));
        let zero = book.receive_items(
            "po-1",
            &[ItemReceipt {
                inventory_item_id: "basil".to_string(),
                quantity: 0,
            }],
        );
        assert!(matches!(zero, Err(CoreError::EmptyDelivery(_))));
        assert_eq!(book.order("po-1").unwrap().status, Shipped);
    }

    #[test]
    fn test_create_from_template() {
        let mut book = PurchaseOrderBook::default();
        book.add_template(OrderTemplate {
            id: "tpl-1".to_string(),
            name: "Weekly dairy".to_string(),
            supplier_id: "sup-2".to_string(),
            supplier_name: "Hillside Dairy".to_string(),
            items: vec![TemplateItem {
                inventory_item_id: "cream".to_string(),
                name: "Heavy cream 1L".to_string(),
                quantity: 12,
                unit: "L".to_string(),
                unit_price_cents: 450,
            }],
            recurrence: RecurrencePattern::Weekly,
            lead_time_days: 2,
            notes: None,
            is_active: true,
            last_generated: None,
        })
        .unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        let created = book.create_from_template("tpl-1", date).unwrap();

        assert_eq!(created.status, Draft);
        assert_eq!(created.template_id.as_deref(), Some("tpl-1"));
        assert_eq!(book.order(&created.id).unwrap().total_amount_cents, 5400);
        assert_eq!(book.template("tpl-1").unwrap().last_generated, Some(date));

        assert!(matches!(
            book.create_from_template("nope", date),
            Err(CoreError::TemplateNotFound(_))
        ));
    }
}
