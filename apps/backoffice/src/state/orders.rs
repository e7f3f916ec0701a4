//! # Order State
//!
//! Shared handle to the purchase-order book. Same locking rules as
//! [`FloorState`](super::FloorState).

use std::sync::{Arc, Mutex};

use galley_core::PurchaseOrderBook;

#[derive(Debug, Clone, Default)]
pub struct OrderState {
    book: Arc<Mutex<PurchaseOrderBook>>,
}

impl OrderState {
    pub fn new(book: PurchaseOrderBook) -> Self {
        OrderState {
            book: Arc::new(Mutex::new(book)),
        }
    }

    pub fn with_orders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PurchaseOrderBook) -> R,
    {
        let book = self.book.lock().expect("Order book mutex poisoned");
        f(&book)
    }

    pub fn with_orders_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PurchaseOrderBook) -> R,
    {
        let mut book = self.book.lock().expect("Order book mutex poisoned");
        f(&mut book)
    }
}
