use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    /// Unit price in whole rupees.
    pub price: u32,
    pub quantity: u32,
    /// Stock limit; increments clamp here.
    pub max_quantity: Option<u32>,
}

/// Derived totals, recomputed from the items on every call. Never stored, so
/// they cannot go stale across a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub subtotal: u32,
    pub item_count: u32,
}

/// Ordered cart aggregate. Every present item has quantity >= 1; emptiness is
/// the collection length, with no separate flag to drift.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item, merging quantities when the id is already present.
    /// Insertion order is kept for the item list the surface renders.
    pub fn add(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            let merged = existing.quantity.saturating_add(item.quantity.max(1));
            existing.quantity = clamp_quantity(merged, existing.max_quantity);
        } else {
            let mut item = item;
            item.quantity = clamp_quantity(item.quantity, item.max_quantity);
            self.items.push(item);
        }
    }

    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            return Err(BookingError::ItemNotFound { id: id.to_owned() });
        }
        Ok(())
    }

    pub fn set_quantity(&mut self, id: &str, quantity: u32) -> Result<()> {
        let item = self.find_mut(id)?;
        item.quantity = clamp_quantity(quantity, item.max_quantity);
        Ok(())
    }

    pub fn increment(&mut self, id: &str) -> Result<()> {
        let item = self.find_mut(id)?;
        item.quantity = clamp_quantity(item.quantity.saturating_add(1), item.max_quantity);
        Ok(())
    }

    /// Guarded decrement. At quantity 1 this is a no-op; the item stays in
    /// the cart and removal is a separate, explicit operation.
    pub fn decrement(&mut self, id: &str) -> Result<()> {
        let item = self.find_mut(id)?;
        if item.quantity > 1 {
            item.quantity -= 1;
        }
        Ok(())
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals {
            subtotal: self.items.iter().fold(0u32, |acc, i| {
                acc.saturating_add(i.price.saturating_mul(i.quantity))
            }),
            item_count: self
                .items
                .iter()
                .fold(0u32, |acc, i| acc.saturating_add(i.quantity)),
        }
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut CartItem> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| BookingError::ItemNotFound { id: id.to_owned() })
    }
}

impl std::fmt::Display for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "Your cart is empty");
        }
        let totals = self.totals();
        writeln!(f, "Shopping Cart ({} items)", totals.item_count)?;
        for item in &self.items {
            writeln!(
                f,
                "{:<32} {:>3} × ₹{:<6} ₹{}",
                item.name,
                item.quantity,
                item.price,
                item.price.saturating_mul(item.quantity)
            )?;
        }
        write!(f, "Subtotal: ₹{}", totals.subtotal)
    }
}

fn clamp_quantity(quantity: u32, max: Option<u32>) -> u32 {
    let quantity = quantity.max(1);
    match max {
        Some(max) => quantity.min(max.max(1)),
        None => quantity,
    }
}
