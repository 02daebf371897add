//! Cart aggregate: line items keyed by product id.

use crate::domain::catalog::ProductView;
use crate::domain::foundation::{ProductId, ValidationError};

/// One line of the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    product_id: ProductId,
    title: String,
    unit_price: f64,
    image_url: String,
    quantity: u32,
}

impl CartItem {
    /// Creates a line item. Quantity must be at least 1.
    pub fn new(
        product_id: ProductId,
        title: impl Into<String>,
        unit_price: f64,
        image_url: impl Into<String>,
        quantity: u32,
    ) -> Result<Self, ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::out_of_range(
                "quantity",
                1.0,
                f64::from(u32::MAX),
                0.0,
            ));
        }
        Ok(Self {
            product_id,
            title: title.into(),
            unit_price,
            image_url: image_url.into(),
            quantity,
        })
    }

    /// Line item for `quantity` units of a displayed product.
    pub fn from_view(product: &ProductView, quantity: u32) -> Result<Self, ValidationError> {
        Self::new(
            product.id.clone(),
            product.title.clone(),
            product.price,
            product.primary_image().url.clone(),
            quantity,
        )
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Ordered line items, at most one per product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item. An existing line for the same product has its quantity
    /// increased instead of a second line being created.
    pub fn add(&mut self, item: CartItem) {
        match self
            .items
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
            None => self.items.push(item),
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|line| &line.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}
