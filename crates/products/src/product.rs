use core::any::Any;
use core::fmt;
use core::ops::Add;

use serde::{Deserialize, Serialize};

use storeroom_core::{
    Described, DomainError, DomainResult, Representation, diagnostics, log_construction,
};

/// Diagnostic emitted when a non-positive price is rejected.
pub const MSG_PRICE_REJECTED: &str = "Цена не должна быть нулевая или отрицательная";

/// Construction error for `quantity <= 0`.
pub const MSG_ZERO_QUANTITY: &str = "Товар с нулевым количеством не может быть добавлен";

/// Combination with something that is not a product.
pub const MSG_NOT_A_PRODUCT: &str = "Складывать можно только объекты Product или его наследников";

/// Combination of two products of different variants.
pub const MSG_KIND_MISMATCH: &str = "Складывать можно только товары одного класса продуктов";

/// Smartphone-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartphoneSpec {
    /// Free-text performance descriptor.
    pub efficiency: String,
    pub model: String,
    /// Built-in memory, in gigabytes.
    pub memory: u32,
    pub color: String,
}

impl SmartphoneSpec {
    pub fn new(
        efficiency: impl Into<String>,
        model: impl Into<String>,
        memory: u32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            efficiency: efficiency.into(),
            model: model.into(),
            memory,
            color: color.into(),
        }
    }
}

/// Lawn-grass-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LawnGrassSpec {
    /// Country of origin.
    pub country: String,
    /// Germination period, in days.
    pub germination_period: u32,
    pub color: String,
}

impl LawnGrassSpec {
    pub fn new(country: impl Into<String>, germination_period: u32, color: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            germination_period,
            color: color.into(),
        }
    }
}

/// Concrete product variant.
///
/// Variants are mutually exclusive; two products combine only when their tags
/// are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductKind {
    Generic,
    Smartphone(SmartphoneSpec),
    LawnGrass(LawnGrassSpec),
}

impl ProductKind {
    /// Concrete type name used in construction records and `Debug` output.
    pub fn type_name(&self) -> &'static str {
        match self {
            ProductKind::Generic => "Product",
            ProductKind::Smartphone(_) => "Smartphone",
            ProductKind::LawnGrass(_) => "LawnGrass",
        }
    }

    /// True when both kinds carry the same variant tag (payloads may differ).
    pub fn same_variant(&self, other: &ProductKind) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    fn with_fields<'a>(&'a self, repr: Representation<'a>) -> Representation<'a> {
        match self {
            ProductKind::Generic => repr,
            ProductKind::Smartphone(s) => repr
                .field("efficiency", &s.efficiency)
                .field("model", &s.model)
                .field("memory", &s.memory)
                .field("color", &s.color),
            ProductKind::LawnGrass(g) => repr
                .field("country", &g.country)
                .field("germination_period", &g.germination_period)
                .field("color", &g.color),
        }
    }
}

/// How constructor arguments appear in the construction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArgStyle {
    /// `Product("name", "description", 1.0, 2)`
    Positional,
    /// `Product(name="name", description="description", price=1.0, quantity=2)`
    Keyword,
}

/// Outcome of a price assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceUpdate {
    Applied,
    /// The value was not positive; the previous price was kept.
    Rejected,
}

/// A sellable item.
#[derive(Clone, PartialEq)]
pub struct Product {
    name: String,
    description: String,
    price: f64,
    quantity: i64,
    kind: ProductKind,
}

impl Product {
    /// Create a generic product.
    ///
    /// Fails with a validation error when `quantity <= 0`. A non-positive
    /// `price` is handled like [`Product::set_price`]: reported on the
    /// diagnostic stream and not stored, so the product's price is `0.0`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> DomainResult<Self> {
        Self::build(
            name.into(),
            description.into(),
            price,
            quantity,
            ProductKind::Generic,
            ArgStyle::Positional,
        )
    }

    /// Create a smartphone.
    pub fn smartphone(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        spec: SmartphoneSpec,
    ) -> DomainResult<Self> {
        Self::build(
            name.into(),
            description.into(),
            price,
            quantity,
            ProductKind::Smartphone(spec),
            ArgStyle::Positional,
        )
    }

    /// Create a lawn grass product.
    pub fn lawn_grass(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        spec: LawnGrassSpec,
    ) -> DomainResult<Self> {
        Self::build(
            name.into(),
            description.into(),
            price,
            quantity,
            ProductKind::LawnGrass(spec),
            ArgStyle::Positional,
        )
    }

    /// Shared construction path.
    ///
    /// Variants log only the base arguments, under their own type name.
    pub(crate) fn build(
        name: String,
        description: String,
        price: f64,
        quantity: i64,
        kind: ProductKind,
        style: ArgStyle,
    ) -> DomainResult<Self> {
        // The record is emitted before validation, so rejected attempts are visible too.
        let record = Representation::new(kind.type_name());
        log_construction(&match style {
            ArgStyle::Positional => record
                .arg(&name)
                .arg(&description)
                .arg(&price)
                .arg(&quantity),
            ArgStyle::Keyword => record
                .field("name", &name)
                .field("description", &description)
                .field("price", &price)
                .field("quantity", &quantity),
        });

        if quantity <= 0 {
            return Err(DomainError::validation(MSG_ZERO_QUANTITY));
        }

        let mut product = Self {
            name,
            description,
            price: 0.0,
            quantity,
            kind,
        };
        product.set_price(price);

        tracing::debug!(
            type_name = product.kind.type_name(),
            name = %product.name,
            quantity = product.quantity,
            "product constructed"
        );
        Ok(product)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Assign a new price.
    ///
    /// Non-positive values are rejected: the diagnostic line is emitted and
    /// the stored price stays as it was. This never fails.
    pub fn set_price(&mut self, value: f64) -> PriceUpdate {
        if value <= 0.0 {
            diagnostics::emit(MSG_PRICE_REJECTED);
            tracing::debug!(name = %self.name, rejected = value, kept = self.price, "price update rejected");
            return PriceUpdate::Rejected;
        }

        self.price = value;
        PriceUpdate::Applied
    }

    /// Quantity is only validated at construction time.
    pub fn set_quantity(&mut self, value: i64) {
        self.quantity = value;
    }

    /// `price * quantity`.
    pub fn inventory_value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Sum of both products' inventory values.
    ///
    /// Defined only for products of the same variant; a smartphone never
    /// combines with lawn grass or with a generic product.
    pub fn combine(&self, other: &Product) -> DomainResult<f64> {
        if !self.kind.same_variant(&other.kind) {
            return Err(DomainError::kind_mismatch(MSG_KIND_MISMATCH));
        }
        Ok(self.inventory_value() + other.inventory_value())
    }

    /// Like [`Product::combine`], for callers holding an untyped value.
    pub fn combine_any(&self, other: &dyn Any) -> DomainResult<f64> {
        let other = other
            .downcast_ref::<Product>()
            .ok_or_else(|| DomainError::not_a_product(MSG_NOT_A_PRODUCT))?;
        self.combine(other)
    }
}

impl Add<&Product> for &Product {
    type Output = DomainResult<f64>;

    fn add(self, other: &Product) -> Self::Output {
        self.combine(other)
    }
}

impl Described for Product {
    fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    fn representation(&self) -> Representation<'_> {
        self.kind.with_fields(
            Representation::new(self.kind.type_name())
                .arg(&self.name)
                .arg(&self.description)
                .arg(&self.price)
                .arg(&self.quantity),
        )
    }
}

impl fmt::Debug for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.representation(), f)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ProductKind::Generic => write!(f, "{}, ", self.name)?,
            ProductKind::Smartphone(s) => write!(
                f,
                "{} ({}, {} ГБ, {}), ",
                self.name, s.model, s.memory, s.color
            )?,
            ProductKind::LawnGrass(g) => write!(
                f,
                "{} ({}, {}, срок прорастания {} дней), ",
                self.name, g.color, g.country, g.germination_period
            )?,
        }
        write!(f, "{} руб. Остаток: {} шт.", self.price, self.quantity)
    }
}
