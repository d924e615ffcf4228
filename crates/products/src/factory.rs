//! Construction from untyped key/value input.
//!
//! Factory functions read the keys each variant needs and then go through the
//! shared construction path, so validation is identical to direct
//! construction. The construction record names each argument by key.

use serde_json::{Map, Value};

use storeroom_core::{DomainError, DomainResult};

use crate::product::{ArgStyle, LawnGrassSpec, Product, ProductKind, SmartphoneSpec};

/// Untyped factory input.
pub type ProductData = Map<String, Value>;

fn field<'a>(data: &'a ProductData, key: &str) -> DomainResult<&'a Value> {
    data.get(key).ok_or_else(|| DomainError::missing_field(key))
}

fn text(data: &ProductData, key: &str) -> DomainResult<String> {
    field(data, key)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| DomainError::validation(format!("field `{key}` must be a string")))
}

fn number(data: &ProductData, key: &str) -> DomainResult<f64> {
    field(data, key)?
        .as_f64()
        .ok_or_else(|| DomainError::validation(format!("field `{key}` must be a number")))
}

fn integer(data: &ProductData, key: &str) -> DomainResult<i64> {
    field(data, key)?
        .as_i64()
        .ok_or_else(|| DomainError::validation(format!("field `{key}` must be an integer")))
}

fn count(data: &ProductData, key: &str) -> DomainResult<u32> {
    field(data, key)?
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| {
            DomainError::validation(format!("field `{key}` must be a non-negative integer"))
        })
}

struct BaseFields {
    name: String,
    description: String,
    price: f64,
    quantity: i64,
}

impl BaseFields {
    fn read(data: &ProductData) -> DomainResult<Self> {
        Ok(Self {
            name: text(data, "name")?,
            description: text(data, "description")?,
            price: number(data, "price")?,
            quantity: integer(data, "quantity")?,
        })
    }

    /// Factory input arrives by key, so the construction record names each field.
    fn build(self, kind: ProductKind) -> DomainResult<Product> {
        Product::build(
            self.name,
            self.description,
            self.price,
            self.quantity,
            kind,
            ArgStyle::Keyword,
        )
    }
}

impl Product {
    /// Build a generic product from `name`, `description`, `price`, `quantity`.
    pub fn new_product(data: &ProductData) -> DomainResult<Self> {
        BaseFields::read(data)?.build(ProductKind::Generic)
    }

    /// Build a smartphone; additionally reads `efficiency`, `model`, `memory`, `color`.
    pub fn new_smartphone(data: &ProductData) -> DomainResult<Self> {
        let base = BaseFields::read(data)?;
        let spec = SmartphoneSpec {
            efficiency: text(data, "efficiency")?,
            model: text(data, "model")?,
            memory: count(data, "memory")?,
            color: text(data, "color")?,
        };
        base.build(ProductKind::Smartphone(spec))
    }

    /// Build lawn grass; additionally reads `country`, `germination_period`, `color`.
    pub fn new_lawn_grass(data: &ProductData) -> DomainResult<Self> {
        let base = BaseFields::read(data)?;
        let spec = LawnGrassSpec {
            country: text(data, "country")?,
            germination_period: count(data, "germination_period")?,
            color: text(data, "color")?,
        };
        base.build(ProductKind::LawnGrass(spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storeroom_core::diagnostics::capture;

    fn data(value: Value) -> ProductData {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn new_product_from_mapping() {
        let product = Product::new_product(&data(json!({
            "name": "Мышь",
            "description": "Игровая мышь",
            "price": 2499.90,
            "quantity": 50
        })))
        .unwrap();

        assert_eq!(product.kind(), &ProductKind::Generic);
        assert_eq!(product.name(), "Мышь");
        assert_eq!(product.price(), 2499.90);
        assert_eq!(product.quantity(), 50);
    }

    #[test]
    fn factory_record_names_each_field() {
        let input = data(json!({
            "name": "Мышь",
            "description": "Игровая мышь",
            "price": 2499.9,
            "quantity": 50
        }));

        let (product, lines) = capture(|| Product::new_product(&input));

        assert!(product.is_ok());
        assert_eq!(
            lines,
            vec![
                "Product(name=\"Мышь\", description=\"Игровая мышь\", price=2499.9, quantity=50)"
                    .to_string()
            ]
        );
    }

    #[test]
    fn variant_factory_record_uses_variant_name() {
        let input = data(json!({
            "name": "Газон", "description": "x", "price": 450.0, "quantity": 10,
            "country": "США", "germination_period": 5, "color": "Темно-зеленый"
        }));

        let (product, lines) = capture(|| Product::new_lawn_grass(&input));

        assert!(product.is_ok());
        assert_eq!(
            lines,
            vec!["LawnGrass(name=\"Газон\", description=\"x\", price=450.0, quantity=10)".to_string()]
        );
    }

    #[test]
    fn integer_price_is_accepted() {
        let product = Product::new_product(&data(json!({
            "name": "A", "description": "B", "price": 100, "quantity": 1
        })))
        .unwrap();
        assert_eq!(product.price(), 100.0);
    }

    #[test]
    fn missing_key_is_a_lookup_error() {
        let err = Product::new_product(&data(json!({
            "name": "Мышь",
            "price": 2499.90,
            "quantity": 50
        })))
        .unwrap_err();
        assert_eq!(err, DomainError::missing_field("description"));
    }

    #[test]
    fn mistyped_value_is_a_validation_error() {
        let err = Product::new_product(&data(json!({
            "name": "Мышь", "description": "x", "price": "дорого", "quantity": 50
        })))
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("price")));
    }

    #[test]
    fn factory_applies_construction_validation() {
        let err = Product::new_product(&data(json!({
            "name": "A", "description": "B", "price": 1.0, "quantity": 0
        })))
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn new_smartphone_reads_variant_fields() {
        let phone = Product::new_smartphone(&data(json!({
            "name": "Samsung Galaxy S23 Ultra",
            "description": "256GB, Серый цвет, 200MP камера",
            "price": 180000.0,
            "quantity": 5,
            "efficiency": "95.5",
            "model": "S23 Ultra",
            "memory": 256,
            "color": "Серый"
        })))
        .unwrap();

        match phone.kind() {
            ProductKind::Smartphone(spec) => {
                assert_eq!(spec.model, "S23 Ultra");
                assert_eq!(spec.memory, 256);
            }
            other => panic!("expected smartphone, got {other:?}"),
        }
    }

    #[test]
    fn new_lawn_grass_requires_variant_fields() {
        let err = Product::new_lawn_grass(&data(json!({
            "name": "Газон", "description": "x", "price": 450.0, "quantity": 10,
            "country": "США", "color": "Темно-зеленый"
        })))
        .unwrap_err();
        assert_eq!(err, DomainError::missing_field("germination_period"));
    }

    #[test]
    fn negative_memory_is_rejected() {
        let err = Product::new_smartphone(&data(json!({
            "name": "A", "description": "B", "price": 1.0, "quantity": 1,
            "efficiency": "x", "model": "y", "memory": -1, "color": "z"
        })))
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
