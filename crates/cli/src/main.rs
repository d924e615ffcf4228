//! Demo entry point: seeds a small catalog and prints it.

use anyhow::{Context, bail};
use serde_json::{Value, json};

use storeroom_catalog::{CatalogStats, Category};
use storeroom_products::{LawnGrassSpec, Product, ProductData, SmartphoneSpec};

fn mapping(value: Value) -> anyhow::Result<ProductData> {
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("product data must be an object, got {other}"),
    }
}

fn main() -> anyhow::Result<()> {
    storeroom_observability::init();

    let phone = Product::smartphone(
        "Samsung Galaxy S23 Ultra",
        "256GB, Серый цвет, 200MP камера",
        180000.0,
        5,
        SmartphoneSpec::new("95.5", "S23 Ultra", 256, "Серый"),
    )?;
    let iphone = Product::new_smartphone(&mapping(json!({
        "name": "Iphone 15",
        "description": "512GB, Gray space",
        "price": 210000.0,
        "quantity": 8,
        "efficiency": "98.2",
        "model": "15",
        "memory": 512,
        "color": "Gray space"
    }))?)
    .context("building smartphone from mapping")?;

    let grass = Product::lawn_grass(
        "Газонная трава",
        "Элитная трава для газона",
        500.0,
        20,
        LawnGrassSpec::new("Россия", 7, "Зеленый"),
    )?;

    let smartphones_total = (&phone + &iphone)?;
    tracing::info!(total = smartphones_total, "combined smartphone stock value");

    if let Err(err) = &phone + &grass {
        tracing::info!(error = %err, "smartphone and lawn grass do not combine");
    }

    let mut smartphones = Category::new(
        "Смартфоны",
        "Смартфоны, как средство не только коммуникации, но и получения дополнительных функций",
        [phone, iphone],
    );
    let garden = Category::new("Газонная трава", "Трава для дома и сада", [grass]);

    let mut headphones = Product::new_product(&mapping(json!({
        "name": "Наушники",
        "description": "Беспроводные",
        "price": 7999.5,
        "quantity": 25
    }))?)?;
    headphones.set_price(0.0);
    smartphones.add_product(headphones);

    for category in [&smartphones, &garden] {
        println!("{category}");
        println!("{}", category.products());
        println!("Средняя цена: {}", category.average_price());
    }
    println!("Суммарная стоимость смартфонов: {smartphones_total}");

    let stats = CatalogStats::global();
    tracing::info!(
        categories = stats.category_count(),
        products = stats.product_count(),
        "catalog seeded"
    );
    Ok(())
}
