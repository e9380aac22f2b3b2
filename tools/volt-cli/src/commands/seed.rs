//! `volt seed` - populate the store with sample catalog data.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use volt_commerce::catalog::{InventoryItem, Product};
use volt_commerce::services::ServiceProvider;
use volt_store::{Document, Store};

use crate::output::Output;

#[derive(Args)]
pub struct SeedArgs {
    /// Store snapshot file to seed
    #[arg(long, default_value = "volt.db.json")]
    store: PathBuf,

    /// Skip the confirmation prompt
    #[arg(long)]
    force: bool,
}

pub async fn run(args: SeedArgs, output: &Output) -> Result<()> {
    if !args.force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Replace catalog data in {}?",
                args.store.display()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            output.info("Aborted.");
            return Ok(());
        }
    }

    let store = Store::open(&args.store).await?;
    output.debug(&format!("store opened at {}", args.store.display()));

    store.clear_collection(Product::COLLECTION).await?;
    store.clear_collection(InventoryItem::COLLECTION).await?;
    store.clear_collection(ServiceProvider::COLLECTION).await?;

    let products = sample_products();
    let inventory = sample_inventory();
    let services = sample_services();

    let bar = ProgressBar::new((products.len() + inventory.len() + services.len()) as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner} seeding [{bar:30}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let product_coll = store.collection::<Product>();
    for product in &products {
        product_coll.save(product).await?;
        bar.inc(1);
    }

    let inventory_coll = store.collection::<InventoryItem>();
    for item in &inventory {
        inventory_coll.save(item).await?;
        bar.inc(1);
    }

    let service_coll = store.collection::<ServiceProvider>();
    for service in &services {
        service_coll.save(service).await?;
        bar.inc(1);
    }

    bar.finish_and_clear();

    output.success(&format!(
        "Seeded {} products, {} inventory items, {} service providers",
        products.len(),
        inventory.len(),
        services.len()
    ));

    Ok(())
}

fn sample_products() -> Vec<Product> {
    vec![
        Product::new(
            "Samsung Galaxy A54",
            "Mid-range phone with AMOLED screen",
            499.0,
            25,
            "Phones",
        )
        .with_brand("Samsung")
        .with_image_url("/images/galaxy-a54.png"),
        Product::new(
            "Dell XPS 13",
            "Powerful ultrabook laptop",
            1399.0,
            10,
            "Laptops",
        )
        .with_brand("Dell")
        .with_image_url("/images/xps-13.png"),
        Product::new(
            "Corsair Gaming Keyboard",
            "Mechanical RGB gaming keyboard",
            99.0,
            15,
            "Accessories",
        )
        .with_brand("Corsair")
        .with_image_url("/images/corsair-keyboard.png"),
        Product::new(
            "Logitech Wireless Mouse",
            "Comfortable wireless mouse with long battery life",
            29.99,
            30,
            "Accessories",
        )
        .with_brand("Logitech")
        .with_image_url("/images/logitech-mouse.png"),
        Product::new(
            "Sony WH-1000XM5",
            "Noise-cancelling over-ear headphones",
            349.0,
            12,
            "Audio",
        )
        .with_brand("Sony")
        .with_image_url("/images/wh-1000xm5.png"),
    ]
}

fn sample_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new("Dell Monitor 24\"", 149.99, 12)
            .with_brand("Dell")
            .with_description("Full HD IPS monitor with HDMI input"),
        InventoryItem::new("Logitech Wireless Mouse", 29.99, 30)
            .with_brand("Logitech")
            .with_description("Comfortable wireless mouse with long battery life"),
        InventoryItem::new("Corsair Gaming Keyboard", 99.0, 15)
            .with_brand("Corsair")
            .with_description("Mechanical RGB gaming keyboard"),
        InventoryItem::new("HP Ink Cartridge 901XL", 34.5, 25)
            .with_brand("HP")
            .with_description("High yield black ink cartridge"),
        InventoryItem::new("Lenovo ThinkPad Charger", 39.99, 18)
            .with_brand("Lenovo")
            .with_description("65W laptop charger compatible with ThinkPad series"),
    ]
}

fn sample_services() -> Vec<ServiceProvider> {
    vec![
        ServiceProvider::new("Ali Khan", "Wiring & Circuit Setup", "ali.wiring@example.com")
            .with_description("Expert in house wiring, circuit setup, and appliance installations.")
            .with_location("Lahore, Pakistan")
            .with_phone("0301-2345678"),
        ServiceProvider::new("Sara Tech", "Cable Management", "sara.cables@example.com")
            .with_description(
                "Specializes in professional cable routing and organization for homes and offices.",
            )
            .with_location("Karachi, Pakistan")
            .with_phone("0307-9876543"),
        ServiceProvider::new("PowerFix Co.", "Power Backup Installation", "support@powerfix.com")
            .with_description("UPS, inverter, and solar system setup and maintenance services.")
            .with_location("Islamabad, Pakistan")
            .with_phone("0333-4455667")
            .with_available(false),
    ]
}
