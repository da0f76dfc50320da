use models::product::ProductInput;

fn demo(name: &str, description: &str, price: f64, category: &str, in_stock: bool) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        in_stock,
    }
}

/// The five demo products a fresh server starts with (three `Electronics`).
pub fn demo_products() -> Vec<ProductInput> {
    vec![
        demo(
            "Gaming Laptop",
            "High-performance laptop with RTX graphics",
            1299.99,
            "Electronics",
            true,
        ),
        demo(
            "Wireless Mouse",
            "Ergonomic wireless mouse with long battery life",
            29.99,
            "Electronics",
            true,
        ),
        demo("Coffee Mug", "Ceramic mug that keeps coffee warm", 12.5, "Kitchen", true),
        demo(
            "Smartphone",
            "Latest model smartphone with a great camera",
            799.0,
            "Electronics",
            false,
        ),
        demo("Running Shoes", "Lightweight shoes for daily training", 89.95, "Sports", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_products_pass_validation() {
        for p in demo_products() {
            let raw = serde_json::to_value(&p).unwrap();
            assert_eq!(ProductInput::from_json(&raw).unwrap(), p);
        }
    }

    #[test]
    fn three_electronics() {
        let n = demo_products().iter().filter(|p| p.category == "Electronics").count();
        assert_eq!(n, 3);
    }
}
