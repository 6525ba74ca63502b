use business::domain::product::model::Product;

/// Catalog served when no catalog file is configured.
pub fn builtin_products() -> Vec<Product> {
    vec![
        Product::new(1, "Wireless Earbuds", "electronics", 59.99),
        Product::new(2, "Noise-Cancelling Headphones", "electronics", 199.99),
        Product::new(3, "USB-C Fast Charger", "electronics", 19.99),
        Product::new(4, "Smart Watch", "electronics", 149.0),
        Product::new(5, "Yoga Mat", "sports", 24.5),
        Product::new(6, "Trail Running Shoes", "sports", 89.99),
        Product::new(7, "Insulated Water Bottle", "sports", 14.99),
        Product::new(8, "Ceramic Coffee Mug", "home", 9.99),
        Product::new(9, "LED Desk Lamp", "home", 34.99),
        Product::new(10, "Science Fiction Novel", "books", 12.99),
        Product::new(11, "Cotton Hoodie", "clothing", 39.99),
        Product::new(12, "Laptop Backpack", "accessories", 49.99),
    ]
}
