//! # Sample Product Data
//!
//! The built-in ShopHub product catalog. Fourteen products across six
//! categories, with ratings, stock counts, and featured flags.
//!
//! Prices are stored in cents (a $299 product is 29_900), matching the
//! integer-money discipline in `shophub-core`.

use shophub_core::Product;

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    description: &str,
    price_cents: i64,
    image: &str,
    category: &str,
    rating: f32,
    featured: bool,
    stock: u32,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price_cents,
        image: image.to_string(),
        category: category.to_string(),
        rating,
        featured,
        stock,
    }
}

/// Returns the sample product catalog.
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Premium Wireless Headphones",
            "High-quality wireless headphones with noise cancellation and premium sound quality.",
            29_900,
            "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Electronics",
            4.8,
            true,
            50,
        ),
        product(
            2,
            "Smart Fitness Watch",
            "Track your health and fitness with this advanced smartwatch featuring heart rate monitoring.",
            24_900,
            "https://images.pexels.com/photos/437037/pexels-photo-437037.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Electronics",
            4.6,
            true,
            30,
        ),
        product(
            3,
            "Organic Cotton T-Shirt",
            "Comfortable and sustainable organic cotton t-shirt available in multiple colors.",
            2_900,
            "https://images.pexels.com/photos/996329/pexels-photo-996329.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Fashion",
            4.4,
            false,
            100,
        ),
        product(
            4,
            "Modern Table Lamp",
            "Sleek and modern table lamp perfect for any contemporary home or office space.",
            8_900,
            "https://images.pexels.com/photos/1112597/pexels-photo-1112597.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Home & Garden",
            4.5,
            true,
            25,
        ),
        product(
            5,
            "Professional Camera",
            "High-resolution camera perfect for professional photography and content creation.",
            89_900,
            "https://images.pexels.com/photos/90946/pexels-photo-90946.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Electronics",
            4.9,
            true,
            15,
        ),
        product(
            6,
            "Yoga Mat Pro",
            "Premium yoga mat with excellent grip and cushioning for all your fitness needs.",
            4_900,
            "https://images.pexels.com/photos/4056723/pexels-photo-4056723.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Sports",
            4.7,
            false,
            75,
        ),
        product(
            7,
            "Designer Backpack",
            "Stylish and functional backpack perfect for work, travel, or everyday use.",
            7_900,
            "https://images.pexels.com/photos/2905238/pexels-photo-2905238.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Fashion",
            4.3,
            false,
            40,
        ),
        product(
            8,
            "Smart Home Speaker",
            "Voice-controlled smart speaker with premium sound quality and smart home integration.",
            14_900,
            "https://images.pexels.com/photos/4790594/pexels-photo-4790594.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Electronics",
            4.6,
            false,
            60,
        ),
        product(
            9,
            "Luxury Skincare Set",
            "Complete skincare routine with premium organic ingredients for radiant, healthy skin.",
            15_900,
            "https://images.pexels.com/photos/3685530/pexels-photo-3685530.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Beauty",
            4.8,
            true,
            35,
        ),
        product(
            10,
            "Ergonomic Office Chair",
            "Premium ergonomic office chair with lumbar support and adjustable height for maximum comfort.",
            39_900,
            "https://images.pexels.com/photos/1957477/pexels-photo-1957477.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Home & Garden",
            4.7,
            false,
            20,
        ),
        product(
            11,
            "Wireless Gaming Mouse",
            "High-precision wireless gaming mouse with customizable RGB lighting and programmable buttons.",
            8_900,
            "https://images.pexels.com/photos/2115257/pexels-photo-2115257.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Electronics",
            4.5,
            false,
            45,
        ),
        product(
            12,
            "Artisan Coffee Beans",
            "Premium single-origin coffee beans roasted to perfection for the ultimate coffee experience.",
            2_400,
            "https://images.pexels.com/photos/894695/pexels-photo-894695.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Food & Beverage",
            4.9,
            true,
            80,
        ),
        product(
            13,
            "Bluetooth Portable Speaker",
            "Waterproof portable speaker with 360-degree sound and 24-hour battery life.",
            12_900,
            "https://images.pexels.com/photos/1649771/pexels-photo-1649771.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Electronics",
            4.4,
            false,
            55,
        ),
        product(
            14,
            "Minimalist Wallet",
            "Sleek leather wallet with RFID protection and minimalist design for modern professionals.",
            5_900,
            "https://images.pexels.com/photos/1152077/pexels-photo-1152077.jpeg?auto=compress&cs=tinysrgb&w=500",
            "Fashion",
            4.6,
            false,
            65,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shophub_core::validation::validate_product;

    #[test]
    fn test_sample_data_is_well_formed() {
        let products = sample_products();
        assert_eq!(products.len(), 14);

        for product in &products {
            validate_product(product).unwrap();
        }
    }

    #[test]
    fn test_sample_ids_are_sequential() {
        let ids: Vec<u32> = sample_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=14).collect::<Vec<u32>>());
    }
}
