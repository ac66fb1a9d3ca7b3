use audiophile_api::{config::AppConfig, db::create_pool, models::Category};
use serde_json::json;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    replace_catalog(&pool).await?;

    let count: (i64,) = sqlx::query_as("SELECT count(*) FROM products")
        .fetch_one(&pool)
        .await?;
    println!("Total products in database: {}", count.0);
    Ok(())
}

async fn replace_catalog(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    // The seed replaces the whole catalog, it never appends.
    sqlx::query("TRUNCATE TABLE products")
        .execute(pool)
        .await?;

    let catalog = vec![
        (
            "XX99 Mark II Headphones",
            Category::Headphones,
            2999_i64,
            "/assets/product-xx99-mark-two-headphones/desktop/image-product.jpg",
            json!({
                "new": true,
                "description": "The new XX99 Mark II headphones is the pinnacle of pristine audio. It redefines your premium headphone experience by reproducing the balanced depth and precision of studio-quality sound.",
                "features": "Featuring a genuine leather head strap and premium earcups, these headphones deliver superior comfort for those who like to enjoy endless listening."
            }),
        ),
        (
            "XX99 Mark I Headphones",
            Category::Headphones,
            1750_i64,
            "/assets/product-xx99-mark-one-headphones/desktop/image-product.jpg",
            json!({
                "new": false,
                "description": "As the gold standard for headphones, the classic XX99 Mark I offers detailed and accurate audio reproduction for audiophiles, mixing engineers, and music aficionados alike in studios and on the go."
            }),
        ),
        (
            "XX59 Headphones",
            Category::Headphones,
            899_i64,
            "/assets/product-xx59-headphones/desktop/image-product.jpg",
            json!({
                "new": false,
                "description": "Enjoy your audio almost anywhere and customize it to your specific tastes with the XX59 headphones. The stylish yet durable versatile wireless headset is a brilliant companion at home or on the move."
            }),
        ),
        (
            "ZX9 Speaker",
            Category::Speakers,
            4500_i64,
            "/assets/product-zx9-speaker/desktop/image-product.jpg",
            json!({
                "new": true,
                "description": "Upgrade your sound system with the all new ZX9 active speaker. It's a bookshelf speaker system that offers truly wireless connectivity - creating new possibilities for more pleasing and practical audio setups."
            }),
        ),
        (
            "ZX7 Speaker",
            Category::Speakers,
            3500_i64,
            "/assets/product-zx7-speaker/desktop/image-product.jpg",
            json!({
                "new": false,
                "description": "Stream high quality sound wirelessly with minimal loss. The ZX7 bookshelf speaker uses high-end audiophile components that represents the top of the line powered speakers for home or studio use."
            }),
        ),
        (
            "YX1 Wireless Earphones",
            Category::Earphones,
            599_i64,
            "/assets/product-yx1-earphones/desktop/image-product.jpg",
            json!({
                "new": true,
                "description": "Tailor your listening experience with bespoke dynamic drivers from the new YX1 Wireless Earphones. Enjoy incredible high-fidelity sound even in noisy environments with its active noise cancellation feature."
            }),
        ),
    ];

    for (name, category, price, image, metadata) in catalog {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, category, price, image, metadata)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(category)
        .bind(price)
        .bind(image)
        .bind(metadata)
        .execute(pool)
        .await?;
    }

    println!("Seeded catalog");
    Ok(())
}
