//! Builds the filter and item cards for a category and prints them.
//!
//! cargo run --example category_cards -- Crops "Oats
//! Peas
//! Beans
//! Barley"
use bloom_grid::{
    ActiveCells, BloomFilter, BloomFilterConfig, BloomFilterOps,
    BloomFilterStats, BulkBloomFilterOps, Card, Category, CategoryPlan,
    GRID_SIZE, PlanConfigBuilder,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let category = match (args.next(), args.next()) {
        (Some(name), Some(items)) => Category::parse(name, &items),
        _ => Category::default(),
    };

    let filter_config = BloomFilterConfig::from_env()?;
    let config = PlanConfigBuilder::default()
        .filter(filter_config.clone())
        .queries(vec!["Zucchini".to_string(), "Carrot".to_string()])
        .build()?;

    let plan = CategoryPlan::build(&category, &config)?;

    println!("Bloom filter '{}'", plan.name);
    println!("  Hash functions: {}", plan.num_hashes);
    println!("  Cells set: {:.1}%", plan.fill_ratio * 100.0);
    print_card(&plan.filter_card);
    for card in plan.item_cards.iter().chain(&plan.query_cards) {
        print_card(card);
    }

    let mut filter = BloomFilter::with_config(filter_config)?;
    filter.insert_all(&category.items)?;
    println!("\nQuerying items:");
    for query in ["Zucchini", "Carrot", "Lettuce"] {
        let answer = match filter.contains(query)? {
            false => "no",
            true if category.items.iter().any(|item| item == query) => "yes",
            true => "maybe (false positive)",
        };
        println!("  {query}: {answer}");
    }
    println!(
        "  {} cells active after {} inserts",
        filter.active_cells(),
        filter.insert_count()
    );
    println!(
        "  First active cell: {:?}",
        filter.active_coordinates().first()
    );

    println!("\n{}", plan.to_json()?);
    Ok(())
}

fn print_card(card: &Card) {
    let membership = match card.in_filter {
        Some(true) => ", maybe in filter",
        Some(false) => ", not in filter",
        None => "",
    };
    println!(
        "\n{} ({:?}, {} cells{membership})",
        card.label,
        card.kind,
        card.cells.len()
    );
    // Row 15 on top so the picture matches the printed card
    for y in (0..GRID_SIZE).rev() {
        let row: String = (0..GRID_SIZE)
            .map(|x| {
                if card.cells.iter().any(|c| c.x() == x && c.y() == y) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!("  {row}");
    }
}
