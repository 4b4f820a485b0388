use chart_normalize::{Granularity, Input, NormalizeConfig, Normalizer, Origin};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let input = Input::from_json_str("[[[2,2],[4,3],[6,5]],[[4,4],[8,7]]]")?;
    let granularity = Granularity::new(2.0)?;

    for origin in [Origin::DataMin, Origin::Zero] {
        let config = NormalizeConfig::new(granularity).with_origin(origin);
        let normalized = Normalizer::new(config).normalize(&input)?;
        let grid = normalized.grid();
        println!(
            "{origin:?}: {} slots from index {}",
            grid.slots(),
            grid.origin()
        );
        for (index, row) in normalized.rows().iter().enumerate() {
            println!("  series {index}: {row:?}");
        }
        if let Some(range) = normalized.value_range() {
            println!("  values span [{}, {}]", range.min, range.max);
        }
        println!("  {}", normalized.to_json_value()?);
    }
    Ok(())
}
