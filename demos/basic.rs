use flakeid::Snowflake;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("debug")?.start()?;

    // Create a generator with machine ID 1
    let generator = Snowflake::new(1)?;

    // Generate some IDs
    let ids = [
        generator.snowflake_id()?,
        generator.snowflake_id()?,
        generator.snowflake_id()?,
    ];

    println!("Generated IDs (guaranteed to be monotonic):");
    for id in &ids {
        print_id(id, &generator)?;
    }

    // Short tokens for log correlation
    println!("\nUnique IDs:");
    println!("  default:        {}", generator.unique_id());
    println!("  8, no prefix:   {}", generator.unique_id_with(8, false));

    Ok(())
}

fn print_id(id: &str, generator: &Snowflake) -> Result<(), Box<dyn std::error::Error>> {
    let (since_epoch, machine, sequence) = generator.extract.parse(id)?;
    let datetime = generator
        .extract
        .datetime(id.parse()?)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default();

    println!(
        "  ID: {id}, Offset: {since_epoch} ms, Human date: {datetime}, Machine ID: {machine}, Sequence: {sequence}"
    );
    Ok(())
}
