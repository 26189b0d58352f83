use flakeid::{Snowflake, SnowflakeConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    // 2024-01-01 epoch, yield the thread every 16 spins while waiting
    let config = SnowflakeConfig::builder()
        .epoch(1_704_067_200_000)?
        .spin_yield_every(16)
        .build();

    let generator = Snowflake::with_config(21, config)?;

    println!("Generator configuration:");
    println!("  Epoch: {} ms", generator.config.epoch());
    println!("  Max machine ID: {}", generator.config.max_machine_id());
    println!("  Max sequence per ms: {}", generator.config.max_sequence());
    println!("  Max timestamp offset: {} ms", generator.config.max_timestamp());

    let id = generator.generate()?;
    let (ts, machine, seq) = generator.extract.decompose(id);

    println!("\nGenerated ID: {}", id);
    println!("Components:");
    println!("  Timestamp: {} ms since epoch", ts);
    println!("  Machine ID: {}", machine);
    println!("  Sequence: {}", seq);

    Ok(())
}
