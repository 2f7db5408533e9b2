use freightsim::{Simulation, SimulationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    // Reference scenario with shortened delays so the demo finishes quickly.
    let config = SimulationConfig::default()
        .with_tick_ms(500)
        .with_transit_ms(1000)
        .with_run_duration_ms(10_000);

    println!("Starting distribution pipeline simulation");
    println!("Configuration:");
    for factory in &config.factories {
        println!(
            "  {} -> product {} ({} kg, {}), {} units/tick",
            factory.name,
            factory.product.name,
            factory.product.weight,
            factory.product.packaging,
            factory.rate
        );
    }
    println!("  Truck capacities: {:?}", config.truck_capacities);
    println!(
        "  Advisory warehouse capacity: {} units",
        config.warehouse_capacity()
    );
    println!(
        "  Tick: {} ms, transit: {} ms, run duration: {} ms",
        config.tick_ms, config.transit_ms, config.run_duration_ms
    );
    println!();

    let outcome = Simulation::new(config).run()?;

    println!();
    println!("{}", outcome.report);
    println!("Units produced: {}", outcome.units_produced);
    println!(
        "Units left in warehouse: {}",
        outcome.units_left_in_warehouse
    );

    Ok(())
}
