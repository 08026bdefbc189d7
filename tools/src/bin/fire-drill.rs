use clap::Parser;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use gt4500_simulator::loadout::Loadout;
use gt4500_simulator::ship::{FiringMode, StoreSlot, Weapon};
use gt4500_simulator::torpedo_store::{Magazine, TorpedoStore};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Runs a GT4500 firing session and reports what left each store")]
struct Arguments {
    /// Loadout JSON file, defaults to the stock GT4500
    #[arg(short, long)]
    loadout: Option<PathBuf>,

    /// Base seed for misfires
    #[arg(short, long, default_value_t = 0)]
    seed: u32,

    #[arg(short, long, default_value_t = 20)]
    rounds: u32,

    #[arg(short, long, default_value = "single")]
    mode: FiringMode,

    #[arg(short, long, default_value = "torpedo")]
    weapon: Weapon,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("fire_drill=info"))
        .init();

    let args = Arguments::parse();

    let loadout = match &args.loadout {
        Some(path) => Loadout::load(path)?.apply_env(),
        None => Loadout::from_env(),
    };
    log::info!("Loadout: {:?}", loadout);

    let mut ship = loadout.build(args.seed);
    let mut hits = 0;
    for round in 0..args.rounds {
        if ship.fire(args.weapon, args.mode) {
            hits += 1;
        } else {
            log::info!(
                "Round {}: {} ({}) did not fire",
                round,
                args.weapon.name(),
                args.mode.name()
            );
        }
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Store",
        "Capacity",
        "Misfire Rate",
        "Fired",
        "Misfired",
        "Remaining",
    ]);
    let (primary, secondary) = ship.into_stores();
    for (slot, store) in [(StoreSlot::Primary, &primary), (StoreSlot::Secondary, &secondary)] {
        table.add_row(store_row(slot, store));
    }
    println!("{table}");
    println!("{}/{} rounds fired", hits, args.rounds);

    Ok(())
}

fn store_row(slot: StoreSlot, store: &Magazine) -> Vec<String> {
    vec![
        slot.name().to_string(),
        store.capacity().to_string(),
        format!("{:.2}", store.misfire_rate()),
        store.fired().to_string(),
        store.misfired().to_string(),
        store.torpedo_count().to_string(),
    ]
}
