use chrono::Utc;

use lunar_phases::local::to_local_naive;
use lunar_phases::search::upcoming_phases;

fn main() {
    env_logger::init();

    let now = Utc::now();
    let events = match upcoming_phases(&now) {
        Ok(events) => events,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Upcoming Lunar Phases ===");
    println!("Reference: {}", now.format("%Y-%m-%d %H:%M:%S UTC"));
    println!();
    for event in events {
        println!(
            "{:<14} k={:<8.2} {}  (local {})",
            event.phase.to_string(),
            event.lunation_number(),
            event.instant.format("%Y-%m-%d %H:%M:%S UTC"),
            to_local_naive(&event.instant).format("%Y-%m-%d %H:%M")
        );
    }
}
