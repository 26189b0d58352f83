use flakeid::Snowflake;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.start())
        .expect("logger");

    // Generators in one process share a single sequence authority, so even
    // two "machines" living side by side never collide
    let generators = [
        Arc::new(Snowflake::new(1).unwrap()),
        Arc::new(Snowflake::new(2).unwrap()),
    ];
    let mut handles = vec![];

    for thread_id in 0..4 {
        let generator = Arc::clone(&generators[thread_id % 2]);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();

            for i in 0..5 {
                let id = generator.generate().unwrap();
                let (ts, machine, seq) = generator.extract.decompose(id);

                println!(
                    "Thread {} generated ID {} (ts={}, machine={}, seq={}, trace={})",
                    thread_id,
                    i,
                    ts,
                    machine,
                    seq,
                    generator.unique_id()
                );

                assert!(ids.insert(id), "Duplicate ID generated!");
                thread::sleep(Duration::from_millis((thread_id as u64 * 3 + i) % 10));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());

    let mut ids: Vec<_> = all_ids.into_iter().collect();
    ids.sort_unstable();
    for i in 1..ids.len() {
        assert!(ids[i] > ids[i - 1], "IDs not monotonically increasing!");
    }
    println!("All IDs are unique and monotonically increasing!");
}
