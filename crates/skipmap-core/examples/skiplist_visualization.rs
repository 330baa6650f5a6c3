use skipmap_core::{Config, GeometricLevelGenerator, LevelGenerator, SkipList, MAX_LEVEL};
use std::collections::BTreeMap;

fn demonstrate_level_distribution() {
    println!("=== Level Distribution Analysis ===\n");
    println!("With p=0.5, we expect:");
    println!("  Level >= 0: 100% of nodes");
    println!("  Level >= 1: ~50% of nodes");
    println!("  Level >= 2: ~25% of nodes");
    println!("  Level >= 3: ~12.5% of nodes");
    println!("  etc.\n");

    let iterations = 100_000;
    let mut generator = GeometricLevelGenerator::seeded(MAX_LEVEL, 12345);
    let mut level_counts = BTreeMap::new();

    for _ in 0..iterations {
        *level_counts.entry(generator.next_level()).or_insert(0usize) += 1;
    }

    println!("Actual distribution from {} draws:", iterations);
    for (level, count) in &level_counts {
        let percentage = (*count as f64 / iterations as f64) * 100.0;
        let bar = "#".repeat((percentage / 2.0) as usize);
        println!("  Level {:2}: {:6} nodes ({:5.2}%) {}", level, count, percentage, bar);
    }
    println!();
}

fn show_structure(name: &str, list: &SkipList<u32, u32>) {
    println!("=== {} ===", name);
    println!("Total elements: {}, top level: {}\n", list.len(), list.level());
    print!("{}", list.debug_dump());
    println!();
}

fn main() {
    println!("=== SkipList Visualization Example ===\n");

    demonstrate_level_distribution();

    let config = Config::new().with_seed(7);
    let mut demo_list = match SkipList::with_config(config) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("failed to build list: {}", e);
            return;
        }
    };

    println!("Inserting: 5, 2, 8, 1, 9, 3");
    for &val in &[5, 2, 8, 1, 9, 3] {
        demo_list.insert(val, val * 100);
    }
    show_structure("After inserts", &demo_list);

    println!("Deleting: 2, 8");
    for &val in &[2, 8] {
        demo_list.delete(&val);
    }
    show_structure("After deletes", &demo_list);

    println!("=== Performance Characteristics ===\n");
    println!("{:>10} | {:>15}", "Size", "Expected height");
    println!("{:-<10}-+-{:-<15}", "", "");
    for size in [10u32, 100, 1000, 10000] {
        println!("{:>10} | {:>15.2}", size, (size as f64).log2());
    }
    println!();

    println!("With p=0.5:");
    println!("  - Average pointers per node: 2");
    println!("  - Expected search time: O(log n)");
    println!("  - Expected insert time: O(log n)");
    println!("  - Expected delete time: O(log n)");
}
