use skipmap_core::SkipList;

fn main() {
    println!("SkipList Demo\n");

    let mut list = SkipList::new();
    println!("Created empty skip list");
    println!("Length: {}, Empty: {}\n", list.len(), list.is_empty());

    println!("Inserting elements...");
    for i in [5, 2, 8, 1, 9, 3, 7, 4, 6] {
        list.insert(i, format!("value_{}", i));
        println!("  Inserted key={}, value=value_{}", i, i);
    }
    println!("Length after inserts: {}\n", list.len());

    println!("Finding elements:");
    for i in [1, 5, 9, 10] {
        match list.find(&i) {
            Some(v) => println!("  find({}) = {}", i, v),
            None => println!("  find({}) = None", i),
        }
    }
    println!();

    println!("Updating key=5 with new value...");
    list.insert(5, "UPDATED_VALUE".to_string());
    if let Some(v) = list.find(&5) {
        println!("  find(5) = {}", v);
    }
    println!("  Length: {}\n", list.len());

    println!("Deleting elements:");
    for i in [2, 5, 8, 42] {
        match list.delete(&i) {
            Some(v) => println!("  Deleted key={}, value={}", i, v),
            None => println!("  Key={} not found", i),
        }
    }
    println!("Length after deletes: {}\n", list.len());

    println!("Final structure (level {}):", list.level());
    print!("{}", list.debug_dump());
}
