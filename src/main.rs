use dualpath::{bfs_path, get_path, path_string, shortest_shortest_path, UnweightedGraph, WeightedGraph};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    dualpath::init_logging(&std::env::var("DUALPATH_LOG").unwrap_or_else(|_| "info".to_string()));

    println!("Dualpath v{}", dualpath::version());
    println!("==========================================");
    println!();

    demo_shortest_shortest_path()?;
    demo_bfs_path()?;
    Ok(())
}

fn demo_shortest_shortest_path() -> anyhow::Result<()> {
    println!("=== Demo 1: Weight first, then fewest edges ===");
    let graph: WeightedGraph<&str, u32> = vec![
        ("s", vec![("a", 1), ("c", 4)]),
        ("a", vec![("b", 2)]),
        ("b", vec![("c", 1), ("d", 4)]),
        ("c", vec![("d", 3)]),
        ("d", vec![]),
        ("e", vec![("d", 0)]),
    ]
    .into_iter()
    .collect();

    let table = shortest_shortest_path(&graph, &"s")?;
    for (vertex, cost) in table.iter() {
        match cost {
            Some(cost) => println!("  {} -> weight {}, {} edge(s)", vertex, cost.weight, cost.edges),
            None => println!("  {} -> unreachable", vertex),
        }
    }
    println!();
    Ok(())
}

fn demo_bfs_path() -> anyhow::Result<()> {
    println!("=== Demo 2: BFS parent tree ===");
    let graph: UnweightedGraph<&str> = vec![
        ("s", vec!["a", "b"]),
        ("a", vec!["b"]),
        ("b", vec!["c"]),
        ("c", vec!["a", "d"]),
        ("d", vec![]),
    ]
    .into_iter()
    .collect();

    let parents = bfs_path(&graph, &"s")?;
    for (vertex, parent) in parents.iter() {
        match parent {
            Some(parent) => println!("  {} <- {}", vertex, parent),
            None => println!("  {} (root or unreached)", vertex),
        }
    }
    let path = get_path(&parents, &"d");
    println!("  path to d (excluding d): {}", path_string(&path));
    Ok(())
}
