use std::process::exit;
use std::time::Instant;

use rustop::opts;

use netspan::graph::{compare, kruskal, prim, MstResult};
use netspan::input::{read_edge_file, WeightPolicy};

fn main() {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Compare Kruskal's and Prim's minimum spanning trees over an edge file and report the savings.";
        opt weights:String="required".to_string(),
            desc:"Weight policy for input rows: required, random or unit.";
        opt cost_per_meter:f64=2.0,
            desc:"Monetary cost per unit of edge weight.";
        opt start:usize=0,
            desc:"Start vertex for Prim's algorithm (dense index).";
        param file:String,
            desc:"Whitespace-delimited edge file: node1 node2 [weight].";
    }
    .parse_or_exit();

    let policy: WeightPolicy = match args.weights.parse() {
        Ok(policy) => policy,
        Err(err) => {
            eprintln!("{}", err);
            exit(2);
        }
    };

    let data = match read_edge_file(&args.file, policy) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("error reading '{}': {}", args.file, err);
            exit(1);
        }
    };

    let num_vertices = data.num_vertices();
    println!(
        "Loaded {} vertices and {} edges.",
        num_vertices,
        data.edges.len()
    );

    let adjacency = match data.adjacency() {
        Ok(adjacency) => adjacency,
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        }
    };

    let clock = Instant::now();
    let kruskal_result = run_engine(kruskal::minimum_spanning_tree(num_vertices, &data.edges));
    let kruskal_seconds = clock.elapsed().as_secs_f64();

    let clock = Instant::now();
    let prim_result = run_engine(prim::minimum_spanning_tree(&adjacency, args.start));
    let prim_seconds = clock.elapsed().as_secs_f64();

    println!("\n--- MST comparison ---");
    println!("{}", "=".repeat(44));
    println!("Original network cost: {:.2} m", data.original_total_weight);
    println!("{}", "-".repeat(44));
    println!("Kruskal's algorithm:");
    println!(
        "  MST cost: {:.2} m ({} edges)",
        kruskal_result.total_cost,
        kruskal_result.edges.len()
    );
    println!("  Wall clock: {:.6} s", kruskal_seconds);
    println!("{}", "-".repeat(44));
    println!("Prim's algorithm:");
    println!(
        "  MST cost: {:.2} m ({} edges)",
        prim_result.total_cost,
        prim_result.edges.len()
    );
    println!("  Wall clock: {:.6} s", prim_seconds);
    println!("{}", "=".repeat(44));

    if !kruskal_result.connected || !prim_result.connected {
        println!(
            "Warning: the graph is disconnected; results describe partial forests ({} of {} edges found).",
            kruskal_result.edges.len(),
            num_vertices.saturating_sub(1)
        );
    }

    match compare::validate(&kruskal_result, &prim_result) {
        compare::Verdict::Match => {
            println!("Validation: both algorithms found the same MST cost.");
        }
        compare::Verdict::Mismatch {
            kruskal_cost,
            prim_cost,
        } => {
            println!(
                "Validation: MST costs differ (Kruskal {:.2}, Prim {:.2}); check for disconnected components.",
                kruskal_cost, prim_cost
            );
        }
    }

    let savings = compare::savings(
        data.original_total_weight,
        kruskal_result.total_cost,
        args.cost_per_meter,
    );
    println!(
        "\nTotal savings with the MST: {:.2} m ({:.2}%)",
        savings.absolute, savings.percent
    );
    println!("Monetary savings: $ {:.2}", savings.monetary);
}

fn run_engine(result: netspan::Result<MstResult<f64>>) -> MstResult<f64> {
    match result {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        }
    }
}
