//! Heap demo driver
//!
//! Inserts random values into a min- or max-heap, reports size and allocated
//! capacity, then extracts everything. A second extraction pass shows the
//! drained heap is empty, and a copy taken after that pass is drained too.
//!
//! ```bash
//! cargo run --bin heap_demo -- --count 101 --order max --seed 7
//! ```

use array_heaps::{Heap, MaxHeap, MinHeap};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    Min,
    Max,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct DemoArgs {
    /// Number of random values to insert; values are drawn from 0..count
    #[arg(short = 'n', long, default_value_t = 101)]
    count: u32,

    /// Heap ordering: min or max
    #[arg(short, long, value_enum, default_value_t = Order::Min)]
    order: Order,

    /// Initial capacity hint; defaults to count / 2
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Seed for reproducible input
    #[arg(short, long)]
    seed: Option<u64>,
}

fn extract_all_and_print<H: Heap<u32>>(heap: &mut H) {
    let mut line = Vec::with_capacity(heap.len());
    while let Some(value) = heap.extract_root() {
        line.push(value.to_string());
    }
    println!("{}\n", line.join(" "));
}

fn run<H: Heap<u32> + Clone>(args: &DemoArgs) {
    let capacity = args.capacity.unwrap_or(args.count as usize / 2);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut heap = H::with_capacity(capacity);

    println!("Insertions:");
    let mut line = Vec::with_capacity(args.count as usize);
    for _ in 0..args.count {
        let value = rng.gen_range(0..args.count.max(1));
        line.push(value.to_string());
        heap.insert(value);
    }
    println!("{}\n", line.join(" "));

    println!("Size = {}", heap.len());
    println!("Allocated = {}", heap.capacity());

    println!("\nExtractions ({:?}):\n", args.order);
    extract_all_and_print(&mut heap);
    extract_all_and_print(&mut heap);

    let mut second = heap.clone();
    extract_all_and_print(&mut second);
}

fn main() {
    let args = DemoArgs::parse();

    match args.order {
        Order::Min => run::<MinHeap<u32>>(&args),
        Order::Max => run::<MaxHeap<u32>>(&args),
    }
}
