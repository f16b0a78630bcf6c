//! Chunk inspection tool.
//!
//! Generates the chunk at a coordinate and prints its room grid: stair
//! glyphs per room, door connectors between them.

use clap::Parser;
use delve_core::Direction;
use delve_core::dungeon::{CHUNK_SIDE, Chunk, Dungeon, DoorState, GenerationParams, Position};

/// Generate and print one dungeon chunk.
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about = "Deterministic dungeon chunk inspector", long_about = None)]
struct Args {
    /// World seed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Chunk x coordinate
    #[arg(short = 'x', long, default_value_t = 0)]
    chunk_x: i32,

    /// Chunk y coordinate
    #[arg(short = 'y', long, default_value_t = 0)]
    chunk_y: i32,

    /// Edge-keep probability override
    #[arg(short, long)]
    probability: Option<f32>,
}

/// Connector drawn between a room and its eastern neighbor.
fn horizontal(door: DoorState) -> &'static str {
    match door {
        DoorState::None => "   ",
        DoorState::Open => "---",
        DoorState::Closed => "-+-",
        DoorState::Stuck => "-x-",
        DoorState::Locked => "-*-",
    }
}

/// Connector drawn between a room and its southern neighbor.
fn vertical(door: DoorState) -> char {
    match door {
        DoorState::None => ' ',
        DoorState::Open => '|',
        DoorState::Closed => '+',
        DoorState::Stuck => 'x',
        DoorState::Locked => '*',
    }
}

fn print_chunk(chunk: &Chunk) {
    for y in 0..CHUNK_SIDE {
        let mut row = String::new();
        for x in 0..CHUNK_SIDE {
            let room = chunk.room(x, y);
            row.push(room.stairs().symbol());
            if x + 1 < CHUNK_SIDE {
                row.push_str(horizontal(room.door(Direction::East)));
            }
        }
        println!("  {row}");
        if y + 1 < CHUNK_SIDE {
            let mut row = String::new();
            for x in 0..CHUNK_SIDE {
                row.push(vertical(chunk.room(x, y).door(Direction::South)));
                if x + 1 < CHUNK_SIDE {
                    row.push_str("   ");
                }
            }
            println!("  {row}");
        }
    }
}

fn main() {
    let args = Args::parse();

    let mut params = GenerationParams::default();
    if let Some(p) = args.probability {
        params.set_connect_probability(p);
    }

    let mut dungeon = Dungeon::with_params(args.seed, params);
    dungeon.move_to_chunk(Position::new(args.chunk_x, args.chunk_y));

    println!(
        "seed {} chunk ({}, {})",
        dungeon.seed(),
        args.chunk_x,
        args.chunk_y
    );
    println!();
    print_chunk(dungeon.chunk());
    println!();
    println!("  rooms: . plain  > stairs down  < stairs up");
    println!("  doors: - | open  + closed  x stuck  * locked");
}
