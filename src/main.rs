extern crate env_logger;
#[macro_use]
extern crate log;

use std::io::{stdin, stdout};

use anyhow::Result;
use clap::Parser;

mod cli;
mod fasta;
mod input;
mod sequence;
mod stats;

use fasta::FastaRecord;
use input::RunParams;

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let _cli = cli::Cli::parse();

    println!("fastagen v{}", cli::VERSION);

    let params = RunParams::from_reader(&mut stdin().lock(), &mut stdout())?;

    let mut rng = rand::thread_rng();

    let seq = sequence::generate(params.length, &mut rng);

    // statistics describe the sequence as generated, before the marker goes in
    let composition = stats::composition(&seq);

    let (tagged, _offset) = fasta::insert_marker(&seq, &params.marker, &mut rng)?;
    let record = FastaRecord {
        id: params.identifier,
        description: params.description,
        seq: tagged,
    };
    let filename = fasta::save(&record)?;

    info!("Saved record to {filename}");

    println!("Sequence composition:");
    println!("A: {:.1}%", composition.pc_a);
    println!("C: {:.1}%", composition.pc_c);
    println!("G: {:.1}%", composition.pc_g);
    println!("T: {:.1}%", composition.pc_t);
    // the combined figure sums the two rounded shares rather than recomputing
    // from raw counts
    println!("%CG: {:.1}", composition.pc_c + composition.pc_g);

    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
