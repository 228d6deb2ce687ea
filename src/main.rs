use clap::Parser;
use log::info;
use rustflow_ek::config::NetworkConfig;
use rustflow_ek::max_flow::mocks::mock_clrs_network;
use rustflow_ek::max_flow::utils::flow_dot;
use std::path::PathBuf;

/// Maximum flow by Edmonds-Karp
#[derive(Parser, Debug)]
#[command(name = "rustflow-ek", version)]
struct Args {
    /// JSON network description. The CLRS example network is used if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// overrides the source of the input
    #[arg(long)]
    source: Option<usize>,
    /// overrides the sink of the input
    #[arg(long)]
    sink: Option<usize>,
    /// print the final flow graph in DOT
    #[arg(long)]
    dot: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (mut network, source, sink) = match &args.input {
        Some(path) => {
            let config = NetworkConfig::from_file(path)?;
            (config.to_network()?, config.source, config.sink)
        }
        None => (mock_clrs_network(), 0, 5),
    };
    let source = args.source.unwrap_or(source);
    let sink = args.sink.unwrap_or(sink);

    let total = network.max_flow_with(source, sink, |step, _| {
        info!(
            "#{} {:?} +{} (total {})",
            step.iteration, step.path, step.path_flow, step.total
        );
    })?;
    let cut = network.min_cut(source)?;
    println!("max flow: {}", total);
    println!(
        "min cut: {:?} | {:?} edges={:?}",
        cut.source_vertices(),
        cut.sink_vertices(),
        cut.edges()
    );
    if args.dot {
        println!("{}", flow_dot(&network));
    }
    Ok(())
}
