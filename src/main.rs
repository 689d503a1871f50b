use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gmap2osmand::options::{ConvertOptions, SplitType};
use gmap2osmand::{Conversion, fetch};

/// Export the KML data of a Google My Maps map and convert it to OSMAnd
/// style GPX files, including icon conversion.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The google map id - found between the mid= and & in the map url.
    /// Map must have sharing enabled.
    map_id: String,

    /// Path name for the output GPX files.
    gpx_path: PathBuf,

    /// Use this track width for all tracks, overriding values found in the
    /// KML file.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=24))]
    width: Option<u8>,

    /// Transparency value to use for all tracks, as a 2 digit hex value.
    /// 00 is fully transparent and FF is opaque.
    #[arg(short, long, default_value = "80")]
    transparency: String,

    /// Display directional arrows on tracks.
    #[arg(short, long)]
    arrows: bool,

    /// Display start and finish icons at the ends of tracks.
    #[arg(short, long)]
    ends: bool,

    /// Display distance or time splits along tracks.
    #[arg(short, long, value_enum, default_value_t = SplitType::NoSplit)]
    split: SplitType,

    /// Distance in miles or time in minutes between splits. Split type
    /// must also be set.
    #[arg(short, long, default_value_t = 1.0)]
    interval: f64,

    /// Create a nested folder under the GPX path for each layer found in
    /// the KML file.
    #[arg(short, long)]
    layers: bool,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();
    let opts = ConvertOptions {
        width: args.width,
        transparency: args.transparency,
        arrows: args.arrows,
        ends: args.ends,
        split: args.split,
        interval: args.interval,
        layers: args.layers,
    };

    info!(map_id = args.map_id.as_str(), "fetching map KML data");
    let kml = match fetch::fetch_map_kml(&args.map_id) {
        Ok(kml) => kml,
        Err(e) => {
            error!("{e}");
            process::exit(e.exit_code());
        }
    };

    let layers = args.layers;
    let mut conversion = Conversion::new(opts);
    let result = conversion.run(&kml, &args.gpx_path);
    let summary = conversion.summary();

    // Report whatever was written, even after a mid-run failure.
    println!("Total waypoint count: {}", summary.waypoints);
    println!("Total track count:    {}", summary.tracks);
    if layers {
        println!("Total layer count:    {}", summary.layers);
    }

    if let Err(e) = result {
        error!("{e}");
        process::exit(e.exit_code());
    }
}
