use clap::Parser;
use std::time::Duration;
use urbaneye::explorer::{Explorer, SearchStatus};
use urbaneye::geocoding::{
    format_coords, format_elevation, format_population, format_region, CityRecord,
    GeocodingClient, DEFAULT_COUNT,
};

/// UrbanEye: city search and map viewer.
///
/// Searches the Open-Meteo geocoding API for cities by name and prints the
/// matches with their details, or serves the browser map UI.
///
/// Examples:
///   urbaneye Berlin
///   urbaneye "San Francisco" --count 5
///   urbaneye Berlin --pick 1
///   urbaneye Berlin --json
///   urbaneye --serve --port 8080
#[derive(Parser)]
#[command(name = "urbaneye", version, about, long_about = None)]
struct Cli {
    /// City name to search for. Example: urbaneye Berlin
    #[arg(index = 1)]
    query: Option<String>,

    /// Maximum number of matches to request (1-100).
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    count: u32,

    /// Show the detail card for match N (1-based).
    #[arg(long)]
    pick: Option<usize>,

    /// Print the raw result records as JSON to stdout.
    #[arg(long)]
    json: bool,

    /// HTTP timeout in seconds for the geocoding call.
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Run the web UI server instead of a one-shot search.
    #[arg(long)]
    serve: bool,

    /// Host to bind the server to.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn main() {
    let cli = Cli::parse();

    let mut client = GeocodingClient::new();
    client.set_timeout(Duration::from_secs(cli.timeout));

    if cli.serve {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap_or_else(|e| {
                eprintln!("Error: Cannot start async runtime: {}", e);
                std::process::exit(1);
            });
        runtime.block_on(urbaneye::server::start(&cli.host, cli.port, client));
        return;
    }

    let Some(ref query) = cli.query else {
        eprintln!("Error: No city name given.");
        eprintln!();
        eprintln!("Usage:");
        eprintln!("  urbaneye Berlin");
        eprintln!("  urbaneye \"San Francisco\" --count 5");
        eprintln!("  urbaneye Berlin --pick 1");
        eprintln!("  urbaneye --serve");
        std::process::exit(1);
    };

    let mut explorer = Explorer::new();
    explorer.search(&client, query, cli.count);

    if let SearchStatus::Error(msg) = explorer.status() {
        eprintln!("Error: {}", msg);
        std::process::exit(1);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(explorer.results()).unwrap());
        return;
    }

    for (i, city) in explorer.results().iter().enumerate() {
        println!("{:3}. {}", i + 1, city.label());
        println!(
            "     Region: {} | Subregion: {}",
            format_region(city.admin1.as_deref()),
            format_region(city.admin2.as_deref()),
        );
        println!("     {}", format_coords(city.latitude, city.longitude));
    }

    if let Some(pick) = cli.pick {
        let Some(city) = explorer.results().get(pick.wrapping_sub(1)).cloned() else {
            eprintln!(
                "Error: --pick {} is out of range (1-{})",
                pick,
                explorer.results().len()
            );
            std::process::exit(1);
        };
        explorer.select(city.id);
        println!();
        print_detail_card(&city);
        let vp = explorer.viewport();
        println!(
            "   Map view:    {} @ zoom {}",
            format_coords(vp.lat, vp.lon),
            vp.zoom
        );
    }
}

fn print_detail_card(city: &CityRecord) {
    println!("\u{1F4CD} {}", city.label());
    println!("   Region:      {}", format_region(city.admin1.as_deref()));
    println!("   Subregion:   {}", format_region(city.admin2.as_deref()));
    println!(
        "   Coordinates: {}",
        format_coords(city.latitude, city.longitude)
    );
    println!("   Population:  {}", format_population(city.population));
    match (city.timezone.as_deref(), city.local_time()) {
        (Some(tz), Some(now)) => println!("   Timezone:    {} (now {})", tz, now),
        (Some(tz), None) => println!("   Timezone:    {}", tz),
        (None, _) => println!("   Timezone:    N/A"),
    }
    println!("   Elevation:   {}", format_elevation(city.elevation));
}
