use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gsprobe")]
#[command(version = "0.1.0")]
#[command(about = "One-shot UDP status probe for game servers", long_about = None)]
pub struct Cli {
    #[arg(short, long, help = "The IPv4 address of the server")]
    pub address: Option<String>,

    #[arg(short, long, help = "The UDP port of the server")]
    pub port: Option<String>,

    #[arg(
        short,
        long,
        help = "Engine type: avalanche, goldsource, idtech2, idtech3, iw2.0, iw3.0, madness, quake, quakelive, realvirtuality, refractor, source, spark, unity3d, unreal, unreal2"
    )]
    pub engine: Option<String>,

    #[arg(short, long, help = "Display verbose output")]
    pub verbose: bool,

    #[arg(short, long, help = "Display debugging output")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_options() {
        let cli = Cli::try_parse_from([
            "gsprobe",
            "--address",
            "203.0.113.7",
            "--port",
            "27015",
            "--engine",
            "source",
        ])
        .unwrap();
        assert_eq!(cli.address.as_deref(), Some("203.0.113.7"));
        assert_eq!(cli.port.as_deref(), Some("27015"));
        assert_eq!(cli.engine.as_deref(), Some("source"));
        assert!(!cli.verbose);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_short_options_and_flags() {
        let cli = Cli::try_parse_from([
            "gsprobe", "-a", "203.0.113.7", "-p", "28960", "-e", "iw3.0", "-v", "-d",
        ])
        .unwrap();
        assert_eq!(cli.engine.as_deref(), Some("iw3.0"));
        assert!(cli.verbose);
        assert!(cli.debug);
    }

    #[test]
    fn all_options_default_to_absent() {
        let cli = Cli::try_parse_from(["gsprobe"]).unwrap();
        assert!(cli.address.is_none());
        assert!(cli.port.is_none());
        assert!(cli.engine.is_none());
    }
}
